//! The portfolio dataset every scene draws its text and colors from.
//!
//! [`Portfolio::default`] holds the shipped reel; a JSON profile with the same shape can replace
//! it wholesale.

use std::{io::Read, path::Path};

use crate::{
    foundation::error::{ReelError, ReelResult},
    scene::color::{Color, palette},
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Portfolio {
    pub intro: Intro,
    pub education: Education,
    pub projects: Vec<Project>,
    pub skills: Vec<Skill>,
    pub interests: Vec<Interest>,
    pub website: Website,
    pub contact: Contact,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Intro {
    pub name: String,
    pub subtitle: String,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Education {
    pub university: String,
    pub degree: String,
    pub gpa: f64,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Project {
    pub name: String,
    pub description: String,
    pub year: String,
    pub color: Color,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Skill {
    pub name: String,
    /// Proficiency on a 0-100 scale.
    pub level: f64,
    pub color: Color,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Interest {
    pub title: String,
    pub description: String,
    pub color: Color,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Website {
    pub headline: String,
    pub features: Vec<Feature>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Feature {
    pub title: String,
    pub description: String,
    pub color: Color,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Contact {
    pub heading: String,
    pub lines: Vec<ContactLine>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContactLine {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

/// Most project dots the timeline line can hold before they overlap.
pub const MAX_PROJECTS: usize = 6;

impl Default for Portfolio {
    fn default() -> Self {
        fn project(name: &str, description: &str, year: &str, color: Color) -> Project {
            Project {
                name: name.to_owned(),
                description: description.to_owned(),
                year: year.to_owned(),
                color,
            }
        }
        fn skill(name: &str, level: f64, color: Color) -> Skill {
            Skill {
                name: name.to_owned(),
                level,
                color,
            }
        }

        Self {
            intro: Intro {
                name: "Atilla Çolak".to_owned(),
                subtitle: "Software Developer".to_owned(),
            },
            education: Education {
                university: "Delft University of Technology".to_owned(),
                degree: "BSc Computer Science and Engineering".to_owned(),
                gpa: 7.9,
            },
            projects: vec![
                project("ANDL", "Co-founder building responsible AI", "2024", palette::PINK),
                project("Hivello", "Data Analyst", "2024", palette::TEAL),
                project("My HeartSpace", "Lead Dev", "2024", palette::BLUE),
                project("Others", "Many Solo Projects", "2021-...", palette::PURPLE),
            ],
            skills: vec![
                skill("Web Dev", 95.0, palette::PINK),
                skill("Backend", 90.0, palette::TEAL),
                skill("Frontend", 90.0, palette::BLUE),
                skill("Data Analysis", 85.0, palette::PURPLE),
                skill("Systems", 75.0, palette::PINK),
                skill("AI/ML", 70.0, palette::TEAL),
            ],
            interests: vec![
                Interest {
                    title: "♟️ Chess".to_owned(),
                    description: "2300+ Online Rating".to_owned(),
                    color: palette::TEAL,
                },
                Interest {
                    title: "🎵 Music Production".to_owned(),
                    description: "Piano and Beatmaking".to_owned(),
                    color: palette::PINK,
                },
            ],
            website: Website {
                headline: "Visit atillas.co".to_owned(),
                features: vec![
                    Feature {
                        title: "📚 Book Summaries".to_owned(),
                        description: "Deep dives into tech & philosophy".to_owned(),
                        color: palette::TEAL,
                    },
                    Feature {
                        title: "💻 Project Showcase".to_owned(),
                        description: "Live demos & code explanations".to_owned(),
                        color: palette::PINK,
                    },
                    Feature {
                        title: "...".to_owned(),
                        description: "Whatever more I added since this video".to_owned(),
                        color: palette::BLUE,
                    },
                ],
            },
            contact: Contact {
                heading: "Let's Connect!".to_owned(),
                lines: vec![
                    ContactLine {
                        text: "atilla.colak@outlook.com".to_owned(),
                        color: None,
                    },
                    ContactLine {
                        text: "atillas.co".to_owned(),
                        color: Some(palette::BLUE),
                    },
                    ContactLine {
                        text: "github.com/atillaColak".to_owned(),
                        color: None,
                    },
                ],
            },
        }
    }
}

impl Portfolio {
    pub fn from_json_reader<R: Read>(r: R) -> ReelResult<Self> {
        let p: Self = serde_json::from_reader(r)
            .map_err(|e| ReelError::serde(format!("parse profile JSON: {e}")))?;
        p.validate()?;
        Ok(p)
    }

    pub fn from_path(path: &Path) -> ReelResult<Self> {
        let f = std::fs::File::open(path)
            .map_err(|e| ReelError::validation(format!("open '{}': {e}", path.display())))?;
        Self::from_json_reader(std::io::BufReader::new(f))
    }

    pub fn validate(&self) -> ReelResult<()> {
        fn text(what: &str, s: &str) -> ReelResult<()> {
            if s.trim().is_empty() {
                return Err(ReelError::validation(format!("{what} must not be empty")));
            }
            Ok(())
        }

        text("intro name", &self.intro.name)?;
        text("intro subtitle", &self.intro.subtitle)?;
        text("university", &self.education.university)?;
        text("degree", &self.education.degree)?;
        if !self.education.gpa.is_finite() || self.education.gpa < 0.0 {
            return Err(ReelError::validation(format!(
                "gpa must be finite and >= 0, got {}",
                self.education.gpa
            )));
        }

        if self.projects.is_empty() || self.projects.len() > MAX_PROJECTS {
            return Err(ReelError::validation(format!(
                "projects must hold 1..={MAX_PROJECTS} entries, got {}",
                self.projects.len()
            )));
        }
        for p in &self.projects {
            text("project name", &p.name)?;
            text("project description", &p.description)?;
            text("project year", &p.year)?;
        }

        if self.skills.is_empty() {
            return Err(ReelError::validation("skills must not be empty"));
        }
        for s in &self.skills {
            text("skill name", &s.name)?;
            if !(0.0..=100.0).contains(&s.level) {
                return Err(ReelError::validation(format!(
                    "skill '{}' level must be in [0, 100], got {}",
                    s.name, s.level
                )));
            }
        }

        if self.interests.is_empty() {
            return Err(ReelError::validation("interests must not be empty"));
        }
        for i in &self.interests {
            text("interest title", &i.title)?;
            text("interest description", &i.description)?;
        }

        text("website headline", &self.website.headline)?;
        if self.website.features.is_empty() {
            return Err(ReelError::validation("website features must not be empty"));
        }
        for f in &self.website.features {
            text("feature title", &f.title)?;
            text("feature description", &f.description)?;
        }

        text("contact heading", &self.contact.heading)?;
        for l in &self.contact.lines {
            text("contact line", &l.text)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/unit/content.rs"]
mod tests;
