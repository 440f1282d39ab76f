use std::{io::Read, path::Path};

use crate::{
    animation::anim::Track,
    animation::directive::{DirectiveKind, WriteStyle},
    animation::ease::Ease,
    foundation::core::{Canvas, Fps, FrameIndex, FrameRange, FrameSize, Point},
    foundation::error::{ReelError, ReelResult},
    scene::color::Paint,
    scene::element::{ElementId, Shape, Stroke},
};

/// Realized reel: every element that ever became visible, with its property tracks.
///
/// This is the hand-off artifact for a renderer. It is deterministic for a given content,
/// configuration and seed.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Timeline {
    pub fps: Fps,
    pub canvas: Canvas,
    pub frame_size: FrameSize,
    pub duration: FrameIndex, // total frames
    pub seed: u64,
    pub elements: Vec<ElementTimeline>,
    pub scenes: Vec<SceneSpan>,
    pub commands: Vec<CommandRecord>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ElementTimeline {
    pub id: ElementId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Scene that was open when the element first became visible.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scene: Option<String>,
    pub shape: Shape,
    pub fill_opacity: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke: Option<Stroke>,
    /// Frames during which the element is on stage.
    pub presence: FrameRange,
    #[serde(default)]
    pub write_style: Option<WriteStyle>,
    pub opacity: Track<f64>,
    pub center: Track<Point>,
    pub scale: Track<f64>,
    pub rotation: Track<f64>,
    /// Draw/reveal progress in `[0, 1]` for create and write directives.
    pub progress: Track<f64>,
    /// Displayed number for decimal elements.
    pub value: Track<f64>,
    pub paint: Track<Paint>,
    pub stroke_opacity: Track<f64>,
}

impl ElementTimeline {
    pub fn is_present(&self, f: FrameIndex) -> bool {
        self.presence.contains(f)
    }

    pub fn has_label(&self, label: &str) -> bool {
        self.label.as_deref() == Some(label)
    }

    pub fn validate(&self) -> ReelResult<()> {
        self.opacity.validate()?;
        self.center.validate()?;
        self.scale.validate()?;
        self.rotation.validate()?;
        self.progress.validate()?;
        self.value.validate()?;
        self.paint.validate()?;
        self.stroke_opacity.validate()
    }
}

/// Frames covered by one scene, from scope open until its fade-out returned.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SceneSpan {
    pub name: String,
    pub range: FrameRange,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CommandRecord {
    pub at: FrameIndex,
    pub frames: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scene: Option<String>,
    pub command: Command,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    Play {
        ease: Ease,
        directives: Vec<DirectiveRecord>,
    },
    Wait,
    Clear {
        targets: Vec<ElementId>,
    },
}

/// Leaf directive as realized, with its nested lagged windows flattened.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DirectiveRecord {
    pub kind: DirectiveKind,
    pub targets: Vec<ElementId>,
    pub range: FrameRange,
}

impl Timeline {
    pub fn from_json_reader<R: Read>(r: R) -> ReelResult<Self> {
        let tl: Self = serde_json::from_reader(r)
            .map_err(|e| ReelError::serde(format!("parse timeline JSON: {e}")))?;
        tl.validate()?;
        Ok(tl)
    }

    pub fn from_path(path: &Path) -> ReelResult<Self> {
        let f = std::fs::File::open(path)
            .map_err(|e| ReelError::validation(format!("open '{}': {e}", path.display())))?;
        Self::from_json_reader(std::io::BufReader::new(f))
    }

    pub fn to_json_pretty(&self) -> ReelResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ReelError::serde(format!("serialize timeline: {e}")))
    }

    pub fn element(&self, id: ElementId) -> Option<&ElementTimeline> {
        self.elements.iter().find(|e| e.id == id)
    }

    pub fn scene(&self, name: &str) -> Option<&SceneSpan> {
        self.scenes.iter().find(|s| s.name == name)
    }

    pub fn elements_in_scene<'a>(
        &'a self,
        name: &'a str,
    ) -> impl Iterator<Item = &'a ElementTimeline> + 'a {
        self.elements
            .iter()
            .filter(move |e| e.scene.as_deref() == Some(name))
    }

    pub fn commands_in_scene<'a>(
        &'a self,
        name: &'a str,
    ) -> impl Iterator<Item = &'a CommandRecord> + 'a {
        self.commands
            .iter()
            .filter(move |c| c.scene.as_deref() == Some(name))
    }

    pub fn validate(&self) -> ReelResult<()> {
        if self.fps.num == 0 || self.fps.den == 0 {
            return Err(ReelError::validation("fps must have num>0 and den>0"));
        }
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(ReelError::validation("canvas width/height must be > 0"));
        }
        if self.duration.0 == 0 {
            return Err(ReelError::validation("duration must be > 0 frames"));
        }

        let whole = FrameRange {
            start: FrameIndex(0),
            end: self.duration,
        };
        for el in &self.elements {
            if el.presence.start.0 > el.presence.end.0 {
                return Err(ReelError::validation(format!(
                    "element {} has invalid presence (start > end)",
                    el.id.0
                )));
            }
            if !whole.covers(el.presence) {
                return Err(ReelError::validation(format!(
                    "element {} presence exceeds timeline duration",
                    el.id.0
                )));
            }
            el.validate()?;
        }

        for pair in self.scenes.windows(2) {
            if pair[0].range.end.0 > pair[1].range.start.0 {
                return Err(ReelError::validation(format!(
                    "scenes '{}' and '{}' overlap",
                    pair[0].name, pair[1].name
                )));
            }
        }
        for span in &self.scenes {
            if !whole.covers(span.range) {
                return Err(ReelError::validation(format!(
                    "scene '{}' exceeds timeline duration",
                    span.name
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/model.rs"]
mod tests;
