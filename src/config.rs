use std::{io::Read, path::Path};

use crate::{
    foundation::core::{Canvas, Fps},
    foundation::error::{ReelError, ReelResult},
    scene::color::{Color, palette},
};

/// Output presets. Each fixes a canvas size and frame rate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quality {
    Low,
    Medium,
    #[default]
    High,
    Production,
    #[serde(rename = "4k")]
    UltraHd,
}

impl Quality {
    pub fn canvas(self) -> Canvas {
        let (width, height) = match self {
            Self::Low => (854, 480),
            Self::Medium => (1280, 720),
            Self::High => (1920, 1080),
            Self::Production => (2560, 1440),
            Self::UltraHd => (3840, 2160),
        };
        Canvas { width, height }
    }

    pub fn fps(self) -> Fps {
        let num = match self {
            Self::Low => 15,
            Self::Medium => 30,
            Self::High | Self::Production | Self::UltraHd => 60,
        };
        Fps { num, den: 1 }
    }
}

impl std::str::FromStr for Quality {
    type Err = ReelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "production" => Ok(Self::Production),
            "4k" => Ok(Self::UltraHd),
            other => Err(ReelError::validation(format!(
                "unknown quality '{other}' (expected low, medium, high, production or 4k)"
            ))),
        }
    }
}

/// The backdrop rectangle that stays behind every scene.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BackgroundStyle {
    pub from: Color,
    pub to: Color,
    pub width: f64,
    pub height: f64,
    pub fill_opacity: f64,
}

impl Default for BackgroundStyle {
    fn default() -> Self {
        Self {
            from: palette::BACKDROP_DEEP,
            to: palette::BACKDROP_LIGHT,
            width: 1200.0,
            height: 800.0,
            fill_opacity: 0.15,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReelConfig {
    pub quality: Quality,
    /// Seeds the intro particle scatter.
    pub seed: u64,
    /// Hold between consecutive scenes.
    pub scene_pause_secs: f64,
    pub background: BackgroundStyle,
}

impl Default for ReelConfig {
    fn default() -> Self {
        Self {
            quality: Quality::default(),
            seed: 42,
            scene_pause_secs: 1.0,
            background: BackgroundStyle::default(),
        }
    }
}

impl ReelConfig {
    pub fn fps(&self) -> Fps {
        self.quality.fps()
    }

    pub fn canvas(&self) -> Canvas {
        self.quality.canvas()
    }

    pub fn from_json_reader<R: Read>(r: R) -> ReelResult<Self> {
        let cfg: Self = serde_json::from_reader(r)
            .map_err(|e| ReelError::serde(format!("parse config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_path(path: &Path) -> ReelResult<Self> {
        let f = std::fs::File::open(path)
            .map_err(|e| ReelError::validation(format!("open '{}': {e}", path.display())))?;
        Self::from_json_reader(std::io::BufReader::new(f))
    }

    pub fn validate(&self) -> ReelResult<()> {
        if !self.scene_pause_secs.is_finite() || self.scene_pause_secs <= 0.0 {
            return Err(ReelError::validation(format!(
                "scene_pause_secs must be finite and > 0, got {}",
                self.scene_pause_secs
            )));
        }
        let bg = &self.background;
        if !(bg.width.is_finite() && bg.width > 0.0 && bg.height.is_finite() && bg.height > 0.0)
        {
            return Err(ReelError::validation(
                "background width/height must be finite and > 0",
            ));
        }
        if !(0.0..=1.0).contains(&bg.fill_opacity) {
            return Err(ReelError::validation(format!(
                "background fill_opacity must be in [0, 1], got {}",
                bg.fill_opacity
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
