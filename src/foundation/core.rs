use crate::foundation::error::{ReelError, ReelResult};

pub use kurbo::{Point, Rect, Vec2};

/// Unit vector pointing up in scene space (y grows upward).
pub const UP: Vec2 = Vec2::new(0.0, 1.0);
/// Unit vector pointing down in scene space.
pub const DOWN: Vec2 = Vec2::new(0.0, -1.0);
/// Unit vector pointing left in scene space.
pub const LEFT: Vec2 = Vec2::new(-1.0, 0.0);
/// Unit vector pointing right in scene space.
pub const RIGHT: Vec2 = Vec2::new(1.0, 0.0);

/// Scene height in scene units; width follows the canvas aspect ratio.
pub const FRAME_HEIGHT_UNITS: f64 = 8.0;

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FrameRange {
    pub start: FrameIndex,
    pub end: FrameIndex, // exclusive
}

impl FrameRange {
    pub fn new(start: FrameIndex, end: FrameIndex) -> ReelResult<Self> {
        if start.0 > end.0 {
            return Err(ReelError::validation("FrameRange start must be <= end"));
        }
        Ok(Self { start, end })
    }

    pub fn len_frames(self) -> u64 {
        self.end.0.saturating_sub(self.start.0)
    }

    pub fn is_empty(self) -> bool {
        self.start.0 == self.end.0
    }

    pub fn contains(self, f: FrameIndex) -> bool {
        self.start.0 <= f.0 && f.0 < self.end.0
    }

    /// True when `other` lies entirely inside `self`.
    pub fn covers(self, other: FrameRange) -> bool {
        self.start.0 <= other.start.0 && other.end.0 <= self.end.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    pub num: u32,
    pub den: u32, // must be > 0
}

impl Fps {
    pub fn new(num: u32, den: u32) -> ReelResult<Self> {
        if den == 0 {
            return Err(ReelError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(ReelError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    pub fn frames_to_secs(self, frames: u64) -> f64 {
        (frames as f64) * f64::from(self.den) / f64::from(self.num)
    }

    /// Frame count for a run time; every non-zero duration occupies at least one frame.
    pub fn secs_to_frames(self, secs: f64) -> ReelResult<u64> {
        if !secs.is_finite() || secs < 0.0 {
            return Err(ReelError::validation(format!(
                "duration must be finite and >= 0, got {secs}"
            )));
        }
        if secs == 0.0 {
            return Ok(0);
        }
        Ok(((secs * self.as_f64()).round() as u64).max(1))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    /// Visible area in scene units, centered on the origin.
    pub fn frame_size(self) -> FrameSize {
        let aspect = f64::from(self.width) / f64::from(self.height.max(1));
        FrameSize {
            width: FRAME_HEIGHT_UNITS * aspect,
            height: FRAME_HEIGHT_UNITS,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FrameSize {
    pub width: f64,
    pub height: f64,
}

impl FrameSize {
    pub fn rect(self) -> Rect {
        Rect::from_center_size(Point::ORIGIN, (self.width, self.height))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
