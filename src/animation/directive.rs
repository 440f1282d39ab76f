use crate::{
    animation::ease::Ease,
    foundation::core::{Point, Vec2},
    foundation::error::{ReelError, ReelResult},
    scene::color::Color,
    scene::element::ElementId,
    scene::group::Group,
};

/// Default run time of a play batch, in seconds.
pub const DEFAULT_RUN_TIME: f64 = 1.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum WriteStyle {
    /// Outline is drawn, then filled.
    #[default]
    Stroke,
    /// Characters appear one at a time.
    LetterByLetter,
}

/// Property changes applied by [`Directive::Transform`]. Unset fields are left alone.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TransformSpec {
    pub scale: Option<f64>,
    pub rotate: Option<f64>,
    pub color: Option<Color>,
    /// Target overall opacity.
    pub opacity: Option<f64>,
    pub stroke_opacity: Option<f64>,
}

/// A transition bound to one or more elements; realized by an [`Engine`](crate::Engine).
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Directive {
    FadeIn { target: Group, shift: Vec2 },
    FadeOut { target: Group, shift: Vec2 },
    Create { target: Group },
    Write { target: Group, style: WriteStyle },
    MoveTo { target: Group, to: Point },
    MoveAlongPath { target: ElementId, path: ElementId },
    ChangeValue { target: ElementId, to: f64 },
    Transform { target: Group, spec: TransformSpec },
    LaggedStart { parts: Vec<Directive>, lag_ratio: f64 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
pub enum DirectiveKind {
    FadeIn,
    FadeOut,
    Create,
    Write,
    MoveTo,
    MoveAlongPath,
    ChangeValue,
    Transform,
    LaggedStart,
}

impl Directive {
    pub fn kind(&self) -> DirectiveKind {
        match self {
            Self::FadeIn { .. } => DirectiveKind::FadeIn,
            Self::FadeOut { .. } => DirectiveKind::FadeOut,
            Self::Create { .. } => DirectiveKind::Create,
            Self::Write { .. } => DirectiveKind::Write,
            Self::MoveTo { .. } => DirectiveKind::MoveTo,
            Self::MoveAlongPath { .. } => DirectiveKind::MoveAlongPath,
            Self::ChangeValue { .. } => DirectiveKind::ChangeValue,
            Self::Transform { .. } => DirectiveKind::Transform,
            Self::LaggedStart { .. } => DirectiveKind::LaggedStart,
        }
    }

    /// Every element the directive touches, nested parts included.
    pub fn targets(&self) -> Group {
        match self {
            Self::FadeIn { target, .. }
            | Self::FadeOut { target, .. }
            | Self::Create { target }
            | Self::Write { target, .. }
            | Self::MoveTo { target, .. }
            | Self::Transform { target, .. } => target.clone(),
            Self::MoveAlongPath { target, .. } | Self::ChangeValue { target, .. } => {
                Group::from(*target)
            }
            Self::LaggedStart { parts, .. } => {
                let mut out = Group::new();
                for p in parts {
                    out.extend(&p.targets());
                }
                out
            }
        }
    }

    pub fn validate(&self) -> ReelResult<()> {
        match self {
            Self::FadeIn { target, shift } | Self::FadeOut { target, shift } => {
                non_empty(target)?;
                if !shift.is_finite() {
                    return Err(ReelError::animation("fade shift must be finite"));
                }
            }
            Self::Create { target } | Self::Write { target, .. } => non_empty(target)?,
            Self::MoveTo { target, to } => {
                non_empty(target)?;
                if !to.is_finite() {
                    return Err(ReelError::animation("move target must be finite"));
                }
            }
            Self::MoveAlongPath { target, path } => {
                if target == path {
                    return Err(ReelError::animation("an element cannot follow itself"));
                }
            }
            Self::ChangeValue { to, .. } => {
                if !to.is_finite() {
                    return Err(ReelError::animation("value target must be finite"));
                }
            }
            Self::Transform { target, spec } => {
                non_empty(target)?;
                if let Some(s) = spec.scale
                    && (!s.is_finite() || s <= 0.0)
                {
                    return Err(ReelError::animation("transform scale must be > 0"));
                }
                if spec.rotate.is_some_and(|r| !r.is_finite()) {
                    return Err(ReelError::animation("transform rotation must be finite"));
                }
                for o in [spec.opacity, spec.stroke_opacity].into_iter().flatten() {
                    if !(0.0..=1.0).contains(&o) {
                        return Err(ReelError::animation(format!(
                            "transform opacity must be in [0, 1], got {o}"
                        )));
                    }
                }
            }
            Self::LaggedStart { parts, lag_ratio } => {
                if parts.is_empty() {
                    return Err(ReelError::animation("lagged start needs at least one part"));
                }
                if !lag_ratio.is_finite() || *lag_ratio < 0.0 {
                    return Err(ReelError::animation("lag ratio must be >= 0"));
                }
                for p in parts {
                    p.validate()?;
                }
            }
        }
        Ok(())
    }
}

fn non_empty(target: &Group) -> ReelResult<()> {
    if target.is_empty() {
        return Err(ReelError::animation("directive target group is empty"));
    }
    Ok(())
}

/// A batch of directives realized together: same start, one run time, one ease.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Play {
    pub directives: Vec<Directive>,
    pub run_time: f64,
    pub ease: Ease,
}

impl Play {
    pub fn new(directives: impl IntoIterator<Item = Directive>) -> Self {
        Self {
            directives: directives.into_iter().collect(),
            run_time: DEFAULT_RUN_TIME,
            ease: Ease::default(),
        }
    }

    pub fn one(directive: Directive) -> Self {
        Self::new([directive])
    }

    pub fn run_time(mut self, secs: f64) -> Self {
        self.run_time = secs;
        self
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    pub fn validate(&self) -> ReelResult<()> {
        if self.directives.is_empty() {
            return Err(ReelError::animation("play batch has no directives"));
        }
        if !self.run_time.is_finite() || self.run_time <= 0.0 {
            return Err(ReelError::animation(format!(
                "run time must be finite and > 0, got {}",
                self.run_time
            )));
        }
        for d in &self.directives {
            d.validate()?;
        }
        Ok(())
    }
}

/// Fractional windows `[start, end]` of each lagged part inside its batch.
///
/// With `n` parts and lag ratio `L`, every part lasts `d = 1 / (1 + (n - 1) L)` and part `i`
/// starts at `i · L · d`, so the last part ends exactly at 1.
pub fn lagged_windows(n: usize, lag_ratio: f64) -> Vec<(f64, f64)> {
    if n == 0 {
        return Vec::new();
    }
    let d = 1.0 / (1.0 + (n as f64 - 1.0) * lag_ratio);
    (0..n)
        .map(|i| {
            let start = i as f64 * lag_ratio * d;
            (start, (start + d).min(1.0))
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/animation/directive.rs"]
mod tests;
