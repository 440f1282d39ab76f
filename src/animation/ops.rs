use crate::{
    animation::directive::{Directive, TransformSpec, WriteStyle},
    foundation::core::{Point, Vec2},
    scene::color::Color,
    scene::element::ElementId,
    scene::group::Group,
};

pub fn fade_in(target: impl Into<Group>) -> Directive {
    fade_in_shift(target, Vec2::ZERO)
}

/// Fade in while sliding by `shift` into the element's resting position.
pub fn fade_in_shift(target: impl Into<Group>, shift: Vec2) -> Directive {
    Directive::FadeIn {
        target: target.into(),
        shift,
    }
}

pub fn fade_out(target: impl Into<Group>) -> Directive {
    fade_out_shift(target, Vec2::ZERO)
}

pub fn fade_out_shift(target: impl Into<Group>, shift: Vec2) -> Directive {
    Directive::FadeOut {
        target: target.into(),
        shift,
    }
}

pub fn create(target: impl Into<Group>) -> Directive {
    Directive::Create {
        target: target.into(),
    }
}

pub fn write(target: impl Into<Group>) -> Directive {
    Directive::Write {
        target: target.into(),
        style: WriteStyle::Stroke,
    }
}

pub fn type_letters(target: impl Into<Group>) -> Directive {
    Directive::Write {
        target: target.into(),
        style: WriteStyle::LetterByLetter,
    }
}

pub fn move_to(target: impl Into<Group>, to: Point) -> Directive {
    Directive::MoveTo {
        target: target.into(),
        to,
    }
}

pub fn move_along_path(target: ElementId, path: ElementId) -> Directive {
    Directive::MoveAlongPath { target, path }
}

pub fn change_value(target: ElementId, to: f64) -> Directive {
    Directive::ChangeValue { target, to }
}

pub fn lagged(lag_ratio: f64, parts: impl IntoIterator<Item = Directive>) -> Directive {
    Directive::LaggedStart {
        parts: parts.into_iter().collect(),
        lag_ratio,
    }
}

/// Start a property transform on `target`; finish with [`Animate::done`].
pub fn animate(target: impl Into<Group>) -> Animate {
    Animate {
        target: target.into(),
        spec: TransformSpec::default(),
    }
}

pub struct Animate {
    target: Group,
    spec: TransformSpec,
}

impl Animate {
    pub fn scale(mut self, factor: f64) -> Self {
        self.spec.scale = Some(self.spec.scale.unwrap_or(1.0) * factor);
        self
    }

    pub fn rotate(mut self, radians: f64) -> Self {
        self.spec.rotate = Some(self.spec.rotate.unwrap_or(0.0) + radians);
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.spec.color = Some(color);
        self
    }

    /// Fade by `amount` (1 is fully transparent).
    pub fn fade(mut self, amount: f64) -> Self {
        self.spec.opacity = Some((1.0 - amount).clamp(0.0, 1.0));
        self
    }

    pub fn stroke_opacity(mut self, opacity: f64) -> Self {
        self.spec.stroke_opacity = Some(opacity);
        self
    }

    pub fn done(self) -> Directive {
        Directive::Transform {
            target: self.target,
            spec: self.spec,
        }
    }
}
