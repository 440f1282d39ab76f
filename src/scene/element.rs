use crate::{
    foundation::core::{Point, Rect, Vec2},
    scene::color::{Color, Paint},
};

/// Arena index of an element inside a [`Stage`](crate::Stage).
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct ElementId(pub u32);

// Text metrics are estimated: one em is half a scene unit at 48pt, glyphs advance 0.55 em.
const UNITS_PER_POINT: f64 = 0.5 / 48.0;
const GLYPH_ADVANCE_EM: f64 = 0.55;
const LINE_HEIGHT_EM: f64 = 1.0;

const DEFAULT_STROKE_WIDTH: f64 = 4.0;
const DEFAULT_DOT_RADIUS: f64 = 0.08;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shape {
    Dot {
        radius: f64,
    },
    Circle {
        radius: f64,
    },
    /// Segment whose endpoints are `center ± delta / 2`.
    Line {
        delta: Vec2,
    },
    Rectangle {
        width: f64,
        height: f64,
        corner_radius: f64,
    },
    Text {
        text: String,
        font_size: f64,
        weight: FontWeight,
    },
    Decimal {
        value: f64,
        decimals: u8,
        font_size: f64,
    },
}

impl Shape {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Dot { .. } => "dot",
            Self::Circle { .. } => "circle",
            Self::Line { .. } => "line",
            Self::Rectangle { .. } => "rectangle",
            Self::Text { .. } => "text",
            Self::Decimal { .. } => "decimal",
        }
    }

    /// Unscaled, unrotated extent in scene units.
    fn extent(&self) -> Vec2 {
        match self {
            Self::Dot { radius } | Self::Circle { radius } => Vec2::new(radius * 2.0, radius * 2.0),
            Self::Line { delta } => Vec2::new(delta.x.abs(), delta.y.abs()),
            Self::Rectangle { width, height, .. } => Vec2::new(*width, *height),
            Self::Text {
                text, font_size, ..
            } => text_extent(text.chars().count(), *font_size),
            Self::Decimal {
                value,
                decimals,
                font_size,
            } => text_extent(format_decimal(*value, *decimals).chars().count(), *font_size),
        }
    }
}

fn text_extent(glyphs: usize, font_size: f64) -> Vec2 {
    let em = font_size * UNITS_PER_POINT;
    Vec2::new(glyphs as f64 * em * GLYPH_ADVANCE_EM, em * LINE_HEIGHT_EM)
}

pub fn format_decimal(value: f64, decimals: u8) -> String {
    format!("{value:.prec$}", prec = usize::from(decimals))
}

pub(crate) fn rotate_vec(v: Vec2, angle: f64) -> Vec2 {
    let (s, c) = angle.sin_cos();
    Vec2::new(v.x * c - v.y * s, v.x * s + v.y * c)
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Stroke {
    pub paint: Paint,
    pub width: f64,
    pub opacity: f64,
}

impl Default for Stroke {
    fn default() -> Self {
        Self {
            paint: Paint::default(),
            width: DEFAULT_STROKE_WIDTH,
            opacity: 1.0,
        }
    }
}

/// A shape, text or number with its presentation attributes.
///
/// Construction is pure data; nothing is visible until a directive puts it on stage.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Element {
    pub shape: Shape,
    pub center: Point,
    pub fill: Paint,
    pub fill_opacity: f64,
    pub stroke: Option<Stroke>,
    pub opacity: f64,
    pub scale: f64,
    pub rotation: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Element {
    fn filled(shape: Shape) -> Self {
        Self {
            shape,
            center: Point::ORIGIN,
            fill: Paint::default(),
            fill_opacity: 1.0,
            stroke: None,
            opacity: 1.0,
            scale: 1.0,
            rotation: 0.0,
            label: None,
        }
    }

    fn outlined(shape: Shape) -> Self {
        Self {
            fill_opacity: 0.0,
            stroke: Some(Stroke::default()),
            ..Self::filled(shape)
        }
    }

    pub fn dot() -> Self {
        Self::filled(Shape::Dot {
            radius: DEFAULT_DOT_RADIUS,
        })
    }

    pub fn dot_with_radius(radius: f64) -> Self {
        Self::filled(Shape::Dot { radius })
    }

    pub fn circle(radius: f64) -> Self {
        Self::outlined(Shape::Circle { radius })
    }

    pub fn line(from: Point, to: Point) -> Self {
        Self {
            center: from.midpoint(to),
            ..Self::outlined(Shape::Line { delta: to - from })
        }
    }

    pub fn rectangle(width: f64, height: f64) -> Self {
        Self::outlined(Shape::Rectangle {
            width,
            height,
            corner_radius: 0.0,
        })
    }

    pub fn rounded_rectangle(width: f64, height: f64, corner_radius: f64) -> Self {
        Self::outlined(Shape::Rectangle {
            width,
            height,
            corner_radius,
        })
    }

    pub fn text(text: impl Into<String>, font_size: f64) -> Self {
        Self::filled(Shape::Text {
            text: text.into(),
            font_size,
            weight: FontWeight::Normal,
        })
    }

    pub fn decimal(value: f64, decimals: u8, font_size: f64) -> Self {
        Self::filled(Shape::Decimal {
            value,
            decimals,
            font_size,
        })
    }

    pub fn at(mut self, center: Point) -> Self {
        self.center = center;
        self
    }

    pub fn bold(mut self) -> Self {
        if let Shape::Text { weight, .. } = &mut self.shape {
            *weight = FontWeight::Bold;
        }
        self
    }

    /// Solid color for both fill and stroke; fill opacity is left untouched.
    pub fn color(self, color: Color) -> Self {
        self.paint(Paint::Solid(color))
    }

    pub fn gradient(self, stops: impl IntoIterator<Item = Color>) -> Self {
        self.paint(Paint::gradient(stops))
    }

    pub fn paint(mut self, paint: Paint) -> Self {
        if let Some(stroke) = &mut self.stroke {
            stroke.paint = paint.clone();
        }
        self.fill = paint;
        self
    }

    pub fn fill(mut self, color: Color, opacity: f64) -> Self {
        self.fill = Paint::Solid(color);
        self.fill_opacity = opacity;
        self
    }

    pub fn fill_opacity(mut self, opacity: f64) -> Self {
        self.fill_opacity = opacity;
        self
    }

    pub fn stroke_width(mut self, width: f64) -> Self {
        self.stroke.get_or_insert_with(Stroke::default).width = width;
        self
    }

    pub fn stroke_opacity(mut self, opacity: f64) -> Self {
        self.stroke.get_or_insert_with(Stroke::default).opacity = opacity;
        self
    }

    pub fn no_stroke(mut self) -> Self {
        self.stroke = None;
        self
    }

    pub fn scaled(mut self, factor: f64) -> Self {
        self.scale *= factor;
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn bounds(&self) -> Rect {
        let mut extent = self.shape.extent() * self.scale;
        if let Shape::Line { delta } = &self.shape {
            let d = rotate_vec(*delta * self.scale, self.rotation);
            extent = Vec2::new(d.x.abs(), d.y.abs());
        }
        Rect::from_center_size(self.center, (extent.x, extent.y))
    }

    /// World-space endpoints for lines.
    pub fn endpoints(&self) -> Option<(Point, Point)> {
        let Shape::Line { delta } = &self.shape else {
            return None;
        };
        let half = rotate_vec(*delta * self.scale, self.rotation) * 0.5;
        Some((self.center - half, self.center + half))
    }

    /// Displayed characters for text and numbers.
    pub fn text_content(&self) -> Option<String> {
        match &self.shape {
            Shape::Text { text, .. } => Some(text.clone()),
            Shape::Decimal {
                value, decimals, ..
            } => Some(format_decimal(*value, *decimals)),
            _ => None,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        fn positive(name: &str, v: f64) -> Result<(), String> {
            if v.is_finite() && v > 0.0 {
                Ok(())
            } else {
                Err(format!("{name} must be finite and > 0, got {v}"))
            }
        }
        fn unit(name: &str, v: f64) -> Result<(), String> {
            if (0.0..=1.0).contains(&v) {
                Ok(())
            } else {
                Err(format!("{name} must be in [0, 1], got {v}"))
            }
        }

        match &self.shape {
            Shape::Dot { radius } | Shape::Circle { radius } => positive("radius", *radius)?,
            Shape::Line { delta } => {
                if !delta.is_finite() || delta.hypot() == 0.0 {
                    return Err("line endpoints must be finite and distinct".to_owned());
                }
            }
            Shape::Rectangle {
                width,
                height,
                corner_radius,
            } => {
                positive("width", *width)?;
                positive("height", *height)?;
                if !corner_radius.is_finite()
                    || *corner_radius < 0.0
                    || *corner_radius * 2.0 > width.min(*height)
                {
                    return Err(format!("corner radius {corner_radius} does not fit"));
                }
            }
            Shape::Text {
                text, font_size, ..
            } => {
                if text.trim().is_empty() {
                    return Err("text must be non-empty".to_owned());
                }
                positive("font_size", *font_size)?;
            }
            Shape::Decimal {
                value,
                decimals,
                font_size,
            } => {
                if !value.is_finite() {
                    return Err("decimal value must be finite".to_owned());
                }
                if *decimals > 10 {
                    return Err(format!("decimal places must be <= 10, got {decimals}"));
                }
                positive("font_size", *font_size)?;
            }
        }

        if !self.center.is_finite() {
            return Err("center must be finite".to_owned());
        }
        positive("scale", self.scale)?;
        if !self.rotation.is_finite() {
            return Err("rotation must be finite".to_owned());
        }
        unit("opacity", self.opacity)?;
        unit("fill_opacity", self.fill_opacity)?;
        self.fill.validate()?;
        if let Some(stroke) = &self.stroke {
            if !stroke.width.is_finite() || stroke.width < 0.0 {
                return Err(format!("stroke width must be >= 0, got {}", stroke.width));
            }
            unit("stroke opacity", stroke.opacity)?;
            stroke.paint.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/element.rs"]
mod tests;
