use serde::{Deserialize, Serialize};

/// Straight (non-premultiplied) RGBA color with channels in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    pub const fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: 1.0,
        }
    }

    pub fn hex(s: &str) -> Result<Self, String> {
        parse_hex(s)
    }

    pub fn to_rgba8(self) -> [u8; 4] {
        fn to_u8(x: f64) -> u8 {
            (x.clamp(0.0, 1.0) * 255.0).round() as u8
        }
        [to_u8(self.r), to_u8(self.g), to_u8(self.b), to_u8(self.a)]
    }

    pub fn to_hex(self) -> String {
        let [r, g, b, a] = self.to_rgba8();
        if a == 255 {
            format!("#{r:02X}{g:02X}{b:02X}")
        } else {
            format!("#{r:02X}{g:02X}{b:02X}{a:02X}")
        }
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Hex(String),
            RgbaObj {
                r: f64,
                g: f64,
                b: f64,
                #[serde(default = "one")]
                a: f64,
            },
            Arr(Vec<f64>),
        }

        fn one() -> f64 {
            1.0
        }

        match Repr::deserialize(deserializer)? {
            Repr::Hex(s) => parse_hex(&s).map_err(serde::de::Error::custom),
            Repr::RgbaObj { r, g, b, a } => Ok(Self::rgba(r, g, b, a)),
            Repr::Arr(v) => match v.as_slice() {
                [r, g, b] => Ok(Self::rgba(*r, *g, *b, 1.0)),
                [r, g, b, a] => Ok(Self::rgba(*r, *g, *b, *a)),
                _ => Err(serde::de::Error::custom(
                    "rgba array must have len 3 ([r,g,b]) or 4 ([r,g,b,a])",
                )),
            },
        }
    }
}

fn parse_hex(s: &str) -> Result<Color, String> {
    let s = s.trim();
    let s = s.strip_prefix('#').unwrap_or(s);

    fn hex_byte(pair: &str) -> Result<u8, String> {
        u8::from_str_radix(pair, 16).map_err(|_| format!("invalid hex byte \"{pair}\""))
    }

    if !s.is_ascii() {
        return Err("hex color must be ASCII".to_owned());
    }

    let (r, g, b, a) = match s.len() {
        6 => (hex_byte(&s[0..2])?, hex_byte(&s[2..4])?, hex_byte(&s[4..6])?, 255),
        8 => (
            hex_byte(&s[0..2])?,
            hex_byte(&s[2..4])?,
            hex_byte(&s[4..6])?,
            hex_byte(&s[6..8])?,
        ),
        _ => {
            return Err("hex color must be #RRGGBB or #RRGGBBAA (case-insensitive)".to_owned());
        }
    };

    Ok(Color::rgba(
        f64::from(r) / 255.0,
        f64::from(g) / 255.0,
        f64::from(b) / 255.0,
        f64::from(a) / 255.0,
    ))
}

/// Named colors shared by every scene.
pub mod palette {
    use super::Color;

    pub const WHITE: Color = Color::rgb8(0xFF, 0xFF, 0xFF);
    pub const GRAY: Color = Color::rgb8(0x88, 0x88, 0x88);
    pub const BLUE: Color = Color::rgb8(0x58, 0xC4, 0xDD);
    pub const PURPLE: Color = Color::rgb8(0x9A, 0x72, 0xAC);
    pub const TEAL: Color = Color::rgb8(0x5C, 0xD0, 0xB3);
    pub const GREEN: Color = Color::rgb8(0x83, 0xC1, 0x67);
    pub const PINK: Color = Color::rgb8(0xFF, 0x69, 0xB4);
    pub const BACKDROP_DEEP: Color = Color::rgb8(0x03, 0x2B, 0x43);
    pub const BACKDROP_LIGHT: Color = Color::rgb8(0x17, 0x60, 0x87);
}

/// Fill or stroke paint: a single color or evenly spaced gradient stops.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Paint {
    Solid(Color),
    Gradient(Vec<Color>),
}

impl Default for Paint {
    fn default() -> Self {
        Self::Solid(palette::WHITE)
    }
}

impl From<Color> for Paint {
    fn from(c: Color) -> Self {
        Self::Solid(c)
    }
}

impl Paint {
    pub fn gradient(stops: impl IntoIterator<Item = Color>) -> Self {
        let stops: Vec<Color> = stops.into_iter().collect();
        match stops.as_slice() {
            [single] => Self::Solid(*single),
            _ => Self::Gradient(stops),
        }
    }

    pub fn stop_count(&self) -> usize {
        match self {
            Self::Solid(_) => 1,
            Self::Gradient(stops) => stops.len().max(1),
        }
    }

    /// Color at stop `i` when the paint is resampled to `n` evenly spaced stops.
    pub fn stop_at(&self, i: usize, n: usize) -> Color {
        match self {
            Self::Solid(c) => *c,
            Self::Gradient(stops) => match stops.as_slice() {
                [] => palette::WHITE,
                [only] => *only,
                _ => {
                    let t = if n <= 1 {
                        0.0
                    } else {
                        i as f64 / (n - 1) as f64
                    };
                    let pos = t * (stops.len() - 1) as f64;
                    let lo = (pos.floor() as usize).min(stops.len() - 1);
                    let hi = (lo + 1).min(stops.len() - 1);
                    let local = pos - lo as f64;
                    let (a, b) = (stops[lo], stops[hi]);
                    Color::rgba(
                        a.r + (b.r - a.r) * local,
                        a.g + (b.g - a.g) * local,
                        a.b + (b.b - a.b) * local,
                        a.a + (b.a - a.a) * local,
                    )
                }
            },
        }
    }

    /// First color, used where a single representative color is needed.
    pub fn primary(&self) -> Color {
        self.stop_at(0, self.stop_count())
    }

    pub fn validate(&self) -> Result<(), String> {
        let colors: &[Color] = match self {
            Self::Solid(c) => std::slice::from_ref(c),
            Self::Gradient(stops) => {
                if stops.is_empty() {
                    return Err("gradient paint needs at least one stop".to_owned());
                }
                stops
            }
        };
        for c in colors {
            for ch in [c.r, c.g, c.b, c.a] {
                if !(0.0..=1.0).contains(&ch) {
                    return Err(format!("color channel {ch} outside [0, 1]"));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/color.rs"]
mod tests;
