/// Named rate curves mapping normalized time `t ∈ [0, 1]` to progress.
///
/// `Smooth` is the default for play batches. `ThereAndBack` peaks at `t = 0.5` and returns to
/// the start value, which is how pulses are expressed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    Linear,
    #[default]
    Smooth,
    ThereAndBack,
    RushInto,
    RushFrom,
    InQuad,
    OutQuad,
    InOutQuad,
    InCubic,
    OutCubic,
    InOutCubic,
}

const SMOOTH_INFLECTION: f64 = 10.0;

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

fn smooth(t: f64) -> f64 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }
    let error = sigmoid(-SMOOTH_INFLECTION / 2.0);
    ((sigmoid(SMOOTH_INFLECTION * (t - 0.5)) - error) / (1.0 - 2.0 * error)).clamp(0.0, 1.0)
}

impl Ease {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::Smooth => smooth(t),
            Self::ThereAndBack => {
                let folded = if t < 0.5 { 2.0 * t } else { 2.0 * (1.0 - t) };
                smooth(folded)
            }
            Self::RushInto => 2.0 * smooth(t / 2.0),
            Self::RushFrom => 2.0 * smooth(t / 2.0 + 0.5) - 1.0,
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::InCubic => t * t * t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
        }
    }

    /// Curves that end where they started.
    pub fn is_round_trip(self) -> bool {
        matches!(self, Self::ThereAndBack)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
