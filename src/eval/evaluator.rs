use crate::{
    animation::directive::WriteStyle,
    foundation::core::{FrameIndex, Point},
    foundation::error::{ReelError, ReelResult},
    scene::color::Paint,
    scene::element::{ElementId, Shape, format_decimal},
    timeline::model::{ElementTimeline, Timeline},
};

#[derive(Clone, Debug, serde::Serialize)]
/// Every element on stage at one frame, in spawn order.
pub struct FrameState {
    pub frame: FrameIndex,
    pub elements: Vec<EvaluatedElement>,
}

impl FrameState {
    pub fn get(&self, id: ElementId) -> Option<&EvaluatedElement> {
        self.elements.iter().find(|e| e.id == id)
    }

    /// Elements a viewer can actually see (non-zero opacity).
    pub fn visible(&self) -> impl Iterator<Item = &EvaluatedElement> {
        self.elements.iter().filter(|e| e.opacity > 0.0)
    }
}

#[derive(Clone, Debug, serde::Serialize)]
pub struct EvaluatedElement {
    pub id: ElementId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub kind: &'static str,
    /// Overall opacity in `[0, 1]`.
    pub opacity: f64,
    pub center: Point,
    pub scale: f64,
    pub rotation: f64,
    /// Draw progress in `[0, 1]`.
    pub progress: f64,
    pub paint: Paint,
    pub stroke_opacity: f64,
    /// Text as currently displayed (numbers formatted, letter-by-letter writes truncated).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
}

/// Stateless sampler from timeline to per-frame element state.
pub struct Evaluator;

impl Evaluator {
    #[tracing::instrument(level = "trace", skip(timeline))]
    pub fn eval_frame(timeline: &Timeline, frame: FrameIndex) -> ReelResult<FrameState> {
        if frame.0 >= timeline.duration.0 {
            return Err(ReelError::evaluation(format!(
                "frame {} is out of bounds (duration {})",
                frame.0, timeline.duration.0
            )));
        }

        let elements = timeline
            .elements
            .iter()
            .filter(|el| el.is_present(frame))
            .map(|el| eval_element(el, frame))
            .collect();
        Ok(FrameState { frame, elements })
    }
}

fn eval_element(el: &ElementTimeline, frame: FrameIndex) -> EvaluatedElement {
    let progress = el.progress.sample(frame).clamp(0.0, 1.0);
    let (text, value) = match &el.shape {
        Shape::Text { text, .. } => {
            let shown = if el.write_style == Some(WriteStyle::LetterByLetter) {
                let n = text.chars().count();
                let visible = (progress * n as f64).floor() as usize;
                text.chars().take(visible).collect()
            } else {
                text.clone()
            };
            (Some(shown), None)
        }
        Shape::Decimal { decimals, .. } => {
            let v = el.value.sample(frame);
            (Some(format_decimal(v, *decimals)), Some(v))
        }
        _ => (None, None),
    };

    EvaluatedElement {
        id: el.id,
        label: el.label.clone(),
        kind: el.shape.kind_name(),
        opacity: el.opacity.sample(frame).clamp(0.0, 1.0),
        center: el.center.sample(frame),
        scale: el.scale.sample(frame),
        rotation: el.rotation.sample(frame),
        progress,
        paint: el.paint.sample(frame),
        stroke_opacity: el.stroke_opacity.sample(frame).clamp(0.0, 1.0),
        text,
        value,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/evaluator.rs"]
mod tests;
