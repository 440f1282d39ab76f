use crate::{
    encode::sink::{FrameSink, SinkConfig},
    eval::evaluator::Evaluator,
    foundation::core::{FrameIndex, FrameRange},
    foundation::error::{ReelError, ReelResult},
    timeline::model::Timeline,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub frames_total: u64,
    pub frames_pushed: u64,
}

/// Evaluate every `stride`-th frame of `range` (inclusive start, exclusive end) into `sink`.
///
/// The range is clipped to the timeline duration; an empty result is an error.
#[tracing::instrument(skip(timeline, sink), fields(start = range.start.0, end = range.end.0))]
pub fn render_frames(
    timeline: &Timeline,
    range: FrameRange,
    stride: u64,
    sink: &mut dyn FrameSink,
) -> ReelResult<RenderStats> {
    if stride == 0 {
        return Err(ReelError::validation("frame stride must be >= 1"));
    }
    let end = FrameIndex(range.end.0.min(timeline.duration.0));
    if range.start.0 >= end.0 {
        return Err(ReelError::validation("render range must be non-empty"));
    }
    timeline.validate()?;

    sink.begin(SinkConfig {
        canvas: timeline.canvas,
        fps: timeline.fps,
        stride,
    })?;
    let mut stats = RenderStats::default();
    for f in (range.start.0..end.0).step_by(stride as usize) {
        let idx = FrameIndex(f);
        let state = Evaluator::eval_frame(timeline, idx)?;
        sink.push_frame(idx, &state)?;
        stats.frames_pushed += 1;
    }
    stats.frames_total = end.0 - range.start.0;
    sink.end()?;
    tracing::debug!(pushed = stats.frames_pushed, "frames rendered");
    Ok(stats)
}

#[cfg(test)]
#[path = "../../tests/unit/encode/pipeline.rs"]
mod tests;
