use std::io::Write;

use crate::eval::evaluator::FrameState;
use crate::foundation::core::{Canvas, Fps, FrameIndex};
use crate::foundation::error::{ReelError, ReelResult};

/// Configuration provided to a [`FrameSink`] at the start of a range render.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct SinkConfig {
    pub canvas: Canvas,
    pub fps: Fps,
    /// Every `stride`-th frame of the range is pushed.
    pub stride: u64,
}

/// Sink contract for consuming evaluated frames in timeline order.
///
/// Ordering contract: `push_frame` is called in strictly increasing `FrameIndex` order within the
/// requested range.
pub trait FrameSink {
    /// Called once before any frames are pushed.
    fn begin(&mut self, cfg: SinkConfig) -> ReelResult<()>;
    /// Called once per frame, in increasing `idx` order.
    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameState) -> ReelResult<()>;
    /// Called once after the last frame is pushed.
    fn end(&mut self) -> ReelResult<()>;
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    pub(crate) frames: Vec<(FrameIndex, FrameState)>,
    ended: bool,
}

impl InMemorySink {
    /// Create a new in-memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Config received in the last `begin`, if any.
    pub fn config(&self) -> Option<&SinkConfig> {
        self.cfg.as_ref()
    }

    /// Frames pushed since the last `begin`.
    pub fn frames(&self) -> &[(FrameIndex, FrameState)] {
        &self.frames
    }

    /// Whether `end` has been called since the last `begin`.
    pub fn is_ended(&self) -> bool {
        self.ended
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> ReelResult<()> {
        self.cfg = Some(cfg);
        self.frames.clear();
        self.ended = false;
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameState) -> ReelResult<()> {
        self.frames.push((idx, frame.clone()));
        Ok(())
    }

    fn end(&mut self) -> ReelResult<()> {
        self.ended = true;
        Ok(())
    }
}

#[derive(serde::Serialize)]
struct Header<'a> {
    header: &'a SinkConfig,
}

/// Writes one JSON object per frame, preceded by a header line with the sink config.
pub struct JsonLinesSink<W: Write> {
    out: W,
    written: u64,
}

impl<W: Write> JsonLinesSink<W> {
    /// Create a sink writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out, written: 0 }
    }

    /// Frames written so far (header excluded).
    pub fn written(&self) -> u64 {
        self.written
    }

    /// Return the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn line<T: serde::Serialize>(&mut self, value: &T) -> ReelResult<()> {
        serde_json::to_writer(&mut self.out, value)
            .map_err(|e| ReelError::serde(format!("write frame line: {e}")))?;
        self.out
            .write_all(b"\n")
            .map_err(|e| ReelError::Other(e.into()))
    }
}

impl<W: Write> FrameSink for JsonLinesSink<W> {
    fn begin(&mut self, cfg: SinkConfig) -> ReelResult<()> {
        self.written = 0;
        self.line(&Header { header: &cfg })
    }

    fn push_frame(&mut self, _idx: FrameIndex, frame: &FrameState) -> ReelResult<()> {
        self.line(frame)?;
        self.written += 1;
        Ok(())
    }

    fn end(&mut self) -> ReelResult<()> {
        self.out.flush().map_err(|e| ReelError::Other(e.into()))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/sink.rs"]
mod tests;
