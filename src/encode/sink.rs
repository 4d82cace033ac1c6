use crate::foundation::error::PushfxResult;
use crate::graph::raster::Raster;
use crate::transitions::kind::TransitionKind;

/// Configuration provided to a [`FrameSink`] before the first frame.
#[derive(Debug, Clone, PartialEq)]
pub struct SinkConfig {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Sampling rate of the transition.
    pub fps: u32,
    /// Number of frames sampled, including skipped ones.
    pub frame_count: u32,
    /// Transition being rendered.
    pub kind: TransitionKind,
}

/// One rendered frame as captured by [`InMemorySink`].
#[derive(Debug, Clone, PartialEq)]
pub struct CapturedFrame {
    /// Sample index in `0..frame_count`.
    pub index: u32,
    /// Eased filter time of the frame.
    pub time: f64,
    /// Premultiplied pixels.
    pub raster: Raster,
}

/// Sink contract for consuming rendered frames.
///
/// Ordering contract: `push_frame` is called with strictly increasing `index`. Indices of skipped
/// frames never reach the sink.
pub trait FrameSink: Send {
    /// Called once before any frames are pushed.
    fn begin(&mut self, cfg: SinkConfig) -> PushfxResult<()>;
    /// Push one frame.
    fn push_frame(&mut self, index: u32, time: f64, frame: &Raster) -> PushfxResult<()>;
    /// Called once after the last frame is pushed.
    fn end(&mut self) -> PushfxResult<()>;
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    frames: Vec<CapturedFrame>,
    finished: bool,
}

impl InMemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration captured in `begin`, if any.
    pub fn config(&self) -> Option<&SinkConfig> {
        self.cfg.as_ref()
    }

    /// Captured frames in push order.
    pub fn frames(&self) -> &[CapturedFrame] {
        &self.frames
    }

    /// Whether `end` was called after the last `begin`.
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> PushfxResult<()> {
        self.cfg = Some(cfg);
        self.frames.clear();
        self.finished = false;
        Ok(())
    }

    fn push_frame(&mut self, index: u32, time: f64, frame: &Raster) -> PushfxResult<()> {
        self.frames.push(CapturedFrame {
            index,
            time,
            raster: frame.clone(),
        });
        Ok(())
    }

    fn end(&mut self) -> PushfxResult<()> {
        self.finished = true;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/sink.rs"]
mod tests;
