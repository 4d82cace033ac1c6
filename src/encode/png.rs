use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::error::{PushfxError, PushfxResult};
use crate::graph::raster::Raster;

/// Writes each frame to `<dir>/frame_NNNN.png` (straight alpha), named by sample index.
#[derive(Debug)]
pub struct PngSequenceSink {
    dir: PathBuf,
    cfg: Option<SinkConfig>,
    written: Vec<PathBuf>,
}

impl PngSequenceSink {
    /// Sink writing into `dir`; the directory is created in `begin`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            cfg: None,
            written: Vec::new(),
        }
    }

    /// Output directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Files written so far, in push order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    /// File name of frame `index`.
    pub fn frame_file_name(index: u32) -> String {
        format!("frame_{index:04}.png")
    }
}

impl FrameSink for PngSequenceSink {
    fn begin(&mut self, cfg: SinkConfig) -> PushfxResult<()> {
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("create output dir '{}'", self.dir.display()))?;
        self.cfg = Some(cfg);
        self.written.clear();
        Ok(())
    }

    fn push_frame(&mut self, index: u32, _time: f64, frame: &Raster) -> PushfxResult<()> {
        let cfg = self
            .cfg
            .as_ref()
            .ok_or_else(|| PushfxError::render("png sink received a frame before begin"))?;
        if (frame.width, frame.height) != (cfg.width, cfg.height) {
            return Err(PushfxError::render(format!(
                "frame {index} is {}x{}, sink expects {}x{}",
                frame.width, frame.height, cfg.width, cfg.height
            )));
        }
        let path = self.dir.join(Self::frame_file_name(index));
        frame
            .to_rgba_image()?
            .save(&path)
            .with_context(|| format!("write frame '{}'", path.display()))?;
        self.written.push(path);
        Ok(())
    }

    fn end(&mut self) -> PushfxResult<()> {
        tracing::debug!(dir = %self.dir.display(), frames = self.written.len(), "png sequence written");
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png.rs"]
mod tests;
