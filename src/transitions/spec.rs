//! Serializable description of a whole transition animation.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;

use crate::animation::ease::Ease;
use crate::foundation::core::Point;
use crate::foundation::error::{PushfxError, PushfxResult};
use crate::transitions::kind::TransitionKind;

/// Default transition duration in seconds.
pub const DEFAULT_DURATION_SECS: f64 = 0.5;
/// Default sampling rate in frames per second.
pub const DEFAULT_FPS: u32 = 60;
/// Duration multiplier applied in slow motion.
pub const SLOW_MOTION_FACTOR: f64 = 3.0;

/// A transition animation: which filter, how long, how it is eased and in which direction.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TransitionSpec {
    /// Filter to run.
    pub kind: TransitionKind,
    /// Length of the animation in seconds.
    #[serde(default = "default_duration_secs")]
    pub duration_secs: f64,
    /// Sampling rate.
    #[serde(default = "default_fps")]
    pub fps: u32,
    /// Overrides [`TransitionKind::default_ease`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ease: Option<Ease>,
    /// Play backwards.
    #[serde(default)]
    pub reverse: bool,
    /// Focal point; the extent midpoint when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub center: Option<Point>,
    /// Stretch the duration by [`SLOW_MOTION_FACTOR`].
    #[serde(default)]
    pub slow_motion: bool,
}

fn default_duration_secs() -> f64 {
    DEFAULT_DURATION_SECS
}

fn default_fps() -> u32 {
    DEFAULT_FPS
}

impl TransitionSpec {
    /// Spec with default timing for `kind`.
    pub fn new(kind: TransitionKind) -> Self {
        Self {
            kind,
            duration_secs: DEFAULT_DURATION_SECS,
            fps: DEFAULT_FPS,
            ease: None,
            reverse: false,
            center: None,
            slow_motion: false,
        }
    }

    /// Parse and validate a JSON document.
    pub fn from_json_str(s: &str) -> PushfxResult<Self> {
        let spec: Self = serde_json::from_str(s).map_err(|e| PushfxError::serde(e.to_string()))?;
        spec.validate()?;
        Ok(spec)
    }

    /// Read, parse and validate a JSON file.
    pub fn from_path(path: &Path) -> PushfxResult<Self> {
        let f = File::open(path)
            .with_context(|| format!("open transition spec '{}'", path.display()))?;
        let spec: Self = serde_json::from_reader(BufReader::new(f))
            .map_err(|e| PushfxError::serde(format!("{}: {e}", path.display())))?;
        spec.validate()?;
        Ok(spec)
    }

    /// Reject non-positive timing and non-finite centers.
    pub fn validate(&self) -> PushfxResult<()> {
        if !self.duration_secs.is_finite() || self.duration_secs <= 0.0 {
            return Err(PushfxError::validation(
                "transition duration_secs must be finite and > 0",
            ));
        }
        if self.fps == 0 {
            return Err(PushfxError::validation("transition fps must be > 0"));
        }
        if let Some(c) = self.center
            && !(c.x.is_finite() && c.y.is_finite())
        {
            return Err(PushfxError::validation("transition center must be finite"));
        }
        Ok(())
    }

    /// Duration after the slow-motion multiplier.
    pub fn effective_duration_secs(&self) -> f64 {
        if self.slow_motion {
            self.duration_secs * SLOW_MOTION_FACTOR
        } else {
            self.duration_secs
        }
    }

    /// Configured curve, or the kind's default for the direction.
    pub fn effective_ease(&self) -> Ease {
        self.ease.unwrap_or_else(|| self.kind.default_ease(self.reverse))
    }

    /// Number of frames sampled, endpoints included. Never less than 2.
    pub fn frame_count(&self) -> u32 {
        let frames = (self.effective_duration_secs() * f64::from(self.fps)).round();
        if frames.is_finite() && frames >= 1.0 {
            (frames.min(f64::from(u32::MAX - 1)) as u32 + 1).max(2)
        } else {
            2
        }
    }

    /// Eased filter time of frame `index`.
    pub fn time_at(&self, index: u32) -> f64 {
        let last = self.frame_count() - 1;
        let linear = f64::from(index.min(last)) / f64::from(last);
        self.effective_ease().apply(linear)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transitions/spec.rs"]
mod tests;
