//! Transition filters and their shared input contract.
//!
//! Every filter maps `(source, destination, time, extent, reverse[, center])` to one composited
//! image for a single animation frame. Filters hold no state; each call builds a fresh lazy
//! image graph, so a filter value can be shared freely across threads.

pub mod genie;
pub(crate) mod kind;
pub mod navigation;
pub mod schema;
pub(crate) mod spec;
pub mod spread;
pub mod tab;

use crate::effects::stages::{self, StageResult};
use crate::foundation::core::{Point, Rect, clamp_progress, is_usable_extent};
use crate::foundation::error::{InputKey, PushfxError, PushfxResult};
use crate::graph::image::{ColorControls, Image};
use crate::transitions::kind::TransitionKind;

/// Inputs of one transition frame. `None` marks a missing input.
#[derive(Clone, Debug, Default)]
pub struct TransitionInputs {
    /// Image shown at the start of a forward transition.
    pub source: Option<Image>,
    /// Image shown at the end of a forward transition.
    pub destination: Option<Image>,
    /// Visible viewport.
    pub extent: Option<Rect>,
    /// Transition time; clamped into `[0, 1]`.
    pub time: f64,
    /// Play the transition backwards ("pop" instead of "push").
    pub reverse: bool,
    /// Focal point, for filters that have one.
    pub center: Option<Point>,
}

impl TransitionInputs {
    /// Inputs with all required values present, `time = 0`, forward direction.
    pub fn new(source: Image, destination: Image, extent: Rect) -> Self {
        Self {
            source: Some(source),
            destination: Some(destination),
            extent: Some(extent),
            ..Self::default()
        }
    }

    /// Set the transition time.
    pub fn with_time(mut self, time: f64) -> Self {
        self.time = time;
        self
    }

    /// Set the direction.
    pub fn with_reverse(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }

    /// Set the focal point.
    pub fn with_center(mut self, center: Point) -> Self {
        self.center = Some(center);
        self
    }

    /// Direction-adjusted progress driving the filter formulas.
    pub fn push_progress(&self) -> f64 {
        push_progress(self.time, self.reverse)
    }

    pub(crate) fn prepare(&self) -> PushfxResult<Prepared<'_>> {
        let source = self
            .source
            .as_ref()
            .ok_or(PushfxError::MissingInput(InputKey::SourceImage))?;
        let destination = self
            .destination
            .as_ref()
            .ok_or(PushfxError::MissingInput(InputKey::DestinationImage))?;
        let extent = self
            .extent
            .filter(|r| is_usable_extent(*r))
            .ok_or(PushfxError::MissingInput(InputKey::Extent))?;
        Ok(Prepared {
            roles: LayerRoles::assign(source, destination, self.reverse),
            extent,
            push: self.push_progress(),
        })
    }
}

/// Validated inputs: extent, direction-adjusted progress and layer roles.
pub(crate) struct Prepared<'a> {
    pub(crate) roles: LayerRoles<&'a Image>,
    pub(crate) extent: Rect,
    pub(crate) push: f64,
}

/// `reverse ? 1 - time : time`, with `time` clamped into `[0, 1]`.
pub fn push_progress(time: f64, reverse: bool) -> f64 {
    let t = clamp_progress(time);
    if reverse { 1.0 - t } else { t }
}

/// Which input plays which part in a transition.
///
/// The outgoing layer is what the forward transition starts on (Navigation/Genie/Spread "back",
/// Tab "left"); the incoming layer is what it ends on ("front" / "right"). Reversing swaps them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayerRoles<T> {
    /// Layer being left.
    pub outgoing: T,
    /// Layer being revealed.
    pub incoming: T,
}

impl<T> LayerRoles<T> {
    /// Assign roles from the direction flag.
    pub fn assign(source: T, destination: T, reverse: bool) -> Self {
        if reverse {
            Self {
                outgoing: destination,
                incoming: source,
            }
        } else {
            Self {
                outgoing: source,
                incoming: destination,
            }
        }
    }
}

/// A transition filter: one pure function from inputs to a composited frame.
pub trait TransitionFilter: Send + Sync {
    /// Which transition this is.
    fn kind(&self) -> TransitionKind;

    /// Compose a frame, reporting missing inputs as errors.
    fn try_compose(&self, inputs: &TransitionInputs) -> PushfxResult<Image>;

    /// Compose a frame; missing inputs log a warning and produce no output.
    fn compose(&self, inputs: &TransitionInputs) -> Option<Image> {
        match self.try_compose(inputs) {
            Ok(img) => Some(img),
            Err(err) => {
                tracing::warn!(filter = self.kind().name(), %err, "transition produced no output");
                None
            }
        }
    }
}

/// Brightness offset of the back layer: darkens as the transition progresses.
pub fn back_brightness(push: f64) -> f64 {
    -0.1 * push.powi(2)
}

pub(crate) fn darken_back(back: &Image, push: f64) -> Image {
    let controls = ColorControls {
        saturation: 1.0,
        brightness: back_brightness(push),
        contrast: 1.0,
    };
    stages::keep_on_failure(back, stages::color_controls(back, controls))
}

// An affine stage followed by a bump stage; the bump only runs when the transform succeeded.
pub(crate) fn transform_then_bump(
    front: &Image,
    transform: StageResult,
    bump: impl FnOnce(&Image) -> StageResult,
) -> Image {
    match transform {
        Ok(moved) => {
            let bumped = bump(&moved);
            stages::keep_on_failure(&moved, bumped)
        }
        Err(err) => {
            tracing::debug!(%err, "stage degraded; keeping pre-stage image");
            front.clone()
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transitions/inputs.rs"]
mod tests;
