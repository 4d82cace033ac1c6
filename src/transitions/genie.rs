//! Genie: the incoming view is pulled out of the left edge, scaling up while a pinch distortion
//! relaxes; the outgoing view darkens underneath.

use crate::effects::stages;
use crate::foundation::core::{Affine, Point, Rect};
use crate::foundation::error::PushfxResult;
use crate::graph::image::{Bump, Image};
use crate::transitions::kind::TransitionKind;
use crate::transitions::{TransitionFilter, TransitionInputs, darken_back, transform_then_bump};

/// Scale of the incoming view when the transition starts.
pub const MINIMUM_SCALE: f64 = 0.3;

/// Pull-from-corner transition.
#[derive(Clone, Copy, Debug, Default)]
pub struct GenieFilter;

/// Easing curves of the genie effect at one push progress.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GenieCurves {
    /// `max(0, 1.5 (push - 0.34))`: scaling starts a third of the way in.
    pub scale_progress: f64,
    /// `push^0.7`.
    pub translation_progress: f64,
    /// `(1 - push)^0.5`: pinch strength.
    pub bump_progress: f64,
}

impl GenieCurves {
    /// Evaluate all curves at `push`.
    pub fn at(push: f64) -> Self {
        Self {
            scale_progress: (1.5 * (push - 0.34)).max(0.0),
            translation_progress: push.powf(0.7),
            bump_progress: (1.0 - push).powf(0.5),
        }
    }

    /// Uniform scale of the incoming view.
    pub fn scale(&self) -> f64 {
        MINIMUM_SCALE + self.scale_progress * (1.0 - MINIMUM_SCALE)
    }
}

/// Left-middle point of the extent: both the scaling origin and the pinch center.
pub fn focal_point(extent: Rect) -> Point {
    Point::new(extent.x0, extent.center().y)
}

/// Affine transform of the incoming view.
pub fn front_transform(extent: Rect, push: f64) -> Affine {
    let curves = GenieCurves::at(push);
    let scale = curves.scale();
    let focal = focal_point(extent);
    Affine::translate((
        (extent.x0 + focal.x) * (1.0 - scale),
        (extent.y0 + focal.y) * (1.0 - scale),
    )) * Affine::translate((
        -(extent.width() * MINIMUM_SCALE * (1.0 - curves.translation_progress)),
        0.0,
    )) * Affine::scale(scale)
}

/// Pinch distortion of the incoming view.
pub fn front_bump(extent: Rect, push: f64) -> Bump {
    Bump {
        center: focal_point(extent),
        radius: extent.width().max(extent.height()),
        scale: -1.8 * GenieCurves::at(push).bump_progress,
    }
}

impl TransitionFilter for GenieFilter {
    fn kind(&self) -> TransitionKind {
        TransitionKind::Genie
    }

    fn try_compose(&self, inputs: &TransitionInputs) -> PushfxResult<Image> {
        let prepared = inputs.prepare()?;
        let (extent, push) = (prepared.extent, prepared.push);

        let front = prepared.roles.incoming;
        let front = transform_then_bump(
            front,
            stages::affine_transform(front, front_transform(extent, push)),
            |moved| stages::bump_distortion(moved, front_bump(extent, push)),
        );
        let back = darken_back(prepared.roles.outgoing, push);

        Ok(front.composited_over(&back))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transitions/genie.rs"]
mod tests;
