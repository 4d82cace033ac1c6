//! Spread: the incoming view grows out of a focal point with a relaxing pinch.

use crate::effects::stages;
use crate::foundation::core::{Affine, Point, Rect};
use crate::foundation::error::PushfxResult;
use crate::graph::image::{Bump, Image};
use crate::transitions::kind::TransitionKind;
use crate::transitions::{TransitionFilter, TransitionInputs, darken_back, transform_then_bump};

/// Focal point used when the caller supplies none.
pub const DEFAULT_CENTER: Point = Point::new(100.0, 100.0);

/// Scale-from-point transition.
#[derive(Clone, Copy, Debug, Default)]
pub struct SpreadFilter;

/// Affine transform of the incoming view: scale by `push` keeping `center` fixed.
pub fn front_transform(extent: Rect, center: Point, push: f64) -> Affine {
    Affine::translate((
        (extent.x0 + center.x) * (1.0 - push),
        (extent.y0 + center.y) * (1.0 - push),
    )) * Affine::scale(push)
}

/// Pinch distortion of the incoming view; the radius grows with progress.
pub fn front_bump(extent: Rect, center: Point, push: f64) -> Bump {
    Bump {
        center,
        radius: extent.width().max(extent.height()) * 0.8 * push,
        scale: -1.5 * (1.0 - push).powf(0.5),
    }
}

impl TransitionFilter for SpreadFilter {
    fn kind(&self) -> TransitionKind {
        TransitionKind::Spread
    }

    fn try_compose(&self, inputs: &TransitionInputs) -> PushfxResult<Image> {
        let prepared = inputs.prepare()?;
        let (extent, push) = (prepared.extent, prepared.push);
        let center = inputs.center.unwrap_or(DEFAULT_CENTER);

        let front = prepared.roles.incoming;
        let front = transform_then_bump(
            front,
            stages::affine_transform(front, front_transform(extent, center, push)),
            |moved| stages::bump_distortion(moved, front_bump(extent, center, push)),
        );
        let back = darken_back(prepared.roles.outgoing, push);

        Ok(front.composited_over(&back))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transitions/spread.rs"]
mod tests;
