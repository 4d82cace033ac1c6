//! Tab: both views sit side by side in a double-wide strip; the viewport pans from the left view
//! to the right one, zooming out slightly over the middle of the move.

use crate::effects::stages;
use crate::foundation::core::{Affine, Rect};
use crate::foundation::error::PushfxResult;
use crate::graph::image::Image;
use crate::transitions::kind::TransitionKind;
use crate::transitions::{TransitionFilter, TransitionInputs};

/// Scale of both views during the plateau.
pub const MINIMUM_SCALE: f64 = 0.8;

/// Side-by-side pan transition.
#[derive(Clone, Copy, Debug, Default)]
pub struct TabFilter;

/// Which half of the double-wide strip a view occupies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TabSide {
    /// The outgoing view.
    Left,
    /// The incoming view.
    Right,
}

/// Zoom envelope: ramps 0→1 over the first quarter, holds, and returns 1→0 over the last.
pub fn scale_progress(push: f64) -> f64 {
    (-4.0 * (push - 1.0)).min(4.0 * push).min(1.0)
}

/// Affine transform placing one side of the strip in the viewport.
pub fn side_transform(extent: Rect, push: f64, side: TabSide) -> Affine {
    let sp = scale_progress(push);
    let scale = 1.0 - sp * (1.0 - MINIMUM_SCALE);
    let mut scale_center = extent.center();
    if side == TabSide::Right {
        scale_center.x += extent.width();
    }

    let transform = Affine::translate((scale_center.x, scale_center.y))
        * Affine::translate((
            -(extent.width() * 0.5 * scale),
            -(extent.height() * 0.5 * scale),
        ))
        * Affine::translate((-(extent.width() * push), 0.0))
        * Affine::scale(scale);
    match side {
        TabSide::Left => transform,
        TabSide::Right => {
            transform * Affine::translate((-(extent.width() * (1.0 - MINIMUM_SCALE) * sp), 0.0))
        }
    }
}

impl TransitionFilter for TabFilter {
    fn kind(&self) -> TransitionKind {
        TransitionKind::Tab
    }

    fn try_compose(&self, inputs: &TransitionInputs) -> PushfxResult<Image> {
        let prepared = inputs.prepare()?;
        let (extent, push) = (prepared.extent, prepared.push);

        let place = |img: &Image, side| {
            stages::keep_on_failure(
                img,
                stages::affine_transform(img, side_transform(extent, push, side)),
            )
        };
        let left = place(prepared.roles.outgoing, TabSide::Left);
        let right = place(prepared.roles.incoming, TabSide::Right);

        Ok(left.composited_over(&right))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transitions/tab.rs"]
mod tests;
