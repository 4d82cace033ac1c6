//! Navigation push: the outgoing view slides left with parallax under a growing shadow while the
//! incoming view slides in from the right edge.

use crate::effects::composite::PremulRgbaF;
use crate::effects::stages;
use crate::foundation::core::{Point, Rect};
use crate::foundation::error::PushfxResult;
use crate::graph::image::Image;
use crate::transitions::kind::TransitionKind;
use crate::transitions::{TransitionFilter, TransitionInputs};

/// Slide-with-shadow transition.
#[derive(Clone, Copy, Debug, Default)]
pub struct NavigationFilter;

/// Horizontal offset applied to the back layer (it moves at half speed).
pub fn parallax_offset(extent: Rect, push: f64) -> f64 {
    -(extent.width() * 0.5 * push)
}

/// Visible part of the back layer: the extent, shrunk from the right.
///
/// Degenerates to a zero-width rect at full progress; cropping to it yields an empty layer.
pub fn back_crop(extent: Rect, push: f64) -> Rect {
    let width = extent.width() * (1.0 - push);
    Rect::new(extent.x0, extent.y0, extent.x0 + width, extent.y1)
}

/// Shadow alpha at the leading and trailing edge of the back crop.
pub fn shadow_alphas(push: f64) -> (f64, f64) {
    let k = (push * 3.0).min(1.0);
    (0.1 * k, 0.3 * k)
}

fn black(alpha: f64) -> PremulRgbaF {
    [0.0, 0.0, 0.0, alpha as f32]
}

impl TransitionFilter for NavigationFilter {
    fn kind(&self) -> TransitionKind {
        TransitionKind::Navigation
    }

    fn try_compose(&self, inputs: &TransitionInputs) -> PushfxResult<Image> {
        let prepared = inputs.prepare()?;
        let (extent, push) = (prepared.extent, prepared.push);

        let back = prepared.roles.outgoing;
        let mut back = stages::keep_on_failure(
            back,
            stages::translate(back, parallax_offset(extent, push), 0.0),
        );

        let crop = back_crop(extent, push);
        let (alpha0, alpha1) = shadow_alphas(push);
        let shadow = stages::smooth_linear_gradient(
            Point::new(crop.x0, 0.0),
            Point::new(crop.x1, 0.0),
            black(alpha0),
            black(alpha1),
        );
        match shadow {
            Ok(shadow) => back = shadow.composited_over(&back),
            Err(err) => tracing::debug!(%err, "navigation shadow skipped"),
        }
        let back = stages::keep_on_failure(&back, stages::crop(&back, crop));

        let front = prepared.roles.incoming;
        let front = stages::keep_on_failure(front, stages::translate(front, crop.x1, 0.0));

        Ok(front.composited_over(&back))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transitions/navigation.rs"]
mod tests;
