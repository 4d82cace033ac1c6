//! Child stages used by transition filters.
//!
//! Each stage builds a new lazy [`Image`] node from its input and parameters. A stage fails with
//! [`StageFailure`] when its parameters cannot describe an image (non-finite numbers, degenerate
//! geometry). Filters absorb such failures with [`keep_on_failure`], carrying on with the
//! pre-stage image.

use crate::effects::composite::PremulRgbaF;
use crate::foundation::core::{Affine, Point, Rect};
use crate::foundation::math::all_finite;
use crate::graph::image::{Bump, ColorControls, Image, LinearGradient, Node};

/// Result of building one child stage.
pub type StageResult = Result<Image, StageFailure>;

/// Why a child stage produced no image.
#[derive(thiserror::Error, Clone, Debug, PartialEq)]
pub enum StageFailure {
    /// A parameter was `NaN` or infinite.
    #[error("{stage}: parameter '{param}' is not finite")]
    NonFinite {
        /// Stage name.
        stage: &'static str,
        /// Offending parameter.
        param: &'static str,
    },

    /// Parameters are finite but describe no usable geometry.
    #[error("{stage}: {reason}")]
    Degenerate {
        /// Stage name.
        stage: &'static str,
        /// Human-readable cause.
        reason: &'static str,
    },
}

// Determinants below this collapse the image to nothing.
const MIN_DETERMINANT: f64 = 1e-12;

/// Transform `src` by `affine`.
///
/// A singular transform (e.g. zero scale) collapses the image to [`Image::empty`].
pub fn affine_transform(src: &Image, affine: Affine) -> StageResult {
    if !all_finite(&affine.as_coeffs()) {
        return Err(StageFailure::NonFinite {
            stage: "affine_transform",
            param: "transform",
        });
    }
    if affine == Affine::IDENTITY {
        return Ok(src.clone());
    }
    if affine.determinant().abs() < MIN_DETERMINANT {
        return Ok(Image::empty());
    }
    Ok(Image::from_node(Node::Transform {
        src: src.clone(),
        affine,
        inverse: affine.inverse(),
    }))
}

/// Translate `src` by `(dx, dy)`.
pub fn translate(src: &Image, dx: f64, dy: f64) -> StageResult {
    affine_transform(src, Affine::translate((dx, dy)))
}

/// Keep only the part of `src` inside `rect`. A zero-area rect yields [`Image::empty`].
pub fn crop(src: &Image, rect: Rect) -> StageResult {
    if !all_finite(&[rect.x0, rect.y0, rect.x1, rect.y1]) {
        return Err(StageFailure::NonFinite {
            stage: "crop",
            param: "rect",
        });
    }
    let rect = rect.abs();
    if rect.width() <= 0.0 || rect.height() <= 0.0 {
        return Ok(Image::empty());
    }
    Ok(Image::from_node(Node::Crop {
        src: src.clone(),
        rect,
    }))
}

/// Adjust saturation, brightness and contrast of `src`.
pub fn color_controls(src: &Image, controls: ColorControls) -> StageResult {
    let ColorControls {
        saturation,
        brightness,
        contrast,
    } = controls;
    if !all_finite(&[saturation, brightness, contrast]) {
        return Err(StageFailure::NonFinite {
            stage: "color_controls",
            param: "controls",
        });
    }
    if controls == ColorControls::default() {
        return Ok(src.clone());
    }
    Ok(Image::from_node(Node::ColorControls {
        src: src.clone(),
        controls,
    }))
}

/// Radially distort `src` around `bump.center`.
///
/// A non-positive radius or zero scale leaves the image untouched.
pub fn bump_distortion(src: &Image, bump: Bump) -> StageResult {
    if !all_finite(&[bump.center.x, bump.center.y]) {
        return Err(StageFailure::NonFinite {
            stage: "bump_distortion",
            param: "center",
        });
    }
    if !bump.radius.is_finite() {
        return Err(StageFailure::NonFinite {
            stage: "bump_distortion",
            param: "radius",
        });
    }
    if !bump.scale.is_finite() {
        return Err(StageFailure::NonFinite {
            stage: "bump_distortion",
            param: "scale",
        });
    }
    if bump.radius <= 0.0 || bump.scale == 0.0 {
        return Ok(src.clone());
    }
    Ok(Image::from_node(Node::Bump {
        src: src.clone(),
        bump,
    }))
}

/// Infinite two-stop gradient with smoothstep interpolation between the points.
pub fn smooth_linear_gradient(
    point0: Point,
    point1: Point,
    color0: PremulRgbaF,
    color1: PremulRgbaF,
) -> StageResult {
    if !all_finite(&[point0.x, point0.y, point1.x, point1.y]) {
        return Err(StageFailure::NonFinite {
            stage: "smooth_linear_gradient",
            param: "points",
        });
    }
    if color0.iter().chain(color1.iter()).any(|c| !c.is_finite()) {
        return Err(StageFailure::NonFinite {
            stage: "smooth_linear_gradient",
            param: "colors",
        });
    }
    if (point1 - point0).hypot2() <= 0.0 {
        return Err(StageFailure::Degenerate {
            stage: "smooth_linear_gradient",
            reason: "gradient points coincide",
        });
    }
    Ok(Image::from_node(Node::Gradient(LinearGradient {
        point0,
        point1,
        color0,
        color1,
    })))
}

/// Unwrap a stage result, falling back to `previous` when the stage failed.
pub fn keep_on_failure(previous: &Image, stage: StageResult) -> Image {
    match stage {
        Ok(img) => img,
        Err(err) => {
            tracing::debug!(%err, "stage degraded; keeping pre-stage image");
            previous.clone()
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/stages.rs"]
mod tests;
