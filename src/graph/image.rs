use std::sync::Arc;

use crate::effects::composite::{PremulRgbaF, from_rgba8};
use crate::foundation::core::{Affine, Point, Rect, Rgba8Premul};
use crate::graph::raster::Raster;

/// Region of the plane an image may cover.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Extent {
    /// Unbounded (solid colors, gradients and anything derived from them).
    Infinite,
    /// Bounded; pixels outside the rect are transparent.
    Finite(Rect),
}

impl Extent {
    /// The empty extent.
    pub const EMPTY: Self = Self::Finite(Rect::ZERO);

    /// Return `true` when no pixel can be covered.
    pub fn is_empty(self) -> bool {
        match self {
            Self::Infinite => false,
            Self::Finite(r) => !(r.width() > 0.0 && r.height() > 0.0),
        }
    }

    /// Smallest extent covering both.
    pub fn union(self, other: Self) -> Self {
        match (self, other) {
            (Self::Infinite, _) | (_, Self::Infinite) => Self::Infinite,
            (a, b) if a.is_empty() => b,
            (a, b) if b.is_empty() => a,
            (Self::Finite(a), Self::Finite(b)) => Self::Finite(a.union(b)),
        }
    }

    /// Part of this extent inside `rect`.
    pub fn intersect(self, rect: Rect) -> Self {
        match self {
            Self::Infinite => Self::Finite(rect),
            Self::Finite(r) => {
                let i = r.intersect(rect);
                if i.width() > 0.0 && i.height() > 0.0 {
                    Self::Finite(i)
                } else {
                    Self::EMPTY
                }
            }
        }
    }

    /// Bounding box of this extent after `affine`.
    pub fn transformed(self, affine: Affine) -> Self {
        match self {
            Self::Infinite => Self::Infinite,
            e if e.is_empty() => Self::EMPTY,
            Self::Finite(r) => Self::Finite(affine.transform_rect_bbox(r)),
        }
    }
}

/// Parameters of a color-controls adjustment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorControls {
    /// Luma mix factor; `1` is identity, `0` is grayscale.
    pub saturation: f64,
    /// Additive offset on straight color; `0` is identity.
    pub brightness: f64,
    /// Scale around mid-gray; `1` is identity.
    pub contrast: f64,
}

impl Default for ColorControls {
    fn default() -> Self {
        Self {
            saturation: 1.0,
            brightness: 0.0,
            contrast: 1.0,
        }
    }
}

/// Parameters of a radial bump distortion.
///
/// Positive `scale` bulges the image out of `center`, negative `scale` pinches it inward.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bump {
    /// Focal point.
    pub center: Point,
    /// Radius of the affected disc.
    pub radius: f64,
    /// Signed strength.
    pub scale: f64,
}

/// Parameters of a smooth two-stop linear gradient.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearGradient {
    /// Point where `color0` is fully applied.
    pub point0: Point,
    /// Point where `color1` is fully applied.
    pub point1: Point,
    /// Premultiplied start color.
    pub color0: PremulRgbaF,
    /// Premultiplied end color.
    pub color1: PremulRgbaF,
}

#[derive(Debug)]
pub(crate) enum Node {
    Empty,
    Solid(PremulRgbaF),
    Raster(Arc<Raster>),
    Gradient(LinearGradient),
    Transform {
        src: Image,
        affine: Affine,
        inverse: Affine,
    },
    Crop {
        src: Image,
        rect: Rect,
    },
    ColorControls {
        src: Image,
        controls: ColorControls,
    },
    Bump {
        src: Image,
        bump: Bump,
    },
    Over {
        front: Image,
        back: Image,
    },
}

/// A lazy image: a cheaply clonable description of how to produce pixels.
///
/// Building stages never touches pixels; evaluation happens when the image is sampled or
/// rendered (see [`crate::render_region`]).
#[derive(Clone, Debug)]
pub struct Image {
    pub(crate) node: Arc<Node>,
}

impl Image {
    pub(crate) fn from_node(node: Node) -> Self {
        Self {
            node: Arc::new(node),
        }
    }

    /// An image with no pixels.
    pub fn empty() -> Self {
        Self::from_node(Node::Empty)
    }

    /// An infinite image of one color.
    pub fn solid(color: Rgba8Premul) -> Self {
        Self::from_node(Node::Solid(from_rgba8(color)))
    }

    /// A raster placed with its top-left corner at the origin.
    pub fn from_raster(raster: Raster) -> Self {
        Self::from_node(Node::Raster(Arc::new(raster)))
    }

    /// Premultiply and wrap a straight-alpha `image::RgbaImage`.
    pub fn from_rgba_image(img: &image::RgbaImage) -> Self {
        Self::from_raster(Raster::from_rgba_image(img))
    }

    /// Composite `self` over `back`.
    pub fn composited_over(&self, back: &Image) -> Image {
        if self.is_empty() {
            return back.clone();
        }
        if back.is_empty() {
            return self.clone();
        }
        Self::from_node(Node::Over {
            front: self.clone(),
            back: back.clone(),
        })
    }

    /// Region this image may cover.
    pub fn extent(&self) -> Extent {
        match &*self.node {
            Node::Empty => Extent::EMPTY,
            Node::Solid(_) | Node::Gradient(_) => Extent::Infinite,
            Node::Raster(r) => Extent::Finite(r.bounds()),
            Node::Transform { src, affine, .. } => src.extent().transformed(*affine),
            Node::Crop { src, rect } => src.extent().intersect(*rect),
            Node::ColorControls { src, .. } => src.extent(),
            Node::Bump { src, bump } => {
                let disc = Rect::from_center_size(
                    bump.center,
                    (bump.radius.abs() * 2.0, bump.radius.abs() * 2.0),
                );
                match src.extent() {
                    e if e.is_empty() => Extent::EMPTY,
                    e => e.union(Extent::Finite(disc)),
                }
            }
            Node::Over { front, back } => front.extent().union(back.extent()),
        }
    }

    /// Return `true` when the image has no pixels.
    pub fn is_empty(&self) -> bool {
        self.extent().is_empty()
    }

    /// Number of nodes in this image's graph, counting shared nodes once per use.
    pub fn stage_count(&self) -> usize {
        1 + match &*self.node {
            Node::Empty | Node::Solid(_) | Node::Raster(_) | Node::Gradient(_) => 0,
            Node::Transform { src, .. }
            | Node::Crop { src, .. }
            | Node::ColorControls { src, .. }
            | Node::Bump { src, .. } => src.stage_count(),
            Node::Over { front, back } => front.stage_count() + back.stage_count(),
        }
    }

    /// Return `true` when both handles share the same graph node.
    pub fn ptr_eq(&self, other: &Image) -> bool {
        Arc::ptr_eq(&self.node, &other.node)
    }
}
