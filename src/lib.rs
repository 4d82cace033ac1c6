//! pushfx composes image-based view transitions.
//!
//! Each transition is a pure filter mapping a source image, a destination image, a time in
//! `[0, 1]`, a viewport extent and a direction flag to one composited frame:
//!
//! - [`TransitionKind::Navigation`]: the destination slides in from the right while the source
//!   slides left at half speed under a growing shadow
//! - [`TransitionKind::Genie`]: the destination is pulled out of the left edge with a relaxing
//!   pinch
//! - [`TransitionKind::Spread`]: the destination grows out of a focal point
//! - [`TransitionKind::Tab`]: both views pan across a side-by-side strip, zooming out midway
//!
//! Filters build a lazy [`Image`] graph; pixels are produced only by the CPU rasterizer
//! ([`render_region`]) or the sequence driver ([`render_transition`]), which feeds a
//! [`FrameSink`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod effects;
mod foundation;
mod graph;

/// Frame sinks.
pub mod encode;
/// Rasterization and the frame-sequence driver.
pub mod render;
/// Transition filters and their input contract.
pub mod transitions;

pub use crate::foundation::color::parse_hex_color;
pub use crate::foundation::core::{Affine, Point, Rect, Rgba8Premul, Vec2};
pub use crate::foundation::error::{InputKey, PushfxError, PushfxResult};

pub use crate::animation::ease::Ease;
pub use crate::effects::composite::PremulRgbaF;
pub use crate::effects::stages::{self, StageFailure, StageResult};
pub use crate::graph::image::{Bump, ColorControls, Extent, Image, LinearGradient};
pub use crate::graph::raster::Raster;

pub use crate::encode::png::PngSequenceSink;
pub use crate::encode::sink::{CapturedFrame, FrameSink, InMemorySink, SinkConfig};
pub use crate::render::cpu::{MAX_RENDER_DIM, RenderThreading, render_region, render_region_with};
pub use crate::render::pipeline::{
    RenderStats, render_frame, render_transition, render_transition_with, solid_layer,
};

pub use crate::transitions::genie::GenieFilter;
pub use crate::transitions::kind::TransitionKind;
pub use crate::transitions::navigation::NavigationFilter;
pub use crate::transitions::schema::{FilterAttributes, ParamClass, ParamDescriptor, ParamValue};
pub use crate::transitions::spec::TransitionSpec;
pub use crate::transitions::spread::SpreadFilter;
pub use crate::transitions::tab::TabFilter;
pub use crate::transitions::{
    LayerRoles, TransitionFilter, TransitionInputs, back_brightness, push_progress,
};
