//! Lazy image graph: leaves, stage nodes, and point sampling.

pub(crate) mod image;
pub(crate) mod raster;
pub(crate) mod sample;
