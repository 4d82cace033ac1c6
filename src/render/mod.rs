//! Rasterization of image graphs and the frame-sequence driver.

/// CPU rasterizer.
pub mod cpu;
/// Transition frame-sequence driver.
pub mod pipeline;
