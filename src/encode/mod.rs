//! Frame sinks.
//!
//! Sinks consume rendered transition frames in sample order and are fed by
//! [`render_transition`](crate::render_transition).

/// PNG image-sequence sink.
pub mod png;
/// Generic frame sink trait and the in-memory sink.
pub mod sink;
