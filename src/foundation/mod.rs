//! Shared value types, errors, and numeric helpers.

pub(crate) mod color;
pub(crate) mod core;
pub(crate) mod error;
pub(crate) mod math;
