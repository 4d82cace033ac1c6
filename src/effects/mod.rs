//! Pixel compositing math and the fallible child stages transitions are built from.

pub(crate) mod composite;
pub mod stages;
