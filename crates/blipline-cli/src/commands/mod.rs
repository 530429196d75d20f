//! CLI command implementations

pub mod mix;
pub mod presets;
pub mod render;
