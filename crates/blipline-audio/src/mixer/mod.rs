//! Slot mixing with gain and clip-safe normalization.
//!
//! This module sums arbitrarily positioned, gain-scaled buffers into one mono
//! output and pulls the result back under full scale when the sum clips.

#[allow(clippy::module_inception)]
mod mixer;
mod processing;
mod types;

#[cfg(test)]
mod tests_mixing;
#[cfg(test)]
mod tests_normalization;

// Re-export public API
pub use mixer::{BufferMixer, MAX_MIX_SAMPLES};
pub use processing::{normalize_to_headroom, peak, HEADROOM_TARGET};
pub use types::MixSlot;
