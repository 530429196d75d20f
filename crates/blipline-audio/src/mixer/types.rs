//! Core types for slot mixing.

use crate::buffer::SampleBuffer;

/// A buffer placed on the output timeline with a gain.
#[derive(Debug, Clone, Copy)]
pub struct MixSlot<'a> {
    /// Source audio (channel 0 is mixed).
    pub buffer: &'a SampleBuffer,
    /// Position of the first sample, in milliseconds.
    pub start_ms: f64,
    /// Linear gain; values above 1.0 are allowed and drive normalization.
    pub gain: f64,
}

impl<'a> MixSlot<'a> {
    /// Creates a slot at 0 ms with unity gain.
    pub fn new(buffer: &'a SampleBuffer) -> Self {
        Self {
            buffer,
            start_ms: 0.0,
            gain: 1.0,
        }
    }

    /// Sets the start position in milliseconds.
    pub fn at_ms(mut self, start_ms: f64) -> Self {
        self.start_ms = start_ms;
        self
    }

    /// Sets the gain.
    pub fn with_gain(mut self, gain: f64) -> Self {
        self.gain = gain;
        self
    }
}
