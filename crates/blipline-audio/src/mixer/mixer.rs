//! Slot mixer.

use tracing::debug;

use super::processing::normalize_to_headroom;
use super::types::MixSlot;
use crate::buffer::{SampleBuffer, SampleRate, MAX_BUFFER_SAMPLES};
use crate::error::{AudioError, AudioResult};

/// Largest output the mixer will allocate.
pub const MAX_MIX_SAMPLES: usize = MAX_BUFFER_SAMPLES;

/// Mixes positioned buffers into one mono buffer.
#[derive(Debug, Clone, Copy)]
pub struct BufferMixer {
    sample_rate: SampleRate,
}

impl BufferMixer {
    /// Creates a mixer producing output at `sample_rate`.
    pub fn new(sample_rate: SampleRate) -> Self {
        Self { sample_rate }
    }

    /// Returns the output sample rate.
    pub fn sample_rate(&self) -> SampleRate {
        self.sample_rate
    }

    /// Output length for `slots`, as computed before any bounds checks.
    ///
    /// The maximum over slots of `floor(start_ms / 1000 * rate) + len`.
    pub fn output_len(&self, slots: &[MixSlot<'_>]) -> f64 {
        slots
            .iter()
            .map(|slot| self.sample_rate.offset_for_ms(slot.start_ms) + slot.buffer.len() as f64)
            .fold(0.0_f64, f64::max)
    }

    /// Sums every slot into a fresh buffer and normalizes if the sum clips.
    ///
    /// An empty slot list, or one whose output length is not a positive finite
    /// number, yields one silent sample. Samples that land before 0 or past the
    /// end are dropped.
    ///
    /// # Arguments
    /// * `slots` - Buffers with their start offsets and gains
    ///
    /// # Returns
    /// The mixed mono buffer, or an error on a sample rate mismatch, a
    /// non-finite gain, or an output longer than [`MAX_MIX_SAMPLES`]
    pub fn mix(&self, slots: &[MixSlot<'_>]) -> AudioResult<SampleBuffer> {
        if slots.is_empty() {
            return Ok(SampleBuffer::silent(1, self.sample_rate));
        }
        for slot in slots {
            slot.buffer.ensure_rate(self.sample_rate)?;
            if !slot.gain.is_finite() {
                return Err(AudioError::invalid_param(
                    "gain",
                    format!("must be finite, got {}", slot.gain),
                ));
            }
        }

        let total = self.output_len(slots);
        if !total.is_finite() || total <= 0.0 {
            return Ok(SampleBuffer::silent(1, self.sample_rate));
        }
        if total > MAX_MIX_SAMPLES as f64 {
            return Err(AudioError::invalid_param(
                "start_ms",
                format!("mix would span {} samples (limit {})", total, MAX_MIX_SAMPLES),
            ));
        }

        let len = total as usize;
        let mut output = vec![0.0; len];

        for slot in slots {
            let start = self.sample_rate.offset_for_ms(slot.start_ms);
            if !start.is_finite() {
                continue;
            }
            let start = start as i64;
            for (i, &sample) in slot.buffer.samples().iter().enumerate() {
                let idx = start + i as i64;
                if idx >= 0 && (idx as usize) < len {
                    output[idx as usize] += sample * slot.gain;
                }
            }
        }

        let applied = normalize_to_headroom(&mut output);
        debug!(
            slots = slots.len(),
            samples = len,
            normalized = applied.is_some(),
            "mixed slots"
        );

        Ok(SampleBuffer::mono(output, self.sample_rate))
    }
}
