//! Sample buffers and the engine-wide sample rate.

use std::fmt;

use crate::error::{AudioError, AudioResult};

/// Largest buffer the engine will allocate (the 16-bit WAV data chunk limit).
pub const MAX_BUFFER_SAMPLES: usize = (u32::MAX / 2) as usize;

/// Sample rate in Hz, threaded explicitly through every engine component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SampleRate(u32);

impl SampleRate {
    /// CD-quality rate used when nothing else is configured.
    pub const DEFAULT: SampleRate = SampleRate(44_100);

    /// Creates a sample rate, rejecting zero.
    pub fn new(hz: u32) -> AudioResult<Self> {
        if hz == 0 {
            return Err(AudioError::InvalidSampleRate { rate: hz });
        }
        Ok(Self(hz))
    }

    /// Returns the rate in Hz.
    pub fn hz(self) -> u32 {
        self.0
    }

    /// Returns the rate as a float for signal arithmetic.
    pub fn as_f64(self) -> f64 {
        self.0 as f64
    }

    /// Number of samples covering `duration_ms`, never less than one.
    ///
    /// Computed as `floor(rate * ms / 1000)`.
    pub fn samples_for_ms(self, duration_ms: f64) -> usize {
        let samples = (self.as_f64() * duration_ms / 1000.0).floor();
        if samples.is_finite() && samples >= 1.0 {
            samples as usize
        } else {
            1
        }
    }

    /// Like [`samples_for_ms`](Self::samples_for_ms), but fails past [`MAX_BUFFER_SAMPLES`].
    ///
    /// # Arguments
    /// * `duration_ms` - Span to cover
    /// * `name` - Parameter named in the error
    pub fn bounded_samples_for_ms(self, duration_ms: f64, name: &str) -> AudioResult<usize> {
        let samples = (self.as_f64() * duration_ms / 1000.0).floor();
        if samples > MAX_BUFFER_SAMPLES as f64 {
            return Err(AudioError::invalid_param(
                name,
                format!(
                    "{} ms spans {} samples (limit {})",
                    duration_ms, samples, MAX_BUFFER_SAMPLES
                ),
            ));
        }
        Ok(self.samples_for_ms(duration_ms))
    }

    /// Sample index of a position on a timeline, computed as `floor(ms / 1000 * rate)`.
    pub fn offset_for_ms(self, position_ms: f64) -> f64 {
        (position_ms / 1000.0 * self.as_f64()).floor()
    }
}

impl Default for SampleRate {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for SampleRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Hz", self.0)
    }
}

/// Floating-point audio with a declared channel count.
///
/// The declared channel count may exceed the number of channels that carry
/// data; readers fall back to channel 0 for the missing ones.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleBuffer {
    channel_count: u16,
    channels: Vec<Vec<f64>>,
    sample_rate: SampleRate,
}

impl SampleBuffer {
    /// Creates a mono buffer.
    pub fn mono(samples: Vec<f64>, sample_rate: SampleRate) -> Self {
        Self {
            channel_count: 1,
            channels: vec![samples],
            sample_rate,
        }
    }

    /// Creates a buffer with `channel_count` declared channels and the given data.
    pub fn with_channels(
        channel_count: u16,
        channels: Vec<Vec<f64>>,
        sample_rate: SampleRate,
    ) -> Self {
        Self {
            channel_count,
            channels,
            sample_rate,
        }
    }

    /// Creates a zero-filled mono buffer of `len` samples.
    pub fn silent(len: usize, sample_rate: SampleRate) -> Self {
        Self::mono(vec![0.0; len], sample_rate)
    }

    /// Creates a zero-filled mono buffer lasting `duration_ms` (at least one sample).
    pub fn silence_ms(duration_ms: f64, sample_rate: SampleRate) -> Self {
        Self::silent(sample_rate.samples_for_ms(duration_ms), sample_rate)
    }

    /// Returns the declared number of channels.
    pub fn channel_count(&self) -> u16 {
        self.channel_count
    }

    /// Returns the sample rate.
    pub fn sample_rate(&self) -> SampleRate {
        self.sample_rate
    }

    /// Number of frames (the length of the longest channel).
    pub fn len(&self) -> usize {
        self.channels.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Returns true if the buffer holds no frames.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a channel's data, if present.
    pub fn channel(&self, index: usize) -> Option<&[f64]> {
        self.channels.get(index).map(Vec::as_slice)
    }

    /// Returns the first channel's data (empty if there is none).
    pub fn samples(&self) -> &[f64] {
        self.channel(0).unwrap_or(&[])
    }

    /// Duration in milliseconds implied by the frame count.
    pub fn duration_ms(&self) -> f64 {
        self.len() as f64 * 1000.0 / self.sample_rate.as_f64()
    }

    /// Largest absolute sample value across all channels.
    pub fn peak(&self) -> f64 {
        self.channels
            .iter()
            .flatten()
            .map(|s| s.abs())
            .fold(0.0_f64, |a, b| a.max(b))
    }

    /// Returns an error if this buffer's rate differs from `expected`.
    pub fn ensure_rate(&self, expected: SampleRate) -> AudioResult<()> {
        if self.sample_rate != expected {
            return Err(AudioError::SampleRateMismatch {
                expected: expected.hz(),
                found: self.sample_rate.hz(),
            });
        }
        Ok(())
    }

    /// Concatenates the first channel of each part into one mono buffer.
    ///
    /// Every part must share `sample_rate`. An empty list yields one silent sample.
    pub fn concat<'a, I>(parts: I, sample_rate: SampleRate) -> AudioResult<SampleBuffer>
    where
        I: IntoIterator<Item = &'a SampleBuffer>,
    {
        let mut output = Vec::new();
        let mut any = false;
        for part in parts {
            part.ensure_rate(sample_rate)?;
            output.extend_from_slice(part.samples());
            any = true;
        }
        if !any {
            return Ok(SampleBuffer::silent(1, sample_rate));
        }
        Ok(SampleBuffer::mono(output, sample_rate))
    }
}
