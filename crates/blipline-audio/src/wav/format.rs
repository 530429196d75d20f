//! WAV file format parameters.

/// Size of the canonical RIFF/fmt/data header in bytes.
pub const HEADER_LEN: usize = 44;

/// Header fields of a PCM WAV file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavFormat {
    /// Number of channels (1 = mono).
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bits per sample.
    pub bits_per_sample: u16,
    /// Write the byte rate as `sample_rate * 4` regardless of channel count.
    ///
    /// Some existing consumers of blip exports expect this value.
    pub legacy_byte_rate: bool,
}

impl WavFormat {
    /// Creates a 16-bit format with the given channel count.
    pub fn pcm16(channels: u16, sample_rate: u32) -> Self {
        Self {
            channels,
            sample_rate,
            bits_per_sample: 16,
            legacy_byte_rate: false,
        }
    }

    /// Creates a mono WAV format.
    pub fn mono(sample_rate: u32) -> Self {
        Self::pcm16(1, sample_rate)
    }

    /// Bytes in one frame across all channels.
    pub(crate) fn block_align(&self) -> u16 {
        self.channels.saturating_mul(self.bits_per_sample / 8)
    }

    /// Header byte rate: `rate * block_align`, or `rate * 4` in legacy mode.
    pub(crate) fn byte_rate(&self) -> u32 {
        let per_frame = if self.legacy_byte_rate {
            4
        } else {
            u32::from(self.block_align())
        };
        self.sample_rate.saturating_mul(per_frame)
    }
}
