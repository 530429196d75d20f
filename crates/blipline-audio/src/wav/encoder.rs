//! WAV encoder builder.

use tracing::debug;

use super::format::{WavFormat, HEADER_LEN};
use super::result::EncodedAudio;
use super::writer::{interleave_pcm16, write_wav_to_vec};
use crate::buffer::SampleBuffer;
use crate::error::{AudioError, AudioResult};

/// Encodes sample buffers as 16-bit PCM WAV.
#[derive(Debug, Clone, Copy, Default)]
pub struct WavEncoder {
    legacy_byte_rate: bool,
}

impl WavEncoder {
    /// Creates an encoder that writes the standard byte rate.
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes `sample_rate * 4` as the byte rate regardless of channel count.
    pub fn legacy_byte_rate(mut self, enabled: bool) -> Self {
        self.legacy_byte_rate = enabled;
        self
    }

    /// Encodes a buffer into a WAV file.
    ///
    /// # Arguments
    /// * `buffer` - Samples to encode; every declared channel is written
    ///
    /// # Returns
    /// The file bytes with a BLAKE3 hash of the PCM data, or an error if
    /// the buffer has no channels or is too large for a WAV file
    pub fn encode(&self, buffer: &SampleBuffer) -> AudioResult<EncodedAudio> {
        let channels = buffer.channel_count();
        if channels == 0 {
            return Err(AudioError::NoChannels);
        }

        let data_len = buffer.len() as u64 * channels as u64 * 2;
        if data_len + HEADER_LEN as u64 > u32::MAX as u64 {
            return Err(AudioError::invalid_param(
                "buffer",
                format!("{} bytes of PCM exceed the WAV size limit", data_len),
            ));
        }

        let mut format = WavFormat::pcm16(channels, buffer.sample_rate().hz());
        format.legacy_byte_rate = self.legacy_byte_rate;

        let pcm = interleave_pcm16(buffer);
        let pcm_hash = blake3::hash(&pcm).to_hex().to_string();
        let wav_data = write_wav_to_vec(&format, &pcm)?;

        debug!(
            channels,
            frames = buffer.len(),
            bytes = wav_data.len(),
            "encoded wav"
        );

        Ok(EncodedAudio {
            wav_data,
            pcm_hash,
            sample_rate: format.sample_rate,
            channels,
            num_frames: buffer.len(),
        })
    }

    /// Encodes a buffer and returns only the file bytes.
    pub fn encode_bytes(&self, buffer: &SampleBuffer) -> AudioResult<Vec<u8>> {
        Ok(self.encode(buffer)?.wav_data)
    }
}
