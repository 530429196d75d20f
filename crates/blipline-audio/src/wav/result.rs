//! Encoded WAV output type.

/// A WAV file plus facts about its audio.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedAudio {
    /// Complete WAV file bytes.
    pub wav_data: Vec<u8>,
    /// BLAKE3 hash of the PCM payload only.
    pub pcm_hash: String,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Channel count written to the header.
    pub channels: u16,
    /// Number of frames (samples per channel).
    pub num_frames: usize,
}

impl EncodedAudio {
    /// Returns the duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.num_frames as f64 / self.sample_rate as f64
    }

    /// Returns the file size in bytes.
    pub fn len(&self) -> usize {
        self.wav_data.len()
    }

    /// Returns true if no bytes were produced.
    pub fn is_empty(&self) -> bool {
        self.wav_data.is_empty()
    }
}
