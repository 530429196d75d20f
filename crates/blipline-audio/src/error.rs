//! Error types for the audio engine.

use thiserror::Error;

/// Result type for audio operations.
pub type AudioResult<T> = Result<T, AudioError>;

/// Errors that can occur during synthesis, mixing or export.
#[derive(Debug, Error)]
pub enum AudioError {
    /// Invalid sample rate.
    #[error("invalid sample rate: {rate}")]
    InvalidSampleRate {
        /// The invalid sample rate.
        rate: u32,
    },

    /// Two buffers with different sample rates were combined.
    #[error("sample rate mismatch: expected {expected} Hz, found {found} Hz")]
    SampleRateMismatch {
        /// Rate of the engine or output.
        expected: u32,
        /// Rate of the offending buffer.
        found: u32,
    },

    /// A buffer with zero channels was handed to the encoder.
    #[error("cannot encode a buffer with no channels")]
    NoChannels,

    /// Invalid parameter value.
    #[error("invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Parameter name.
        name: String,
        /// Error message.
        message: String,
    },

    /// Subtitle text does not correspond to the timing entries.
    #[error(transparent)]
    Subtitle(#[from] SubtitleError),

    /// A profile or track sheet failed validation.
    #[error(transparent)]
    Spec(#[from] blipline_spec::SpecError),

    /// Creating the export archive failed.
    #[error("archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AudioError {
    /// Creates an invalid parameter error.
    pub fn invalid_param(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Returns a stable error code string (e.g., "AUDIO_002").
    pub fn code(&self) -> &'static str {
        match self {
            AudioError::InvalidSampleRate { .. } => "AUDIO_001",
            AudioError::SampleRateMismatch { .. } => "AUDIO_002",
            AudioError::NoChannels => "AUDIO_003",
            AudioError::InvalidParameter { .. } => "AUDIO_004",
            AudioError::Subtitle(_) => "AUDIO_005",
            AudioError::Spec(_) => "AUDIO_006",
            AudioError::Archive(_) => "AUDIO_007",
            AudioError::Io(_) => "AUDIO_008",
        }
    }
}

/// Errors raised by the strict subtitle aligner.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubtitleError {
    /// The source text and the timing entries diverge.
    #[error(
        "subtitle text does not match timing at character {index}: expected {expected:?}, found {found:?}"
    )]
    Mismatch {
        /// Character index into the source text (or its length for leftover entries).
        index: usize,
        /// Character in the source text, if any.
        expected: Option<char>,
        /// Character of the timing entry, if any.
        found: Option<char>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_param_helper() {
        let err = AudioError::invalid_param("bars", "must be at least 1");
        assert!(err.to_string().contains("bars"));
        assert!(err.to_string().contains("at least 1"));
    }

    #[test]
    fn test_subtitle_mismatch_converts() {
        let err: AudioError = SubtitleError::Mismatch {
            index: 3,
            expected: Some('a'),
            found: None,
        }
        .into();
        assert_eq!(err.code(), "AUDIO_005");
        assert!(err.to_string().contains("character 3"));
    }

    #[test]
    fn test_mismatch_message() {
        let err = AudioError::SampleRateMismatch {
            expected: 44100,
            found: 48000,
        };
        assert_eq!(
            err.to_string(),
            "sample rate mismatch: expected 44100 Hz, found 48000 Hz"
        );
        assert_eq!(err.code(), "AUDIO_002");
    }
}
