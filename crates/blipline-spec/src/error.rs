//! Error types for profile loading and validation.

use thiserror::Error;

/// Result type for spec operations.
pub type SpecResult<T> = Result<T, SpecError>;

/// Errors that can occur while loading or validating declarative inputs.
#[derive(Debug, Error)]
pub enum SpecError {
    /// JSON could not be parsed into the expected type.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error while reading a file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A profile field is out of range.
    #[error("invalid profile field '{field}': {message}")]
    InvalidProfile {
        /// Field name.
        field: &'static str,
        /// Error message.
        message: String,
    },

    /// A preset name did not match any built-in preset.
    #[error("unknown preset: {name}")]
    UnknownPreset {
        /// The requested preset name.
        name: String,
    },

    /// A track sheet contains no tracks.
    #[error("track sheet contains no tracks")]
    EmptyTrackSheet,
}

impl SpecError {
    /// Creates an invalid profile error.
    pub fn invalid_profile(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidProfile {
            field,
            message: message.into(),
        }
    }

    /// Returns a stable error code string (e.g., "SPEC_003").
    pub fn code(&self) -> &'static str {
        match self {
            SpecError::Json(_) => "SPEC_001",
            SpecError::Io(_) => "SPEC_002",
            SpecError::InvalidProfile { .. } => "SPEC_003",
            SpecError::UnknownPreset { .. } => "SPEC_004",
            SpecError::EmptyTrackSheet => "SPEC_005",
        }
    }
}
