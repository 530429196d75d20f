//! Blipline Declarative Inputs
//!
//! This crate holds everything the synthesis engine consumes but does not
//! compute: voice profiles, presets, voice-tagged scripts and multi-track
//! sheets. Inputs are JSON documents or plain text.
//!
//! # Example
//!
//! ```
//! use blipline_spec::{parse_script, preset, VoiceProfile};
//!
//! let narrator = VoiceProfile::new(1.0, 80.0);
//! let parsed = parse_script("[villain] Mwahaha!", &narrator);
//!
//! assert_eq!(parsed.plain_text, "Mwahaha!");
//! assert_eq!(*parsed.sequence[0].profile, preset("villain").unwrap().effective());
//! ```
//!
//! # Modules
//!
//! - [`error`]: Error type for loading and validation
//! - [`profile`]: Voice profiles, defaults normalization and fingerprints
//! - [`presets`]: Built-in character presets
//! - [`script`]: Voice-tag parsing and plain-text sequence producers
//! - [`track`]: Multi-track sheets

pub mod error;
pub mod presets;
pub mod profile;
pub mod script;
pub mod track;

// Re-export commonly used types at the crate root
pub use error::{SpecError, SpecResult};
pub use presets::{all_presets, preset, require_preset, PRESET_NAMES};
pub use profile::{
    EffectiveProfile, ProfileFingerprint, VoiceProfile, Waveform, DEFAULT_CHAR_DELAY_MS,
    DEFAULT_SPACE_DELAY_MS, DEFAULT_VOLUME,
};
pub use script::{
    filter_supported, is_supported_char, parse_script, sequence_from_text, ParsedScript,
    VoicedChar,
};
pub use track::{ProfileRef, TrackRow, TrackSheet};
