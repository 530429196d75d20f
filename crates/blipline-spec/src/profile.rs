//! Voice profiles and their normalized, fully-populated form.
//!
//! A [`VoiceProfile`] is what users write (JSON or presets): the delay and
//! volume fields are optional. Every engine component consumes an
//! [`EffectiveProfile`] instead, produced once by [`VoiceProfile::effective`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{SpecError, SpecResult};

/// Volume used when a profile leaves it unset.
pub const DEFAULT_VOLUME: f64 = 0.7;
/// Inter-character delay used when a profile leaves it unset.
pub const DEFAULT_CHAR_DELAY_MS: f64 = 10.0;
/// Word-gap (space) delay used when a profile leaves it unset.
pub const DEFAULT_SPACE_DELAY_MS: f64 = 50.0;

/// Basic waveform types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Waveform {
    /// Square wave.
    Square,
    /// Sine wave.
    #[default]
    Sine,
    /// Sawtooth wave.
    Sawtooth,
    /// Triangle wave.
    Triangle,
}

impl Waveform {
    /// All waveform kinds, in declaration order.
    pub const ALL: [Waveform; 4] = [
        Waveform::Square,
        Waveform::Sine,
        Waveform::Sawtooth,
        Waveform::Triangle,
    ];

    /// Returns the snake_case tag used in JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            Waveform::Square => "square",
            Waveform::Sine => "sine",
            Waveform::Sawtooth => "sawtooth",
            Waveform::Triangle => "triangle",
        }
    }
}

impl fmt::Display for Waveform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Synthesis parameters for one voice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VoiceProfile {
    /// Pitch multiplier applied to the base frequency (typically 0.5 to 2.0).
    pub pitch: f64,
    /// Blip length in milliseconds.
    pub duration_ms: f64,
    /// Oscillator shape.
    #[serde(default)]
    pub waveform: Waveform,
    /// Output level (0.0 to 1.0).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<f64>,
    /// Silence inserted after every non-final character, in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub char_delay_ms: Option<f64>,
    /// Silence emitted for a space character, in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub space_delay_ms: Option<f64>,
}

impl VoiceProfile {
    /// Creates a profile with the given pitch and duration; everything else defaults.
    pub fn new(pitch: f64, duration_ms: f64) -> Self {
        Self {
            pitch,
            duration_ms,
            waveform: Waveform::Sine,
            volume: None,
            char_delay_ms: None,
            space_delay_ms: None,
        }
    }

    /// Sets the waveform.
    pub fn with_waveform(mut self, waveform: Waveform) -> Self {
        self.waveform = waveform;
        self
    }

    /// Sets the volume.
    pub fn with_volume(mut self, volume: f64) -> Self {
        self.volume = Some(volume);
        self
    }

    /// Sets the inter-character delay.
    pub fn with_char_delay(mut self, delay_ms: f64) -> Self {
        self.char_delay_ms = Some(delay_ms);
        self
    }

    /// Sets the space delay.
    pub fn with_space_delay(mut self, delay_ms: f64) -> Self {
        self.space_delay_ms = Some(delay_ms);
        self
    }

    /// Parses a profile from a JSON string and validates it.
    pub fn from_json(json: &str) -> SpecResult<Self> {
        let profile: VoiceProfile = serde_json::from_str(json)?;
        profile.validate()?;
        Ok(profile)
    }

    /// Checks that every field is within its documented range.
    pub fn validate(&self) -> SpecResult<()> {
        if !self.pitch.is_finite() || self.pitch <= 0.0 {
            return Err(SpecError::invalid_profile(
                "pitch",
                format!("must be a positive number, got {}", self.pitch),
            ));
        }
        if !self.duration_ms.is_finite() || self.duration_ms <= 0.0 {
            return Err(SpecError::invalid_profile(
                "duration_ms",
                format!("must be a positive number, got {}", self.duration_ms),
            ));
        }
        if let Some(volume) = self.volume {
            if !(0.0..=1.0).contains(&volume) {
                return Err(SpecError::invalid_profile(
                    "volume",
                    format!("must be between 0 and 1, got {}", volume),
                ));
            }
        }
        for (field, delay) in [
            ("char_delay_ms", self.char_delay_ms),
            ("space_delay_ms", self.space_delay_ms),
        ] {
            if let Some(delay) = delay {
                if !delay.is_finite() || delay < 0.0 {
                    return Err(SpecError::invalid_profile(
                        field,
                        format!("must be a non-negative number, got {}", delay),
                    ));
                }
            }
        }
        Ok(())
    }

    /// Resolves unset fields to their defaults.
    ///
    /// An explicit zero delay is kept as zero.
    pub fn effective(&self) -> EffectiveProfile {
        EffectiveProfile {
            pitch: self.pitch,
            duration_ms: self.duration_ms,
            waveform: self.waveform,
            volume: self.volume.unwrap_or(DEFAULT_VOLUME),
            char_delay_ms: self.char_delay_ms.unwrap_or(DEFAULT_CHAR_DELAY_MS),
            space_delay_ms: self.space_delay_ms.unwrap_or(DEFAULT_SPACE_DELAY_MS),
        }
    }
}

/// A voice profile with every field populated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectiveProfile {
    /// Pitch multiplier.
    pub pitch: f64,
    /// Blip length in milliseconds.
    pub duration_ms: f64,
    /// Oscillator shape.
    pub waveform: Waveform,
    /// Output level.
    pub volume: f64,
    /// Inter-character delay in milliseconds.
    pub char_delay_ms: f64,
    /// Space delay in milliseconds.
    pub space_delay_ms: f64,
}

impl EffectiveProfile {
    /// Computes the fingerprint of the fields that affect a synthesized tone.
    ///
    /// Delays are excluded: two profiles that differ only in timing share tones.
    pub fn fingerprint(&self) -> ProfileFingerprint {
        let mut hasher = blake3::Hasher::new();
        hasher.update(self.waveform.as_str().as_bytes());
        hasher.update(&self.pitch.to_bits().to_le_bytes());
        hasher.update(&self.duration_ms.to_bits().to_le_bytes());
        hasher.update(&self.volume.to_bits().to_le_bytes());
        ProfileFingerprint(*hasher.finalize().as_bytes())
    }
}

impl From<&VoiceProfile> for EffectiveProfile {
    fn from(profile: &VoiceProfile) -> Self {
        profile.effective()
    }
}

/// BLAKE3 digest of the tone-shaping fields of a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProfileFingerprint(pub [u8; 32]);

impl ProfileFingerprint {
    /// Returns the lowercase hex form (64 characters).
    pub fn to_hex(&self) -> String {
        blake3::Hash::from(self.0).to_hex().to_string()
    }
}

impl fmt::Display for ProfileFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
