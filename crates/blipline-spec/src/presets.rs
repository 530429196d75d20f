//! Built-in character voice presets.

use crate::error::{SpecError, SpecResult};
use crate::profile::{VoiceProfile, Waveform};

/// Names of the built-in presets, in display order.
pub const PRESET_NAMES: [&str; 4] = ["hero", "villain", "child", "robot"];

fn preset_profile(
    pitch: f64,
    duration_ms: f64,
    waveform: Waveform,
    volume: f64,
    char_delay_ms: f64,
    space_delay_ms: f64,
) -> VoiceProfile {
    VoiceProfile::new(pitch, duration_ms)
        .with_waveform(waveform)
        .with_volume(volume)
        .with_char_delay(char_delay_ms)
        .with_space_delay(space_delay_ms)
}

/// Looks up a built-in preset by name (case-insensitive, surrounding whitespace ignored).
pub fn preset(name: &str) -> Option<VoiceProfile> {
    match name.trim().to_lowercase().as_str() {
        "hero" => Some(preset_profile(1.0, 80.0, Waveform::Square, 0.7, 15.0, 50.0)),
        "villain" => Some(preset_profile(
            0.6,
            120.0,
            Waveform::Sawtooth,
            0.8,
            20.0,
            60.0,
        )),
        "child" => Some(preset_profile(1.8, 60.0, Waveform::Sine, 0.6, 10.0, 40.0)),
        "robot" => Some(preset_profile(1.2, 100.0, Waveform::Square, 0.9, 5.0, 30.0)),
        _ => None,
    }
}

/// Like [`preset`], but reports an unknown name as an error.
pub fn require_preset(name: &str) -> SpecResult<VoiceProfile> {
    preset(name).ok_or_else(|| SpecError::UnknownPreset {
        name: name.to_string(),
    })
}

/// Returns every built-in preset with its name.
pub fn all_presets() -> Vec<(&'static str, VoiceProfile)> {
    PRESET_NAMES
        .iter()
        .filter_map(|name| preset(name).map(|profile| (*name, profile)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_presets_are_valid() {
        let presets = all_presets();
        assert_eq!(presets.len(), PRESET_NAMES.len());
        for (name, profile) in presets {
            assert!(profile.validate().is_ok(), "preset {} is invalid", name);
        }
    }

    #[test]
    fn test_preset_lookup_is_case_insensitive() {
        let villain = preset("  Villain ").expect("villain preset");
        assert_eq!(villain.pitch, 0.6);
        assert_eq!(villain.duration_ms, 120.0);
        assert_eq!(villain.waveform, Waveform::Sawtooth);
        assert_eq!(villain.space_delay_ms, Some(60.0));
    }

    #[test]
    fn test_require_preset_unknown() {
        let err = require_preset("narrator").unwrap_err();
        assert!(matches!(err, SpecError::UnknownPreset { .. }));
    }
}
