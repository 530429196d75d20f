//! Loading scripts, voice profiles and engine settings from command-line input.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use blipline_audio::{EvictionPolicy, SampleRate, TimelineComposer, ToneCache};
use blipline_spec::{require_preset, VoiceProfile};

/// Profile used when neither a preset nor a profile file is given.
pub const DEFAULT_PRESET: &str = "hero";

/// Reads the script either from inline text or from a file.
///
/// Exactly one of `text` and `input` must be given.
pub fn load_script(text: Option<&str>, input: Option<&str>) -> Result<String> {
    match (text, input) {
        (Some(text), None) => Ok(text.to_string()),
        (None, Some(path)) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read script file: {}", path)),
        (Some(_), Some(_)) => bail!("Pass either --text or --input, not both"),
        (None, None) => bail!("Nothing to render: pass --text or --input"),
    }
}

/// Resolves the default voice from a preset name or a profile JSON file.
pub fn load_profile(preset: Option<&str>, profile_path: Option<&str>) -> Result<VoiceProfile> {
    match (preset, profile_path) {
        (Some(_), Some(_)) => bail!("Pass either --preset or --profile, not both"),
        (None, Some(path)) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("Failed to read profile file: {}", path))?;
            VoiceProfile::from_json(&json)
                .with_context(|| format!("Invalid voice profile: {}", path))
        }
        (Some(name), None) => Ok(require_preset(name)?),
        (None, None) => Ok(require_preset(DEFAULT_PRESET)?),
    }
}

/// Builds a composer for the requested rate and cache bound.
///
/// `cache_capacity` of `None` keeps every tone for the life of the process.
pub fn build_composer(sample_rate: u32, cache_capacity: Option<usize>) -> Result<TimelineComposer> {
    let rate = SampleRate::new(sample_rate)?;
    let policy = match cache_capacity {
        Some(capacity) => EvictionPolicy::Lru { capacity },
        None => EvictionPolicy::Unbounded,
    };
    Ok(TimelineComposer::with_cache(rate, ToneCache::new(policy)))
}

/// Creates `dir` (and parents) if it does not exist.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory: {}", dir.display()))
}
