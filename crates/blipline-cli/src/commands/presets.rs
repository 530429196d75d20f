//! Presets command implementation
//!
//! Lists the built-in character voices.

use std::process::ExitCode;

use anyhow::{Context, Result};
use blipline_spec::{all_presets, VoiceProfile};
use colored::Colorize;

/// Run the presets command
///
/// # Arguments
/// * `json` - Print the presets as a JSON object keyed by name
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(json: bool) -> Result<ExitCode> {
    let presets = all_presets();

    if json {
        let map: serde_json::Map<String, serde_json::Value> = presets
            .iter()
            .map(|(name, profile)| Ok(((*name).to_string(), serde_json::to_value(profile)?)))
            .collect::<Result<_, serde_json::Error>>()
            .context("Failed to serialize presets")?;
        println!(
            "{}",
            serde_json::to_string_pretty(&map).context("Failed to serialize presets")?
        );
    } else {
        for (name, profile) in &presets {
            println!("{:<8} {}", name.bold(), describe(profile));
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// One-line description of a profile's effective values.
pub fn describe(profile: &VoiceProfile) -> String {
    let effective = profile.effective();
    format!(
        "pitch {:.1}, {} ms {}, volume {:.1}, char delay {} ms, space delay {} ms",
        effective.pitch,
        effective.duration_ms,
        effective.waveform,
        effective.volume,
        effective.char_delay_ms,
        effective.space_delay_ms
    )
}
