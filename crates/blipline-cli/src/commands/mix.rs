//! Mix command implementation
//!
//! Renders a multi-track sheet into one WAV file.

use std::fs;
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use blipline_audio::{render_sheet, waveform_bars, WavEncoder};
use blipline_spec::TrackSheet;
use colored::Colorize;
use serde::Serialize;

use crate::input::build_composer;

/// Options for the mix command.
#[derive(Debug, Clone)]
pub struct MixOptions {
    /// Track sheet JSON file.
    pub sheet: String,
    /// Output WAV path.
    pub output: String,
    /// Output sample rate in Hz.
    pub sample_rate: u32,
    /// Bound on cached tones (unbounded when `None`).
    pub cache_capacity: Option<usize>,
    /// Write `sample_rate * 4` as the WAV byte rate.
    pub legacy_byte_rate: bool,
    /// Number of waveform overview bars to report.
    pub bars: Option<usize>,
    /// Print a JSON summary instead of colored text.
    pub json: bool,
}

/// One rendered row in the summary.
#[derive(Debug, Serialize)]
pub struct TrackSummary {
    /// Row name.
    pub name: String,
    /// Start offset in milliseconds.
    pub start_ms: f64,
    /// Composed duration in milliseconds.
    pub duration_ms: f64,
}

/// Machine-readable summary of one mix.
#[derive(Debug, Serialize)]
pub struct MixSummary {
    /// Output WAV path.
    pub output: String,
    /// BLAKE3 hash of the PCM payload.
    pub pcm_hash: String,
    /// Mixed length in milliseconds.
    pub duration_ms: f64,
    /// Rows that were rendered.
    pub tracks: Vec<TrackSummary>,
    /// Waveform overview, if requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bars: Option<Vec<f64>>,
}

/// Run the mix command
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(options: &MixOptions) -> Result<ExitCode> {
    let summary = mix(options)?;

    if options.json {
        let json = serde_json::to_string_pretty(&summary).context("Failed to serialize summary")?;
        println!("{}", json);
    } else {
        for track in &summary.tracks {
            println!(
                "  {} {} @ {:.0} ms ({:.0} ms)",
                "track".cyan(),
                track.name,
                track.start_ms,
                track.duration_ms
            );
        }
        println!(
            "{} Mixed {} tracks to: {}",
            "SUCCESS".green().bold(),
            summary.tracks.len(),
            summary.output
        );
    }

    Ok(ExitCode::SUCCESS)
}

/// Renders the sheet and writes the WAV, returning what was produced.
pub fn mix(options: &MixOptions) -> Result<MixSummary> {
    let sheet = TrackSheet::from_file(Path::new(&options.sheet))
        .with_context(|| format!("Failed to load track sheet: {}", options.sheet))?;
    let mut composer = build_composer(options.sample_rate, options.cache_capacity)?;

    let mixed = render_sheet(&mut composer, &sheet).context("Failed to render track sheet")?;
    let wav = WavEncoder::new()
        .legacy_byte_rate(options.legacy_byte_rate)
        .encode(&mixed.buffer)?;

    if let Some(parent) = Path::new(&options.output).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
    }
    fs::write(&options.output, &wav.wav_data)
        .with_context(|| format!("Failed to write: {}", options.output))?;

    let bars = options
        .bars
        .map(|count| waveform_bars(&mixed.buffer, count))
        .transpose()?;

    Ok(MixSummary {
        output: options.output.clone(),
        pcm_hash: wav.pcm_hash,
        duration_ms: mixed.buffer.duration_ms(),
        tracks: mixed
            .tracks
            .iter()
            .map(|track| TrackSummary {
                name: track.name.clone(),
                start_ms: track.start_ms,
                duration_ms: track.timeline.total_duration_ms,
            })
            .collect(),
        bars,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SHEET: &str = r#"{
        "tracks": [
            {"name": "hero", "profile": "hero", "text": "We made it."},
            {"name": "villain", "profile": "villain", "text": "Not for long!", "start_ms": 400},
            {"name": "extra", "profile": "child", "text": "Hi", "muted": true}
        ]
    }"#;

    fn options(dir: &Path) -> MixOptions {
        let sheet = dir.join("sheet.json");
        fs::write(&sheet, SHEET).unwrap();
        MixOptions {
            sheet: sheet.display().to_string(),
            output: dir.join("out").join("mix.wav").display().to_string(),
            sample_rate: 8000,
            cache_capacity: Some(8),
            legacy_byte_rate: false,
            bars: Some(12),
            json: true,
        }
    }

    #[test]
    fn test_mix_writes_wav() {
        let tmp = tempfile::tempdir().unwrap();
        let summary = mix(&options(tmp.path())).unwrap();

        let names: Vec<&str> = summary.tracks.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["hero", "villain"]);
        assert!(Path::new(&summary.output).exists());
        assert_eq!(summary.bars.as_ref().map(Vec::len), Some(12));
        assert!(summary.duration_ms > summary.tracks[1].start_ms);
    }

    #[test]
    fn test_mix_missing_sheet() {
        let tmp = tempfile::tempdir().unwrap();
        let mut opts = options(tmp.path());
        opts.sheet = tmp.path().join("nope.json").display().to_string();
        assert!(mix(&opts).is_err());
    }

    #[test]
    fn test_mix_rejects_zero_bars() {
        let tmp = tempfile::tempdir().unwrap();
        let mut opts = options(tmp.path());
        opts.bars = Some(0);
        assert!(mix(&opts).is_err());
    }
}
