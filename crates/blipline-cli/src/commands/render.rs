//! Render command implementation
//!
//! Voices a script and writes the WAV and SRT files (or a zip bundle of both).

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use blipline_audio::{narrate, package, SubtitleAligner, WavEncoder};
use colored::Colorize;
use serde::Serialize;

use crate::input::{build_composer, ensure_dir, load_profile, load_script};

/// Options for the render command.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Inline script text.
    pub text: Option<String>,
    /// Script file path.
    pub input: Option<String>,
    /// Preset voicing untagged lines.
    pub preset: Option<String>,
    /// Profile JSON file voicing untagged lines.
    pub profile: Option<String>,
    /// Directory receiving the output files.
    pub out_dir: PathBuf,
    /// File stem of the output files.
    pub name: String,
    /// Write a single zip bundle instead of separate files.
    pub zip: bool,
    /// Output sample rate in Hz.
    pub sample_rate: u32,
    /// Bound on cached tones (unbounded when `None`).
    pub cache_capacity: Option<usize>,
    /// Write `sample_rate * 4` as the WAV byte rate.
    pub legacy_byte_rate: bool,
    /// Fail when subtitle text and timing diverge.
    pub strict_subtitles: bool,
    /// Print a JSON summary instead of colored text.
    pub json: bool,
}

/// Machine-readable summary of one render.
#[derive(Debug, Serialize)]
pub struct RenderSummary {
    /// Files written, in order.
    pub files: Vec<String>,
    /// BLAKE3 hash of the PCM payload.
    pub pcm_hash: String,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Composed duration in milliseconds.
    pub duration_ms: f64,
    /// Number of voiced characters.
    pub characters: usize,
    /// Number of subtitle cues.
    pub cues: usize,
}

/// Run the render command
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(options: &RenderOptions) -> Result<ExitCode> {
    let summary = render(options)?;

    if options.json {
        let json = serde_json::to_string_pretty(&summary).context("Failed to serialize summary")?;
        println!("{}", json);
    } else {
        for file in &summary.files {
            println!("{} {}", "Wrote:".cyan().bold(), file);
        }
        println!(
            "{} {:.0} ms, {} characters, {} cues",
            "SUCCESS".green().bold(),
            summary.duration_ms,
            summary.characters,
            summary.cues
        );
        println!("  {} {}", "PCM hash:".dimmed(), summary.pcm_hash);
    }

    Ok(ExitCode::SUCCESS)
}

/// Renders and writes the output files, returning what was produced.
pub fn render(options: &RenderOptions) -> Result<RenderSummary> {
    let script = load_script(options.text.as_deref(), options.input.as_deref())?;
    let profile = load_profile(options.preset.as_deref(), options.profile.as_deref())?;
    let mut composer = build_composer(options.sample_rate, options.cache_capacity)?;
    let aligner = SubtitleAligner::new().strict(options.strict_subtitles);

    let narration = narrate(&mut composer, &aligner, &script, &profile)
        .context("Failed to render script")?;
    let encoder = WavEncoder::new().legacy_byte_rate(options.legacy_byte_rate);
    let wav = narration.encode(&encoder)?;
    let srt = narration.srt();

    ensure_dir(&options.out_dir)?;
    let mut files = Vec::new();
    if options.zip {
        let bundle = package(&wav.wav_data, &srt)?;
        files.push(write_output(&options.out_dir, &options.name, "zip", &bundle)?);
    } else {
        files.push(write_output(&options.out_dir, &options.name, "wav", &wav.wav_data)?);
        files.push(write_output(&options.out_dir, &options.name, "srt", srt.as_bytes())?);
    }

    Ok(RenderSummary {
        files,
        pcm_hash: wav.pcm_hash,
        sample_rate: wav.sample_rate,
        duration_ms: narration.timeline.total_duration_ms,
        characters: narration.timeline.timing.len(),
        cues: narration.cues.len(),
    })
}

fn write_output(dir: &Path, stem: &str, extension: &str, bytes: &[u8]) -> Result<String> {
    let path = dir.join(format!("{}.{}", stem, extension));
    fs::write(&path, bytes).with_context(|| format!("Failed to write: {}", path.display()))?;
    Ok(path.display().to_string())
}
