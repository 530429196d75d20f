//! CLI argument definitions for the blipline command-line interface.
//!
//! All `#[derive(Parser)]` and `#[derive(Subcommand)]` types are defined here,
//! keeping `main.rs` focused on dispatch logic.

use std::path::PathBuf;

use blipline_cli::logging::{LogFormat, DEFAULT_LEVEL};
use clap::{Args, Parser, Subcommand};

/// Blipline - text to character-voice blips with subtitles
#[derive(Parser)]
#[command(name = "blipline")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    /// Log level filter used when RUST_LOG is unset
    #[arg(long, global = true, default_value = DEFAULT_LEVEL)]
    pub log_level: String,

    /// Log output format (text, json)
    #[arg(long, global = true, default_value = "text")]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Engine settings shared by rendering commands.
#[derive(Args, Debug, Clone)]
pub(crate) struct EngineArgs {
    /// Output sample rate in Hz
    #[arg(long, default_value_t = 44_100)]
    pub sample_rate: u32,

    /// Keep at most this many synthesized tones cached (default: unbounded)
    #[arg(long)]
    pub cache_capacity: Option<usize>,

    /// Write the fixed `sample_rate * 4` byte rate in the WAV header
    #[arg(long)]
    pub legacy_byte_rate: bool,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Render a script to WAV and SRT files
    Render {
        /// Script text (lines may start with a [preset] tag)
        #[arg(short, long)]
        text: Option<String>,

        /// Script file to read instead of --text
        #[arg(short, long)]
        input: Option<String>,

        /// Preset voicing untagged lines (hero, villain, child, robot)
        #[arg(short, long)]
        preset: Option<String>,

        /// Voice profile JSON file voicing untagged lines
        #[arg(long)]
        profile: Option<String>,

        /// Output directory
        #[arg(short, long, default_value = ".")]
        out_dir: PathBuf,

        /// Output file stem
        #[arg(short, long, default_value = "blipline")]
        name: String,

        /// Write one zip bundle (audio.wav + legendas.srt) instead of separate files
        #[arg(long)]
        zip: bool,

        /// Fail if the subtitle text does not match the composed timing
        #[arg(long)]
        strict_subtitles: bool,

        #[command(flatten)]
        engine: EngineArgs,

        /// Output a machine-readable JSON summary (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Mix a multi-track sheet into one WAV file
    Mix {
        /// Track sheet JSON file
        #[arg(short, long)]
        sheet: String,

        /// Output WAV path
        #[arg(short, long)]
        output: String,

        /// Report this many waveform overview bars
        #[arg(long)]
        bars: Option<usize>,

        #[command(flatten)]
        engine: EngineArgs,

        /// Output a machine-readable JSON summary (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// List the built-in voice presets
    Presets {
        /// Output the presets as JSON
        #[arg(long)]
        json: bool,
    },
}
