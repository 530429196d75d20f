//! Blipline CLI - Command-line interface for character-voice blip rendering
//!
//! This binary voices text as per-character blips and writes WAV audio,
//! SRT subtitles, zip bundles and multi-track mixes.

mod cli_args;

use std::process::ExitCode;

use clap::Parser;

use blipline_cli::commands;
use blipline_cli::commands::mix::MixOptions;
use blipline_cli::commands::render::RenderOptions;
use blipline_cli::logging::init_logging;
use cli_args::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli.log_level, cli.log_format);

    let result = match cli.command {
        Commands::Render {
            text,
            input,
            preset,
            profile,
            out_dir,
            name,
            zip,
            strict_subtitles,
            engine,
            json,
        } => commands::render::run(&RenderOptions {
            text,
            input,
            preset,
            profile,
            out_dir,
            name,
            zip,
            sample_rate: engine.sample_rate,
            cache_capacity: engine.cache_capacity,
            legacy_byte_rate: engine.legacy_byte_rate,
            strict_subtitles,
            json,
        }),
        Commands::Mix {
            sheet,
            output,
            bars,
            engine,
            json,
        } => commands::mix::run(&MixOptions {
            sheet,
            output,
            sample_rate: engine.sample_rate,
            cache_capacity: engine.cache_capacity,
            legacy_byte_rate: engine.legacy_byte_rate,
            bars,
            json,
        }),
        Commands::Presets { json } => commands::presets::run(json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
