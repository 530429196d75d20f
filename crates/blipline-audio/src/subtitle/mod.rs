//! Subtitle generation.
//!
//! The aligner splits the source text into sentence-sized blocks and looks up
//! the first and last voiced character of each block in the composer's timing
//! entries. The result renders as SubRip (`.srt`) text.

mod aligner;
mod srt;


pub use aligner::{split_blocks, SubtitleAligner, MAX_BLOCK_CHARS};
pub use srt::{format_timestamp, render_srt};

/// One subtitle block with its display interval.
#[derive(Debug, Clone, PartialEq)]
pub struct Cue {
    /// Block text with surrounding whitespace removed.
    pub text: String,
    /// Start of the first voiced character in the block, in milliseconds.
    pub start_ms: f64,
    /// End of the last voiced character in the block, in milliseconds.
    pub end_ms: f64,
}

impl Cue {
    /// Display time of the cue in milliseconds.
    pub fn duration_ms(&self) -> f64 {
        self.end_ms - self.start_ms
    }
}
