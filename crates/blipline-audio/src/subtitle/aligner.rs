//! Block splitting and timing alignment.

use tracing::{debug, warn};

use super::Cue;
use crate::composer::{is_word_gap, TimingEntry};
use crate::error::SubtitleError;

/// A block is closed once it reaches this many characters.
pub const MAX_BLOCK_CHARS: usize = 40;

/// Splits `text` into subtitle blocks.
///
/// A block ends after `.`, `!` or `?`, or once it holds
/// [`MAX_BLOCK_CHARS`] characters. Any remainder forms the final block.
/// Blocks keep their surrounding whitespace so that concatenating them
/// reproduces `text`.
pub fn split_blocks(text: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut current = String::new();
    let mut count = 0usize;

    for c in text.chars() {
        current.push(c);
        count += 1;
        if matches!(c, '.' | '!' | '?') || count >= MAX_BLOCK_CHARS {
            blocks.push(std::mem::take(&mut current));
            count = 0;
        }
    }
    if !current.is_empty() {
        blocks.push(current);
    }
    blocks
}

/// Maps text blocks onto composed timing entries.
///
/// Timing entries correspond one-to-one, in order, with the non-whitespace
/// characters of the text. In lenient mode (the default) a block whose
/// characters run past the end of the timing is dropped. In strict mode any
/// divergence between text and timing is an error.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubtitleAligner {
    strict: bool,
}

impl SubtitleAligner {
    /// Creates a lenient aligner.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables strict character checking.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Returns true if this aligner rejects mismatched timing.
    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Produces one cue per block that has at least one timed character.
    pub fn align(&self, text: &str, timing: &[TimingEntry]) -> Result<Vec<Cue>, SubtitleError> {
        let mut cues = Vec::new();
        let mut cursor = 0usize;
        let mut text_index = 0usize;

        for block in split_blocks(text) {
            let mut first: Option<&TimingEntry> = None;
            let mut last: Option<&TimingEntry> = None;

            for c in block.chars() {
                let index = text_index;
                text_index += 1;
                if is_word_gap(c) {
                    continue;
                }

                let entry = timing.get(cursor);
                cursor += 1;
                match entry {
                    Some(entry) if self.strict && entry.character != c => {
                        return Err(SubtitleError::Mismatch {
                            index,
                            expected: Some(c),
                            found: Some(entry.character),
                        });
                    }
                    Some(entry) => {
                        first.get_or_insert(entry);
                        last = Some(entry);
                    }
                    None if self.strict => {
                        return Err(SubtitleError::Mismatch {
                            index,
                            expected: Some(c),
                            found: None,
                        });
                    }
                    None => {}
                }
            }

            let trimmed = block.trim();
            match (first, last) {
                (Some(first), Some(last)) => cues.push(Cue {
                    text: trimmed.to_string(),
                    start_ms: first.start_ms,
                    end_ms: last.end_ms,
                }),
                _ if trimmed.is_empty() => {}
                _ => warn!(block = trimmed, "dropping subtitle block with no timing"),
            }
        }

        if self.strict && cursor < timing.len() {
            return Err(SubtitleError::Mismatch {
                index: text_index,
                expected: None,
                found: Some(timing[cursor].character),
            });
        }

        debug!(cues = cues.len(), entries = timing.len(), "aligned subtitles");
        Ok(cues)
    }
}
