//! Voice-tagged scripts and plain-text sequence producers.
//!
//! A script is plain text where any line may start with a `[tag]` naming a
//! preset, e.g.:
//!
//! ```text
//! [hero] We made it.
//! [villain] Not for long!
//! ```
//!
//! Parsing yields one [`VoicedChar`] per character plus the plain text the
//! subtitle aligner needs later.

use std::sync::{Arc, LazyLock};

use regex::Regex;

use crate::presets::preset;
use crate::profile::{EffectiveProfile, VoiceProfile};

static VOICE_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\[([^\]]+)\]\s*").expect("voice tag pattern is valid"));

/// Accented letters accepted by [`filter_supported`] (lowercase forms).
const ACCENTED_LETTERS: &str = "áéíóúãõâêîôûàèìòùç";

/// One character paired with the profile that voices it.
#[derive(Debug, Clone, PartialEq)]
pub struct VoicedChar {
    /// The character to voice.
    pub character: char,
    /// Normalized profile, shared between characters of the same voice.
    pub profile: Arc<EffectiveProfile>,
}

impl VoicedChar {
    /// Creates a voiced character.
    pub fn new(character: char, profile: Arc<EffectiveProfile>) -> Self {
        Self { character, profile }
    }
}

/// Output of [`parse_script`].
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedScript {
    /// Characters in voicing order, one trailing space per line.
    pub sequence: Vec<VoicedChar>,
    /// The voiced text with tags removed, trimmed.
    pub plain_text: String,
}

/// Parses a voice-tagged script.
///
/// A tag naming an unknown preset falls back to `default_profile`. Each line
/// ends with a space so that line breaks produce a word gap.
pub fn parse_script(text: &str, default_profile: &VoiceProfile) -> ParsedScript {
    let default_voice = Arc::new(default_profile.effective());
    let mut sequence = Vec::new();
    let mut plain = String::new();

    for raw_line in text.split('\n') {
        let mut line = raw_line.strip_suffix('\r').unwrap_or(raw_line);
        let mut voice = Arc::clone(&default_voice);

        if let Some(captures) = VOICE_TAG.captures(line) {
            let key = captures.get(1).map(|m| m.as_str()).unwrap_or_default();
            if let Some(profile) = preset(key) {
                voice = Arc::new(profile.effective());
            }
            let tag_len = captures.get(0).map(|m| m.end()).unwrap_or(0);
            line = &line[tag_len..];
        }

        for ch in line.chars() {
            sequence.push(VoicedChar::new(ch, Arc::clone(&voice)));
            plain.push(ch);
        }
        sequence.push(VoicedChar::new(' ', voice));
        plain.push(' ');
    }

    ParsedScript {
        sequence,
        plain_text: plain.trim().to_string(),
    }
}

/// Returns true if the character is voiced by [`sequence_from_text`].
pub fn is_supported_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || c.is_whitespace()
        || matches!(c, '.' | ',' | '!' | '?')
        || c.to_lowercase().any(|lower| ACCENTED_LETTERS.contains(lower))
}

/// Drops characters that have no voicing (symbols, emoji, other scripts).
pub fn filter_supported(text: &str) -> String {
    text.chars().filter(|c| is_supported_char(*c)).collect()
}

/// Voices every supported character of `text` with a single profile.
pub fn sequence_from_text(text: &str, profile: &VoiceProfile) -> Vec<VoicedChar> {
    let voice = Arc::new(profile.effective());
    text.chars()
        .filter(|c| is_supported_char(*c))
        .map(|c| VoicedChar::new(c, Arc::clone(&voice)))
        .collect()
}
