//! Script-to-artifact pipeline.
//!
//! Ties the stages together for one voiced script: parse voice tags,
//! compose the timeline, align subtitles against the plain text, and encode
//! the audio.

use blipline_spec::{parse_script, VoiceProfile};
use tracing::info;

use crate::bundle::package;
use crate::composer::{ComposedTimeline, TimelineComposer};
use crate::error::AudioResult;
use crate::subtitle::{render_srt, Cue, SubtitleAligner};
use crate::wav::{EncodedAudio, WavEncoder};

/// A composed script with its subtitle cues.
#[derive(Debug, Clone, PartialEq)]
pub struct Narration {
    /// The script with voice tags removed, trimmed.
    pub plain_text: String,
    /// Composed audio and per-character timing.
    pub timeline: ComposedTimeline,
    /// Subtitle cues aligned to the timing.
    pub cues: Vec<Cue>,
}

impl Narration {
    /// Renders the cues as SubRip text.
    pub fn srt(&self) -> String {
        render_srt(&self.cues)
    }

    /// Encodes the composed audio.
    pub fn encode(&self, encoder: &WavEncoder) -> AudioResult<EncodedAudio> {
        encoder.encode(&self.timeline.buffer)
    }

    /// Encodes the audio and packages it with the subtitles.
    pub fn bundle(&self, encoder: &WavEncoder) -> AudioResult<Vec<u8>> {
        let wav = self.encode(encoder)?;
        package(&wav.wav_data, &self.srt())
    }
}

/// Voices `script` and aligns subtitles to it.
///
/// # Arguments
/// * `composer` - Composer (and tone cache) used for the audio
/// * `aligner` - Lenient or strict subtitle aligner
/// * `script` - Text whose lines may start with a `[preset]` tag
/// * `default_profile` - Voice for lines without a known tag
///
/// # Returns
/// The composed narration, or an error if `default_profile` is invalid or
/// a strict aligner finds a mismatch
pub fn narrate(
    composer: &mut TimelineComposer,
    aligner: &SubtitleAligner,
    script: &str,
    default_profile: &VoiceProfile,
) -> AudioResult<Narration> {
    default_profile.validate()?;
    let parsed = parse_script(script, default_profile);
    let timeline = composer.compose(&parsed.sequence)?;
    let cues = aligner.align(&parsed.plain_text, &timeline.timing)?;

    info!(
        characters = parsed.sequence.len(),
        cues = cues.len(),
        duration_ms = timeline.total_duration_ms,
        "narrated script"
    );

    Ok(Narration {
        plain_text: parsed.plain_text,
        timeline,
        cues,
    })
}
