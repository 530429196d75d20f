//! Timeline composition.
//!
//! The composer walks a sequence of voiced characters once, appending a tone
//! (or a word-gap silence for spaces) plus the inter-character delay, and
//! records when each character sounds. Tones are reused through a
//! [`ToneCache`] owned by the composer.

mod cache;
mod timeline;


use blipline_spec::{sequence_from_text, VoiceProfile, VoicedChar};
use tracing::{debug, instrument};

use crate::buffer::{SampleBuffer, SampleRate, MAX_BUFFER_SAMPLES};
use crate::error::{AudioError, AudioResult};
use crate::synthesis::ToneSynthesizer;

pub use cache::{CacheStats, EvictionPolicy, ToneCache, ToneKey};
pub use timeline::{ComposedTimeline, TimingEntry};

/// Returns true for characters rendered as a word gap instead of a tone.
///
/// Any Unicode whitespace counts, so tabs and no-break spaces stay silent.
/// Word gaps advance time but produce no [`TimingEntry`].
pub fn is_word_gap(c: char) -> bool {
    c.is_whitespace()
}

/// Turns voiced character sequences into one buffer plus timing metadata.
///
/// A composer and its cache are meant for one thread at a time.
#[derive(Debug)]
pub struct TimelineComposer {
    synth: ToneSynthesizer,
    cache: ToneCache,
}

impl TimelineComposer {
    /// Creates a composer with an unbounded cache.
    pub fn new(sample_rate: SampleRate) -> Self {
        Self::with_cache(sample_rate, ToneCache::default())
    }

    /// Creates a composer that uses the given cache.
    pub fn with_cache(sample_rate: SampleRate, cache: ToneCache) -> Self {
        Self {
            synth: ToneSynthesizer::new(sample_rate),
            cache,
        }
    }

    /// Returns the sample rate of composed output.
    pub fn sample_rate(&self) -> SampleRate {
        self.synth.sample_rate()
    }

    /// Returns the synthesizer used for cache misses.
    pub fn synthesizer(&self) -> &ToneSynthesizer {
        &self.synth
    }

    /// Returns the tone cache.
    pub fn cache(&self) -> &ToneCache {
        &self.cache
    }

    /// Drops every cached tone.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    /// Composes a sequence into a single timeline.
    ///
    /// Whitespace contributes its profile's space delay. Every other
    /// character contributes its tone and, unless it is the last element, its
    /// profile's character delay. Zero delays append nothing.
    ///
    /// # Arguments
    /// * `sequence` - Characters in voicing order
    ///
    /// # Returns
    /// The composed buffer and one timing entry per voiced character, or
    /// `InvalidParameter` if a tone duration is not positive or the output
    /// would exceed [`MAX_BUFFER_SAMPLES`]
    #[instrument(skip_all, fields(elements = sequence.len()))]
    pub fn compose(&mut self, sequence: &[VoicedChar]) -> AudioResult<ComposedTimeline> {
        let rate = self.synth.sample_rate();
        let mut samples: Vec<f64> = Vec::new();
        let mut timing = Vec::new();
        let mut current_ms = 0.0;

        for (index, voiced) in sequence.iter().enumerate() {
            let profile = voiced.profile.as_ref();

            if is_word_gap(voiced.character) {
                if profile.space_delay_ms > 0.0 {
                    append_silence(&mut samples, rate, profile.space_delay_ms, "space_delay_ms")?;
                    current_ms += profile.space_delay_ms;
                }
                continue;
            }

            if !profile.duration_ms.is_finite() || profile.duration_ms <= 0.0 {
                return Err(AudioError::invalid_param(
                    "duration_ms",
                    format!("must be a positive number, got {}", profile.duration_ms),
                ));
            }
            let tone_len = rate.bounded_samples_for_ms(profile.duration_ms, "duration_ms")?;
            ensure_capacity(samples.len(), tone_len, "duration_ms")?;

            let key = ToneKey::new(voiced.character, profile);
            let synth = &self.synth;
            let tone = self
                .cache
                .get_or_insert_with(key, || synth.render_tone(voiced.character, profile));
            tone.ensure_rate(rate)?;
            samples.extend_from_slice(tone.samples());

            timing.push(TimingEntry {
                character: voiced.character,
                start_ms: current_ms,
                end_ms: current_ms + profile.duration_ms,
            });
            current_ms += profile.duration_ms;

            let is_last = index + 1 == sequence.len();
            if !is_last && profile.char_delay_ms > 0.0 {
                append_silence(&mut samples, rate, profile.char_delay_ms, "char_delay_ms")?;
                current_ms += profile.char_delay_ms;
            }
        }

        let buffer = if samples.is_empty() {
            SampleBuffer::silent(1, rate)
        } else {
            SampleBuffer::mono(samples, rate)
        };

        debug!(
            entries = timing.len(),
            duration_ms = current_ms,
            samples = buffer.len(),
            cached_tones = self.cache.len(),
            "composed timeline"
        );

        Ok(ComposedTimeline {
            buffer,
            timing,
            total_duration_ms: current_ms,
        })
    }

    /// Voices every supported character of `text` with one profile and composes it.
    ///
    /// The profile is validated first.
    pub fn compose_text(
        &mut self,
        text: &str,
        profile: &VoiceProfile,
    ) -> AudioResult<ComposedTimeline> {
        profile.validate()?;
        let sequence = sequence_from_text(text, profile);
        self.compose(&sequence)
    }
}

fn ensure_capacity(current: usize, extra: usize, name: &str) -> AudioResult<()> {
    match current.checked_add(extra) {
        Some(total) if total <= MAX_BUFFER_SAMPLES => Ok(()),
        _ => Err(AudioError::invalid_param(
            name,
            format!("timeline would exceed {} samples", MAX_BUFFER_SAMPLES),
        )),
    }
}

fn append_silence(
    samples: &mut Vec<f64>,
    rate: SampleRate,
    duration_ms: f64,
    name: &str,
) -> AudioResult<()> {
    let len = rate.bounded_samples_for_ms(duration_ms, name)?;
    ensure_capacity(samples.len(), len, name)?;
    samples.resize(samples.len() + len, 0.0);
    Ok(())
}
