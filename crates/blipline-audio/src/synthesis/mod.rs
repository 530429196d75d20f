//! Per-character tone synthesis.
//!
//! A blip is a short decaying tone whose frequency depends on the voice's
//! pitch and on whether the character is a vowel.

pub mod oscillators;

use blipline_spec::EffectiveProfile;

use crate::buffer::{SampleBuffer, SampleRate};
use crate::envelope::DecayEnvelope;

/// Reference frequency (A4) scaled by pitch and character class.
pub const BASE_FREQUENCY: f64 = 440.0;

/// Frequency multiplier applied to vowels.
pub const VOWEL_OFFSET: f64 = 1.2;

/// Characters that receive [`VOWEL_OFFSET`] (lowercase forms).
pub const VOWELS: &str = "aeiouáéíóúãõâêîôûàèìòùç";

/// Returns true if the character is in the vowel set, ignoring case.
pub fn is_vowel(c: char) -> bool {
    let lower: String = c.to_lowercase().collect();
    VOWELS.contains(lower.as_str())
}

/// Renders one blip per character at a fixed sample rate.
#[derive(Debug, Clone)]
pub struct ToneSynthesizer {
    sample_rate: SampleRate,
    envelope: DecayEnvelope,
}

impl ToneSynthesizer {
    /// Creates a synthesizer for the given sample rate.
    pub fn new(sample_rate: SampleRate) -> Self {
        Self {
            sample_rate,
            envelope: DecayEnvelope::default(),
        }
    }

    /// Returns the sample rate.
    pub fn sample_rate(&self) -> SampleRate {
        self.sample_rate
    }

    /// Frequency of the blip for `character` at the given pitch multiplier.
    pub fn frequency_for(&self, character: char, pitch: f64) -> f64 {
        let offset = if is_vowel(character) { VOWEL_OFFSET } else { 1.0 };
        BASE_FREQUENCY * pitch * offset
    }

    /// Renders the blip for one character.
    ///
    /// Sample `i` is `exp(-20 t) * osc(f t) * volume` with `t = i / rate`.
    pub fn render_tone(&self, character: char, profile: &EffectiveProfile) -> SampleBuffer {
        let rate = self.sample_rate.as_f64();
        let length = self.sample_rate.samples_for_ms(profile.duration_ms);
        let frequency = self.frequency_for(character, profile.pitch);
        let oscillator = oscillators::oscillator_for(profile.waveform);

        let samples = (0..length)
            .map(|i| {
                let t = i as f64 / rate;
                self.envelope.at(t) * oscillator(frequency * t) * profile.volume
            })
            .collect();

        SampleBuffer::mono(samples, self.sample_rate)
    }

    /// Renders silence lasting `duration_ms` (at least one sample).
    pub fn render_silence(&self, duration_ms: f64) -> SampleBuffer {
        SampleBuffer::silence_ms(duration_ms, self.sample_rate)
    }
}
