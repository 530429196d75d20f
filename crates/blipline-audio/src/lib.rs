//! Blipline Audio Engine
//!
//! This crate turns voiced character sequences into audio and captions:
//! one short decaying tone ("blip") per character, sequenced on a timeline
//! with inter-character and inter-word gaps, then encoded as 16-bit PCM WAV
//! alongside SubRip subtitles.
//!
//! # Determinism
//!
//! All synthesis is deterministic. The same sequence, profiles and sample
//! rate produce bit-identical samples, and the encoder reports a BLAKE3 hash
//! of the PCM payload for validation.
//!
//! # Example
//!
//! ```
//! use blipline_audio::{narrate, SampleRate, SubtitleAligner, TimelineComposer, WavEncoder};
//! use blipline_spec::VoiceProfile;
//!
//! let mut composer = TimelineComposer::new(SampleRate::new(8000)?);
//! let narration = narrate(
//!     &mut composer,
//!     &SubtitleAligner::new(),
//!     "Hello world. Goodbye!",
//!     &VoiceProfile::new(1.0, 100.0),
//! )?;
//!
//! let wav = narration.encode(&WavEncoder::new())?;
//! assert_eq!(&wav.wav_data[0..4], b"RIFF");
//! assert_eq!(narration.cues.len(), 2);
//! # Ok::<(), blipline_audio::AudioError>(())
//! ```
//!
//! # Crate Structure
//!
//! - [`narrate()`] - Script to timeline, cues and encoded audio
//! - [`analysis`] - Waveform overview bars
//! - [`buffer`] - Sample buffers and the sample rate
//! - [`bundle`] - Zip packaging of audio plus subtitles
//! - [`composer`] - Timeline composition and the tone cache
//! - [`envelope`] - Blip decay envelope
//! - [`mixer`] - Positioned slot mixing with headroom normalization
//! - [`subtitle`] - Subtitle block alignment and SubRip rendering
//! - [`synthesis`] - Per-character tone synthesis and oscillators
//! - [`tracks`] - Multi-track sheet rendering
//! - [`wav`] - Deterministic WAV encoder and reader

pub mod analysis;
pub mod buffer;
pub mod bundle;
pub mod composer;
pub mod envelope;
pub mod error;
pub mod mixer;
pub mod narrate;
pub mod subtitle;
pub mod synthesis;
pub mod tracks;
pub mod wav;

// Re-export main types at crate root
pub use analysis::waveform_bars;
pub use buffer::{SampleBuffer, SampleRate};
pub use bundle::{package, AUDIO_ENTRY, SUBTITLE_ENTRY};
pub use composer::{
    ComposedTimeline, EvictionPolicy, TimelineComposer, TimingEntry, ToneCache,
};
pub use error::{AudioError, AudioResult, SubtitleError};
pub use mixer::{BufferMixer, MixSlot};
pub use narrate::{narrate, Narration};
pub use subtitle::{render_srt, Cue, SubtitleAligner};
pub use synthesis::ToneSynthesizer;
pub use tracks::{render_sheet, RenderedTrack, SheetMix};
pub use wav::{EncodedAudio, WavEncoder};
