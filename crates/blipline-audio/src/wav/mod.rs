//! Deterministic WAV container encoding.
//!
//! This module writes 16-bit PCM WAV files with a fixed 44-byte header and no
//! timestamps or variable metadata, so identical buffers always encode to
//! identical bytes. The BLAKE3 hash of the PCM payload identifies the audio
//! independently of the header.

mod encoder;
mod format;
mod pcm;
mod result;
mod writer;

#[cfg(test)]
mod tests;

// Re-export public API
pub use encoder::WavEncoder;
pub use format::{WavFormat, HEADER_LEN};
pub use pcm::{compute_pcm_hash, decode_pcm16, extract_pcm_data, DecodedWav};
pub use result::EncodedAudio;
pub use writer::{interleave_pcm16, sample_to_pcm16, wav_header, write_wav, write_wav_to_vec};
