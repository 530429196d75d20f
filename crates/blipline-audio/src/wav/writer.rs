//! Core WAV writing and PCM conversion functions.

use std::io::{self, Write};

use super::format::{WavFormat, HEADER_LEN};
use crate::buffer::SampleBuffer;

/// Size of the data chunk for `pcm_len` bytes.
///
/// Fails when the RIFF size field (`data_len + 36`) would not fit in a `u32`.
pub(crate) fn data_chunk_len(pcm_len: usize) -> io::Result<u32> {
    u32::try_from(pcm_len)
        .ok()
        .filter(|len| len.checked_add(36).is_some())
        .ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("{} bytes of PCM exceed the WAV size limit", pcm_len),
            )
        })
}

/// Builds the canonical 44-byte RIFF/fmt/data header for `data_len` bytes of PCM.
///
/// # Arguments
/// * `format` - Channel count, sample rate and byte-rate mode
/// * `data_len` - Length of the data chunk in bytes
///
/// # Returns
/// The header bytes, ready to precede the PCM data
pub fn wav_header(format: &WavFormat, data_len: u32) -> [u8; HEADER_LEN] {
    let mut header = [0u8; HEADER_LEN];
    let fields: [(usize, &[u8]); 13] = [
        (0, b"RIFF"),
        (4, &data_len.saturating_add(36).to_le_bytes()),
        (8, b"WAVE"),
        (12, b"fmt "),
        (16, &16u32.to_le_bytes()),
        (20, &1u16.to_le_bytes()),
        (22, &format.channels.to_le_bytes()),
        (24, &format.sample_rate.to_le_bytes()),
        (28, &format.byte_rate().to_le_bytes()),
        (32, &format.block_align().to_le_bytes()),
        (34, &format.bits_per_sample.to_le_bytes()),
        (36, b"data"),
        (40, &data_len.to_le_bytes()),
    ];
    for (offset, bytes) in fields {
        header[offset..offset + bytes.len()].copy_from_slice(bytes);
    }
    header
}

/// Writes the header followed by `pcm_data`.
///
/// # Arguments
/// * `writer` - Destination
/// * `format` - WAV format parameters
/// * `pcm_data` - Interleaved little-endian PCM bytes
///
/// # Returns
/// `InvalidInput` if `pcm_data` is too large for a WAV file
pub fn write_wav<W: Write>(writer: &mut W, format: &WavFormat, pcm_data: &[u8]) -> io::Result<()> {
    let data_len = data_chunk_len(pcm_data.len())?;
    writer.write_all(&wav_header(format, data_len))?;
    writer.write_all(pcm_data)
}

/// Writes a WAV file to a byte vector.
///
/// # Arguments
/// * `format` - WAV format parameters
/// * `pcm_data` - Interleaved little-endian PCM bytes
///
/// # Returns
/// The complete file, or `InvalidInput` if `pcm_data` is too large
pub fn write_wav_to_vec(format: &WavFormat, pcm_data: &[u8]) -> io::Result<Vec<u8>> {
    let data_len = data_chunk_len(pcm_data.len())?;
    let mut buffer = Vec::with_capacity(HEADER_LEN + pcm_data.len());
    buffer.extend_from_slice(&wav_header(format, data_len));
    buffer.extend_from_slice(pcm_data);
    Ok(buffer)
}

/// Converts one float sample to a signed 16-bit value.
///
/// The sample is clamped to [-1, 1], then scaled by 32768 when negative and
/// 32767 otherwise, and truncated toward zero.
///
/// # Arguments
/// * `sample` - Float sample, nominally in [-1, 1]
///
/// # Returns
/// The 16-bit PCM value
#[inline]
pub fn sample_to_pcm16(sample: f64) -> i16 {
    let clipped = sample.clamp(-1.0, 1.0);
    let scaled = if clipped < 0.0 {
        clipped * 32768.0
    } else {
        clipped * 32767.0
    };
    scaled.trunc() as i16
}

/// Interleaves every declared channel of `buffer` as little-endian 16-bit PCM.
///
/// A channel without data reads channel 0; a missing sample reads as 0.
///
/// # Arguments
/// * `buffer` - Samples to convert
///
/// # Returns
/// `len * channel_count * 2` bytes of PCM data
pub fn interleave_pcm16(buffer: &SampleBuffer) -> Vec<u8> {
    let frames = buffer.len();
    let channels = buffer.channel_count() as usize;
    let mut pcm = Vec::with_capacity(frames * channels * 2);

    let sources: Vec<Option<&[f64]>> = (0..channels)
        .map(|ch| buffer.channel(ch).or_else(|| buffer.channel(0)))
        .collect();

    for i in 0..frames {
        for source in &sources {
            let value = source.and_then(|data| data.get(i)).copied().unwrap_or(0.0);
            pcm.extend_from_slice(&sample_to_pcm16(value).to_le_bytes());
        }
    }

    pcm
}
