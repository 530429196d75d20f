//! PCM data extraction, decoding and hashing utilities.

/// Audio recovered from a 16-bit PCM WAV file.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedWav {
    /// Channel count from the fmt chunk.
    pub channels: u16,
    /// Sample rate from the fmt chunk.
    pub sample_rate: u32,
    /// Byte rate from the fmt chunk.
    pub byte_rate: u32,
    /// Bits per sample from the fmt chunk.
    pub bits_per_sample: u16,
    /// Interleaved samples scaled back to [-1, 1].
    pub samples: Vec<f64>,
}

fn read_u16(bytes: &[u8], at: usize) -> Option<u16> {
    bytes
        .get(at..at + 2)
        .map(|b| u16::from_le_bytes([b[0], b[1]]))
}

fn read_u32(bytes: &[u8], at: usize) -> Option<u32> {
    bytes
        .get(at..at + 4)
        .map(|b| u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
}

/// Finds a chunk by id in a RIFF/WAVE file and returns its payload.
fn find_chunk<'a>(wav_data: &'a [u8], id: &[u8; 4]) -> Option<&'a [u8]> {
    if wav_data.len() < 12 {
        return None;
    }

    // Verify RIFF header
    if &wav_data[0..4] != b"RIFF" || &wav_data[8..12] != b"WAVE" {
        return None;
    }

    let mut pos = 12;
    while pos + 8 <= wav_data.len() {
        let chunk_id = &wav_data[pos..pos + 4];
        let chunk_size = read_u32(wav_data, pos + 4)? as usize;

        if chunk_id == id {
            let data_start = pos + 8;
            let data_end = data_start + chunk_size;
            return wav_data.get(data_start..data_end);
        }

        pos += 8 + chunk_size;
        // Align to word boundary
        if !chunk_size.is_multiple_of(2) {
            pos += 1;
        }
    }

    None
}

/// Extracts PCM data from a WAV file buffer.
///
/// Used for comparing WAV files by their audio content only.
///
/// # Arguments
/// * `wav_data` - Complete WAV file bytes
///
/// # Returns
/// The payload of the `data` chunk, or `None` if the file is malformed
pub fn extract_pcm_data(wav_data: &[u8]) -> Option<&[u8]> {
    find_chunk(wav_data, b"data")
}

/// Computes the BLAKE3 hash of a WAV file's PCM payload.
///
/// # Arguments
/// * `wav_data` - Complete WAV file bytes
///
/// # Returns
/// Hex-encoded hash, or `None` if no `data` chunk is found
pub fn compute_pcm_hash(wav_data: &[u8]) -> Option<String> {
    extract_pcm_data(wav_data).map(|pcm| blake3::hash(pcm).to_hex().to_string())
}

/// Decodes a 16-bit PCM WAV file.
///
/// # Arguments
/// * `wav_data` - Complete WAV file bytes
///
/// # Returns
/// The fmt fields and interleaved samples, or `None` if the file is not
/// 16-bit PCM RIFF/WAVE
pub fn decode_pcm16(wav_data: &[u8]) -> Option<DecodedWav> {
    let fmt = find_chunk(wav_data, b"fmt ")?;
    let audio_format = read_u16(fmt, 0)?;
    let bits_per_sample = read_u16(fmt, 14)?;
    if audio_format != 1 || bits_per_sample != 16 {
        return None;
    }

    let pcm = extract_pcm_data(wav_data)?;
    let samples = pcm
        .chunks_exact(2)
        .map(|b| {
            let value = i16::from_le_bytes([b[0], b[1]]);
            if value < 0 {
                value as f64 / 32768.0
            } else {
                value as f64 / 32767.0
            }
        })
        .collect();

    Some(DecodedWav {
        channels: read_u16(fmt, 2)?,
        sample_rate: read_u32(fmt, 4)?,
        byte_rate: read_u32(fmt, 8)?,
        bits_per_sample,
        samples,
    })
}
