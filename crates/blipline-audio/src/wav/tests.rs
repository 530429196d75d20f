//! Tests for WAV encoding.

use super::*;
use crate::buffer::{SampleBuffer, SampleRate};
use crate::error::AudioError;

fn u16_at(bytes: &[u8], at: usize) -> u16 {
    u16::from_le_bytes([bytes[at], bytes[at + 1]])
}

fn u32_at(bytes: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
}

fn constant_buffer() -> SampleBuffer {
    // 100 ms at 8 kHz
    SampleBuffer::mono(vec![0.5; 800], SampleRate::new(8000).unwrap())
}

#[test]
fn test_wav_format() {
    let mono = WavFormat::mono(44100);
    assert_eq!(mono.channels, 1);
    assert_eq!(mono.sample_rate, 44100);
    assert_eq!(mono.byte_rate(), 88200);
    assert_eq!(mono.block_align(), 2);

    let stereo = WavFormat::pcm16(2, 44100);
    assert_eq!(stereo.byte_rate(), 176400);
    assert_eq!(stereo.block_align(), 4);
}

#[test]
fn test_legacy_byte_rate() {
    let mut format = WavFormat::mono(8000);
    format.legacy_byte_rate = true;
    assert_eq!(format.byte_rate(), 32000);
    assert_eq!(format.block_align(), 2);
}

#[test]
fn test_header_layout() {
    let wav = WavEncoder::new()
        .encode_bytes(&constant_buffer())
        .unwrap();

    assert_eq!(wav.len(), HEADER_LEN + 1600);
    assert_eq!(&wav[0..4], b"RIFF");
    assert_eq!(u32_at(&wav, 4), wav.len() as u32 - 8);
    assert_eq!(&wav[8..12], b"WAVE");
    assert_eq!(&wav[12..16], b"fmt ");
    assert_eq!(u32_at(&wav, 16), 16);
    assert_eq!(u16_at(&wav, 20), 1);
    assert_eq!(u16_at(&wav, 22), 1);
    assert_eq!(u32_at(&wav, 24), 8000);
    assert_eq!(u32_at(&wav, 28), 16000);
    assert_eq!(u16_at(&wav, 32), 2);
    assert_eq!(u16_at(&wav, 34), 16);
    assert_eq!(&wav[36..40], b"data");
    assert_eq!(u32_at(&wav, 40), 1600);
}

#[test]
fn test_legacy_header_byte_rate() {
    let wav = WavEncoder::new()
        .legacy_byte_rate(true)
        .encode_bytes(&constant_buffer())
        .unwrap();
    assert_eq!(u32_at(&wav, 28), 32000);
}

#[test]
fn test_sample_quantization() {
    assert_eq!(sample_to_pcm16(0.0), 0);
    assert_eq!(sample_to_pcm16(1.0), 32767);
    assert_eq!(sample_to_pcm16(-1.0), -32768);
    assert_eq!(sample_to_pcm16(0.5), 16383);
    assert_eq!(sample_to_pcm16(-0.5), -16384);
    assert_eq!(sample_to_pcm16(-0.00001), 0);
}

#[test]
fn test_clipping() {
    assert_eq!(sample_to_pcm16(2.0), 32767);
    assert_eq!(sample_to_pcm16(-2.0), -32768);
}

#[test]
fn test_round_trip_within_quantization() {
    let buffer = constant_buffer();
    let encoded = WavEncoder::new().encode(&buffer).unwrap();
    let decoded = decode_pcm16(&encoded.wav_data).expect("should decode");

    assert_eq!(decoded.channels, 1);
    assert_eq!(decoded.sample_rate, 8000);
    assert_eq!(decoded.bits_per_sample, 16);
    assert_eq!(decoded.samples.len(), 800);
    for sample in decoded.samples {
        assert!((sample - 0.5).abs() <= 1.0 / 32767.0);
    }
}

#[test]
fn test_missing_channel_falls_back_to_channel_zero() {
    let rate = SampleRate::new(8000).unwrap();
    let buffer = SampleBuffer::with_channels(2, vec![vec![0.5, -0.5]], rate);
    let encoded = WavEncoder::new().encode(&buffer).unwrap();
    let decoded = decode_pcm16(&encoded.wav_data).unwrap();

    assert_eq!(decoded.channels, 2);
    assert_eq!(decoded.byte_rate, 32000);
    assert_eq!(decoded.samples.len(), 4);
    assert_eq!(decoded.samples[0], decoded.samples[1]);
    assert_eq!(decoded.samples[2], decoded.samples[3]);
    assert_eq!(u16_at(&encoded.wav_data, 32), 4);
}

#[test]
fn test_short_channel_pads_with_zero() {
    let rate = SampleRate::new(8000).unwrap();
    let buffer = SampleBuffer::with_channels(2, vec![vec![0.5, 0.5], vec![0.25]], rate);
    let pcm = interleave_pcm16(&buffer);

    assert_eq!(pcm.len(), 8);
    assert_eq!(i16::from_le_bytes([pcm[6], pcm[7]]), 0);
}

#[test]
fn test_zero_channels_is_an_error() {
    let buffer = SampleBuffer::with_channels(0, vec![], SampleRate::DEFAULT);
    let err = WavEncoder::new().encode(&buffer).unwrap_err();
    assert!(matches!(err, AudioError::NoChannels));
}

#[test]
fn test_pcm_hash_matches_payload() {
    let encoded = WavEncoder::new().encode(&constant_buffer()).unwrap();
    assert_eq!(encoded.pcm_hash.len(), 64);
    assert_eq!(
        compute_pcm_hash(&encoded.wav_data).as_deref(),
        Some(encoded.pcm_hash.as_str())
    );
}

#[test]
fn test_encoding_is_deterministic() {
    let a = WavEncoder::new().encode(&constant_buffer()).unwrap();
    let b = WavEncoder::new().encode(&constant_buffer()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_encoded_audio_metadata() {
    let encoded = WavEncoder::new().encode(&constant_buffer()).unwrap();
    assert_eq!(encoded.num_frames, 800);
    assert_eq!(encoded.channels, 1);
    assert!((encoded.duration_seconds() - 0.1).abs() < 1e-12);
}

#[test]
fn test_extract_pcm_data_rejects_garbage() {
    assert!(extract_pcm_data(b"not a wav file").is_none());
    assert!(decode_pcm16(&[0u8; 10]).is_none());
}

#[test]
fn test_write_wav_matches_header_builder() {
    let format = WavFormat::mono(8000);
    let pcm = [1u8, 0, 2, 0];
    let mut out = Vec::new();
    write_wav(&mut out, &format, &pcm).unwrap();

    assert_eq!(&out[..HEADER_LEN], &wav_header(&format, 4)[..]);
    assert_eq!(&out[HEADER_LEN..], &pcm[..]);
    assert_eq!(out, write_wav_to_vec(&format, &pcm).unwrap());
    assert_eq!(u32_at(&out, 4), 40);
}

#[test]
fn test_data_chunk_len_limit() {
    use super::writer::data_chunk_len;

    assert_eq!(data_chunk_len(4).unwrap(), 4);
    assert_eq!(data_chunk_len((u32::MAX - 36) as usize).unwrap(), u32::MAX - 36);

    let err = data_chunk_len((u32::MAX - 35) as usize).unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::InvalidInput);
    assert!(data_chunk_len(u32::MAX as usize + 1).is_err());
}
