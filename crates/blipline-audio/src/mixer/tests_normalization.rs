//! Tests for clip-safe normalization.

use super::*;
use crate::buffer::{SampleBuffer, SampleRate};

fn rate() -> SampleRate {
    SampleRate::new(1000).unwrap()
}

#[test]
fn test_peak() {
    assert_eq!(peak(&[0.1, -0.7, 0.3]), 0.7);
    assert_eq!(peak(&[]), 0.0);
}

#[test]
fn test_normalize_leaves_quiet_audio() {
    let mut samples = vec![0.5, -1.0, 0.25];
    assert_eq!(normalize_to_headroom(&mut samples), None);
    assert_eq!(samples, vec![0.5, -1.0, 0.25]);
}

#[test]
fn test_normalize_scales_loud_audio() {
    let mut samples = vec![2.0, -1.0, 0.5];
    let gain = normalize_to_headroom(&mut samples).unwrap();

    assert!((gain - 0.49).abs() < 1e-12);
    assert!((samples[0] - HEADROOM_TARGET).abs() < 1e-12);
    assert!((samples[1] + 0.49).abs() < 1e-12);
}

#[test]
fn test_normalize_preserves_relative_amplitudes() {
    let mut samples = vec![4.0, 2.0, 1.0];
    normalize_to_headroom(&mut samples);
    assert!((samples[1] / samples[0] - 0.5).abs() < 1e-12);
    assert!((samples[2] / samples[0] - 0.25).abs() < 1e-12);
}

#[test]
fn test_mix_output_never_exceeds_unity() {
    let loud = SampleBuffer::mono(vec![0.9, -0.9, 0.6, -0.3], rate());
    let slots: Vec<MixSlot<'_>> = (0..6)
        .map(|i| MixSlot::new(&loud).at_ms(i as f64).with_gain(1.0 + i as f64 * 0.5))
        .collect();

    let output = BufferMixer::new(rate()).mix(&slots).unwrap();
    assert!(output.samples().iter().all(|s| s.abs() <= 1.0));
    assert!((output.peak() - HEADROOM_TARGET).abs() < 1e-12);
}

#[test]
fn test_mix_peak_exactly_one_is_untouched() {
    let a = SampleBuffer::mono(vec![0.5, 0.5], rate());
    let output = BufferMixer::new(rate())
        .mix(&[MixSlot::new(&a), MixSlot::new(&a)])
        .unwrap();
    assert_eq!(output.samples(), &[1.0, 1.0]);
}

#[test]
fn test_gain_above_unity_drives_normalization() {
    let a = SampleBuffer::mono(vec![0.5, -0.25], rate());
    let output = BufferMixer::new(rate())
        .mix(&[MixSlot::new(&a).with_gain(4.0)])
        .unwrap();
    assert!((output.samples()[0] - 0.98).abs() < 1e-12);
    assert!((output.samples()[1] + 0.49).abs() < 1e-12);
}
