//! Tests for slot placement and summation.

use super::*;
use crate::buffer::{SampleBuffer, SampleRate};
use crate::error::AudioError;

fn rate() -> SampleRate {
    SampleRate::new(1000).unwrap()
}

fn constant(value: f64, len: usize) -> SampleBuffer {
    SampleBuffer::mono(vec![value; len], rate())
}

#[test]
fn test_empty_mix_is_one_silent_sample() {
    let output = BufferMixer::new(rate()).mix(&[]).unwrap();
    assert_eq!(output.len(), 1);
    assert_eq!(output.samples(), &[0.0]);
}

#[test]
fn test_single_slot_unity_is_identity() {
    let source = SampleBuffer::mono(vec![0.1, -0.4, 1.0, -1.0, 0.25], rate());
    let output = BufferMixer::new(rate())
        .mix(&[MixSlot::new(&source)])
        .unwrap();

    assert_eq!(output.samples(), source.samples());
}

#[test]
fn test_output_length_covers_latest_slot() {
    let a = constant(0.1, 10);
    let b = constant(0.1, 5);
    let mixer = BufferMixer::new(rate());
    // 20 ms at 1 kHz = sample 20
    let output = mixer
        .mix(&[MixSlot::new(&a), MixSlot::new(&b).at_ms(20.0)])
        .unwrap();

    assert_eq!(output.len(), 25);
    assert!(output.samples()[10..20].iter().all(|&s| s == 0.0));
    assert!(output.samples()[20..25].iter().all(|&s| (s - 0.1).abs() < 1e-12));
}

#[test]
fn test_overlapping_slots_sum() {
    let a = constant(0.3, 10);
    let b = constant(0.2, 10);
    let output = BufferMixer::new(rate())
        .mix(&[MixSlot::new(&a), MixSlot::new(&b).at_ms(5.0)])
        .unwrap();

    assert!((output.samples()[2] - 0.3).abs() < 1e-12);
    assert!((output.samples()[7] - 0.5).abs() < 1e-12);
    assert!((output.samples()[12] - 0.2).abs() < 1e-12);
}

#[test]
fn test_gain_scales_slot() {
    let a = constant(0.8, 4);
    let output = BufferMixer::new(rate())
        .mix(&[MixSlot::new(&a).with_gain(0.5)])
        .unwrap();
    assert!(output.samples().iter().all(|&s| (s - 0.4).abs() < 1e-12));
}

#[test]
fn test_fractional_start_floors() {
    let a = constant(0.5, 2);
    // 2.9 ms at 1 kHz floors to sample 2
    let output = BufferMixer::new(rate())
        .mix(&[MixSlot::new(&a).at_ms(2.9)])
        .unwrap();
    assert_eq!(output.len(), 4);
    assert_eq!(output.samples()[1], 0.0);
    assert_eq!(output.samples()[2], 0.5);
}

#[test]
fn test_negative_start_drops_leading_samples() {
    let a = SampleBuffer::mono(vec![0.1, 0.2, 0.3, 0.4], rate());
    let b = constant(0.0, 4);
    let output = BufferMixer::new(rate())
        .mix(&[MixSlot::new(&a).at_ms(-2.0), MixSlot::new(&b)])
        .unwrap();

    assert_eq!(output.len(), 4);
    assert!((output.samples()[0] - 0.3).abs() < 1e-12);
    assert!((output.samples()[1] - 0.4).abs() < 1e-12);
    assert_eq!(output.samples()[2], 0.0);
}

#[test]
fn test_non_positive_length_is_one_silent_sample() {
    let a = constant(0.5, 3);
    let output = BufferMixer::new(rate())
        .mix(&[MixSlot::new(&a).at_ms(-10.0)])
        .unwrap();
    assert_eq!(output.len(), 1);
}

#[test]
fn test_infinite_start_is_one_silent_sample() {
    let a = constant(0.5, 3);
    let output = BufferMixer::new(rate())
        .mix(&[MixSlot::new(&a).at_ms(f64::INFINITY)])
        .unwrap();
    assert_eq!(output.len(), 1);
}

#[test]
fn test_order_independent() {
    let a = constant(0.3, 6);
    let b = SampleBuffer::mono(vec![0.1, -0.2, 0.3], rate());
    let mixer = BufferMixer::new(rate());

    let ab = mixer
        .mix(&[MixSlot::new(&a), MixSlot::new(&b).at_ms(2.0).with_gain(0.7)])
        .unwrap();
    let ba = mixer
        .mix(&[MixSlot::new(&b).at_ms(2.0).with_gain(0.7), MixSlot::new(&a)])
        .unwrap();

    for (x, y) in ab.samples().iter().zip(ba.samples()) {
        assert!((x - y).abs() < 1e-12);
    }
}

#[test]
fn test_rejects_mismatched_sample_rate() {
    let other = SampleBuffer::mono(vec![0.1], SampleRate::new(2000).unwrap());
    let err = BufferMixer::new(rate())
        .mix(&[MixSlot::new(&other)])
        .unwrap_err();
    assert!(matches!(err, AudioError::SampleRateMismatch { .. }));
}

#[test]
fn test_rejects_non_finite_gain() {
    let a = constant(0.1, 2);
    let err = BufferMixer::new(rate())
        .mix(&[MixSlot::new(&a).with_gain(f64::NAN)])
        .unwrap_err();
    assert!(matches!(err, AudioError::InvalidParameter { .. }));
}
