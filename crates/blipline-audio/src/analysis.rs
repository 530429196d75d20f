//! Waveform overview data for display.

use crate::buffer::SampleBuffer;
use crate::error::{AudioError, AudioResult};

/// Computes `bars` peak levels over channel 0, normalized to [0, 1].
///
/// Bar `i` covers samples `[i * len / bars, (i + 1) * len / bars)`. Each bar
/// holds the largest absolute sample in its range, divided by the largest
/// bar. Silence, and bars whose range is empty, yield 0.
///
/// # Arguments
/// * `buffer` - Audio to summarize
/// * `bars` - Number of bars, at least one
///
/// # Returns
/// One level per bar, or `InvalidParameter` when `bars` is zero
pub fn waveform_bars(buffer: &SampleBuffer, bars: usize) -> AudioResult<Vec<f64>> {
    if bars == 0 {
        return Err(AudioError::invalid_param("bars", "must be at least 1"));
    }

    let samples = buffer.samples();
    let len = samples.len();
    let mut levels: Vec<f64> = (0..bars)
        .map(|i| {
            let start = i * len / bars;
            let end = (i + 1) * len / bars;
            frame_peak(&samples[start..end])
        })
        .collect();

    // Normalize to [0, 1]
    let max_level = levels.iter().cloned().fold(0.0f64, f64::max);
    if max_level > 0.0 {
        for level in &mut levels {
            *level /= max_level;
        }
    }

    Ok(levels)
}

fn frame_peak(samples: &[f64]) -> f64 {
    samples
        .iter()
        .filter(|s| s.is_finite())
        .map(|s| s.abs())
        .fold(0.0f64, f64::max)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::buffer::SampleRate;

    fn buffer(samples: Vec<f64>) -> SampleBuffer {
        SampleBuffer::mono(samples, SampleRate::new(1000).unwrap())
    }

    #[test]
    fn test_bars_are_normalized() {
        let bars = waveform_bars(&buffer(vec![0.1, -0.2, 0.4, -0.5]), 2).unwrap();
        assert_eq!(bars, vec![0.4, 1.0]);
    }

    #[test]
    fn test_silence_is_flat() {
        let bars = waveform_bars(&buffer(vec![0.0; 100]), 10).unwrap();
        assert_eq!(bars, vec![0.0; 10]);
    }

    #[test]
    fn test_more_bars_than_samples() {
        let bars = waveform_bars(&buffer(vec![0.5, -1.0]), 4).unwrap();
        assert_eq!(bars.len(), 4);
        assert_eq!(bars, vec![0.0, 0.5, 0.0, 1.0]);
    }

    #[test]
    fn test_uneven_split_covers_every_sample() {
        let mut samples = vec![0.0; 10];
        samples[9] = 0.8;
        let bars = waveform_bars(&buffer(samples), 3).unwrap();
        assert_eq!(bars, vec![0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_zero_bars_rejected() {
        let err = waveform_bars(&buffer(vec![0.1]), 0).unwrap_err();
        assert_eq!(err.code(), "AUDIO_004");
    }
}
