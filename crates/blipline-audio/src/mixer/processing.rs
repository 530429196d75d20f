//! Peak measurement and headroom normalization.

/// Peak level that clipping output is scaled down to.
///
/// Slightly below 1.0 so that 16-bit quantization cannot land on full scale.
pub const HEADROOM_TARGET: f64 = 0.98;

/// Largest absolute sample value.
pub fn peak(samples: &[f64]) -> f64 {
    samples
        .iter()
        .map(|s| s.abs())
        .fold(0.0_f64, |a, b| a.max(b))
}

/// Scales `samples` so the peak becomes [`HEADROOM_TARGET`], but only if it exceeds 1.0.
///
/// Returns the gain that was applied, or `None` if the audio was left untouched.
pub fn normalize_to_headroom(samples: &mut [f64]) -> Option<f64> {
    let current_peak = peak(samples);
    if current_peak <= 1.0 || !current_peak.is_finite() {
        return None;
    }

    let gain = HEADROOM_TARGET / current_peak;
    for sample in samples.iter_mut() {
        *sample *= gain;
    }
    Some(gain)
}
