//! Periodic waveform functions.
//!
//! Every oscillator maps an absolute phase measured in cycles (`frequency * t`)
//! to a value in [-1.0, 1.0]. Phase is not wrapped before the sine so that the
//! sine path evaluates exactly `sin(2π f t)`.

use blipline_spec::Waveform;

/// 2π.
pub const TWO_PI: f64 = std::f64::consts::PI * 2.0;

/// Signature shared by every oscillator.
pub type OscillatorFn = fn(f64) -> f64;

/// Synthesis function for each waveform kind.
pub const OSCILLATORS: [(Waveform, OscillatorFn); 4] = [
    (Waveform::Square, square),
    (Waveform::Sine, sine),
    (Waveform::Sawtooth, sawtooth),
    (Waveform::Triangle, triangle),
];

/// Looks up the oscillator for a waveform.
pub fn oscillator_for(waveform: Waveform) -> OscillatorFn {
    OSCILLATORS
        .iter()
        .find(|(kind, _)| *kind == waveform)
        .map(|(_, osc)| *osc)
        .unwrap_or(sine)
}

#[inline]
fn fraction(cycles: f64) -> f64 {
    cycles - cycles.floor()
}

/// Sine wave.
#[inline]
pub fn sine(cycles: f64) -> f64 {
    (TWO_PI * cycles).sin()
}

/// Square wave with a 50% duty cycle, high for the first half of each period.
#[inline]
pub fn square(cycles: f64) -> f64 {
    if fraction(cycles) < 0.5 {
        1.0
    } else {
        -1.0
    }
}

/// Rising sawtooth, -1 at the start of each period.
#[inline]
pub fn sawtooth(cycles: f64) -> f64 {
    2.0 * fraction(cycles) - 1.0
}

/// Triangle, -1 at the start of each period and +1 at mid-period.
#[inline]
pub fn triangle(cycles: f64) -> f64 {
    1.0 - 4.0 * (fraction(cycles) - 0.5).abs()
}
