//! Exponential decay envelope for percussive blips.

/// Decay constant of the blip envelope, in 1/s.
pub const BLIP_DECAY_RATE: f64 = 20.0;

/// Exponential decay envelope `exp(-rate * t)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecayEnvelope {
    /// Decay rate in 1/s.
    pub rate: f64,
}

impl Default for DecayEnvelope {
    fn default() -> Self {
        Self {
            rate: BLIP_DECAY_RATE,
        }
    }
}

impl DecayEnvelope {
    /// Creates an envelope with the given decay rate.
    pub fn new(rate: f64) -> Self {
        Self {
            rate: rate.max(0.0),
        }
    }

    /// Gain at time `t` seconds after onset.
    #[inline]
    pub fn at(&self, t: f64) -> f64 {
        (-t * self.rate).exp()
    }

    /// Time in seconds for the gain to fall to `level` (0 < level < 1).
    pub fn time_to_level(&self, level: f64) -> f64 {
        if self.rate <= 0.0 || level <= 0.0 {
            return f64::INFINITY;
        }
        -level.ln() / self.rate
    }
}
