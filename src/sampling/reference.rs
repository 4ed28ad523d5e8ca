//! The fixed band-limited reference signal.
//!
//! A sum of three sinusoidal tones plus a constant offset. The tone
//! frequencies and offset are fixed configuration: presentation layers
//! depend on these exact constants for compatible output.

use std::f64::consts::{FRAC_PI_4, TAU};

/// First tone frequency in Hz.
pub const TONE_F1_HZ: f64 = 50.0;
/// Second tone frequency in Hz.
pub const TONE_F2_HZ: f64 = 100.0;
/// Third (highest) tone frequency in Hz.
pub const TONE_F3_HZ: f64 = 250.0;
/// Constant offset added to the tone sum.
pub const DC_OFFSET: f64 = 7.0;
/// Twice the highest tone frequency.
pub const NYQUIST_RATE_HZ: f64 = 2.0 * TONE_F3_HZ;

/// The continuous-time reference signal
/// `cos(2pi f1 t) + sin(2pi f2 t) + cos(2pi f3 t + pi/4) + dc`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceSignal {
    pub f1: f64,
    pub f2: f64,
    pub f3: f64,
    pub dc: f64,
}

impl Default for ReferenceSignal {
    fn default() -> Self {
        Self {
            f1: TONE_F1_HZ,
            f2: TONE_F2_HZ,
            f3: TONE_F3_HZ,
            dc: DC_OFFSET,
        }
    }
}

impl ReferenceSignal {
    /// Evaluates the signal at continuous time `t` (seconds).
    #[inline]
    pub fn evaluate(&self, t: f64) -> f64 {
        (TAU * self.f1 * t).cos()
            + (TAU * self.f2 * t).sin()
            + (TAU * self.f3 * t + FRAC_PI_4).cos()
            + self.dc
    }

    /// Highest tone frequency in Hz.
    pub fn max_frequency(&self) -> f64 {
        self.f1.max(self.f2).max(self.f3)
    }

    /// Minimum rate permitting theoretically perfect reconstruction.
    pub fn nyquist_rate(&self) -> f64 {
        2.0 * self.max_frequency()
    }
}

/// Evaluates the default reference signal at time `t`.
#[inline]
pub fn evaluate_reference(t: f64) -> f64 {
    ReferenceSignal::default().evaluate(t)
}
