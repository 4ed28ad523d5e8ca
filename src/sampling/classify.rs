//! Sampling-rate classification against the Nyquist threshold.

use crate::core::report::{RateClassification, RateStatus};
use crate::sampling::reference::NYQUIST_RATE_HZ;

/// Tolerance for treating a rate as exactly at Nyquist.
pub const RATE_EPSILON_HZ: f64 = 1.0;

/// Classifies a rate against an explicit Nyquist threshold.
///
/// Pure and total: there are no transitions, the status is re-derived from
/// a single comparison on every call.
pub fn classify_rate(fs: f64, nyquist_hz: f64, epsilon_hz: f64) -> RateClassification {
    let (status, message) = if (fs - nyquist_hz).abs() < epsilon_hz {
        (
            RateStatus::AtNyquist,
            format!(
                "{:.0} Hz sits exactly at the {:.0} Hz Nyquist rate: the theoretical boundary for perfect reconstruction",
                fs, nyquist_hz
            ),
        )
    } else if fs < nyquist_hz {
        (
            RateStatus::Insufficient,
            format!(
                "{:.0} Hz is below the {:.0} Hz Nyquist rate: aliasing folds the highest tone onto a lower frequency",
                fs, nyquist_hz
            ),
        )
    } else {
        (
            RateStatus::Adequate,
            format!(
                "{:.0} Hz exceeds the {:.0} Hz Nyquist rate: perfect reconstruction is theoretically possible",
                fs, nyquist_hz
            ),
        )
    };

    RateClassification { status, message }
}

/// Classifies a rate against the default reference signal's Nyquist rate.
pub fn classify_sampling_rate(fs: f64) -> RateClassification {
    classify_rate(fs, NYQUIST_RATE_HZ, RATE_EPSILON_HZ)
}
