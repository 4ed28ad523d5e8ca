//! Histogram-based Shannon entropy estimation.
//!
//! This module approximates the entropy of a finite real-valued signal by
//! discretizing its amplitudes into fixed bins and treating the normalized
//! counts as a probability distribution:
//!
//! - [`ValueHistogram`] — fixed-range binning with a clamp-not-drop policy
//! - [`estimate_entropy`] — the full estimate plus a derivation trace
//!
//! The histogram is a 1-D marginal approximation of the underlying joint
//! density. The estimator itself is deterministic and pure even when the
//! signal it is fed was generated from a random-noise process.

pub mod core;
pub mod estimator;

pub use self::core::ValueHistogram;
pub use self::estimator::estimate_entropy;
