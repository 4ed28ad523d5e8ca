//! Band-limited sampling and Whittaker-Shannon reconstruction.
//!
//! This module simulates sampling a fixed multi-tone analog signal and
//! rebuilding the continuous waveform from the samples by windowed sinc
//! interpolation, to illustrate the Nyquist-Shannon theorem:
//!
//! - [`reference`] — the fixed three-tone reference signal
//! - [`simulator`] — time-grid sampling, reconstruction, full simulation
//! - [`classify`] — rate classification against the Nyquist threshold
//! - [`metrics`] — reconstruction-error statistics

pub mod classify;
pub mod metrics;
pub mod reference;
pub mod simulator;

pub use classify::{classify_rate, classify_sampling_rate, RATE_EPSILON_HZ};
pub use reference::{evaluate_reference, ReferenceSignal, NYQUIST_RATE_HZ};
pub use simulator::{reconstruct, sample, sample_signal, simulate};
