//! wavelab: a deterministic signal-analysis engine.
//!
//! Two independent, stateless computation components, each a pure function
//! over immutable inputs:
//!
//! - **Entropy estimation** ([`entropy`]): discretizes a finite real-valued
//!   signal into fixed bins and computes an approximate Shannon entropy,
//!   together with a human-readable derivation trace.
//! - **Sampling simulation** ([`sampling`]): samples a fixed multi-tone
//!   analog signal at a caller-chosen rate, reconstructs the continuous
//!   waveform by windowed sinc interpolation, and classifies the rate
//!   against the Nyquist threshold.
//!
//! All outputs are plain serde-serializable data structures intended for a
//! presentation layer to render. The engine performs no I/O, holds no
//! shared state, and every call is idempotent given identical inputs.
//!
//! # Example
//!
//! ```
//! use wavelab::config::EntropyConfig;
//! use wavelab::{estimate_entropy, generate_signal};
//!
//! let signal = generate_signal(50, 1.0, 42);
//! let estimate = estimate_entropy(&signal, &EntropyConfig::default()).unwrap();
//! assert!(estimate.entropy >= 0.0);
//! ```

/// Configuration sections with presentation-compatible defaults
pub mod config;
/// Core data types module
pub mod core;
/// Histogram-based entropy estimation
pub mod entropy;
/// Error types
pub mod error;
/// Seeded noise-signal generation
pub mod generator;
/// Logging and tracing setup
pub mod logging;
/// Shared numeric helpers
pub mod numeric;
/// Sampling, reconstruction, and rate classification
pub mod sampling;

pub use config::{EngineConfig, EntropyConfig, SamplingConfig};
pub use crate::core::{
    DerivationStep, EntropyEstimate, RateClassification, RateStatus, ReconstructionError, Sample,
    Signal, SimulationReport, StepDetail,
};
pub use entropy::{estimate_entropy, ValueHistogram};
pub use error::{Result, WavelabError};
pub use generator::generate_signal;
pub use sampling::{
    classify_sampling_rate, evaluate_reference, reconstruct, sample, simulate, ReferenceSignal,
    NYQUIST_RATE_HZ,
};
