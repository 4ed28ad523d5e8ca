//! Error types for the wavelab signal-analysis engine.
//!
//! This module provides structured error handling using thiserror. Errors
//! are raised only for invalid configuration; degenerate-but-valid inputs
//! (empty signals, rates outside display bounds) resolve to defined
//! fallback values instead.

use thiserror::Error;

/// Main error type for wavelab operations.
#[derive(Debug, Error)]
pub enum WavelabError {
    /// Sampling rate must be a positive, finite frequency.
    #[error("Invalid sampling rate: {fs} Hz (must be positive and finite)")]
    InvalidRate { fs: f64 },

    /// Histogram bin count must be at least one.
    #[error("Invalid bin count: {bins} (need at least 1 bin)")]
    InvalidBinCount { bins: usize },

    /// Histogram value range must be non-degenerate.
    #[error("Invalid value range [{lo}, {hi}]: upper bound must exceed lower bound")]
    InvalidRange { lo: f64, hi: f64 },

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for wavelab operations
pub type Result<T> = std::result::Result<T, WavelabError>;
