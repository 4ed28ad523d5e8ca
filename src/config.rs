//! Configuration for the analysis engine.
//!
//! Provides centralized configuration for both analysis components with
//! defaults that reproduce the reference presentation-layer constants.

use serde::{Deserialize, Serialize};

use crate::error::{Result, WavelabError};

/// Master configuration for the engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Entropy estimation configuration.
    pub entropy: EntropyConfig,
    /// Sampling/reconstruction configuration.
    pub sampling: SamplingConfig,
}

/// Configuration for histogram-based entropy estimation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntropyConfig {
    /// Number of histogram bins (default: 20).
    pub num_bins: usize,
    /// Lower bound of the binned value range (default: -2.0).
    pub range_lo: f64,
    /// Upper bound of the binned value range (default: 2.0).
    pub range_hi: f64,
}

impl Default for EntropyConfig {
    fn default() -> Self {
        Self {
            num_bins: 20,
            range_lo: -2.0,
            range_hi: 2.0,
        }
    }
}

impl EntropyConfig {
    /// Width of a single bin.
    pub fn bin_width(&self) -> f64 {
        (self.range_hi - self.range_lo) / self.num_bins as f64
    }

    /// Fails fast on degenerate configuration: zero bins or an inverted range.
    pub fn validate(&self) -> Result<()> {
        if self.num_bins == 0 {
            return Err(WavelabError::InvalidBinCount {
                bins: self.num_bins,
            });
        }
        if self.range_hi <= self.range_lo {
            return Err(WavelabError::InvalidRange {
                lo: self.range_lo,
                hi: self.range_hi,
            });
        }
        Ok(())
    }
}

/// Configuration for the sampling simulator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SamplingConfig {
    /// Samples taken on each side of the interpolation center (default: 20).
    pub window_radius: usize,
    /// Tolerance in Hz for treating a rate as exactly at Nyquist (default: 1.0).
    pub rate_epsilon_hz: f64,
    /// Number of points on the dense reconstruction grid (default: 512).
    pub render_points: usize,
    /// Fraction of the interval excluded on each side when computing
    /// interior reconstruction error (default: 0.1).
    pub edge_margin: f64,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            window_radius: 20,
            rate_epsilon_hz: 1.0,
            render_points: 512,
            edge_margin: 0.1,
        }
    }
}
