//! Analysis result types.
//!
//! These capture the outputs of the two analysis components: the entropy
//! estimate with its derivation trace, and the sampling simulation report
//! with its rate classification. They serialize with serde so presentation
//! code can consume them as plain data.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::derivation::DerivationStep;
use crate::core::signal::Sample;
use crate::error::{Result, WavelabError};

/// Result of a histogram entropy estimation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntropyEstimate {
    /// Approximate Shannon entropy in bits, always >= 0.
    pub entropy: f64,
    /// Per-bin probabilities; empty for an empty input signal.
    pub probabilities: Vec<f64>,
    /// Ordered derivation trace; empty for an empty input signal.
    pub steps: Vec<DerivationStep>,
}

impl EntropyEstimate {
    /// The defined degenerate result for an empty signal.
    pub fn empty() -> Self {
        Self {
            entropy: 0.0,
            probabilities: Vec::new(),
            steps: Vec::new(),
        }
    }

    /// Serialize to JSON string.
    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string(self)
            .map_err(|e| WavelabError::Serialization(e.to_string()))
    }

    /// Deserialize from JSON string.
    pub fn from_json_str(json_str: &str) -> Result<Self> {
        serde_json::from_str(json_str)
            .map_err(|e| WavelabError::Serialization(e.to_string()))
    }
}

/// How a sampling rate relates to the Nyquist rate of the reference signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RateStatus {
    /// Below Nyquist: aliasing makes perfect reconstruction impossible.
    #[serde(rename = "insufficient")]
    Insufficient,
    /// Within tolerance of the exact Nyquist rate: the boundary case.
    #[serde(rename = "at-Nyquist")]
    AtNyquist,
    /// Above Nyquist: perfect reconstruction is theoretically possible.
    #[serde(rename = "adequate")]
    Adequate,
}

impl fmt::Display for RateStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RateStatus::Insufficient => "insufficient",
            RateStatus::AtNyquist => "at-Nyquist",
            RateStatus::Adequate => "adequate",
        };
        write!(f, "{}", s)
    }
}

/// Classification of a sampling rate against the Nyquist threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateClassification {
    pub status: RateStatus,
    /// Human-readable explanation; opaque data for the caller.
    pub message: String,
}

/// Interior reconstruction-error summary for a simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReconstructionError {
    /// Root-mean-square error over the interior of the interval.
    pub rms: f64,
    /// Largest absolute error over the interior.
    pub max_abs: f64,
    /// Number of grid points the error was evaluated at.
    pub evaluated_points: usize,
}

/// Full output of one sampling simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    /// The sampling rate the run used, in Hz.
    pub fs: f64,
    /// Samples taken from the reference signal.
    pub samples: Vec<Sample>,
    /// Sinc reconstruction evaluated on a dense uniform grid.
    pub reconstruction: Vec<Sample>,
    /// Rate classification against the Nyquist threshold.
    pub classification: RateClassification,
    /// Reconstruction error against the reference signal, interior only.
    pub error: ReconstructionError,
}

impl SimulationReport {
    /// Serialize to JSON string.
    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string(self)
            .map_err(|e| WavelabError::Serialization(e.to_string()))
    }

    /// Deserialize from JSON string.
    pub fn from_json_str(json_str: &str) -> Result<Self> {
        serde_json::from_str(json_str)
            .map_err(|e| WavelabError::Serialization(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_estimate_shape() {
        let est = EntropyEstimate::empty();
        assert_eq!(est.entropy, 0.0);
        assert!(est.probabilities.is_empty());
        assert!(est.steps.is_empty());
    }

    #[test]
    fn status_display_strings() {
        assert_eq!(RateStatus::Insufficient.to_string(), "insufficient");
        assert_eq!(RateStatus::AtNyquist.to_string(), "at-Nyquist");
        assert_eq!(RateStatus::Adequate.to_string(), "adequate");
    }

    #[test]
    fn status_serializes_to_wire_names() {
        let json = serde_json::to_string(&RateStatus::AtNyquist).unwrap();
        assert_eq!(json, "\"at-Nyquist\"");
        let back: RateStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(back, RateStatus::AtNyquist);
    }

    #[test]
    fn estimate_json_round_trip() {
        let est = EntropyEstimate {
            entropy: 3.5,
            probabilities: vec![0.5, 0.5],
            steps: vec![DerivationStep::new("result", 3.5, "Final entropy")],
        };
        let json = est.to_json_string().unwrap();
        let back = EntropyEstimate::from_json_str(&json).unwrap();
        assert_eq!(back, est);
    }
}
