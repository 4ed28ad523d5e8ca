//! Core data types shared by the analysis components.
//!
//! All entities here are plain value types: each analysis call builds and
//! returns its own output graph, nothing is shared or mutated in place.

pub mod derivation;
pub mod report;
pub mod signal;

pub use derivation::{DerivationStep, StepDetail};
pub use report::{
    EntropyEstimate, RateClassification, RateStatus, ReconstructionError, SimulationReport,
};
pub use signal::{Sample, Signal};
