//! Derivation-step records emitted alongside numeric results.
//!
//! These capture a human-readable trace of how a result was computed.
//! They are purely descriptive output: prose strings are opaque data for
//! the caller to render, never re-parsed or consumed computationally.
//! Each analysis call creates its trace fresh and the caller discards it
//! after rendering.

use serde::{Deserialize, Serialize};

/// One ordered step in a derivation trace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivationStep {
    /// Stable identifier for the step (e.g. "sample-count").
    pub id: String,
    /// The scalar this step produced, rounded for display.
    pub value: f64,
    /// One-line description of the step.
    pub description: String,
    /// Optional expanded explanation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<StepDetail>,
}

impl DerivationStep {
    pub fn new(id: impl Into<String>, value: f64, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            value,
            description: description.into(),
            detail: None,
        }
    }

    /// Attaches an expanded explanation to the step.
    pub fn with_detail(mut self, detail: StepDetail) -> Self {
        self.detail = Some(detail);
        self
    }
}

/// Expanded explanation for a derivation step: a title, ordered prose
/// substeps, and an optional formula rendered as plain text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepDetail {
    pub title: String,
    pub substeps: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formula: Option<String>,
}

impl StepDetail {
    pub fn new(title: impl Into<String>, substeps: Vec<String>) -> Self {
        Self {
            title: title.into(),
            substeps,
            formula: None,
        }
    }

    pub fn with_formula(mut self, formula: impl Into<String>) -> Self {
        self.formula = Some(formula.into());
        self
    }
}
