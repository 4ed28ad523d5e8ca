//! Signal and sample value types.

use serde::{Deserialize, Serialize};

/// A single observation of a signal: an amplitude tagged with the time
/// (or index) it was taken at.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub time: f64,
    pub value: f64,
}

impl Sample {
    pub fn new(time: f64, value: f64) -> Self {
        Self { time, value }
    }
}

/// An ordered, finite sequence of samples.
///
/// The sequence may be empty. For the entropy path values are expected
/// (but not required) to lie within the display range; clamping is the
/// generator's job, not the analyzer's.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Signal {
    samples: Vec<Sample>,
}

impl Signal {
    /// Creates an empty signal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an existing ordered sample sequence.
    pub fn from_samples(samples: Vec<Sample>) -> Self {
        Self { samples }
    }

    /// Builds an index-tagged signal from raw amplitudes: sample `i` gets
    /// time `i`.
    pub fn from_values(values: &[f64]) -> Self {
        let samples = values
            .iter()
            .enumerate()
            .map(|(i, &v)| Sample::new(i as f64, v))
            .collect();
        Self { samples }
    }

    /// Appends a sample.
    pub fn push(&mut self, sample: Sample) {
        self.samples.push(sample);
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns true if the signal holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// The ordered samples.
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Iterates over amplitudes in order.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().map(|s| s.value)
    }
}
