//! Core histogram primitives for entropy estimation.
//!
//! A [`ValueHistogram`] discretizes real-valued amplitudes into a fixed
//! number of bins over a fixed value interval. It is the 1-D marginal
//! approximation this engine uses in place of a joint probability density:
//! a deliberate, documented simplification, not an estimator of the full
//! N-dimensional integral.

use crate::error::{Result, WavelabError};
use crate::numeric::clamp_bin_index;

/// Fixed-range histogram over real-valued samples.
///
/// Out-of-range values are attributed to the nearest edge bin rather than
/// dropped, so the sum of counts always equals the number of values added.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueHistogram {
    counts: Vec<usize>,
    lo: f64,
    bin_width: f64,
    total: usize,
}

impl ValueHistogram {
    /// Creates an empty histogram with `num_bins` bins over `[lo, hi)`.
    ///
    /// Fails fast on a zero bin count or an inverted range.
    pub fn new(num_bins: usize, lo: f64, hi: f64) -> Result<Self> {
        if num_bins == 0 {
            return Err(WavelabError::InvalidBinCount { bins: num_bins });
        }
        if hi <= lo {
            return Err(WavelabError::InvalidRange { lo, hi });
        }
        Ok(Self {
            counts: vec![0; num_bins],
            lo,
            bin_width: (hi - lo) / num_bins as f64,
            total: 0,
        })
    }

    /// Creates a histogram and fills it from an amplitude iterator.
    pub fn from_values<I>(num_bins: usize, lo: f64, hi: f64, values: I) -> Result<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut hist = Self::new(num_bins, lo, hi)?;
        for v in values {
            hist.add(v);
        }
        Ok(hist)
    }

    /// Adds one value to the histogram.
    #[inline]
    pub fn add(&mut self, value: f64) {
        let idx = clamp_bin_index(value, self.lo, self.bin_width, self.counts.len());
        self.counts[idx] += 1;
        self.total += 1;
    }

    /// Per-bin counts, in bin order.
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// Number of bins holding at least one value.
    pub fn occupied_bins(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    /// Counts normalized by the total; sums to 1 when non-empty.
    pub fn probabilities(&self) -> Vec<f64> {
        if self.total == 0 {
            return vec![0.0; self.counts.len()];
        }
        let total = self.total as f64;
        self.counts.iter().map(|&c| c as f64 / total).collect()
    }

    /// Shannon entropy of the binned distribution, in bits.
    ///
    /// Empty bins are skipped explicitly (0 * log 0 := 0), and the result
    /// is clamped at zero to absorb floating-point underflow.
    pub fn entropy(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }

        let total = self.total as f64;
        let mut entropy = 0.0;

        for &count in &self.counts {
            if count == 0 {
                continue;
            }
            let p = (count as f64) / total;
            entropy -= p * p.log2();
        }

        entropy.max(0.0)
    }

    /// Total number of values added.
    pub fn len(&self) -> usize {
        self.total
    }

    /// Returns true if no values have been added.
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}
