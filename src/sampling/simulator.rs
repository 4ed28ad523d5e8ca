//! Sampling and Whittaker-Shannon reconstruction of the reference signal.

use tracing::debug;

use crate::config::SamplingConfig;
use crate::core::report::{ReconstructionError, SimulationReport};
use crate::core::signal::Sample;
use crate::error::{Result, WavelabError};
use crate::numeric::{sinc, uniform_grid};
use crate::sampling::classify::classify_rate;
use crate::sampling::metrics;
use crate::sampling::reference::ReferenceSignal;

/// Samples a reference signal on a uniform time grid at rate `fs`.
///
/// The grid starts at `start` with spacing `1/fs` and runs inclusively up
/// to `end` plus half a period of tolerance, so rounding never drops the
/// final intended grid point. Fails with [`WavelabError::InvalidRate`] when
/// `fs` is zero, negative, or not finite.
pub fn sample_signal(
    signal: &ReferenceSignal,
    start: f64,
    end: f64,
    fs: f64,
) -> Result<Vec<Sample>> {
    if !fs.is_finite() || fs <= 0.0 {
        return Err(WavelabError::InvalidRate { fs });
    }

    let ts = 1.0 / fs;
    let samples = uniform_grid(start, end, ts, ts / 2.0)
        .into_iter()
        .map(|t| Sample::new(t, signal.evaluate(t)))
        .collect();
    Ok(samples)
}

/// Samples the default reference signal at rate `fs` over `[start, end]`.
pub fn sample(start: f64, end: f64, fs: f64) -> Result<Vec<Sample>> {
    sample_signal(&ReferenceSignal::default(), start, end, fs)
}

/// Approximates the Whittaker-Shannon interpolation
/// `x(t) = SUM x[n] * sinc((t - t_n) / Ts)` at time `t`, truncated to the
/// `window_radius` samples nearest `t` on each side.
///
/// The truncation is a deliberate trade-off: sinc decays away from `t`, so
/// distant samples contribute little, and bounding the window keeps the
/// cost independent of the total sample count. The window is centered on
/// the first sample with time >= `t`; when no such sample exists the
/// trailing `window_radius` samples are used instead. Expect larger error
/// near the ends of the sampled interval, where the window is one-sided.
///
/// An empty sample set reconstructs to 0.0.
pub fn reconstruct(t: f64, samples: &[Sample], ts: f64, window_radius: usize) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }

    let center = samples.partition_point(|s| s.time < t);
    let (lo, hi) = if center == samples.len() {
        // t is past the last sample: fall back to the trailing window
        (samples.len().saturating_sub(window_radius), samples.len())
    } else {
        (
            center.saturating_sub(window_radius),
            (center + window_radius).min(samples.len()),
        )
    };

    samples[lo..hi]
        .iter()
        .map(|s| s.value * sinc((t - s.time) / ts))
        .sum()
}

/// Runs one full sampling experiment: sample the reference signal, rebuild
/// it on a dense grid by sinc interpolation, classify the rate against the
/// Nyquist threshold, and measure interior reconstruction error.
///
/// The error summary excludes `cfg.edge_margin` of the span on each side:
/// the truncated sinc sum is expected to degrade near the boundaries, and
/// folding that edge error in would mask the rate's actual effect.
pub fn simulate(start: f64, end: f64, fs: f64, cfg: &SamplingConfig) -> Result<SimulationReport> {
    let reference = ReferenceSignal::default();
    let samples = sample_signal(&reference, start, end, fs)?;
    let ts = 1.0 / fs;
    let classification = classify_rate(fs, reference.nyquist_rate(), cfg.rate_epsilon_hz);

    let span = end - start;
    let reconstruction: Vec<Sample> = if span > 0.0 {
        let step = span / cfg.render_points.max(1) as f64;
        uniform_grid(start, end, step, step / 2.0)
            .into_iter()
            .map(|t| Sample::new(t, reconstruct(t, &samples, ts, cfg.window_radius)))
            .collect()
    } else {
        vec![Sample::new(
            start,
            reconstruct(start, &samples, ts, cfg.window_radius),
        )]
    };

    let margin = span * cfg.edge_margin;
    let residuals: Vec<f64> = reconstruction
        .iter()
        .filter(|s| s.time >= start + margin && s.time <= end - margin)
        .map(|s| s.value - reference.evaluate(s.time))
        .collect();

    let error = ReconstructionError {
        rms: metrics::rms(&residuals),
        max_abs: metrics::max_abs(&residuals),
        evaluated_points: residuals.len(),
    };

    debug!(
        fs,
        samples = samples.len(),
        status = %classification.status,
        rms = error.rms,
        "sampling simulation complete"
    );

    Ok(SimulationReport {
        fs,
        samples,
        reconstruction,
        classification,
        error,
    })
}
