//! Free-energy estimators over ensembles of accumulated work values.
//!
//! All estimators follow the forward convention: a forward work sample `w`
//! drawn along an initial-to-target bridge yields an estimate of
//! `ln Z_initial - ln Z_target`. Reverse work arrays are accumulated on the
//! reversed bridge and passed as-is; the two-sided estimators handle the
//! sign flip internally.

use ais_core::errors::{AisError, ErrorInfo};
use ais_core::numeric::{log1p_exp, log_sum_exp, mean, variance};
use ais_core::Entropy;
use serde::{Deserialize, Serialize};

fn require_work(name: &str, work: &[f64]) -> Result<(), AisError> {
    if work.is_empty() {
        return Err(AisError::Input(
            ErrorInfo::new("estimator-empty-work", "work ensemble is empty")
                .with_context("argument", name),
        ));
    }
    Ok(())
}

/// Jarzynski estimator `ln(n) - log_sum_exp(-w)`.
///
/// Unbiased in the exponential domain but log-domain biased at finite
/// sample size; the bias shrinks as the work variance drops.
pub fn jarzynski(work: &[f64]) -> Result<f64, AisError> {
    require_work("work", work)?;
    let negated: Vec<f64> = work.iter().map(|w| -w).collect();
    Ok((work.len() as f64).ln() - log_sum_exp(&negated))
}

/// One-sided cumulant (second-order Hummer) estimator `mean(w) - var(w)/2`.
///
/// Exact when the work distribution is Gaussian, biased otherwise.
pub fn cumulant(work: &[f64]) -> Result<f64, AisError> {
    require_work("work", work)?;
    Ok(mean(work) - variance(work) / 2.0)
}

/// Two-sided cumulant estimator over forward and reverse ensembles.
pub fn cumulant_two_sided(forward: &[f64], reverse: &[f64]) -> Result<f64, AisError> {
    require_work("forward", forward)?;
    require_work("reverse", reverse)?;
    Ok(0.5 * (mean(forward) - mean(reverse)) - (variance(forward) - variance(reverse)) / 12.0)
}

/// Bennett acceptance ratio estimate from forward and reverse work.
///
/// Solves the self-consistency equation by fixed-point iteration, seeded
/// with the average of the two one-sided Jarzynski estimates. The softplus
/// terms are evaluated through [`log1p_exp`] so large work values cannot
/// overflow. Exceeding `max_iters` is a `Convergence` error whose context
/// carries the last iterate under `last_estimate`.
pub fn bar(
    forward: &[f64],
    reverse: &[f64],
    tolerance: f64,
    max_iters: usize,
) -> Result<f64, AisError> {
    require_work("forward", forward)?;
    require_work("reverse", reverse)?;
    if !(tolerance.is_finite() && tolerance > 0.0) {
        return Err(AisError::Config(
            ErrorInfo::new("bar-bad-tolerance", "tolerance must be finite and positive")
                .with_context("tolerance", tolerance.to_string()),
        ));
    }

    // jarzynski(reverse) estimates the negated ratio, so the seed averages
    // the two one-sided estimates of the same quantity.
    let mut estimate = 0.5 * (jarzynski(forward)? - jarzynski(reverse)?);
    for _ in 0..max_iters {
        let lhs_terms: Vec<f64> = forward.iter().map(|w| -log1p_exp(w - estimate)).collect();
        let rhs_terms: Vec<f64> = reverse.iter().map(|w| -log1p_exp(w + estimate)).collect();
        let increment = log_sum_exp(&rhs_terms) - log_sum_exp(&lhs_terms);
        estimate += increment;
        if increment.abs() < tolerance {
            return Ok(estimate);
        }
    }
    Err(AisError::Convergence(
        ErrorInfo::new("bar-no-convergence", "fixed-point iteration hit its cap")
            .with_context("last_estimate", estimate.to_string())
            .with_context("max_iters", max_iters.to_string())
            .with_context("tolerance", tolerance.to_string())
            .with_hint("loosen the tolerance or raise the iteration cap"),
    ))
}

/// Settings for the [`histogram`] estimator.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HistogramOptions {
    /// Offset splitting the work between the two replica weightings.
    #[serde(default = "default_alpha")]
    pub alpha: f64,
    /// Relative change of the log likelihood that counts as converged.
    #[serde(default = "default_histogram_tolerance")]
    pub tolerance: f64,
    /// Cap on the number of E/M rounds.
    #[serde(default = "default_histogram_iters")]
    pub max_iters: usize,
}

fn default_alpha() -> f64 {
    0.5
}

fn default_histogram_tolerance() -> f64 {
    1e-10
}

fn default_histogram_iters() -> usize {
    1000
}

impl Default for HistogramOptions {
    fn default() -> Self {
        Self {
            alpha: default_alpha(),
            tolerance: default_histogram_tolerance(),
            max_iters: default_histogram_iters(),
        }
    }
}

/// WHAM-style histogram estimator over the pooled work sample.
///
/// Treats the forward and reverse ensembles as two biased replicas of one
/// underlying work density, with replica `k` reweighting each pooled value
/// `w_i` by `exp(-(k - alpha) * w_i)`. Reverse work enters the pool negated
/// so both replicas describe the same forward work variable. An E/M
/// iteration alternates replica normalizers and pointwise density estimates
/// until the log likelihood stabilizes, then reads the free-energy
/// difference off the fitted density. Returns the estimate together with
/// the fitted [`Entropy`] table over the pooled work values.
pub fn histogram(
    forward: &[f64],
    reverse: &[f64],
    options: &HistogramOptions,
) -> Result<(f64, Entropy), AisError> {
    require_work("forward", forward)?;
    require_work("reverse", reverse)?;
    if !options.alpha.is_finite() {
        return Err(AisError::Config(
            ErrorInfo::new("histogram-bad-alpha", "alpha must be finite")
                .with_context("alpha", options.alpha.to_string()),
        ));
    }
    if !(options.tolerance.is_finite() && options.tolerance > 0.0) {
        return Err(AisError::Config(
            ErrorInfo::new("histogram-bad-tolerance", "tolerance must be finite and positive")
                .with_context("tolerance", options.tolerance.to_string()),
        ));
    }

    let pooled: Vec<f64> = forward
        .iter()
        .copied()
        .chain(reverse.iter().map(|w| -w))
        .collect();
    let counts = [forward.len() as f64, reverse.len() as f64];
    let ln_counts = [counts[0].ln(), counts[1].ln()];
    // Replica bias exponents: q[k][i] = (k - alpha) * w_i.
    let bias = |k: usize, w: f64| (k as f64 - options.alpha) * w;

    let mut log_density = vec![-(pooled.len() as f64).ln(); pooled.len()];
    let mut normalizers = [0.0f64; 2];
    let mut previous: Option<f64> = None;
    let mut converged = false;
    let mut likelihood = 0.0;

    for _ in 0..options.max_iters {
        for k in 0..2 {
            let terms: Vec<f64> = pooled
                .iter()
                .zip(&log_density)
                .map(|(w, p)| -bias(k, *w) + p)
                .collect();
            normalizers[k] = -log_sum_exp(&terms);
        }
        likelihood = -(counts[0] * normalizers[0] + counts[1] * normalizers[1])
            - log_density.iter().sum::<f64>();
        for (i, w) in pooled.iter().enumerate() {
            let per_replica = [
                -bias(0, *w) + normalizers[0] + ln_counts[0],
                -bias(1, *w) + normalizers[1] + ln_counts[1],
            ];
            log_density[i] = -log_sum_exp(&per_replica);
        }
        let total = log_sum_exp(&log_density);
        for p in &mut log_density {
            *p -= total;
        }
        if let Some(last) = previous {
            if ((last - likelihood) / (last + likelihood)).abs() < options.tolerance {
                converged = true;
                break;
            }
        }
        previous = Some(likelihood);
    }

    if !converged {
        return Err(AisError::Convergence(
            ErrorInfo::new("histogram-no-convergence", "E/M iteration hit its cap")
                .with_context("max_iters", options.max_iters.to_string())
                .with_context("last_log_likelihood", likelihood.to_string()),
        ));
    }

    let entropy = Entropy::new(pooled, log_density)?;
    let estimate = entropy.log_z(-options.alpha) - entropy.log_z(1.0 - options.alpha);
    Ok((estimate, entropy))
}
