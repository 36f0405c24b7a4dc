//! One-dimensional Gaussian target distributions.

use ais_core::errors::{AisError, ErrorInfo};
use ais_core::{Model, RngHandle};
use rand::Rng;
use rand_distr::StandardNormal;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// Normal distribution with mean `mean` and standard deviation `sigma`.
///
/// Serves as the stationary distribution of [`GaussianKernel`] and as a
/// closed-form reference target: its log partition function and
/// Kullback-Leibler divergences are available exactly, which makes it the
/// workhorse for validating estimators against known answers.
///
/// [`GaussianKernel`]: crate::GaussianKernel
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Gaussian {
    mean: f64,
    sigma: f64,
}

impl Gaussian {
    /// Builds a Gaussian, rejecting non-finite means and non-positive widths.
    pub fn new(mean: f64, sigma: f64) -> Result<Self, AisError> {
        if !mean.is_finite() {
            return Err(AisError::Config(
                ErrorInfo::new("gaussian-bad-mean", "mean must be finite")
                    .with_context("mean", mean.to_string()),
            ));
        }
        if !(sigma.is_finite() && sigma > 0.0) {
            return Err(AisError::Config(
                ErrorInfo::new("gaussian-bad-sigma", "sigma must be finite and positive")
                    .with_context("sigma", sigma.to_string()),
            ));
        }
        Ok(Self { mean, sigma })
    }

    /// Mean of the distribution.
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Standard deviation of the distribution.
    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    /// Exact log normalization constant, `0.5 * ln(2 pi sigma^2)`.
    pub fn log_z(&self) -> f64 {
        0.5 * (TAU * self.sigma * self.sigma).ln()
    }

    /// Kullback-Leibler divergence `KL(self || other)` in nats.
    pub fn kl(&self, other: &Gaussian) -> f64 {
        let var = self.sigma * self.sigma;
        let other_var = other.sigma * other.sigma;
        let shift = self.mean - other.mean;
        0.5 * ((var + shift * shift) / other_var - 1.0 + (other_var / var).ln())
    }
}

impl Model for Gaussian {
    type State = f64;

    fn energy(&self, state: &f64) -> f64 {
        let z = (self.mean - state) / self.sigma;
        0.5 * z * z
    }

    fn sample(&self, _init: Option<&f64>, _steps: usize, rng: &mut RngHandle) -> f64 {
        let z: f64 = rng.sample(StandardNormal);
        self.mean + self.sigma * z
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_normal_log_z() {
        let g = Gaussian::new(0.0, 1.0).unwrap();
        assert!((g.log_z() - 0.5 * TAU.ln()).abs() < 1e-12);
    }

    #[test]
    fn kl_of_identical_distributions_is_zero() {
        let g = Gaussian::new(1.5, 0.7).unwrap();
        assert!(g.kl(&g).abs() < 1e-12);
    }

    #[test]
    fn kl_matches_closed_form() {
        // KL(N(0,1) || N(1,2)) = 0.5 * ((1 + 1)/4 - 1 + ln 4).
        let p = Gaussian::new(0.0, 1.0).unwrap();
        let q = Gaussian::new(1.0, 2.0).unwrap();
        let expected = 0.5 * (0.5 - 1.0 + 4.0f64.ln());
        assert!((p.kl(&q) - expected).abs() < 1e-12);
    }

    #[test]
    fn energy_is_squared_standardized_distance() {
        let g = Gaussian::new(2.0, 0.5).unwrap();
        assert!((g.energy(&3.0) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn degenerate_parameters_are_rejected() {
        assert!(Gaussian::new(f64::NAN, 1.0).is_err());
        assert!(Gaussian::new(0.0, 0.0).is_err());
        assert!(Gaussian::new(0.0, -1.0).is_err());
    }
}
