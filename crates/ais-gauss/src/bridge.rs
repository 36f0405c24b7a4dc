//! Families of kernels interpolating between two Gaussian endpoints.

use ais_core::errors::{AisError, ErrorInfo};
use ais_core::{Kernel, Schedule};
use serde::{Deserialize, Serialize};

use crate::kernel::GaussianKernel;

/// How the stationary moments of intermediate kernels are blended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MixingMode {
    /// Linear interpolation of the unconditional first and second moments.
    Moment,
    /// Geometric mixture of the stationary densities, which for Gaussians
    /// is precision-weighted averaging of the natural parameters.
    Natural,
}

/// Continuous family of AR(1) kernels joining two endpoint kernels.
///
/// At interpolation parameter `beta = 0` the bridge reproduces the left
/// endpoint and at `beta = 1` the right. The relaxation coefficient is
/// always blended linearly; the stationary moments follow the configured
/// [`MixingMode`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GaussianBridge {
    left: GaussianKernel,
    right: GaussianKernel,
    mode: MixingMode,
}

impl GaussianBridge {
    /// Builds a bridge between two endpoint kernels.
    pub fn new(left: GaussianKernel, right: GaussianKernel, mode: MixingMode) -> Self {
        Self { left, right, mode }
    }

    /// Left endpoint, returned exactly by `at(0.0)`.
    pub fn left(&self) -> &GaussianKernel {
        &self.left
    }

    /// Right endpoint, returned exactly by `at(1.0)`.
    pub fn right(&self) -> &GaussianKernel {
        &self.right
    }

    /// Kernel at interpolation parameter `beta` in `[0, 1]`.
    pub fn at(&self, beta: f64) -> Result<GaussianKernel, AisError> {
        if !(beta.is_finite() && (0.0..=1.0).contains(&beta)) {
            return Err(AisError::Config(
                ErrorInfo::new("bridge-bad-beta", "beta must lie in [0, 1]")
                    .with_context("beta", beta.to_string()),
            ));
        }
        let (tau0, tau1) = (self.left.tau(), self.right.tau());
        let p0 = self.left.stationary();
        let p1 = self.right.stationary();
        let tau = (1.0 - beta) * tau0 + beta * tau1;
        let (mean, sigma) = match self.mode {
            MixingMode::Moment => {
                if 1.0 - tau == 0.0 {
                    return Err(AisError::Config(
                        ErrorInfo::new(
                            "bridge-degenerate",
                            "moment mixing is undefined when both endpoints are identity kernels",
                        )
                        .with_context("beta", beta.to_string()),
                    ));
                }
                let mean = ((1.0 - beta) * (1.0 - tau0) * p0.mean()
                    + beta * (1.0 - tau1) * p1.mean())
                    / (1.0 - tau);
                let var = ((1.0 - beta) * (1.0 - tau0 * tau0) * p0.sigma() * p0.sigma()
                    + beta * (1.0 - tau1 * tau1) * p1.sigma() * p1.sigma())
                    / (1.0 - tau * tau);
                (mean, var.sqrt())
            }
            MixingMode::Natural => {
                let prec0 = 1.0 / (p0.sigma() * p0.sigma());
                let prec1 = 1.0 / (p1.sigma() * p1.sigma());
                let var = 1.0 / ((1.0 - beta) * prec0 + beta * prec1);
                let mean = var * ((1.0 - beta) * p0.mean() * prec0 + beta * p1.mean() * prec1);
                (mean, var.sqrt())
            }
        };
        GaussianKernel::new(tau, mean, sigma)
    }

    /// Kernels at every point of `schedule`, in schedule order.
    pub fn along(&self, schedule: &Schedule) -> Result<Vec<GaussianKernel>, AisError> {
        schedule.points().iter().map(|&b| self.at(b)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bridge(mode: MixingMode) -> GaussianBridge {
        let left = GaussianKernel::new(0.9, 0.0, 1.0).unwrap();
        let right = GaussianKernel::new(0.6, 3.0, 0.5).unwrap();
        GaussianBridge::new(left, right, mode)
    }

    fn assert_close(a: &GaussianKernel, b: &GaussianKernel) {
        assert!((a.tau() - b.tau()).abs() < 1e-12);
        assert!((a.stationary().mean() - b.stationary().mean()).abs() < 1e-12);
        assert!((a.stationary().sigma() - b.stationary().sigma()).abs() < 1e-12);
    }

    #[test]
    fn endpoints_are_reproduced() {
        for mode in [MixingMode::Moment, MixingMode::Natural] {
            let b = bridge(mode);
            assert_close(&b.at(0.0).unwrap(), b.left());
            assert_close(&b.at(1.0).unwrap(), b.right());
        }
    }

    #[test]
    fn tau_interpolates_linearly_in_both_modes() {
        for mode in [MixingMode::Moment, MixingMode::Natural] {
            let b = bridge(mode);
            let k = b.at(0.25).unwrap();
            assert!((k.tau() - (0.75 * 0.9 + 0.25 * 0.6)).abs() < 1e-12);
        }
    }

    #[test]
    fn natural_mixing_averages_precisions() {
        let b = bridge(MixingMode::Natural);
        let k = b.at(0.5).unwrap();
        let expected_var = 1.0 / (0.5 * 1.0 + 0.5 * 4.0);
        let s = k.stationary().sigma();
        assert!((s * s - expected_var).abs() < 1e-12);
    }

    #[test]
    fn beta_outside_unit_interval_is_rejected() {
        let b = bridge(MixingMode::Moment);
        assert!(b.at(-0.01).is_err());
        assert!(b.at(1.01).is_err());
        assert!(b.at(f64::NAN).is_err());
    }

    #[test]
    fn identity_endpoints_reject_moment_mixing() {
        let id = GaussianKernel::new(1.0, 0.0, 1.0).unwrap();
        let b = GaussianBridge::new(id, id, MixingMode::Moment);
        assert!(b.at(0.5).is_err());
    }

    #[test]
    fn along_returns_one_kernel_per_schedule_point() {
        let b = bridge(MixingMode::Natural);
        let schedule = Schedule::uniform(5).unwrap();
        let kernels = b.along(&schedule).unwrap();
        assert_eq!(kernels.len(), 5);
        assert_close(&kernels[0], b.left());
        assert_close(&kernels[4], b.right());
    }
}
