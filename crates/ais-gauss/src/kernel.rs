//! First-order autoregressive transition kernels with Gaussian stationary
//! distributions.

use ais_core::errors::{AisError, ErrorInfo};
use ais_core::{Kernel, RngHandle};
use rand::Rng;
use rand_distr::StandardNormal;
use serde::{Deserialize, Serialize};

use crate::model::Gaussian;

/// AR(1) kernel `y -> tau * y + (1 - tau) * mu + sqrt(1 - tau^2) * sigma * Z`.
///
/// The kernel leaves `N(mu, sigma^2)` invariant for any relaxation
/// coefficient `tau` in `[0, 1]`. `tau = 0` draws i.i.d. from the stationary
/// distribution; `tau = 1` is the identity kernel. Kernels with matching
/// stationary parameters form a semigroup under [`compose`]: applying a
/// `tau1`-kernel then a `tau2`-kernel equals one `tau1 * tau2`-kernel.
///
/// [`compose`]: GaussianKernel::compose
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GaussianKernel {
    tau: f64,
    stationary: Gaussian,
}

impl GaussianKernel {
    /// Builds a kernel from a relaxation coefficient and stationary moments.
    pub fn new(tau: f64, mean: f64, sigma: f64) -> Result<Self, AisError> {
        if !(tau.is_finite() && (0.0..=1.0).contains(&tau)) {
            return Err(AisError::Config(
                ErrorInfo::new("kernel-bad-tau", "tau must lie in [0, 1]")
                    .with_context("tau", tau.to_string()),
            ));
        }
        Ok(Self {
            tau,
            stationary: Gaussian::new(mean, sigma)?,
        })
    }

    /// Relaxation coefficient of the kernel.
    pub fn tau(&self) -> f64 {
        self.tau
    }

    /// Kernel equivalent to applying `self` first and then `other`.
    ///
    /// The composite relaxes with `tau = self.tau * other.tau`; its
    /// stationary moments are the tau-weighted blend of the two inputs.
    /// Composing two identity kernels yields `self` unchanged.
    pub fn compose(&self, other: &GaussianKernel) -> GaussianKernel {
        let tau1 = self.tau;
        let tau2 = other.tau;
        let tau = tau1 * tau2;
        if 1.0 - tau == 0.0 {
            return *self;
        }
        let (mu1, s1) = (self.stationary.mean(), self.stationary.sigma());
        let (mu2, s2) = (other.stationary.mean(), other.stationary.sigma());
        let mean = ((1.0 - tau1) * mu1 + tau1 * (1.0 - tau2) * mu2) / (1.0 - tau);
        let var = ((1.0 - tau1 * tau1) * s1 * s1 + tau1 * tau1 * (1.0 - tau2 * tau2) * s2 * s2)
            / (1.0 - tau * tau);
        // The blend of two valid stationaries is valid: tau < 1 and var > 0.
        let stationary = Gaussian::new(mean, var.sqrt()).unwrap_or(self.stationary);
        GaussianKernel { tau, stationary }
    }
}

impl Kernel for GaussianKernel {
    type Stationary = Gaussian;

    fn transition(&self, state: &f64, rng: &mut RngHandle) -> f64 {
        let z: f64 = rng.sample(StandardNormal);
        let mu = self.stationary.mean();
        let sigma = self.stationary.sigma();
        self.tau * state + (1.0 - self.tau) * mu + (1.0 - self.tau * self.tau).sqrt() * sigma * z
    }

    fn stationary(&self) -> Gaussian {
        self.stationary
    }

    fn power(&self, n: u32) -> Self {
        Self {
            tau: self.tau.powi(n as i32),
            stationary: self.stationary,
        }
    }
}
