//! Run configuration for the Gaussian reference pipeline.

use ais_gauss::MixingMode;
use serde::{Deserialize, Serialize};

use crate::estimators::HistogramOptions;

/// Endpoint kernel parameters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct KernelConfig {
    /// AR(1) relaxation coefficient.
    pub tau: f64,
    /// Stationary mean.
    pub mean: f64,
    /// Stationary standard deviation.
    pub sigma: f64,
}

/// Everything needed to reproduce one Gaussian estimation run.
///
/// All fields carry serde defaults so a partial JSON document configures a
/// run; the `Default` impl is the standard-normal-to-shifted-narrow bridge
/// used throughout the tests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// Bridge endpoint at interpolation parameter zero.
    #[serde(default = "default_initial")]
    pub initial: KernelConfig,
    /// Bridge endpoint at interpolation parameter one.
    #[serde(default = "default_target")]
    pub target: KernelConfig,
    /// Stationary-moment blending rule for intermediate kernels.
    #[serde(default = "default_mixing")]
    pub mixing: MixingMode,
    /// Number of schedule intervals.
    #[serde(default = "default_intervals")]
    pub intervals: usize,
    /// Kernel power applied at every ladder step.
    #[serde(default = "default_kernel_power")]
    pub kernel_power: u32,
    /// Paths per direction.
    #[serde(default = "default_paths")]
    pub n_paths: usize,
    /// Master seed; every random stream in the run derives from it.
    #[serde(default = "default_seed")]
    pub seed: u64,
    /// Iteration cap for the schedule optimizer.
    #[serde(default = "default_optimizer_iters")]
    pub optimizer_max_iters: u64,
    /// Convergence tolerance of the BAR fixed point.
    #[serde(default = "default_bar_tolerance")]
    pub bar_tolerance: f64,
    /// Iteration cap for the BAR fixed point.
    #[serde(default = "default_bar_iters")]
    pub bar_max_iters: usize,
    /// Histogram estimator settings.
    #[serde(default)]
    pub histogram: HistogramOptions,
}

fn default_initial() -> KernelConfig {
    KernelConfig {
        tau: 0.7,
        mean: 0.0,
        sigma: 1.0,
    }
}

fn default_target() -> KernelConfig {
    KernelConfig {
        tau: 0.7,
        mean: 2.0,
        sigma: 0.5,
    }
}

fn default_mixing() -> MixingMode {
    MixingMode::Natural
}

fn default_intervals() -> usize {
    16
}

fn default_kernel_power() -> u32 {
    1
}

fn default_paths() -> usize {
    1000
}

fn default_seed() -> u64 {
    42
}

fn default_optimizer_iters() -> u64 {
    500
}

fn default_bar_tolerance() -> f64 {
    1e-10
}

fn default_bar_iters() -> usize {
    500
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            initial: default_initial(),
            target: default_target(),
            mixing: default_mixing(),
            intervals: default_intervals(),
            kernel_power: default_kernel_power(),
            n_paths: default_paths(),
            seed: default_seed(),
            optimizer_max_iters: default_optimizer_iters(),
            bar_tolerance: default_bar_tolerance(),
            bar_max_iters: default_bar_iters(),
            histogram: HistogramOptions::default(),
        }
    }
}
