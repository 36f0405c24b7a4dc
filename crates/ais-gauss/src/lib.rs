#![deny(missing_docs)]
#![doc = "Gaussian building blocks for annealed importance sampling: exact \
one-dimensional targets, AR(1) transition kernels, interpolating bridges, \
and a KL-equalizing schedule optimizer."]

pub mod bridge;
pub mod kernel;
pub mod model;
pub mod scheduler;

pub use bridge::{GaussianBridge, MixingMode};
pub use kernel::GaussianKernel;
pub use model::Gaussian;
pub use scheduler::{kl_divergences, kl_spread, optimize_schedule};
