#![deny(missing_docs)]
#![doc = "Square-lattice spin models for benchmarking evidence estimators: \
Ising and Potts Hamiltonians with Metropolis kernels, plus packaged \
microcanonical entropy tables that give exact partition functions for the \
supported lattice sizes."]

pub mod entropy;
pub mod ising;
pub mod potts;

pub use entropy::{ising_entropy, potts_entropy};
pub use ising::{IsingKernel, IsingModel};
pub use potts::{PottsKernel, PottsModel};

/// Row-major L x L lattice configuration.
///
/// Ising states hold `+1`/`-1`; Potts states hold colors in `0..q`.
pub type SpinState = Vec<i32>;
