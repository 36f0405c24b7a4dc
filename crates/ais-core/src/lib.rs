#![deny(missing_docs)]
#![doc = "Core traits and data types for nonequilibrium evidence estimation: \
probabilistic models, Markov transition kernels, annealing schedules, and \
microcanonical entropy tables."]

pub mod entropy;
pub mod errors;
pub mod numeric;
pub mod rng;
pub mod schedule;

pub use entropy::Entropy;
pub use errors::{AisError, ErrorInfo};
pub use rng::{derive_substream_seed, RngHandle};
pub use schedule::Schedule;

/// Probabilistic model over a state space.
///
/// `energy` is the negative log density of the model, scaled by the model's
/// own inverse temperature where it has one; differences of `energy` along a
/// path are the work increments consumed by the estimators.
pub trait Model {
    /// Configuration the model assigns probabilities to.
    type State;

    /// Negative log density of `state` (up to the log partition function).
    fn energy(&self, state: &Self::State) -> f64;

    /// Draws a sample, returning a freshly allocated state.
    ///
    /// Models with closed-form samplers ignore `init` and `steps`. Lattice
    /// models perform `steps` local updates starting from a copy of `init`
    /// (or from a fresh infinite-temperature draw when `init` is `None`);
    /// at inverse temperature zero they return an i.i.d. uniform state and
    /// ignore `init` entirely. Callers always retain ownership of `init`.
    fn sample(&self, init: Option<&Self::State>, steps: usize, rng: &mut RngHandle)
        -> Self::State;
}

/// Markov transition kernel with a known stationary distribution.
pub trait Kernel {
    /// Model left invariant by the kernel.
    type Stationary: Model;

    /// Applies one kernel step starting from `state`.
    fn transition(
        &self,
        state: &<Self::Stationary as Model>::State,
        rng: &mut RngHandle,
    ) -> <Self::Stationary as Model>::State;

    /// The stationary distribution of the kernel.
    fn stationary(&self) -> Self::Stationary;

    /// The kernel applied `n` times, as a single kernel.
    ///
    /// Powers are integer only: closed-form kernels compound their
    /// relaxation coefficient, lattice kernels multiply their sweep count.
    fn power(&self, n: u32) -> Self
    where
        Self: Sized;
}

/// State type produced by a kernel's stationary model.
pub type StateOf<K> = <<K as Kernel>::Stationary as Model>::State;
