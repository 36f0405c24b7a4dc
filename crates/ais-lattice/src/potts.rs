//! Square-lattice Potts model with Metropolis single-site dynamics.

use ais_core::errors::{AisError, ErrorInfo};
use ais_core::{Kernel, Model, RngHandle};
use serde::{Deserialize, Serialize};

use crate::SpinState;

/// Q-state Potts model on a periodic L x L square lattice.
///
/// Site values are colors in `0..q`. The scaled energy is
/// `E(s) = -beta * sum_<ij> [s_i == s_j]` with every edge counted once, so
/// the ground states are the `q` uniform colorings at `-beta * 2 * L^2`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PottsModel {
    size: usize,
    q: u32,
    beta: f64,
}

impl PottsModel {
    /// Builds a model, rejecting degenerate sizes, color counts, and betas.
    pub fn new(size: usize, q: u32, beta: f64) -> Result<Self, AisError> {
        if size < 2 {
            return Err(AisError::Config(
                ErrorInfo::new("lattice-too-small", "lattice side must be at least 2")
                    .with_context("size", size.to_string()),
            ));
        }
        if q < 2 {
            return Err(AisError::Config(
                ErrorInfo::new("potts-bad-q", "a Potts model needs at least two colors")
                    .with_context("q", q.to_string()),
            ));
        }
        if !(beta.is_finite() && beta >= 0.0) {
            return Err(AisError::Config(
                ErrorInfo::new("lattice-bad-beta", "beta must be finite and non-negative")
                    .with_context("beta", beta.to_string()),
            ));
        }
        Ok(Self { size, q, beta })
    }

    /// Lattice side length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of colors.
    pub fn q(&self) -> u32 {
        self.q
    }

    /// Inverse temperature.
    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// Number of lattice sites.
    pub fn sites(&self) -> usize {
        self.size * self.size
    }

    /// Unscaled Hamiltonian `-sum_<ij> [s_i == s_j]`, each edge counted once.
    pub fn hamiltonian(&self, state: &SpinState) -> f64 {
        let l = self.size;
        let mut matches = 0i64;
        for i in 0..l {
            for j in 0..l {
                let s = state[i * l + j];
                matches += (s == state[i * l + (j + 1) % l]) as i64;
                matches += (s == state[((i + 1) % l) * l + j]) as i64;
            }
        }
        -(matches as f64)
    }

    /// Number of the four neighbors of `(i, j)` matching `color`.
    fn matching_neighbors(&self, state: &SpinState, i: usize, j: usize, color: i32) -> i32 {
        let l = self.size;
        (state[i * l + (j + 1) % l] == color) as i32
            + (state[i * l + (j + l - 1) % l] == color) as i32
            + (state[((i + 1) % l) * l + j] == color) as i32
            + (state[((i + l - 1) % l) * l + j] == color) as i32
    }

    fn random_state(&self, rng: &mut RngHandle) -> SpinState {
        (0..self.sites())
            .map(|_| (rng.uniform() * self.q as f64) as i32 % self.q as i32)
            .collect()
    }

    fn metropolis_updates(&self, state: &mut SpinState, steps: usize, rng: &mut RngHandle) {
        let l = self.size;
        for _ in 0..steps {
            let i = (rng.uniform() * l as f64) as usize % l;
            let j = (rng.uniform() * l as f64) as usize % l;
            let old = state[i * l + j];
            // Propose a uniformly random color different from the current one.
            let draw = (rng.uniform() * (self.q - 1) as f64) as i32 % (self.q - 1) as i32;
            let proposed = if draw >= old { draw + 1 } else { draw };
            let delta = (self.matching_neighbors(state, i, j, old)
                - self.matching_neighbors(state, i, j, proposed)) as f64;
            if delta <= 0.0 || rng.uniform() < (-self.beta * delta).exp() {
                state[i * l + j] = proposed;
            }
        }
    }
}

impl Model for PottsModel {
    type State = SpinState;

    fn energy(&self, state: &SpinState) -> f64 {
        self.beta * self.hamiltonian(state)
    }

    fn sample(&self, init: Option<&SpinState>, steps: usize, rng: &mut RngHandle) -> SpinState {
        if self.beta == 0.0 {
            return self.random_state(rng);
        }
        let mut state = match init {
            Some(seed) => seed.clone(),
            None => self.random_state(rng),
        };
        self.metropolis_updates(&mut state, steps, rng);
        state
    }
}

/// Metropolis kernel performing a fixed number of single-site updates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PottsKernel {
    model: PottsModel,
    updates: usize,
}

impl PottsKernel {
    /// Wraps a model with an update count per transition.
    pub fn new(model: PottsModel, updates: usize) -> Self {
        Self { model, updates }
    }

    /// Single-site updates applied per transition.
    pub fn updates(&self) -> usize {
        self.updates
    }
}

impl Kernel for PottsKernel {
    type Stationary = PottsModel;

    fn transition(&self, state: &SpinState, rng: &mut RngHandle) -> SpinState {
        self.model.sample(Some(state), self.updates, rng)
    }

    fn stationary(&self) -> PottsModel {
        self.model
    }

    fn power(&self, n: u32) -> Self {
        Self {
            model: self.model,
            updates: self.updates * n as usize,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_coloring_is_a_ground_state() {
        let model = PottsModel::new(4, 10, 1.0).unwrap();
        let flat = vec![7; 16];
        assert_eq!(model.hamiltonian(&flat), -32.0);
    }

    #[test]
    fn infinite_temperature_draws_valid_colors() {
        let model = PottsModel::new(4, 10, 0.0).unwrap();
        let mut rng = RngHandle::from_seed(11);
        let state = model.sample(None, 0, &mut rng);
        assert_eq!(state.len(), 16);
        assert!(state.iter().all(|c| (0..10).contains(c)));
    }

    #[test]
    fn updates_never_produce_the_current_color_as_a_proposal() {
        // With q = 2 the only legal proposal is the other color, so a long
        // run through the kernel keeps every site in {0, 1}.
        let model = PottsModel::new(4, 2, 0.5).unwrap();
        let kernel = PottsKernel::new(model, 200);
        let mut rng = RngHandle::from_seed(13);
        let out = kernel.transition(&vec![0; 16], &mut rng);
        assert!(out.iter().all(|c| *c == 0 || *c == 1));
    }

    #[test]
    fn power_multiplies_the_update_count() {
        let model = PottsModel::new(8, 10, 0.3).unwrap();
        let kernel = PottsKernel::new(model, 10);
        assert_eq!(kernel.power(4).updates(), 40);
    }

    #[test]
    fn degenerate_parameters_are_rejected() {
        assert!(PottsModel::new(1, 10, 1.0).is_err());
        assert!(PottsModel::new(4, 1, 1.0).is_err());
        assert!(PottsModel::new(4, 10, -1.0).is_err());
    }
}
