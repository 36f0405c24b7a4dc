//! Square-lattice Ising model with Metropolis single-site dynamics.

use ais_core::errors::{AisError, ErrorInfo};
use ais_core::{Kernel, Model, RngHandle};
use serde::{Deserialize, Serialize};

use crate::SpinState;

/// Ising model on a periodic L x L square lattice.
///
/// Spins are `+1`/`-1` stored row-major. The energy reported through
/// [`Model::energy`] is scaled by the inverse temperature so that energy
/// differences are log-density differences: `E(s) = -beta * sum_<ij> s_i s_j`
/// with every nearest-neighbor edge counted once.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IsingModel {
    size: usize,
    beta: f64,
}

impl IsingModel {
    /// Builds a model, rejecting degenerate lattice sizes and temperatures.
    pub fn new(size: usize, beta: f64) -> Result<Self, AisError> {
        if size < 2 {
            return Err(AisError::Config(
                ErrorInfo::new("lattice-too-small", "lattice side must be at least 2")
                    .with_context("size", size.to_string()),
            ));
        }
        if !(beta.is_finite() && beta >= 0.0) {
            return Err(AisError::Config(
                ErrorInfo::new("lattice-bad-beta", "beta must be finite and non-negative")
                    .with_context("beta", beta.to_string()),
            ));
        }
        Ok(Self { size, beta })
    }

    /// Lattice side length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Inverse temperature.
    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// Number of lattice sites.
    pub fn sites(&self) -> usize {
        self.size * self.size
    }

    /// Unscaled Hamiltonian `-sum_<ij> s_i s_j`, each edge counted once.
    pub fn hamiltonian(&self, state: &SpinState) -> f64 {
        let l = self.size;
        let mut total = 0i64;
        for i in 0..l {
            for j in 0..l {
                let s = state[i * l + j] as i64;
                let right = state[i * l + (j + 1) % l] as i64;
                let down = state[((i + 1) % l) * l + j] as i64;
                total -= s * (right + down);
            }
        }
        total as f64
    }

    /// Sum of the four neighbors of site `(i, j)`.
    fn local_field(&self, state: &SpinState, i: usize, j: usize) -> i32 {
        let l = self.size;
        state[i * l + (j + 1) % l]
            + state[i * l + (j + l - 1) % l]
            + state[((i + 1) % l) * l + j]
            + state[((i + l - 1) % l) * l + j]
    }

    fn random_state(&self, rng: &mut RngHandle) -> SpinState {
        (0..self.sites())
            .map(|_| if rng.uniform() < 0.5 { -1 } else { 1 })
            .collect()
    }

    fn metropolis_updates(&self, state: &mut SpinState, steps: usize, rng: &mut RngHandle) {
        let l = self.size;
        for _ in 0..steps {
            let i = (rng.uniform() * l as f64) as usize % l;
            let j = (rng.uniform() * l as f64) as usize % l;
            let s = state[i * l + j];
            // Flipping s changes the Hamiltonian by 2 * s * (neighbor sum).
            let delta = 2.0 * (s * self.local_field(state, i, j)) as f64;
            if delta <= 0.0 || rng.uniform() < (-self.beta * delta).exp() {
                state[i * l + j] = -s;
            }
        }
    }
}

impl Model for IsingModel {
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
pub struct IsingKernel {
    model: IsingModel,
    updates: usize,
}

impl IsingKernel {
    /// Wraps a model with an update count per transition.
    pub fn new(model: IsingModel, updates: usize) -> Self {
        Self { model, updates }
    }

    /// Single-site updates applied per transition.
    pub fn updates(&self) -> usize {
        self.updates
    }
}

impl Kernel for IsingKernel {
    type Stationary = IsingModel;

    fn transition(&self, state: &SpinState, rng: &mut RngHandle) -> SpinState {
        self.model.sample(Some(state), self.updates, rng)
    }

    fn stationary(&self) -> IsingModel {
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
    fn aligned_state_sits_at_the_ground_energy() {
        let model = IsingModel::new(4, 1.0).unwrap();
        let up = vec![1; 16];
        assert_eq!(model.hamiltonian(&up), -32.0);
        assert_eq!(model.energy(&up), -32.0);
    }

    #[test]
    fn checkerboard_is_the_energy_ceiling() {
        let model = IsingModel::new(4, 0.5).unwrap();
        let board: SpinState = (0..16)
            .map(|k| if (k / 4 + k % 4) % 2 == 0 { 1 } else { -1 })
            .collect();
        assert_eq!(model.hamiltonian(&board), 32.0);
        assert_eq!(model.energy(&board), 16.0);
    }

    #[test]
    fn infinite_temperature_ignores_the_seed_state() {
        let model = IsingModel::new(4, 0.0).unwrap();
        let mut rng = RngHandle::from_seed(3);
        let seed = vec![1; 16];
        let drawn = model.sample(Some(&seed), 0, &mut rng);
        assert_eq!(drawn.len(), 16);
        assert!(drawn.iter().all(|s| *s == 1 || *s == -1));
    }

    #[test]
    fn zero_updates_copy_the_state() {
        let model = IsingModel::new(4, 0.7).unwrap();
        let kernel = IsingKernel::new(model, 0);
        let mut rng = RngHandle::from_seed(5);
        let seed = vec![-1; 16];
        assert_eq!(kernel.transition(&seed, &mut rng), seed);
    }

    #[test]
    fn power_multiplies_the_update_count() {
        let model = IsingModel::new(8, 0.4).unwrap();
        let kernel = IsingKernel::new(model, 64);
        assert_eq!(kernel.power(3).updates(), 192);
        assert_eq!(kernel.power(0).updates(), 0);
    }

    #[test]
    fn degenerate_lattices_are_rejected() {
        assert!(IsingModel::new(1, 1.0).is_err());
        assert!(IsingModel::new(4, -0.1).is_err());
        assert!(IsingModel::new(4, f64::NAN).is_err());
    }
}
