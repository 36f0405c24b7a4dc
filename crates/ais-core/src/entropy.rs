//! Microcanonical entropy (log density of states) tables.

use serde::{Deserialize, Serialize};

use crate::errors::{AisError, ErrorInfo};
use crate::numeric::log_sum_exp;

/// Log density of states over a discrete set of energy levels.
///
/// Stores parallel arrays of energy levels and log degeneracies. The table is
/// read-only after construction and answers partition-function and
/// mean-energy queries at arbitrary inverse temperature through stable
/// log-sum-exp reductions. Construction is an explicit factory call with no
/// side effects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entropy {
    energies: Vec<f64>,
    log_weights: Vec<f64>,
}

impl Entropy {
    /// Wraps parallel energy/log-degeneracy arrays without normalizing.
    pub fn new(energies: Vec<f64>, log_weights: Vec<f64>) -> Result<Self, AisError> {
        if energies.is_empty() {
            return Err(AisError::Input(ErrorInfo::new(
                "entropy-empty",
                "an entropy table needs at least one level",
            )));
        }
        if energies.len() != log_weights.len() {
            return Err(AisError::Input(
                ErrorInfo::new(
                    "entropy-length-mismatch",
                    "energy and log-weight arrays must have equal length",
                )
                .with_context("energies", energies.len().to_string())
                .with_context("log_weights", log_weights.len().to_string()),
            ));
        }
        Ok(Self {
            energies,
            log_weights,
        })
    }

    /// Wraps and normalizes so that the weights sum to one in log space.
    pub fn normalized(energies: Vec<f64>, log_weights: Vec<f64>) -> Result<Self, AisError> {
        let mut entropy = Self::new(energies, log_weights)?;
        entropy.normalize();
        Ok(entropy)
    }

    /// Shifts the log weights so that `log_sum_exp(log_weights) == 0`.
    pub fn normalize(&mut self) {
        let total = log_sum_exp(&self.log_weights);
        for w in &mut self.log_weights {
            *w -= total;
        }
    }

    /// Log partition function at the given inverse temperature:
    /// `log sum_i exp(-beta * E_i + s_i)`.
    pub fn log_z(&self, beta: f64) -> f64 {
        let terms: Vec<f64> = self
            .energies
            .iter()
            .zip(&self.log_weights)
            .map(|(e, s)| -beta * e + s)
            .collect();
        log_sum_exp(&terms)
    }

    /// Mean energy under the Boltzmann distribution at `beta`.
    pub fn mean_energy(&self, beta: f64) -> f64 {
        let log_z = self.log_z(beta);
        self.energies
            .iter()
            .zip(&self.log_weights)
            .map(|(e, s)| e * (-beta * e + s - log_z).exp())
            .sum()
    }

    /// Energy levels in table order.
    pub fn energies(&self) -> &[f64] {
        &self.energies
    }

    /// Log degeneracies in table order.
    pub fn log_weights(&self) -> &[f64] {
        &self.log_weights
    }

    /// Number of levels in the table.
    pub fn len(&self) -> usize {
        self.energies.len()
    }

    /// True when the table has no levels (never, for a constructed table).
    pub fn is_empty(&self) -> bool {
        self.energies.is_empty()
    }
}
