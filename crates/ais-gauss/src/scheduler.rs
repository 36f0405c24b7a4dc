//! Schedule optimization by equalizing Kullback-Leibler increments.
//!
//! A good annealing schedule spends its interpolation steps where the bridge
//! moves fastest in distribution space. The optimizer reparameterizes the
//! schedule through squared increments and minimizes the spread of the
//! consecutive stationary KL divergences with a derivative-free simplex
//! search, so equal effort is spent on every leg of the bridge.

use ais_core::errors::{AisError, ErrorInfo};
use ais_core::numeric::mean;
use ais_core::{Kernel, Schedule};
use argmin::core::{CostFunction, Error, Executor, State};
use argmin::solver::neldermead::NelderMead;

use crate::bridge::GaussianBridge;

/// KL divergence between consecutive stationary distributions, one value per
/// schedule interval.
pub fn kl_divergences(bridge: &GaussianBridge, schedule: &Schedule) -> Result<Vec<f64>, AisError> {
    let kernels = bridge.along(schedule)?;
    Ok(kernels
        .windows(2)
        .map(|pair| pair[0].stationary().kl(&pair[1].stationary()))
        .collect())
}

/// Sum of squared deviations of the interval KLs from their mean.
///
/// Zero exactly when every interval carries the same KL load.
pub fn kl_spread(bridge: &GaussianBridge, schedule: &Schedule) -> Result<f64, AisError> {
    let kls = kl_divergences(bridge, schedule)?;
    let target = mean(&kls);
    Ok(kls.iter().map(|kl| (kl - target) * (kl - target)).sum())
}

struct KlSpreadCost<'a> {
    bridge: &'a GaussianBridge,
}

impl CostFunction for KlSpreadCost<'_> {
    type Param = Vec<f64>;
    type Output = f64;

    fn cost(&self, increments: &Vec<f64>) -> Result<f64, Error> {
        // Degenerate simplex vertices get an infinite cost instead of an
        // error so the search simply moves away from them.
        let schedule = match Schedule::from_increments(increments) {
            Ok(schedule) => schedule,
            Err(_) => return Ok(f64::INFINITY),
        };
        match kl_spread(self.bridge, &schedule) {
            Ok(spread) => Ok(spread),
            Err(_) => Ok(f64::INFINITY),
        }
    }
}

/// Finds a schedule with `intervals` legs that equalizes the KL load.
///
/// Runs a Nelder-Mead search over unnormalized increments, starting from the
/// uniform schedule. Returns a `Convergence` error when the solver fails or
/// produces no usable iterate.
pub fn optimize_schedule(
    bridge: &GaussianBridge,
    intervals: usize,
    max_iters: u64,
) -> Result<Schedule, AisError> {
    if intervals == 0 {
        return Err(AisError::Config(ErrorInfo::new(
            "scheduler-no-intervals",
            "a schedule needs at least one interval",
        )));
    }
    let mut simplex = vec![vec![1.0; intervals]];
    for i in 0..intervals {
        let mut vertex = vec![1.0; intervals];
        vertex[i] += 0.1;
        simplex.push(vertex);
    }
    let solver = NelderMead::new(simplex);
    let cost = KlSpreadCost { bridge };
    let result = Executor::new(cost, solver)
        .configure(|state| state.max_iters(max_iters))
        .run()
        .map_err(|err| {
            AisError::Convergence(
                ErrorInfo::new("scheduler-solver-failed", "simplex search aborted")
                    .with_context("detail", err.to_string()),
            )
        })?;
    let best = result.state().get_best_param().cloned().ok_or_else(|| {
        AisError::Convergence(ErrorInfo::new(
            "scheduler-no-iterate",
            "simplex search produced no best iterate",
        ))
    })?;
    Schedule::from_increments(&best)
}
