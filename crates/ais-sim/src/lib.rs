#![deny(missing_docs)]
#![doc = "Annealed importance sampling pipeline: kernel ladders, path \
simulation with Jarzynski work accumulation, free-energy estimators \
(Jarzynski, cumulant, Bennett acceptance ratio, histogram reweighting), and \
a reproducible Gaussian reference run."]

pub mod config;
pub mod determinism;
pub mod estimators;
pub mod path;
pub mod run;

pub use config::{KernelConfig, RunConfig};
pub use estimators::{bar, cumulant, cumulant_two_sided, histogram, jarzynski, HistogramOptions};
pub use path::{make_bridge, simulate, SimulationOutcome};
pub use run::{run_gaussian, RunSummary};
