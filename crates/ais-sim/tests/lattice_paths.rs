use ais_core::Schedule;
use ais_lattice::{ising_entropy, IsingKernel, IsingModel};
use ais_sim::{jarzynski, make_bridge, simulate};

#[test]
fn annealed_ising_paths_recover_the_exact_partition_ratio() {
    // Anneal a 4 x 4 lattice from infinite temperature to beta = 0.2 and
    // compare the Jarzynski estimate against the packaged exact table.
    let size = 4;
    let beta_max = 0.2;
    let updates = 64;

    let schedule = Schedule::uniform(21).unwrap();
    let ladder = make_bridge(&schedule, 1, |beta| {
        Ok(IsingKernel::new(
            IsingModel::new(size, beta * beta_max)?,
            updates,
        ))
    })
    .unwrap();

    let outcome = simulate(&ladder, 800, 0, 31_337).unwrap();
    let estimate = jarzynski(&outcome.work).unwrap();

    let exact = -ising_entropy(size).unwrap().log_z(beta_max);
    assert!(
        (estimate - exact).abs() < 0.1,
        "jarzynski {estimate} vs exact {exact}"
    );
}

#[test]
fn final_states_come_from_the_cold_end() {
    let schedule = Schedule::uniform(11).unwrap();
    let ladder = make_bridge(&schedule, 1, |beta| {
        Ok(IsingKernel::new(IsingModel::new(4, beta)?, 128))
    })
    .unwrap();
    let outcome = simulate(&ladder, 50, 0, 5).unwrap();
    assert_eq!(outcome.final_states.len(), 50);
    // At beta = 1 the annealed states are strongly ordered.
    let cold = IsingModel::new(4, 1.0).unwrap();
    let mean_h = outcome
        .final_states
        .iter()
        .map(|s| cold.hamiltonian(s))
        .sum::<f64>()
        / 50.0;
    assert!(mean_h < -16.0, "mean hamiltonian {mean_h}");
}
