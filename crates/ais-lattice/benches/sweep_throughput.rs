use ais_core::{Model, RngHandle};
use ais_lattice::{IsingModel, PottsModel};
use criterion::{criterion_group, criterion_main, Criterion};

fn bench_ising_sweep(c: &mut Criterion) {
    let model = IsingModel::new(32, 0.4).unwrap();
    let sweep = model.sites();
    c.bench_function("ising_sweep_32", |b| {
        let mut rng = RngHandle::from_seed(42);
        let mut state = model.sample(None, 0, &mut rng);
        b.iter(|| {
            state = model.sample(Some(&state), sweep, &mut rng);
        })
    });
}

fn bench_potts_sweep(c: &mut Criterion) {
    let model = PottsModel::new(32, 10, 0.4).unwrap();
    let sweep = model.sites();
    c.bench_function("potts_sweep_32", |b| {
        let mut rng = RngHandle::from_seed(42);
        let mut state = model.sample(None, 0, &mut rng);
        b.iter(|| {
            state = model.sample(Some(&state), sweep, &mut rng);
        })
    });
}

criterion_group!(benches, bench_ising_sweep, bench_potts_sweep);
criterion_main!(benches);
