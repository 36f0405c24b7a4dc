use ais_core::Schedule;
use ais_gauss::{kl_divergences, kl_spread, optimize_schedule, GaussianBridge, GaussianKernel, MixingMode};

fn wide_to_narrow_bridge() -> GaussianBridge {
    let left = GaussianKernel::new(0.5, 0.0, 2.0).unwrap();
    let right = GaussianKernel::new(0.5, 4.0, 0.3).unwrap();
    GaussianBridge::new(left, right, MixingMode::Moment)
}

#[test]
fn kl_divergences_cover_every_interval() {
    let bridge = wide_to_narrow_bridge();
    let schedule = Schedule::uniform(9).unwrap();
    let kls = kl_divergences(&bridge, &schedule).unwrap();
    assert_eq!(kls.len(), 8);
    assert!(kls.iter().all(|kl| *kl >= 0.0));
}

#[test]
fn optimizer_beats_the_uniform_schedule() {
    let bridge = wide_to_narrow_bridge();
    let intervals = 8;
    let uniform = Schedule::uniform(intervals + 1).unwrap();
    let optimized = optimize_schedule(&bridge, intervals, 500).unwrap();

    let before = kl_spread(&bridge, &uniform).unwrap();
    let after = kl_spread(&bridge, &optimized).unwrap();
    assert!(
        after <= before,
        "optimizer made the KL spread worse: {before} -> {after}"
    );
}

#[test]
fn optimized_schedule_is_well_formed() {
    let bridge = wide_to_narrow_bridge();
    let schedule = optimize_schedule(&bridge, 6, 500).unwrap();
    let points = schedule.points();
    assert_eq!(points.len(), 7);
    assert_eq!(points[0], 0.0);
    assert_eq!(points[6], 1.0);
    assert!(points.windows(2).all(|w| w[1] > w[0]));
}

#[test]
fn zero_intervals_is_a_config_error() {
    let bridge = wide_to_narrow_bridge();
    assert!(optimize_schedule(&bridge, 0, 100).is_err());
}

#[test]
fn single_interval_schedule_is_trivially_balanced() {
    let bridge = wide_to_narrow_bridge();
    let schedule = optimize_schedule(&bridge, 1, 100).unwrap();
    assert_eq!(schedule.points(), &[0.0, 1.0]);
    assert!(kl_spread(&bridge, &schedule).unwrap().abs() < 1e-12);
}
