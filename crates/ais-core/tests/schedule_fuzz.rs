use ais_core::Schedule;
use proptest::prelude::*;

proptest! {
    #[test]
    fn increments_always_yield_valid_schedules(
        incr in proptest::collection::vec(0.01f64..10.0, 1..40),
    ) {
        let schedule = Schedule::from_increments(&incr).unwrap();
        let points = schedule.points();
        prop_assert_eq!(points.len(), incr.len() + 1);
        prop_assert_eq!(points[0], 0.0);
        prop_assert_eq!(points[points.len() - 1], 1.0);
        for w in points.windows(2) {
            prop_assert!(w[1] > w[0]);
        }
    }

    #[test]
    fn sign_of_increments_is_irrelevant(
        incr in proptest::collection::vec(0.01f64..10.0, 1..20),
    ) {
        let flipped: Vec<f64> = incr.iter().map(|x| -x).collect();
        let a = Schedule::from_increments(&incr).unwrap();
        let b = Schedule::from_increments(&flipped).unwrap();
        prop_assert_eq!(a.points(), b.points());
    }
}
