//! Property tests for generator laws

use proptest::prelude::*;
use xoshiro_core_rs::{double, init, int, next, State, Xoshiro256StarStar, STATE_SIZE};

fn seeded(seed: u64) -> State {
    let mut state = [0; STATE_SIZE];
    init(&mut state, seed);
    state
}

proptest! {
    #[test]
    fn prop_degenerate_range_returns_from(seed in any::<u64>(), x in any::<i32>()) {
        let mut state = seeded(seed);
        prop_assert_eq!(int(&mut state, x, x), x);
    }

    #[test]
    fn prop_int_within_offset_width(seed in any::<u64>(), from in -100_000i32..100_000, to in -100_000i32..100_000) {
        prop_assume!(from != to);
        let mut state = seeded(seed);
        let width = (i64::from(to) - i64::from(from)).abs();
        let offset = i64::from(int(&mut state, from, to)) - i64::from(from);
        prop_assert!((0..width).contains(&offset));
    }

    #[test]
    fn prop_double_in_unit_interval(seed in any::<u64>()) {
        let mut state = seeded(seed);
        for _ in 0..100 {
            let d = double(&mut state);
            prop_assert!((0.0..1.0).contains(&d));
        }
    }

    #[test]
    fn prop_seed_determinism(seed in any::<u64>()) {
        let mut a = seeded(seed);
        let mut b = Xoshiro256StarStar::new(seed);
        for _ in 0..32 {
            prop_assert_eq!(next(&mut a), b.next_u64());
        }
    }

    #[test]
    fn prop_distinct_seeds_distinct_states(a in any::<u64>(), b in any::<u64>()) {
        prop_assume!(a != b);
        prop_assert_ne!(seeded(a), seeded(b));
    }

    #[test]
    fn prop_seeded_state_is_nonzero(seed in any::<u64>()) {
        prop_assert_ne!(seeded(seed), [0; STATE_SIZE]);
    }
}
