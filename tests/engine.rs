//! Property-based and end-to-end tests for the public API.

use dicepool_engine::{
    all_probabilities_for_high_die, all_probabilities_for_threshold, brute_force_max_roll,
    brute_force_max_roll_with_sides, check_accuracy, drop_highest, expected_value,
    probability_of_max_equal_to, standard_deviation, variance, DiceError, Pmf, Ruleset, TOLERANCE,
};
use proptest::prelude::*;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() < eps
}

proptest! {
    // 1. Highest-die masses telescope to one
    #[test]
    fn high_die_sums_to_one(dice in 1u32..=40, sides in 1u32..=30) {
        let pmf = all_probabilities_for_high_die(dice, sides);
        prop_assert_eq!(pmf.len(), sides as usize);
        prop_assert!(pmf.is_normalized(TOLERANCE), "sum={}", pmf.total_mass());
    }

    // 2. Threshold masses sum to one and cover 0..=dice
    #[test]
    fn threshold_sums_to_one(dice in 1u32..=40, sides in 1u32..=30, val_seed in 0u32..1000) {
        let val = 1 + val_seed % sides;
        let pmf = all_probabilities_for_threshold(dice, sides, val);
        prop_assert_eq!(pmf.min_outcome(), Some(0));
        prop_assert_eq!(pmf.max_outcome(), Some(dice as i64));
        prop_assert!(pmf.is_normalized(TOLERANCE), "sum={}", pmf.total_mass());
    }

    // 3. Every mass lies in [0, 1]
    #[test]
    fn masses_in_unit_interval(dice in 0u32..=20, sides in 0u32..=12, val in 0u32..=14) {
        for pmf in [
            all_probabilities_for_high_die(dice, sides),
            all_probabilities_for_threshold(dice, sides, val),
        ] {
            for (_, p) in pmf.iter() {
                prop_assert!((0.0..=1.0 + TOLERANCE).contains(&p), "p={}", p);
            }
        }
    }

    // 4. Out-of-domain pools are certainly zero successes
    #[test]
    fn threshold_fallback(dice in 0u32..=10, sides in 0u32..=10, val in 0u32..=12) {
        prop_assume!(dice == 0 || sides == 0 || val == 0 || val > sides);
        prop_assert_eq!(all_probabilities_for_threshold(dice, sides, val), Pmf::point(0));
    }

    // 5. Generators are deterministic
    #[test]
    fn generators_deterministic(dice in 0u32..=12, sides in 0u32..=12, val in 0u32..=12) {
        let a = all_probabilities_for_high_die(dice, sides);
        let b = all_probabilities_for_high_die(dice, sides);
        prop_assert_eq!(a.to_json().unwrap(), b.to_json().unwrap());

        let a = all_probabilities_for_threshold(dice, sides, val);
        let b = all_probabilities_for_threshold(dice, sides, val);
        prop_assert_eq!(a.to_json().unwrap(), b.to_json().unwrap());
    }

    // 6. Enumeration agrees with the closed form on small pools
    #[test]
    fn brute_force_matches_formula(dice in 1u32..=4, sides in 1u32..=6) {
        let exact = all_probabilities_for_high_die(dice, sides);
        let brute = brute_force_max_roll_with_sides(dice, sides);
        prop_assert!(exact.approx_eq(&brute, TOLERANCE), "diff={}", exact.max_abs_diff(&brute));
    }

    // 7. drop_highest removes exactly one copy of the maximum
    #[test]
    fn drop_highest_removes_one_max(roll in prop::collection::vec(1u32..=6, 1..8)) {
        let rest = drop_highest(&roll).unwrap();
        prop_assert_eq!(rest.len(), roll.len() - 1);

        let max = *roll.iter().max().unwrap();
        let before = roll.iter().filter(|&&f| f == max).count();
        let after = rest.iter().filter(|&&f| f == max).count();
        prop_assert_eq!(after, before - 1);
    }

    // 8. Binomial mean: E[successes] = n·q
    #[test]
    fn threshold_mean_is_nq(dice in 1u32..=30, sides in 1u32..=20, val_seed in 0u32..1000) {
        let val = 1 + val_seed % sides;
        let q = (sides - val + 1) as f64 / sides as f64;
        let pmf = all_probabilities_for_threshold(dice, sides, val);
        prop_assert!(approx_eq(expected_value(&pmf), dice as f64 * q, 1e-9));
        prop_assert!(approx_eq(variance(&pmf), dice as f64 * q * (1.0 - q), 1e-9));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    // 9. Threshold pools in the thousands stay finite and normalized
    #[test]
    fn threshold_large_pools(dice in 1000u32..=5000, sides in 1u32..=20, val_seed in 0u32..1000) {
        let val = 1 + val_seed % sides;
        let pmf = all_probabilities_for_threshold(dice, sides, val);
        prop_assert_eq!(pmf.len(), dice as usize + 1);
        for (k, p) in pmf.iter() {
            prop_assert!(p.is_finite() && (0.0..=1.0).contains(&p), "k={} p={}", k, p);
        }
        prop_assert!(pmf.is_normalized(TOLERANCE), "sum={}", pmf.total_mass());

        let q = (sides - val + 1) as f64 / sides as f64;
        let mean = dice as f64 * q;
        prop_assert!(approx_eq(expected_value(&pmf), mean, 1e-9 * mean.max(1.0)));
    }

    // 10. Highest-die pools near and past i32::MAX stay in [0, 1]
    #[test]
    fn high_die_huge_pools(dice in (i32::MAX as u32 - 1000)..=u32::MAX, sides in 1u32..=30) {
        let pmf = all_probabilities_for_high_die(dice, sides);
        prop_assert_eq!(pmf.len(), sides as usize);
        for (k, p) in pmf.iter() {
            prop_assert!(p.is_finite() && (0.0..=1.0).contains(&p), "k={} p={}", k, p);
        }
        prop_assert!(pmf.is_normalized(TOLERANCE), "sum={}", pmf.total_mass());
    }
}

#[test]
fn threshold_pool_of_1100_round_trips_json() {
    let pmf = all_probabilities_for_threshold(1100, 6, 4);
    assert!(pmf.is_normalized(TOLERANCE), "sum={}", pmf.total_mass());

    let restored = Pmf::from_json(&pmf.to_json().unwrap()).unwrap();
    assert_eq!(restored.len(), pmf.len());
    assert!(restored.approx_eq(&pmf, 1e-15));
}

#[test]
fn high_die_pool_past_i32_max() {
    let pmf = all_probabilities_for_high_die(3_000_000_000, 6);
    assert!(pmf.values().all(|p| p.is_finite() && p >= 0.0));
    assert!(approx_eq(pmf.get(6), 1.0, 1e-12));
    assert!(pmf.is_normalized(TOLERANCE));
}

#[test]
fn cross_validation_three_d6() {
    let exact = all_probabilities_for_high_die(3, 6);
    let brute = brute_force_max_roll(3);
    for k in 1..=6 {
        assert!(approx_eq(exact.get(k), brute.get(k), TOLERANCE), "k={}", k);
    }
    assert!(approx_eq(probability_of_max_equal_to(3, 6, 6), 1.0 - 125.0 / 216.0, 1e-12));
}

#[test]
fn check_accuracy_up_to_six_dice() {
    init_tracing();
    let report = check_accuracy(6, TOLERANCE).unwrap();
    assert_eq!(report.checks.len(), 6);
    assert!(report.all_passed(), "worst: {:?}", report.worst());
}

#[test]
fn threshold_scenario_with_summary() {
    let pmf = all_probabilities_for_threshold(2, 5, 3);
    let expected: Pmf = [(0, 0.16), (1, 0.48), (2, 0.36)].into_iter().collect();
    assert!(pmf.approx_eq(&expected, 1e-12));

    assert!(approx_eq(expected_value(&pmf), 1.2, 1e-12));
    assert!(approx_eq(standard_deviation(&pmf), 0.6928, 1e-4));
}

#[test]
fn degenerate_pmf_statistics() {
    let pmf = all_probabilities_for_threshold(0, 6, 3);
    assert_eq!(pmf.to_json().unwrap(), r#"{"0":1.0}"#);
    assert_eq!(expected_value(&pmf), 0.0);
    assert_eq!(standard_deviation(&pmf), 0.0);
}

#[test]
fn drop_highest_rejects_empty_roll() {
    assert_eq!(drop_highest(&[]).unwrap_err(), DiceError::EmptyRoll);
}

#[test]
fn ruleset_end_to_end() {
    init_tracing();
    let json = r#"{
        "analyses": [
            { "name": "Attack", "mechanic": { "type": "high_die", "dice": 3, "sides": 6 } },
            { "name": "Hits", "mechanic": { "type": "threshold", "dice": 2, "sides": 5, "val": 3 } },
            { "name": "Impossible", "mechanic": { "type": "threshold", "dice": 2, "sides": 4, "val": 5 } }
        ]
    }"#;
    let ruleset = Ruleset::from_json(json).unwrap();
    let results = ruleset.evaluate();
    assert_eq!(results.len(), 3);

    let attack = &results[0];
    assert!(attack.pmf.approx_eq(&brute_force_max_roll(3), TOLERANCE));
    assert!(!attack.skip);

    let hits = &results[1];
    let survival = hits.pmf.at_least();
    assert!(approx_eq(survival.get(1), 0.84, 1e-12));
    assert!(hits.pmf.given_positive().is_normalized(TOLERANCE));

    let impossible = &results[2];
    assert_eq!(impossible.pmf, Pmf::point(0));
    assert!(impossible.skip);

    let encoded = impossible.to_json().unwrap();
    assert!(encoded.contains(r#""skip":true"#));
}
