//! Statistical tests for the simulation engine
//!
//! Each run uses 100,000 seeded trials; the standard error of the observed
//! rate is below 0.002, so a 0.02 tolerance never flakes.

use monty_hall_core::{
    expected_win_rate, play_trial, simulate, simulate_parallel, RngManager, Strategy,
    TrialParameters,
};

const TRIALS: u64 = 100_000;
const TOLERANCE: f64 = 0.02;

fn observed_rate(doors: usize, open: usize, strategy: Strategy, seed: u64) -> f64 {
    let params = TrialParameters::new(TRIALS, doors, open, strategy).unwrap();
    let result = simulate(&params, &mut RngManager::new(seed));
    assert_eq!(result.wins + result.losses, TRIALS);
    result.win_rate()
}

fn assert_close(observed: f64, expected: f64) {
    assert!(
        (observed - expected).abs() < TOLERANCE,
        "observed {:.4}, expected {:.4}",
        observed,
        expected
    );
}

#[test]
fn test_classic_stay_wins_one_third() {
    assert_close(observed_rate(3, 1, Strategy::Stay, 11), 1.0 / 3.0);
}

#[test]
fn test_classic_switch_wins_two_thirds() {
    assert_close(observed_rate(3, 1, Strategy::Switch, 12), 2.0 / 3.0);
}

#[test]
fn test_ten_doors_eight_opened_switch() {
    assert_close(observed_rate(10, 8, Strategy::Switch, 13), 0.9);
}

#[test]
fn test_ten_doors_none_opened_switch_matches_closed_form() {
    let params = TrialParameters::new(TRIALS, 10, 0, Strategy::Switch).unwrap();
    let expected = expected_win_rate(&params);

    // 0.9 chance the pick missed, then 1 in 9 alternatives is the car
    assert!((expected - 0.9 * (1.0 / 9.0)).abs() < 1e-12);
    assert_close(observed_rate(10, 0, Strategy::Switch, 14), expected);
}

#[test]
fn test_stay_rate_is_one_over_doors() {
    for doors in [3, 4, 6, 10] {
        assert_close(observed_rate(doors, 1, Strategy::Stay, doors as u64), 1.0 / doors as f64);
    }
}

#[test]
fn test_observed_matches_closed_form_across_configs() {
    for (doors, open) in [(4, 1), (4, 2), (5, 0), (5, 3), (8, 4)] {
        let params = TrialParameters::new(TRIALS, doors, open, Strategy::Switch).unwrap();
        let observed = simulate(&params, &mut RngManager::new(500 + doors as u64)).win_rate();
        assert_close(observed, expected_win_rate(&params));
    }
}

#[test]
fn test_zero_trials_any_configuration() {
    for doors in 3..12 {
        for open in 0..=doors - 2 {
            for strategy in [Strategy::Stay, Strategy::Switch] {
                let params = TrialParameters::new(0, doors, open, strategy).unwrap();
                let result = simulate(&params, &mut RngManager::new(1));
                assert_eq!(result.into_pair(), (0, 0));
            }
        }
    }
}

#[test]
fn test_maximum_open_doors_leaves_two_closed() {
    let params = TrialParameters::new(1, 12, 10, Strategy::Switch).unwrap();
    let mut rng = RngManager::new(404);

    for _ in 0..5_000 {
        let outcome = play_trial(&params, &mut rng);
        let remaining = outcome.remaining();
        assert_eq!(remaining.len(), 2);
        assert!(remaining.contains(&outcome.initial_choice));
        assert!(remaining.contains(&outcome.final_choice));
    }
}

#[test]
fn test_parallel_batches_converge() {
    let params = TrialParameters::new(TRIALS, 3, 1, Strategy::Switch).unwrap();
    let result = simulate_parallel(&params, 77, 8).unwrap();

    assert_eq!(result.trials(), TRIALS);
    assert_close(result.win_rate(), 2.0 / 3.0);
}

#[test]
fn test_parallel_is_deterministic_for_seed_and_batches() {
    let params = TrialParameters::new(30_001, 6, 3, Strategy::Switch).unwrap();

    let a = simulate_parallel(&params, 5, 7).unwrap();
    let b = simulate_parallel(&params, 5, 7).unwrap();
    assert_eq!(a, b);
}
