//! Property tests over the whole valid parameter space

use monty_hall_core::Strategy as Play;
use monty_hall_core::{play_trial, simulate, simulate_parallel, RngManager, TrialParameters};
use proptest::prelude::*;

fn any_play() -> impl Strategy<Value = Play> {
    prop_oneof![Just(Play::Stay), Just(Play::Switch)]
}

/// (doors, open) pairs with 3 <= doors < 40 and open <= doors - 2.
fn game() -> impl Strategy<Value = (usize, usize)> {
    (3usize..40).prop_flat_map(|doors| (Just(doors), 0..=doors - 2))
}

proptest! {
    #[test]
    fn prop_counts_sum_to_trials(
        (doors, open) in game(),
        play in any_play(),
        trials in 0u64..2_000,
        seed in any::<u64>(),
    ) {
        let params = TrialParameters::new(trials, doors, open, play).unwrap();
        let result = simulate(&params, &mut RngManager::new(seed));
        prop_assert_eq!(result.wins + result.losses, trials);
    }

    #[test]
    fn prop_parallel_counts_sum_to_trials(
        (doors, open) in game(),
        trials in 0u64..2_000,
        batches in 1usize..16,
        seed in any::<u64>(),
    ) {
        let params = TrialParameters::new(trials, doors, open, Play::Switch).unwrap();
        let result = simulate_parallel(&params, seed, batches).unwrap();
        prop_assert_eq!(result.trials(), trials);
    }

    #[test]
    fn prop_host_follows_rules(
        (doors, open) in game(),
        play in any_play(),
        seed in any::<u64>(),
    ) {
        let params = TrialParameters::new(1, doors, open, play).unwrap();
        let outcome = play_trial(&params, &mut RngManager::new(seed));

        prop_assert_eq!(outcome.opened.len(), open);
        prop_assert!(outcome.opened.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(!outcome.opened.contains(&outcome.initial_choice));
        if outcome.initial_choice != outcome.car {
            prop_assert!(!outcome.opened.contains(&outcome.car));
        }
        prop_assert!(outcome.remaining().len() >= 2);
        prop_assert!(!outcome.opened.contains(&outcome.final_choice));
        match play {
            Play::Stay => {
                prop_assert_eq!(outcome.final_choice, outcome.initial_choice);
            }
            Play::Switch => {
                prop_assert_ne!(outcome.final_choice, outcome.initial_choice);
            }
        }
    }

    #[test]
    fn prop_open_beyond_limit_rejected(doors in 3usize..40, extra in 1usize..5) {
        let open = doors - 2 + extra;
        prop_assert!(TrialParameters::new(1, doors, open, Play::Stay).is_err());
    }
}
