//! A single game
//!
//! One trial follows the classic show:
//! 1. The car goes behind a uniformly random door
//! 2. The contestant picks a door, independently of the car
//! 3. The host opens `open_doors` doors chosen uniformly among those that
//!    are neither the pick nor (when the pick missed) the car
//! 4. The contestant stays, or switches to a uniformly random closed door
//!    other than the pick
//!
//! The opened set is drawn with a partial Fisher-Yates shuffle over a
//! scratch buffer, so a run of many trials allocates once.

use crate::models::{Strategy, TrialOutcome, TrialParameters};
use crate::rng::RandomSource;

/// Doors touched by one trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Draw {
    pub car: usize,
    pub chosen: usize,
    pub final_choice: usize,
}

impl Draw {
    pub fn won(&self) -> bool {
        self.final_choice == self.car
    }
}

/// Play one trial, leaving the opened doors in `eligible[..open_doors]`.
pub(crate) fn draw_trial<R: RandomSource + ?Sized>(
    params: &TrialParameters,
    rng: &mut R,
    eligible: &mut Vec<usize>,
) -> Draw {
    let total = params.total_doors();
    let open = params.open_doors();

    let car = rng.below(total);
    let chosen = rng.below(total);
    let missed = chosen != car;

    eligible.clear();
    eligible.extend((0..total).filter(|&door| door != chosen && !(missed && door == car)));
    debug_assert!(eligible.len() >= open, "host has too few doors to open");

    for i in 0..open {
        let j = i + rng.below(eligible.len() - i);
        eligible.swap(i, j);
    }

    let final_choice = match params.strategy() {
        Strategy::Stay => chosen,
        Strategy::Switch => {
            // Closed doors other than the pick: unopened eligible doors,
            // plus the car when the pick missed it.
            let unopened = &eligible[open..];
            let options = unopened.len() + usize::from(missed);
            let pick = rng.below(options);
            if pick < unopened.len() {
                unopened[pick]
            } else {
                car
            }
        }
    };

    Draw {
        car,
        chosen,
        final_choice,
    }
}

/// Play one game and report every door involved
///
/// # Example
/// ```
/// use monty_hall_core::{play_trial, RngManager, Strategy, TrialParameters};
///
/// let params = TrialParameters::new(1, 5, 3, Strategy::Switch).unwrap();
/// let mut rng = RngManager::new(42);
///
/// let outcome = play_trial(&params, &mut rng);
/// assert_eq!(outcome.opened.len(), 3);
/// assert_eq!(outcome.remaining().len(), 2);
/// assert!(!outcome.opened.contains(&outcome.initial_choice));
/// ```
pub fn play_trial<R: RandomSource + ?Sized>(params: &TrialParameters, rng: &mut R) -> TrialOutcome {
    let mut eligible = Vec::with_capacity(params.total_doors());
    let draw = draw_trial(params, rng, &mut eligible);

    let mut opened = eligible[..params.open_doors()].to_vec();
    opened.sort_unstable();

    TrialOutcome {
        total_doors: params.total_doors(),
        car: draw.car,
        initial_choice: draw.chosen,
        opened,
        final_choice: draw.final_choice,
    }
}
