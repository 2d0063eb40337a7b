//! Repeated trials
//!
//! [`simulate`] is the whole engine contract: parameters and a random source
//! in, win/loss counts out. [`simulate_parallel`] splits the same work into
//! independently seeded batches and sums them.

use rayon::prelude::*;
use tracing::{debug, debug_span};

use super::trial::draw_trial;
use super::SimulationError;
use crate::models::{SimulationResult, TrialParameters};
use crate::rng::{RandomSource, RngManager};

/// Run `params.trial_count()` independent trials
///
/// # Example
/// ```
/// use monty_hall_core::{simulate, RngManager, Strategy, TrialParameters};
///
/// let params = TrialParameters::new(1_000, 3, 1, Strategy::Switch).unwrap();
/// let mut rng = RngManager::new(12345);
///
/// let result = simulate(&params, &mut rng);
/// assert_eq!(result.wins + result.losses, 1_000);
/// ```
pub fn simulate<R: RandomSource + ?Sized>(params: &TrialParameters, rng: &mut R) -> SimulationResult {
    let span = debug_span!(
        "simulate",
        trials = params.trial_count(),
        doors = params.total_doors(),
        open = params.open_doors(),
        strategy = ?params.strategy()
    );
    let _guard = span.enter();

    let mut eligible = Vec::with_capacity(params.total_doors());
    let mut result = SimulationResult::default();

    for _ in 0..params.trial_count() {
        let draw = draw_trial(params, rng, &mut eligible);
        result.record(draw.won());
    }

    debug!(
        wins = result.wins,
        losses = result.losses,
        "simulation complete"
    );
    result
}

/// Run the trials as `batches` independent batches on the rayon pool
///
/// Batch `i` draws from `RngManager::new(seed).fork(i)` and the last batch
/// takes the remainder. The result depends only on `(params, seed,
/// batches)`, not on thread scheduling.
///
/// # Errors
/// Returns [`SimulationError::InvalidBatchCount`] if `batches == 0`.
///
/// # Example
/// ```
/// use monty_hall_core::{simulate_parallel, Strategy, TrialParameters};
///
/// let params = TrialParameters::new(10_001, 3, 1, Strategy::Stay).unwrap();
/// let a = simulate_parallel(&params, 7, 4).unwrap();
/// let b = simulate_parallel(&params, 7, 4).unwrap();
///
/// assert_eq!(a, b);
/// assert_eq!(a.trials(), 10_001);
/// ```
pub fn simulate_parallel(
    params: &TrialParameters,
    seed: u64,
    batches: usize,
) -> Result<SimulationResult, SimulationError> {
    if batches == 0 {
        return Err(SimulationError::InvalidBatchCount);
    }

    let root = RngManager::new(seed);
    let total = params.trial_count();
    let per_batch = total / batches as u64;
    let remainder = total % batches as u64;

    debug!(total, batches, per_batch, "splitting simulation into batches");

    let result = (0..batches)
        .into_par_iter()
        .map(|batch| {
            let count = if batch == batches - 1 {
                per_batch + remainder
            } else {
                per_batch
            };
            let mut rng = root.fork(batch as u64);
            simulate(&params.with_trial_count(count), &mut rng)
        })
        .reduce(SimulationResult::default, SimulationResult::merge);

    Ok(result)
}
