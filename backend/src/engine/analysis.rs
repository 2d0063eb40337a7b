//! Closed-form win probabilities

use crate::models::{Strategy, TrialParameters};

/// Exact probability of winning one trial
///
/// Staying wins iff the first pick was right: `1/n`.
///
/// Switching wins iff the first pick was wrong (`(n-1)/n`) and the switch
/// lands on the car among the `n-1-k` closed doors other than the pick.
/// The host never opens the car after a miss, so the car is always one of
/// them: `(n-1) / (n * (n-1-k))`.
///
/// # Example
/// ```
/// use monty_hall_core::{expected_win_rate, Strategy, TrialParameters};
///
/// let classic = TrialParameters::new(1, 3, 1, Strategy::Switch).unwrap();
/// assert!((expected_win_rate(&classic) - 2.0 / 3.0).abs() < 1e-12);
/// ```
pub fn expected_win_rate(params: &TrialParameters) -> f64 {
    let n = params.total_doors() as f64;
    match params.strategy() {
        Strategy::Stay => 1.0 / n,
        Strategy::Switch => {
            let alternatives = (params.total_doors() - 1 - params.open_doors()) as f64;
            (n - 1.0) / (n * alternatives)
        }
    }
}
