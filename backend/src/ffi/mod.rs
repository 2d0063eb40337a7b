//! PyO3 bindings
//!
//! Exposes the engine to Python as plain functions.
//!
//! # Example (from Python)
//!
//! ```python
//! import monty_hall_core
//!
//! wins, losses = monty_hall_core.simulate(100_000, 3, 1, True, seed=42)
//! print(f"switching won {wins / (wins + losses):.3f}")
//! ```

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::engine;
use crate::models::{Strategy, TrialParameters};
use crate::rng::RngManager;

fn parameters(
    trials: u64,
    doors: usize,
    open_doors: usize,
    switch: bool,
) -> PyResult<TrialParameters> {
    TrialParameters::new(trials, doors, open_doors, Strategy::from_switch(switch))
        .map_err(|e| PyErr::new::<PyValueError, _>(e.to_string()))
}

/// Run trials and return `(wins, losses)`
///
/// Raises ValueError if `doors < 3` or `open_doors > doors - 2`.
/// Without a seed the run draws from fresh entropy.
#[pyfunction]
#[pyo3(signature = (trials, doors, open_doors, switch, seed=None))]
pub fn simulate(
    trials: u64,
    doors: usize,
    open_doors: usize,
    switch: bool,
    seed: Option<u64>,
) -> PyResult<(u64, u64)> {
    let params = parameters(trials, doors, open_doors, switch)?;
    let mut rng = match seed {
        Some(seed) => RngManager::new(seed),
        None => RngManager::from_entropy(),
    };
    Ok(engine::simulate(&params, &mut rng).into_pair())
}

/// Closed-form win probability for one trial
#[pyfunction]
pub fn expected_win_rate(doors: usize, open_doors: usize, switch: bool) -> PyResult<f64> {
    let params = parameters(1, doors, open_doors, switch)?;
    Ok(engine::expected_win_rate(&params))
}
