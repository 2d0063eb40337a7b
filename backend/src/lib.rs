//! Monty Hall Simulator Core - Rust Engine
//!
//! Repeated trials of a generalized Monty Hall game: any number of doors,
//! any number of doors opened by the host, stay or switch.
//!
//! # Architecture
//!
//! - **models**: Domain types (TrialParameters, TrialOutcome, SimulationResult)
//! - **engine**: Trial logic, sequential and batched runs, closed-form rates
//! - **report**: Seeded run reports with replay identity
//! - **rng**: Injectable random source and the xorshift64* generator
//!
//! # Critical Invariants
//!
//! 1. `wins + losses == trial_count` for every run
//! 2. All randomness flows through an explicit [`RandomSource`]
//! 3. Invalid door counts are rejected when parameters are built
//!
//! # Example
//!
//! ```
//! use monty_hall_core::{simulate, RngManager, Strategy, TrialParameters};
//!
//! let params = TrialParameters::new(10_000, 3, 1, Strategy::Switch)?;
//! let result = simulate(&params, &mut RngManager::new(7));
//! assert!(result.win_rate() > 0.6);
//! # Ok::<(), monty_hall_core::SimulationError>(())
//! ```

// Module declarations
pub mod engine;
pub mod models;
pub mod report;
pub mod rng;

// Re-exports for convenience
pub use engine::{
    expected_win_rate, play_trial, simulate, simulate_parallel, SimulationError,
};
pub use models::{SimulationResult, Strategy, TrialOutcome, TrialParameters, MAX_DOORS, MIN_DOORS};
pub use report::{compute_config_hash, SimulationReport};
pub use rng::{RandomSource, RngManager};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn monty_hall_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(ffi::simulate, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::expected_win_rate, m)?)?;
    Ok(())
}
