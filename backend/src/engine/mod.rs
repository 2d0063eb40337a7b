//! Simulation engine
//!
//! Plays generalized Monty Hall games and counts wins and losses.
//!
//! # Critical Invariants
//!
//! 1. **No hidden state**: every call takes its parameters and random source
//!    explicitly and keeps nothing between calls
//! 2. **Conservation**: `wins + losses == trial_count` for every run
//! 3. **Host rules**: the host never opens the chosen door, and never opens
//!    the car door unless the contestant already picked it
//! 4. **Fixed draw order**: car, initial choice, one draw per opened door,
//!    then the switch target (switch strategy only)

pub mod analysis;
pub mod error;
pub mod simulate;
pub mod trial;

pub use analysis::expected_win_rate;
pub use error::SimulationError;
pub use simulate::{simulate, simulate_parallel};
pub use trial::play_trial;
