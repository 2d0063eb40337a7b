//! Domain models for the Monty Hall simulator

pub mod outcome;
pub mod parameters;

// Re-exports
pub use outcome::{SimulationResult, TrialOutcome};
pub use parameters::{Strategy, TrialParameters, MAX_DOORS, MIN_DOORS};
