use std::io;
use std::path::PathBuf;

use monty_hall_core::SimulationError;
use thiserror::Error;

/// Why a line typed at a prompt was not accepted
///
/// The display text is shown to the user before the prompt repeats.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Please enter a valid non-negative integer.")]
    NotAnInteger,

    #[error("The number of doors must be at least {min}.")]
    TooFewDoors { min: usize },

    #[error("The number of doors must be at most {max}.")]
    TooManyDoors { max: usize },

    #[error("The host must leave at least 2 doors closed: open at most {max}.")]
    TooManyOpenDoors { max: usize },
}

/// Errors that end the program
#[derive(Debug, Error)]
pub enum CliError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Simulation(#[from] SimulationError),

    #[error("failed to read config {path}: {source}")]
    ConfigRead { path: PathBuf, source: io::Error },

    #[error("invalid config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("missing --{0} (or pass --config)")]
    MissingOption(&'static str),
}
