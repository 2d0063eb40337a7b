//! Trial parameters
//!
//! The four values that configure one simulation call:
//! - Number of trials to run
//! - Total number of doors ([`MIN_DOORS`] to [`MAX_DOORS`])
//! - Number of doors the host opens (at most `total_doors - 2`)
//! - Contestant strategy (stay or switch)
//!
//! CRITICAL: A `TrialParameters` value is always valid. Construction and
//! deserialization both go through [`TrialParameters::new`], so the engine
//! never has to re-check bounds.

use serde::{Deserialize, Serialize};

use crate::engine::SimulationError;

/// Fewest doors a game can have.
pub const MIN_DOORS: usize = 3;

/// Most doors a game can have.
///
/// Each trial holds one index per door in a scratch buffer; this keeps that
/// buffer around 8 MB.
pub const MAX_DOORS: usize = 1_000_000;

/// What the contestant does once the host has opened doors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Keep the initially chosen door
    Stay,

    /// Move to a different unopened door, picked uniformly
    Switch,
}

impl Strategy {
    /// Map a yes/no switch answer onto a strategy.
    pub fn from_switch(switch: bool) -> Self {
        if switch {
            Strategy::Switch
        } else {
            Strategy::Stay
        }
    }

    pub fn is_switch(self) -> bool {
        matches!(self, Strategy::Switch)
    }
}

/// Validated configuration for one simulation call
///
/// # Example
/// ```
/// use monty_hall_core::{Strategy, TrialParameters};
///
/// let params = TrialParameters::new(10_000, 3, 1, Strategy::Switch).unwrap();
/// assert_eq!(params.total_doors(), 3);
///
/// // The host must leave at least two doors closed
/// assert!(TrialParameters::new(10_000, 3, 2, Strategy::Switch).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "UncheckedParameters")]
pub struct TrialParameters {
    /// Number of independent trials
    trial_count: u64,

    /// Number of doors in each game
    total_doors: usize,

    /// Number of doors the host opens after the initial choice
    open_doors: usize,

    /// Stay or switch
    strategy: Strategy,
}

impl TrialParameters {
    /// Create validated parameters
    ///
    /// # Errors
    /// Returns [`SimulationError::InvalidParameters`] if
    /// `total_doors` is outside `MIN_DOORS..=MAX_DOORS` or
    /// `open_doors > total_doors - 2`.
    pub fn new(
        trial_count: u64,
        total_doors: usize,
        open_doors: usize,
        strategy: Strategy,
    ) -> Result<Self, SimulationError> {
        if total_doors < MIN_DOORS {
            return Err(SimulationError::InvalidParameters(format!(
                "total_doors must be at least {}, got {}",
                MIN_DOORS, total_doors
            )));
        }
        if total_doors > MAX_DOORS {
            return Err(SimulationError::InvalidParameters(format!(
                "total_doors must be at most {}, got {}",
                MAX_DOORS, total_doors
            )));
        }
        if open_doors > total_doors - 2 {
            return Err(SimulationError::InvalidParameters(format!(
                "open_doors must be at most {} for {} doors, got {}",
                total_doors - 2,
                total_doors,
                open_doors
            )));
        }

        Ok(Self {
            trial_count,
            total_doors,
            open_doors,
            strategy,
        })
    }

    pub fn trial_count(&self) -> u64 {
        self.trial_count
    }

    pub fn total_doors(&self) -> usize {
        self.total_doors
    }

    pub fn open_doors(&self) -> usize {
        self.open_doors
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Same game, different number of trials.
    ///
    /// Used to split a run into batches.
    pub fn with_trial_count(self, trial_count: u64) -> Self {
        Self {
            trial_count,
            ..self
        }
    }

    /// Doors left closed after the host opens, including the chosen one.
    pub fn closed_doors(&self) -> usize {
        self.total_doors - self.open_doors
    }
}

/// Wire form read before validation.
#[derive(Deserialize)]
struct UncheckedParameters {
    trial_count: u64,
    total_doors: usize,
    open_doors: usize,
    strategy: Strategy,
}

impl TryFrom<UncheckedParameters> for TrialParameters {
    type Error = SimulationError;

    fn try_from(raw: UncheckedParameters) -> Result<Self, Self::Error> {
        TrialParameters::new(raw.trial_count, raw.total_doors, raw.open_doors, raw.strategy)
    }
}
