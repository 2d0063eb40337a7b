//! Run reports
//!
//! A report records what was run and what came out, so a seeded run can be
//! shared as JSON and replayed later.
//!
//! # Critical Invariants
//!
//! - **Determinism**: same parameters + seed + batch count produce identical counts
//! - **Identity**: `config_hash` is a SHA256 over the canonical JSON of
//!   (parameters, seed, batches); equal inputs always hash equal

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::info;
use uuid::Uuid;

use crate::engine::{expected_win_rate, simulate, simulate_parallel, SimulationError};
use crate::models::{SimulationResult, TrialParameters};
use crate::rng::RngManager;

/// Outcome of one seeded run, with enough context to replay it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Unique id for this run (differs between replays)
    pub run_id: Uuid,

    pub parameters: TrialParameters,

    /// Seed of the root RNG
    pub seed: u64,

    /// Number of parallel batches (1 = sequential)
    pub batches: usize,

    pub wins: u64,
    pub losses: u64,

    /// Observed fraction of wins
    pub win_rate: f64,

    /// Closed-form probability for these parameters
    pub expected_win_rate: f64,

    /// SHA256 of (parameters, seed, batches)
    pub config_hash: String,
}

/// The inputs that determine a run's counts.
#[derive(Serialize)]
struct RunIdentity<'a> {
    parameters: &'a TrialParameters,
    seed: u64,
    batches: usize,
}

impl SimulationReport {
    /// Run a seeded simulation and describe it
    ///
    /// With `batches == 1` the trials run sequentially on
    /// `RngManager::new(seed)`; otherwise they go through
    /// [`simulate_parallel`].
    ///
    /// # Errors
    /// Returns [`SimulationError::InvalidBatchCount`] if `batches == 0`.
    ///
    /// # Example
    /// ```
    /// use monty_hall_core::{SimulationReport, Strategy, TrialParameters};
    ///
    /// let params = TrialParameters::new(500, 3, 1, Strategy::Stay).unwrap();
    /// let report = SimulationReport::run(params, 42, 1).unwrap();
    ///
    /// assert_eq!(report.wins + report.losses, 500);
    /// assert!(report.replay_matches().unwrap());
    /// ```
    pub fn run(
        parameters: TrialParameters,
        seed: u64,
        batches: usize,
    ) -> Result<Self, SimulationError> {
        let result = execute(&parameters, seed, batches)?;
        let config_hash = compute_config_hash(&RunIdentity {
            parameters: &parameters,
            seed,
            batches,
        })?;

        let report = Self {
            run_id: Uuid::new_v4(),
            parameters,
            seed,
            batches,
            wins: result.wins,
            losses: result.losses,
            win_rate: result.win_rate(),
            expected_win_rate: expected_win_rate(&parameters),
            config_hash,
        };

        info!(
            run_id = %report.run_id,
            wins = report.wins,
            losses = report.losses,
            win_rate = report.win_rate,
            "simulation run finished"
        );
        Ok(report)
    }

    pub fn result(&self) -> SimulationResult {
        SimulationResult::new(self.wins, self.losses)
    }

    /// Re-run with the recorded inputs and compare
    ///
    /// Returns `Ok(false)` if the counts differ or the recorded hash does
    /// not match the recorded inputs.
    pub fn replay_matches(&self) -> Result<bool, SimulationError> {
        let expected_hash = compute_config_hash(&RunIdentity {
            parameters: &self.parameters,
            seed: self.seed,
            batches: self.batches,
        })?;
        if expected_hash != self.config_hash {
            return Ok(false);
        }

        let replayed = execute(&self.parameters, self.seed, self.batches)?;
        Ok(replayed == self.result())
    }

    pub fn to_json_pretty(&self) -> Result<String, SimulationError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| SimulationError::SerializationError(format!("Report serialization failed: {}", e)))
    }
}

fn execute(
    parameters: &TrialParameters,
    seed: u64,
    batches: usize,
) -> Result<SimulationResult, SimulationError> {
    match batches {
        0 => Err(SimulationError::InvalidBatchCount),
        1 => Ok(simulate(parameters, &mut RngManager::new(seed))),
        _ => simulate_parallel(parameters, seed, batches),
    }
}

/// Compute deterministic SHA256 hash of a serializable value
///
/// Uses canonical JSON serialization with sorted keys so that field order
/// never changes the hash.
pub fn compute_config_hash<T: Serialize>(config: &T) -> Result<String, SimulationError> {
    use serde_json::Value;
    use std::collections::BTreeMap;

    let value = serde_json::to_value(config).map_err(|e| {
        SimulationError::SerializationError(format!("Config serialization failed: {}", e))
    })?;

    // Recursively sort all object keys for canonical representation
    fn canonicalize(value: Value) -> Value {
        match value {
            Value::Object(map) => {
                let sorted: BTreeMap<String, Value> =
                    map.into_iter().map(|(k, v)| (k, canonicalize(v))).collect();
                Value::Object(sorted.into_iter().collect())
            }
            Value::Array(arr) => Value::Array(arr.into_iter().map(canonicalize).collect()),
            other => other,
        }
    }

    let json = serde_json::to_string(&canonicalize(value)).map_err(|e| {
        SimulationError::SerializationError(format!("Config serialization failed: {}", e))
    })?;

    let mut hasher = Sha256::new();
    hasher.update(json.as_bytes());
    Ok(format!("{:x}", hasher.finalize()))
}
