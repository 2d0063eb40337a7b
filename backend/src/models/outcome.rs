//! Trial outcomes and aggregate results

use serde::{Deserialize, Serialize};

/// Everything that happened in one game
///
/// Door indices are zero-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialOutcome {
    /// Number of doors in the game
    pub total_doors: usize,

    /// Door hiding the car
    pub car: usize,

    /// Contestant's first pick
    pub initial_choice: usize,

    /// Doors opened by the host, ascending
    pub opened: Vec<usize>,

    /// Door the contestant ends on
    pub final_choice: usize,
}

impl TrialOutcome {
    pub fn won(&self) -> bool {
        self.final_choice == self.car
    }

    pub fn switched(&self) -> bool {
        self.final_choice != self.initial_choice
    }

    /// Doors still closed after the host opened, ascending.
    ///
    /// Always contains `initial_choice`.
    pub fn remaining(&self) -> Vec<usize> {
        (0..self.total_doors)
            .filter(|door| self.opened.binary_search(door).is_err())
            .collect()
    }
}

/// Win/loss counts for a run of trials
///
/// CRITICAL: `wins + losses` equals the number of trials recorded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub wins: u64,
    pub losses: u64,
}

impl SimulationResult {
    pub fn new(wins: u64, losses: u64) -> Self {
        Self { wins, losses }
    }

    /// Count one trial.
    pub fn record(&mut self, won: bool) {
        if won {
            self.wins += 1;
        } else {
            self.losses += 1;
        }
    }

    pub fn trials(&self) -> u64 {
        self.wins + self.losses
    }

    /// Fraction of trials won; `0.0` when nothing ran.
    pub fn win_rate(&self) -> f64 {
        match self.trials() {
            0 => 0.0,
            n => self.wins as f64 / n as f64,
        }
    }

    /// Combine counts from independent batches.
    pub fn merge(self, other: Self) -> Self {
        Self {
            wins: self.wins + other.wins,
            losses: self.losses + other.losses,
        }
    }

    /// `(wins, losses)` as a plain pair.
    pub fn into_pair(self) -> (u64, u64) {
        (self.wins, self.losses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remaining_excludes_opened() {
        let outcome = TrialOutcome {
            total_doors: 5,
            car: 3,
            initial_choice: 0,
            opened: vec![1, 4],
            final_choice: 3,
        };
        assert_eq!(outcome.remaining(), vec![0, 2, 3]);
        assert!(outcome.won());
        assert!(outcome.switched());
    }

    #[test]
    fn test_empty_result_rate_is_zero() {
        assert_eq!(SimulationResult::default().win_rate(), 0.0);
    }

    #[test]
    fn test_merge_sums_counts() {
        let merged = SimulationResult::new(3, 4).merge(SimulationResult::new(1, 2));
        assert_eq!(merged, SimulationResult::new(4, 6));
        assert_eq!(merged.trials(), 10);
    }

    #[test]
    fn test_record() {
        let mut result = SimulationResult::default();
        result.record(true);
        result.record(false);
        result.record(false);
        assert_eq!(result.into_pair(), (1, 2));
    }
}
