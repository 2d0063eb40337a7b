//! Non-interactive `run` subcommand

use std::fs;
use std::io::Write;

use monty_hall_core::{RngManager, SimulationReport, Strategy, TrialParameters};
use tracing::debug;

use crate::args::RunArgs;
use crate::error::CliError;
use crate::shell::result_line;

impl RunArgs {
    /// Parameters from `--config`, or from the individual flags.
    pub fn parameters(&self) -> Result<TrialParameters, CliError> {
        if let Some(path) = &self.config {
            let text = fs::read_to_string(path).map_err(|source| CliError::ConfigRead {
                path: path.clone(),
                source,
            })?;
            return serde_json::from_str(&text).map_err(|source| CliError::ConfigParse {
                path: path.clone(),
                source,
            });
        }

        let trials = self.trials.ok_or(CliError::MissingOption("trials"))?;
        let doors = self.doors.ok_or(CliError::MissingOption("doors"))?;
        let open = self.open.ok_or(CliError::MissingOption("open"))?;
        Ok(TrialParameters::new(
            trials,
            doors,
            open,
            Strategy::from_switch(self.switch),
        )?)
    }
}

/// Run once and write the outcome to `out`.
pub fn run<W: Write>(args: &RunArgs, seed: Option<u64>, out: &mut W) -> Result<(), CliError> {
    let params = args.parameters()?;
    let seed = seed.unwrap_or_else(|| RngManager::from_entropy().get_state());
    debug!(seed, batches = args.batches, "starting batch run");

    let report = SimulationReport::run(params, seed, args.batches as usize)?;

    if args.json {
        writeln!(out, "{}", report.to_json_pretty()?)?;
    } else {
        writeln!(out, "{}", result_line(&report.result()))?;
        writeln!(
            out,
            "Win rate: {:.4} (expected {:.4}), seed {}",
            report.win_rate, report.expected_win_rate, report.seed
        )?;
    }
    Ok(())
}
