//! Interactive round loop
//!
//! Each round asks for the trial count, door count and opened-door count,
//! offers stay/switch, runs the engine and prints the counts. The user then
//! chooses whether to play again.

use monty_hall_core::{simulate, RngManager, SimulationResult, Strategy, TrialParameters};
use tracing::{debug, info};

use crate::console::Console;
use crate::error::CliError;
use crate::input::{parse_open_doors, parse_total_doors, parse_trial_count, prompt_until_valid};

const TRIALS_PROMPT: &str = "Enter the number of trials: ";
const DOORS_PROMPT: &str = "Enter the number of doors (at least 3): ";
const SWITCH_PROMPT: &str = "Switch doors after the host opens some?";
const AGAIN_PROMPT: &str = "Play again?";
const YES_NO: [&str; 2] = ["Yes", "No"];
const YES: usize = 0;
const SEPARATOR_WIDTH: usize = 50;

fn open_prompt(total_doors: usize) -> String {
    format!(
        "Enter the number of doors the host opens (at most {}): ",
        total_doors - 2
    )
}

pub fn result_line(result: &SimulationResult) -> String {
    format!(
        "Result: car won {} times, lost {} times",
        result.wins, result.losses
    )
}

pub struct Shell<C: Console> {
    console: C,
    rng: RngManager,
}

impl<C: Console> Shell<C> {
    /// All rounds draw from one generator, so a seeded session is
    /// reproducible end to end.
    pub fn new(console: C, rng: RngManager) -> Self {
        debug!(seed = rng.get_state(), "shell session starting");
        Self { console, rng }
    }

    #[cfg(test)]
    pub fn into_console(self) -> C {
        self.console
    }

    /// Run rounds until the user declines another or input ends.
    pub fn run(&mut self) -> Result<(), CliError> {
        loop {
            let Some(params) = self.read_parameters()? else {
                info!("input closed, leaving shell");
                return Ok(());
            };

            let result = simulate(&params, &mut self.rng);
            info!(wins = result.wins, losses = result.losses, "round finished");
            self.console.write_line(&result_line(&result))?;

            match self.console.choose(AGAIN_PROMPT, &YES_NO)? {
                Some(YES) => self.console.write_line(&"-".repeat(SEPARATOR_WIDTH))?,
                Some(_) => break,
                None => return Ok(()),
            }
        }

        self.console.write_line("Exiting. Press any key.")?;
        self.console.wait_for_key()?;
        Ok(())
    }

    /// `Ok(None)` when input ends or the strategy choice is cancelled.
    fn read_parameters(&mut self) -> Result<Option<TrialParameters>, CliError> {
        let console = &mut self.console;

        let Some(trials) = prompt_until_valid(console, TRIALS_PROMPT, parse_trial_count)? else {
            return Ok(None);
        };
        let Some(doors) = prompt_until_valid(console, DOORS_PROMPT, parse_total_doors)? else {
            return Ok(None);
        };
        let Some(open) = prompt_until_valid(console, &open_prompt(doors), |line| {
            parse_open_doors(line, doors)
        })?
        else {
            return Ok(None);
        };
        let Some(choice) = console.choose(SWITCH_PROMPT, &YES_NO)? else {
            return Ok(None);
        };

        let strategy = Strategy::from_switch(choice == YES);
        Ok(Some(TrialParameters::new(trials, doors, open, strategy)?))
    }
}
