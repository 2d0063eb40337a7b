//! Monty Hall simulator command-line front end.

mod args;
mod batch;
mod console;
mod error;
mod input;
mod logging;
mod select;
mod shell;

use std::io;
use std::process::ExitCode;

use clap::Parser;
use monty_hall_core::RngManager;

use crate::args::{Cli, Command};
use crate::console::TerminalConsole;
use crate::error::CliError;
use crate::shell::Shell;

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Some(Command::Run(args)) => batch::run(&args, cli.seed, &mut io::stdout().lock()),
        None => {
            let rng = cli.seed.map_or_else(RngManager::from_entropy, RngManager::new);
            Shell::new(TerminalConsole::new(), rng).run()
        }
    }
}

fn main() -> ExitCode {
    logging::init_tracing();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "monty-hall failed");
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
