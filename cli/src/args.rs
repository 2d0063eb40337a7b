//! Command-line arguments

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "monty-hall",
    version,
    about = "Simulate a generalized Monty Hall game",
    long_about = "Without a subcommand, starts an interactive session that asks for \
                  the parameters of each round. Use `run` for a single scripted run."
)]
pub struct Cli {
    /// Seed the random generator for a reproducible session or run
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run one simulation from flags or a JSON parameter file and print the result
    Run(RunArgs),
}

#[derive(Debug, Args)]
pub struct RunArgs {
    /// JSON file holding {trial_count, total_doors, open_doors, strategy}
    #[arg(long, conflicts_with_all = ["trials", "doors", "open", "switch"])]
    pub config: Option<PathBuf>,

    /// Number of trials
    #[arg(long, required_unless_present = "config")]
    pub trials: Option<u64>,

    /// Total number of doors (at least 3)
    #[arg(long, required_unless_present = "config")]
    pub doors: Option<usize>,

    /// Doors the host opens (at most doors - 2)
    #[arg(long, required_unless_present = "config")]
    pub open: Option<usize>,

    /// Switch to another closed door instead of staying
    #[arg(long)]
    pub switch: bool,

    /// Split the trials into this many parallel batches
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
    pub batches: u64,

    /// Print the full report as JSON
    #[arg(long)]
    pub json: bool,
}
