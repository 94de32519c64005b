//! Miscellania CLI - simulate kingdoms and sweep starting cash.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::float_cmp))]

mod cli;

use clap::{Parser, Subcommand};
use miscellania::kingdom::{DEFAULT_BASE_REVENUE, DEFAULT_MAX_DAYS};
use std::process::ExitCode;

/// Miscellania - a deterministic kingdom treasury model
#[derive(Parser, Debug)]
#[command(name = "miscellania")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a single kingdom until its coffer is empty
    Simulate {
        /// Money in the coffer at the start
        #[arg(short, long, allow_negative_numbers = true)]
        cash: f64,

        /// Revenue for one day at full approval and full payroll
        #[arg(short, long, default_value_t = DEFAULT_BASE_REVENUE)]
        revenue: f64,

        /// Model a kingdom without the Royal Trouble quest
        #[arg(long)]
        no_quest: bool,

        /// Starting approval (0.0-1.0)
        #[arg(short, long, default_value_t = 1.0)]
        approval: f64,

        /// Extra money added before the run (repeatable, may be negative)
        #[arg(long, allow_negative_numbers = true)]
        inject: Vec<f64>,

        /// Give up after this many days
        #[arg(long, default_value_t = DEFAULT_MAX_DAYS)]
        max_days: u64,

        /// Print every day of the run
        #[arg(short, long)]
        verbose: bool,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::SimulateFormat,
    },

    /// Run kingdoms over a range of starting cash and report profits
    Sweep {
        #[command(flatten)]
        sweep: cli::SweepArgs,

        /// Output format: text, json, or csv
        #[arg(short, long, default_value = "text")]
        format: cli::SweepFormat,

        /// Show progress bar
        #[arg(short, long)]
        progress: bool,
    },

    /// Interactive chart of profit against starting cash
    Chart {
        #[command(flatten)]
        sweep: cli::SweepArgs,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    let result = match args.command {
        Commands::Simulate {
            cash,
            revenue,
            no_quest,
            approval,
            inject,
            max_days,
            verbose,
            format,
        } => cli::simulate::execute(cash, revenue, no_quest, approval, inject, max_days, verbose, format),

        Commands::Sweep {
            sweep,
            format,
            progress,
        } => cli::sweep::execute(sweep, format, progress),

        Commands::Chart { sweep } => cli::chart::execute(sweep),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
