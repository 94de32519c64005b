//! CLI command implementations for Miscellania.

pub(crate) mod chart;
pub(crate) mod simulate;
pub(crate) mod sweep;

mod output;

use clap::{Args, ValueEnum};
use miscellania::kingdom::{DEFAULT_BASE_REVENUE, DEFAULT_MAX_DAYS};
use miscellania::experiment::{DEFAULT_SWEEP_COUNT, DEFAULT_SWEEP_STEP};
use miscellania::{KingdomError, SweepConfig};
use std::error::Error;
use std::fmt;

/// Output format for the `simulate` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum SimulateFormat {
    /// Human-readable text output.
    Text,
    /// Machine-readable JSON output.
    Json,
}

/// Output format for the `sweep` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum SweepFormat {
    /// Human-readable text output.
    Text,
    /// Machine-readable JSON output.
    Json,
    /// CSV format.
    Csv,
}

/// Sweep options shared by `sweep` and `chart`.
#[derive(Args, Debug, Clone)]
pub(crate) struct SweepArgs {
    /// First starting cash value
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub(crate) start: f64,

    /// Gap between starting cash values
    #[arg(long, default_value_t = DEFAULT_SWEEP_STEP)]
    pub(crate) step: f64,

    /// Number of starting cash values
    #[arg(short = 'n', long, default_value_t = DEFAULT_SWEEP_COUNT)]
    pub(crate) count: usize,

    /// Revenue for one day at full approval and full payroll
    #[arg(short, long, default_value_t = DEFAULT_BASE_REVENUE)]
    pub(crate) revenue: f64,

    /// Model a kingdom without the Royal Trouble quest
    #[arg(long)]
    pub(crate) no_quest: bool,

    /// Starting approval (0.0-1.0)
    #[arg(short, long, default_value_t = 1.0)]
    pub(crate) approval: f64,

    /// Give up on a run after this many days
    #[arg(long, default_value_t = DEFAULT_MAX_DAYS)]
    pub(crate) max_days: u64,

    /// Parallel threads (default: CPU count)
    #[arg(short = 'j', long)]
    pub(crate) threads: Option<usize>,
}

impl SweepArgs {
    /// Build the library sweep configuration.
    pub(crate) fn to_config(&self) -> SweepConfig {
        SweepConfig::linear(self.start, self.step, self.count)
            .with_base_revenue(self.revenue)
            .with_quest(!self.no_quest)
            .with_starting_approval(self.approval)
            .with_max_days(self.max_days)
    }
}

/// Size the global rayon pool.
pub(crate) fn configure_threads(threads: Option<usize>) {
    if let Some(num_threads) = threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build_global()
            .ok(); // Ignore error if already initialized
    }
}

/// CLI error type.
#[derive(Debug)]
pub(crate) struct CliError {
    message: String,
}

impl CliError {
    /// Create a new CLI error.
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for CliError {}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        Self::new(e.to_string())
    }
}

impl From<KingdomError> for CliError {
    fn from(e: KingdomError) -> Self {
        Self::new(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::new(format!("JSON serialization failed: {e}"))
    }
}
