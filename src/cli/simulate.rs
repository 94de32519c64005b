//! Simulate command implementation.

use super::output::{JsonSimulation, format_simulation_text, format_thousands};
use super::{CliError, SimulateFormat};
use miscellania::{DayLog, DayObserver, DaySnapshot, Kingdom, KingdomConfig, RunSummary};

/// Prints the per-day trace as the run progresses.
struct PrintObserver;

impl DayObserver for PrintObserver {
    fn on_day(&mut self, snapshot: &DaySnapshot) {
        println!(
            "Day: {}, Coffers: {}, Approval: {:.2}%",
            snapshot.day,
            format_thousands(snapshot.coffer),
            snapshot.approval * 100.0
        );
    }

    fn on_exhausted(&mut self, summary: &RunSummary) {
        println!(
            "Ran out of money on day {}, after earning {}",
            summary.days,
            format_thousands(summary.revenue)
        );
        println!("Total profit: {}", format_thousands(summary.profit));
    }
}

/// Execute the simulate command.
///
/// # Errors
///
/// Returns an error if the kingdom configuration is invalid or the run does
/// not finish within `max_days`.
#[allow(clippy::too_many_arguments, clippy::needless_pass_by_value)]
pub(crate) fn execute(
    cash: f64,
    revenue: f64,
    no_quest: bool,
    approval: f64,
    inject: Vec<f64>,
    max_days: u64,
    verbose: bool,
    format: SimulateFormat,
) -> Result<(), CliError> {
    let config = KingdomConfig::new(cash, revenue)
        .with_quest(!no_quest)
        .with_starting_approval(approval)
        .with_max_days(max_days);
    let mut kingdom = Kingdom::new(config)?;

    for amount in &inject {
        kingdom.inject_cash(*amount);
    }
    let initial_coffer = kingdom.coffer();

    match format {
        SimulateFormat::Text => {
            let summary = if verbose {
                kingdom.spend_all_money_observed(&mut PrintObserver)?
            } else {
                kingdom.spend_all_money()?
            };
            if verbose {
                println!();
            }
            print!("{}", format_simulation_text(&kingdom, initial_coffer, &summary));
        }
        SimulateFormat::Json => {
            let mut log = DayLog::new();
            let summary = kingdom.spend_all_money_observed(&mut log)?;
            let json_result = JsonSimulation {
                starting_cash: kingdom.starting_cash(),
                base_revenue: kingdom.base_revenue(),
                quest: kingdom.quest(),
                initial_coffer,
                summary,
                days: verbose.then_some(log.days.as_slice()),
            };
            println!("{}", serde_json::to_string_pretty(&json_result)?);
        }
    }

    Ok(())
}
