//! Output formatting utilities for CLI.

// Tick values are rounded for display only
#![allow(clippy::cast_possible_truncation)]

use miscellania::{Kingdom, QuestStatus, RunSummary, SweepPoint, SweepReport};
use serde::Serialize;
use std::fmt::Write;

/// Format an integer with comma thousands separators.
pub(super) fn format_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut output = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        output.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            output.push(',');
        }
        output.push(ch);
    }
    output
}

/// Format an axis tick, rounded to a whole amount.
pub(super) fn format_tick(value: f64) -> String {
    format_thousands(value.round_ties_even() as i64)
}

/// Annotation for the most profitable starting value.
pub(super) fn best_label(best: &SweepPoint) -> String {
    format!(
        "{} starting cash will generate {} in profits after {} days",
        format_thousands(best.starting_cash),
        format_thousands(best.profit),
        best.days
    )
}

/// JSON-serializable single run.
#[derive(Debug, Serialize)]
pub(super) struct JsonSimulation<'a> {
    /// Starting cash after rounding.
    pub(super) starting_cash: i64,
    /// Base revenue after rounding.
    pub(super) base_revenue: i64,
    /// Quest status.
    pub(super) quest: QuestStatus,
    /// Coffer when the run began, including injections.
    pub(super) initial_coffer: i64,
    /// Run summary.
    pub(super) summary: RunSummary,
    /// Per-day trace (only with --verbose).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) days: Option<&'a [miscellania::DaySnapshot]>,
}

/// Format a single run as human-readable text.
pub(super) fn format_simulation_text(
    kingdom: &Kingdom,
    initial_coffer: i64,
    summary: &RunSummary,
) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "Kingdom ({})", kingdom.quest().label());
    let _ = writeln!(output, "  Starting cash:  {}", format_thousands(kingdom.starting_cash()));
    if initial_coffer != kingdom.starting_cash() {
        let _ = writeln!(output, "  Initial coffer: {}", format_thousands(initial_coffer));
    }
    let _ = writeln!(output, "  Base revenue:   {}", format_thousands(kingdom.base_revenue()));
    let _ = writeln!(output, "  Days:           {}", summary.days);
    let _ = writeln!(output, "  Revenue:        {}", format_thousands(summary.revenue));
    let _ = writeln!(output, "  Profit:         {}", format_thousands(summary.profit));

    output
}

/// JSON-serializable sweep result.
#[derive(Debug, Serialize)]
pub(super) struct JsonSweepResult<'a> {
    /// Base revenue after rounding.
    base_revenue: i64,
    /// Quest status.
    quest: QuestStatus,
    /// Starting approval.
    starting_approval: f64,
    /// Most profitable point (null if the sweep was empty).
    best: Option<&'a SweepPoint>,
    /// Every point in sweep order.
    points: &'a [SweepPoint],
}

impl<'a> JsonSweepResult<'a> {
    /// Create from a sweep report.
    pub(super) fn from_report(report: &'a SweepReport) -> Self {
        Self {
            base_revenue: report.base_revenue,
            quest: report.quest,
            starting_approval: report.starting_approval,
            best: report.best(),
            points: &report.points,
        }
    }
}

/// Format a sweep as human-readable text.
pub(super) fn format_sweep_text(report: &SweepReport) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "Sweep Results ({} runs)", report.len());
    output.push_str("========================================\n\n");
    let _ = writeln!(
        output,
        "Base revenue: {} ({}, approval {:.2}%)",
        format_thousands(report.base_revenue),
        report.quest.label(),
        report.starting_approval * 100.0
    );

    if let Some(best) = report.best() {
        let _ = writeln!(output, "Best: {}", best_label(best));
    }
    if let Some((lo, hi)) = report.profit_range() {
        let _ = writeln!(
            output,
            "Profit range: {} to {}",
            format_thousands(lo),
            format_thousands(hi)
        );
    }

    output.push('\n');
    let _ = writeln!(output, "{:>15}  {:>15}  {:>6}", "Starting cash", "Profit", "Days");
    for point in &report.points {
        let _ = writeln!(
            output,
            "{:>15}  {:>15}  {:>6}",
            format_thousands(point.starting_cash),
            format_thousands(point.profit),
            point.days
        );
    }

    output
}

/// Format a sweep as CSV.
pub(super) fn format_sweep_csv(report: &SweepReport) -> String {
    let mut output = String::new();

    // Header
    output.push_str("starting_cash,profit,days\n");

    // Data rows
    for point in &report.points {
        let _ = writeln!(output, "{},{},{}", point.starting_cash, point.profit, point.days);
    }

    output
}
