//! Per-day observation hooks for full runs.
//!
//! The model never prints. A caller that wants a trace of a run passes a
//! [`DayObserver`] to [`Kingdom::spend_all_money_observed`](crate::Kingdom::spend_all_money_observed).

use serde::Serialize;

/// State of the kingdom at the top of a day, before it is advanced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DaySnapshot {
    /// Day index, starting at 0.
    pub day: u64,
    /// Coffer balance.
    pub coffer: i64,
    /// Approval fraction.
    pub approval: f64,
    /// Revenue earned so far.
    pub revenue: i64,
}

/// What a single call to [`Kingdom::advance_day`](crate::Kingdom::advance_day) did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayOutcome {
    /// Payroll owed for the day.
    pub payroll: i64,
    /// Revenue earned (0 if payroll was not paid).
    pub gains: i64,
    /// Whether the coffer could cover the payroll.
    pub paid: bool,
}

/// Result of running a kingdom until the coffer is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Revenue earned minus starting cash.
    pub profit: i64,
    /// Days advanced before the coffer ran out.
    pub days: u64,
    /// Total revenue earned.
    pub revenue: i64,
}

/// Receives progress from a full run.
pub trait DayObserver {
    /// Called before each day is advanced.
    fn on_day(&mut self, snapshot: &DaySnapshot);

    /// Called once the coffer is empty.
    fn on_exhausted(&mut self, summary: &RunSummary) {
        let _ = summary;
    }
}

impl DayObserver for () {
    fn on_day(&mut self, _snapshot: &DaySnapshot) {}
}

/// Observer that records every snapshot.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DayLog {
    /// Snapshots in day order.
    pub days: Vec<DaySnapshot>,
    /// Final summary, once the run has finished.
    pub summary: Option<RunSummary>,
}

impl DayLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl DayObserver for DayLog {
    fn on_day(&mut self, snapshot: &DaySnapshot) {
        self.days.push(*snapshot);
    }

    fn on_exhausted(&mut self, summary: &RunSummary) {
        self.summary = Some(*summary);
    }
}
