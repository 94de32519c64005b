//! Experiment driver for starting-cash sweeps.
//!
//! Each starting value gets its own kingdom, run until the coffer is empty.
//! Kingdoms never interact, so the sweep runs them in parallel with rayon and
//! collects the results by index, keeping the input order.

// Sweep indices and axis ticks are small enough for exact f64 conversion
#![allow(clippy::cast_precision_loss)]

use crate::error::KingdomResult;
use crate::kingdom::{DEFAULT_BASE_REVENUE, DEFAULT_MAX_DAYS, Kingdom, KingdomConfig, QuestStatus};
use rayon::prelude::*;
use serde::Serialize;

/// Number of starting values in the default sweep.
pub const DEFAULT_SWEEP_COUNT: usize = 1001;

/// Gap between starting values in the default sweep.
pub const DEFAULT_SWEEP_STEP: f64 = 10_000.0;

/// Inputs for a sweep over starting cash.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepConfig {
    /// Starting cash for each kingdom, in report order.
    pub starting_cash: Vec<f64>,
    /// Base revenue shared by every kingdom.
    pub base_revenue: f64,
    /// Quest status shared by every kingdom.
    pub quest: QuestStatus,
    /// Starting approval shared by every kingdom.
    pub starting_approval: f64,
    /// Day bound for each run.
    pub max_days: u64,
}

impl SweepConfig {
    /// Sweep `count` values starting at `start`, `step` apart.
    #[must_use]
    pub fn linear(start: f64, step: f64, count: usize) -> Self {
        Self {
            starting_cash: cash_steps(start, step, count),
            ..Self::default()
        }
    }

    /// Set the base revenue.
    #[must_use]
    pub fn with_base_revenue(mut self, base_revenue: f64) -> Self {
        self.base_revenue = base_revenue;
        self
    }

    /// Set the quest status.
    #[must_use]
    pub fn with_quest(mut self, quest: impl Into<QuestStatus>) -> Self {
        self.quest = quest.into();
        self
    }

    /// Set the starting approval.
    #[must_use]
    pub fn with_starting_approval(mut self, approval: f64) -> Self {
        self.starting_approval = approval;
        self
    }

    /// Set the day bound for each run.
    #[must_use]
    pub fn with_max_days(mut self, max_days: u64) -> Self {
        self.max_days = max_days;
        self
    }

    /// Kingdom configuration for one starting value.
    #[must_use]
    pub fn kingdom_config(&self, starting_cash: f64) -> KingdomConfig {
        KingdomConfig::new(starting_cash, self.base_revenue)
            .with_quest(self.quest)
            .with_starting_approval(self.starting_approval)
            .with_max_days(self.max_days)
    }
}

impl Default for SweepConfig {
    /// 0 to 10,000,000 in steps of 10,000 at 125,000 base revenue.
    fn default() -> Self {
        Self {
            starting_cash: cash_steps(0.0, DEFAULT_SWEEP_STEP, DEFAULT_SWEEP_COUNT),
            base_revenue: DEFAULT_BASE_REVENUE,
            quest: QuestStatus::Completed,
            starting_approval: 1.0,
            max_days: DEFAULT_MAX_DAYS,
        }
    }
}

fn cash_steps(start: f64, step: f64, count: usize) -> Vec<f64> {
    (0..count).map(|i| start + step * i as f64).collect()
}

/// Outcome for one starting value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SweepPoint {
    /// Starting cash after rounding.
    pub starting_cash: i64,
    /// Revenue earned minus starting cash.
    pub profit: i64,
    /// Days until the coffer ran out.
    pub days: u64,
}

/// Results of a sweep, in the order of the configured starting values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepReport {
    /// Base revenue after rounding.
    pub base_revenue: i64,
    /// Quest status used for every run.
    pub quest: QuestStatus,
    /// Starting approval used for every run.
    pub starting_approval: f64,
    /// One point per starting value.
    pub points: Vec<SweepPoint>,
}

impl SweepReport {
    /// Most profitable point. Ties go to the earliest point.
    #[must_use]
    pub fn best(&self) -> Option<&SweepPoint> {
        self.points
            .iter()
            .reduce(|best, point| if point.profit > best.profit { point } else { best })
    }

    /// Smallest and largest profit.
    #[must_use]
    pub fn profit_range(&self) -> Option<(i64, i64)> {
        min_max(self.points.iter().map(|p| p.profit))
    }

    /// Smallest and largest starting cash.
    #[must_use]
    pub fn cash_range(&self) -> Option<(i64, i64)> {
        min_max(self.points.iter().map(|p| p.starting_cash))
    }

    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the sweep had no starting values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

fn min_max(values: impl Iterator<Item = i64>) -> Option<(i64, i64)> {
    values.fold(None, |range, v| match range {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

/// Run every kingdom in the sweep.
///
/// # Errors
///
/// Returns an error if the shared configuration is invalid, if any starting
/// value is rejected, or if any run hits the day bound.
pub fn run_sweep(config: &SweepConfig) -> KingdomResult<SweepReport> {
    run_sweep_with_progress(config, |_| {})
}

/// Run every kingdom in the sweep, calling `on_point` as each one finishes.
///
/// `on_point` is called from rayon worker threads in completion order, which
/// is not the report order.
///
/// # Errors
///
/// Returns an error if the shared configuration is invalid, if any starting
/// value is rejected, or if any run hits the day bound.
pub fn run_sweep_with_progress<F>(config: &SweepConfig, on_point: F) -> KingdomResult<SweepReport>
where
    F: Fn(&SweepPoint) + Sync,
{
    // Validates revenue and approval even when there are no starting values
    let template = Kingdom::new(config.kingdom_config(0.0))?;

    let points = config
        .starting_cash
        .par_iter()
        .map(|&cash| {
            let mut kingdom = Kingdom::new(config.kingdom_config(cash))?;
            let summary = kingdom.spend_all_money()?;
            let point = SweepPoint {
                starting_cash: kingdom.starting_cash(),
                profit: summary.profit,
                days: summary.days,
            };
            on_point(&point);
            Ok(point)
        })
        .collect::<KingdomResult<Vec<_>>>()?;

    Ok(SweepReport {
        base_revenue: template.base_revenue(),
        quest: template.quest(),
        starting_approval: template.approval(),
        points,
    })
}

/// `count` evenly spaced values from `min` to `max`, both ends included.
#[must_use]
pub fn linspace(min: f64, max: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![min],
        _ => {
            let step = (max - min) / (count - 1) as f64;
            let mut values: Vec<f64> = (0..count).map(|i| min + step * i as f64).collect();
            if let Some(last) = values.last_mut() {
                *last = max;
            }
            values
        }
    }
}
