//! Construction inputs and the quest-dependent payroll policy.

use serde::{Deserialize, Serialize};

/// Base revenue assumed by the default sweep.
pub const DEFAULT_BASE_REVENUE: f64 = 125_000.0;

/// Upper bound on days for a single run before it is treated as stuck.
pub const DEFAULT_MAX_DAYS: u64 = 1_000_000;

/// Approval can never decay below this floor.
pub const APPROVAL_FLOOR: f64 = 0.25;

/// Share of the coffer paid out each day, before the payroll cap.
pub const PAYROLL_RATE: f64 = 0.10;

/// Whether the Royal Trouble quest has been completed.
///
/// Completing the quest slows approval decay and raises the payroll cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestStatus {
    /// Quest completed: 1% decay per day, 75,000 payroll cap.
    #[default]
    Completed,
    /// Quest not completed: 2.5% decay per day, 50,000 payroll cap.
    Incomplete,
}

impl QuestStatus {
    /// Map the boolean quest flag onto a status.
    #[must_use]
    pub fn from_completed(completed: bool) -> Self {
        if completed {
            Self::Completed
        } else {
            Self::Incomplete
        }
    }

    /// Whether the quest is completed.
    #[must_use]
    pub fn is_completed(self) -> bool {
        self == Self::Completed
    }

    /// Approval lost per day.
    #[must_use]
    pub fn decay_rate(self) -> f64 {
        match self {
            Self::Completed => 0.01,
            Self::Incomplete => 0.025,
        }
    }

    /// Daily payroll ceiling.
    #[must_use]
    pub fn max_payroll(self) -> i64 {
        match self {
            Self::Completed => 75_000,
            Self::Incomplete => 50_000,
        }
    }

    /// Short display label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Completed => "quest completed",
            Self::Incomplete => "quest incomplete",
        }
    }
}

impl From<bool> for QuestStatus {
    fn from(completed: bool) -> Self {
        Self::from_completed(completed)
    }
}

/// Inputs for building a [`Kingdom`](crate::Kingdom).
///
/// Cash and revenue are taken as `f64` and rounded half-to-even on
/// construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KingdomConfig {
    /// Money in the coffer at the start.
    pub starting_cash: f64,
    /// Revenue for one day at full approval and full payroll.
    pub base_revenue: f64,
    /// Quest status selecting decay rate and payroll cap.
    pub quest: QuestStatus,
    /// Starting approval, clamped to `[0.0, 1.0]`.
    pub starting_approval: f64,
    /// Day bound for [`Kingdom::spend_all_money`](crate::Kingdom::spend_all_money).
    pub max_days: u64,
}

impl KingdomConfig {
    /// Config with the quest completed and full approval.
    #[must_use]
    pub fn new(starting_cash: f64, base_revenue: f64) -> Self {
        Self {
            starting_cash,
            base_revenue,
            ..Self::default()
        }
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

    /// Set the day bound for a full run.
    #[must_use]
    pub fn with_max_days(mut self, max_days: u64) -> Self {
        self.max_days = max_days;
        self
    }
}

impl Default for KingdomConfig {
    fn default() -> Self {
        Self {
            starting_cash: 0.0,
            base_revenue: DEFAULT_BASE_REVENUE,
            quest: QuestStatus::Completed,
            starting_approval: 1.0,
            max_days: DEFAULT_MAX_DAYS,
        }
    }
}
