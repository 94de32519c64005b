//! Kingdom state model.
//!
//! Implements the daily treasury rules:
//! - Payroll proportional to the coffer, capped by the quest policy
//! - Revenue scaled by approval and by the share of max payroll paid
//! - Approval decay toward a 0.25 floor
//! - Running a kingdom until its coffer is empty

mod config;
pub mod invariants;
mod observer;
pub mod rounding;
mod state;

pub use config::{
    APPROVAL_FLOOR, DEFAULT_BASE_REVENUE, DEFAULT_MAX_DAYS, KingdomConfig, PAYROLL_RATE,
    QuestStatus,
};
pub use invariants::{InvariantViolation, check_invariants};
pub use observer::{DayLog, DayObserver, DayOutcome, DaySnapshot, RunSummary};
pub use state::Kingdom;
