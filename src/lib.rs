// Allow unwrap and float comparison in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::float_cmp))]
#![cfg_attr(test, allow(clippy::unreadable_literal))]
//! Miscellania: a deterministic treasury model for an in-game kingdom.
//!
//! A kingdom pays a daily payroll out of its coffer and earns revenue in
//! proportion to the payroll paid and its approval rating, which decays every
//! day. Running a kingdom until the coffer is empty yields its profit and the
//! number of days it lasted.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │     CLI (simulate / sweep / chart)  │
//! ├─────────────────────────────────────┤
//! │   Experiment driver (rayon sweep)   │
//! ├─────────────────────────────────────┤
//! │        Kingdom state model          │
//! └─────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use miscellania::{Kingdom, KingdomConfig};
//!
//! let mut kingdom = Kingdom::new(KingdomConfig::new(1_000_000.0, 125_000.0))?;
//! let summary = kingdom.spend_all_money()?;
//! assert_eq!((summary.profit, summary.days), (507_558, 116));
//! # Ok::<(), miscellania::KingdomError>(())
//! ```

pub mod error;
pub mod experiment;
pub mod kingdom;

pub use error::{KingdomError, KingdomResult};

// Re-export key types at crate root for convenience
pub use experiment::{SweepConfig, SweepPoint, SweepReport, run_sweep, run_sweep_with_progress};
pub use kingdom::{
    DayLog, DayObserver, DayOutcome, DaySnapshot, Kingdom, KingdomConfig, QuestStatus, RunSummary,
};
