//! Kingdom state and the daily transition.
//!
//! # Daily model
//!
//! ```text
//! payroll = ceil(min(coffer × 0.10, max_payroll))
//! gains   = round(base_revenue × approval × payroll / max_payroll)
//! ```
//!
//! Payroll is only paid (and gains only earned) when the coffer covers it.
//! Approval then decays by the quest's decay rate, is clamped to the 0.25
//! floor, and is rounded to two decimals. All rounding is half-to-even.

// Money is i64 and the revenue formula runs in f64, matching the model's
// float arithmetic exactly for balances below 2^53.
#![allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]

use crate::error::{KingdomError, KingdomResult};
use crate::kingdom::invariants::assert_invariants;
use crate::kingdom::rounding::{round_half_even, round_to, round_to_i64};
use crate::kingdom::{
    APPROVAL_FLOOR, DayObserver, DayOutcome, DaySnapshot, KingdomConfig, PAYROLL_RATE,
    QuestStatus, RunSummary,
};

/// A single kingdom: its coffer, approval, and earnings.
#[allow(missing_copy_implementations)]
#[derive(Debug, Clone, PartialEq)]
pub struct Kingdom {
    approval: f64,
    coffer: i64,
    starting_cash: i64,
    base_revenue: i64,
    quest: QuestStatus,
    decay_rate: f64,
    max_payroll: i64,
    revenue: i64,
    max_days: u64,
}

impl Kingdom {
    /// Build a kingdom from its configuration.
    ///
    /// Cash and revenue are rounded half-to-even. Approval is clamped to
    /// `[0.0, 1.0]`.
    ///
    /// # Errors
    ///
    /// Returns [`KingdomError::InvalidConfiguration`] if starting cash or base
    /// revenue is negative, non-finite or out of `i64` range, or if starting
    /// approval is NaN.
    pub fn new(config: KingdomConfig) -> KingdomResult<Self> {
        let starting_cash = whole_amount("starting cash", config.starting_cash)?;
        let base_revenue = whole_amount("base revenue", config.base_revenue)?;
        if config.starting_approval.is_nan() {
            return Err(KingdomError::invalid("starting approval", "must be a number"));
        }

        let quest = config.quest;
        Ok(Self {
            approval: config.starting_approval.clamp(0.0, 1.0),
            coffer: starting_cash,
            starting_cash,
            base_revenue,
            quest,
            decay_rate: quest.decay_rate(),
            max_payroll: quest.max_payroll(),
            revenue: 0,
            max_days: config.max_days,
        })
    }

    /// Current approval fraction.
    #[must_use]
    pub fn approval(&self) -> f64 {
        self.approval
    }

    /// Current coffer balance.
    #[must_use]
    pub fn coffer(&self) -> i64 {
        self.coffer
    }

    /// Coffer balance at construction.
    #[must_use]
    pub fn starting_cash(&self) -> i64 {
        self.starting_cash
    }

    /// Revenue for one day at full approval and full payroll.
    #[must_use]
    pub fn base_revenue(&self) -> i64 {
        self.base_revenue
    }

    /// Quest status fixed at construction.
    #[must_use]
    pub fn quest(&self) -> QuestStatus {
        self.quest
    }

    /// Approval lost per day.
    #[must_use]
    pub fn decay_rate(&self) -> f64 {
        self.decay_rate
    }

    /// Daily payroll ceiling.
    #[must_use]
    pub fn max_payroll(&self) -> i64 {
        self.max_payroll
    }

    /// Total revenue earned so far.
    #[must_use]
    pub fn cumulative_revenue(&self) -> i64 {
        self.revenue
    }

    /// Day bound used by [`Kingdom::spend_all_money`].
    #[must_use]
    pub fn max_days(&self) -> u64 {
        self.max_days
    }

    /// Revenue earned minus starting cash.
    #[must_use]
    pub fn profit(&self) -> i64 {
        self.revenue.saturating_sub(self.starting_cash)
    }

    /// Whether the coffer is empty (or overdrawn).
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.coffer <= 0
    }

    /// Add money to the coffer.
    ///
    /// The amount is rounded half-to-even and may be negative. Non-finite
    /// amounts are ignored; the balance saturates at the `i64` limits.
    pub fn inject_cash(&mut self, amount: f64) {
        if !amount.is_finite() {
            return;
        }
        let cash = round_half_even(amount) as i64;
        self.coffer = self.coffer.saturating_add(cash);
    }

    /// Payroll owed for one day at the current balance.
    #[must_use]
    pub fn payroll(&self) -> i64 {
        let share = self.coffer as f64 * PAYROLL_RATE;
        share.min(self.max_payroll as f64).ceil() as i64
    }

    /// Apply one day of approval decay.
    ///
    /// No-op once approval is at or below the floor.
    pub fn decay_approval(&mut self) {
        if self.approval <= APPROVAL_FLOOR {
            return;
        }
        self.approval = round_to((self.approval - self.decay_rate).max(APPROVAL_FLOOR), 2);
    }

    /// Advance the kingdom by one day.
    ///
    /// Pays payroll and collects gains if the coffer covers the payroll, then
    /// decays approval either way. Calling this on an empty coffer is allowed:
    /// payroll is zero, nothing is earned, and approval still decays.
    pub fn advance_day(&mut self) -> DayOutcome {
        let payroll = self.payroll();
        let paid = payroll <= self.coffer;
        let mut gains = 0;

        if paid {
            gains = self.gains_for(payroll);
            self.coffer -= payroll;
            self.revenue = self.revenue.saturating_add(gains);
        }

        self.decay_approval();
        assert_invariants(self);

        DayOutcome {
            payroll,
            gains,
            paid,
        }
    }

    /// Advance days until the coffer is empty.
    ///
    /// # Errors
    ///
    /// Returns [`KingdomError::NonTerminatingSimulation`] if the coffer still
    /// holds money after [`Kingdom::max_days`] days.
    pub fn spend_all_money(&mut self) -> KingdomResult<RunSummary> {
        self.spend_all_money_observed(&mut ())
    }

    /// Advance days until the coffer is empty, reporting each day.
    ///
    /// The observer sees the state at the top of every day and the final
    /// summary.
    ///
    /// # Errors
    ///
    /// Returns [`KingdomError::NonTerminatingSimulation`] if the coffer still
    /// holds money after [`Kingdom::max_days`] days.
    pub fn spend_all_money_observed<O>(&mut self, observer: &mut O) -> KingdomResult<RunSummary>
    where
        O: DayObserver + ?Sized,
    {
        let mut day = 0u64;
        while self.coffer > 0 {
            if day >= self.max_days {
                return Err(KingdomError::NonTerminatingSimulation {
                    days: day,
                    coffer: self.coffer,
                });
            }
            observer.on_day(&self.snapshot(day));
            self.advance_day();
            day += 1;
        }

        let summary = RunSummary {
            profit: self.profit(),
            days: day,
            revenue: self.revenue,
        };
        observer.on_exhausted(&summary);
        Ok(summary)
    }

    /// Snapshot of the current state, labelled with `day`.
    #[must_use]
    pub fn snapshot(&self, day: u64) -> DaySnapshot {
        DaySnapshot {
            day,
            coffer: self.coffer,
            approval: self.approval,
            revenue: self.revenue,
        }
    }

    fn gains_for(&self, payroll: i64) -> i64 {
        let gains =
            self.base_revenue as f64 * self.approval * payroll as f64 / self.max_payroll as f64;
        round_half_even(gains) as i64
    }
}

/// Round a construction amount, rejecting negatives and non-finite values.
fn whole_amount(field: &'static str, value: f64) -> KingdomResult<i64> {
    if value < 0.0 {
        return Err(KingdomError::invalid(field, format!("{value} is negative")));
    }
    round_to_i64(value)
        .ok_or_else(|| KingdomError::invalid(field, format!("{value} is not a representable amount")))
}

/// Kani proofs for the payroll bound.
///
/// Run with: `cargo kani`
#[cfg(kani)]
mod kani_proofs {
    use super::*;

    /// Payroll stays within `[0, max_payroll]` and never exceeds the coffer.
    #[kani::proof]
    fn prove_payroll_bounded() {
        let coffer: i64 = kani::any();
        let completed: bool = kani::any();
        kani::assume((0..=1_000_000_000_000).contains(&coffer));

        let mut kingdom = match Kingdom::new(KingdomConfig::new(0.0, 0.0).with_quest(completed)) {
            Ok(k) => k,
            Err(_) => return,
        };
        kingdom.inject_cash(coffer as f64);

        let payroll = kingdom.payroll();
        assert!(payroll >= 0);
        assert!(payroll <= kingdom.max_payroll());
        assert!(payroll <= kingdom.coffer());
    }
}
