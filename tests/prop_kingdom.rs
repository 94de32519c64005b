//! Property-based tests for the kingdom model.
//!
//! These tests verify payroll bounds, decay behavior, and run monotonicity.
//! Run with: cargo test --release prop_kingdom

#![allow(missing_docs)]
#![allow(clippy::unwrap_used, clippy::float_cmp)]
#![allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]

use proptest::prelude::*;

use miscellania::kingdom::check_invariants;
use miscellania::kingdom::invariants::decayed_below_floor;
use miscellania::{Kingdom, KingdomConfig};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(2000))]

    /// Payroll is ceil(min(coffer × 0.10, max_payroll)) and stays within the cap.
    #[test]
    fn prop_payroll_bounded(coffer in 0i64..100_000_000, completed in any::<bool>()) {
        let kingdom = Kingdom::new(
            KingdomConfig::new(coffer as f64, 125_000.0).with_quest(completed)
        ).unwrap();

        let payroll = kingdom.payroll();
        let expected = (coffer as f64 * 0.10).min(kingdom.max_payroll() as f64).ceil() as i64;

        prop_assert_eq!(payroll, expected);
        prop_assert!(payroll >= 0);
        prop_assert!(payroll <= kingdom.max_payroll());
        prop_assert!(payroll <= coffer);
    }

    /// Decay is idempotent once the floor is reached.
    #[test]
    fn prop_decay_reaches_and_holds_floor(
        approval in 0.0f64..=1.0,
        completed in any::<bool>()
    ) {
        let mut kingdom = Kingdom::new(
            KingdomConfig::new(0.0, 0.0)
                .with_quest(completed)
                .with_starting_approval(approval)
        ).unwrap();

        for _ in 0..200 {
            let before = kingdom.approval();
            kingdom.decay_approval();
            prop_assert!(kingdom.approval() <= before);
            prop_assert!(!decayed_below_floor(before, kingdom.approval()));
        }

        let settled = kingdom.approval();
        prop_assert!(settled <= 0.25);
        kingdom.decay_approval();
        prop_assert_eq!(kingdom.approval(), settled);
    }

    /// Coffer never increases and revenue never decreases across days.
    #[test]
    fn prop_advance_day_monotonic(
        cash in 0u32..20_000_000,
        revenue in 0u32..500_000,
        approval in 0.0f64..=1.0,
        completed in any::<bool>(),
        days in 1usize..300
    ) {
        let mut kingdom = Kingdom::new(
            KingdomConfig::new(f64::from(cash), f64::from(revenue))
                .with_quest(completed)
                .with_starting_approval(approval)
        ).unwrap();

        for _ in 0..days {
            let coffer = kingdom.coffer();
            let earned = kingdom.cumulative_revenue();
            let outcome = kingdom.advance_day();

            prop_assert!(kingdom.coffer() <= coffer);
            prop_assert!(kingdom.coffer() >= 0);
            prop_assert!(kingdom.cumulative_revenue() >= earned);
            if !outcome.paid {
                prop_assert_eq!(kingdom.cumulative_revenue(), earned);
            }
            prop_assert!(check_invariants(&kingdom).is_empty());
        }
    }

    /// A full run empties the coffer and reports profit against starting cash.
    #[test]
    fn prop_spend_all_money_terminates(
        cash in 0u32..50_000_000,
        revenue in 0u32..500_000,
        completed in any::<bool>()
    ) {
        let mut kingdom = Kingdom::new(
            KingdomConfig::new(f64::from(cash), f64::from(revenue)).with_quest(completed)
        ).unwrap();

        let summary = kingdom.spend_all_money().unwrap();

        prop_assert!(kingdom.coffer() <= 0);
        prop_assert_eq!(summary.profit, kingdom.cumulative_revenue() - kingdom.starting_cash());
        prop_assert_eq!(summary.revenue, kingdom.cumulative_revenue());
        prop_assert_eq!(summary.days == 0, cash == 0);
    }

    /// Injecting and withdrawing the same amount restores the coffer.
    #[test]
    fn prop_inject_round_trip(cash in 0u32..1_000_000, amount in -1_000_000i64..1_000_000) {
        let mut kingdom = Kingdom::new(KingdomConfig::new(f64::from(cash), 0.0)).unwrap();
        let before = kingdom.coffer();

        kingdom.inject_cash(amount as f64);
        prop_assert_eq!(kingdom.coffer(), before + amount);
        kingdom.inject_cash(-(amount as f64));
        prop_assert_eq!(kingdom.coffer(), before);
    }

    /// Identical kingdoms produce identical runs.
    #[test]
    fn prop_runs_are_deterministic(cash in 0u32..10_000_000, completed in any::<bool>()) {
        let config = KingdomConfig::new(f64::from(cash), 125_000.0).with_quest(completed);
        let first = Kingdom::new(config).unwrap().spend_all_money().unwrap();
        let second = Kingdom::new(config).unwrap().spend_all_money().unwrap();
        prop_assert_eq!(first, second);
    }
}
