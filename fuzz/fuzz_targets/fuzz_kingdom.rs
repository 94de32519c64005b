#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use miscellania::kingdom::check_invariants;
use miscellania::{Kingdom, KingdomConfig, KingdomError};

/// Structured input for kingdom fuzzing.
#[derive(Arbitrary, Debug)]
struct KingdomInput {
    /// Starting cash, any bit pattern.
    cash: f64,
    /// Base revenue, any bit pattern.
    revenue: f64,
    /// Starting approval, any bit pattern.
    approval: f64,
    /// Whether Royal Trouble is complete.
    completed: bool,
    /// Money added between days.
    injections: Vec<f64>,
    /// Days to advance before the full run.
    days: u16,
}

fuzz_target!(|input: KingdomInput| {
    let config = KingdomConfig::new(input.cash, input.revenue)
        .with_quest(input.completed)
        .with_starting_approval(input.approval)
        .with_max_days(5_000);

    // Invalid configurations must be rejected, never panic
    let mut kingdom = match Kingdom::new(config) {
        Ok(k) => k,
        Err(KingdomError::InvalidConfiguration { .. }) => return,
        Err(e) => panic!("Unexpected construction error: {e}"),
    };

    let violations = check_invariants(&kingdom);
    assert!(violations.is_empty(), "Invariants violated at start: {violations:?}");

    let mut injections = input.injections.iter().take(32);
    for _ in 0..input.days.min(1_000) {
        if let Some(&amount) = injections.next() {
            kingdom.inject_cash(amount);
        }

        let coffer = kingdom.coffer();
        let revenue = kingdom.cumulative_revenue();
        let approval = kingdom.approval();
        kingdom.advance_day();

        assert!(kingdom.coffer() <= coffer, "Coffer grew during a day");
        assert!(kingdom.cumulative_revenue() >= revenue, "Revenue shrank");
        assert!(kingdom.approval() <= approval, "Approval rose");

        let violations = check_invariants(&kingdom);
        assert!(violations.is_empty(), "Invariants violated after day: {violations:?}");
    }

    // The full run either empties the coffer or hits the day bound
    match kingdom.spend_all_money() {
        Ok(summary) => {
            assert!(kingdom.coffer() <= 0, "Run ended with money left");
            assert_eq!(summary.revenue, kingdom.cumulative_revenue());
        }
        Err(KingdomError::NonTerminatingSimulation { .. }) => {}
        Err(e) => panic!("Unexpected run error: {e}"),
    }
});
