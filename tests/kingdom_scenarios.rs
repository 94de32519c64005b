//! Scenario tests for full kingdom runs and sweeps.
//!
//! Expected values come from the reference model with round-half-to-even.
//! Run with: cargo test --release kingdom_scenarios

#![allow(missing_docs)]
#![allow(clippy::unwrap_used, clippy::float_cmp)]

use miscellania::{
    DayLog, Kingdom, KingdomConfig, KingdomError, QuestStatus, SweepConfig, run_sweep,
};

#[test]
fn test_empty_coffer_returns_immediately() {
    let config = KingdomConfig::new(0.0, 125_000.0)
        .with_quest(true)
        .with_starting_approval(1.0);
    let mut kingdom = Kingdom::new(config).unwrap();

    assert_eq!(kingdom.payroll(), 0);
    let summary = kingdom.spend_all_money().unwrap();
    assert_eq!((summary.profit, summary.days), (0, 0));
}

#[test]
fn test_first_day_from_one_million() {
    let mut kingdom = Kingdom::new(KingdomConfig::new(1_000_000.0, 125_000.0)).unwrap();

    assert_eq!(kingdom.payroll(), 75_000);
    kingdom.advance_day();

    assert_eq!(kingdom.coffer(), 925_000);
    assert_eq!(kingdom.cumulative_revenue(), 125_000);
    assert_eq!(kingdom.approval(), 0.99);
}

#[test]
fn test_incomplete_quest_decays_to_floor() {
    let config = KingdomConfig::new(1_000_000.0, 125_000.0).with_quest(false);
    let mut kingdom = Kingdom::new(config).unwrap();
    assert_eq!(kingdom.quest(), QuestStatus::Incomplete);
    assert_eq!(kingdom.max_payroll(), 50_000);
    assert_eq!(kingdom.decay_rate(), 0.025);

    let mut steps = Vec::new();
    while kingdom.approval() > 0.25 {
        kingdom.decay_approval();
        steps.push(kingdom.approval());
    }

    // Two-decimal rounding at each step makes some steps 0.02 and some 0.03
    assert_eq!(steps.len(), 28);
    assert_eq!(&steps[..4], &[0.97, 0.94, 0.91, 0.89]);
    assert_eq!(steps.last(), Some(&0.25));

    for _ in 0..10 {
        kingdom.decay_approval();
        assert_eq!(kingdom.approval(), 0.25);
    }
}

#[test]
fn test_completed_quest_decays_one_point_per_day() {
    let mut kingdom = Kingdom::new(KingdomConfig::new(0.0, 0.0)).unwrap();
    let mut steps = 0;
    while kingdom.approval() > 0.25 {
        kingdom.decay_approval();
        steps += 1;
    }
    assert_eq!(steps, 75);
}

#[test]
fn test_verbose_trace_matches_summary() {
    let mut kingdom = Kingdom::new(KingdomConfig::new(1_000_000.0, 125_000.0)).unwrap();
    let mut log = DayLog::new();
    let summary = kingdom.spend_all_money_observed(&mut log).unwrap();

    assert_eq!(summary.days, 116);
    assert_eq!(summary.profit, 507_558);
    assert_eq!(log.days.len(), 116);
    assert_eq!(log.days[0].coffer, 1_000_000);
    assert_eq!(log.days[1].coffer, 925_000);
    assert_eq!(log.days[1].approval, 0.99);
    assert!(log.days.windows(2).all(|w| w[1].coffer <= w[0].coffer));
    assert_eq!(log.summary, Some(summary));
}

#[test]
fn test_injection_extends_run_without_counting_as_profit() {
    let mut kingdom = Kingdom::new(KingdomConfig::new(1_000_000.0, 125_000.0)).unwrap();
    kingdom.inject_cash(500_000.0);
    assert_eq!(kingdom.starting_cash(), 1_000_000);

    let summary = kingdom.spend_all_money().unwrap();
    assert_eq!(summary.profit, kingdom.cumulative_revenue() - 1_000_000);
    assert!(summary.days > 116);
}

#[test]
fn test_day_bound_is_reported() {
    let config = KingdomConfig::new(10_000_000.0, 125_000.0).with_max_days(100);
    let result = Kingdom::new(config).unwrap().spend_all_money();

    assert!(matches!(
        result,
        Err(KingdomError::NonTerminatingSimulation { days: 100, .. })
    ));
}

#[test]
fn test_sweep_matches_sequential_runs() {
    let config = SweepConfig::linear(0.0, 250_000.0, 41);
    let report = run_sweep(&config).unwrap();

    assert_eq!(report.len(), 41);
    for (cash, point) in config.starting_cash.iter().zip(&report.points) {
        let mut kingdom = Kingdom::new(config.kingdom_config(*cash)).unwrap();
        let summary = kingdom.spend_all_money().unwrap();
        assert_eq!(point.starting_cash, kingdom.starting_cash());
        assert_eq!(point.profit, summary.profit);
        assert_eq!(point.days, summary.days);
    }
}

#[test]
fn test_default_sweep_finds_profitable_optimum() {
    let report = run_sweep(&SweepConfig::default()).unwrap();
    let best = report.best().unwrap();

    assert!(best.profit > 0);
    assert_eq!(best.starting_cash, 3_070_000);
    assert!(report.points.iter().all(|p| p.profit <= best.profit));
    assert_eq!(report.points[0].profit, 0);
}
