//! Kingdom invariants - sanity checks that detect bugs.
//!
//! The daily transition should never break these. A violation means the
//! model itself is wrong, not that the inputs were unusual.

use crate::kingdom::{APPROVAL_FLOOR, Kingdom};

/// Invariant violation error.
#[derive(Debug, Clone)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub message: String,
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invariant violation: {}", self.message)
    }
}

impl std::error::Error for InvariantViolation {}

/// Check all kingdom invariants.
///
/// Returns a list of violations found, or empty if all invariants hold.
#[must_use]
pub fn check_invariants(kingdom: &Kingdom) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();
    let approval = kingdom.approval();

    if !(0.0..=1.0).contains(&approval) {
        violations.push(InvariantViolation {
            message: format!("Approval {approval} outside [0, 1]"),
        });
    }

    if kingdom.cumulative_revenue() < 0 {
        violations.push(InvariantViolation {
            message: format!("Cumulative revenue {} is negative", kingdom.cumulative_revenue()),
        });
    }

    if kingdom.coffer() >= 0 {
        let payroll = kingdom.payroll();
        if payroll < 0 || payroll > kingdom.max_payroll() {
            violations.push(InvariantViolation {
                message: format!(
                    "Payroll {payroll} outside [0, {}] for coffer {}",
                    kingdom.max_payroll(),
                    kingdom.coffer()
                ),
            });
        }
        if payroll > kingdom.coffer() && kingdom.coffer() > 0 {
            violations.push(InvariantViolation {
                message: format!(
                    "Payroll {payroll} exceeds positive coffer {}",
                    kingdom.coffer()
                ),
            });
        }
    }

    let quest = kingdom.quest();
    if kingdom.max_payroll() != quest.max_payroll()
        || kingdom.decay_rate().to_bits() != quest.decay_rate().to_bits()
    {
        violations.push(InvariantViolation {
            message: format!("Payroll policy no longer matches {}", quest.label()),
        });
    }

    violations
}

/// Whether `approval` has left the range reachable by decay.
///
/// Approval that started above the floor never drops below it.
#[must_use]
pub fn decayed_below_floor(before: f64, after: f64) -> bool {
    before > APPROVAL_FLOOR && after < APPROVAL_FLOOR
}

/// Assert all kingdom invariants hold, panicking if any are violated.
///
/// Only active in debug builds. No-op in release builds.
///
/// # Panics
///
/// Panics with detailed message if any invariant is violated.
#[cfg(debug_assertions)]
pub fn assert_invariants(kingdom: &Kingdom) {
    let violations = check_invariants(kingdom);
    if !violations.is_empty() {
        let messages: Vec<_> = violations.iter().map(|v| v.message.as_str()).collect();
        panic!("Kingdom invariant violations:\n  - {}", messages.join("\n  - "));
    }
}

/// No-op in release builds.
#[cfg(not(debug_assertions))]
pub fn assert_invariants(_kingdom: &Kingdom) {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kingdom::KingdomConfig;

    #[test]
    fn test_fresh_kingdom_passes() {
        let kingdom = Kingdom::new(KingdomConfig::new(1_000_000.0, 125_000.0)).unwrap();
        assert!(check_invariants(&kingdom).is_empty());
    }

    #[test]
    fn test_full_run_holds_invariants() {
        let mut kingdom = Kingdom::new(KingdomConfig::new(3_070_000.0, 125_000.0)).unwrap();
        while !kingdom.is_exhausted() {
            let before = kingdom.approval();
            kingdom.advance_day();
            assert!(!decayed_below_floor(before, kingdom.approval()));
            assert!(check_invariants(&kingdom).is_empty());
        }
    }

    #[test]
    fn test_overdrawn_coffer_skips_payroll_checks() {
        let mut kingdom = Kingdom::new(KingdomConfig::new(0.0, 125_000.0)).unwrap();
        kingdom.inject_cash(-500.0);
        assert!(check_invariants(&kingdom).is_empty());
    }

    #[test]
    fn test_floor_crossing_detected() {
        assert!(decayed_below_floor(0.26, 0.24));
        assert!(!decayed_below_floor(0.26, 0.25));
        assert!(!decayed_below_floor(0.1, 0.1));
    }

    #[test]
    fn test_violation_display() {
        let violation = InvariantViolation {
            message: "Approval 2 outside [0, 1]".to_string(),
        };
        assert_eq!(
            violation.to_string(),
            "Invariant violation: Approval 2 outside [0, 1]"
        );
    }
}
