//! Error types for the kingdom model.

use std::fmt;

/// Errors raised while configuring or running a kingdom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KingdomError {
    /// A constructor input was rejected.
    InvalidConfiguration {
        /// Name of the offending input.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
    /// The day bound was reached while the coffer still held money.
    NonTerminatingSimulation {
        /// Days advanced before giving up.
        days: u64,
        /// Coffer balance left when the bound was hit.
        coffer: i64,
    },
}

impl KingdomError {
    /// Create an invalid configuration error.
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            field,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for KingdomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KingdomError::InvalidConfiguration { field, reason } => {
                write!(f, "invalid {field}: {reason}")
            }
            KingdomError::NonTerminatingSimulation { days, coffer } => {
                write!(
                    f,
                    "simulation did not exhaust the coffer after {days} days ({coffer} left)"
                )
            }
        }
    }
}

impl std::error::Error for KingdomError {}

/// Result type for kingdom operations.
pub type KingdomResult<T> = Result<T, KingdomError>;
