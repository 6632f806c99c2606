//! Simulation error types.
//!
//! Every failure is a local validation failure detected before any
//! scheduling work begins. Once input is validated the algorithms are
//! total, so there is no runtime error path.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SimulationError>;

/// Errors surfaced to the caller as a single displayable message.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "error_type", content = "details")]
pub enum SimulationError {
    /// Burst times are empty, unparseable, or non-positive.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Priority count differs from burst-time count.
    #[error(
        "Burst times and priorities must have the same number of values \
         ({burst_times} burst times, {priorities} priorities)"
    )]
    MismatchedLength { burst_times: usize, priorities: usize },

    /// Round-robin quantum is not a positive integer.
    #[error("Invalid quantum: {0} (must be a positive integer)")]
    InvalidQuantum(i64),

    /// Algorithm selector outside the supported set.
    #[error("Unknown algorithm: '{0}'")]
    UnknownAlgorithm(String),
}

impl SimulationError {
    /// Creates an invalid input error.
    #[inline]
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let e = SimulationError::invalid_input("no burst times");
        assert_eq!(e.to_string(), "Invalid input: no burst times");

        let e = SimulationError::MismatchedLength {
            burst_times: 3,
            priorities: 2,
        };
        assert!(e.to_string().contains("3 burst times, 2 priorities"));

        assert_eq!(
            SimulationError::InvalidQuantum(0).to_string(),
            "Invalid quantum: 0 (must be a positive integer)"
        );
        assert_eq!(
            SimulationError::UnknownAlgorithm("LJF".into()).to_string(),
            "Unknown algorithm: 'LJF'"
        );
    }

    #[test]
    fn test_error_serde_tagging() {
        let json = serde_json::to_value(SimulationError::InvalidQuantum(-1)).unwrap();
        assert_eq!(json["error_type"], "invalid_quantum");
        assert_eq!(json["details"], -1);

        let back: SimulationError = serde_json::from_value(json).unwrap();
        assert_eq!(back, SimulationError::InvalidQuantum(-1));
    }
}
