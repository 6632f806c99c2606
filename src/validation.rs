//! Input parsing and validation for simulation requests.
//!
//! Turns raw caller input into a validated process list before any
//! scheduling happens. Detects:
//! - Empty burst-time lists
//! - Non-integer tokens
//! - Non-positive burst times
//! - Total burst time overflowing the clock
//! - Priority/burst count mismatches (priority scheduling only)
//! - Non-positive round-robin quanta
//!
//! Validation fails fast: the first problem found is returned.

use log::warn;
use std::num::NonZeroU64;

use crate::error::{Result, SimulationError};
use crate::models::{Algorithm, Process};

/// Quantum used when round-robin is requested without one.
pub const DEFAULT_QUANTUM: NonZeroU64 = NonZeroU64::MIN.saturating_add(1);

/// Parses a whitespace-separated list of integers.
///
/// `what` names the list in error messages (e.g. "burst time").
pub fn parse_integers(text: &str, what: &str) -> Result<Vec<i64>> {
    text.split_whitespace()
        .map(|token| {
            token.parse::<i64>().map_err(|_| {
                SimulationError::invalid_input(format!("'{token}' is not a valid {what}"))
            })
        })
        .collect()
}

/// Parses burst times from raw text.
///
/// Only checks that every token is an integer; positivity is checked by
/// [`build_processes`].
pub fn parse_burst_times(text: &str) -> Result<Vec<i64>> {
    parse_integers(text, "burst time")
}

/// Parses priorities from raw text. Blank text means "not supplied".
pub fn parse_priorities(text: &str) -> Result<Option<Vec<i64>>> {
    if text.trim().is_empty() {
        return Ok(None);
    }
    parse_integers(text, "priority").map(Some)
}

/// Validates burst times (and priorities, for priority scheduling) and
/// builds the process list.
///
/// # Rules
/// 1. At least one burst time.
/// 2. Every burst time is positive.
/// 3. The total burst time fits the simulation clock (`u64`).
/// 4. For [`Algorithm::Priority`], supplied priorities must match the
///    burst-time count and fit in `i32`; missing priorities default to 0.
/// 5. Other algorithms ignore priorities.
pub fn build_processes(
    burst_times: &[i64],
    priorities: Option<&[i64]>,
    algorithm: Algorithm,
) -> Result<Vec<Process>> {
    if burst_times.is_empty() {
        return Err(SimulationError::invalid_input(
            "Please enter valid process burst times.",
        ));
    }

    if let Some((i, &bad)) = burst_times.iter().enumerate().find(|&(_, &b)| b <= 0) {
        return Err(SimulationError::invalid_input(format!(
            "Burst time of P{} must be a positive integer (got {bad})",
            i + 1
        )));
    }

    if burst_times
        .iter()
        .try_fold(0u64, |acc, &b| acc.checked_add(b as u64))
        .is_none()
    {
        return Err(SimulationError::invalid_input(
            "Total burst time exceeds the simulation clock range",
        ));
    }

    let priorities = match priorities {
        Some(p) if algorithm.uses_priority() => {
            if p.len() != burst_times.len() {
                return Err(SimulationError::MismatchedLength {
                    burst_times: burst_times.len(),
                    priorities: p.len(),
                });
            }
            p.iter()
                .enumerate()
                .map(|(i, &v)| {
                    i32::try_from(v).map_err(|_| {
                        SimulationError::invalid_input(format!(
                            "Priority of P{} is out of range (got {v})",
                            i + 1
                        ))
                    })
                })
                .collect::<Result<Vec<i32>>>()?
        }
        Some(_) => {
            warn!("Priorities supplied to {algorithm}, which ignores them");
            vec![0; burst_times.len()]
        }
        None => vec![0; burst_times.len()],
    };

    Ok(burst_times
        .iter()
        .zip(priorities)
        .enumerate()
        .map(|(i, (&burst, priority))| Process::new(i, burst as u64).with_priority(priority))
        .collect())
}

/// Validates the round-robin quantum.
///
/// Returns `None` for non-preemptive algorithms (the quantum is ignored),
/// [`DEFAULT_QUANTUM`] when round-robin is requested without one.
pub fn validate_quantum(
    quantum: Option<i64>,
    algorithm: Algorithm,
) -> Result<Option<NonZeroU64>> {
    if !algorithm.is_preemptive() {
        return Ok(None);
    }
    match quantum {
        None => Ok(Some(DEFAULT_QUANTUM)),
        Some(q) if q > 0 => Ok(NonZeroU64::new(q as u64)),
        Some(q) => Err(SimulationError::InvalidQuantum(q)),
    }
}
