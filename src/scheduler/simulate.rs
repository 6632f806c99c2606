//! Simulation entry point.
//!
//! # Algorithm
//!
//! 1. Validate burst times, priorities and quantum; fail before any
//!    scheduling work on the first problem.
//! 2. Dispatch on the algorithm:
//!    - FCFS / SJF / Priority: sequential execution ordered by the
//!      algorithm's dispatching rule.
//!    - Round-Robin: fixed-quantum preemptive execution.
//! 3. Assemble the timeline and per-process metrics.
//!
//! Simulation is pure: no shared state, no clock, no randomness.
//! Identical requests always yield identical schedules.

use log::debug;
use serde::{Deserialize, Serialize};
use std::num::NonZeroU64;

use super::metrics::assemble;
use super::{RoundRobinScheduler, SequentialScheduler};
use crate::dispatching::rule_for;
use crate::error::Result;
use crate::models::{Algorithm, Process, Schedule};
use crate::validation::{
    build_processes, parse_burst_times, parse_priorities, validate_quantum, DEFAULT_QUANTUM,
};

/// Input container for one simulation run.
///
/// Holds raw (unvalidated) caller input; [`SimulationRequest::run`]
/// validates it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Burst time per process, in input order.
    pub burst_times: Vec<i64>,
    /// Scheduling discipline.
    #[serde(default)]
    pub algorithm: Algorithm,
    /// Priority per process (priority scheduling only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priorities: Option<Vec<i64>>,
    /// Time slice (round-robin only). Defaults to [`DEFAULT_QUANTUM`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantum: Option<i64>,
}

impl SimulationRequest {
    /// Creates an FCFS request over the given burst times.
    pub fn new(burst_times: Vec<i64>) -> Self {
        Self {
            burst_times,
            ..Default::default()
        }
    }

    /// Parses a request from raw text fields.
    ///
    /// `burst_times` and `priorities` are whitespace-separated integers;
    /// blank `priorities` means none were given. `algorithm` is a label
    /// such as `"SJF"` or `"Round Robin"`.
    pub fn from_text(
        burst_times: &str,
        algorithm: &str,
        priorities: &str,
        quantum: Option<i64>,
    ) -> Result<Self> {
        Ok(Self {
            algorithm: algorithm.parse()?,
            burst_times: parse_burst_times(burst_times)?,
            priorities: parse_priorities(priorities)?,
            quantum,
        })
    }

    /// Sets the algorithm.
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Sets the priorities.
    pub fn with_priorities(mut self, priorities: Vec<i64>) -> Self {
        self.priorities = Some(priorities);
        self
    }

    /// Sets the round-robin quantum.
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.quantum = Some(quantum);
        self
    }

    /// Validates the request and runs the simulation.
    pub fn run(&self) -> Result<Schedule> {
        simulate(
            &self.burst_times,
            self.algorithm,
            self.priorities.as_deref(),
            self.quantum,
        )
    }
}

/// Validates input and simulates one scheduling run.
///
/// # Errors
/// - `InvalidInput`: empty or non-positive burst times.
/// - `MismatchedLength`: priority count differs (priority scheduling).
/// - `InvalidQuantum`: non-positive quantum (round-robin).
///
/// # Example
///
/// ```
/// use cpu_sched::models::Algorithm;
/// use cpu_sched::scheduler::simulate;
///
/// let schedule = simulate(&[5, 3, 8], Algorithm::Sjf, None, None).unwrap();
/// assert_eq!(schedule.waiting_times(), vec![3, 0, 8]);
/// ```
pub fn simulate(
    burst_times: &[i64],
    algorithm: Algorithm,
    priorities: Option<&[i64]>,
    quantum: Option<i64>,
) -> Result<Schedule> {
    let processes = build_processes(burst_times, priorities, algorithm)?;
    let quantum = validate_quantum(quantum, algorithm)?;
    Ok(schedule_processes(&processes, algorithm, quantum))
}

/// Simulates a process list built by [`build_processes`].
///
/// Round-robin without a quantum uses [`DEFAULT_QUANTUM`]; other
/// algorithms ignore `quantum`.
pub(crate) fn schedule_processes(
    processes: &[Process],
    algorithm: Algorithm,
    quantum: Option<NonZeroU64>,
) -> Schedule {
    debug!(
        "Simulating {algorithm} over {} processes (quantum {:?})",
        processes.len(),
        quantum.map(NonZeroU64::get)
    );

    let (entries, quantum) = match rule_for(algorithm) {
        Some(rule) => (SequentialScheduler::new(rule).timeline(processes), None),
        None => {
            let quantum = quantum.unwrap_or(DEFAULT_QUANTUM);
            (
                RoundRobinScheduler::new(quantum).timeline(processes),
                Some(quantum),
            )
        }
    };

    let schedule = assemble(algorithm, quantum, processes, entries);
    debug!(
        "{algorithm} finished at t={} with {} entries",
        schedule.makespan(),
        schedule.entries.len()
    );
    schedule
}
