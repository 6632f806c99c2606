//! Schedule (simulation result) model.
//!
//! A schedule is the chronological timeline of CPU execution intervals
//! plus per-process timing metrics reported in original input order.
//!
//! # Invariants
//! - Entries are adjacent: the first starts at 0 and each one starts
//!   where the previous one ended.
//! - Every entry has positive duration.
//! - Each process's entry durations sum to its burst time.
//! - `waiting_time = turnaround_time - burst_time` for every process.

use serde::{Deserialize, Serialize};

use super::process::process_label;
use super::Algorithm;

/// One contiguous CPU execution interval `[start_time, end_time)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Original (zero-based) index of the executing process.
    pub process_index: usize,
    /// Interval start.
    pub start_time: u64,
    /// Interval end (exclusive, > start).
    pub end_time: u64,
}

/// Timing metrics for one process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessMetrics {
    /// Original (zero-based) process index.
    pub process_index: usize,
    /// Burst time of the process.
    pub burst_time: u64,
    /// Priority the process ran with.
    pub priority: i32,
    /// Start of the process's first entry.
    pub first_start_time: u64,
    /// End of the process's last entry.
    pub completion_time: u64,
    /// `completion_time - 0`.
    pub turnaround_time: u64,
    /// `turnaround_time - burst_time`.
    pub waiting_time: u64,
    /// `first_start_time - 0`.
    pub response_time: u64,
}

/// A complete simulation result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Algorithm that produced this schedule.
    pub algorithm: Algorithm,
    /// Quantum used (round-robin only).
    pub quantum: Option<u64>,
    /// Execution intervals in chronological order.
    pub entries: Vec<ScheduleEntry>,
    /// Per-process metrics, indexed by original process order.
    pub metrics: Vec<ProcessMetrics>,
}

/// An inconsistency found by [`Schedule::verify`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Type of violation.
    pub violation_type: ViolationType,
    /// Human-readable description.
    pub message: String,
}

/// Classification of schedule inconsistencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViolationType {
    /// The first entry does not start at time 0.
    LateStart,
    /// An entry has zero or negative duration.
    EmptyEntry,
    /// Two consecutive entries leave a gap or overlap.
    NotAdjacent,
    /// An entry references a process with no metrics.
    UnknownProcess,
    /// A process's entries do not add up to its burst time.
    BurstMismatch,
    /// A metric disagrees with the timeline or the metric formulas.
    MetricsMismatch,
}

impl ScheduleEntry {
    /// Creates an entry.
    pub fn new(process_index: usize, start_time: u64, end_time: u64) -> Self {
        Self {
            process_index,
            start_time,
            end_time,
        }
    }

    /// Interval length.
    #[inline]
    pub fn duration(&self) -> u64 {
        self.end_time.saturating_sub(self.start_time)
    }

    /// Gantt label of the owning process.
    pub fn label(&self) -> String {
        process_label(self.process_index)
    }
}

impl ProcessMetrics {
    /// Derives metrics from a process's first start and completion time.
    ///
    /// All processes arrive at time 0, so turnaround equals completion.
    pub fn new(
        process_index: usize,
        burst_time: u64,
        priority: i32,
        first_start_time: u64,
        completion_time: u64,
    ) -> Self {
        let turnaround_time = completion_time;
        Self {
            process_index,
            burst_time,
            priority,
            first_start_time,
            completion_time,
            turnaround_time,
            waiting_time: turnaround_time.saturating_sub(burst_time),
            response_time: first_start_time,
        }
    }

    /// One-based process number for display.
    #[inline]
    pub fn number(&self) -> usize {
        self.process_index + 1
    }
}

impl Violation {
    fn new(violation_type: ViolationType, message: impl Into<String>) -> Self {
        Self {
            violation_type,
            message: message.into(),
        }
    }
}

impl Schedule {
    /// Creates an empty schedule for the given algorithm.
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            quantum: None,
            entries: Vec::new(),
            metrics: Vec::new(),
        }
    }

    /// Sets the quantum.
    pub fn with_quantum(mut self, quantum: u64) -> Self {
        self.quantum = Some(quantum);
        self
    }

    /// Latest end time across all entries.
    pub fn makespan(&self) -> u64 {
        self.entries.last().map(|e| e.end_time).unwrap_or(0)
    }

    /// Sum of all entry durations.
    pub fn total_burst(&self) -> u64 {
        self.entries.iter().map(|e| e.duration()).sum()
    }

    /// Number of processes.
    pub fn process_count(&self) -> usize {
        self.metrics.len()
    }

    /// All entries owned by a process, in chronological order.
    pub fn entries_for_process(&self, process_index: usize) -> Vec<&ScheduleEntry> {
        self.entries
            .iter()
            .filter(|e| e.process_index == process_index)
            .collect()
    }

    /// Metrics for a process.
    pub fn metrics_for_process(&self, process_index: usize) -> Option<&ProcessMetrics> {
        self.metrics.get(process_index)
    }

    /// Process indices in the order they first received the CPU.
    pub fn execution_order(&self) -> Vec<usize> {
        let mut seen = vec![false; self.metrics.len()];
        let mut order = Vec::with_capacity(self.metrics.len());
        for e in &self.entries {
            if let Some(flag) = seen.get_mut(e.process_index) {
                if !*flag {
                    *flag = true;
                    order.push(e.process_index);
                }
            }
        }
        order
    }

    /// Number of times the CPU switches from one process to another.
    pub fn context_switches(&self) -> usize {
        self.entries
            .windows(2)
            .filter(|w| w[0].process_index != w[1].process_index)
            .count()
    }

    /// Waiting times in original process order.
    pub fn waiting_times(&self) -> Vec<u64> {
        self.metrics.iter().map(|m| m.waiting_time).collect()
    }

    /// Turnaround times in original process order.
    pub fn turnaround_times(&self) -> Vec<u64> {
        self.metrics.iter().map(|m| m.turnaround_time).collect()
    }

    /// `(start, end)` pairs of the timeline.
    pub fn intervals(&self) -> Vec<(u64, u64)> {
        self.entries
            .iter()
            .map(|e| (e.start_time, e.end_time))
            .collect()
    }

    /// Checks the timeline and metrics against each other.
    ///
    /// Returns every inconsistency found; an empty list means the
    /// schedule is well formed.
    pub fn verify(&self) -> Vec<Violation> {
        let mut violations = Vec::new();

        if let Some(first) = self.entries.first() {
            if first.start_time != 0 {
                violations.push(Violation::new(
                    ViolationType::LateStart,
                    format!("First entry starts at {}", first.start_time),
                ));
            }
        }

        for (i, e) in self.entries.iter().enumerate() {
            if e.end_time <= e.start_time {
                violations.push(Violation::new(
                    ViolationType::EmptyEntry,
                    format!(
                        "Entry {i} for {} spans [{}, {}]",
                        e.label(),
                        e.start_time,
                        e.end_time
                    ),
                ));
            }
            if e.process_index >= self.metrics.len() {
                violations.push(Violation::new(
                    ViolationType::UnknownProcess,
                    format!("Entry {i} references unknown process {}", e.label()),
                ));
            }
        }

        for (i, w) in self.entries.windows(2).enumerate() {
            if w[0].end_time != w[1].start_time {
                violations.push(Violation::new(
                    ViolationType::NotAdjacent,
                    format!(
                        "Entry {} ends at {} but entry {} starts at {}",
                        i,
                        w[0].end_time,
                        i + 1,
                        w[1].start_time
                    ),
                ));
            }
        }

        for (idx, m) in self.metrics.iter().enumerate() {
            let label = process_label(idx);
            if m.process_index != idx {
                violations.push(Violation::new(
                    ViolationType::MetricsMismatch,
                    format!("Metrics slot {idx} holds process {}", m.number()),
                ));
            }

            let own = self.entries_for_process(idx);
            let executed: u64 = own.iter().map(|e| e.duration()).sum();
            if executed != m.burst_time {
                violations.push(Violation::new(
                    ViolationType::BurstMismatch,
                    format!("{label} executed {executed} of {} units", m.burst_time),
                ));
            }

            let completion = own.last().map(|e| e.end_time);
            let first_start = own.first().map(|e| e.start_time);
            if completion != Some(m.completion_time) || first_start != Some(m.first_start_time) {
                violations.push(Violation::new(
                    ViolationType::MetricsMismatch,
                    format!("{label} metrics disagree with its timeline entries"),
                ));
            }

            if m.turnaround_time != m.completion_time
                || m.turnaround_time < m.burst_time
                || m.waiting_time != m.turnaround_time - m.burst_time
                || m.response_time != m.first_start_time
            {
                violations.push(Violation::new(
                    ViolationType::MetricsMismatch,
                    format!("{label} metrics are internally inconsistent"),
                ));
            }
        }

        violations
    }

    /// Whether [`Schedule::verify`] finds no violations.
    pub fn is_consistent(&self) -> bool {
        self.verify().is_empty()
    }
}
