//! Process model.
//!
//! A process is a unit of CPU work described only by its burst time and,
//! for priority scheduling, a static priority. All processes are ready at
//! time 0.

use serde::{Deserialize, Serialize};

/// A process submitted for one simulation run.
///
/// Immutable once constructed. The `index` is the position in the caller's
/// input and is the stable identity used to report results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Zero-based position in the original input.
    pub index: usize,
    /// Total CPU time required (positive).
    pub burst_time: u64,
    /// Static priority (lower value = higher priority). 0 when unused.
    pub priority: i32,
}

impl Process {
    /// Creates a process with priority 0.
    pub fn new(index: usize, burst_time: u64) -> Self {
        Self {
            index,
            burst_time,
            priority: 0,
        }
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// One-based process number for display.
    #[inline]
    pub fn number(&self) -> usize {
        self.index + 1
    }

    /// Gantt label ("P1", "P2", ...).
    pub fn label(&self) -> String {
        process_label(self.index)
    }
}

/// Gantt label for a zero-based process index.
pub(crate) fn process_label(index: usize) -> String {
    format!("P{}", index + 1)
}
