//! Preemptive round-robin execution.
//!
//! # Algorithm
//!
//! A FIFO ready queue starts with every process in input order. Repeatedly
//! dequeue the head:
//! - `remaining > quantum`: run one quantum, re-enqueue at the tail.
//! - otherwise: run the remaining time; the process completes.
//!
//! The clock ends at the sum of all burst times. No process starves: each
//! unfinished process is served once per pass through the queue.
//!
//! # Complexity
//! O(Σ ceil(burst / quantum)) slices.

use log::trace;
use std::collections::VecDeque;
use std::num::NonZeroU64;

use crate::models::{Process, ScheduleEntry};

/// A queued process and its outstanding CPU time.
#[derive(Debug, Clone, Copy)]
struct ReadyProcess {
    index: usize,
    remaining: u64,
}

/// Fixed-quantum round-robin scheduler.
///
/// # Example
///
/// ```
/// use std::num::NonZeroU64;
/// use cpu_sched::models::Process;
/// use cpu_sched::scheduler::RoundRobinScheduler;
///
/// let quantum = NonZeroU64::new(2).unwrap();
/// let procs = vec![Process::new(0, 3), Process::new(1, 2)];
/// let entries = RoundRobinScheduler::new(quantum).timeline(&procs);
/// assert_eq!(entries.len(), 3);
/// assert_eq!(entries.last().unwrap().end_time, 5);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RoundRobinScheduler {
    quantum: NonZeroU64,
}

impl RoundRobinScheduler {
    /// Creates a scheduler with the given time slice.
    pub fn new(quantum: NonZeroU64) -> Self {
        Self { quantum }
    }

    /// The time slice.
    pub fn quantum(&self) -> u64 {
        self.quantum.get()
    }

    /// Builds the chronological timeline of slices.
    pub fn timeline(&self, processes: &[Process]) -> Vec<ScheduleEntry> {
        let quantum = self.quantum.get();
        let mut queue: VecDeque<ReadyProcess> = processes
            .iter()
            .map(|p| ReadyProcess {
                index: p.index,
                remaining: p.burst_time,
            })
            .collect();
        let mut entries = Vec::new();
        let mut current_time: u64 = 0;

        while let Some(mut ready) = queue.pop_front() {
            let slice = ready.remaining.min(quantum);
            let start = current_time;
            current_time += slice;
            entries.push(ScheduleEntry::new(ready.index, start, current_time));

            if ready.remaining > quantum {
                ready.remaining -= quantum;
                trace!(
                    "P{} runs [{start}, {current_time}), {} left",
                    ready.index + 1,
                    ready.remaining
                );
                queue.push_back(ready);
            } else {
                trace!("P{} completes at {current_time}", ready.index + 1);
            }
        }

        entries
    }
}
