//! Non-preemptive sequential execution.
//!
//! # Algorithm
//!
//! 1. Order processes by a dispatching rule (stable, ties keep input order).
//! 2. Run each process to completion, back to back from time 0:
//!    `start[π(0)] = 0`, `start[π(i)] = start[π(i-1)] + burst[π(i-1)]`.
//!
//! Every entry keeps the original process index, so callers see results
//! against input positions no matter how the rule reordered them.
//!
//! # Complexity
//! O(n log n) for the sort, O(n) for the timeline.

use log::trace;

use crate::dispatching::{sort_indices, DispatchingRule};
use crate::models::{Process, ScheduleEntry};

/// Runs processes to completion in the order a dispatching rule dictates.
///
/// # Example
///
/// ```
/// use cpu_sched::dispatching::rules;
/// use cpu_sched::models::Process;
/// use cpu_sched::scheduler::SequentialScheduler;
///
/// let procs = vec![Process::new(0, 5), Process::new(1, 3), Process::new(2, 8)];
/// let entries = SequentialScheduler::new(&rules::Sjf).timeline(&procs);
/// assert_eq!(entries[0].process_index, 1);
/// assert_eq!(entries[2].end_time, 16);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SequentialScheduler<'r> {
    rule: &'r dyn DispatchingRule,
}

impl<'r> SequentialScheduler<'r> {
    /// Creates a scheduler driven by `rule`.
    pub fn new(rule: &'r dyn DispatchingRule) -> Self {
        Self { rule }
    }

    /// Name of the driving rule.
    pub fn rule_name(&self) -> &'static str {
        self.rule.name()
    }

    /// Dispatch order as indices into `processes`.
    pub fn order(&self, processes: &[Process]) -> Vec<usize> {
        sort_indices(self.rule, processes)
    }

    /// Builds the chronological timeline, one entry per process.
    pub fn timeline(&self, processes: &[Process]) -> Vec<ScheduleEntry> {
        run_in_order(processes, &self.order(processes))
    }
}

/// Runs `processes` back to back in the given order.
///
/// `order` holds positions into `processes`; each emitted entry carries the
/// process's original `index`.
pub fn run_in_order(processes: &[Process], order: &[usize]) -> Vec<ScheduleEntry> {
    let mut entries = Vec::with_capacity(order.len());
    let mut current_time: u64 = 0;

    for &pos in order {
        let process = &processes[pos];
        let end = current_time + process.burst_time;
        trace!("{} runs [{current_time}, {end})", process.label());
        entries.push(ScheduleEntry::new(process.index, current_time, end));
        current_time = end;
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatching::rules;

    fn sample() -> Vec<Process> {
        vec![
            Process::new(0, 5).with_priority(2),
            Process::new(1, 3).with_priority(1),
            Process::new(2, 8).with_priority(3),
        ]
    }

    #[test]
    fn test_fcfs_timeline() {
        let entries = SequentialScheduler::new(&rules::Fcfs).timeline(&sample());
        let spans: Vec<_> = entries
            .iter()
            .map(|e| (e.process_index, e.start_time, e.end_time))
            .collect();
        assert_eq!(spans, vec![(0, 0, 5), (1, 5, 8), (2, 8, 16)]);
    }

    #[test]
    fn test_sjf_keeps_original_indices() {
        let entries = SequentialScheduler::new(&rules::Sjf).timeline(&sample());
        let spans: Vec<_> = entries
            .iter()
            .map(|e| (e.process_index, e.start_time, e.end_time))
            .collect();
        assert_eq!(spans, vec![(1, 0, 3), (0, 3, 8), (2, 8, 16)]);
    }

    #[test]
    fn test_priority_order() {
        let scheduler = SequentialScheduler::new(&rules::Priority);
        assert_eq!(scheduler.rule_name(), "PRIORITY");
        assert_eq!(scheduler.order(&sample()), vec![1, 0, 2]);
    }

    #[test]
    fn test_run_in_custom_order() {
        let entries = run_in_order(&sample(), &[2, 0, 1]);
        assert_eq!(entries[0], ScheduleEntry::new(2, 0, 8));
        assert_eq!(entries[1], ScheduleEntry::new(0, 8, 13));
        assert_eq!(entries[2], ScheduleEntry::new(1, 13, 16));
    }

    #[test]
    fn test_single_process() {
        let entries = SequentialScheduler::new(&rules::Fcfs).timeline(&[Process::new(0, 7)]);
        assert_eq!(entries, vec![ScheduleEntry::new(0, 0, 7)]);
    }
}
