//! Metrics and timeline assembly.
//!
//! Every discipline produces only a chronological list of entries. The
//! per-process metrics are derived here with one formula for all of them:
//! completion is the end of a process's last entry, turnaround equals
//! completion (arrival is 0), and waiting is turnaround minus burst.

use std::num::NonZeroU64;

use crate::models::{Algorithm, Process, ProcessMetrics, Schedule, ScheduleEntry};

/// Combines a timeline with the processes it ran into a [`Schedule`].
///
/// `processes` must come from validation: `processes[i].index == i`.
/// `entries` must be chronological and reference only those indices.
pub(crate) fn assemble(
    algorithm: Algorithm,
    quantum: Option<NonZeroU64>,
    processes: &[Process],
    entries: Vec<ScheduleEntry>,
) -> Schedule {
    let n = processes.len();
    let mut first_start: Vec<Option<u64>> = vec![None; n];
    let mut completion: Vec<u64> = vec![0; n];

    for e in &entries {
        first_start[e.process_index].get_or_insert(e.start_time);
        completion[e.process_index] = completion[e.process_index].max(e.end_time);
    }

    let mut schedule = Schedule::new(algorithm);
    if let Some(q) = quantum {
        schedule = schedule.with_quantum(q.get());
    }
    schedule.metrics = processes
        .iter()
        .map(|p| {
            ProcessMetrics::new(
                p.index,
                p.burst_time,
                p.priority,
                first_start[p.index].unwrap_or(0),
                completion[p.index],
            )
        })
        .collect();
    schedule.entries = entries;
    schedule
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assemble_sequential() {
        let procs = vec![Process::new(0, 5), Process::new(1, 3), Process::new(2, 8)];
        // SJF order: P2, P1, P3.
        let entries = vec![
            ScheduleEntry::new(1, 0, 3),
            ScheduleEntry::new(0, 3, 8),
            ScheduleEntry::new(2, 8, 16),
        ];
        let s = assemble(Algorithm::Sjf, None, &procs, entries);
        assert_eq!(s.waiting_times(), vec![3, 0, 8]);
        assert_eq!(s.turnaround_times(), vec![8, 3, 16]);
        assert_eq!(s.quantum, None);
        assert!(s.is_consistent());
    }

    #[test]
    fn test_assemble_preemptive() {
        let procs = vec![Process::new(0, 3), Process::new(1, 2)];
        let entries = vec![
            ScheduleEntry::new(0, 0, 2),
            ScheduleEntry::new(1, 2, 4),
            ScheduleEntry::new(0, 4, 5),
        ];
        let s = assemble(Algorithm::RoundRobin, NonZeroU64::new(2), &procs, entries);
        let m0 = s.metrics_for_process(0).unwrap();
        assert_eq!(m0.first_start_time, 0);
        assert_eq!(m0.completion_time, 5);
        assert_eq!(m0.waiting_time, 2);
        let m1 = s.metrics_for_process(1).unwrap();
        assert_eq!(m1.response_time, 2);
        assert_eq!(m1.waiting_time, 2);
        assert_eq!(s.quantum, Some(2));
        assert!(s.is_consistent());
    }
}
