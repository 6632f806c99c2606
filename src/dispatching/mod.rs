//! Dispatching rules for non-preemptive CPU scheduling.
//!
//! A rule maps each process to an ordering key; the sequential executor
//! runs processes in ascending key order. FCFS, SJF and priority
//! scheduling differ only in their rule.
//!
//! # Usage
//!
//! ```
//! use cpu_sched::dispatching::{rules, sort_indices};
//! use cpu_sched::models::Process;
//!
//! let procs = vec![Process::new(0, 5), Process::new(1, 3), Process::new(2, 8)];
//! assert_eq!(sort_indices(&rules::Sjf, &procs), vec![1, 0, 2]);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4

pub mod rules;

use crate::models::{Algorithm, Process};
use std::fmt::Debug;

/// Ordering key returned by a dispatching rule.
///
/// Lower keys run first.
pub type RuleKey = i64;

/// A dispatching rule that orders ready processes.
///
/// # Key Convention
/// **Lower key = dispatched earlier.** Ties keep input order.
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "SJF").
    fn name(&self) -> &'static str;

    /// Ordering key of a process.
    fn key(&self, process: &Process) -> RuleKey;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}

/// Returns the indices of `processes` in dispatch order.
///
/// The sort is stable, so processes with equal keys keep their input order.
pub fn sort_indices(rule: &dyn DispatchingRule, processes: &[Process]) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..processes.len()).collect();
    indices.sort_by_key(|&i| rule.key(&processes[i]));
    indices
}

/// The rule that drives a non-preemptive algorithm.
///
/// Returns `None` for round-robin, which is not rule-driven.
pub fn rule_for(algorithm: Algorithm) -> Option<&'static dyn DispatchingRule> {
    match algorithm {
        Algorithm::Fcfs => Some(&rules::Fcfs),
        Algorithm::Sjf => Some(&rules::Sjf),
        Algorithm::Priority => Some(&rules::Priority),
        Algorithm::RoundRobin => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Process> {
        vec![
            Process::new(0, 5).with_priority(2),
            Process::new(1, 3).with_priority(1),
            Process::new(2, 8).with_priority(3),
        ]
    }

    #[test]
    fn test_sort_indices() {
        let procs = sample();
        assert_eq!(sort_indices(&rules::Fcfs, &procs), vec![0, 1, 2]);
        assert_eq!(sort_indices(&rules::Sjf, &procs), vec![1, 0, 2]);
        assert_eq!(sort_indices(&rules::Priority, &procs), vec![1, 0, 2]);
    }

    #[test]
    fn test_sort_is_stable() {
        let procs = vec![
            Process::new(0, 4),
            Process::new(1, 2),
            Process::new(2, 4),
            Process::new(3, 2),
        ];
        assert_eq!(sort_indices(&rules::Sjf, &procs), vec![1, 3, 0, 2]);
        // All priorities equal → input order.
        assert_eq!(sort_indices(&rules::Priority, &procs), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_sort_empty() {
        assert!(sort_indices(&rules::Sjf, &[]).is_empty());
    }

    #[test]
    fn test_rule_for() {
        assert_eq!(rule_for(Algorithm::Fcfs).unwrap().name(), "FCFS");
        assert_eq!(rule_for(Algorithm::Sjf).unwrap().name(), "SJF");
        assert_eq!(rule_for(Algorithm::Priority).unwrap().name(), "PRIORITY");
        assert!(rule_for(Algorithm::RoundRobin).is_none());
    }
}
