//! Built-in dispatching rules.
//!
//! # Key Convention
//! All rules return lower keys for processes that should run first.

use super::{DispatchingRule, RuleKey};
use crate::models::Process;

/// First-Come-First-Served.
///
/// Keeps the input order. All processes arrive at time 0, so input
/// position stands in for arrival order.
#[derive(Debug, Clone, Copy)]
pub struct Fcfs;

impl DispatchingRule for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn key(&self, process: &Process) -> RuleKey {
        process.index as RuleKey
    }

    fn description(&self) -> &'static str {
        "First-Come-First-Served"
    }
}

/// Shortest Job First.
///
/// Runs shorter bursts first. Minimizes average waiting time when all
/// jobs are ready together.
///
/// # Reference
/// Smith (1956), optimal for minimizing mean flow time on single machine.
#[derive(Debug, Clone, Copy)]
pub struct Sjf;

impl DispatchingRule for Sjf {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn key(&self, process: &Process) -> RuleKey {
        process.burst_time as RuleKey
    }

    fn description(&self) -> &'static str {
        "Shortest Job First"
    }
}

/// Static priority.
///
/// Lower priority value runs first.
#[derive(Debug, Clone, Copy)]
pub struct Priority;

impl DispatchingRule for Priority {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn key(&self, process: &Process) -> RuleKey {
        RuleKey::from(process.priority)
    }

    fn description(&self) -> &'static str {
        "Static Priority"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fcfs() {
        assert!(Fcfs.key(&Process::new(0, 9)) < Fcfs.key(&Process::new(1, 1)));
    }

    #[test]
    fn test_sjf() {
        let short = Process::new(1, 3);
        let long = Process::new(0, 8);
        assert!(Sjf.key(&short) < Sjf.key(&long));
    }

    #[test]
    fn test_priority() {
        let high = Process::new(1, 8).with_priority(-1);
        let low = Process::new(0, 1).with_priority(5);
        assert!(Priority.key(&high) < Priority.key(&low));
    }

    #[test]
    fn test_descriptions() {
        assert_eq!(Fcfs.description(), "First-Come-First-Served");
        assert_eq!(Sjf.description(), "Shortest Job First");
        assert_eq!(Priority.description(), "Static Priority");
    }
}
