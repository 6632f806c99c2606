//! Scheduling algorithm selector.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SimulationError;

/// The closed set of supported scheduling disciplines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Algorithm {
    /// First-Come-First-Served, in input order.
    #[default]
    Fcfs,
    /// Shortest-Job-First, non-preemptive.
    Sjf,
    /// Static priority, non-preemptive (lower value runs first).
    Priority,
    /// Round-Robin with a fixed time quantum.
    RoundRobin,
}

impl Algorithm {
    /// All algorithms, in menu order.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Fcfs,
        Algorithm::Sjf,
        Algorithm::Priority,
        Algorithm::RoundRobin,
    ];

    /// Short display name.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Fcfs => "FCFS",
            Algorithm::Sjf => "SJF",
            Algorithm::Priority => "Priority",
            Algorithm::RoundRobin => "Round Robin",
        }
    }

    /// Whether a running process may be suspended before completion.
    pub fn is_preemptive(&self) -> bool {
        matches!(self, Algorithm::RoundRobin)
    }

    /// Whether process priorities influence the schedule.
    pub fn uses_priority(&self) -> bool {
        matches!(self, Algorithm::Priority)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = SimulationError;

    /// Parses a case-insensitive label such as `"FCFS"`, `"RR"` or `"Round Robin"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .map(|c| match c {
                ' ' | '-' => '_',
                c => c.to_ascii_uppercase(),
            })
            .collect();

        match normalized.as_str() {
            "FCFS" | "FIFO" => Ok(Algorithm::Fcfs),
            "SJF" | "SPT" => Ok(Algorithm::Sjf),
            "PRIORITY" => Ok(Algorithm::Priority),
            "RR" | "ROUND_ROBIN" | "ROUNDROBIN" => Ok(Algorithm::RoundRobin),
            _ => Err(SimulationError::UnknownAlgorithm(s.trim().to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_labels() {
        assert_eq!("FCFS".parse::<Algorithm>().unwrap(), Algorithm::Fcfs);
        assert_eq!("sjf".parse::<Algorithm>().unwrap(), Algorithm::Sjf);
        assert_eq!("Priority".parse::<Algorithm>().unwrap(), Algorithm::Priority);
        assert_eq!("RR".parse::<Algorithm>().unwrap(), Algorithm::RoundRobin);
        assert_eq!(
            "Round Robin".parse::<Algorithm>().unwrap(),
            Algorithm::RoundRobin
        );
        assert_eq!(
            " round_robin ".parse::<Algorithm>().unwrap(),
            Algorithm::RoundRobin
        );
    }

    #[test]
    fn test_parse_unknown() {
        let err = "LJF".parse::<Algorithm>().unwrap_err();
        assert_eq!(err, SimulationError::UnknownAlgorithm("LJF".into()));
        assert!("".parse::<Algorithm>().is_err());
    }

    #[test]
    fn test_display_roundtrips_through_parse() {
        for algo in Algorithm::ALL {
            assert_eq!(algo.to_string().parse::<Algorithm>().unwrap(), algo);
        }
    }

    #[test]
    fn test_flags() {
        assert!(Algorithm::RoundRobin.is_preemptive());
        assert!(!Algorithm::Sjf.is_preemptive());
        assert!(Algorithm::Priority.uses_priority());
        assert!(!Algorithm::Fcfs.uses_priority());
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&Algorithm::RoundRobin).unwrap();
        assert_eq!(json, "\"ROUND_ROBIN\"");
        let algo: Algorithm = serde_json::from_str("\"SJF\"").unwrap();
        assert_eq!(algo, Algorithm::Sjf);
    }
}
