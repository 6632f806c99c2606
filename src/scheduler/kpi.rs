//! Schedule quality metrics (KPIs).
//!
//! Summarizes a simulated schedule into the aggregate figures usually
//! reported next to the per-process table.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan | End of the last entry |
//! | Avg Waiting | Mean of turnaround - burst |
//! | Avg Turnaround | Mean of completion - arrival |
//! | Avg Response | Mean of first start - arrival |
//! | Throughput | Processes completed per time unit |
//! | CPU Utilization | Busy time / makespan |
//! | Context Switches | CPU hand-overs between different processes |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2

use serde::{Deserialize, Serialize};

use crate::models::{ProcessMetrics, Schedule};

/// Aggregate performance indicators of one schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleKpi {
    /// Latest completion time.
    pub makespan: u64,
    /// Mean waiting time.
    pub avg_waiting_time: f64,
    /// Mean turnaround time.
    pub avg_turnaround_time: f64,
    /// Mean response time.
    pub avg_response_time: f64,
    /// Longest waiting time of any process.
    pub max_waiting_time: u64,
    /// Processes completed per time unit.
    pub throughput: f64,
    /// Fraction of the makespan the CPU was busy (0.0..=1.0).
    pub cpu_utilization: f64,
    /// Number of switches between different processes.
    pub context_switches: usize,
}

impl ScheduleKpi {
    /// Computes KPIs from a schedule.
    pub fn calculate(schedule: &Schedule) -> Self {
        let makespan = schedule.makespan();
        let count = schedule.process_count();

        let mean = |f: fn(&ProcessMetrics) -> u64| -> f64 {
            if count == 0 {
                0.0
            } else {
                schedule.metrics.iter().map(|m| f(m) as f64).sum::<f64>() / count as f64
            }
        };

        let (throughput, cpu_utilization) = if makespan == 0 {
            (0.0, 0.0)
        } else {
            (
                count as f64 / makespan as f64,
                schedule.total_burst() as f64 / makespan as f64,
            )
        };

        Self {
            makespan,
            avg_waiting_time: mean(|m| m.waiting_time),
            avg_turnaround_time: mean(|m| m.turnaround_time),
            avg_response_time: mean(|m| m.response_time),
            max_waiting_time: schedule
                .metrics
                .iter()
                .map(|m| m.waiting_time)
                .max()
                .unwrap_or(0),
            throughput,
            cpu_utilization,
            context_switches: schedule.context_switches(),
        }
    }
}
