//! CPU scheduling simulator.
//!
//! Simulates classical single-CPU scheduling disciplines over a fixed set
//! of processes, all ready at time 0, and reports per-process timing
//! metrics plus a timeline suitable for a Gantt chart.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Process`, `Algorithm`, `Schedule`,
//!   `ScheduleEntry`, `ProcessMetrics`
//! - **`validation`**: Input parsing and checks (burst times, priorities, quantum)
//! - **`dispatching`**: Ordering rules for non-preemptive disciplines (FCFS, SJF, Priority)
//! - **`scheduler`**: Sequential and round-robin execution, `simulate`, KPIs
//! - **`workload`**: Seeded random workloads
//!
//! # Example
//!
//! ```
//! use cpu_sched::models::Algorithm;
//! use cpu_sched::scheduler::{simulate, ScheduleKpi};
//!
//! let schedule = simulate(&[5, 3, 8], Algorithm::RoundRobin, None, Some(2)).unwrap();
//! assert_eq!(schedule.makespan(), 16);
//!
//! let kpi = ScheduleKpi::calculate(&schedule);
//! assert_eq!(kpi.makespan, 16);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod dispatching;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use error::{Result, SimulationError};
pub use models::{Algorithm, Process, ProcessMetrics, Schedule, ScheduleEntry};
pub use scheduler::{simulate, ScheduleKpi, SimulationRequest};
