//! CPU scheduling execution models and KPI evaluation.
//!
//! Two execution models cover all four disciplines:
//!
//! - [`SequentialScheduler`]: non-preemptive, runs each process to
//!   completion in the order of a dispatching rule (FCFS, SJF, Priority).
//! - [`RoundRobinScheduler`]: preemptive, fixed time quantum over a FIFO
//!   ready queue.
//!
//! [`simulate`] validates input, dispatches on the algorithm, and
//! assembles the timeline and per-process metrics. [`ScheduleKpi`]
//! summarizes the result.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3-4

mod kpi;
mod metrics;
mod round_robin;
mod sequential;
mod simulate;

pub use kpi::ScheduleKpi;
pub use round_robin::RoundRobinScheduler;
pub use sequential::{run_in_order, SequentialScheduler};
pub use simulate::{simulate, SimulationRequest};
