//! CPU scheduling domain models.
//!
//! Provides the data types shared by every scheduling discipline:
//! the submitted processes, the algorithm selector, and the resulting
//! timeline with its per-process metrics.
//!
//! # Glossary
//!
//! | Term | Meaning |
//! |------|---------|
//! | Burst time | Total CPU time a process needs |
//! | Quantum | Round-robin time slice |
//! | Turnaround time | Completion time minus arrival (always 0 here) |
//! | Waiting time | Turnaround time minus burst time |

mod algorithm;
mod process;
mod schedule;

pub use algorithm::Algorithm;
pub use process::Process;
pub use schedule::{ProcessMetrics, Schedule, ScheduleEntry, Violation, ViolationType};
