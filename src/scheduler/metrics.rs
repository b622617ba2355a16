//! Schedule timing metrics.
//!
//! Computes standard per-run performance indicators from a completed
//! scheduler outcome.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Waiting | mean of `waiting_time` |
//! | Avg Turnaround | mean of `finish_time - arrival_time` |
//! | Avg Completion | mean of `finish_time` |
//! | Makespan | latest slice end |
//! | CPU Utilization | total burst / makespan |
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.2

use serde::{Deserialize, Serialize};

use super::ScheduleOutcome;

/// Performance indicators of one scheduler run.
///
/// All averages are over the completed processes; an empty outcome yields
/// all-zero metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleMetrics {
    /// Mean cycles spent ready but not running.
    pub avg_waiting_time: f64,
    /// Mean `finish_time - arrival_time`.
    pub avg_turnaround_time: f64,
    /// Mean completion cycle.
    pub avg_completion_time: f64,
    /// Total elapsed cycles.
    pub makespan: u32,
    /// Fraction of the makespan the CPU was busy (0.0..1.0).
    pub cpu_utilization: f64,
}

impl ScheduleMetrics {
    /// Computes metrics from a scheduler outcome.
    pub fn calculate(outcome: &ScheduleOutcome) -> Self {
        let count = outcome.processes.len();
        if count == 0 {
            return Self {
                avg_waiting_time: 0.0,
                avg_turnaround_time: 0.0,
                avg_completion_time: 0.0,
                makespan: 0,
                cpu_utilization: 0.0,
            };
        }

        let mut total_waiting = 0u64;
        let mut total_turnaround = 0u64;
        let mut total_completion = 0u64;
        let mut total_burst = 0u64;

        for p in &outcome.processes {
            total_waiting += u64::from(p.waiting_time.unwrap_or(0));
            total_turnaround += u64::from(p.turnaround_time().unwrap_or(0));
            total_completion += u64::from(p.finish_time.unwrap_or(0));
            total_burst += u64::from(p.burst_time);
        }

        let makespan = outcome.makespan();
        let cpu_utilization = if makespan == 0 {
            0.0
        } else {
            total_burst as f64 / f64::from(makespan)
        };

        Self {
            avg_waiting_time: total_waiting as f64 / count as f64,
            avg_turnaround_time: total_turnaround as f64 / count as f64,
            avg_completion_time: total_completion as f64 / count as f64,
            makespan,
            cpu_utilization,
        }
    }
}
