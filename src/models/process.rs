//! Process model.
//!
//! A process is the schedulable unit: it needs `burst_time` cycles of CPU,
//! becomes eligible at `arrival_time`, and carries a `priority` used only
//! by the priority policy (lower value = more urgent).
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 3.1

use serde::{Deserialize, Serialize};

/// A process to be scheduled.
///
/// The timing fields (`start_time`, `finish_time`, `waiting_time`) are
/// `None` until a scheduler run computes them. `remaining_time` is scratch
/// state for the preemptive policies; every run re-derives it from
/// `burst_time`, so a `Process` can be fed to any number of runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier.
    pub pid: String,
    /// Total CPU cycles required.
    pub burst_time: u32,
    /// Cycle at which the process becomes ready.
    pub arrival_time: u32,
    /// Scheduling priority (lower = more urgent).
    pub priority: i32,
    /// Cycle of first dispatch. Computed.
    pub start_time: Option<u32>,
    /// Cycle of completion. Computed.
    pub finish_time: Option<u32>,
    /// Cycles spent ready but not running. Computed:
    /// `(finish_time - arrival_time) - burst_time`.
    pub waiting_time: Option<u32>,
    /// Cycles of work still owed. Scratch for preemptive policies.
    pub remaining_time: u32,
}

impl Process {
    /// Creates a process with the given pid, burst, and arrival time.
    pub fn new(pid: impl Into<String>, burst_time: u32, arrival_time: u32) -> Self {
        Self {
            pid: pid.into(),
            burst_time,
            arrival_time,
            priority: 0,
            start_time: None,
            finish_time: None,
            waiting_time: None,
            remaining_time: burst_time,
        }
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Turnaround time: `finish_time - arrival_time`.
    ///
    /// `None` until the process has been scheduled.
    pub fn turnaround_time(&self) -> Option<u32> {
        self.finish_time.map(|f| f - self.arrival_time)
    }

    /// Whether a scheduler run has completed this process.
    pub fn is_complete(&self) -> bool {
        self.finish_time.is_some()
    }
}
