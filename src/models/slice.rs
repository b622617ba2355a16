//! Execution slice model.

use serde::{Deserialize, Serialize};

/// One contiguous block of CPU allocated to a process.
///
/// A scheduler run emits slices in start-time order. For any one process
/// its slices never overlap and their durations sum to the process's
/// `burst_time` exactly. A zero-burst process yields a single
/// zero-duration slice marking its dispatch instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionSlice {
    /// Process the CPU was granted to.
    pub pid: String,
    /// First cycle of the block.
    pub start_time: u32,
    /// Number of cycles in the block.
    pub duration: u32,
}

impl ExecutionSlice {
    /// Creates a slice.
    pub fn new(pid: impl Into<String>, start_time: u32, duration: u32) -> Self {
        Self {
            pid: pid.into(),
            start_time,
            duration,
        }
    }

    /// First cycle after the block: `start_time + duration`.
    #[inline]
    pub fn end_time(&self) -> u32 {
        self.start_time + self.duration
    }
}
