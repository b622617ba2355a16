//! Synchronization event model.

use serde::{Deserialize, Serialize};

use super::AccessKind;

/// Outcome of a request at one observed cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccessState {
    /// The request was granted this cycle.
    Accessed,
    /// The request was denied this cycle and stays pending.
    Waiting,
}

/// One output record per request per cycle it is observed.
///
/// The simulator appends events in emission order: cycle-major, and within
/// a cycle in the FIFO order of the contention pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncEvent {
    /// Requesting process.
    pub pid: String,
    /// Requested resource.
    pub resource: String,
    /// Access kind of the underlying request.
    pub kind: AccessKind,
    /// Cycle the observation belongs to.
    pub cycle: u32,
    /// Granted or waiting.
    pub state: AccessState,
}

impl SyncEvent {
    /// Creates an event record.
    pub fn new(
        pid: impl Into<String>,
        resource: impl Into<String>,
        kind: AccessKind,
        cycle: u32,
        state: AccessState,
    ) -> Self {
        Self {
            pid: pid.into(),
            resource: resource.into(),
            kind,
            cycle,
            state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_fields() {
        let e = SyncEvent::new("P1", "R1", AccessKind::Read, 2, AccessState::Waiting);
        assert_eq!(e.pid, "P1");
        assert_eq!(e.resource, "R1");
        assert_eq!(e.cycle, 2);
        assert_eq!(e.state, AccessState::Waiting);
    }
}
