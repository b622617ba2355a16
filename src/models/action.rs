//! Access-request model.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of resource access requested.
///
/// Both kinds are exclusive under the mutex discipline; the distinction is
/// carried through to the event log for the consumer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccessKind {
    Read,
    Write,
}

impl fmt::Display for AccessKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessKind::Read => write!(f, "READ"),
            AccessKind::Write => write!(f, "WRITE"),
        }
    }
}

/// A single resource-access request.
///
/// Once granted, the request occupies the resource for exactly one cycle
/// and is then released automatically; a denied request persists and is
/// retried every following cycle until granted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    /// Requesting process.
    pub pid: String,
    /// Access kind.
    pub kind: AccessKind,
    /// Requested resource name.
    pub resource: String,
    /// Cycle at which the request is first made.
    pub cycle: u32,
}

impl Action {
    /// Creates an access request.
    pub fn new(
        pid: impl Into<String>,
        kind: AccessKind,
        resource: impl Into<String>,
        cycle: u32,
    ) -> Self {
        Self {
            pid: pid.into(),
            kind,
            resource: resource.into(),
            cycle,
        }
    }
}
