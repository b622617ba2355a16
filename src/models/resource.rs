//! Resource model.

use serde::{Deserialize, Serialize};

/// A resource processes contend for.
///
/// `capacity` is the number of simultaneous holders a counting semaphore
/// admits. A mutex discipline ignores it and admits exactly one holder —
/// the mutex is modeled as its own mechanism rather than a capacity-1
/// semaphore because it also disregards the access kind of a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    /// Unique resource name.
    pub name: String,
    /// Maximum simultaneous holders (≥ 1).
    pub capacity: u32,
}

impl Resource {
    /// Creates a resource.
    pub fn new(name: impl Into<String>, capacity: u32) -> Self {
        Self {
            name: name.into(),
            capacity,
        }
    }
}
