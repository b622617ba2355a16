//! Mutual-exclusion mechanisms.
//!
//! Occupancy state is keyed by resource name in `BTreeMap`s so that no
//! behavior ever depends on an implementation-defined map order.

use std::collections::BTreeMap;

use crate::models::{AccessKind, Resource};

/// A mutual-exclusion mechanism: exclusive lock or counting semaphore.
///
/// The engine holds one instance and calls the four capability operations
/// through it. `reset` returns the mechanism to its initial state; the
/// simulator calls it at the start of every run so no occupancy leaks
/// between runs.
#[derive(Debug, Clone)]
pub struct Mechanism {
    inner: Inner,
}

#[derive(Debug, Clone)]
enum Inner {
    Mutex(MutexState),
    Semaphore(SemaphoreState),
}

/// Exclusive lock: one holder per resource, access kind disregarded.
#[derive(Debug, Clone, Default)]
struct MutexState {
    /// resource → holder pid
    owners: BTreeMap<String, String>,
}

/// Counting semaphore: up to `capacity` simultaneous holders per resource.
#[derive(Debug, Clone, Default)]
struct SemaphoreState {
    /// resource → configured capacity
    capacities: BTreeMap<String, u32>,
    /// resource → remaining grants
    remaining: BTreeMap<String, u32>,
    /// resource → holder pids, in grant order
    holders: BTreeMap<String, Vec<String>>,
}

impl Mechanism {
    /// Creates an exclusive-lock mechanism.
    ///
    /// The mutex needs no resource configuration: any named resource is
    /// lockable and starts unheld.
    pub fn mutex() -> Self {
        Self {
            inner: Inner::Mutex(MutexState::default()),
        }
    }

    /// Creates a counting-semaphore mechanism over the given resources.
    ///
    /// Requests against a resource not in the set are never granted.
    pub fn semaphore(resources: &[Resource]) -> Self {
        let mut state = SemaphoreState::default();
        for r in resources {
            state.capacities.insert(r.name.clone(), r.capacity);
        }
        state.restore();
        Self {
            inner: Inner::Semaphore(state),
        }
    }

    /// Mechanism name for display.
    pub fn name(&self) -> &'static str {
        match &self.inner {
            Inner::Mutex(_) => "MUTEX",
            Inner::Semaphore(_) => "SEMAPHORE",
        }
    }

    /// Attempts to acquire `resource` for `pid`.
    ///
    /// Under the mutex both `Read` and `Write` are exclusive — the kind is
    /// deliberately disregarded; that is the discipline's whole point, not
    /// an oversight.
    pub fn try_acquire(&mut self, resource: &str, pid: &str, _kind: AccessKind) -> bool {
        match &mut self.inner {
            Inner::Mutex(m) => {
                if m.owners.contains_key(resource) {
                    return false;
                }
                m.owners.insert(resource.to_string(), pid.to_string());
                true
            }
            Inner::Semaphore(s) => match s.remaining.get_mut(resource) {
                Some(n) if *n > 0 => {
                    *n -= 1;
                    s.holders
                        .entry(resource.to_string())
                        .or_default()
                        .push(pid.to_string());
                    true
                }
                _ => false,
            },
        }
    }

    /// Releases `resource` if `pid` actually holds it; otherwise a no-op.
    pub fn release(&mut self, resource: &str, pid: &str) {
        match &mut self.inner {
            Inner::Mutex(m) => {
                if m.owners.get(resource).map(String::as_str) == Some(pid) {
                    m.owners.remove(resource);
                }
            }
            Inner::Semaphore(s) => {
                if let Some(holders) = s.holders.get_mut(resource) {
                    if let Some(pos) = holders.iter().position(|h| h == pid) {
                        holders.remove(pos);
                        if let Some(n) = s.remaining.get_mut(resource) {
                            *n += 1;
                        }
                    }
                }
            }
        }
    }

    /// Whether `resource` could be acquired right now.
    pub fn is_available(&self, resource: &str) -> bool {
        match &self.inner {
            Inner::Mutex(m) => !m.owners.contains_key(resource),
            Inner::Semaphore(s) => s.remaining.get(resource).is_some_and(|n| *n > 0),
        }
    }

    /// Remaining simultaneous grants for `resource`.
    ///
    /// Mutex: 1 when free, 0 when held. Semaphore: remaining capacity
    /// (0 for unconfigured resources).
    pub fn available_count(&self, resource: &str) -> u32 {
        match &self.inner {
            Inner::Mutex(m) => u32::from(!m.owners.contains_key(resource)),
            Inner::Semaphore(s) => s.remaining.get(resource).copied().unwrap_or(0),
        }
    }

    /// Restores the initial state: no holders, full capacities.
    pub fn reset(&mut self) {
        match &mut self.inner {
            Inner::Mutex(m) => m.owners.clear(),
            Inner::Semaphore(s) => s.restore(),
        }
    }
}

impl SemaphoreState {
    fn restore(&mut self) {
        self.holders.clear();
        self.remaining = self.capacities.clone();
    }
}
