//! Cycle-driven contention resolution.
//!
//! Each simulated cycle proceeds in a fixed order: release the previous
//! cycle's grants, build the contention pool (carried-over pending
//! requests first, then this cycle's new arrivals), then resolve the pool
//! in FIFO order against the mechanism state as mutated by the releases.
//! A granted request occupies its resource for exactly one cycle.
//!
//! The loop terminates at a fixed point — active set, pending pool, and
//! unconsumed actions all empty — never after a fixed lookahead margin, so
//! waiting chains drain fully regardless of queue depth.

use std::collections::VecDeque;

use crate::models::{AccessState, Action, SyncEvent};

use super::Mechanism;

/// Cycle-driven synchronization simulator.
///
/// Holds the chosen mechanism and runs a full simulation per call. Every
/// run begins with a mechanism `reset`, so no occupancy state leaks
/// between runs.
///
/// # Example
///
/// ```
/// use cyclesim::models::{AccessKind, AccessState, Action};
/// use cyclesim::sync::{Mechanism, SyncSimulator};
///
/// let actions = vec![
///     Action::new("P1", AccessKind::Write, "R1", 0),
///     Action::new("P2", AccessKind::Write, "R1", 0),
/// ];
/// let mut sim = SyncSimulator::new(Mechanism::mutex());
/// let events = sim.run(&actions);
///
/// // P1 is granted at cycle 0; P2 waits, then is granted at cycle 1.
/// assert_eq!(events[0].state, AccessState::Accessed);
/// assert_eq!(events[1].state, AccessState::Waiting);
/// assert_eq!((events[2].pid.as_str(), events[2].cycle), ("P2", 1));
/// ```
#[derive(Debug, Clone)]
pub struct SyncSimulator {
    mechanism: Mechanism,
}

impl SyncSimulator {
    /// Creates a simulator over the given mechanism.
    pub fn new(mechanism: Mechanism) -> Self {
        Self { mechanism }
    }

    /// The mechanism driving grant decisions.
    pub fn mechanism(&self) -> &Mechanism {
        &self.mechanism
    }

    /// Simulates all requests to completion and returns the event log.
    ///
    /// Events are emitted cycle-major, FIFO pool order within a cycle.
    /// Empty input yields an empty log.
    pub fn run(&mut self, actions: &[Action]) -> Vec<SyncEvent> {
        self.mechanism.reset();

        let mut upcoming = actions.to_vec();
        // Stable: same-cycle requests keep input order.
        upcoming.sort_by_key(|a| a.cycle);

        let mut events = Vec::new();
        let mut pending: VecDeque<Action> = VecDeque::new();
        let mut active: Vec<Action> = Vec::new();
        let mut next = 0;
        let mut cycle = 0;

        loop {
            // Occupancy is exactly one cycle: everything granted last
            // cycle is released before this cycle's resolution.
            for a in active.drain(..) {
                self.mechanism.release(&a.resource, &a.pid);
            }

            // Contention pool: pending requests keep their FIFO arrival
            // order ahead of this cycle's new arrivals.
            let mut pool: Vec<Action> = pending.drain(..).collect();
            while next < upcoming.len() && upcoming[next].cycle <= cycle {
                pool.push(upcoming[next].clone());
                next += 1;
            }

            let mut granted = 0;
            for a in pool {
                if self.mechanism.try_acquire(&a.resource, &a.pid, a.kind) {
                    events.push(SyncEvent::new(
                        a.pid.as_str(),
                        a.resource.as_str(),
                        a.kind,
                        cycle,
                        AccessState::Accessed,
                    ));
                    active.push(a);
                    granted += 1;
                } else {
                    events.push(SyncEvent::new(
                        a.pid.as_str(),
                        a.resource.as_str(),
                        a.kind,
                        cycle,
                        AccessState::Waiting,
                    ));
                    pending.push_back(a);
                }
            }

            let consumed = next == upcoming.len();
            if consumed && active.is_empty() && pending.is_empty() {
                break; // fixed point: nothing held, nothing queued, nothing to come
            }
            // With no grant this cycle and no release to come, the pending
            // requests can never be satisfied (malformed input such as an
            // unconfigured resource); stop instead of spinning.
            if consumed && granted == 0 && active.is_empty() {
                break;
            }

            cycle += 1;
            if active.is_empty() && pending.is_empty() {
                // Idle until the next request arrives.
                cycle = cycle.max(upcoming[next].cycle);
            }
        }

        events
    }
}
