//! Mutual-exclusion mechanisms and the cycle-driven contention simulator.
//!
//! A `Mechanism` holds resource-occupancy state behind one capability
//! surface (`try_acquire` / `release` / `is_available` / `reset`) with two
//! disciplines: an exclusive lock and a counting semaphore. The
//! `SyncSimulator` drives a cycle-by-cycle loop over a list of access
//! requests, classifying each as granted or waiting at every cycle and
//! emitting the ordered `SyncEvent` log.
//!
//! The domain has exactly two disciplines, so the mechanism is a closed
//! sum type rather than an open trait object.
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 6-7
//! - Dijkstra (1965), "Cooperating Sequential Processes"

mod engine;
mod mechanism;
mod metrics;

pub use engine::SyncSimulator;
pub use mechanism::Mechanism;
pub use metrics::SyncMetrics;
