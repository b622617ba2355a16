//! Contention metrics.
//!
//! Condenses a synchronization event log into per-process and per-resource
//! summaries for the consumer. Maps are `BTreeMap` so reports enumerate in
//! a stable order.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::{AccessState, SyncEvent};

/// Summary of one synchronization run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncMetrics {
    /// Number of simulated cycles (latest event cycle + 1; 0 when empty).
    pub total_cycles: u32,
    /// Cycles each process spent waiting (pid → count).
    pub waiting_cycles: BTreeMap<String, u32>,
    /// Grants per resource across the whole run.
    pub access_counts: BTreeMap<String, u32>,
    /// Largest number of simultaneous grants per resource in any one cycle.
    pub peak_concurrency: BTreeMap<String, u32>,
}

impl SyncMetrics {
    /// Computes metrics from an event log.
    pub fn calculate(events: &[SyncEvent]) -> Self {
        let mut metrics = Self::default();
        let mut grants_per_cycle: BTreeMap<(&str, u32), u32> = BTreeMap::new();

        for e in events {
            metrics.total_cycles = metrics.total_cycles.max(e.cycle + 1);
            match e.state {
                AccessState::Waiting => {
                    *metrics.waiting_cycles.entry(e.pid.clone()).or_insert(0) += 1;
                }
                AccessState::Accessed => {
                    *metrics.access_counts.entry(e.resource.clone()).or_insert(0) += 1;
                    *grants_per_cycle
                        .entry((e.resource.as_str(), e.cycle))
                        .or_insert(0) += 1;
                }
            }
        }

        for ((resource, _), count) in grants_per_cycle {
            let peak = metrics
                .peak_concurrency
                .entry(resource.to_string())
                .or_insert(0);
            *peak = (*peak).max(count);
        }

        metrics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AccessKind, Action, Resource};
    use crate::sync::{Mechanism, SyncSimulator};

    #[test]
    fn test_metrics_from_contended_mutex() {
        let mut sim = SyncSimulator::new(Mechanism::mutex());
        let events = sim.run(&[
            Action::new("P1", AccessKind::Write, "R1", 0),
            Action::new("P2", AccessKind::Write, "R1", 0),
            Action::new("P3", AccessKind::Write, "R1", 0),
        ]);
        let m = SyncMetrics::calculate(&events);

        assert_eq!(m.total_cycles, 3);
        assert_eq!(m.waiting_cycles.get("P1"), None);
        assert_eq!(m.waiting_cycles.get("P2"), Some(&1));
        assert_eq!(m.waiting_cycles.get("P3"), Some(&2));
        assert_eq!(m.access_counts.get("R1"), Some(&3));
        assert_eq!(m.peak_concurrency.get("R1"), Some(&1));
    }

    #[test]
    fn test_peak_concurrency_under_semaphore() {
        let resources = vec![Resource::new("R1", 2)];
        let mut sim = SyncSimulator::new(Mechanism::semaphore(&resources));
        let events = sim.run(&[
            Action::new("P1", AccessKind::Read, "R1", 0),
            Action::new("P2", AccessKind::Read, "R1", 0),
            Action::new("P3", AccessKind::Read, "R1", 0),
        ]);
        let m = SyncMetrics::calculate(&events);

        assert_eq!(m.peak_concurrency.get("R1"), Some(&2));
        assert_eq!(m.access_counts.get("R1"), Some(&3));
    }

    #[test]
    fn test_empty_log() {
        let m = SyncMetrics::calculate(&[]);
        assert_eq!(m.total_cycles, 0);
        assert!(m.waiting_cycles.is_empty());
        assert!(m.access_counts.is_empty());
        assert!(m.peak_concurrency.is_empty());
    }
}
