//! Scheduling and synchronization simulation core.
//!
//! Computes, from a declarative description of processes, the exact timing
//! outcome of five CPU scheduling policies, and, from a declarative
//! description of resource-access requests, the exact contention outcome of
//! two mutual-exclusion disciplines over discrete simulated cycles. Pure
//! computation — no threads, no wall-clock time; a "cycle" is one logical
//! simulation step. A presentation layer supplies the inputs and renders
//! the outputs.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Process`, `ExecutionSlice`, `Resource`,
//!   `Action`, `SyncEvent`
//! - **`scheduler`**: Scheduling policies (FIFO, SJF, SRTF, Round Robin,
//!   Priority with aging) and timing metrics
//! - **`sync`**: Mutual-exclusion mechanisms (Mutex, Semaphore) and the
//!   cycle-driven contention simulator
//! - **`loader`**: Text-descriptor parsing for the three input row shapes
//! - **`validation`**: Structural integrity checks (duplicate IDs,
//!   dangling resource/process references)
//!
//! # Determinism
//!
//! Identical inputs produce byte-identical outputs. Every container whose
//! iteration order could influence a tie-break or the emission order of an
//! event is either insertion-ordered or explicitly sorted; tie-break rules
//! are documented on the policies that use them.
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5-7
//! - Tanenbaum & Bos (2015), "Modern Operating Systems", Ch. 2
//! - Stallings (2018), "Operating Systems: Internals and Design Principles"

pub mod loader;
pub mod models;
pub mod scheduler;
pub mod sync;
pub mod validation;
