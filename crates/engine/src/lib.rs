//! Virtual-memory paging simulator library.
//!
//! This crate implements a deterministic simulation engine for the
//! memory-translation path of an operating system:
//! 1. **Policies:** Pluggable page replacement (FIFO, LRU, LFU, Optimal, Clock).
//! 2. **Translation:** A fully associative LRU TLB in front of an authoritative page table.
//! 3. **Analysis:** Sliding-window working-set tracking and thrashing detection.
//! 4. **Orchestration:** A per-access state machine producing a verifiable trace and
//!    aggregate statistics, plus a multi-policy comparison runner.
//! 5. **Workloads:** Deterministic synthetic reference-string generators.

/// Simulator configuration (defaults, algorithm selection, validation).
pub mod config;
/// Engine components (replacement policies, page table, TLB, working set).
pub mod core;
/// Validation error types.
pub mod error;
/// Simulation orchestration (single runs and multi-policy comparisons).
pub mod sim;
/// Step records, aggregate results, and the access-time model.
pub mod stats;
/// Synthetic reference-string workloads.
pub mod workloads;

/// Replacement algorithm selector; the closed set of policy variants.
pub use crate::config::Algorithm;
/// Root configuration type; use `SimulationConfig::default()` or deserialize from JSON.
pub use crate::config::SimulationConfig;
/// Opaque page identifier.
pub use crate::core::Page;
/// Validation rejections reported before any step executes.
pub use crate::error::EngineError;
/// Single-run orchestrator; construct with `Simulator::new`.
pub use crate::sim::Simulator;
/// Multi-policy fan-out over one reference string.
pub use crate::sim::{ComparisonResult, run_comparison};
/// Per-run trace and aggregate statistics.
pub use crate::stats::{SimulationResult, SimulationStep};
