//! Multi-algorithm comparison.
//!
//! Runs every replacement algorithm over the same reference string, each on
//! its own isolated simulator. Variants share no mutable state, so they run
//! on scoped worker threads, and the fan-out waits for all of them before
//! producing the combined result. Picking a "best" variant is the caller's
//! business; the engine reports raw counts only.

use std::collections::BTreeMap;
use std::thread;

use serde::Serialize;
use tracing::debug;

use crate::config::{Algorithm, SimulationConfig};
use crate::core::Page;
use crate::error::{EngineError, InputError};
use crate::sim::Simulator;
use crate::stats::SimulationResult;

/// Results of running every algorithm over one reference string.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonResult {
    /// Per-algorithm results, keyed in [`Algorithm::ALL`] order.
    pub results: BTreeMap<Algorithm, SimulationResult>,
}

impl ComparisonResult {
    /// Result for one algorithm.
    pub fn get(&self, algorithm: Algorithm) -> Option<&SimulationResult> {
        self.results.get(&algorithm)
    }
}

/// Runs every [`Algorithm`] variant over `reference` under `config`.
///
/// The configuration (minus the `algorithm` field, which is overridden per
/// variant) and the reference string are shared by all variants, so they
/// are validated once up front; a failure aborts the whole comparison
/// before any variant starts. Each variant then executes on its own worker
/// with its own page table, TLB, and tracker.
///
/// # Errors
///
/// The same validation rejections as [`Simulator::new`].
pub fn run_comparison(
    config: &SimulationConfig,
    reference: &[Page],
) -> Result<ComparisonResult, EngineError> {
    config.validate()?;
    if reference.is_empty() {
        return Err(InputError::EmptyReferenceString.into());
    }

    // Build all simulators before spawning so a validation problem can
    // never surface halfway through the fan-out.
    let mut simulators = Vec::with_capacity(Algorithm::ALL.len());
    for algorithm in Algorithm::ALL {
        let variant = SimulationConfig {
            algorithm,
            ..config.clone()
        };
        simulators.push(Simulator::new(variant, reference.to_vec())?);
    }

    debug!(
        variants = Algorithm::ALL.len(),
        accesses = reference.len(),
        "comparison fan-out"
    );

    let mut results = BTreeMap::new();
    thread::scope(|scope| {
        let handles: Vec<_> = simulators
            .into_iter()
            .map(|sim| scope.spawn(move || sim.run()))
            .collect();
        for handle in handles {
            // A panicked variant is dropped rather than poisoning the rest.
            if let Ok(result) = handle.join() {
                results.insert(result.algorithm, result);
            }
        }
    });

    Ok(ComparisonResult { results })
}
