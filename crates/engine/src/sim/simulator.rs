//! Single-run simulation orchestrator.
//!
//! Replays a reference string one access at a time:
//! 1. TLB lookup (when enabled); a hit resolves the access immediately and
//!    the page table is not consulted.
//! 2. Page-table translation; a fault loads the page, evicting a victim and
//!    invalidating its TLB entry before anything else observes the TLB.
//! 3. Working-set update.
//! 4. Emission of an immutable [`SimulationStep`].
//!
//! A run is strictly sequential: each step's outcome depends on the mutated
//! state the previous step left behind, so no step is skipped, reordered,
//! or speculated. Each run owns its page table, TLB, and tracker, created
//! fresh in [`Simulator::new`] and discarded when [`Simulator::run`]
//! returns — no state survives across runs or comparison variants.

use tracing::{debug, trace};

use crate::config::SimulationConfig;
use crate::core::Page;
use crate::core::page_table::{PageTable, Translation};
use crate::core::tlb::Tlb;
use crate::core::working_set::WorkingSetTracker;
use crate::error::{EngineError, InputError};
use crate::stats::{AccessTimings, SimulationResult, SimulationStep};

/// One-shot simulation of a reference string under a configuration.
#[derive(Debug)]
pub struct Simulator {
    config: SimulationConfig,
    reference: Vec<Page>,
    page_table: PageTable,
    tlb: Option<Tlb>,
    tracker: WorkingSetTracker,
}

impl Simulator {
    /// Validates the inputs and builds a fresh simulator.
    ///
    /// # Errors
    ///
    /// [`EngineError::InvalidConfiguration`] for an out-of-domain config
    /// field, [`EngineError::InvalidInput`] for an empty reference string.
    /// Both are reported before any step executes, so a rejected run never
    /// surfaces partial results.
    pub fn new(config: SimulationConfig, reference: Vec<Page>) -> Result<Self, EngineError> {
        config.validate()?;
        if reference.is_empty() {
            return Err(InputError::EmptyReferenceString.into());
        }

        let page_table = PageTable::new(config.frame_count, config.algorithm, &reference);
        let tlb = config.tlb_enabled.then(|| Tlb::new(config.tlb_size));
        let tracker = WorkingSetTracker::new(
            config.working_set_window,
            config.thrashing_fault_rate_threshold,
        );

        Ok(Self {
            config,
            reference,
            page_table,
            tlb,
            tracker,
        })
    }

    /// Replays the whole reference string and returns the trace plus
    /// aggregate statistics.
    ///
    /// Consumes the simulator; nothing survives the run.
    pub fn run(mut self) -> SimulationResult {
        let total = self.reference.len();
        let mut steps = Vec::with_capacity(total);
        let mut page_faults = 0u64;
        let mut hits = 0u64;
        let mut tlb_hits = 0u64;
        let mut tlb_misses = 0u64;
        let mut timing = AccessTimings::default();

        debug!(
            algorithm = %self.config.algorithm,
            frames = self.config.frame_count,
            accesses = total,
            "starting run"
        );

        for index in 0..total {
            let page = self.reference[index];
            let step = self.step(index, page);

            if step.page_fault {
                page_faults += 1;
            } else {
                hits += 1;
            }
            if self.config.tlb_enabled {
                if step.tlb_hit {
                    tlb_hits += 1;
                } else {
                    tlb_misses += 1;
                }
            }
            if step.tlb_hit {
                timing.record_tlb_hit();
            } else if step.page_fault {
                timing.record_page_fault();
            } else {
                timing.record_memory_hit();
            }
            steps.push(step);
        }

        let final_working_set = self.tracker.working_set_size();
        debug!(page_faults, hits, final_working_set, "run complete");

        SimulationResult {
            algorithm: self.config.algorithm,
            steps,
            page_faults,
            hits,
            tlb_hits,
            tlb_misses,
            final_working_set,
            timing,
        }
    }

    /// Executes one access and produces its step record.
    fn step(&mut self, index: usize, page: Page) -> SimulationStep {
        let mut tlb_hit = false;
        let mut page_fault = false;
        let mut evicted = None;

        let frame = match self.tlb.as_mut().and_then(|tlb| tlb.lookup(page)) {
            Some(frame) => {
                // The TLB resolved the translation: the page table is not
                // consulted and the policy sees nothing.
                tlb_hit = true;
                frame
            }
            None => match self.page_table.translate(page) {
                Translation::Hit(frame) => {
                    if let Some(tlb) = self.tlb.as_mut() {
                        tlb.update(page, frame);
                    }
                    frame
                }
                Translation::Fault => {
                    page_fault = true;
                    let loaded = self.page_table.load_after_fault(page);
                    evicted = loaded.evicted;
                    if let Some(tlb) = self.tlb.as_mut() {
                        // Invalidate before update: the victim's translation
                        // must be gone before this step publishes anything.
                        if let Some(victim) = loaded.evicted {
                            tlb.invalidate(victim);
                        }
                        tlb.update(page, loaded.frame);
                    }
                    if let Some(victim) = loaded.evicted {
                        debug!(step = index, page, victim, frame = loaded.frame, "evicted");
                    }
                    loaded.frame
                }
            },
        };

        self.tracker.record(page, page_fault);
        let working_set_size = self.tracker.working_set_size();
        let thrashing = self.tracker.is_thrashing(self.config.frame_count);

        trace!(
            step = index,
            page,
            tlb_hit,
            page_fault,
            frame,
            working_set_size,
            thrashing,
            "access"
        );

        SimulationStep {
            index,
            page,
            tlb_hit,
            page_fault,
            frame,
            evicted,
            working_set_size,
            thrashing,
        }
    }
}
