//! Simulation trace records, aggregate results, and the access-time model.
//!
//! This module defines everything a run reports. It provides:
//! 1. **Trace:** One immutable [`SimulationStep`] per access, never mutated
//!    after emission.
//! 2. **Aggregates:** [`SimulationResult`] counters maintained as steps are
//!    emitted, with derived ratios computed on demand so they cannot desync.
//! 3. **Timing:** A nanosecond cost model for the three access outcomes
//!    (TLB hit, memory hit, page fault).
//! 4. **Reporting:** A sectioned human-readable summary on stdout.
//!
//! Everything here is `Serialize` so presentation and export collaborators
//! need no engine-internal knowledge.

use serde::Serialize;

use crate::config::Algorithm;
use crate::core::{FrameIndex, Page};

/// Memory access cost constants in nanoseconds.
mod cost {
    /// TLB lookup cost.
    pub const TLB_ACCESS_NS: u64 = 2;

    /// Page-table walk cost on a TLB miss.
    pub const PAGE_TABLE_ACCESS_NS: u64 = 100;

    /// Main-memory access cost.
    pub const MEMORY_ACCESS_NS: u64 = 100;

    /// Disk service cost for a page fault (10 ms).
    pub const DISK_ACCESS_NS: u64 = 10_000_000;
}

/// Immutable record of one simulated access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SimulationStep {
    /// Zero-based position in the reference string.
    pub index: usize,
    /// Page that was accessed.
    pub page: Page,
    /// Whether the TLB served the translation.
    pub tlb_hit: bool,
    /// Whether the access faulted.
    pub page_fault: bool,
    /// Frame holding the page once the step completed.
    pub frame: FrameIndex,
    /// Page evicted to make room, when the fault replaced a resident page.
    pub evicted: Option<Page>,
    /// Distinct pages among the trailing window of accesses, this one included.
    pub working_set_size: usize,
    /// Whether both thrashing conditions held after this access.
    pub thrashing: bool,
}

/// Access-outcome counters and accumulated model time.
///
/// Models the three translation paths: a TLB hit (TLB + memory), a TLB miss
/// that still finds the page resident (TLB + page table + memory), and a
/// page fault (TLB + page table + disk + memory).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AccessTimings {
    /// Total modeled time in nanoseconds.
    pub total_ns: u64,
    /// TLB lookups performed.
    pub tlb_accesses: u64,
    /// Page-table walks performed.
    pub page_table_accesses: u64,
    /// Main-memory accesses performed.
    pub memory_accesses: u64,
    /// Disk services performed (one per fault).
    pub disk_accesses: u64,
}

impl AccessTimings {
    /// Records the fastest path: the TLB had the translation.
    pub fn record_tlb_hit(&mut self) {
        self.tlb_accesses += 1;
        self.memory_accesses += 1;
        self.total_ns += cost::TLB_ACCESS_NS + cost::MEMORY_ACCESS_NS;
    }

    /// Records a TLB miss that still found the page resident.
    pub fn record_memory_hit(&mut self) {
        self.tlb_accesses += 1;
        self.page_table_accesses += 1;
        self.memory_accesses += 1;
        self.total_ns += cost::TLB_ACCESS_NS + cost::PAGE_TABLE_ACCESS_NS + cost::MEMORY_ACCESS_NS;
    }

    /// Records the slowest path: the page had to be faulted in from disk.
    pub fn record_page_fault(&mut self) {
        self.tlb_accesses += 1;
        self.page_table_accesses += 1;
        self.disk_accesses += 1;
        self.memory_accesses += 1;
        self.total_ns += cost::TLB_ACCESS_NS
            + cost::PAGE_TABLE_ACCESS_NS
            + cost::DISK_ACCESS_NS
            + cost::MEMORY_ACCESS_NS;
    }

    /// Average modeled access time over `total_accesses`, in nanoseconds.
    pub fn average_ns(&self, total_accesses: u64) -> f64 {
        if total_accesses == 0 {
            return 0.0;
        }
        self.total_ns as f64 / total_accesses as f64
    }
}

/// Aggregate outcome of one simulation run.
///
/// Counters are incremented as steps are emitted, never recomputed by
/// re-scanning the trace; derived ratios are computed from the counts on
/// demand.
#[derive(Debug, Clone, Serialize)]
pub struct SimulationResult {
    /// Algorithm that produced this result.
    pub algorithm: Algorithm,
    /// Per-access trace, in reference-string order.
    pub steps: Vec<SimulationStep>,
    /// Accesses that faulted.
    pub page_faults: u64,
    /// Accesses served without a fault.
    pub hits: u64,
    /// Accesses served by the TLB. Always 0 when the TLB is disabled.
    pub tlb_hits: u64,
    /// Accesses that missed an enabled TLB. 0 when the TLB is disabled.
    pub tlb_misses: u64,
    /// Working-set size after the final access.
    pub final_working_set: usize,
    /// Modeled access-time breakdown.
    pub timing: AccessTimings,
}

impl SimulationResult {
    /// Total number of simulated accesses.
    pub fn total_accesses(&self) -> u64 {
        self.page_faults + self.hits
    }

    /// Fraction of accesses served without a fault.
    pub fn hit_ratio(&self) -> f64 {
        ratio(self.hits, self.total_accesses())
    }

    /// Fraction of accesses that faulted.
    pub fn fault_ratio(&self) -> f64 {
        ratio(self.page_faults, self.total_accesses())
    }

    /// Fraction of TLB lookups that hit. 0 when the TLB was disabled.
    pub fn tlb_hit_ratio(&self) -> f64 {
        ratio(self.tlb_hits, self.tlb_hits + self.tlb_misses)
    }

    /// Average modeled access time in nanoseconds.
    pub fn average_access_time_ns(&self) -> f64 {
        self.timing.average_ns(self.total_accesses())
    }

    /// Prints a human-readable summary to stdout.
    ///
    /// # Panics
    ///
    /// This function will not panic: every division goes through a
    /// zero-guarded ratio helper.
    pub fn print_summary(&self) {
        let thrashing_steps = self.steps.iter().filter(|s| s.thrashing).count();
        println!("\n==========================================================");
        println!("VIRTUAL MEMORY SIMULATION STATISTICS — {}", self.algorithm);
        println!("==========================================================");
        println!("accesses                 {}", self.total_accesses());
        println!("page_faults              {}", self.page_faults);
        println!("hits                     {}", self.hits);
        println!("hit_ratio                {:.2}%", self.hit_ratio() * 100.0);
        println!("fault_ratio              {:.2}%", self.fault_ratio() * 100.0);
        println!("----------------------------------------------------------");
        println!("TLB");
        println!("  tlb.hits               {}", self.tlb_hits);
        println!("  tlb.misses             {}", self.tlb_misses);
        println!(
            "  tlb.hit_ratio          {:.2}%",
            self.tlb_hit_ratio() * 100.0
        );
        println!("----------------------------------------------------------");
        println!("WORKING SET");
        println!("  ws.final_size          {}", self.final_working_set);
        println!("  ws.thrashing_steps     {}", thrashing_steps);
        println!("----------------------------------------------------------");
        println!("ACCESS TIME MODEL");
        println!(
            "  time.total_ms          {:.3}",
            self.timing.total_ns as f64 / 1_000_000.0
        );
        println!("  time.avg_ns            {:.1}", self.average_access_time_ns());
        println!("  time.disk_accesses     {}", self.timing.disk_accesses);
        println!("==========================================================");
    }
}

/// Zero-guarded division for ratio reporting.
fn ratio(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64
    }
}
