//! # Simulator Scenario Tests
//!
//! End-to-end runs over the classic three-frame reference string and a few
//! synthetic edge cases. Expected counts come from hand-traced executions:
//! with a TLB at least as large as the frame budget, every resident page
//! keeps a live translation, so hits never reach the page table and the
//! recency-driven policies degrade to FIFO behavior — that is why LRU and
//! Clock match FIFO's 15 faults here while their TLB-less runs differ.

use pretty_assertions::assert_eq;

use vmsim_core::config::Algorithm;
use vmsim_core::error::{ConfigError, EngineError, InputError};
use vmsim_core::{SimulationConfig, Simulator};

use crate::common::{BELADY_REFERENCE, base_config, init_tracing, no_tlb_config};

fn run(config: SimulationConfig, reference: &[u64]) -> vmsim_core::SimulationResult {
    init_tracing();
    Simulator::new(config, reference.to_vec())
        .expect("valid scenario inputs")
        .run()
}

// ══════════════════════════════════════════════════════════
// 1. Scenario A — classic reference string, TLB enabled
// ══════════════════════════════════════════════════════════

#[test]
fn scenario_a_fifo_lru_lfu_clock_counts() {
    for algorithm in [
        Algorithm::Fifo,
        Algorithm::Lru,
        Algorithm::Lfu,
        Algorithm::Clock,
    ] {
        let result = run(base_config(algorithm), &BELADY_REFERENCE);
        assert_eq!(result.page_faults, 15, "{algorithm} faults");
        assert_eq!(result.hits, 5, "{algorithm} hits");
        assert_eq!(result.tlb_hits, 5, "{algorithm} TLB hits");
        assert_eq!(result.tlb_misses, 15, "{algorithm} TLB misses");
        assert!((result.hit_ratio() - 0.25).abs() < 1e-12);
    }
}

#[test]
fn scenario_a_optimal_counts() {
    let result = run(base_config(Algorithm::Optimal), &BELADY_REFERENCE);
    assert_eq!(result.page_faults, 13);
    assert_eq!(result.hits, 7);
    assert_eq!(result.tlb_hits, 7);
    assert_eq!(result.tlb_misses, 13);
    assert!((result.hit_ratio() - 0.35).abs() < 1e-12);
}

#[test]
fn scenario_a_fifo_eviction_trace() {
    let result = run(base_config(Algorithm::Fifo), &BELADY_REFERENCE);
    let evictions: Vec<Option<u64>> = result.steps.iter().map(|s| s.evicted).collect();
    assert_eq!(
        evictions,
        vec![
            None,
            None,
            None,
            Some(7),
            None,
            Some(0),
            Some(1),
            Some(2),
            Some(3),
            Some(0),
            Some(4),
            None,
            None,
            Some(2),
            Some(3),
            None,
            None,
            Some(0),
            Some(1),
            Some(2),
        ]
    );
}

#[test]
fn scenario_a_working_set_trace() {
    let result = run(base_config(Algorithm::Fifo), &BELADY_REFERENCE);
    let sizes: Vec<usize> = result.steps.iter().map(|s| s.working_set_size).collect();
    assert_eq!(
        sizes,
        vec![1, 2, 3, 4, 4, 5, 5, 6, 6, 6, 5, 5, 4, 5, 5, 5, 5, 5, 5, 5]
    );
    assert_eq!(result.final_working_set, 5);
}

#[test]
fn scenario_a_every_hit_is_a_tlb_hit() {
    // TLB capacity (4) exceeds the frame budget (3), so a resident page
    // always has a live translation.
    let result = run(base_config(Algorithm::Fifo), &BELADY_REFERENCE);
    let hit_steps: Vec<usize> = result
        .steps
        .iter()
        .filter(|s| !s.page_fault)
        .map(|s| s.index)
        .collect();
    assert_eq!(hit_steps, vec![4, 11, 12, 15, 16]);
    for step in &result.steps {
        assert_eq!(step.tlb_hit, !step.page_fault);
    }
}

// ══════════════════════════════════════════════════════════
// 2. Scenario A without a TLB — true policy behavior
// ══════════════════════════════════════════════════════════

#[test]
fn scenario_a_counts_without_tlb() {
    for (algorithm, faults) in [
        (Algorithm::Fifo, 15),
        (Algorithm::Lru, 12),
        (Algorithm::Lfu, 13),
        (Algorithm::Optimal, 9),
        (Algorithm::Clock, 14),
    ] {
        let result = run(no_tlb_config(algorithm), &BELADY_REFERENCE);
        assert_eq!(result.page_faults, faults, "{algorithm} faults");
        assert_eq!(result.hits, 20 - faults, "{algorithm} hits");
        assert_eq!(result.tlb_hits, 0);
        assert_eq!(result.tlb_misses, 0);
    }
}

#[test]
fn small_tlb_forces_page_table_walks() {
    // A 2-entry TLB under a 3-frame budget cannot pin every resident page,
    // so some hits reach the page table and refresh LRU recency.
    let config = SimulationConfig {
        tlb_size: 2,
        ..base_config(Algorithm::Lru)
    };
    let result = run(config, &BELADY_REFERENCE);
    assert_eq!(result.page_faults, 10);
    assert_eq!(result.hits, 10);
    assert_eq!(result.tlb_hits, 3);
    assert_eq!(result.tlb_misses, 17);
}

// ══════════════════════════════════════════════════════════
// 3. Scenario B — working set fits the frames
// ══════════════════════════════════════════════════════════

#[test]
fn scenario_b_no_evictions_once_loaded() {
    let reference = [1u64, 2, 3, 1, 2, 3, 1, 2, 3];
    for algorithm in Algorithm::ALL {
        let result = run(base_config(algorithm), &reference);
        assert_eq!(result.page_faults, 3, "{algorithm} compulsory faults only");
        assert_eq!(result.hits, 6, "{algorithm} hits");
        assert!(
            result.steps.iter().all(|s| s.evicted.is_none()),
            "{algorithm} must not evict"
        );
    }
}

#[test]
fn scenario_b_access_time_model() {
    let reference = [1u64, 2, 3, 1, 2, 3, 1, 2, 3];
    let result = run(base_config(Algorithm::Fifo), &reference);

    // 3 faults at (2 + 100 + 10_000_000 + 100) ns and 6 TLB hits at
    // (2 + 100) ns.
    assert_eq!(result.timing.total_ns, 3 * 10_000_202 + 6 * 102);
    assert_eq!(result.timing.disk_accesses, 3);
    assert_eq!(result.timing.tlb_accesses, 9);
    assert_eq!(result.timing.page_table_accesses, 3);
    assert_eq!(result.timing.memory_accesses, 9);
    assert!((result.average_access_time_ns() - (30_001_218.0 / 9.0)).abs() < 1e-9);
}

// ══════════════════════════════════════════════════════════
// 4. Scenario C — thrashing detection
// ══════════════════════════════════════════════════════════

#[test]
fn scenario_c_thrashing_flag_at_full_fault_rate() {
    let reference = [1u64, 2, 3, 4, 5, 6];
    let config = SimulationConfig {
        working_set_window: 10,
        thrashing_fault_rate_threshold: 1.0,
        ..base_config(Algorithm::Fifo)
    };
    let result = run(config, &reference);

    assert_eq!(result.page_faults, 6, "every access is a compulsory fault");
    assert_eq!(result.final_working_set, 6);

    let last = result.steps.last().unwrap();
    assert_eq!(last.working_set_size, 6);
    assert!(last.thrashing, "working set 6 > 3 frames at 100% fault rate");

    // While the working set still fits the budget the flag must stay off.
    for step in &result.steps[..3] {
        assert!(!step.thrashing);
    }
}

#[test]
fn thrashing_never_flags_when_working_set_fits() {
    // Two pages over two frames: the warm-up window hits a 100% fault rate,
    // but the working set never exceeds the budget, so the flag stays off.
    let reference = [1u64, 2, 1, 2, 1, 2];
    let config = SimulationConfig {
        frame_count: 2,
        tlb_enabled: false,
        working_set_window: 2,
        thrashing_fault_rate_threshold: 0.5,
        ..base_config(Algorithm::Fifo)
    };
    let result = run(config, &reference);

    assert_eq!(result.page_faults, 2, "compulsory faults only");
    assert!(result.steps.iter().all(|s| !s.thrashing));
}

#[test]
fn thrashing_tracks_the_working_set_condition() {
    // A single frame under two alternating pages faults on every access;
    // the flag must follow the working-set condition exactly.
    let reference = [1u64, 2, 1, 2, 1, 2, 1, 2];
    let config = SimulationConfig {
        frame_count: 1,
        tlb_enabled: false,
        working_set_window: 4,
        thrashing_fault_rate_threshold: 0.5,
        ..base_config(Algorithm::Fifo)
    };
    let result = run(config, &reference);

    assert_eq!(result.page_faults, 8);
    for step in &result.steps {
        assert_eq!(step.thrashing, step.working_set_size > 1);
    }
}

// ══════════════════════════════════════════════════════════
// 5. Scenario D — validation
// ══════════════════════════════════════════════════════════

#[test]
fn scenario_d_empty_reference_rejected() {
    let err = Simulator::new(base_config(Algorithm::Fifo), vec![]).unwrap_err();
    assert_eq!(
        err,
        EngineError::InvalidInput(InputError::EmptyReferenceString)
    );
}

#[test]
fn invalid_config_rejected_before_any_step() {
    let config = SimulationConfig {
        frame_count: 0,
        ..base_config(Algorithm::Lru)
    };
    let err = Simulator::new(config, vec![1, 2, 3]).unwrap_err();
    assert_eq!(
        err,
        EngineError::InvalidConfiguration(ConfigError::FrameCount(0))
    );
}

// ══════════════════════════════════════════════════════════
// 6. Trace Integrity
// ══════════════════════════════════════════════════════════

#[test]
fn steps_are_indexed_and_conserved() {
    let result = run(base_config(Algorithm::Clock), &BELADY_REFERENCE);

    assert_eq!(result.steps.len(), BELADY_REFERENCE.len());
    assert_eq!(
        result.page_faults + result.hits,
        BELADY_REFERENCE.len() as u64
    );
    assert_eq!(
        result.tlb_hits + result.tlb_misses,
        BELADY_REFERENCE.len() as u64
    );
    for (i, step) in result.steps.iter().enumerate() {
        assert_eq!(step.index, i);
        assert_eq!(step.page, BELADY_REFERENCE[i]);
        assert!(step.frame < 3);
        if step.tlb_hit {
            assert!(!step.page_fault, "a TLB hit cannot fault");
            assert!(step.evicted.is_none());
        }
        if step.evicted.is_some() {
            assert!(step.page_fault, "only faults evict");
        }
    }
}

#[test]
fn runs_are_deterministic() {
    let first = run(base_config(Algorithm::Lfu), &BELADY_REFERENCE);
    let second = run(base_config(Algorithm::Lfu), &BELADY_REFERENCE);

    assert_eq!(first.page_faults, second.page_faults);
    assert_eq!(first.tlb_hits, second.tlb_hits);
    assert_eq!(first.steps, second.steps);
    assert_eq!(first.timing, second.timing);
}

#[test]
fn result_serializes_for_exporters() {
    let result = run(base_config(Algorithm::Optimal), &[1, 2, 3, 1]);
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["algorithm"], "OPTIMAL");
    assert_eq!(json["page_faults"], 3);
    assert_eq!(json["steps"].as_array().unwrap().len(), 4);
    assert!(json["timing"]["total_ns"].is_u64());
}

#[test]
fn summary_printing_does_not_panic() {
    let result = run(base_config(Algorithm::Fifo), &BELADY_REFERENCE);
    result.print_summary();
}
