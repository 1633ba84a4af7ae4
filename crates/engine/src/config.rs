//! Configuration for the paging simulator.
//!
//! This module defines the structures and enums used to parameterize a run.
//! It provides:
//! 1. **Defaults:** Baseline parameters (frame budget, TLB capacity, working-set window).
//! 2. **Structures:** [`SimulationConfig`], validated once before a run starts.
//! 3. **Enums:** The closed set of replacement algorithms.
//!
//! Configuration is supplied via JSON from a front end or built in code with
//! `SimulationConfig::default()`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default configuration constants for the simulator.
///
/// These values define the baseline run parameters when not explicitly
/// overridden by the caller.
mod defaults {
    /// Physical frame budget available to the resident set.
    pub const FRAME_COUNT: usize = 3;

    /// TLB capacity in translations.
    ///
    /// Deliberately independent of the frame budget; a TLB smaller than the
    /// frame count forces page-table walks for resident pages.
    pub const TLB_SIZE: usize = 4;

    /// Working-set window length in accesses.
    pub const WORKING_SET_WINDOW: usize = 10;

    /// In-window fault rate at or above which the rate condition of the
    /// thrashing test holds.
    pub const THRASHING_FAULT_RATE_THRESHOLD: f64 = 0.7;
}

/// Page replacement algorithms.
///
/// Specifies the policy used to select which resident page to evict when a
/// fault occurs and no free frame remains. Every variant is deterministic
/// and produces exactly one victim per fault.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Algorithm {
    /// First-In, First-Out.
    ///
    /// Evicts the page that has been resident longest, regardless of how
    /// recently it was accessed.
    #[default]
    #[serde(alias = "Fifo")]
    Fifo,

    /// Least Recently Used.
    ///
    /// Evicts the page whose most recent policy-visible access is oldest.
    #[serde(alias = "Lru")]
    Lru,

    /// Least Frequently Used.
    ///
    /// Evicts the page with the lowest access frequency since it entered
    /// residency; ties fall back to FIFO order.
    #[serde(alias = "Lfu")]
    Lfu,

    /// Bélády's optimal policy.
    ///
    /// Evicts the page whose next use lies farthest in the future. The only
    /// policy allowed to consult accesses that have not happened yet.
    #[serde(alias = "Optimal", alias = "OPT")]
    Optimal,

    /// Second chance with a rotating hand.
    ///
    /// Approximates LRU with one reference bit per frame and a circular
    /// sweep that spares recently referenced frames once.
    #[serde(alias = "Clock")]
    Clock,
}

impl Algorithm {
    /// Every variant, in comparison order.
    pub const ALL: [Self; 5] = [Self::Fifo, Self::Lru, Self::Lfu, Self::Optimal, Self::Clock];

    /// Human-readable policy name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fifo => "FIFO",
            Self::Lru => "LRU",
            Self::Lfu => "LFU",
            Self::Optimal => "Optimal",
            Self::Clock => "Clock",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Root configuration for one simulation run.
///
/// Validated once by [`SimulationConfig::validate`] before any step
/// executes; an invalid field aborts the run atomically.
///
/// # Examples
///
/// Deserializing from JSON (typical front-end usage):
///
/// ```
/// use vmsim_core::config::{Algorithm, SimulationConfig};
///
/// let json = r#"{
///     "frame_count": 4,
///     "algorithm": "LRU",
///     "tlb_enabled": true,
///     "tlb_size": 8,
///     "working_set_window": 12,
///     "thrashing_fault_rate_threshold": 0.6
/// }"#;
///
/// let config: SimulationConfig = serde_json::from_str(json).unwrap();
/// assert_eq!(config.algorithm, Algorithm::Lru);
/// assert_eq!(config.frame_count, 4);
/// assert!(config.validate().is_ok());
/// ```
///
/// Omitted fields fall back to the defaults:
///
/// ```
/// use vmsim_core::config::SimulationConfig;
///
/// let config: SimulationConfig = serde_json::from_str(r#"{ "frame_count": 5 }"#).unwrap();
/// assert_eq!(config.frame_count, 5);
/// assert_eq!(config.tlb_size, 4);
/// assert_eq!(config.working_set_window, 10);
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SimulationConfig {
    /// Number of physical frames available to the resident set.
    #[serde(default = "SimulationConfig::default_frame_count")]
    pub frame_count: usize,

    /// Active replacement algorithm.
    #[serde(default)]
    pub algorithm: Algorithm,

    /// When false, every access consults the page table directly.
    #[serde(default = "SimulationConfig::default_tlb_enabled")]
    pub tlb_enabled: bool,

    /// TLB capacity in translations (independent of the frame budget).
    #[serde(default = "SimulationConfig::default_tlb_size")]
    pub tlb_size: usize,

    /// Trailing window length for working-set analysis.
    #[serde(default = "SimulationConfig::default_working_set_window")]
    pub working_set_window: usize,

    /// In-window fault rate at or above which thrashing is flagged, in `(0, 1]`.
    #[serde(default = "SimulationConfig::default_thrashing_threshold")]
    pub thrashing_fault_rate_threshold: f64,
}

impl SimulationConfig {
    /// Returns the default frame budget.
    fn default_frame_count() -> usize {
        defaults::FRAME_COUNT
    }

    /// The TLB is on by default; disabling it models a bare page-table walk.
    fn default_tlb_enabled() -> bool {
        true
    }

    /// Returns the default TLB capacity.
    fn default_tlb_size() -> usize {
        defaults::TLB_SIZE
    }

    /// Returns the default working-set window length.
    fn default_working_set_window() -> usize {
        defaults::WORKING_SET_WINDOW
    }

    /// Returns the default thrashing fault-rate threshold.
    fn default_thrashing_threshold() -> f64 {
        defaults::THRASHING_FAULT_RATE_THRESHOLD
    }

    /// Checks every field against its documented domain.
    ///
    /// Validation runs once before a simulation starts. The TLB capacity is
    /// only checked when the TLB is enabled; a disabled TLB ignores the
    /// field entirely.
    ///
    /// # Errors
    ///
    /// The [`ConfigError`] naming the first out-of-domain field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.frame_count < 1 {
            return Err(ConfigError::FrameCount(self.frame_count));
        }
        if self.tlb_enabled && self.tlb_size < 1 {
            return Err(ConfigError::TlbSize(self.tlb_size));
        }
        if self.working_set_window < 1 {
            return Err(ConfigError::Window(self.working_set_window));
        }
        let threshold = self.thrashing_fault_rate_threshold;
        if !(threshold > 0.0 && threshold <= 1.0) {
            return Err(ConfigError::Threshold(threshold));
        }
        Ok(())
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            frame_count: defaults::FRAME_COUNT,
            algorithm: Algorithm::default(),
            tlb_enabled: true,
            tlb_size: defaults::TLB_SIZE,
            working_set_window: defaults::WORKING_SET_WINDOW,
            thrashing_fault_rate_threshold: defaults::THRASHING_FAULT_RATE_THRESHOLD,
        }
    }
}
