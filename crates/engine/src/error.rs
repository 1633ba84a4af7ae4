//! Engine validation errors.
//!
//! Every failure in this crate is a validation rejection reported before any
//! simulation step executes; there are no transient conditions and no
//! retries. The two categories mirror the engine boundary: a malformed
//! [`SimulationConfig`](crate::config::SimulationConfig) and a malformed
//! reference string. A rejected run aborts atomically — partial results are
//! never surfaced.

use thiserror::Error;

/// Rejected configuration field values.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    /// The frame budget must hold at least one page.
    #[error("frame count must be at least 1 (got {0})")]
    FrameCount(usize),

    /// An enabled TLB must cache at least one translation.
    #[error("TLB size must be at least 1 when the TLB is enabled (got {0})")]
    TlbSize(usize),

    /// The working-set window must cover at least one access.
    #[error("working-set window must be at least 1 (got {0})")]
    Window(usize),

    /// The thrashing fault-rate threshold must lie in `(0, 1]`.
    #[error("thrashing fault-rate threshold must be in (0, 1] (got {0})")]
    Threshold(f64),
}

/// Rejected simulation input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    /// A run over zero accesses is rejected, not silently completed empty.
    #[error("reference string must contain at least one access")]
    EmptyReferenceString,
}

/// Top-level engine error.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum EngineError {
    /// The configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),

    /// The reference string failed validation.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InputError),
}
