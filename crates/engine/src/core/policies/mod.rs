//! Page Replacement Policies.
//!
//! Implements the algorithms for selecting victim frames when a fault
//! occurs and the resident set is full.
//!
//! # Policies
//!
//! - `Fifo`: First-In, First-Out.
//! - `Lru`: Least Recently Used.
//! - `Lfu`: Least Frequently Used (FIFO tie-break).
//! - `Optimal`: Bélády's farthest-next-use.
//! - `Clock`: Second chance with a rotating hand.
//!
//! Auxiliary state (queues, stamps, counters, reference bits) is typed per
//! variant and dispatched through [`PolicyState`] with an exhaustive match,
//! so no variant can observe another's bookkeeping. The page table owns the
//! resident set; policies only see it through the narrow
//! `note_load` / `note_hit` / `select_victim` interface.

/// Second-chance (Clock) replacement policy.
pub mod clock;

/// First-In, First-Out replacement policy.
pub mod fifo;

/// Least Frequently Used replacement policy.
pub mod lfu;

/// Least Recently Used replacement policy.
pub mod lru;

/// Bélády farthest-next-use replacement policy.
pub mod optimal;

pub use clock::ClockPolicy;
pub use fifo::FifoPolicy;
pub use lfu::LfuPolicy;
pub use lru::LruPolicy;
pub use optimal::OptimalPolicy;

use crate::config::Algorithm;
use crate::core::{FrameIndex, Page};

/// Read-only view of the resident set handed to victim selection.
///
/// Victim selection is only ever invoked on a full resident set, so
/// `frames` has exactly the configured frame count of entries and position
/// equals frame index.
#[derive(Debug, Clone, Copy)]
pub struct ResidentView<'a> {
    /// Resident pages in frame order.
    pub frames: &'a [Page],
}

impl ResidentView<'_> {
    /// Frame index of a resident page.
    ///
    /// Callers only pass pages the page table reported resident; an absent
    /// page resolves to frame 0 rather than panicking.
    pub fn frame_of(&self, page: Page) -> FrameIndex {
        self.frames.iter().position(|&p| p == page).unwrap_or(0)
    }
}

/// Per-variant replacement state, dispatched with an exhaustive match.
#[derive(Debug)]
pub enum PolicyState {
    /// Insertion-order queue.
    Fifo(FifoPolicy),
    /// Access-recency stamps.
    Lru(LruPolicy),
    /// Residency frequency counters with a FIFO tie-break.
    Lfu(LfuPolicy),
    /// Full-lookahead farthest-next-use.
    Optimal(OptimalPolicy),
    /// Reference bits and a rotating hand.
    Clock(ClockPolicy),
}

impl PolicyState {
    /// Builds the state for `algorithm`.
    ///
    /// `Optimal` is the one variant that needs the reference string: its
    /// victim selection looks ahead into accesses that have not been
    /// consumed yet. Every other variant ignores it.
    pub fn new(algorithm: Algorithm, reference: &[Page]) -> Self {
        match algorithm {
            Algorithm::Fifo => Self::Fifo(FifoPolicy::new()),
            Algorithm::Lru => Self::Lru(LruPolicy::new()),
            Algorithm::Lfu => Self::Lfu(LfuPolicy::new()),
            Algorithm::Optimal => Self::Optimal(OptimalPolicy::new(reference)),
            Algorithm::Clock => Self::Clock(ClockPolicy::new()),
        }
    }

    /// Notifies the policy that `page` became resident in `frame`.
    pub fn note_load(&mut self, page: Page, frame: FrameIndex) {
        match self {
            Self::Fifo(p) => p.note_load(page),
            Self::Lru(p) => p.note_load(page),
            Self::Lfu(p) => p.note_load(page),
            Self::Optimal(p) => p.note_load(),
            Self::Clock(p) => p.note_load(frame),
        }
    }

    /// Notifies the policy that resident `page` in `frame` was accessed
    /// through the page table.
    ///
    /// FIFO ignores hits by definition; every other variant refreshes its
    /// bookkeeping.
    pub fn note_hit(&mut self, page: Page, frame: FrameIndex) {
        match self {
            Self::Fifo(_) => {}
            Self::Lru(p) => p.note_hit(page),
            Self::Lfu(p) => p.note_hit(page),
            Self::Optimal(p) => p.note_hit(),
            Self::Clock(p) => p.note_hit(frame),
        }
    }

    /// Selects the frame to evict from a full resident set.
    ///
    /// Deterministic: exactly one victim per fault, with ties resolved by
    /// the per-variant rules.
    pub fn select_victim(&mut self, residents: ResidentView<'_>) -> FrameIndex {
        match self {
            Self::Fifo(p) => p.select_victim(residents),
            Self::Lru(p) => p.select_victim(residents),
            Self::Lfu(p) => p.select_victim(residents),
            Self::Optimal(p) => p.select_victim(residents),
            Self::Clock(p) => p.select_victim(residents),
        }
    }
}
