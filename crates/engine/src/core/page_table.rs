//! Page Table.
//!
//! Authoritative mapping of resident pages to physical frames. The page
//! table owns the resident set and frame occupancy; victim choice on a full
//! fault is delegated to the active replacement policy through a narrow
//! interface, so no component holds a competing copy of residency state.
//!
//! Frames fill in index order and replacement happens in place, so a page's
//! frame index is stable for as long as it stays resident.

use std::collections::HashMap;

use crate::config::Algorithm;
use crate::core::policies::{PolicyState, ResidentView};
use crate::core::{FrameIndex, Page};

/// Outcome of a page-table lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Translation {
    /// The page is resident in the carried frame.
    Hit(FrameIndex),
    /// The page is not resident; the caller must fault it in.
    Fault,
}

/// Outcome of servicing a fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Loaded {
    /// Frame the faulting page now occupies.
    pub frame: FrameIndex,
    /// Page removed to make room, when the resident set was full.
    pub evicted: Option<Page>,
}

/// Authoritative page→frame map plus the active replacement policy state.
#[derive(Debug)]
pub struct PageTable {
    /// Resident pages in frame order; position is the frame index.
    frames: Vec<Page>,
    /// Reverse index from page to its frame.
    index: HashMap<Page, FrameIndex>,
    /// Physical frame budget.
    capacity: usize,
    /// Auxiliary replacement state for the active algorithm.
    policy: PolicyState,
}

impl PageTable {
    /// Creates an empty page table with `capacity` frames.
    ///
    /// The reference string is forwarded to the policy because the Optimal
    /// variant needs lookahead; every other variant ignores it.
    pub fn new(capacity: usize, algorithm: Algorithm, reference: &[Page]) -> Self {
        Self {
            frames: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
            capacity,
            policy: PolicyState::new(algorithm, reference),
        }
    }

    /// Looks up `page`, notifying the policy on a hit.
    pub fn translate(&mut self, page: Page) -> Translation {
        match self.index.get(&page).copied() {
            Some(frame) => {
                self.policy.note_hit(page, frame);
                Translation::Hit(frame)
            }
            None => Translation::Fault,
        }
    }

    /// Makes `page` resident after a fault.
    ///
    /// Below capacity the next free frame is assigned without eviction. At
    /// capacity the policy picks a victim, the victim is unmapped, and the
    /// freed frame is reused. The evicted page is reported so the caller
    /// can invalidate its TLB entry before the step completes.
    pub fn load_after_fault(&mut self, page: Page) -> Loaded {
        if self.frames.len() < self.capacity {
            let frame = self.frames.len();
            self.frames.push(page);
            self.index.insert(page, frame);
            self.policy.note_load(page, frame);
            return Loaded {
                frame,
                evicted: None,
            };
        }

        let frame = self.policy.select_victim(ResidentView {
            frames: &self.frames,
        });
        let evicted = self.frames.get(frame).copied();
        if let Some(old) = evicted {
            self.index.remove(&old);
        }
        if let Some(slot) = self.frames.get_mut(frame) {
            *slot = page;
        }
        self.index.insert(page, frame);
        self.policy.note_load(page, frame);
        Loaded { frame, evicted }
    }

    /// Resident pages in frame order.
    pub fn frames(&self) -> &[Page] {
        &self.frames
    }

    /// Number of resident pages.
    pub fn resident_count(&self) -> usize {
        self.frames.len()
    }

    /// Whether `page` currently occupies a frame.
    pub fn is_resident(&self, page: Page) -> bool {
        self.index.contains_key(&page)
    }
}
