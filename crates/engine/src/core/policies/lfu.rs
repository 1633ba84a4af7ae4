//! Least Frequently Used (LFU) Replacement Policy.
//!
//! Evicts the resident page with the lowest access frequency accumulated
//! since it entered residency. Frequency starts over when a page is loaded
//! again, so a page that was hot in an earlier residency gets no credit for
//! it. Ties are broken FIFO: among equally cold pages, the one loaded
//! earliest is evicted.

use std::collections::HashMap;

use super::ResidentView;
use crate::core::{FrameIndex, Page};

/// LFU policy state.
#[derive(Debug, Default)]
pub struct LfuPolicy {
    /// Monotonic clock used to stamp loads for the tie-break.
    clock: u64,
    /// Accesses since the page entered residency.
    frequency: HashMap<Page, u64>,
    /// Load stamp per resident page (FIFO tie-break key).
    loaded_at: HashMap<Page, u64>,
}

impl LfuPolicy {
    /// Creates empty frequency tables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a fresh frequency count for a newly resident page.
    pub fn note_load(&mut self, page: Page) {
        self.clock += 1;
        self.frequency.insert(page, 1);
        self.loaded_at.insert(page, self.clock);
    }

    /// Counts one more access to a resident page.
    pub fn note_hit(&mut self, page: Page) {
        self.clock += 1;
        *self.frequency.entry(page).or_insert(0) += 1;
    }

    /// Selects the coldest frame, preferring the earliest-loaded page among
    /// equally cold candidates.
    pub fn select_victim(&mut self, residents: ResidentView<'_>) -> FrameIndex {
        let mut victim = 0;
        let mut best = (u64::MAX, u64::MAX);
        for (frame, page) in residents.frames.iter().enumerate() {
            let freq = self.frequency.get(page).copied().unwrap_or(0);
            let loaded = self.loaded_at.get(page).copied().unwrap_or(0);
            if (freq, loaded) < best {
                best = (freq, loaded);
                victim = frame;
            }
        }
        if let Some(page) = residents.frames.get(victim) {
            self.frequency.remove(page);
            self.loaded_at.remove(page);
        }
        victim
    }
}
