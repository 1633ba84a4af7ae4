//! Least Recently Used (LRU) Replacement Policy.
//!
//! Evicts the resident page whose most recent policy-visible access is
//! oldest. Recency is tracked with a monotonic stamp refreshed on every
//! load and hit notification — an access that is a hit still updates
//! recency.
//!
//! # Performance
//!
//! - **Time Complexity:**
//!   - `note_hit()` / `note_load()`: O(1)
//!   - `select_victim()`: O(F) scan over the resident set
//! - **Best Case:** Temporal locality where the recent past predicts reuse
//! - **Worst Case:** Cyclic scans one page wider than the frame budget

use std::collections::HashMap;

use super::ResidentView;
use crate::core::{FrameIndex, Page};

/// LRU policy state.
#[derive(Debug, Default)]
pub struct LruPolicy {
    /// Monotonic access clock; ticks once per policy-visible access.
    clock: u64,
    /// Most recent stamp per resident page.
    last_use: HashMap<Page, u64>,
}

impl LruPolicy {
    /// Creates an empty recency table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stamps `page` with the next clock tick.
    fn touch(&mut self, page: Page) {
        self.clock += 1;
        self.last_use.insert(page, self.clock);
    }

    /// Refreshes recency for a newly resident page.
    pub fn note_load(&mut self, page: Page) {
        self.touch(page);
    }

    /// Refreshes recency for a resident page that was accessed.
    pub fn note_hit(&mut self, page: Page) {
        self.touch(page);
    }

    /// Selects the frame holding the least recently used page.
    ///
    /// Stamps are unique, so ties cannot occur; the scan still resolves any
    /// equal stamps toward the lowest frame index.
    pub fn select_victim(&mut self, residents: ResidentView<'_>) -> FrameIndex {
        let mut victim = 0;
        let mut oldest = u64::MAX;
        for (frame, page) in residents.frames.iter().enumerate() {
            let stamp = self.last_use.get(page).copied().unwrap_or(0);
            if stamp < oldest {
                oldest = stamp;
                victim = frame;
            }
        }
        if let Some(page) = residents.frames.get(victim) {
            self.last_use.remove(page);
        }
        victim
    }
}
