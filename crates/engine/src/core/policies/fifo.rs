//! First-In, First-Out (FIFO) Replacement Policy.
//!
//! Evicts the page that has been resident longest, regardless of how
//! recently it was accessed. Residency order is total, so no tie-break
//! exists. Hits never touch the queue.
//!
//! # Performance
//!
//! - **Time Complexity:**
//!   - `note_load()`: O(1)
//!   - `select_victim()`: O(F) to map the victim page back to its frame
//! - **Best Case:** Streaming accesses where all pages have equal importance
//! - **Worst Case:** Strong temporal locality (and Bélády's anomaly applies)

use std::collections::VecDeque;

use super::ResidentView;
use crate::core::{FrameIndex, Page};

/// FIFO policy state.
#[derive(Debug, Default)]
pub struct FifoPolicy {
    /// Pages in residency order; the front is the oldest resident.
    queue: VecDeque<Page>,
}

impl FifoPolicy {
    /// Creates an empty FIFO queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a newly resident page to the back of the queue.
    pub fn note_load(&mut self, page: Page) {
        self.queue.push_back(page);
    }

    /// Selects the oldest resident page's frame and drops it from the queue.
    pub fn select_victim(&mut self, residents: ResidentView<'_>) -> FrameIndex {
        match self.queue.pop_front() {
            Some(victim) => residents.frame_of(victim),
            None => 0,
        }
    }
}
