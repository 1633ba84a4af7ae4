//! Translation Lookaside Buffer (TLB).
//!
//! A small fully associative cache of page→frame translations checked
//! before the page table, with true-LRU eviction. Capacity is independent
//! of the frame budget. Entries are kept in recency order (back = most
//! recent), the same usage-stack scheme the LRU policy uses for its own
//! bookkeeping.
//!
//! A translation is valid only while its page is resident; the simulation
//! loop invalidates the entry of an evicted page before the step that
//! evicted it completes, so a stale translation is never observable.

use crate::core::{FrameIndex, Page};

/// A cached page→frame translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TlbEntry {
    /// Page identifier (tag).
    page: Page,
    /// Frame the page occupies (data).
    frame: FrameIndex,
}

/// Fully associative, LRU-evicted translation cache.
#[derive(Debug)]
pub struct Tlb {
    /// Entries in recency order; the front is the eviction candidate.
    entries: Vec<TlbEntry>,
    /// Maximum number of cached translations.
    capacity: usize,
}

impl Tlb {
    /// Creates an empty TLB with room for `capacity` translations.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Looks up `page`.
    ///
    /// A hit refreshes the entry's recency and returns its frame; a miss
    /// has no side effects.
    pub fn lookup(&mut self, page: Page) -> Option<FrameIndex> {
        let pos = self.entries.iter().position(|e| e.page == page)?;
        let entry = self.entries.remove(pos);
        self.entries.push(entry);
        Some(entry.frame)
    }

    /// Inserts or refreshes the translation for `page`.
    ///
    /// When the TLB is full and `page` is absent, the least recently used
    /// entry is evicted first.
    pub fn update(&mut self, page: Page, frame: FrameIndex) {
        if let Some(pos) = self.entries.iter().position(|e| e.page == page) {
            self.entries.remove(pos);
        } else if self.entries.len() >= self.capacity && !self.entries.is_empty() {
            self.entries.remove(0);
        }
        self.entries.push(TlbEntry { page, frame });
    }

    /// Drops the translation for `page` if one is cached.
    ///
    /// Called synchronously when `page` is evicted from residency.
    pub fn invalidate(&mut self, page: Page) {
        self.entries.retain(|e| e.page != page);
    }

    /// Number of cached translations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the TLB holds no translations.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Configured capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
