//! Bélády's Optimal Replacement Policy.
//!
//! Evicts the resident page whose next use lies farthest in the future, or
//! that never recurs at all. This is the only policy allowed to consult
//! accesses that have not been consumed yet, so it owns a copy of the full
//! reference string and a lookahead cursor rather than a forward-only
//! stream.
//!
//! The cursor advances once per policy-visible access. Accesses absorbed by
//! the TLB never reach the page table and therefore never advance the
//! cursor: with a TLB in front, the lookahead window trails the true stream
//! position by exactly the number of TLB hits so far.

use super::ResidentView;
use crate::core::{FrameIndex, Page};

/// Optimal policy state.
#[derive(Debug)]
pub struct OptimalPolicy {
    /// Full reference string; victim selection indexes past the cursor.
    reference: Vec<Page>,
    /// Number of policy-visible accesses consumed so far.
    cursor: usize,
}

impl OptimalPolicy {
    /// Copies the reference string for lookahead.
    pub fn new(reference: &[Page]) -> Self {
        Self {
            reference: reference.to_vec(),
            cursor: 0,
        }
    }

    /// Consumes one policy-visible access (a fault load).
    pub fn note_load(&mut self) {
        self.cursor += 1;
    }

    /// Consumes one policy-visible access (a page-table hit).
    pub fn note_hit(&mut self) {
        self.cursor += 1;
    }

    /// Selects the frame whose page is needed farthest in the future.
    ///
    /// Called before the faulting access is consumed, so lookahead starts
    /// one element past the cursor. A resident page with no next use at all
    /// wins outright; the first such frame in frame order is taken.
    pub fn select_victim(&mut self, residents: ResidentView<'_>) -> FrameIndex {
        let future = self.reference.get(self.cursor + 1..).unwrap_or(&[]);
        let mut victim = 0;
        let mut farthest: Option<usize> = None;
        for (frame, page) in residents.frames.iter().enumerate() {
            match future.iter().position(|&p| p == *page) {
                None => return frame,
                Some(next_use) => {
                    if farthest.is_none_or(|f| next_use > f) {
                        farthest = Some(next_use);
                        victim = frame;
                    }
                }
            }
        }
        victim
    }
}
