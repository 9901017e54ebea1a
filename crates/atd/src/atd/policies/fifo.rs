//! First-In, First-Out (FIFO) Replacement Policy.
//!
//! The tail of a set's list is the way inserted longest ago. Only insertions
//! reorder the list: a fill that changes a way's tag, or the first reference
//! to a block that was still invalid. Later references leave the order alone.
//!
//! # Performance
//!
//! - **Time Complexity:** O(1) for every operation
//! - **Best Case:** Streaming accesses where all lines have equal importance
//! - **Worst Case:** Workloads with strong temporal locality

use super::ReplacementPolicy;
use crate::atd::waylist::WayList;

/// FIFO Policy.
#[derive(Clone, Copy, Debug, Default)]
pub struct FifoPolicy;

impl FifoPolicy {
    /// Creates a new FIFO policy instance.
    pub const fn new() -> Self {
        Self
    }
}

impl ReplacementPolicy for FifoPolicy {
    fn victim(&mut self, list: &mut WayList) -> usize {
        let way = list.tail();
        list.move_to_head(way);
        way
    }

    fn on_fill(&mut self, list: &mut WayList, way: usize, tag_changed: bool) {
        if tag_changed {
            list.move_to_head(way);
        }
    }

    fn on_access(&mut self, list: &mut WayList, way: usize, was_valid: bool) {
        if !was_valid {
            list.move_to_head(way);
        }
    }
}
