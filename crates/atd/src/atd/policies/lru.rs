//! Least Recently Used (LRU) Replacement Policy.
//!
//! The tail of a set's list is the way referenced longest ago. Every hit moves
//! the referenced way to the head; a victim is moved to the head the moment it
//! is selected, so fills need no further reordering.
//!
//! # Performance
//!
//! - **Time Complexity:** `victim()` and `on_access()` are O(1)
//! - **Space Complexity:** none beyond the per-set lists

use super::ReplacementPolicy;
use crate::atd::waylist::WayList;

/// LRU Policy.
#[derive(Clone, Copy, Debug, Default)]
pub struct LruPolicy;

impl LruPolicy {
    /// Creates a new LRU policy instance.
    pub const fn new() -> Self {
        Self
    }
}

impl ReplacementPolicy for LruPolicy {
    fn victim(&mut self, list: &mut WayList) -> usize {
        let way = list.tail();
        list.move_to_head(way);
        way
    }

    fn on_access(&mut self, list: &mut WayList, way: usize, _was_valid: bool) {
        list.move_to_head(way);
    }
}
