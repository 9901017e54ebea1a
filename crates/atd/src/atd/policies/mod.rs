//! Replacement Policies.
//!
//! Victim selection and list maintenance for the directory's sets.
//!
//! # Policies
//!
//! - `Lru`: Least Recently Used; every reference moves a block to the head.
//! - `Fifo`: First-In, First-Out; only insertions move a block to the head.
//! - `Random`: Uniform victim draw from an owned generator.
//!
//! LRU and FIFO share the same victim rule (the tail of the set's list) and
//! differ only in which events reorder the list.

/// First-In, First-Out replacement policy.
pub mod fifo;

/// Least Recently Used replacement policy.
pub mod lru;

/// Random replacement policy.
pub mod random;

use std::fmt;

pub use fifo::FifoPolicy;
pub use lru::LruPolicy;
pub use random::RandomPolicy;

use super::waylist::WayList;

/// Interface between the directory and a replacement algorithm.
///
/// Policies keep no per-set state of their own; the ordering lives in each
/// set's [`WayList`] and is handed in on every call.
pub trait ReplacementPolicy: fmt::Debug {
    /// Selects the way to evict from a set.
    ///
    /// List-based policies move the victim to the head immediately so that a
    /// second selection before the fill lands picks a different way.
    ///
    /// # Arguments
    ///
    /// * `list` - The set's way ordering.
    ///
    /// # Returns
    ///
    /// The index of the way to evict, in `0..list.len()`.
    fn victim(&mut self, list: &mut WayList) -> usize;

    /// Updates the ordering when a fill writes `way`.
    ///
    /// # Arguments
    ///
    /// * `list` - The set's way ordering.
    /// * `way` - The way being written.
    /// * `tag_changed` - Whether the way previously held a different tag.
    fn on_fill(&mut self, list: &mut WayList, way: usize, tag_changed: bool) {
        let _ = (list, way, tag_changed);
    }

    /// Updates the ordering when a reference hits `way`.
    ///
    /// # Arguments
    ///
    /// * `list` - The set's way ordering.
    /// * `way` - The way referenced.
    /// * `was_valid` - Whether the block held a valid state before this reference.
    fn on_access(&mut self, list: &mut WayList, way: usize, was_valid: bool) {
        let _ = (list, way, was_valid);
    }
}
