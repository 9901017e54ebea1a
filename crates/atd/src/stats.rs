//! Directory statistics collection.
//!
//! Counts what the directory observed so partitioning and stack-distance studies
//! can compare the shadow configuration against the real cache:
//! 1. **References:** Accesses split into hits, misses, and untracked sets.
//! 2. **Fills:** Committed fills and the valid tags they displaced.
//! 3. **Replacement:** Victim selections made by the replacement engine.

/// Counters maintained by an [`Atd`](crate::Atd).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AtdStats {
    /// References recorded through `access`.
    pub accesses: u64,
    /// References that found a valid matching block.
    pub hits: u64,
    /// References to a tracked set with no matching block.
    pub misses: u64,
    /// Operations whose set lies outside the tracked range.
    pub untracked: u64,
    /// Fills committed to a tracked set.
    pub fills: u64,
    /// Fills that displaced a different valid tag.
    pub evictions: u64,
    /// Victim selections made by the replacement engine.
    pub replacements: u64,
}

impl AtdStats {
    /// Fraction of tracked references that hit, or 0.0 when none were recorded.
    pub fn hit_rate(&self) -> f64 {
        let tracked = self.hits + self.misses;
        if tracked == 0 {
            0.0
        } else {
            self.hits as f64 / tracked as f64
        }
    }

    /// Clears every counter.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
