//! Set/tag decomposition.
//!
//! Maps byte addresses to the set and tag the owning module's real cache would
//! use. The mapping depends on how the module's address space is assigned:
//! 1. **Interleaved:** Consecutive blocks rotate across `modules` siblings, so the
//!    block number is divided by the interleave factor before indexing.
//! 2. **Bounds:** The module owns a contiguous range and indexes by block number.

use crate::common::Addr;
use crate::config::{AddressRange, ModuleConfig};

use super::block::BlockState;

/// Where an address falls in the real cache.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BlockLocation {
    /// Set index in the real cache (may exceed the tracked range).
    pub set: usize,
    /// Block-aligned address.
    pub tag: u64,
}

/// Outcome of looking an address up in the directory.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lookup {
    /// A valid block holds the tag.
    Hit {
        /// Set index.
        set: usize,
        /// Way holding the tag.
        way: usize,
        /// Block-aligned address.
        tag: u64,
        /// State recorded with the block.
        state: BlockState,
    },
    /// The set is tracked but no valid block holds the tag.
    Miss {
        /// Set index.
        set: usize,
        /// Block-aligned address.
        tag: u64,
    },
    /// The set lies outside the directory's tracked range.
    NotTracked {
        /// Set index in the real cache.
        set: usize,
        /// Block-aligned address.
        tag: u64,
    },
}

impl Lookup {
    /// Returns `true` for [`Lookup::Hit`].
    pub const fn is_hit(&self) -> bool {
        matches!(self, Self::Hit { .. })
    }

    /// Returns `true` for [`Lookup::Miss`].
    pub const fn is_miss(&self) -> bool {
        matches!(self, Self::Miss { .. })
    }

    /// Returns `true` for [`Lookup::NotTracked`].
    pub const fn is_not_tracked(&self) -> bool {
        matches!(self, Self::NotTracked { .. })
    }

    /// Set and tag the lookup resolved, whatever the outcome.
    pub const fn location(&self) -> BlockLocation {
        match *self {
            Self::Hit { set, tag, .. } | Self::Miss { set, tag } | Self::NotTracked { set, tag } => {
                BlockLocation { set, tag }
            }
        }
    }

    /// Way of a hit.
    pub const fn way(&self) -> Option<usize> {
        match *self {
            Self::Hit { way, .. } => Some(way),
            _ => None,
        }
    }
}

/// Address decomposition for one module's cache.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Locator {
    block_mask: u64,
    log_block_size: u32,
    num_sets: usize,
    /// Interleave factor; 1 for bounded ranges.
    interleave: u64,
}

impl Locator {
    /// Builds the decomposition for a validated module.
    pub fn new(module: &ModuleConfig) -> Self {
        let interleave = match module.range {
            AddressRange::Interleaved { modules, .. } => modules.max(1),
            AddressRange::Bounds { .. } => 1,
        };
        Self {
            block_mask: module.cache.block_mask(),
            log_block_size: module.cache.log_block_size(),
            num_sets: module.cache.num_sets,
            interleave,
        }
    }

    /// Computes the set and tag of `addr`. Pure: equal addresses give equal results.
    #[inline]
    pub fn locate(&self, addr: Addr) -> BlockLocation {
        let tag = addr.block_aligned(self.block_mask);
        let block = tag >> self.log_block_size;
        let set = ((block / self.interleave) % self.num_sets as u64) as usize;
        BlockLocation { set, tag }
    }

    /// Number of sets in the real cache.
    pub const fn num_sets(&self) -> usize {
        self.num_sets
    }
}
