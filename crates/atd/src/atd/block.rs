//! Blocks and sets of the directory.
//!
//! A block holds only what the replacement engine needs: the resident tag and an
//! opaque state word. Its list links live in the owning set's [`WayList`].

use super::waylist::WayList;

/// Validity/coherence word recorded with a block.
///
/// The directory does not interpret the value beyond "zero means invalid"; the
/// caller encodes whatever state its real cache uses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct BlockState(pub u32);

impl BlockState {
    /// The state of a block that was never filled.
    pub const INVALID: Self = Self(0);

    /// Returns `true` for any non-zero state.
    #[inline(always)]
    pub const fn is_valid(self) -> bool {
        self.0 != 0
    }
}

impl From<u32> for BlockState {
    fn from(state: u32) -> Self {
        Self(state)
    }
}

/// One way of one tracked set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Block {
    tag: u64,
    way: usize,
    state: BlockState,
}

impl Block {
    pub(crate) const fn new(way: usize) -> Self {
        Self {
            tag: 0,
            way,
            state: BlockState::INVALID,
        }
    }

    /// Resident tag (block-aligned address).
    #[inline]
    pub const fn tag(&self) -> u64 {
        self.tag
    }

    /// Way index; fixed at creation.
    #[inline]
    pub const fn way(&self) -> usize {
        self.way
    }

    /// Recorded state word.
    #[inline]
    pub const fn state(&self) -> BlockState {
        self.state
    }

    /// Returns `true` if the block holds `tag` with a valid state.
    #[inline]
    pub fn holds(&self, tag: u64) -> bool {
        self.tag == tag && self.state.is_valid()
    }

    pub(crate) fn set(&mut self, tag: u64, state: BlockState) {
        self.tag = tag;
        self.state = state;
    }
}

/// The blocks of one tracked set and their replacement ordering.
#[derive(Clone, Debug)]
pub struct Set {
    pub(crate) blocks: Vec<Block>,
    pub(crate) list: WayList,
}

impl Set {
    pub(crate) fn new(ways: usize) -> Self {
        Self {
            blocks: (0..ways).map(Block::new).collect(),
            list: WayList::new(ways),
        }
    }

    /// Blocks indexed by way.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Replacement ordering of the set.
    pub const fn list(&self) -> &WayList {
        &self.list
    }

    /// Way holding a valid copy of `tag`, if any.
    pub fn find(&self, tag: u64) -> Option<usize> {
        self.blocks.iter().position(|b| b.holds(tag))
    }
}
