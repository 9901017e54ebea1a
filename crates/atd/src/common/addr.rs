//! Byte address type.
//!
//! The directory only ever sees byte addresses issued to the owning module. This
//! module wraps them in a strong type and provides the block-granular helpers the
//! locator needs:
//! 1. **Alignment:** Clearing the offset bits to obtain the block tag.
//! 2. **Block numbering:** Shifting the offset away to obtain the block number.

use std::fmt;

/// A byte address issued to the owning module.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Addr(pub u64);

impl Addr {
    /// Creates a new address from a raw 64-bit value.
    #[inline(always)]
    pub const fn new(addr: u64) -> Self {
        Self(addr)
    }

    /// Returns the raw 64-bit address value.
    #[inline(always)]
    pub const fn val(self) -> u64 {
        self.0
    }

    /// Clears the block offset bits.
    ///
    /// # Arguments
    ///
    /// * `block_mask` - `block_size - 1`.
    ///
    /// # Returns
    ///
    /// The address of the first byte of the enclosing block.
    #[inline(always)]
    pub const fn block_aligned(self, block_mask: u64) -> u64 {
        self.0 & !block_mask
    }

    /// Returns the block number (address divided by the block size).
    #[inline(always)]
    pub const fn block_number(self, log_block_size: u32) -> u64 {
        self.0 >> log_block_size
    }
}

impl From<u64> for Addr {
    fn from(addr: u64) -> Self {
        Self(addr)
    }
}

impl From<Addr> for u64 {
    fn from(addr: Addr) -> Self {
        addr.0
    }
}

impl fmt::Display for Addr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}
