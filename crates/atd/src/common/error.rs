//! Configuration fault definitions.
//!
//! Every error in this crate is a setup fault: a module description the
//! directory cannot model. Runtime outcomes (hit, miss, untracked set) are never
//! errors and are reported through the result enums in [`crate::atd`].

use thiserror::Error;

/// Faults raised while parsing a module description or building a directory.
#[derive(Debug, Error)]
pub enum AtdError {
    /// The module description could not be parsed.
    ///
    /// Malformed JSON and unknown replacement policy names land here.
    #[error("invalid module description: {0}")]
    Parse(#[from] serde_json::Error),

    /// The address range kind is not one the locator understands.
    #[error("{module}: invalid range kind ({kind})")]
    InvalidRangeKind {
        /// Name of the owning module.
        module: String,
        /// The rejected kind.
        kind: String,
    },

    /// Associativity must be at least one way.
    #[error("{module}: associativity must be non-zero")]
    ZeroAssociativity {
        /// Name of the owning module.
        module: String,
    },

    /// The real cache must have at least one set.
    #[error("{module}: number of sets must be non-zero")]
    ZeroSets {
        /// Name of the owning module.
        module: String,
    },

    /// Block size must be a non-zero power of two.
    #[error("{module}: block size {block_size} is not a power of two")]
    InvalidBlockSize {
        /// Name of the owning module.
        module: String,
        /// The rejected block size in bytes.
        block_size: u64,
    },

    /// An interleaved range needs at least one module sharing the address space.
    #[error("{module}: interleaving factor must be non-zero")]
    ZeroInterleave {
        /// Name of the owning module.
        module: String,
    },

    /// A directory cannot track more sets than the real cache has.
    #[error("{module}: cannot track {tracked} sets of a cache with {sets} sets")]
    TooManyTrackedSets {
        /// Name of the owning module.
        module: String,
        /// Requested number of tracked sets.
        tracked: usize,
        /// Number of sets in the real cache.
        sets: usize,
    },
}
