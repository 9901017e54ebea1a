//! Auxiliary tag directory library.
//!
//! This crate implements a data-less shadow of a set-associative cache with the following:
//! 1. **Way lists:** Per-set, index-based orderings of ways from head (most recently touched) to tail (next victim).
//! 2. **Locator:** Set/tag decomposition following the owning module's address interleaving.
//! 3. **Replacement:** LRU, FIFO, and Random victim selection over tags only.
//! 4. **Directory:** Fill, access, and lookup operations with explicit hit/miss/untracked outcomes.
//! 5. **Configuration and statistics:** Serde-backed module geometry and directory counters.

/// Common types (addresses, errors).
pub mod common;
/// Owning module configuration (geometry, address range, replacement policy).
pub mod config;
/// The auxiliary tag directory (blocks, way lists, locator, replacement policies).
pub mod atd;
/// Directory statistics collection.
pub mod stats;

/// Main directory type; construct with `Atd::new`.
pub use crate::atd::Atd;
/// Error type returned for configuration faults.
pub use crate::common::error::AtdError;
/// Owning module configuration; use `ModuleConfig::from_json` or build it directly.
pub use crate::config::ModuleConfig;
