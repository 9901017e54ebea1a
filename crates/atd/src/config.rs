//! Owning module configuration.
//!
//! The directory shadows the cache of one module in the memory hierarchy. This
//! module describes that module as far as the directory cares:
//! 1. **Defaults:** Baseline cache geometry when a description omits a field.
//! 2. **Geometry:** Sets, ways, block size, and replacement policy of the real cache.
//! 3. **Address range:** How the module's address space is carved (interleaved or bounded).
//!
//! Descriptions are usually supplied as JSON through [`ModuleConfig::from_json`].

use serde::Deserialize;

use crate::common::{Addr, AtdError};

/// Default cache geometry constants.
mod defaults {
    /// Number of sets in the real cache.
    pub const NUM_SETS: usize = 64;

    /// Associativity (ways per set).
    pub const ASSOCIATIVITY: usize = 4;

    /// Block size in bytes.
    pub const BLOCK_SIZE: u64 = 64;

    /// Seed for the random replacement generator.
    ///
    /// Fixed so that two runs over the same trace evict the same ways.
    pub const SEED: u64 = 123_456_789;
}

/// Cache replacement policy algorithms the directory can emulate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ReplacementPolicy {
    /// Least Recently Used.
    ///
    /// Every reference moves the block to the head of its set's list.
    #[default]
    #[serde(alias = "Lru")]
    Lru,
    /// First In First Out.
    ///
    /// Only insertions reorder the list; re-references leave it untouched.
    #[serde(alias = "Fifo")]
    Fifo,
    /// Random replacement.
    ///
    /// Victims are drawn uniformly; the list is never consulted.
    #[serde(alias = "Random")]
    Random,
}

/// Geometry of the real cache the directory shadows.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CacheGeometry {
    /// Number of sets in the real cache.
    #[serde(default = "CacheGeometry::default_num_sets")]
    pub num_sets: usize,

    /// Associativity (number of ways)
    #[serde(default = "CacheGeometry::default_associativity")]
    pub associativity: usize,

    /// Block size in bytes; must be a power of two.
    #[serde(default = "CacheGeometry::default_block_size")]
    pub block_size: u64,

    /// Replacement policy
    #[serde(default)]
    pub policy: ReplacementPolicy,

    /// Seed for the random replacement generator
    #[serde(default = "CacheGeometry::default_seed")]
    pub seed: u64,
}

impl CacheGeometry {
    fn default_num_sets() -> usize {
        defaults::NUM_SETS
    }

    fn default_associativity() -> usize {
        defaults::ASSOCIATIVITY
    }

    fn default_block_size() -> u64 {
        defaults::BLOCK_SIZE
    }

    fn default_seed() -> u64 {
        defaults::SEED
    }

    /// Mask selecting the offset bits within a block.
    #[inline]
    pub const fn block_mask(&self) -> u64 {
        self.block_size.wrapping_sub(1)
    }

    /// Base-two logarithm of the block size.
    #[inline]
    pub const fn log_block_size(&self) -> u32 {
        self.block_size.trailing_zeros()
    }
}

impl Default for CacheGeometry {
    fn default() -> Self {
        Self {
            num_sets: defaults::NUM_SETS,
            associativity: defaults::ASSOCIATIVITY,
            block_size: defaults::BLOCK_SIZE,
            policy: ReplacementPolicy::default(),
            seed: defaults::SEED,
        }
    }
}

/// How the owning module's address space is assigned to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressRange {
    /// Blocks are interleaved across `modules` sibling modules; this module
    /// serves the blocks whose number modulo `modules` equals `index`.
    Interleaved {
        /// Number of modules sharing the address space.
        modules: u64,
        /// Which interleave slot this module serves.
        index: u64,
    },
    /// The module serves the inclusive range `[low, high]`.
    Bounds {
        /// First byte served.
        low: u64,
        /// Last byte served.
        high: u64,
    },
}

impl AddressRange {
    /// Returns whether the module serves `addr`.
    ///
    /// # Arguments
    ///
    /// * `addr` - The byte address.
    /// * `log_block_size` - Base-two logarithm of the block size, the interleave granularity.
    pub fn serves(&self, addr: Addr, log_block_size: u32) -> bool {
        match *self {
            Self::Interleaved { modules, index } => {
                modules != 0 && addr.block_number(log_block_size) % modules == index
            }
            Self::Bounds { low, high } => (low..=high).contains(&addr.val()),
        }
    }
}

impl Default for AddressRange {
    fn default() -> Self {
        Self::Bounds {
            low: 0,
            high: u64::MAX,
        }
    }
}

/// Address range as written in a module description, before the kind is checked.
#[derive(Debug, Deserialize)]
struct RawAddressRange {
    kind: String,
    #[serde(default)]
    modules: u64,
    #[serde(default)]
    index: u64,
    #[serde(default)]
    low: u64,
    #[serde(default = "RawAddressRange::default_high")]
    high: u64,
}

impl RawAddressRange {
    const fn default_high() -> u64 {
        u64::MAX
    }

    fn resolve(self, module: &str) -> Result<AddressRange, AtdError> {
        match self.kind.to_ascii_lowercase().as_str() {
            "interleaved" => Ok(AddressRange::Interleaved {
                modules: self.modules,
                index: self.index,
            }),
            "bounds" | "bounded" => Ok(AddressRange::Bounds {
                low: self.low,
                high: self.high,
            }),
            _ => Err(AtdError::InvalidRangeKind {
                module: module.to_owned(),
                kind: self.kind,
            }),
        }
    }
}

/// Module description as written in JSON.
#[derive(Debug, Deserialize)]
struct RawModuleConfig {
    name: String,
    #[serde(default)]
    cache: CacheGeometry,
    range: RawAddressRange,
}

/// The owning module, as seen by its auxiliary tag directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleConfig {
    /// Module name, used in diagnostics and log fields.
    pub name: String,
    /// Geometry of the module's real cache.
    pub cache: CacheGeometry,
    /// How the module's address space is assigned.
    pub range: AddressRange,
}

impl ModuleConfig {
    /// Creates a module description from its parts.
    pub fn new(name: impl Into<String>, cache: CacheGeometry, range: AddressRange) -> Self {
        Self {
            name: name.into(),
            cache,
            range,
        }
    }

    /// Parses and validates a JSON module description.
    ///
    /// ```json
    /// { "name": "l2-0",
    ///   "cache": { "num_sets": 256, "associativity": 8, "block_size": 64, "policy": "FIFO" },
    ///   "range": { "kind": "interleaved", "modules": 4, "index": 0 } }
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`AtdError::Parse`] for malformed JSON, [`AtdError::InvalidRangeKind`]
    /// for an unrecognized range kind, and any error of [`ModuleConfig::validate`].
    pub fn from_json(json: &str) -> Result<Self, AtdError> {
        let raw: RawModuleConfig = serde_json::from_str(json)?;
        let range = raw.range.resolve(&raw.name)?;
        let config = Self {
            name: raw.name,
            cache: raw.cache,
            range,
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks that the directory can model this module.
    ///
    /// # Errors
    ///
    /// Returns the first geometry or range fault found.
    pub fn validate(&self) -> Result<(), AtdError> {
        let module = || self.name.clone();
        if self.cache.associativity == 0 {
            return Err(AtdError::ZeroAssociativity { module: module() });
        }
        if self.cache.num_sets == 0 {
            return Err(AtdError::ZeroSets { module: module() });
        }
        if !self.cache.block_size.is_power_of_two() {
            return Err(AtdError::InvalidBlockSize {
                module: module(),
                block_size: self.cache.block_size,
            });
        }
        if let AddressRange::Interleaved { modules: 0, .. } = self.range {
            return Err(AtdError::ZeroInterleave { module: module() });
        }
        Ok(())
    }
}
