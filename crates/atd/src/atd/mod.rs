//! Auxiliary Tag Directory.
//!
//! A shadow of one module's set-associative cache that records tags and
//! replacement order only. It answers "what would this cache hold" for a subset
//! of its sets without touching data or coherence state.
//!
//! Operations resolve an address to `(set, tag)` with the module's interleaving,
//! then report one of three outcomes: hit, miss, or not tracked when the set
//! index lies beyond the directory's tracked range. Misses that fill pick a
//! victim through the configured replacement policy.

/// Blocks, block state, and sets.
pub mod block;
/// Set/tag decomposition and lookup outcomes.
pub mod locator;
/// Replacement policy implementations (LRU, FIFO, Random).
pub mod policies;
/// Index-based per-set way ordering.
pub mod waylist;

use std::fmt;

use rand::RngCore;
use tracing::{debug, trace};

use self::block::{Block, BlockState, Set};
use self::locator::{BlockLocation, Locator, Lookup};
use self::policies::{FifoPolicy, LruPolicy, RandomPolicy, ReplacementPolicy};
use crate::common::{Addr, AtdError};
use crate::config::{ModuleConfig, ReplacementPolicy as PolicyType};
use crate::stats::AtdStats;

/// Outcome of explicit victim selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Replacement {
    /// The way chosen for eviction.
    Victim {
        /// Set index.
        set: usize,
        /// Way to evict.
        way: usize,
    },
    /// The set lies outside the tracked range.
    NotTracked {
        /// Set index.
        set: usize,
    },
}

/// Outcome of a fill.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FillOutcome {
    /// The tag and state were written.
    Committed {
        /// Set index.
        set: usize,
        /// Way written.
        way: usize,
        /// Block-aligned address written.
        tag: u64,
        /// Valid tag displaced by this fill, if any.
        evicted: Option<u64>,
    },
    /// The set lies outside the tracked range; nothing was written.
    NotTracked {
        /// Set index in the real cache.
        set: usize,
        /// Block-aligned address.
        tag: u64,
    },
}

impl FillOutcome {
    /// Returns `true` if the fill was written.
    pub const fn is_committed(&self) -> bool {
        matches!(self, Self::Committed { .. })
    }
}

/// Auxiliary tag directory for one module.
pub struct Atd {
    module: ModuleConfig,
    locator: Locator,
    sets: Vec<Set>,
    policy: Box<dyn ReplacementPolicy>,
    stats: AtdStats,
}

impl Atd {
    /// Creates a directory tracking the first `num_sets` sets of `module`'s cache.
    ///
    /// The Random policy draws from a generator seeded with `module.cache.seed`.
    ///
    /// # Arguments
    ///
    /// * `module` - The owning module.
    /// * `num_sets` - Number of sets to track; may be smaller than the real cache's.
    ///
    /// # Errors
    ///
    /// Returns an [`AtdError`] if the module fails validation or `num_sets`
    /// exceeds the real cache's set count.
    pub fn new(module: &ModuleConfig, num_sets: usize) -> Result<Self, AtdError> {
        let policy: Box<dyn ReplacementPolicy> = match module.cache.policy {
            PolicyType::Lru => Box::new(LruPolicy::new()),
            PolicyType::Fifo => Box::new(FifoPolicy::new()),
            PolicyType::Random => Box::new(RandomPolicy::seeded(module.cache.seed)),
        };
        Self::build(module, num_sets, policy)
    }

    /// Creates a directory whose Random policy draws from `rng`.
    ///
    /// The generator is ignored by LRU and FIFO.
    ///
    /// # Errors
    ///
    /// Same as [`Atd::new`].
    pub fn with_rng<R>(module: &ModuleConfig, num_sets: usize, rng: R) -> Result<Self, AtdError>
    where
        R: RngCore + fmt::Debug + 'static,
    {
        let policy: Box<dyn ReplacementPolicy> = match module.cache.policy {
            PolicyType::Lru => Box::new(LruPolicy::new()),
            PolicyType::Fifo => Box::new(FifoPolicy::new()),
            PolicyType::Random => Box::new(RandomPolicy::with_rng(rng)),
        };
        Self::build(module, num_sets, policy)
    }

    fn build(
        module: &ModuleConfig,
        num_sets: usize,
        policy: Box<dyn ReplacementPolicy>,
    ) -> Result<Self, AtdError> {
        module.validate()?;
        if num_sets > module.cache.num_sets {
            return Err(AtdError::TooManyTrackedSets {
                module: module.name.clone(),
                tracked: num_sets,
                sets: module.cache.num_sets,
            });
        }

        let ways = module.cache.associativity;
        let sets = (0..num_sets).map(|_| Set::new(ways)).collect();
        debug!(
            module = %module.name,
            tracked_sets = num_sets,
            sets = module.cache.num_sets,
            ways,
            policy = ?module.cache.policy,
            "created auxiliary tag directory"
        );

        Ok(Self {
            module: module.clone(),
            locator: Locator::new(module),
            sets,
            policy,
            stats: AtdStats::default(),
        })
    }

    /// Releases every tracked set. Calling it again does nothing.
    ///
    /// Afterwards every operation reports the set as not tracked.
    pub fn destroy(&mut self) {
        if self.sets.is_empty() {
            return;
        }
        debug!(module = %self.module.name, tracked_sets = self.sets.len(), "destroyed auxiliary tag directory");
        self.sets = Vec::new();
    }

    /// The owning module.
    pub const fn module(&self) -> &ModuleConfig {
        &self.module
    }

    /// Replacement policy in effect.
    pub const fn policy(&self) -> PolicyType {
        self.module.cache.policy
    }

    /// Number of sets the directory tracks.
    pub fn num_tracked_sets(&self) -> usize {
        self.sets.len()
    }

    /// Counters collected so far.
    pub const fn stats(&self) -> &AtdStats {
        &self.stats
    }

    /// Clears the counters.
    pub fn reset_stats(&mut self) {
        self.stats.reset();
    }

    /// Computes the set and tag of `addr` in the real cache.
    #[inline]
    pub fn locate(&self, addr: impl Into<Addr>) -> BlockLocation {
        self.locator.locate(addr.into())
    }

    /// Looks `addr` up without changing any state.
    pub fn lookup(&self, addr: impl Into<Addr>) -> Lookup {
        let BlockLocation { set, tag } = self.locate(addr);
        let Some(entry) = self.sets.get(set) else {
            return Lookup::NotTracked { set, tag };
        };
        match entry.find(tag) {
            Some(way) => Lookup::Hit {
                set,
                way,
                tag,
                state: entry.blocks[way].state(),
            },
            None => Lookup::Miss { set, tag },
        }
    }

    /// Selects a victim way in `set`.
    ///
    /// Under LRU and FIFO the victim is moved to the head of the list right away,
    /// reserving it until the fill is recorded.
    pub fn replace(&mut self, set: usize) -> Replacement {
        if set >= self.sets.len() {
            return Replacement::NotTracked { set };
        }
        let way = self.select_victim(set);
        Replacement::Victim { set, way }
    }

    fn select_victim(&mut self, set: usize) -> usize {
        let way = self.policy.victim(&mut self.sets[set].list);
        self.stats.replacements += 1;
        trace!(module = %self.module.name, set, way, "replacement victim");
        way
    }

    /// Installs `addr` with `state`, evicting through the policy on a miss.
    ///
    /// A block already holding the tag is overwritten in place.
    pub fn fill(&mut self, addr: impl Into<Addr>, state: BlockState) -> FillOutcome {
        let BlockLocation { set, tag } = self.locate(addr);
        if set >= self.sets.len() {
            self.stats.untracked += 1;
            return FillOutcome::NotTracked { set, tag };
        }

        let way = match self.sets[set].find(tag) {
            Some(way) => way,
            None => self.select_victim(set),
        };

        let entry = &mut self.sets[set];
        let previous = &entry.blocks[way];
        let tag_changed = previous.tag() != tag;
        let evicted = (tag_changed && previous.state().is_valid()).then_some(previous.tag());

        self.policy.on_fill(&mut entry.list, way, tag_changed);
        entry.blocks[way].set(tag, state);

        self.stats.fills += 1;
        if let Some(old) = evicted {
            self.stats.evictions += 1;
            trace!(module = %self.module.name, set, way, old, new = tag, "eviction");
        }
        trace!(module = %self.module.name, set, way, tag, state = state.0, "fill");

        FillOutcome::Committed {
            set,
            way,
            tag,
            evicted,
        }
    }

    /// Records a reference to `addr` for replacement ordering.
    ///
    /// Tags and states are left alone. The lookup outcome is returned unchanged.
    pub fn access(&mut self, addr: impl Into<Addr>) -> Lookup {
        let lookup = self.lookup(addr);
        self.stats.accesses += 1;
        match lookup {
            Lookup::Hit {
                set, way, state, ..
            } => {
                self.stats.hits += 1;
                self.policy
                    .on_access(&mut self.sets[set].list, way, state.is_valid());
            }
            Lookup::Miss { .. } => self.stats.misses += 1,
            Lookup::NotTracked { .. } => self.stats.untracked += 1,
        }
        lookup
    }

    /// Distance from the head of the block holding `addr`, if resident.
    ///
    /// Under LRU this is the block's stack distance.
    pub fn stack_position(&self, addr: impl Into<Addr>) -> Option<usize> {
        match self.lookup(addr) {
            Lookup::Hit { set, way, .. } => self.sets[set].list.position(way),
            Lookup::Miss { .. } | Lookup::NotTracked { .. } => None,
        }
    }

    /// Ways of a tracked set from head to tail.
    pub fn way_order(&self, set: usize) -> Option<Vec<usize>> {
        self.sets.get(set).map(|s| s.list.iter().collect())
    }

    /// A tracked set.
    pub fn set(&self, set: usize) -> Option<&Set> {
        self.sets.get(set)
    }

    /// A block of a tracked set.
    pub fn block(&self, set: usize, way: usize) -> Option<&Block> {
        self.sets.get(set)?.blocks.get(way)
    }
}

impl fmt::Debug for Atd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Atd")
            .field("module", &self.module.name)
            .field("policy", &self.module.cache.policy)
            .field("tracked_sets", &self.sets.len())
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}
