//! Random Replacement Policy.
//!
//! Victims are drawn uniformly from the ways of the set. The list ordering is
//! neither consulted nor updated. The generator is owned by the policy so a
//! fixed seed reproduces the same eviction sequence.

use std::fmt;

use rand::{Rng, RngCore, SeedableRng, rngs::StdRng};

use super::ReplacementPolicy;
use crate::atd::waylist::WayList;

/// Random Policy state.
#[derive(Debug)]
pub struct RandomPolicy<R = StdRng> {
    rng: R,
}

impl RandomPolicy<StdRng> {
    /// Creates a policy drawing from a generator seeded with `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: RngCore + fmt::Debug> RandomPolicy<R> {
    /// Creates a policy drawing from `rng`.
    pub const fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: RngCore + fmt::Debug> ReplacementPolicy for RandomPolicy<R> {
    fn victim(&mut self, list: &mut WayList) -> usize {
        self.rng.random_range(0..list.len())
    }
}
