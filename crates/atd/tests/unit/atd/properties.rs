//! Randomised Operation Sequence Tests.
//!
//! Drives directories with arbitrary fill/access/replace sequences and checks:
//! - every tracked set's list stays a permutation of its ways;
//! - LRU and FIFO orderings match a reference usage-stack model;
//! - Random victims stay in range.

use proptest::prelude::*;
use rvsim_atd::Atd;
use rvsim_atd::atd::block::BlockState;
use rvsim_atd::atd::locator::Lookup;
use rvsim_atd::atd::{FillOutcome, Replacement};
use rvsim_atd::config::ReplacementPolicy as PolicyType;

use crate::common::{BLOCK, assert_list_integrity, bounded};

const SETS: usize = 4;
const TRACKED: usize = 3;
const WAYS: usize = 4;

#[derive(Clone, Copy, Debug)]
enum Op {
    Fill(u64),
    Access(u64),
    Replace(usize),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0u64..24).prop_map(Op::Fill),
        (0u64..24).prop_map(Op::Access),
        (0usize..SETS + 1).prop_map(Op::Replace),
    ]
}

fn policy() -> impl Strategy<Value = PolicyType> {
    prop_oneof![
        Just(PolicyType::Lru),
        Just(PolicyType::Fifo),
        Just(PolicyType::Random)
    ]
}

/// Usage-stack model of one set: index 0 is the head, the last entry the tail.
#[derive(Clone)]
struct ModelSet {
    order: Vec<usize>,
    tags: Vec<Option<u64>>,
}

impl ModelSet {
    fn new() -> Self {
        Self {
            order: (0..WAYS).collect(),
            tags: vec![None; WAYS],
        }
    }

    fn promote(&mut self, way: usize) {
        self.order.retain(|&w| w != way);
        self.order.insert(0, way);
    }

    fn victim(&mut self) -> usize {
        let way = self.order[WAYS - 1];
        self.promote(way);
        way
    }

    fn find(&self, tag: u64) -> Option<usize> {
        self.tags.iter().position(|&t| t == Some(tag))
    }
}

proptest! {
    #[test]
    fn lists_stay_intact(policy in policy(), ops in prop::collection::vec(op(), 0..200)) {
        let mut atd = Atd::new(&bounded(policy, SETS, WAYS), TRACKED).unwrap();
        for op in ops {
            match op {
                Op::Fill(block) => {
                    let _ = atd.fill(block * BLOCK, BlockState(1));
                }
                Op::Access(block) => {
                    let _ = atd.access(block * BLOCK);
                }
                Op::Replace(set) => {
                    if let Replacement::Victim { way, .. } = atd.replace(set) {
                        prop_assert!(way < WAYS);
                    }
                }
            }
            assert_list_integrity(&atd);
        }
    }

    #[test]
    fn list_policies_match_usage_stack_model(
        lru in any::<bool>(),
        ops in prop::collection::vec(op(), 0..200),
    ) {
        let policy = if lru { PolicyType::Lru } else { PolicyType::Fifo };
        let mut atd = Atd::new(&bounded(policy, SETS, WAYS), TRACKED).unwrap();
        let mut model = vec![ModelSet::new(); TRACKED];

        for op in ops {
            match op {
                Op::Fill(block) => {
                    let tag = block * BLOCK;
                    let set = block as usize % SETS;
                    let outcome = atd.fill(tag, BlockState(1));
                    if set >= TRACKED {
                        prop_assert!(!outcome.is_committed());
                        continue;
                    }
                    let m = &mut model[set];
                    let way = match m.find(tag) {
                        Some(way) => way,
                        None => m.victim(),
                    };
                    let evicted = m.tags[way].filter(|&old| old != tag);
                    m.tags[way] = Some(tag);
                    prop_assert_eq!(outcome, FillOutcome::Committed { set, way, tag, evicted });
                }
                Op::Access(block) => {
                    let tag = block * BLOCK;
                    let set = block as usize % SETS;
                    let lookup = atd.access(tag);
                    if set >= TRACKED {
                        prop_assert!(lookup.is_not_tracked());
                        continue;
                    }
                    let m = &mut model[set];
                    match m.find(tag) {
                        Some(way) => {
                            prop_assert_eq!(lookup.way(), Some(way));
                            if lru {
                                m.promote(way);
                            }
                        }
                        None => prop_assert_eq!(lookup, Lookup::Miss { set, tag }),
                    }
                }
                Op::Replace(set) => {
                    let replacement = atd.replace(set);
                    if set >= TRACKED {
                        prop_assert_eq!(replacement, Replacement::NotTracked { set });
                    } else {
                        let way = model[set].victim();
                        prop_assert_eq!(replacement, Replacement::Victim { set, way });
                    }
                }
            }
        }

        for (set, m) in model.iter().enumerate() {
            prop_assert_eq!(atd.way_order(set), Some(m.order.clone()));
        }
    }
}
