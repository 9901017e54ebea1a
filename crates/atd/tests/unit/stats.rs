//! Statistics Counter Tests.

use pretty_assertions::assert_eq;
use rvsim_atd::Atd;
use rvsim_atd::atd::block::BlockState;
use rvsim_atd::config::ReplacementPolicy;
use rvsim_atd::stats::AtdStats;

use crate::common::{addr_in_set, bounded};

#[test]
fn counters_follow_operations() {
    let mut atd = Atd::new(&bounded(ReplacementPolicy::Lru, 2, 2), 1).unwrap();
    let valid = BlockState(1);

    let _ = atd.fill(addr_in_set(0, 0, 2), valid);
    let _ = atd.fill(addr_in_set(0, 1, 2), valid);
    let _ = atd.fill(addr_in_set(0, 2, 2), valid); // evicts block 0
    let _ = atd.fill(addr_in_set(1, 0, 2), valid); // untracked
    let _ = atd.access(addr_in_set(0, 2, 2)); // hit
    let _ = atd.access(addr_in_set(0, 0, 2)); // miss
    let _ = atd.access(addr_in_set(1, 0, 2)); // untracked
    let _ = atd.replace(0);

    assert_eq!(
        *atd.stats(),
        AtdStats {
            accesses: 3,
            hits: 1,
            misses: 1,
            untracked: 2,
            fills: 3,
            evictions: 1,
            replacements: 4,
        }
    );
    assert!((atd.stats().hit_rate() - 0.5).abs() < f64::EPSILON);

    atd.reset_stats();
    assert_eq!(*atd.stats(), AtdStats::default());
}

#[test]
fn hit_rate_without_references_is_zero() {
    assert!(AtdStats::default().hit_rate().abs() < f64::EPSILON);
}
