//! # Configuration Tests
//!
//! Module description parsing, defaults, range kinds, and validation.

use pretty_assertions::assert_eq;
use rstest::rstest;
use rvsim_atd::common::Addr;
use rvsim_atd::config::{AddressRange, CacheGeometry, ModuleConfig, ReplacementPolicy};
use rvsim_atd::{Atd, AtdError};

#[test]
fn test_geometry_defaults() {
    let cache = CacheGeometry::default();
    assert_eq!(cache.num_sets, 64);
    assert_eq!(cache.associativity, 4);
    assert_eq!(cache.block_size, 64);
    assert_eq!(cache.policy, ReplacementPolicy::Lru);
    assert_eq!(cache.block_mask(), 63);
    assert_eq!(cache.log_block_size(), 6);
}

#[test]
fn test_from_json_interleaved() {
    let json = r#"{
        "name": "l2-1",
        "cache": { "num_sets": 256, "associativity": 8, "block_size": 128, "policy": "FIFO" },
        "range": { "kind": "interleaved", "modules": 4, "index": 1 }
    }"#;
    let module = ModuleConfig::from_json(json).unwrap();
    assert_eq!(module.name, "l2-1");
    assert_eq!(module.cache.num_sets, 256);
    assert_eq!(module.cache.associativity, 8);
    assert_eq!(module.cache.block_size, 128);
    assert_eq!(module.cache.policy, ReplacementPolicy::Fifo);
    assert_eq!(module.range, AddressRange::Interleaved { modules: 4, index: 1 });
}

#[test]
fn test_from_json_bounds_with_defaults() {
    let json = r#"{ "name": "mm", "range": { "kind": "bounds", "low": 4096, "high": 8191 } }"#;
    let module = ModuleConfig::from_json(json).unwrap();
    assert_eq!(module.cache, CacheGeometry::default());
    assert_eq!(module.range, AddressRange::Bounds { low: 4096, high: 8191 });
}

#[rstest]
#[case("LRU", ReplacementPolicy::Lru)]
#[case("Lru", ReplacementPolicy::Lru)]
#[case("FIFO", ReplacementPolicy::Fifo)]
#[case("Fifo", ReplacementPolicy::Fifo)]
#[case("RANDOM", ReplacementPolicy::Random)]
#[case("Random", ReplacementPolicy::Random)]
fn test_policy_spellings(#[case] name: &str, #[case] expected: ReplacementPolicy) {
    let json = format!(
        r#"{{ "name": "m", "cache": {{ "policy": "{name}" }}, "range": {{ "kind": "bounds" }} }}"#
    );
    assert_eq!(ModuleConfig::from_json(&json).unwrap().cache.policy, expected);
}

#[test]
fn test_unknown_policy_is_a_parse_error() {
    let json = r#"{ "name": "m", "cache": { "policy": "PLRU" }, "range": { "kind": "bounds" } }"#;
    assert!(matches!(
        ModuleConfig::from_json(json),
        Err(AtdError::Parse(_))
    ));
}

#[test]
fn test_invalid_range_kind_names_the_kind() {
    let json = r#"{ "name": "l3", "range": { "kind": "striped" } }"#;
    let err = ModuleConfig::from_json(json).unwrap_err();
    assert!(matches!(
        &err,
        AtdError::InvalidRangeKind { module, kind } if module == "l3" && kind == "striped"
    ));
    assert_eq!(err.to_string(), "l3: invalid range kind (striped)");
}

#[test]
fn test_malformed_json() {
    assert!(matches!(
        ModuleConfig::from_json("{ not json"),
        Err(AtdError::Parse(_))
    ));
}

#[rstest]
#[case(0, 4, 64)]
#[case(16, 0, 64)]
#[case(16, 4, 0)]
#[case(16, 4, 48)]
fn test_validate_rejects_bad_geometry(
    #[case] num_sets: usize,
    #[case] associativity: usize,
    #[case] block_size: u64,
) {
    let module = ModuleConfig::new(
        "bad",
        CacheGeometry {
            num_sets,
            associativity,
            block_size,
            ..CacheGeometry::default()
        },
        AddressRange::default(),
    );
    assert!(module.validate().is_err());
    assert!(Atd::new(&module, 0).is_err());
}

#[test]
fn test_validate_rejects_zero_interleave() {
    let json = r#"{ "name": "l2", "range": { "kind": "interleaved", "modules": 0 } }"#;
    assert!(matches!(
        ModuleConfig::from_json(json),
        Err(AtdError::ZeroInterleave { .. })
    ));
}

#[test]
fn test_block_size_error_message() {
    let module = ModuleConfig::new(
        "l1",
        CacheGeometry {
            block_size: 48,
            ..CacheGeometry::default()
        },
        AddressRange::default(),
    );
    let err = module.validate().unwrap_err();
    assert_eq!(err.to_string(), "l1: block size 48 is not a power of two");
}

#[rstest]
#[case(AddressRange::Bounds { low: 0x1000, high: 0x1fff }, 0x1000, true)]
#[case(AddressRange::Bounds { low: 0x1000, high: 0x1fff }, 0x1fff, true)]
#[case(AddressRange::Bounds { low: 0x1000, high: 0x1fff }, 0x2000, false)]
#[case(AddressRange::Interleaved { modules: 4, index: 1 }, 64, true)]
#[case(AddressRange::Interleaved { modules: 4, index: 1 }, 64 * 5 + 3, true)]
#[case(AddressRange::Interleaved { modules: 4, index: 1 }, 128, false)]
fn test_range_serves(#[case] range: AddressRange, #[case] addr: u64, #[case] expected: bool) {
    assert_eq!(range.serves(Addr::new(addr), 6), expected);
}
