//! Capability Inspection Tests
//!
//! Tests for is_unique and the capability snapshot against each stub:
//! - Unique-only and NonUnique-only stubs
//! - Functional implies unique
//! - Lookup may be unique or non-unique

use crate::common::*;
use shardmap::{is_functional, is_lookup, is_reversible, is_unique, map_any, Capabilities};

fn create(vindex_type: &str) -> std::sync::Arc<dyn Vindex> {
    let params = if vindex_type.starts_with("stub_lookup") {
        lookup_params("name_map")
    } else {
        Params::new()
    };
    stub_registry()
        .create_vindex(vindex_type, vindex_type, &params)
        .unwrap()
}

#[test]
fn is_unique_for_unique_only_stub() {
    let v = create("stub_numeric");
    assert!(is_unique(v.as_ref()));
    assert!(!is_functional(v.as_ref()));
    assert!(!is_reversible(v.as_ref()));
    assert!(!is_lookup(v.as_ref()));
}

#[test]
fn is_unique_false_for_non_unique_only_stub() {
    let v = create("stub_multi");
    assert!(!is_unique(v.as_ref()));
    assert!(v.as_non_unique().is_some());
}

#[test]
fn functional_stub_capabilities() {
    let v = create("stub_hash");
    assert_eq!(
        v.capabilities(),
        Capabilities {
            unique: true,
            non_unique: false,
            reversible: true,
            functional: true,
            lookup: false,
        }
    );
    assert_eq!(v.capabilities().to_string(), "unique|reversible|functional");
}

#[test]
fn lookup_stubs_capabilities() {
    let non_unique = create("stub_lookup");
    assert!(!is_unique(non_unique.as_ref()));
    assert!(is_lookup(non_unique.as_ref()));
    assert!(non_unique.cost() >= 2);

    let unique = create("stub_lookup_unique");
    assert!(is_unique(unique.as_ref()));
    assert!(is_lookup(unique.as_ref()));
    assert!(!is_functional(unique.as_ref()));
}

#[test]
fn every_stub_passes_capability_validation() {
    for vindex_type in stub_registry().vindex_types() {
        let v = create(&vindex_type);
        assert!(
            v.capabilities().validate(v.name()).is_ok(),
            "{} has inconsistent capabilities",
            vindex_type
        );
    }
}

#[test]
fn costs_follow_guidelines() {
    assert_eq!(create("stub_numeric").cost(), 0);
    assert_eq!(create("stub_hash").cost(), 1);
    assert!(create("stub_lookup_unique").cost() >= 2);
}

#[test]
fn map_any_treats_unique_and_non_unique_alike() {
    let cursor = MemoryCursor::new();
    let unique = create("stub_hash");
    let multi = create("stub_multi");

    let from_unique = map_any(unique.as_ref(), &ctx(), &cursor, &ids(&[3])).unwrap();
    assert_eq!(from_unique, vec![vec![hash_ksid(3)]]);

    let from_multi = map_any(multi.as_ref(), &ctx(), &cursor, &ids(&[3])).unwrap();
    assert_eq!(from_multi, vec![vec![hash_ksid(3), hash_ksid(4)]]);
    assert!(cursor.queries().is_empty());
}
