//! Registry Tests
//!
//! Tests for registration and creation:
//! - Duplicate registration is rejected
//! - Unknown types fail with NotFound
//! - Params reach the constructor verbatim
//! - Constructor errors surface unchanged
//! - Constructors may capture state

use crate::common::*;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;

type Seen = Arc<Mutex<Vec<(String, Params)>>>;

/// Registry whose "recording" type logs every call it receives
fn recording_registry() -> (Registry, Seen) {
    let registry = Registry::new();
    let seen: Seen = Arc::default();
    let log = Arc::clone(&seen);
    registry
        .register("recording", move |name: &str, params: &Params| {
            log.lock().push((name.to_string(), params.clone()));
            StubHash::create(name, params)
        })
        .unwrap();
    (registry, seen)
}

// ============================================================================
// Creation
// ============================================================================

#[test]
fn create_stub_hash_scenario() {
    let registry = stub_registry();
    let v = registry
        .create_vindex("stub_hash", "idx1", &Params::new())
        .unwrap();
    assert_eq!(v.cost(), 1);
    assert_eq!(v.name(), "idx1");
    assert_eq!(v.to_string(), "idx1");
}

#[test]
fn create_nonexistent_scenario() {
    let registry = stub_registry();
    let before = registry.vindex_types();

    let result = registry.create_vindex("nonexistent", "idx2", &Params::new());
    let err = result.err().expect("no instance for an unknown type");
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert!(err.to_string().contains("nonexistent"));
    assert_eq!(registry.vindex_types(), before);
}

#[test]
fn params_are_delivered_verbatim() {
    let (registry, seen) = recording_registry();

    let params = Params::new()
        .with("table", "t")
        .with("batch", 7i64)
        .with("flag", true)
        .with("raw", vec![0u8, 1, 2]);
    registry
        .create_vindex("recording", "rec_idx", &params)
        .unwrap();

    let seen = seen.lock().clone();
    assert_eq!(seen, vec![("rec_idx".to_string(), params)]);
}

#[test]
fn capturing_constructors_are_per_registry() {
    let (first, first_seen) = recording_registry();
    let (second, second_seen) = recording_registry();

    first
        .create_vindex("recording", "a_idx", &Params::new())
        .unwrap();
    first
        .create_vindex("recording", "b_idx", &Params::new())
        .unwrap();
    second
        .create_vindex("recording", "c_idx", &Params::new())
        .unwrap();

    let names = |seen: &Seen| -> Vec<String> {
        seen.lock().iter().map(|(name, _)| name.clone()).collect()
    };
    assert_eq!(names(&first_seen), vec!["a_idx", "b_idx"]);
    assert_eq!(names(&second_seen), vec!["c_idx"]);
}

#[test]
fn constructor_rejection_surfaces_exact_error() {
    let registry = stub_registry();
    let params = Params::new().with("table", "name_map").with("from", "name");

    let err = registry
        .create_vindex("stub_lookup", "name_idx", &params)
        .err()
        .unwrap();
    assert_eq!(
        err,
        VindexError::MissingParam {
            vindex: "name_idx".to_string(),
            param: "to".to_string(),
        }
    );

    let params = lookup_params("name_map").with("to", 5i64);
    let err = registry
        .create_vindex("stub_lookup", "name_idx", &params)
        .err()
        .unwrap();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert!(matches!(err, VindexError::InvalidParam { ref param, .. } if param == "to"));
}

#[test]
fn instances_are_distinct_objects() {
    let registry = stub_registry();
    let a = registry
        .create_vindex("stub_hash", "idx", &Params::new())
        .unwrap();
    let b = registry
        .create_vindex("stub_hash", "idx", &Params::new())
        .unwrap();
    assert_eq!(a.name(), b.name());
    assert!(!shardmap::same_vindex(&a, &b));
    assert!(shardmap::same_vindex(&a, &Arc::clone(&a)));
}

// ============================================================================
// Registration
// ============================================================================

#[test]
fn duplicate_registration_is_rejected() {
    let registry = stub_registry();
    let count = registry.len();

    let err = registry
        .register("stub_hash", StubNumeric::create)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::AlreadyRegistered);
    assert_eq!(registry.len(), count);

    // Original constructor still wins
    let v = registry
        .create_vindex("stub_hash", "idx", &Params::new())
        .unwrap();
    assert_eq!(v.cost(), 1);
}

#[test]
fn registries_are_isolated() {
    let a = Registry::new();
    let b = Registry::new();
    a.register("stub_hash", StubHash::create).unwrap();
    b.register("stub_hash", StubHash::create).unwrap();
    let missing = b.create_vindex("stub_numeric", "x", &Params::new());
    assert!(missing.is_err());
    assert!(a.contains("stub_hash"));
    assert!(!a.contains("stub_numeric"));
}

#[test]
fn concurrent_registration_of_same_name_admits_one() {
    let registry = Arc::new(Registry::new());
    let barrier = Arc::new(Barrier::new(8));
    let wins = Arc::new(AtomicUsize::new(0));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let registry = Arc::clone(&registry);
            let barrier = Arc::clone(&barrier);
            let wins = Arc::clone(&wins);
            thread::spawn(move || {
                barrier.wait();
                if registry.register("stub_hash", StubHash::create).is_ok() {
                    wins.fetch_add(1, Ordering::Relaxed);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(wins.load(Ordering::Relaxed), 1);
    assert_eq!(registry.len(), 1);
}

#[test]
fn concurrent_registration_of_distinct_names() {
    let registry = Arc::new(Registry::new());
    let handles: Vec<_> = (0..8)
        .map(|i| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                registry
                    .register(format!("type_{}", i), StubHash::create)
                    .unwrap();
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
    assert_eq!(registry.len(), 8);
}
