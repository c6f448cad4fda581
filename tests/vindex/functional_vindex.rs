//! Functional Vindex Tests
//!
//! Tests for a computed, reversible mapping:
//! - map preserves input order and length
//! - verify distinguishes matching and non-matching keyspace ids
//! - duplicate ids are mapped positionally
//! - reverse_map inverts map

use crate::common::*;
use shardmap::map_unique;

fn hash_vindex() -> std::sync::Arc<dyn Vindex> {
    stub_registry()
        .create_vindex("stub_hash", "hash_idx", &Params::new())
        .unwrap()
}

#[test]
fn map_preserves_order() {
    let v = hash_vindex();
    let cursor = MemoryCursor::new();
    let out = map_unique(v.as_ref(), &ctx(), &cursor, &ids(&[1, 2])).unwrap();
    assert_eq!(out, vec![Some(hash_ksid(1)), Some(hash_ksid(2))]);

    let out = map_unique(v.as_ref(), &ctx(), &cursor, &ids(&[2, 1])).unwrap();
    assert_eq!(out, vec![Some(hash_ksid(2)), Some(hash_ksid(1))]);
}

#[test]
fn map_empty_input() {
    let v = hash_vindex();
    let out = map_unique(v.as_ref(), &ctx(), &MemoryCursor::new(), &[]).unwrap();
    assert!(out.is_empty());
}

#[test]
fn duplicate_ids_map_positionally() {
    let v = hash_vindex();
    let input = ids(&[7, 9, 7, 7]);
    let out = map_unique(v.as_ref(), &ctx(), &MemoryCursor::new(), &input).unwrap();
    assert_eq!(out.len(), 4);
    assert_eq!(out[0], out[2]);
    assert_eq!(out[0], out[3]);
    assert_ne!(out[0], out[1]);
}

#[test]
fn null_id_yields_no_mapping_sentinel() {
    let v = hash_vindex();
    let input = vec![Value::Uint(1), Value::Null, Value::Uint(2)];
    let out = map_unique(v.as_ref(), &ctx(), &MemoryCursor::new(), &input).unwrap();
    assert_eq!(out, vec![Some(hash_ksid(1)), None, Some(hash_ksid(2))]);
}

#[test]
fn unparseable_id_is_an_error_not_a_miss() {
    let v = hash_vindex();
    let input = vec![Value::Uint(1), Value::from("abc")];
    let err = map_unique(v.as_ref(), &ctx(), &MemoryCursor::new(), &input).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert!(err.to_string().contains("abc"));
}

#[test]
fn numeric_text_and_signed_ids_agree() {
    let v = hash_vindex();
    let input = vec![Value::Uint(42), Value::Int(42), Value::from("42")];
    let out = map_unique(v.as_ref(), &ctx(), &MemoryCursor::new(), &input).unwrap();
    assert!(out.iter().all(|k| *k == Some(hash_ksid(42))));
}

#[test]
fn verify_true_and_false() {
    let v = hash_vindex();
    let cursor = MemoryCursor::new();
    let id1 = Value::Uint(1);

    assert!(v.verify(&ctx(), &cursor, &id1, &hash_ksid(1)).unwrap());
    assert!(!v.verify(&ctx(), &cursor, &id1, &hash_ksid(2)).unwrap());
    assert!(!v
        .verify(&ctx(), &cursor, &id1, &KeyspaceId::new(vec![0x01]))
        .unwrap());
}

#[test]
fn reverse_map_round_trip() {
    let v = hash_vindex();
    let cursor = MemoryCursor::new();
    let unique = v.as_unique().unwrap();
    let reversible = v.as_reversible().unwrap();

    for id in [0u64, 1, 2, 1 << 32, u64::MAX] {
        let mapped = unique.map(&ctx(), &cursor, &ids(&[id])).unwrap();
        let ksid = mapped[0].clone().unwrap();
        let back = reversible.reverse_map(&ctx(), &cursor, &ksid).unwrap();
        assert_eq!(back, Value::Uint(id));
    }
}

#[test]
fn reverse_map_rejects_malformed_keyspace_id() {
    let v = hash_vindex();
    let err = v
        .as_reversible()
        .unwrap()
        .reverse_map(&ctx(), &MemoryCursor::new(), &KeyspaceId::new(vec![1, 2, 3]))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
}

#[test]
fn functional_map_never_touches_cursor() {
    let v = hash_vindex();
    let cursor = MemoryCursor::new();
    cursor.fail_with("storage unreachable");

    let unique = v.as_unique().unwrap();
    let out = unique.map(&ctx(), &cursor, &ids(&[5])).unwrap();
    assert_eq!(out, vec![Some(hash_ksid(5))]);
    assert!(cursor.queries().is_empty());
}

#[test]
fn shared_instance_across_threads() {
    let v = hash_vindex();
    let handles: Vec<_> = (0..4u64)
        .map(|t| {
            let v = std::sync::Arc::clone(&v);
            std::thread::spawn(move || {
                let cursor = MemoryCursor::new();
                let unique = v.as_unique().unwrap();
                for i in 0..100u64 {
                    let id = t * 1000 + i;
                    let out = unique.map(&ctx(), &cursor, &ids(&[id])).unwrap();
                    assert_eq!(out[0], Some(hash_ksid(id)));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
}
