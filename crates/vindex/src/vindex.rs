//! Vindex base contract and capability traits
//!
//! Every mapping strategy implements [`Vindex`]. On top of it a strategy
//! exposes any consistent subset of the optional capabilities:
//!
//! | Capability | Trait | Meaning |
//! |------------|-------|---------|
//! | unique | [`Unique`] | an id maps to at most one keyspace id |
//! | non-unique | [`NonUnique`] | an id maps to zero or more keyspace ids |
//! | reversible | [`Reversible`] | a keyspace id can be mapped back to its id |
//! | functional | [`Functional`] | the mapping is computed, no stored state |
//! | lookup | [`Lookup`] | the mapping is stored and maintained explicitly |
//!
//! Capabilities are discovered through the `as_*` accessors on [`Vindex`],
//! which default to `None`. A strategy opts in by returning `Some(self)`:
//!
//! ```ignore
//! impl Vindex for HashVindex {
//!     fn name(&self) -> &str { &self.name }
//!     fn cost(&self) -> u32 { 1 }
//!     fn verify(&self, ctx: &ExecContext, cursor: &dyn VCursor, id: &Value, ksid: &KeyspaceId)
//!         -> VindexResult<bool> { ... }
//!
//!     fn as_unique(&self) -> Option<&dyn Unique> { Some(self) }
//!     fn as_functional(&self) -> Option<&dyn Functional> { Some(self) }
//!     fn as_reversible(&self) -> Option<&dyn Reversible> { Some(self) }
//! }
//! ```
//!
//! ## Invariants
//!
//! - A vindex is exactly one of unique or non-unique.
//! - Functional implies unique: insert routing needs exactly one target.
//! - Lookup need not be unique: inserts supply the keyspace id explicitly.
//!
//! The registry checks these when it creates an instance.

use std::fmt;
use std::sync::Arc;

use shardmap_core::{ExecContext, KeyspaceId, Value, VindexResult};

use crate::capabilities::Capabilities;
use crate::cursor::VCursor;

/// Base contract required of every vindex
///
/// Instances are immutable after construction and shared across requests,
/// so every method takes `&self` and must be safe to call concurrently.
/// Any private state (a cache, say) is synchronised by the strategy.
pub trait Vindex: Send + Sync {
    /// Instance name, for diagnostics
    ///
    /// Not an identity: use [`same_vindex`] to compare instances.
    fn name(&self) -> &str;

    /// Advisory routing cost, fixed for the lifetime of the instance
    ///
    /// 0: the id already is the keyspace id. 1: the keyspace id is
    /// computed from the id. 2 or more: an external lookup is needed.
    fn cost(&self) -> u32;

    /// Whether `id` maps to `ksid`
    ///
    /// # Errors
    ///
    /// Only for lookup or storage failures. "Does not map" is `Ok(false)`.
    fn verify(
        &self,
        ctx: &ExecContext,
        cursor: &dyn VCursor,
        id: &Value,
        ksid: &KeyspaceId,
    ) -> VindexResult<bool>;

    /// The unique mapping capability
    fn as_unique(&self) -> Option<&dyn Unique> {
        None
    }

    /// The non-unique mapping capability
    fn as_non_unique(&self) -> Option<&dyn NonUnique> {
        None
    }

    /// The reverse mapping capability
    fn as_reversible(&self) -> Option<&dyn Reversible> {
        None
    }

    /// The functional marker; requires [`Vindex::as_unique`] as well
    fn as_functional(&self) -> Option<&dyn Functional> {
        None
    }

    /// The stored-association capability
    fn as_lookup(&self) -> Option<&dyn Lookup> {
        None
    }

    /// Snapshot of which capabilities this instance exposes
    fn capabilities(&self) -> Capabilities {
        Capabilities {
            unique: self.as_unique().is_some(),
            non_unique: self.as_non_unique().is_some(),
            reversible: self.as_reversible().is_some(),
            functional: self.as_functional().is_some(),
            lookup: self.as_lookup().is_some(),
        }
    }
}

/// A vindex where each id maps to at most one keyspace id
pub trait Unique: Send + Sync {
    /// Map ids to keyspace ids
    ///
    /// The output has the same length and order as `ids`. An id with no
    /// mapping yields `None` at its position. Duplicate ids are mapped
    /// independently, each producing its own output slot.
    ///
    /// # Errors
    ///
    /// Only when the underlying lookup fails or an id cannot be
    /// interpreted at all.
    fn map(
        &self,
        ctx: &ExecContext,
        cursor: &dyn VCursor,
        ids: &[Value],
    ) -> VindexResult<Vec<Option<KeyspaceId>>>;
}

/// A vindex where an id may map to several keyspace ids
pub trait NonUnique: Send + Sync {
    /// Map ids to sets of keyspace ids
    ///
    /// One set per input id, same order and length as `ids`. An id with
    /// no mapping yields an empty set.
    fn map(
        &self,
        ctx: &ExecContext,
        cursor: &dyn VCursor,
        ids: &[Value],
    ) -> VindexResult<Vec<Vec<KeyspaceId>>>;
}

/// A vindex that can recover the id from a keyspace id
///
/// For unique functional vindexes this is a true inverse: for every id
/// that maps, `reverse_map(map(id)) == id`.
pub trait Reversible: Send + Sync {
    /// Map a keyspace id back to its id
    fn reverse_map(
        &self,
        ctx: &ExecContext,
        cursor: &dyn VCursor,
        ksid: &KeyspaceId,
    ) -> VindexResult<Value>;
}

/// A unique vindex whose mapping is computed from the id alone
///
/// Marker trait: functional vindexes keep no external state, so the
/// cursor passed to [`Unique::map`] is never used.
pub trait Functional: Unique {}

/// A vindex backed by stored id -> keyspace id associations
pub trait Lookup: Send + Sync {
    /// Store the association `id -> ksid`
    ///
    /// After success, `verify(id, ksid)` returns true.
    fn create(
        &self,
        ctx: &ExecContext,
        cursor: &dyn VCursor,
        id: &Value,
        ksid: &KeyspaceId,
    ) -> VindexResult<()>;

    /// Remove the associations `ids[i] -> ksid`
    ///
    /// After success, `verify(ids[i], ksid)` returns false.
    fn delete(
        &self,
        ctx: &ExecContext,
        cursor: &dyn VCursor,
        ids: &[Value],
        ksid: &KeyspaceId,
    ) -> VindexResult<()>;
}

/// Reference identity of two vindex instances
///
/// Two instances with the same name are still different vindexes.
pub fn same_vindex(a: &Arc<dyn Vindex>, b: &Arc<dyn Vindex>) -> bool {
    Arc::ptr_eq(a, b)
}

impl fmt::Display for dyn Vindex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Debug for dyn Vindex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vindex")
            .field("name", &self.name())
            .field("cost", &self.cost())
            .field("capabilities", &self.capabilities().to_string())
            .finish()
    }
}
