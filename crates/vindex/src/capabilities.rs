//! Capability inspection
//!
//! The planner special-cases unique versus non-unique routing and needs to
//! know whether a vindex can be reversed or maintained. These helpers
//! answer that from the accessor methods on [`Vindex`] rather than from
//! the concrete type.

use std::fmt;

use shardmap_core::{ExecContext, KeyspaceId, Value, VindexError, VindexResult};

use crate::cursor::VCursor;
use crate::vindex::Vindex;

/// Which optional capabilities a vindex instance exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Capabilities {
    /// Exposes [`Unique`](crate::Unique)
    pub unique: bool,
    /// Exposes [`NonUnique`](crate::NonUnique)
    pub non_unique: bool,
    /// Exposes [`Reversible`](crate::Reversible)
    pub reversible: bool,
    /// Exposes [`Functional`](crate::Functional)
    pub functional: bool,
    /// Exposes [`Lookup`](crate::Lookup)
    pub lookup: bool,
}

impl Capabilities {
    /// Check the structural invariants of a capability set
    ///
    /// # Errors
    ///
    /// `InvalidCapabilities` naming `vindex` when:
    /// - neither or both of unique and non-unique are exposed
    /// - functional is exposed without unique
    pub fn validate(&self, vindex: &str) -> VindexResult<()> {
        let invalid = |reason: &str| VindexError::InvalidCapabilities {
            vindex: vindex.to_string(),
            reason: reason.to_string(),
        };
        match (self.unique, self.non_unique) {
            (true, true) => return Err(invalid("both unique and non-unique")),
            (false, false) => return Err(invalid("neither unique nor non-unique")),
            _ => {}
        }
        if self.functional && !self.unique {
            return Err(invalid("functional vindex must be unique"));
        }
        Ok(())
    }
}

impl fmt::Display for Capabilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = [
            (self.unique, "unique"),
            (self.non_unique, "non_unique"),
            (self.reversible, "reversible"),
            (self.functional, "functional"),
            (self.lookup, "lookup"),
        ];
        let set: Vec<&str> = names
            .iter()
            .filter(|(present, _)| *present)
            .map(|(_, name)| *name)
            .collect();
        if set.is_empty() {
            f.write_str("none")
        } else {
            f.write_str(&set.join("|"))
        }
    }
}

/// Whether `v` satisfies the unique capability
pub fn is_unique(v: &dyn Vindex) -> bool {
    v.as_unique().is_some()
}

/// Whether `v` computes its mapping without stored state
pub fn is_functional(v: &dyn Vindex) -> bool {
    v.as_functional().is_some()
}

/// Whether `v` can map keyspace ids back to ids
pub fn is_reversible(v: &dyn Vindex) -> bool {
    v.as_reversible().is_some()
}

/// Whether `v` maintains stored associations
pub fn is_lookup(v: &dyn Vindex) -> bool {
    v.as_lookup().is_some()
}

/// Map through the unique capability
///
/// # Errors
///
/// `Unsupported` if `v` is not unique; otherwise whatever the vindex returns.
pub fn map_unique(
    v: &dyn Vindex,
    ctx: &ExecContext,
    cursor: &dyn VCursor,
    ids: &[Value],
) -> VindexResult<Vec<Option<KeyspaceId>>> {
    let unique = v.as_unique().ok_or_else(|| VindexError::Unsupported {
        vindex: v.name().to_string(),
        capability: "unique",
    })?;
    unique.map(ctx, cursor, ids)
}

/// Map through the non-unique capability
///
/// # Errors
///
/// `Unsupported` if `v` is not non-unique; otherwise whatever the vindex returns.
pub fn map_non_unique(
    v: &dyn Vindex,
    ctx: &ExecContext,
    cursor: &dyn VCursor,
    ids: &[Value],
) -> VindexResult<Vec<Vec<KeyspaceId>>> {
    let non_unique = v.as_non_unique().ok_or_else(|| VindexError::Unsupported {
        vindex: v.name().to_string(),
        capability: "non_unique",
    })?;
    non_unique.map(ctx, cursor, ids)
}

/// Map through whichever of unique or non-unique `v` exposes
///
/// Unique results are widened to sets of zero or one keyspace id, so a
/// caller that routes to every listed shard can treat both kinds alike.
///
/// # Errors
///
/// `Unsupported` if `v` exposes neither capability.
pub fn map_any(
    v: &dyn Vindex,
    ctx: &ExecContext,
    cursor: &dyn VCursor,
    ids: &[Value],
) -> VindexResult<Vec<Vec<KeyspaceId>>> {
    if let Some(unique) = v.as_unique() {
        let ksids = unique.map(ctx, cursor, ids)?;
        return Ok(ksids.into_iter().map(|k| k.into_iter().collect()).collect());
    }
    map_non_unique(v, ctx, cursor, ids)
}
