//! Vindex contracts and registry
//!
//! A vindex maps an application column value ("id") to the keyspace id of
//! the shard holding the row. This crate defines:
//! - [`Vindex`]: the base contract every mapping strategy implements
//! - [`Unique`], [`NonUnique`], [`Reversible`], [`Functional`], [`Lookup`]:
//!   optional capabilities, queried through accessor methods on `Vindex`
//! - [`VCursor`]: how a strategy reaches storage for lookup queries
//! - [`Registry`]: vindex type name -> constructor, and `create_vindex`
//!
//! # Example
//!
//! ```ignore
//! let registry = Registry::new();
//! registry.register("hash", HashVindex::create)?;
//!
//! let user_idx = registry.create_vindex("hash", "user_idx", &Params::new())?;
//! assert!(is_unique(user_idx.as_ref()));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod capabilities;
pub mod cursor;
pub mod params;
pub mod registry;
pub mod vindex;

pub use capabilities::{
    is_functional, is_lookup, is_reversible, is_unique, map_any, map_non_unique, map_unique,
    Capabilities,
};
pub use cursor::VCursor;
pub use params::Params;
pub use registry::{NewVindexFn, Registry};
pub use vindex::{same_vindex, Functional, Lookup, NonUnique, Reversible, Unique, Vindex};

pub use shardmap_core::{
    BindValue, BindVars, CancelToken, ErrorKind, ExecContext, Field, FieldType, KeyspaceId,
    QueryResult, Row, Value, VindexError, VindexResult,
};
