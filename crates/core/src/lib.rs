//! Core types for shardmap
//!
//! This crate defines the foundational types shared by every vindex
//! implementation and by the routing layer that consumes them:
//! - Value: SQL column value used for ids, bind variables and result cells
//! - KeyspaceId: opaque byte string naming a storage partition
//! - BindVars: named bind variables passed to a cursor query
//! - QueryResult: ordered rows of typed columns returned by a cursor
//! - ExecContext: per-request deadline and cancellation
//! - VindexError: error type hierarchy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod context;
pub mod error;
pub mod result;
pub mod types;
pub mod value;

pub use context::{CancelToken, ExecContext};
pub use error::{ErrorKind, VindexError, VindexResult};
pub use result::{Field, FieldType, QueryResult, Row};
pub use types::{BindValue, BindVars, KeyspaceId};
pub use value::Value;
