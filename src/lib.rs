//! shardmap - vindex contracts for a sharded SQL routing tier
//!
//! A vindex maps an application column value to the keyspace id of the
//! shard that holds the row. This crate re-exports:
//! - the value, keyspace id, result and error types from `shardmap-core`
//! - the capability traits, cursor contract, registry and configuration
//!   loader from `shardmap-vindex`
//!
//! # Quick Start
//!
//! ```ignore
//! use shardmap::{is_unique, Params, Registry};
//!
//! let registry = Registry::new();
//! registry.register("hash", HashVindex::create)?;
//!
//! let user_idx = registry.create_vindex("hash", "user_idx", &Params::new())?;
//! assert!(is_unique(user_idx.as_ref()));
//! ```

pub use shardmap_vindex::*;
