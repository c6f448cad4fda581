//! Keyspace ids and bind variables
//!
//! - [`KeyspaceId`]: opaque byte string identifying a storage partition
//! - [`BindVars`]: named parameters for a cursor query

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::value::Value;

/// Opaque identifier of a storage partition (shard)
///
/// Keyspace ids are compared and ordered bytewise, which is the order
/// shard ranges are defined over. Displayed as lowercase hex.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct KeyspaceId(Vec<u8>);

impl KeyspaceId {
    /// Wrap raw bytes
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        KeyspaceId(bytes.into())
    }

    /// Big-endian encoding of a 64-bit number, the usual computed form
    pub fn from_u64(v: u64) -> Self {
        KeyspaceId(v.to_be_bytes().to_vec())
    }

    /// Decode an 8-byte big-endian keyspace id back into a number
    ///
    /// Returns `None` if the id is not exactly 8 bytes long.
    pub fn to_u64(&self) -> Option<u64> {
        let bytes: [u8; 8] = self.0.as_slice().try_into().ok()?;
        Some(u64::from_be_bytes(bytes))
    }

    /// Borrow the raw bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Consume into the raw bytes
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for the zero-length id
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Lowercase hex rendering
    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{:02x}", b)).collect()
    }
}

impl fmt::Display for KeyspaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for KeyspaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KeyspaceId({})", self.to_hex())
    }
}

impl From<Vec<u8>> for KeyspaceId {
    fn from(v: Vec<u8>) -> Self {
        KeyspaceId(v)
    }
}

impl From<&[u8]> for KeyspaceId {
    fn from(v: &[u8]) -> Self {
        KeyspaceId(v.to_vec())
    }
}

impl AsRef<[u8]> for KeyspaceId {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<KeyspaceId> for Value {
    fn from(ksid: KeyspaceId) -> Self {
        Value::Bytes(ksid.0)
    }
}

impl From<&KeyspaceId> for Value {
    fn from(ksid: &KeyspaceId) -> Self {
        Value::Bytes(ksid.0.clone())
    }
}

/// A single bind variable: a scalar or a list for `IN ::name` expansion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BindValue {
    /// Scalar bound to `:name`
    Single(Value),
    /// List bound to `::name`
    List(Vec<Value>),
}

/// Named bind variables for one cursor query
///
/// Iteration order is by name, so recorded queries are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BindVars(BTreeMap<String, BindValue>);

impl BindVars {
    /// Create an empty set
    pub fn new() -> Self {
        BindVars(BTreeMap::new())
    }

    /// Builder-style scalar binding
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Builder-style list binding
    pub fn with_list(mut self, name: impl Into<String>, values: Vec<Value>) -> Self {
        self.0.insert(name.into(), BindValue::List(values));
        self
    }

    /// Bind a scalar, replacing any previous binding
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(name.into(), BindValue::Single(value.into()));
    }

    /// Look up a binding
    pub fn get(&self, name: &str) -> Option<&BindValue> {
        self.0.get(name)
    }

    /// Look up a scalar binding
    pub fn get_value(&self, name: &str) -> Option<&Value> {
        match self.0.get(name)? {
            BindValue::Single(v) => Some(v),
            BindValue::List(_) => None,
        }
    }

    /// Look up a list binding
    pub fn get_list(&self, name: &str) -> Option<&[Value]> {
        match self.0.get(name)? {
            BindValue::List(v) => Some(v),
            BindValue::Single(_) => None,
        }
    }

    /// Iterate bindings in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BindValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of bindings
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if nothing is bound
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
