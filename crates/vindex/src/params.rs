//! Vindex constructor parameters
//!
//! Parameters arrive already parsed from the configuration loader as a
//! key/value mapping. [`Params`] wraps that mapping and gives constructors
//! typed accessors whose errors name the vindex and the parameter.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use shardmap_core::{Value, VindexError, VindexResult};

/// Constructor parameters for one vindex instance
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Params(BTreeMap<String, Value>);

impl Params {
    /// Create an empty parameter set
    pub fn new() -> Self {
        Params(BTreeMap::new())
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert or replace a parameter
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// Raw access
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Whether `key` is present
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Number of parameters
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if there are no parameters
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate parameters in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Required parameter, any type
    ///
    /// # Errors
    ///
    /// `MissingParam` if absent.
    pub fn require(&self, vindex: &str, key: &str) -> VindexResult<&Value> {
        self.0
            .get(key)
            .ok_or_else(|| VindexError::missing_param(vindex, key))
    }

    /// Optional string parameter
    ///
    /// # Errors
    ///
    /// `InvalidParam` if present but not a string.
    pub fn get_str(&self, vindex: &str, key: &str) -> VindexResult<Option<&str>> {
        match self.0.get(key) {
            None => Ok(None),
            Some(v) => v.as_str().map(Some).ok_or_else(|| {
                VindexError::invalid_param(
                    vindex,
                    key,
                    format!("expected a string, got {}", v.type_name()),
                )
            }),
        }
    }

    /// Required, non-empty string parameter
    ///
    /// # Errors
    ///
    /// `MissingParam` if absent, `InvalidParam` if not a string or empty.
    pub fn require_str(&self, vindex: &str, key: &str) -> VindexResult<&str> {
        let s = self
            .get_str(vindex, key)?
            .ok_or_else(|| VindexError::missing_param(vindex, key))?;
        if s.is_empty() {
            return Err(VindexError::invalid_param(vindex, key, "must not be empty"));
        }
        Ok(s)
    }

    /// Boolean parameter with a default
    ///
    /// Accepts booleans, 0/1 and the strings "true"/"false".
    ///
    /// # Errors
    ///
    /// `InvalidParam` if present but not boolean-like.
    pub fn get_bool(&self, vindex: &str, key: &str, default: bool) -> VindexResult<bool> {
        match self.0.get(key) {
            None => Ok(default),
            Some(v) => v.as_bool().ok_or_else(|| {
                VindexError::invalid_param(vindex, key, format!("expected a boolean, got {}", v))
            }),
        }
    }

    /// Optional non-negative integer parameter
    ///
    /// Accepts integers and decimal strings.
    ///
    /// # Errors
    ///
    /// `InvalidParam` if present but not a non-negative integer.
    pub fn get_u64(&self, vindex: &str, key: &str) -> VindexResult<Option<u64>> {
        let Some(v) = self.0.get(key) else {
            return Ok(None);
        };
        let parsed = match v {
            Value::Int(i) => u64::try_from(*i).ok(),
            Value::Uint(u) => Some(*u),
            Value::String(s) => s.trim().parse::<u64>().ok(),
            _ => None,
        };
        parsed.map(Some).ok_or_else(|| {
            VindexError::invalid_param(
                vindex,
                key,
                format!("expected a non-negative integer, got {}", v),
            )
        })
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Params(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
