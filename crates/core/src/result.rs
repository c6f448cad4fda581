//! Query results returned by a cursor
//!
//! A [`QueryResult`] is an ordered list of rows of typed columns, plus the
//! affected-row count for writes.

use serde::{Deserialize, Serialize};

use crate::value::Value;

/// Column type reported in a result set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldType {
    /// NULL literal column
    Null,
    /// Signed 64-bit integer
    Int64,
    /// Unsigned 64-bit integer
    Uint64,
    /// Double
    Float64,
    /// Text
    VarChar,
    /// Binary
    VarBinary,
}

/// Result column description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Column name
    pub name: String,
    /// Column type
    pub field_type: FieldType,
}

impl Field {
    /// Create a field
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Field {
            name: name.into(),
            field_type,
        }
    }
}

/// One result row, positionally aligned with [`QueryResult::fields`]
pub type Row = Vec<Value>;

/// Outcome of one cursor query
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    /// Column descriptions
    pub fields: Vec<Field>,
    /// Rows in storage order
    pub rows: Vec<Row>,
    /// Rows changed by a write
    pub rows_affected: u64,
}

impl QueryResult {
    /// Result set with the given columns and rows
    pub fn new(fields: Vec<Field>, rows: Vec<Row>) -> Self {
        QueryResult {
            fields,
            rows,
            rows_affected: 0,
        }
    }

    /// Result of a write that changed `n` rows
    pub fn affected(n: u64) -> Self {
        QueryResult {
            rows_affected: n,
            ..QueryResult::default()
        }
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True if no rows were returned
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a named column
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }

    /// Values of the column at `index`, one per row
    ///
    /// Rows shorter than `index` are skipped.
    pub fn column(&self, index: usize) -> impl Iterator<Item = &Value> {
        self.rows.iter().filter_map(move |row| row.get(index))
    }

    /// First row, if any
    pub fn first_row(&self) -> Option<&Row> {
        self.rows.first()
    }
}
