//! Row data as read from a table source.

use indexmap::IndexMap;

/// A single column value.
///
/// Sources decide the variant from the value's storage type; the formatter
/// additionally treats numeric-looking `Text` as a number.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// SQL `NULL`
    Null,
    /// Integer or floating point value, already in literal form
    Number(String),
    /// Any other value
    Text(String),
}

impl Value {
    /// Builds a `Number` from a float, or `Text` when the float has no literal form.
    ///
    /// The literal always reads back as a float: `3.0` keeps its fraction and
    /// large magnitudes use an exponent.
    pub fn from_f64(value: f64) -> Self {
        if value.is_finite() {
            Value::Number(format!("{value:?}"))
        } else {
            Value::Text(value.to_string())
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Number(value.to_string())
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Value::Null)
    }
}

/// One table row: column name to value, in the order the source returned them.
pub type Row = IndexMap<String, Value>;

/// A bounded batch of rows fetched with one limit/offset query.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    /// Zero-based page number
    pub index: u64,
    /// Rows in source order; never more than the page size
    pub rows: Vec<Row>,
}

impl Page {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
