//! Core domain types for movie-metadata records.
//!
//! Records come from a movie-metadata API dump and are loosely typed: any
//! field may be absent, null, or carry an unexpected JSON type. Instead of
//! binding them to a rigid struct, a `MovieRecord` wraps the raw JSON object
//! and exposes explicit "get-with-default" accessors.

use crate::error::{DataLoadError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// =============================================================================
// Field names
// =============================================================================

pub const FIELD_ID: &str = "id";
pub const FIELD_ORIGINAL_LANGUAGE: &str = "original_language";
pub const FIELD_BUDGET: &str = "budget";
pub const FIELD_VOTE_COUNT: &str = "vote_count";
pub const FIELD_COLLECTION: &str = "belongs_to_collection";

// =============================================================================
// Movie record
// =============================================================================

/// One movie object from the input array.
///
/// `#[serde(transparent)]` means the record (de)serializes exactly as the
/// underlying JSON object, so a non-object element in the input array is
/// rejected by the parser.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovieRecord {
    fields: Map<String, Value>,
}

impl MovieRecord {
    /// Wrap an already-parsed JSON object.
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Raw value of a field, `None` when the key is absent.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// The field rendered as a CSV cell, empty when absent or null.
    pub fn text_or_empty(&self, key: &str) -> String {
        self.get(key).map(render_cell).unwrap_or_default()
    }

    /// The field when it holds a JSON string.
    pub fn str_field(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    /// The field when it holds a JSON object.
    pub fn object(&self, key: &str) -> Option<&Map<String, Value>> {
        self.get(key).and_then(Value::as_object)
    }

    /// The field as a list.
    ///
    /// Absent and null both read as an empty list. Any other non-array value
    /// is an error, since the caller expects to iterate it.
    pub fn list(&self, key: &str) -> Result<&[Value]> {
        match self.get(key) {
            None | Some(Value::Null) => Ok(&[]),
            Some(Value::Array(items)) => Ok(items.as_slice()),
            Some(other) => Err(DataLoadError::InvalidValue {
                field: key.to_string(),
                value: other.to_string(),
            }),
        }
    }

    /// Identifier used in diagnostics; `?` when the record has none.
    pub fn id(&self) -> String {
        match self.get(FIELD_ID) {
            None | Some(Value::Null) => "?".to_string(),
            Some(value) => render_cell(value),
        }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl From<Map<String, Value>> for MovieRecord {
    fn from(fields: Map<String, Value>) -> Self {
        Self::new(fields)
    }
}

/// Render a JSON value the way it appears in an output cell.
///
/// Booleans are written as `True`/`False` so the files stay identical to the
/// ones downstream consumers already read.
pub fn render_cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        // Nested values should not appear in scalar columns; keep them readable
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}
