//! Multi-select field values.
//!
//! The wire format for multi-select picklists is a semicolon-joined string,
//! but snapshots and older drafts sometimes carry a JSON array instead. This
//! type treats both as equivalent on read and always serializes back to the
//! semicolon-joined form on write.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use ts_rs::TS;

/// An order-preserving list of non-empty selections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MultiValue(Vec<String>);

impl MultiValue {
    /// Build from already-split values. Empty and whitespace-only segments
    /// are dropped; order is preserved.
    pub fn new<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let items = values
            .into_iter()
            .map(Into::into)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        Self(items)
    }

    /// Read a multi-value field from its wire representation: either a JSON
    /// array of strings or a single semicolon-joined string. Anything else
    /// (null, numbers, objects) reads as empty.
    pub fn from_wire(value: &Value) -> Self {
        match value {
            Value::String(s) => Self::new(s.split(';')),
            Value::Array(items) => Self::new(items.iter().filter_map(Value::as_str)),
            _ => Self::default(),
        }
    }

    /// Serialize to the semicolon-joined wire form.
    pub fn to_wire(&self) -> String {
        self.0.join(";")
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, value: &str) -> bool {
        self.0.iter().any(|v| v == value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl From<Vec<String>> for MultiValue {
    fn from(values: Vec<String>) -> Self {
        Self::new(values)
    }
}
