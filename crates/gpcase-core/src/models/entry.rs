//! Collection entry records.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use ts_rs::TS;

use crate::models::form::FieldMap;

/// One item in a collection slice: a medication, substance, screener, safety
/// risk, clinical concern, or patient support.
///
/// `id` is either a catalog id (when newly added in this session) or a
/// backend record id (once persisted); the engine never distinguishes the two
/// except by string shape. Type-specific detail fields live in `fields`,
/// keyed by their verbatim field names.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct Entry {
    pub id: String,
    pub catalog_id: Option<String>,
    pub catalog_name: String,
    pub catalog_category: String,
    pub fields: FieldMap,
    pub notes: String,
}

impl Entry {
    /// A fresh entry for a catalog item. The catalog id doubles as the
    /// entry's identity until the backend assigns a record id.
    pub fn from_catalog(id: &str, name: &str, category: &str) -> Self {
        Self {
            id: id.to_string(),
            catalog_id: Some(id.to_string()),
            catalog_name: name.to_string(),
            catalog_category: category.to_string(),
            fields: FieldMap::new(),
            notes: String::new(),
        }
    }

    /// The id used for identity matching when merging wizard drafts back
    /// into the live collection: the catalog id when known, otherwise the
    /// record id.
    pub fn identity(&self) -> &str {
        self.catalog_id.as_deref().unwrap_or(&self.id)
    }

    pub fn matches(&self, other: &Entry) -> bool {
        self.identity() == other.identity()
    }

    /// An entry can only be persisted once it carries a display name.
    pub fn has_display_name(&self) -> bool {
        !self.catalog_name.trim().is_empty()
    }

    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// A detail field as trimmed non-empty text.
    pub fn text(&self, name: &str) -> Option<&str> {
        match self.fields.get(name) {
            Some(Value::String(s)) => {
                let s = s.trim();
                (!s.is_empty()).then_some(s)
            }
            _ => None,
        }
    }

    /// A detail field as a number, accepting numeric strings from the wire.
    pub fn number(&self, name: &str) -> Option<f64> {
        match self.fields.get(name) {
            Some(Value::Number(n)) => n.as_f64(),
            Some(Value::String(s)) => s.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn set_field(&mut self, name: &str, value: Value) {
        self.fields.insert(name.to_string(), value);
    }
}
