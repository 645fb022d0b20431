use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The six reference lists backing collection steps and the presenting-step
/// question-type picklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum CatalogKind {
    Medication,
    Substance,
    Screener,
    SafetyRisk,
    Support,
    ClinicalQuestionType,
}

impl CatalogKind {
    pub fn id(self) -> &'static str {
        match self {
            CatalogKind::Medication => "medication",
            CatalogKind::Substance => "substance",
            CatalogKind::Screener => "screener",
            CatalogKind::SafetyRisk => "safety_risk",
            CatalogKind::Support => "support",
            CatalogKind::ClinicalQuestionType => "clinical_question_type",
        }
    }
}

impl std::fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// One reference list row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CatalogItem {
    pub id: String,
    pub name: String,
    pub category: String,
}

impl CatalogItem {
    pub fn new(id: &str, name: &str, category: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            category: category.to_string(),
        }
    }
}

/// A reference list with a derived name→id index for reverse lookup.
#[derive(Debug, Clone)]
pub struct Catalog {
    kind: CatalogKind,
    items: Vec<CatalogItem>,
    ids_by_name: BTreeMap<String, String>,
}

impl Catalog {
    pub fn new(kind: CatalogKind, items: Vec<CatalogItem>) -> Self {
        let ids_by_name = items
            .iter()
            .map(|item| (item.name.to_lowercase(), item.id.clone()))
            .collect();
        Self { kind, items, ids_by_name }
    }

    pub fn kind(&self) -> CatalogKind {
        self.kind
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn by_id(&self, id: &str) -> Option<&CatalogItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.by_id(id).is_some()
    }

    /// Reverse lookup, case-insensitive on the display name.
    pub fn id_for_name(&self, name: &str) -> Option<&str> {
        self.ids_by_name
            .get(&name.trim().to_lowercase())
            .map(String::as_str)
    }

    /// Resolve a display name from whatever identity an entry carries.
    pub fn name_for_id(&self, id: &str) -> Option<&str> {
        self.by_id(id).map(|item| item.name.as_str())
    }
}
