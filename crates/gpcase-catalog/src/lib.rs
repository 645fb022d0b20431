//! gpcase-catalog
//!
//! Static clinical reference lists. Each catalog carries stable ids, display
//! names, and categories, plus a name→id index for reverse lookup. An
//! external provider can supply a case-type-specific list at runtime; on
//! provider failure the built-in list is used instead.

pub mod catalogs;
pub mod error;
pub mod item;
pub mod provider;

use gpcase_core::models::CollectionKind;

pub use item::{Catalog, CatalogItem, CatalogKind};

/// The catalog backing a collection slice.
pub fn for_collection(kind: CollectionKind) -> CatalogKind {
    match kind {
        CollectionKind::Medications => CatalogKind::Medication,
        CollectionKind::Substances => CatalogKind::Substance,
        CollectionKind::Screeners => CatalogKind::Screener,
        CollectionKind::SafetyRisks => CatalogKind::SafetyRisk,
        CollectionKind::Supports => CatalogKind::Support,
        CollectionKind::Concerns => CatalogKind::ClinicalQuestionType,
    }
}

/// The built-in catalog for a kind.
pub fn builtin(kind: CatalogKind) -> &'static Catalog {
    match kind {
        CatalogKind::Medication => catalogs::medications::catalog(),
        CatalogKind::Substance => catalogs::substances::catalog(),
        CatalogKind::Screener => catalogs::screeners::catalog(),
        CatalogKind::SafetyRisk => catalogs::safety_risks::catalog(),
        CatalogKind::Support => catalogs::supports::catalog(),
        CatalogKind::ClinicalQuestionType => catalogs::question_types::catalog(),
    }
}
