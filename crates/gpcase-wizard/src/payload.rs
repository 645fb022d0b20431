//! Backend payload builders.
//!
//! Every persisted collection entry must resolve to a non-empty display
//! name, either carried on the entry or recovered from the catalog by id.
//! Entries failing that resolution are dropped here and never reach the
//! backend.

use gpcase_core::models::{CollectionKind, Entry, FormState};

use crate::catalogs::CatalogSet;

/// The filtered, name-resolved payload for one collection.
pub fn build_collection_payload(
    kind: CollectionKind,
    form: &FormState,
    catalogs: &CatalogSet,
) -> Vec<Entry> {
    let catalog = catalogs.get(kind);
    let mut payload = Vec::new();
    let mut dropped = 0usize;

    for entry in form.collection(kind) {
        if entry.has_display_name() {
            payload.push(entry.clone());
            continue;
        }
        match catalog.by_id(entry.identity()) {
            Some(item) => {
                let mut resolved = entry.clone();
                resolved.catalog_name = item.name.clone();
                if resolved.catalog_category.is_empty() {
                    resolved.catalog_category = item.category.clone();
                }
                payload.push(resolved);
            }
            None => dropped += 1,
        }
    }

    if dropped > 0 {
        tracing::debug!(kind = %kind, dropped, "dropped entries without a resolvable display name");
    }
    payload
}

/// Collections that currently hold at least one entry.
pub fn populated_collections(form: &FormState) -> Vec<CollectionKind> {
    CollectionKind::ALL
        .into_iter()
        .filter(|kind| !form.collection(*kind).is_empty())
        .collect()
}
