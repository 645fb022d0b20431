//! The catalog set held by a running wizard: one loaded catalog per
//! collection slice.

use std::collections::BTreeMap;

use gpcase_catalog::provider::{load_or_builtin, CatalogProvider};
use gpcase_catalog::{builtin, for_collection, Catalog};
use gpcase_core::models::CollectionKind;

#[derive(Debug, Clone)]
pub struct CatalogSet {
    catalogs: BTreeMap<CollectionKind, Catalog>,
}

impl CatalogSet {
    /// The built-in lists, used when no provider is configured.
    pub fn builtin() -> Self {
        let catalogs = CollectionKind::ALL
            .into_iter()
            .map(|kind| (kind, builtin(for_collection(kind)).clone()))
            .collect();
        Self { catalogs }
    }

    /// Load every catalog from the provider, falling back per kind to the
    /// built-in list on failure.
    pub async fn load(provider: &dyn CatalogProvider, case_type: Option<&str>) -> Self {
        let mut catalogs = BTreeMap::new();
        for kind in CollectionKind::ALL {
            let catalog = load_or_builtin(provider, for_collection(kind), case_type).await;
            catalogs.insert(kind, catalog);
        }
        Self { catalogs }
    }

    pub fn get(&self, kind: CollectionKind) -> &Catalog {
        // Every kind is inserted by both constructors.
        self.catalogs
            .get(&kind)
            .unwrap_or_else(|| builtin(for_collection(kind)))
    }
}

impl Default for CatalogSet {
    fn default() -> Self {
        Self::builtin()
    }
}
