//! The external catalog seam.
//!
//! The host platform can serve case-type-specific picklists; when it cannot
//! (offline, schema service down, misconfigured case type) the engine falls
//! back to the built-in lists rather than rendering an empty picker.

use std::future::Future;
use std::pin::Pin;

use crate::error::CatalogError;
use crate::item::{Catalog, CatalogItem, CatalogKind};

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Trait implemented by external picklist sources.
///
/// Methods return boxed futures for dyn compatibility.
pub trait CatalogProvider: Send + Sync {
    /// Fetch the list for one catalog kind, optionally scoped to a case
    /// type. An `Ok` with an empty list is taken at face value; only errors
    /// trigger the built-in fallback.
    fn fetch<'a>(
        &'a self,
        kind: CatalogKind,
        case_type: Option<&'a str>,
    ) -> BoxFuture<'a, Result<Vec<CatalogItem>, CatalogError>>;
}

/// Load a catalog from the provider, falling back to the built-in list on
/// failure.
pub async fn load_or_builtin(
    provider: &dyn CatalogProvider,
    kind: CatalogKind,
    case_type: Option<&str>,
) -> Catalog {
    match provider.fetch(kind, case_type).await {
        Ok(items) => {
            tracing::debug!(kind = %kind, count = items.len(), "catalog loaded from provider");
            Catalog::new(kind, items)
        }
        Err(e) => {
            tracing::warn!(kind = %kind, error = %e, "catalog provider failed, using built-in list");
            crate::builtin(kind).clone()
        }
    }
}
