//! The remote persistence seam.
//!
//! The concrete transport and record shapes are owned by the host platform;
//! the engine only depends on this trait. Methods return boxed futures for
//! dyn compatibility.

use std::future::Future;
use std::pin::Pin;

use gpcase_core::models::{CollectionKind, Entry, FieldMap, FormState, Step};

use crate::error::WizardError;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

pub trait CaseBackend: Send + Sync {
    /// Seed a new case from the basics slice (merged server-side with any
    /// provider/practice/patient linkage context). The caller guards that
    /// Subject is present; the engine never retries a failed create.
    fn create_case<'a>(&'a self, basics: &'a FieldMap) -> BoxFuture<'a, Result<String, WizardError>>;

    /// Persist one scalar step's field slice.
    fn save_step_data<'a>(
        &'a self,
        case_id: &'a str,
        step: Step,
        fields: &'a FieldMap,
    ) -> BoxFuture<'a, Result<(), WizardError>>;

    /// Replace/upsert a named collection. Items are pre-filtered by the
    /// caller so only entries with a resolvable display name arrive here.
    fn save_collection<'a>(
        &'a self,
        case_id: &'a str,
        kind: CollectionKind,
        items: &'a [Entry],
    ) -> BoxFuture<'a, Result<(), WizardError>>;

    /// The full case snapshot, or `None` when the case cannot be found.
    fn get_case_full_data<'a>(
        &'a self,
        case_id: &'a str,
    ) -> BoxFuture<'a, Result<Option<FormState>, WizardError>>;

    /// Resolve a possibly-child record id to its owning case id.
    fn get_authoritative_case_id<'a>(
        &'a self,
        record_id: &'a str,
    ) -> BoxFuture<'a, Result<Option<String>, WizardError>>;
}
