//! Shared test doubles: an in-memory backend with call recording and an
//! in-memory draft store.

// Not every test binary uses every helper.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use serde_json::json;

use gpcase_core::fields;
use gpcase_core::models::{CollectionKind, Entry, FieldMap, FormState, ScalarSlice, SlicePatch, Step};
use gpcase_wizard::backend::{BoxFuture, CaseBackend};
use gpcase_wizard::catalogs::CatalogSet;
use gpcase_wizard::draft::{DraftEnvelope, DraftStore};
use gpcase_wizard::error::WizardError;
use gpcase_wizard::Orchestrator;

#[derive(Default)]
pub struct BackendLog {
    pub creates: usize,
    pub step_saves: Vec<(Step, FieldMap)>,
    pub collection_saves: Vec<(CollectionKind, Vec<Entry>)>,
}

#[derive(Default)]
struct BackendInner {
    log: Mutex<BackendLog>,
    fail_create: bool,
    fail_saves: bool,
    snapshot: Option<FormState>,
    case_for_record: Option<String>,
}

/// Clonable so a test can keep a handle after moving one copy into the
/// orchestrator.
#[derive(Clone, Default)]
pub struct StubBackend {
    inner: Arc<BackendInner>,
}

impl StubBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_create() -> Self {
        Self {
            inner: Arc::new(BackendInner { fail_create: true, ..Default::default() }),
        }
    }

    pub fn failing_saves() -> Self {
        Self {
            inner: Arc::new(BackendInner { fail_saves: true, ..Default::default() }),
        }
    }

    pub fn with_case(case_id: &str, snapshot: FormState) -> Self {
        Self {
            inner: Arc::new(BackendInner {
                snapshot: Some(snapshot),
                case_for_record: Some(case_id.to_string()),
                ..Default::default()
            }),
        }
    }

    pub fn creates(&self) -> usize {
        self.inner.log.lock().unwrap().creates
    }

    pub fn step_saves(&self) -> Vec<(Step, FieldMap)> {
        self.inner.log.lock().unwrap().step_saves.clone()
    }

    pub fn collection_saves(&self) -> Vec<(CollectionKind, Vec<Entry>)> {
        self.inner.log.lock().unwrap().collection_saves.clone()
    }
}

impl CaseBackend for StubBackend {
    fn create_case<'a>(&'a self, _basics: &'a FieldMap) -> BoxFuture<'a, Result<String, WizardError>> {
        Box::pin(async move {
            if self.inner.fail_create {
                return Err(WizardError::Backend("create refused".to_string()));
            }
            let mut log = self.inner.log.lock().unwrap();
            log.creates += 1;
            Ok(format!("case-{:03}", log.creates))
        })
    }

    fn save_step_data<'a>(
        &'a self,
        _case_id: &'a str,
        step: Step,
        data: &'a FieldMap,
    ) -> BoxFuture<'a, Result<(), WizardError>> {
        Box::pin(async move {
            if self.inner.fail_saves {
                return Err(WizardError::Backend("save refused".to_string()));
            }
            self.inner.log.lock().unwrap().step_saves.push((step, data.clone()));
            Ok(())
        })
    }

    fn save_collection<'a>(
        &'a self,
        _case_id: &'a str,
        kind: CollectionKind,
        items: &'a [Entry],
    ) -> BoxFuture<'a, Result<(), WizardError>> {
        Box::pin(async move {
            if self.inner.fail_saves {
                return Err(WizardError::Backend("save refused".to_string()));
            }
            self.inner
                .log
                .lock()
                .unwrap()
                .collection_saves
                .push((kind, items.to_vec()));
            Ok(())
        })
    }

    fn get_case_full_data<'a>(
        &'a self,
        _case_id: &'a str,
    ) -> BoxFuture<'a, Result<Option<FormState>, WizardError>> {
        Box::pin(async move { Ok(self.inner.snapshot.clone()) })
    }

    fn get_authoritative_case_id<'a>(
        &'a self,
        _record_id: &'a str,
    ) -> BoxFuture<'a, Result<Option<String>, WizardError>> {
        Box::pin(async move { Ok(self.inner.case_for_record.clone()) })
    }
}

#[derive(Clone, Default)]
pub struct MemoryDraftStore {
    slot: Arc<Mutex<Option<DraftEnvelope>>>,
}

impl MemoryDraftStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<DraftEnvelope> {
        self.slot.lock().unwrap().clone()
    }
}

impl DraftStore for MemoryDraftStore {
    fn load(&self) -> Result<Option<DraftEnvelope>, WizardError> {
        Ok(self.slot.lock().unwrap().clone())
    }

    fn save(&self, envelope: &DraftEnvelope) -> Result<(), WizardError> {
        *self.slot.lock().unwrap() = Some(envelope.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), WizardError> {
        *self.slot.lock().unwrap() = None;
        Ok(())
    }
}

pub fn orchestrator(backend: StubBackend, drafts: MemoryDraftStore) -> Orchestrator {
    Orchestrator::new(Box::new(backend), Box::new(drafts), CatalogSet::builtin())
}

pub fn scalar_patch(slice: ScalarSlice, pairs: &[(&str, serde_json::Value)]) -> SlicePatch {
    let fields = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect();
    SlicePatch::Scalar { slice, fields }
}

pub fn basics_patch(subject: &str, description: &str) -> SlicePatch {
    scalar_patch(
        ScalarSlice::Basics,
        &[
            (fields::SUBJECT, json!(subject)),
            (fields::DESCRIPTION, json!(description)),
        ],
    )
}
