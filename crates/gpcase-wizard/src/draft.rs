//! Local durable draft storage.
//!
//! The whole form store is serialized under a single key on every data
//! update and cleared on finish/reset, so a browser crash or accidental
//! navigation never loses an intake in progress. Drafts written by older
//! releases used different slice keys; those are migrated on load.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use gpcase_core::models::FormState;

use crate::error::WizardError;

/// The storage key for the serialized draft.
pub const DRAFT_KEY: &str = "gpcase_intake_draft";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftEnvelope {
    pub draft_id: Uuid,
    pub saved_at: jiff::Timestamp,
    pub form: FormState,
}

impl DraftEnvelope {
    pub fn new(form: FormState) -> Self {
        Self {
            draft_id: Uuid::new_v4(),
            saved_at: jiff::Timestamp::now(),
            form,
        }
    }
}

/// Trait over the host's durable key/value storage.
pub trait DraftStore: Send + Sync {
    fn load(&self) -> Result<Option<DraftEnvelope>, WizardError>;
    fn save(&self, envelope: &DraftEnvelope) -> Result<(), WizardError>;
    fn clear(&self) -> Result<(), WizardError>;
}

/// Rename slice keys used by older drafts to their current names.
pub fn migrate_legacy_keys(raw: &mut Value) {
    let Some(form) = raw.get_mut("form").and_then(Value::as_object_mut) else {
        return;
    };
    for (legacy, current) in [("homesafety", "home_safety"), ("orientation", "cognition")] {
        if form.contains_key(legacy) && !form.contains_key(current) {
            if let Some(slice) = form.remove(legacy) {
                tracing::debug!(legacy, current, "migrated legacy draft slice key");
                form.insert(current.to_string(), slice);
            }
        }
    }
}

/// File-backed draft storage. Writes are atomic (tmp + rename) so a crash
/// mid-write never corrupts the previous draft.
pub struct FileDraftStore {
    path: PathBuf,
}

impl FileDraftStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        let mut path = dir.into();
        path.push(format!("{DRAFT_KEY}.json"));
        Self { path }
    }
}

impl DraftStore for FileDraftStore {
    fn load(&self) -> Result<Option<DraftEnvelope>, WizardError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let bytes = std::fs::read(&self.path)?;
        let mut raw: Value = serde_json::from_slice(&bytes)?;
        migrate_legacy_keys(&mut raw);
        let envelope: DraftEnvelope = serde_json::from_value(raw)?;
        tracing::debug!(path = %self.path.display(), "draft loaded");
        Ok(Some(envelope))
    }

    fn save(&self, envelope: &DraftEnvelope) -> Result<(), WizardError> {
        let json = serde_json::to_vec_pretty(envelope)?;
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let tmp_path = self.path.with_extension("json.tmp");
        std::fs::write(&tmp_path, &json)?;
        std::fs::rename(&tmp_path, &self.path)?;
        tracing::debug!(path = %self.path.display(), "draft saved");
        Ok(())
    }

    fn clear(&self) -> Result<(), WizardError> {
        if self.path.exists() {
            std::fs::remove_file(&self.path)?;
            tracing::debug!(path = %self.path.display(), "draft cleared");
        }
        Ok(())
    }
}
