//! The central form state.
//!
//! A single aggregate holding one slice per wizard step: ten scalar slices
//! (opaque key→value maps) and six ordered collections of entry records.
//! Every slice always exists — hydration from a partial snapshot or draft
//! defaults missing slices to empty, so readers never see an absent slice.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use ts_rs::TS;

use crate::models::entry::Entry;
use crate::models::step::{CollectionKind, ScalarSlice, Step};
use crate::multivalue::MultiValue;

/// Opaque field map: verbatim clinical field names to scalar or array values.
pub type FieldMap = BTreeMap<String, Value>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct FormState {
    pub basics: FieldMap,
    pub presenting: FieldMap,
    pub prior_dx: FieldMap,
    pub medical_flags: FieldMap,
    pub suicide: FieldMap,
    pub violence: FieldMap,
    pub psychosis_mania: FieldMap,
    pub family_trauma: FieldMap,
    pub home_safety: FieldMap,
    pub cognition: FieldMap,
    pub medications: Vec<Entry>,
    pub substances: Vec<Entry>,
    pub screeners: Vec<Entry>,
    pub concerns: Vec<Entry>,
    pub safety_risks: Vec<Entry>,
    pub supports: Vec<Entry>,
}

impl FormState {
    pub fn scalar(&self, slice: ScalarSlice) -> &FieldMap {
        match slice {
            ScalarSlice::Basics => &self.basics,
            ScalarSlice::Presenting => &self.presenting,
            ScalarSlice::PriorDx => &self.prior_dx,
            ScalarSlice::MedicalFlags => &self.medical_flags,
            ScalarSlice::Suicide => &self.suicide,
            ScalarSlice::Violence => &self.violence,
            ScalarSlice::PsychosisMania => &self.psychosis_mania,
            ScalarSlice::FamilyTrauma => &self.family_trauma,
            ScalarSlice::HomeSafety => &self.home_safety,
            ScalarSlice::Cognition => &self.cognition,
        }
    }

    pub fn scalar_mut(&mut self, slice: ScalarSlice) -> &mut FieldMap {
        match slice {
            ScalarSlice::Basics => &mut self.basics,
            ScalarSlice::Presenting => &mut self.presenting,
            ScalarSlice::PriorDx => &mut self.prior_dx,
            ScalarSlice::MedicalFlags => &mut self.medical_flags,
            ScalarSlice::Suicide => &mut self.suicide,
            ScalarSlice::Violence => &mut self.violence,
            ScalarSlice::PsychosisMania => &mut self.psychosis_mania,
            ScalarSlice::FamilyTrauma => &mut self.family_trauma,
            ScalarSlice::HomeSafety => &mut self.home_safety,
            ScalarSlice::Cognition => &mut self.cognition,
        }
    }

    pub fn collection(&self, kind: CollectionKind) -> &[Entry] {
        match kind {
            CollectionKind::Medications => &self.medications,
            CollectionKind::Substances => &self.substances,
            CollectionKind::Screeners => &self.screeners,
            CollectionKind::Concerns => &self.concerns,
            CollectionKind::SafetyRisks => &self.safety_risks,
            CollectionKind::Supports => &self.supports,
        }
    }

    pub fn collection_mut(&mut self, kind: CollectionKind) -> &mut Vec<Entry> {
        match kind {
            CollectionKind::Medications => &mut self.medications,
            CollectionKind::Substances => &mut self.substances,
            CollectionKind::Screeners => &mut self.screeners,
            CollectionKind::Concerns => &mut self.concerns,
            CollectionKind::SafetyRisks => &mut self.safety_risks,
            CollectionKind::Supports => &mut self.supports,
        }
    }

    /// Shallow-merge a partial scalar slice: incoming fields overwrite,
    /// fields not named in the partial are untouched. Merging the same
    /// partial twice is a no-op the second time.
    pub fn merge_scalar(&mut self, slice: ScalarSlice, partial: FieldMap) {
        let target = self.scalar_mut(slice);
        for (key, value) in partial {
            target.insert(key, value);
        }
    }

    /// Collection slices replace wholesale; there is no per-entry merge at
    /// this level (the collection wizard already merged drafts by identity).
    pub fn set_collection(&mut self, kind: CollectionKind, entries: Vec<Entry>) {
        *self.collection_mut(kind) = entries;
    }

    pub fn apply_patch(&mut self, patch: SlicePatch) {
        match patch {
            SlicePatch::Scalar { slice, fields } => self.merge_scalar(slice, fields),
            SlicePatch::Collection { kind, entries } => self.set_collection(kind, entries),
        }
    }

    pub fn field(&self, slice: ScalarSlice, name: &str) -> Option<&Value> {
        self.scalar(slice).get(name)
    }

    /// A field as trimmed non-empty text. Missing, null, blank, or
    /// non-string values all read as `None`.
    pub fn text(&self, slice: ScalarSlice, name: &str) -> Option<&str> {
        match self.field(slice, name) {
            Some(Value::String(s)) => {
                let s = s.trim();
                (!s.is_empty()).then_some(s)
            }
            _ => None,
        }
    }

    /// A field as a number, accepting numeric strings from the wire.
    pub fn number(&self, slice: ScalarSlice, name: &str) -> Option<f64> {
        match self.field(slice, name) {
            Some(Value::Number(n)) => n.as_f64(),
            Some(Value::String(s)) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// A field as a multi-value selection (array or semicolon string).
    pub fn multi(&self, slice: ScalarSlice, name: &str) -> MultiValue {
        self.field(slice, name)
            .map(MultiValue::from_wire)
            .unwrap_or_default()
    }
}

/// A partial update to one slice, as emitted by a step widget. Scalar
/// patches shallow-merge; collection patches replace the list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "snake_case")]
#[ts(export)]
pub enum SlicePatch {
    Scalar { slice: ScalarSlice, fields: FieldMap },
    Collection { kind: CollectionKind, entries: Vec<Entry> },
}

impl SlicePatch {
    pub fn owning_step(&self) -> Step {
        match self {
            SlicePatch::Scalar { slice, .. } => slice.owning_step(),
            SlicePatch::Collection { kind, .. } => kind.owning_step(),
        }
    }
}
