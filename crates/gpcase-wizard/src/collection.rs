//! The collection wizard sub-machine.
//!
//! One generic three-phase flow — `Pick(0) → Detail(1) → Review(2)` — shared
//! by all six catalog-backed collection steps. The wizard works on draft
//! entries only; the live collection is untouched until `commit`, so backing
//! out at any phase discards nothing that was already committed.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use ts_rs::TS;

use gpcase_catalog::Catalog;
use gpcase_core::models::{CollectionKind, Entry};
use gpcase_validation::entries::entry_issues;
use gpcase_validation::result::Issue;

use crate::error::WizardError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Phase {
    Pick,
    Detail,
    Review,
}

impl Phase {
    pub fn number(self) -> u8 {
        match self {
            Phase::Pick => 0,
            Phase::Detail => 1,
            Phase::Review => 2,
        }
    }
}

/// `Add` disables catalog items already present in the live collection;
/// `Edit` pre-seeds the selection from the collection and lifts that guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum WizardMode {
    Add,
    Edit,
}

#[derive(Debug)]
pub struct CollectionWizard {
    kind: CollectionKind,
    catalog: Catalog,
    mode: WizardMode,
    phase: Phase,
    /// Identities that were in the live collection when the wizard opened.
    existing: Vec<Entry>,
    /// Add mode only: identities excluded from selection.
    disabled: BTreeSet<String>,
    /// Ordered catalog-id selection from the pick phase.
    selection: Vec<String>,
    drafts: Vec<Entry>,
    issues: BTreeMap<String, Vec<Issue>>,
}

impl CollectionWizard {
    /// Open in add mode: items already in the collection are not selectable.
    pub fn add(kind: CollectionKind, catalog: Catalog, existing: &[Entry]) -> Self {
        let disabled = existing.iter().map(|e| e.identity().to_string()).collect();
        Self {
            kind,
            catalog,
            mode: WizardMode::Add,
            phase: Phase::Pick,
            existing: existing.to_vec(),
            disabled,
            selection: Vec::new(),
            drafts: Vec::new(),
            issues: BTreeMap::new(),
        }
    }

    /// Open in edit mode: the selection starts as the live collection's
    /// identities and every item stays selectable.
    pub fn edit(kind: CollectionKind, catalog: Catalog, existing: &[Entry]) -> Self {
        let selection = existing.iter().map(|e| e.identity().to_string()).collect();
        Self {
            kind,
            catalog,
            mode: WizardMode::Edit,
            phase: Phase::Pick,
            existing: existing.to_vec(),
            disabled: BTreeSet::new(),
            selection,
            drafts: Vec::new(),
            issues: BTreeMap::new(),
        }
    }

    pub fn kind(&self) -> CollectionKind {
        self.kind
    }

    pub fn mode(&self) -> WizardMode {
        self.mode
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn selection(&self) -> &[String] {
        &self.selection
    }

    pub fn drafts(&self) -> &[Entry] {
        &self.drafts
    }

    /// Whether a catalog item can be toggled in the pick phase.
    pub fn selectable(&self, catalog_id: &str) -> bool {
        self.catalog.contains_id(catalog_id)
            && !(self.mode == WizardMode::Add && self.disabled.contains(catalog_id))
    }

    /// Toggle a catalog item in or out of the selection. Returns whether the
    /// item is selected afterwards.
    pub fn toggle(&mut self, catalog_id: &str) -> Result<bool, WizardError> {
        if self.phase != Phase::Pick {
            return Err(WizardError::Phase(self.phase));
        }
        if !self.catalog.contains_id(catalog_id) {
            return Err(WizardError::UnknownCatalogItem(catalog_id.to_string()));
        }
        if self.mode == WizardMode::Add && self.disabled.contains(catalog_id) {
            return Err(WizardError::AlreadyInCase(catalog_id.to_string()));
        }

        if let Some(pos) = self.selection.iter().position(|id| id == catalog_id) {
            self.selection.remove(pos);
            Ok(false)
        } else {
            self.selection.push(catalog_id.to_string());
            Ok(true)
        }
    }

    /// Advance one phase. Pick→Detail materializes drafts; Detail→Review
    /// requires every draft to pass its required-field checks.
    pub fn advance(&mut self) -> Result<Phase, WizardError> {
        match self.phase {
            Phase::Pick => {
                if self.mode == WizardMode::Add && self.selection.is_empty() {
                    return Err(WizardError::EmptySelection);
                }
                self.drafts = self.materialize_drafts()?;
                self.phase = Phase::Detail;
            }
            Phase::Detail => {
                self.issues = self
                    .drafts
                    .iter()
                    .map(|d| (d.identity().to_string(), entry_issues(self.kind, d)))
                    .collect();

                if let Some((entry_id, issue)) = self.first_invalid() {
                    let err = WizardError::DraftInvalid {
                        entry_id: entry_id.to_string(),
                        path: issue.path.clone(),
                    };
                    tracing::debug!(kind = %self.kind, entry = entry_id, "draft validation blocked advance");
                    return Err(err);
                }
                self.phase = Phase::Review;
            }
            Phase::Review => return Err(WizardError::Phase(Phase::Review)),
        }
        Ok(self.phase)
    }

    /// Step back one phase. Backing out of pick is a caller-side cancel.
    pub fn back(&mut self) {
        self.phase = match self.phase {
            Phase::Pick | Phase::Detail => Phase::Pick,
            Phase::Review => Phase::Detail,
        };
    }

    /// One draft entry per selected id, in selection order, seeded from the
    /// live collection when the id is already present.
    fn materialize_drafts(&self) -> Result<Vec<Entry>, WizardError> {
        let mut drafts = Vec::with_capacity(self.selection.len());
        for id in &self.selection {
            if let Some(existing) = self.existing.iter().find(|e| e.identity() == id) {
                drafts.push(existing.clone());
                continue;
            }
            let item = self
                .catalog
                .by_id(id)
                .ok_or_else(|| WizardError::UnknownCatalogItem(id.clone()))?;
            drafts.push(Entry::from_catalog(&item.id, &item.name, &item.category));
        }
        Ok(drafts)
    }

    /// Update one detail field on a draft.
    pub fn update_draft(&mut self, entry_id: &str, field: &str, value: Value) -> Result<(), WizardError> {
        if self.phase != Phase::Detail {
            return Err(WizardError::Phase(self.phase));
        }
        let draft = self
            .drafts
            .iter_mut()
            .find(|d| d.identity() == entry_id)
            .ok_or_else(|| WizardError::UnknownCatalogItem(entry_id.to_string()))?;
        draft.set_field(field, value);
        // Stale flags clear on edit; the Detail→Review gate re-checks.
        self.issues.remove(entry_id);
        Ok(())
    }

    pub fn set_draft_notes(&mut self, entry_id: &str, notes: &str) -> Result<(), WizardError> {
        if self.phase != Phase::Detail {
            return Err(WizardError::Phase(self.phase));
        }
        let draft = self
            .drafts
            .iter_mut()
            .find(|d| d.identity() == entry_id)
            .ok_or_else(|| WizardError::UnknownCatalogItem(entry_id.to_string()))?;
        draft.notes = notes.to_string();
        Ok(())
    }

    /// Inline flags for one draft, from the last failed advance.
    pub fn draft_issues(&self, entry_id: &str) -> &[Issue] {
        self.issues.get(entry_id).map_or(&[], Vec::as_slice)
    }

    /// The first invalid draft (in draft order) and its first issue, for
    /// focus steering.
    pub fn first_invalid(&self) -> Option<(&str, &Issue)> {
        self.drafts.iter().find_map(|d| {
            let issues = self.issues.get(d.identity())?;
            let first = issues.first()?;
            Some((d.identity(), first))
        })
    }

    /// Merge the drafts into the collection: entries already present keep
    /// their position and are replaced by their draft; new drafts append in
    /// selection order. Consumes the wizard.
    pub fn commit(self) -> Result<Vec<Entry>, WizardError> {
        if self.phase != Phase::Review {
            return Err(WizardError::Phase(self.phase));
        }

        let mut merged = self.existing.clone();
        for draft in self.drafts {
            match merged.iter().position(|e| e.matches(&draft)) {
                Some(pos) => merged[pos] = draft,
                None => merged.push(draft),
            }
        }
        tracing::debug!(kind = %self.kind, count = merged.len(), "collection wizard committed");
        Ok(merged)
    }
}

/// Grid-view removal: drop one entry by identity, preserving order.
pub fn remove_by_identity(entries: &[Entry], identity: &str) -> Vec<Entry> {
    entries
        .iter()
        .filter(|e| e.identity() != identity)
        .cloned()
        .collect()
}
