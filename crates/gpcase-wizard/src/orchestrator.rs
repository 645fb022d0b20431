//! The wizard orchestrator.
//!
//! Glue between the form store, the validation rules, the status machine,
//! the collection wizard, draft storage, and the backend. Every user-level
//! operation lands here: data updates, next/previous/jump navigation, the
//! finish gate, hydration, and the collection wizard lifecycle. Backend
//! failures surface as error notices and never advance state past the
//! failed save.

use gpcase_core::fields;
use gpcase_core::models::{
    CollectionKind, Entry, FieldMap, ScalarSlice, SlicePatch, Step, StepKind, StepStatus,
};
use gpcase_validation::result::{Issue, ValidationConfig};
use gpcase_validation::{validate_all, validate_step};

use crate::backend::CaseBackend;
use crate::catalogs::CatalogSet;
use crate::collection::{remove_by_identity, CollectionWizard, Phase, WizardMode};
use crate::draft::{DraftEnvelope, DraftStore};
use crate::error::WizardError;
use crate::notice::Notice;
use crate::payload::{build_collection_payload, populated_collections};
use crate::status;
use crate::store::{Action, FormStore, Mode};

/// The result of a next-step attempt.
#[derive(Debug)]
pub struct NextOutcome {
    pub advanced: bool,
    /// The active step after the attempt.
    pub step: Step,
    /// First blocking issue to focus when the attempt was rejected.
    pub focus: Option<Issue>,
    pub notices: Vec<Notice>,
}

/// The result of a finish attempt.
#[derive(Debug)]
pub struct FinishOutcome {
    pub finished: bool,
    pub case_id: Option<String>,
    /// The step the wizard jumped to when the full-form gate failed.
    pub jumped_to: Option<Step>,
    pub focus: Option<Issue>,
    pub notices: Vec<Notice>,
}

pub struct Orchestrator {
    store: FormStore,
    backend: Box<dyn CaseBackend>,
    drafts: Box<dyn DraftStore>,
    catalogs: CatalogSet,
    wizard: Option<CollectionWizard>,
    /// A grid-row removal awaiting confirmation.
    pending_removal: Option<(CollectionKind, String)>,
}

impl Orchestrator {
    pub fn new(
        backend: Box<dyn CaseBackend>,
        drafts: Box<dyn DraftStore>,
        catalogs: CatalogSet,
    ) -> Self {
        Self {
            store: FormStore::new(),
            backend,
            drafts,
            catalogs,
            wizard: None,
            pending_removal: None,
        }
    }

    pub fn store(&self) -> &FormStore {
        &self.store
    }

    pub fn catalogs(&self) -> &CatalogSet {
        &self.catalogs
    }

    pub fn wizard(&self) -> Option<&CollectionWizard> {
        self.wizard.as_ref()
    }

    pub fn pending_removal(&self) -> Option<&(CollectionKind, String)> {
        self.pending_removal.as_ref()
    }

    /// A field-level edit from a step widget: merge the patch, keep the
    /// basics gate and per-step statuses current, re-save the local draft,
    /// and autosave to the case when one exists.
    pub async fn handle_data_updated(&mut self, patch: SlicePatch) -> Vec<Notice> {
        let step = patch.owning_step();
        let touches_basics =
            matches!(&patch, SlicePatch::Scalar { slice: ScalarSlice::Basics, .. });

        self.store.apply(Action::MergeSlice(patch));

        if touches_basics && self.store.mode() == Mode::Intake {
            self.refresh_basics_gate();
        }

        // Forgiving live pass: warnings color the sidebar, nothing blocks.
        let result = validate_step(step, self.store.form(), &ValidationConfig::default());
        if self.store.status(step) != StepStatus::Active
            && self.store.status(step) != StepStatus::Locked
        {
            self.store.apply(Action::SetStepStatus {
                step,
                status: status::recompute(&result),
            });
        }
        self.store.apply(Action::RecordValidation { step, result });

        let mut notices = Vec::new();
        self.save_local_draft(&mut notices);

        if self.store.case_id().is_some() {
            if let Err(err) = self.persist_step(step).await {
                tracing::warn!(step = %step, error = %err, "autosave failed");
                notices.push(Notice::error(format!("Autosave failed: {err}")));
            }
        }
        notices
    }

    /// Commit the current step and advance. The step must pass strict
    /// validation, and every save for the step must succeed, before the
    /// active step moves.
    pub async fn handle_next(&mut self, patch: Option<SlicePatch>) -> NextOutcome {
        let mut notices = Vec::new();
        if let Some(patch) = patch {
            notices.extend(self.handle_data_updated(patch).await);
        }

        let step = self.store.current_step();
        let result = validate_step(step, self.store.form(), &ValidationConfig::strict());
        let focus = result.first_hard().cloned();
        let valid = result.is_valid();
        self.store.apply(Action::RecordValidation { step, result });

        if !valid {
            tracing::debug!(step = %step, "next blocked by validation");
            return NextOutcome { advanced: false, step, focus, notices };
        }

        match self.ensure_case(&mut notices).await {
            Err(err) => {
                notices.push(Notice::error(format!("Could not create the case: {err}")));
                return NextOutcome { advanced: false, step, focus: None, notices };
            }
            Ok(true) => {
                // Collections filled before the case existed get their first
                // save now; the current step's own collections are persisted
                // with the step below.
                if let Err(err) = self.flush_collections_except(step).await {
                    notices.push(Notice::error(format!("Could not save this step: {err}")));
                    return NextOutcome { advanced: false, step, focus: None, notices };
                }
            }
            Ok(false) => {}
        }

        if let Err(err) = self.persist_step(step).await {
            notices.push(Notice::error(format!("Could not save this step: {err}")));
            return NextOutcome { advanced: false, step, focus: None, notices };
        }

        let Some(next) = step.next() else {
            return NextOutcome { advanced: false, step, focus: None, notices };
        };
        self.store.apply(Action::AdvanceStep { to: next });

        if next == Step::Review {
            self.prepare_review();
        }
        NextOutcome { advanced: true, step: next, focus: None, notices }
    }

    /// Back navigation never blocks or persists, but the step being left
    /// still gets a fresh live validation so its status recomputes.
    pub fn handle_previous(&mut self) -> Option<Step> {
        let previous = self.store.current_step().previous()?;
        self.depart_to(previous);
        Some(previous)
    }

    /// Sidebar navigation: any non-locked step, in any order.
    pub fn jump_to_step(&mut self, step: Step) -> Result<Step, WizardError> {
        if !status::navigable(self.store.status(step)) {
            return Err(WizardError::StepLocked(step.number()));
        }
        self.depart_to(step);
        if step == Step::Review {
            self.prepare_review();
        }
        Ok(step)
    }

    /// The finish gate: strict full-form validation, then one final
    /// persistence pass over the catalog collections, then reset.
    pub async fn handle_finish(&mut self) -> FinishOutcome {
        let mut notices = Vec::new();
        let results = validate_all(self.store.form());

        let first_invalid = results
            .iter()
            .find(|(_, result)| !result.is_valid())
            .map(|(step, result)| (*step, result.first_hard().cloned()));

        for (step, result) in results {
            self.store.apply(Action::RecordValidation { step, result });
        }

        if let Some((step, focus)) = first_invalid {
            self.store.apply(Action::SetReviewReady(false));
            self.store.apply(Action::AdvanceStep { to: step });
            tracing::info!(step = %step, "finish blocked, jumping to first invalid step");
            notices.push(Notice::error(format!(
                "Step {step} still has required fields to complete."
            )));
            return FinishOutcome {
                finished: false,
                case_id: None,
                jumped_to: Some(step),
                focus,
                notices,
            };
        }

        let created = match self.ensure_case(&mut notices).await {
            Ok(created) => created,
            Err(err) => {
                notices.push(Notice::error(format!("Could not create the case: {err}")));
                return FinishOutcome {
                    finished: false,
                    case_id: None,
                    jumped_to: None,
                    focus: None,
                    notices,
                };
            }
        };
        let case_id = match self.store.case_id() {
            Some(id) => id.to_string(),
            None => {
                notices.push(Notice::error("No case to finalize."));
                return FinishOutcome {
                    finished: false,
                    case_id: None,
                    jumped_to: None,
                    focus: None,
                    notices,
                };
            }
        };

        // One save per catalog collection, whether or not its step was
        // revisited. Supports were persisted with the home-safety step,
        // except when the case only came into existence just now.
        let mut to_save: Vec<CollectionKind> = Vec::new();
        if created && !self.store.form().collection(CollectionKind::Supports).is_empty() {
            to_save.push(CollectionKind::Supports);
        }
        for step in Step::ALL.iter().filter(|s| s.kind() == StepKind::Collection) {
            to_save.extend(step.collections());
        }
        for kind in to_save {
            if let Err(err) = self.persist_collection(&case_id, kind).await {
                notices.push(Notice::error(format!("Could not save {kind}: {err}")));
                return FinishOutcome {
                    finished: false,
                    case_id: Some(case_id),
                    jumped_to: None,
                    focus: None,
                    notices,
                };
            }
        }

        if let Err(err) = self.drafts.clear() {
            tracing::warn!(error = %err, "draft cleanup failed after finish");
        }
        let message = match self.store.mode() {
            Mode::Intake => format!("Case {case_id} created."),
            Mode::Manage => format!("Case {case_id} updated."),
        };
        self.store.apply(Action::Reset);
        self.wizard = None;
        self.pending_removal = None;

        tracing::info!(case_id = %case_id, "intake finished");
        notices.push(Notice::success(message));
        FinishOutcome {
            finished: true,
            case_id: Some(case_id),
            jumped_to: None,
            focus: None,
            notices,
        }
    }

    /// Session start. With a record id, resolve and load the authoritative
    /// case; on any failure degrade to the local draft; otherwise start
    /// fresh.
    pub async fn hydrate(&mut self, record_id: Option<&str>) -> Vec<Notice> {
        let mut notices = Vec::new();

        if let Some(record_id) = record_id {
            match self.load_case(record_id).await {
                Ok(true) => return notices,
                Ok(false) => {
                    tracing::warn!(record_id, "no case found for record, falling back to draft");
                }
                Err(err) => {
                    tracing::warn!(record_id, error = %err, "case load failed, falling back to draft");
                    notices.push(Notice::error(
                        "Could not load the case; showing local data instead.",
                    ));
                }
            }
        }

        match self.drafts.load() {
            Ok(Some(envelope)) => {
                self.store.apply(Action::Hydrate { case_id: None, form: envelope.form });
                self.store.apply(Action::SetMode(Mode::Intake));
                // Draft statuses are recomputed from scratch: nothing is
                // trusted past the basics gate.
                for (step, status) in status::relock_plan() {
                    self.store.apply(Action::SetStepStatus { step, status });
                }
                self.store.apply(Action::AdvanceStep { to: Step::Basics });
                self.refresh_basics_gate();
                self.revalidate_inactive_steps();
                notices.push(Notice::info("Restored your saved draft."));
            }
            Ok(None) => self.store.apply(Action::Reset),
            Err(err) => {
                tracing::warn!(error = %err, "draft load failed, starting fresh");
                self.store.apply(Action::Reset);
            }
        }
        notices
    }

    /// Open the collection wizard for a step's catalog collection.
    pub fn open_collection_wizard(
        &mut self,
        kind: CollectionKind,
        mode: WizardMode,
    ) -> Result<(), WizardError> {
        let step = kind.owning_step();
        if !status::navigable(self.store.status(step)) {
            return Err(WizardError::StepLocked(step.number()));
        }
        let catalog = self.catalogs.get(kind).clone();
        let existing = self.store.form().collection(kind);
        let wizard = match mode {
            WizardMode::Add => CollectionWizard::add(kind, catalog, existing),
            WizardMode::Edit => CollectionWizard::edit(kind, catalog, existing),
        };
        tracing::debug!(kind = %kind, ?mode, "collection wizard opened");
        self.wizard = Some(wizard);
        Ok(())
    }

    pub fn wizard_toggle(&mut self, catalog_id: &str) -> Result<bool, WizardError> {
        self.wizard_mut()?.toggle(catalog_id)
    }

    pub fn wizard_advance(&mut self) -> Result<Phase, WizardError> {
        self.wizard_mut()?.advance()
    }

    pub fn wizard_back(&mut self) -> Result<Phase, WizardError> {
        let wizard = self.wizard_mut()?;
        wizard.back();
        Ok(wizard.phase())
    }

    pub fn wizard_update_draft(
        &mut self,
        entry_id: &str,
        field: &str,
        value: serde_json::Value,
    ) -> Result<(), WizardError> {
        self.wizard_mut()?.update_draft(entry_id, field, value)
    }

    pub fn wizard_set_notes(&mut self, entry_id: &str, notes: &str) -> Result<(), WizardError> {
        self.wizard_mut()?.set_draft_notes(entry_id, notes)
    }

    /// Discard the open wizard. The live collection was never touched.
    pub fn cancel_collection_wizard(&mut self) {
        if let Some(wizard) = self.wizard.take() {
            tracing::debug!(kind = %wizard.kind(), "collection wizard cancelled");
        }
    }

    /// Commit the open wizard's drafts into the form and persist.
    pub async fn commit_collection_wizard(&mut self) -> Result<Vec<Notice>, WizardError> {
        let wizard = self.wizard.take().ok_or(WizardError::NoWizard)?;
        let kind = wizard.kind();
        let entries = wizard.commit()?;
        Ok(self
            .handle_data_updated(SlicePatch::Collection { kind, entries })
            .await)
    }

    /// Stage a grid-row removal; nothing changes until confirmed.
    pub fn request_removal(&mut self, kind: CollectionKind, identity: &str) {
        self.pending_removal = Some((kind, identity.to_string()));
    }

    pub fn cancel_removal(&mut self) {
        self.pending_removal = None;
    }

    pub async fn confirm_removal(&mut self) -> Result<Vec<Notice>, WizardError> {
        let (kind, identity) = self.pending_removal.take().ok_or(WizardError::NoWizard)?;
        let entries = remove_by_identity(self.store.form().collection(kind), &identity);
        tracing::debug!(kind = %kind, identity, "collection entry removed");
        Ok(self
            .handle_data_updated(SlicePatch::Collection { kind, entries })
            .await)
    }

    fn wizard_mut(&mut self) -> Result<&mut CollectionWizard, WizardError> {
        self.wizard.as_mut().ok_or(WizardError::NoWizard)
    }

    /// Leave the current step for `to`: the departing step is re-validated
    /// (live rules) and its recorded result drives the status recompute in
    /// the advance.
    fn depart_to(&mut self, to: Step) {
        let from = self.store.current_step();
        if from != to && from != Step::Review {
            let result = validate_step(from, self.store.form(), &ValidationConfig::default());
            self.store.apply(Action::RecordValidation { step: from, result });
        }
        self.store.apply(Action::AdvanceStep { to });
    }

    /// Re-run the basics completeness gate after a basics edit: complete
    /// basics unlock the rest of the wizard, incomplete basics re-lock it
    /// and pull the user back to step 1.
    fn refresh_basics_gate(&mut self) {
        if status::basics_complete(self.store.form()) {
            for (step, status) in status::unlock_plan(self.store.statuses()) {
                self.store.apply(Action::SetStepStatus { step, status });
            }
        } else {
            for (step, status) in status::relock_plan() {
                self.store.apply(Action::SetStepStatus { step, status });
            }
            if self.store.current_step() != Step::Basics {
                self.store.apply(Action::AdvanceStep { to: Step::Basics });
            }
        }
    }

    /// Run the live (non-strict) rules over every non-active unlocked step.
    /// Invalid or warning results recolor the sidebar; clean steps keep
    /// their current status (final completion is earned by visiting).
    fn revalidate_inactive_steps(&mut self) {
        let config = ValidationConfig::default();
        for step in Step::ALL {
            if step == Step::Review {
                continue;
            }
            let result = validate_step(step, self.store.form(), &config);
            let current = self.store.status(step);
            if current != StepStatus::Active && current != StepStatus::Locked {
                if !result.is_valid() {
                    self.store
                        .apply(Action::SetStepStatus { step, status: StepStatus::InProgress });
                } else if result.has_warnings() {
                    self.store
                        .apply(Action::SetStepStatus { step, status: StepStatus::Warning });
                }
            }
            self.store.apply(Action::RecordValidation { step, result });
        }
    }

    /// Strict full-form pass on entering the review step.
    fn prepare_review(&mut self) {
        let results = validate_all(self.store.form());
        let all_valid = results.values().all(|r| r.is_valid());
        for (step, result) in results {
            self.store.apply(Action::RecordValidation { step, result });
        }
        self.store.apply(Action::SetReviewReady(all_valid));
    }

    /// Create the case on first commit past basics. Returns whether this
    /// call created it; the caller decides what pre-existing data to flush.
    async fn ensure_case(&mut self, notices: &mut Vec<Notice>) -> Result<bool, WizardError> {
        if self.store.case_id().is_some() {
            return Ok(false);
        }
        // The create payload must carry a subject; strict basics validation
        // guarantees it on the normal path.
        if self.store.form().text(ScalarSlice::Basics, fields::SUBJECT).is_none() {
            return Err(WizardError::Backend("case subject is missing".to_string()));
        }

        let basics = self.store.form().scalar(ScalarSlice::Basics).clone();
        let case_id = self.backend.create_case(&basics).await?;
        tracing::info!(case_id = %case_id, "case created");
        self.store.apply(Action::SetCaseId(case_id.clone()));
        notices.push(Notice::info(format!("Case {case_id} created as a draft.")));
        Ok(true)
    }

    /// First save for collections filled before the case existed, skipping
    /// the ones the given step is about to persist itself.
    async fn flush_collections_except(&mut self, step: Step) -> Result<(), WizardError> {
        let Some(case_id) = self.store.case_id().map(str::to_string) else {
            return Ok(());
        };
        for kind in populated_collections(self.store.form()) {
            if step.collections().contains(&kind) {
                continue;
            }
            self.persist_collection(&case_id, kind).await?;
        }
        Ok(())
    }

    /// Persist everything a step owns: its scalar slices as one field map,
    /// then each of its collections. No-op without a case.
    async fn persist_step(&mut self, step: Step) -> Result<(), WizardError> {
        let Some(case_id) = self.store.case_id().map(str::to_string) else {
            return Ok(());
        };

        let slices = step.scalar_slices();
        if !slices.is_empty() {
            let mut combined = FieldMap::new();
            for slice in slices {
                combined.extend(self.store.form().scalar(*slice).clone());
            }
            self.backend.save_step_data(&case_id, step, &combined).await?;
        }

        for kind in step.collections() {
            self.persist_collection(&case_id, *kind).await?;
        }
        Ok(())
    }

    async fn persist_collection(
        &self,
        case_id: &str,
        kind: CollectionKind,
    ) -> Result<(), WizardError> {
        let payload: Vec<Entry> =
            build_collection_payload(kind, self.store.form(), &self.catalogs);
        self.backend.save_collection(case_id, kind, &payload).await
    }

    /// Load and hydrate from the backend. `Ok(false)` means the record did
    /// not resolve to a case with data.
    async fn load_case(&mut self, record_id: &str) -> Result<bool, WizardError> {
        let Some(case_id) = self.backend.get_authoritative_case_id(record_id).await? else {
            return Ok(false);
        };
        let Some(form) = self.backend.get_case_full_data(&case_id).await? else {
            return Ok(false);
        };

        tracing::info!(case_id = %case_id, "hydrated from case");
        self.store.apply(Action::Hydrate { case_id: Some(case_id), form });
        self.store.apply(Action::SetMode(Mode::Manage));
        self.revalidate_inactive_steps();
        Ok(true)
    }

    fn save_local_draft(&mut self, notices: &mut Vec<Notice>) {
        if self.store.mode() != Mode::Intake {
            return;
        }
        let envelope = DraftEnvelope::new(self.store.form().clone());
        if let Err(err) = self.drafts.save(&envelope) {
            tracing::warn!(error = %err, "draft save failed");
            notices.push(Notice::error("Could not save your local draft."));
        }
    }
}
