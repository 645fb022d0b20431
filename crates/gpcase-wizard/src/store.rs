//! The central form store.
//!
//! One state container owns the form aggregate, the step-status map, the
//! validation-result cache, the case identity, and the navigation state.
//! Every mutation goes through [`FormStore::apply`] with a typed action, so
//! transitions are traceable and testable in isolation from any rendering.

use std::collections::BTreeMap;

use gpcase_core::models::{FormState, SlicePatch, Step, StepStatus};
use gpcase_validation::result::ValidationResult;

use crate::status;

/// Whether the wizard is capturing a fresh intake or managing an existing
/// case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Intake,
    Manage,
}

#[derive(Debug)]
pub enum Action {
    /// Merge a partial slice into the form (scalar: field-by-field,
    /// collection: wholesale replace).
    MergeSlice(SlicePatch),
    SetStepStatus { step: Step, status: StepStatus },
    /// Make `to` the active step. The departing step, if still marked
    /// active, falls back to its recomputed status.
    AdvanceStep { to: Step },
    RecordValidation { step: Step, result: ValidationResult },
    SetCaseId(String),
    SetMode(Mode),
    SetReviewReady(bool),
    /// Replace the whole form from a backend snapshot.
    Hydrate { case_id: Option<String>, form: FormState },
    /// Back to the initial empty configuration.
    Reset,
}

#[derive(Debug)]
pub struct FormStore {
    form: FormState,
    statuses: BTreeMap<Step, StepStatus>,
    results: BTreeMap<Step, ValidationResult>,
    case_id: Option<String>,
    current_step: Step,
    mode: Mode,
    review_ready: bool,
}

impl Default for FormStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FormStore {
    pub fn new() -> Self {
        Self {
            form: FormState::default(),
            statuses: status::initial_statuses(),
            results: BTreeMap::new(),
            case_id: None,
            current_step: Step::Basics,
            mode: Mode::Intake,
            review_ready: false,
        }
    }

    pub fn apply(&mut self, action: Action) {
        tracing::trace!(?action, "applying store action");
        match action {
            Action::MergeSlice(patch) => self.form.apply_patch(patch),
            Action::SetStepStatus { step, status } => {
                self.statuses.insert(step, status);
            }
            Action::AdvanceStep { to } => {
                let from = self.current_step;
                if from != to && self.statuses.get(&from) == Some(&StepStatus::Active) {
                    let fallback = self
                        .results
                        .get(&from)
                        .map(status::recompute)
                        .unwrap_or(StepStatus::Completed);
                    self.statuses.insert(from, fallback);
                }
                self.statuses.insert(to, StepStatus::Active);
                self.current_step = to;
                tracing::debug!(from = %from, to = %to, "step advanced");
            }
            Action::RecordValidation { step, result } => {
                self.results.insert(step, result);
            }
            Action::SetCaseId(case_id) => {
                // Case identity is immutable once set for the session.
                if self.case_id.is_none() {
                    tracing::info!(case_id = %case_id, "case id assigned");
                    self.case_id = Some(case_id);
                }
            }
            Action::SetMode(mode) => self.mode = mode,
            Action::SetReviewReady(ready) => self.review_ready = ready,
            Action::Hydrate { case_id, form } => {
                self.form = form;
                self.case_id = case_id;
                self.results.clear();
                self.current_step = Step::Basics;
                self.statuses = Step::ALL
                    .iter()
                    .map(|step| {
                        let status = if *step == Step::Basics {
                            StepStatus::Active
                        } else {
                            StepStatus::Completed
                        };
                        (*step, status)
                    })
                    .collect();
            }
            Action::Reset => {
                tracing::debug!("store reset to initial state");
                *self = Self::new();
            }
        }
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn status(&self, step: Step) -> StepStatus {
        self.statuses.get(&step).copied().unwrap_or(StepStatus::Locked)
    }

    pub fn statuses(&self) -> &BTreeMap<Step, StepStatus> {
        &self.statuses
    }

    pub fn validation(&self, step: Step) -> Option<&ValidationResult> {
        self.results.get(&step)
    }

    pub fn case_id(&self) -> Option<&str> {
        self.case_id.as_deref()
    }

    pub fn current_step(&self) -> Step {
        self.current_step
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn review_ready(&self) -> bool {
        self.review_ready
    }
}
