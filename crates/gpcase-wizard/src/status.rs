//! The step-status state machine, as pure functions over the status map.
//!
//! Transitions: `locked → active → {completed | warning | in-progress |
//! final-completed}`, with `active` re-enterable from any non-locked state.
//! The orchestrator applies the plans computed here through store actions so
//! every status change goes through one mutation path.

use std::collections::BTreeMap;

use gpcase_core::fields;
use gpcase_core::models::{FormState, ScalarSlice, Step, StepStatus};
use gpcase_validation::result::ValidationResult;

/// Steps that carry clinically significant optional content: unlocking from
/// basics puts these at `warning` rather than neutral `completed`.
pub const SIGNIFICANT_STEPS: [Step; 6] = [
    Step::Presenting,
    Step::Suicide,
    Step::Violence,
    Step::HomeSafety,
    Step::Cognition,
    Step::Concerns,
];

/// Wizard start: step 1 active, everything else locked.
pub fn initial_statuses() -> BTreeMap<Step, StepStatus> {
    Step::ALL
        .iter()
        .map(|step| {
            let status = if *step == Step::Basics {
                StepStatus::Active
            } else {
                StepStatus::Locked
            };
            (*step, status)
        })
        .collect()
}

/// The unlock gate: both required basics fields are present.
pub fn basics_complete(form: &FormState) -> bool {
    form.text(ScalarSlice::Basics, fields::SUBJECT).is_some()
        && form.text(ScalarSlice::Basics, fields::DESCRIPTION).is_some()
}

/// Status changes to apply when basics become complete. Only currently
/// locked steps are touched; anything the user has already visited keeps
/// its earned status.
pub fn unlock_plan(statuses: &BTreeMap<Step, StepStatus>) -> Vec<(Step, StepStatus)> {
    Step::ALL
        .iter()
        .skip(1)
        .filter(|step| statuses.get(step) == Some(&StepStatus::Locked))
        .map(|step| {
            let status = if SIGNIFICANT_STEPS.contains(step) {
                StepStatus::Warning
            } else {
                StepStatus::Completed
            };
            (*step, status)
        })
        .collect()
}

/// Status changes to apply when basics lose completeness: steps 2–15 are
/// re-locked unconditionally and step 1 is forced active again.
pub fn relock_plan() -> Vec<(Step, StepStatus)> {
    Step::ALL
        .iter()
        .skip(1)
        .map(|step| (*step, StepStatus::Locked))
        .collect()
}

/// Recompute a non-active step's status from its last validation result.
pub fn recompute(result: &ValidationResult) -> StepStatus {
    if !result.is_valid() {
        StepStatus::InProgress
    } else if result.has_warnings() {
        StepStatus::Warning
    } else {
        StepStatus::FinalCompleted
    }
}

/// Any non-locked step is navigable from the sidebar, in any order.
pub fn navigable(status: StepStatus) -> bool {
    status != StepStatus::Locked
}
