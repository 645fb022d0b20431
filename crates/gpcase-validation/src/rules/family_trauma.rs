use gpcase_core::fields;
use gpcase_core::models::{FormState, ScalarSlice, Step};

use crate::result::{ValidationConfig, ValidationResult};
use crate::StepRule;

/// Step 7: selecting any family-history item makes the notes hard-required.
/// Nothing is required when the history is empty.
pub struct FamilyTrauma;

impl StepRule for FamilyTrauma {
    fn step(&self) -> Step {
        Step::FamilyTrauma
    }

    fn validate(&self, form: &FormState, _config: &ValidationConfig) -> ValidationResult {
        let mut result = ValidationResult::default();
        let slice = ScalarSlice::FamilyTrauma;

        let history = form.multi(slice, fields::FAMILY_HISTORY);
        if !history.is_empty() && form.text(slice, fields::FAMILY_HISTORY_NOTES).is_none() {
            result.hard(
                fields::FAMILY_HISTORY_NOTES,
                "Family history notes are required when any history item is selected.",
            );
        }

        result
    }
}
