use gpcase_core::fields;
use gpcase_core::models::{FormState, ScalarSlice, Step};

use crate::result::{ValidationConfig, ValidationResult};
use crate::StepRule;

/// Step 2: at least one primary clinical question type is soft-required.
pub struct Presenting;

impl StepRule for Presenting {
    fn step(&self) -> Step {
        Step::Presenting
    }

    fn validate(&self, form: &FormState, config: &ValidationConfig) -> ValidationResult {
        let mut result = ValidationResult::default();

        let question_types = form.multi(
            ScalarSlice::Presenting,
            fields::PRIMARY_CLINICAL_QUESTION_TYPES,
        );
        if question_types.is_empty() {
            result.soft_required(
                config,
                fields::PRIMARY_CLINICAL_QUESTION_TYPES,
                "Select at least one primary clinical question type.",
            );
        }

        result
    }
}
