use gpcase_core::fields;
use gpcase_core::models::{FormState, ScalarSlice, Step};

use crate::result::{ValidationConfig, ValidationResult};
use crate::StepRule;

/// Step 1: Subject and Description are the only hard-required intake fields.
/// Priority is collected but deliberately never required.
pub struct Basics;

impl StepRule for Basics {
    fn step(&self) -> Step {
        Step::Basics
    }

    fn validate(&self, form: &FormState, _config: &ValidationConfig) -> ValidationResult {
        let mut result = ValidationResult::default();

        if form.text(ScalarSlice::Basics, fields::SUBJECT).is_none() {
            result.hard(fields::SUBJECT, "Subject is required.");
        }
        if form.text(ScalarSlice::Basics, fields::DESCRIPTION).is_none() {
            result.hard(fields::DESCRIPTION, "Description is required.");
        }

        result
    }
}
