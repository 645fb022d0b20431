use gpcase_core::fields;
use gpcase_core::models::{FormState, ScalarSlice, Step};

use crate::result::{ValidationConfig, ValidationResult};
use crate::StepRule;

/// Step 9: orientation is soft-required; anything short of fully oriented
/// makes the cognition notes hard-required.
pub struct Cognition;

impl StepRule for Cognition {
    fn step(&self) -> Step {
        Step::Cognition
    }

    fn validate(&self, form: &FormState, config: &ValidationConfig) -> ValidationResult {
        let mut result = ValidationResult::default();
        let slice = ScalarSlice::Cognition;

        match form.text(slice, fields::ORIENTATION) {
            None => {
                result.soft_required(config, fields::ORIENTATION, "Orientation is required.");
            }
            Some(orientation) if orientation != fields::ORIENTATION_ALERT => {
                if form.text(slice, fields::COGNITION_NOTES).is_none() {
                    result.hard(
                        fields::COGNITION_NOTES,
                        "Cognition notes are required when the patient is not fully oriented.",
                    );
                }
            }
            Some(_) => {}
        }

        result
    }
}
