use gpcase_core::fields;
use gpcase_core::models::{FormState, ScalarSlice, Step};

use crate::result::{ValidationConfig, ValidationResult};
use crate::StepRule;

/// Step 8: home-safety status is soft-required; any status other than "Safe"
/// makes at least one lethal-means-access selection hard-required.
pub struct HomeSafety;

impl StepRule for HomeSafety {
    fn step(&self) -> Step {
        Step::HomeSafety
    }

    fn validate(&self, form: &FormState, config: &ValidationConfig) -> ValidationResult {
        let mut result = ValidationResult::default();
        let slice = ScalarSlice::HomeSafety;

        match form.text(slice, fields::HOME_SAFETY_STATUS) {
            None => {
                result.soft_required(
                    config,
                    fields::HOME_SAFETY_STATUS,
                    "Home safety status is required.",
                );
            }
            Some(status) if status != fields::HOME_SAFETY_SAFE => {
                if form.multi(slice, fields::LETHAL_MEANS_ACCESS).is_empty() {
                    result.hard(
                        fields::LETHAL_MEANS_ACCESS,
                        "Select at least one lethal-means-access option.",
                    );
                }
            }
            Some(_) => {}
        }

        result
    }
}
