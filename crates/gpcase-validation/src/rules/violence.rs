use gpcase_core::fields;
use gpcase_core::models::{FormState, ScalarSlice, Step};

use crate::result::{ValidationConfig, ValidationResult};
use crate::StepRule;

/// Step 5: ideation is soft-required; ideation other than "None" makes the
/// violence details hard-required.
///
/// Unlike the suicide rule, an absent ideation value in non-strict mode
/// returns a fully valid result — no warning is recorded. That asymmetry is
/// carried over from the original behavior deliberately.
pub struct Violence;

impl StepRule for Violence {
    fn step(&self) -> Step {
        Step::Violence
    }

    fn validate(&self, form: &FormState, config: &ValidationConfig) -> ValidationResult {
        let mut result = ValidationResult::default();
        let slice = ScalarSlice::Violence;

        let Some(ideation) = form.text(slice, fields::HOMICIDAL_IDEATION) else {
            if config.strict {
                result.hard(
                    fields::HOMICIDAL_IDEATION,
                    "Homicidal ideation is required.",
                );
            }
            return result;
        };

        if ideation != fields::IDEATION_NONE
            && form.text(slice, fields::VIOLENCE_DETAILS).is_none()
        {
            result.hard(
                fields::VIOLENCE_DETAILS,
                "Violence details are required when ideation is present.",
            );
        }

        result
    }
}
