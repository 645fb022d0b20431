use gpcase_core::fields;
use gpcase_core::models::{FormState, ScalarSlice, Step};

use crate::result::{ValidationConfig, ValidationResult};
use crate::StepRule;

/// Step 4: ideation is soft-required. Any ideation other than "None" makes
/// protective factors, access-to-means, and a past-attempts count hard
/// requirements.
pub struct Suicide;

impl StepRule for Suicide {
    fn step(&self) -> Step {
        Step::Suicide
    }

    fn validate(&self, form: &FormState, config: &ValidationConfig) -> ValidationResult {
        let mut result = ValidationResult::default();
        let slice = ScalarSlice::Suicide;

        match form.text(slice, fields::SUICIDAL_IDEATION) {
            None => {
                result.soft_required(
                    config,
                    fields::SUICIDAL_IDEATION,
                    "Suicidal ideation is required.",
                );
            }
            Some(ideation) if ideation != fields::IDEATION_NONE => {
                if form.text(slice, fields::PROTECTIVE_FACTORS).is_none() {
                    result.hard(
                        fields::PROTECTIVE_FACTORS,
                        "Protective factors are required when ideation is present.",
                    );
                }
                if form.multi(slice, fields::ACCESS_TO_MEANS).is_empty() {
                    result.hard(
                        fields::ACCESS_TO_MEANS,
                        "Select at least one access-to-means option.",
                    );
                }
                match form.number(slice, fields::PAST_SUICIDE_ATTEMPTS) {
                    Some(n) if n >= 0.0 => {}
                    _ => result.hard(
                        fields::PAST_SUICIDE_ATTEMPTS,
                        "A past-attempts count of 0 or more is required.",
                    ),
                }
            }
            Some(_) => {}
        }

        result
    }
}
