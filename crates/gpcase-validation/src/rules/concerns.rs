use gpcase_core::models::{CollectionKind, FormState, Step};

use crate::result::{ValidationConfig, ValidationResult};
use crate::StepRule;

/// Step 13: never blocks. An empty concerns list is flagged as a warning
/// only, in both validation modes.
pub struct Concerns;

impl StepRule for Concerns {
    fn step(&self) -> Step {
        Step::Concerns
    }

    fn validate(&self, form: &FormState, _config: &ValidationConfig) -> ValidationResult {
        let mut result = ValidationResult::default();

        if form.collection(CollectionKind::Concerns).is_empty() {
            result.soft(
                "concerns",
                "No clinical concerns recorded. Add at least one if applicable.",
            );
        }

        result
    }
}
