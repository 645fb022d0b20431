//! gpcase-validation
//!
//! The per-step validation rule set. Each rule-bearing step has one module
//! under `rules/` implementing [`StepRule`]; steps without a rule validate
//! clean. Rules are pure functions of the form state — no I/O, no shared
//! state — which is what lets the orchestrator re-run them on every edit.

pub mod entries;
pub mod result;
pub mod rules;

use std::collections::BTreeMap;

use gpcase_core::models::{FormState, Step};

use result::{ValidationConfig, ValidationResult};

/// Trait implemented by each step's validation rule.
pub trait StepRule: Send + Sync {
    /// The step this rule covers.
    fn step(&self) -> Step;

    /// Validate the step's slice(s) of the form.
    fn validate(&self, form: &FormState, config: &ValidationConfig) -> ValidationResult;
}

/// All registered rules. Steps not listed here fall back to the always-valid
/// default in [`validate_step`].
pub fn all_rules() -> Vec<Box<dyn StepRule>> {
    vec![
        Box::new(rules::basics::Basics),
        Box::new(rules::presenting::Presenting),
        Box::new(rules::suicide::Suicide),
        Box::new(rules::violence::Violence),
        Box::new(rules::family_trauma::FamilyTrauma),
        Box::new(rules::home_safety::HomeSafety),
        Box::new(rules::cognition::Cognition),
        Box::new(rules::concerns::Concerns),
    ]
}

/// Look up the rule for a step.
pub fn rule_for(step: Step) -> Option<Box<dyn StepRule>> {
    all_rules().into_iter().find(|r| r.step() == step)
}

/// Validate one step. Unmapped steps return the always-valid default.
pub fn validate_step(step: Step, form: &FormState, config: &ValidationConfig) -> ValidationResult {
    match rule_for(step) {
        Some(rule) => rule.validate(form, config),
        None => ValidationResult::default(),
    }
}

/// Validate every step under the strict final gate.
pub fn validate_all(form: &FormState) -> BTreeMap<Step, ValidationResult> {
    let config = ValidationConfig::strict();
    Step::ALL
        .iter()
        .map(|step| (*step, validate_step(*step, form, &config)))
        .collect()
}
