use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One validation finding, tied to the field path that triggered it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Issue {
    pub path: String,
    pub message: String,
}

impl Issue {
    pub fn new(path: &str, message: &str) -> Self {
        Self {
            path: path.to_string(),
            message: message.to_string(),
        }
    }
}

/// The outcome of validating one step.
///
/// Hard errors block step advancement; soft warnings only color the step's
/// sidebar status. Validity is derived, never stored: a result is valid
/// exactly when it has no hard errors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ValidationResult {
    pub hard_errors: Vec<Issue>,
    pub soft_warnings: Vec<Issue>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.hard_errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.soft_warnings.is_empty()
    }

    pub fn hard(&mut self, path: &str, message: &str) {
        self.hard_errors.push(Issue::new(path, message));
    }

    pub fn soft(&mut self, path: &str, message: &str) {
        self.soft_warnings.push(Issue::new(path, message));
    }

    /// Record a missing soft-required field: a warning in the live per-step
    /// pass, a hard error under the strict final gate.
    pub fn soft_required(&mut self, config: &ValidationConfig, path: &str, message: &str) {
        if config.strict {
            self.hard(path, message);
        } else {
            self.soft(path, message);
        }
    }

    pub fn first_hard(&self) -> Option<&Issue> {
        self.hard_errors.first()
    }
}

/// Validation mode. Non-strict is the forgiving live pass; strict is used by
/// the full-form gate on finish and review.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationConfig {
    pub strict: bool,
}

impl ValidationConfig {
    pub fn strict() -> Self {
        Self { strict: true }
    }
}
