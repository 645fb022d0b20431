//! Per-entry required-field checks for collection wizard drafts.
//!
//! These run at the Detail→Review gate of the collection wizard: every draft
//! must come back clean before the wizard advances. Kinds without checks
//! (concerns, safety risks, supports) always validate clean.

use gpcase_core::fields;
use gpcase_core::models::{CollectionKind, Entry};

use crate::result::Issue;

/// Required-field issues for one draft entry of the given kind.
pub fn entry_issues(kind: CollectionKind, entry: &Entry) -> Vec<Issue> {
    match kind {
        CollectionKind::Medications => medication_issues(entry),
        CollectionKind::Substances => substance_issues(entry),
        CollectionKind::Screeners => screener_issues(entry),
        CollectionKind::Concerns | CollectionKind::SafetyRisks | CollectionKind::Supports => {
            Vec::new()
        }
    }
}

/// A medication needs a concrete action; a dose amount without a unit is
/// incomplete.
fn medication_issues(entry: &Entry) -> Vec<Issue> {
    let mut issues = Vec::new();

    if entry.text(fields::MEDICATION_ACTION).is_none() {
        issues.push(Issue::new(
            fields::MEDICATION_ACTION,
            "Select an action for this medication.",
        ));
    }
    if entry.number(fields::DOSE_AMOUNT).is_some() && entry.text(fields::DOSE_UNIT).is_none() {
        issues.push(Issue::new(
            fields::DOSE_UNIT,
            "A unit is required when a dose amount is given.",
        ));
    }

    issues
}

fn substance_issues(entry: &Entry) -> Vec<Issue> {
    let mut issues = Vec::new();

    if entry.text(fields::USE_FREQUENCY).is_none() {
        issues.push(Issue::new(
            fields::USE_FREQUENCY,
            "Select a use frequency for this substance.",
        ));
    }

    issues
}

/// A screener entry records an administered instrument, so its score is
/// required and must be non-negative.
fn screener_issues(entry: &Entry) -> Vec<Issue> {
    let mut issues = Vec::new();

    match entry.number(fields::SCREENER_SCORE) {
        Some(score) if score >= 0.0 => {}
        _ => issues.push(Issue::new(
            fields::SCREENER_SCORE,
            "A score of 0 or more is required.",
        )),
    }

    issues
}
