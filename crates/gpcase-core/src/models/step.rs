//! Step identity and the slice registry.
//!
//! Each wizard step has a stable number (1–15), a kind, and a fixed set of
//! form-store slices it owns. The registry here replaces ad hoc step→key
//! switches: everything that needs to route a slice to its owning step, or a
//! step to its slices, goes through these tables.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// One of the fifteen wizard steps, in display order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Step {
    Basics,
    Presenting,
    PriorDx,
    Suicide,
    Violence,
    PsychosisMania,
    FamilyTrauma,
    HomeSafety,
    Cognition,
    Medications,
    Substances,
    Screeners,
    Concerns,
    SafetyRisks,
    Review,
}

/// What a step's commit persists: a scalar field slice, a catalog-backed
/// collection, or nothing (the review step).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum StepKind {
    Scalar,
    Collection,
    Review,
}

/// Sidebar status for a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum StepStatus {
    Locked,
    Active,
    Completed,
    Warning,
    InProgress,
    FinalCompleted,
}

/// A scalar (key→value) slice of the form store.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ScalarSlice {
    Basics,
    Presenting,
    PriorDx,
    MedicalFlags,
    Suicide,
    Violence,
    PsychosisMania,
    FamilyTrauma,
    HomeSafety,
    Cognition,
}

/// A collection-valued slice of the form store.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum CollectionKind {
    Medications,
    Substances,
    Screeners,
    Concerns,
    SafetyRisks,
    Supports,
}

impl Step {
    pub const ALL: [Step; 15] = [
        Step::Basics,
        Step::Presenting,
        Step::PriorDx,
        Step::Suicide,
        Step::Violence,
        Step::PsychosisMania,
        Step::FamilyTrauma,
        Step::HomeSafety,
        Step::Cognition,
        Step::Medications,
        Step::Substances,
        Step::Screeners,
        Step::Concerns,
        Step::SafetyRisks,
        Step::Review,
    ];

    /// 1-based step number, matching the sidebar.
    pub fn number(self) -> u8 {
        Step::ALL.iter().position(|s| *s == self).unwrap_or(0) as u8 + 1
    }

    pub fn from_number(n: u8) -> Option<Step> {
        match n {
            1..=15 => Some(Step::ALL[n as usize - 1]),
            _ => None,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Step::Basics => "Basics",
            Step::Presenting => "Presenting Concerns",
            Step::PriorDx => "Prior Diagnoses & Medical Flags",
            Step::Suicide => "Suicide Risk",
            Step::Violence => "Violence Risk",
            Step::PsychosisMania => "Psychosis & Mania",
            Step::FamilyTrauma => "Family History & Trauma",
            Step::HomeSafety => "Home Safety & Supports",
            Step::Cognition => "Cognition",
            Step::Medications => "Medications",
            Step::Substances => "Substance Use",
            Step::Screeners => "Screeners",
            Step::Concerns => "Clinical Concerns",
            Step::SafetyRisks => "Safety Risks",
            Step::Review => "Review",
        }
    }

    pub fn kind(self) -> StepKind {
        match self {
            Step::Basics
            | Step::Presenting
            | Step::PriorDx
            | Step::Suicide
            | Step::Violence
            | Step::PsychosisMania
            | Step::FamilyTrauma
            | Step::HomeSafety
            | Step::Cognition => StepKind::Scalar,
            Step::Medications
            | Step::Substances
            | Step::Screeners
            | Step::Concerns
            | Step::SafetyRisks => StepKind::Collection,
            Step::Review => StepKind::Review,
        }
    }

    /// The scalar slices committed and persisted with this step.
    pub fn scalar_slices(self) -> &'static [ScalarSlice] {
        match self {
            Step::Basics => &[ScalarSlice::Basics],
            Step::Presenting => &[ScalarSlice::Presenting],
            // Medical flags are edited inside the prior-diagnoses step.
            Step::PriorDx => &[ScalarSlice::PriorDx, ScalarSlice::MedicalFlags],
            Step::Suicide => &[ScalarSlice::Suicide],
            Step::Violence => &[ScalarSlice::Violence],
            Step::PsychosisMania => &[ScalarSlice::PsychosisMania],
            Step::FamilyTrauma => &[ScalarSlice::FamilyTrauma],
            Step::HomeSafety => &[ScalarSlice::HomeSafety],
            Step::Cognition => &[ScalarSlice::Cognition],
            _ => &[],
        }
    }

    /// The collections committed and persisted with this step. Patient
    /// supports ride on the home-safety step; the five catalog steps own
    /// their collection outright.
    pub fn collections(self) -> &'static [CollectionKind] {
        match self {
            Step::HomeSafety => &[CollectionKind::Supports],
            Step::Medications => &[CollectionKind::Medications],
            Step::Substances => &[CollectionKind::Substances],
            Step::Screeners => &[CollectionKind::Screeners],
            Step::Concerns => &[CollectionKind::Concerns],
            Step::SafetyRisks => &[CollectionKind::SafetyRisks],
            _ => &[],
        }
    }

    pub fn next(self) -> Option<Step> {
        Step::from_number(self.number() + 1)
    }

    pub fn previous(self) -> Option<Step> {
        self.number().checked_sub(1).and_then(Step::from_number)
    }
}

impl TryFrom<u8> for Step {
    type Error = CoreError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        Step::from_number(n).ok_or(CoreError::UnknownStep(n))
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.number(), self.title())
    }
}

impl ScalarSlice {
    pub const ALL: [ScalarSlice; 10] = [
        ScalarSlice::Basics,
        ScalarSlice::Presenting,
        ScalarSlice::PriorDx,
        ScalarSlice::MedicalFlags,
        ScalarSlice::Suicide,
        ScalarSlice::Violence,
        ScalarSlice::PsychosisMania,
        ScalarSlice::FamilyTrauma,
        ScalarSlice::HomeSafety,
        ScalarSlice::Cognition,
    ];

    /// The serialized key of this slice in the form store.
    pub fn key(self) -> &'static str {
        match self {
            ScalarSlice::Basics => "basics",
            ScalarSlice::Presenting => "presenting",
            ScalarSlice::PriorDx => "prior_dx",
            ScalarSlice::MedicalFlags => "medical_flags",
            ScalarSlice::Suicide => "suicide",
            ScalarSlice::Violence => "violence",
            ScalarSlice::PsychosisMania => "psychosis_mania",
            ScalarSlice::FamilyTrauma => "family_trauma",
            ScalarSlice::HomeSafety => "home_safety",
            ScalarSlice::Cognition => "cognition",
        }
    }

    /// The step that edits this slice.
    pub fn owning_step(self) -> Step {
        match self {
            ScalarSlice::Basics => Step::Basics,
            ScalarSlice::Presenting => Step::Presenting,
            ScalarSlice::PriorDx | ScalarSlice::MedicalFlags => Step::PriorDx,
            ScalarSlice::Suicide => Step::Suicide,
            ScalarSlice::Violence => Step::Violence,
            ScalarSlice::PsychosisMania => Step::PsychosisMania,
            ScalarSlice::FamilyTrauma => Step::FamilyTrauma,
            ScalarSlice::HomeSafety => Step::HomeSafety,
            ScalarSlice::Cognition => Step::Cognition,
        }
    }
}

impl CollectionKind {
    pub const ALL: [CollectionKind; 6] = [
        CollectionKind::Medications,
        CollectionKind::Substances,
        CollectionKind::Screeners,
        CollectionKind::Concerns,
        CollectionKind::SafetyRisks,
        CollectionKind::Supports,
    ];

    pub fn key(self) -> &'static str {
        match self {
            CollectionKind::Medications => "medications",
            CollectionKind::Substances => "substances",
            CollectionKind::Screeners => "screeners",
            CollectionKind::Concerns => "concerns",
            CollectionKind::SafetyRisks => "safety_risks",
            CollectionKind::Supports => "supports",
        }
    }

    pub fn owning_step(self) -> Step {
        match self {
            CollectionKind::Medications => Step::Medications,
            CollectionKind::Substances => Step::Substances,
            CollectionKind::Screeners => Step::Screeners,
            CollectionKind::Concerns => Step::Concerns,
            CollectionKind::SafetyRisks => Step::SafetyRisks,
            CollectionKind::Supports => Step::HomeSafety,
        }
    }
}

impl std::fmt::Display for CollectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}
