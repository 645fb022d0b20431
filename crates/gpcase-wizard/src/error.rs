use thiserror::Error;

use crate::collection::Phase;

#[derive(Debug, Error)]
pub enum WizardError {
    #[error("backend call failed: {0}")]
    Backend(String),

    #[error("step {0} is locked")]
    StepLocked(u8),

    #[error("no items selected")]
    EmptySelection,

    #[error("catalog item already in the case: {0}")]
    AlreadyInCase(String),

    #[error("unknown catalog item: {0}")]
    UnknownCatalogItem(String),

    #[error("draft entry '{entry_id}' is invalid at {path}")]
    DraftInvalid { entry_id: String, path: String },

    #[error("operation not available in the {0:?} phase")]
    Phase(Phase),

    #[error("no collection wizard is open")]
    NoWizard,

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
