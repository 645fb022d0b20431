//! gpcase-wizard
//!
//! The intake wizard engine: a typed-action form store, the step-status
//! state machine, the generic collection wizard sub-machine, the backend
//! persistence seam, local draft storage, and the orchestrator that ties
//! them together. Rendering, navigation chrome, and the persistence engine
//! itself live with the host; this crate owns every state transition
//! between them.

pub mod backend;
pub mod catalogs;
pub mod collection;
pub mod draft;
pub mod error;
pub mod notice;
pub mod orchestrator;
pub mod payload;
pub mod status;
pub mod store;

pub use error::WizardError;
pub use orchestrator::Orchestrator;
