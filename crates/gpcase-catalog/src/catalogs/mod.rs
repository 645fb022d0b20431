//! Built-in reference data.
//!
//! These are the fallback lists used when no external provider is configured
//! or the provider fails. Ids are stable; entries created against them keep
//! the catalog id as their identity until the backend assigns a record id.

pub mod medications;
pub mod question_types;
pub mod safety_risks;
pub mod screeners;
pub mod substances;
pub mod supports;
