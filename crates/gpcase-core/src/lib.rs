//! gpcase-core
//!
//! Pure domain types for the GP Case Creator intake engine: the central form
//! state and its slices, collection entry records, step identity and status,
//! and the multi-value wire format. No I/O — this is the shared vocabulary of
//! the system.

pub mod error;
pub mod fields;
pub mod models;
pub mod multivalue;
