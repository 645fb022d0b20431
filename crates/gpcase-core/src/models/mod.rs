pub mod entry;
pub mod form;
pub mod step;

pub use entry::Entry;
pub use form::{FieldMap, FormState, SlicePatch};
pub use step::{CollectionKind, ScalarSlice, Step, StepKind, StepStatus};
