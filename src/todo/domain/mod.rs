//! Domain model for the to-do list.
//!
//! Task records, their identifiers and priorities, and the store that owns
//! them. Nothing in here performs I/O; persistence and presentation live
//! behind the ports.

mod error;
mod export;
mod ids;
mod priority;
mod store;
mod submission;
mod task;

pub use error::{ExportError, ParsePriorityError, StoreError};
pub use export::{EXPORT_FILE_PREFIX, ExportDocument, export_file_name};
pub use ids::TaskId;
pub use priority::Priority;
pub use store::TaskStore;
pub use submission::ValidatedSubmission;
pub use task::TaskRecord;
