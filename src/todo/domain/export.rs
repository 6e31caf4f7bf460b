//! JSON export of the full task list.

use super::{ExportError, TaskRecord};
use chrono::NaiveDate;

/// File name prefix for exported task lists.
pub const EXPORT_FILE_PREFIX: &str = "todos";

/// A serialised snapshot of every task, ready to be offered as a download
/// or written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportDocument {
    file_name: String,
    contents: String,
}

impl ExportDocument {
    /// Serialises `records` as a pretty-printed JSON array.
    ///
    /// The file name embeds `exported_on`, for example
    /// `todos_2024-05-01.json`.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError`] when serialisation fails.
    pub fn from_records(
        records: &[TaskRecord],
        exported_on: NaiveDate,
    ) -> Result<Self, ExportError> {
        let contents = serde_json::to_string_pretty(records)?;
        Ok(Self {
            file_name: export_file_name(exported_on),
            contents,
        })
    }

    /// Returns the suggested file name.
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Returns the JSON document.
    #[must_use]
    pub fn contents(&self) -> &str {
        &self.contents
    }
}

/// Builds the export file name for the given day.
#[must_use]
pub fn export_file_name(exported_on: NaiveDate) -> String {
    format!("{EXPORT_FILE_PREFIX}_{}.json", exported_on.format("%Y-%m-%d"))
}
