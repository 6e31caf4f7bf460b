//! JSON file storage scoped to a single directory capability.
//!
//! The slot is one JSON file. Saves write a sibling temporary file and
//! rename it over the slot so a crash never leaves a half-written list.

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8::Dir};
use std::io;

use crate::todo::{
    domain::ExportDocument,
    ports::{StoredTasks, TaskStorage, TaskStorageResult},
};

/// Configuration for [`FileTaskStorage`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStorageConfig {
    /// File name of the slot, relative to the storage directory.
    pub slot_name: Utf8PathBuf,
}

impl Default for FileStorageConfig {
    fn default() -> Self {
        Self {
            slot_name: Utf8PathBuf::from("todoApp.json"),
        }
    }
}

impl FileStorageConfig {
    fn temp_name(&self) -> Utf8PathBuf {
        let mut name = self.slot_name.clone().into_string();
        name.push_str(".tmp");
        Utf8PathBuf::from(name)
    }
}

/// Task storage backed by a JSON file inside a directory capability.
#[derive(Debug)]
pub struct FileTaskStorage {
    dir: Dir,
    config: FileStorageConfig,
}

impl FileTaskStorage {
    /// Creates storage over an already-opened directory.
    #[must_use]
    pub const fn new(dir: Dir, config: FileStorageConfig) -> Self {
        Self { dir, config }
    }

    /// Opens (creating if needed) the directory at `path` using ambient
    /// authority.
    ///
    /// # Errors
    ///
    /// Returns an I/O error when the directory cannot be created or opened.
    pub fn open_ambient(path: &Utf8Path, config: FileStorageConfig) -> io::Result<Self> {
        Dir::create_ambient_dir_all(path, ambient_authority())?;
        let dir = Dir::open_ambient_dir(path, ambient_authority())?;
        Ok(Self::new(dir, config))
    }

    /// Writes an export document into the storage directory under its own
    /// file name, replacing any earlier export from the same day.
    ///
    /// # Errors
    ///
    /// Returns a storage error when the file cannot be written.
    pub fn write_export(&self, document: &ExportDocument) -> TaskStorageResult<()> {
        self.dir.write(document.file_name(), document.contents())?;
        tracing::info!(file = document.file_name(), "wrote task export");
        Ok(())
    }
}

impl TaskStorage for FileTaskStorage {
    fn load(&self) -> TaskStorageResult<Option<StoredTasks>> {
        let text = match self.dir.read_to_string(&self.config.slot_name) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        let snapshot = serde_json::from_str(&text)?;
        Ok(Some(snapshot))
    }

    fn save(&self, snapshot: &StoredTasks) -> TaskStorageResult<()> {
        let encoded = serde_json::to_vec(snapshot)?;
        let temp_name = self.config.temp_name();
        self.dir.write(&temp_name, encoded)?;
        self.dir
            .rename(&temp_name, &self.dir, &self.config.slot_name)?;
        Ok(())
    }
}
