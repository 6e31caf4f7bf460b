//! Port contracts for the to-do list.
//!
//! Ports define infrastructure-agnostic interfaces used by the service.

pub mod storage;

pub use storage::{StoredTasks, TaskStorage, TaskStorageError, TaskStorageResult};
