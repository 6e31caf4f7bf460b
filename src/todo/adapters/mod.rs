//! Adapter implementations for to-do list ports.

pub mod file;
pub mod memory;

pub use file::{FileStorageConfig, FileTaskStorage};
pub use memory::InMemoryTaskStorage;
