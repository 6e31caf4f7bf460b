//! Tasklist: a small to-do list manager core.
//!
//! This crate holds the task-management logic behind a to-do list frontend:
//! validation of new tasks, an owned task store, filtering and display
//! ordering, statistics, and a renderer-agnostic view model.
//!
//! # Architecture
//!
//! Tasklist follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (memory, files)
//!
//! # Modules
//!
//! - [`todo`]: Task records, validation, views and the command service

pub mod todo;
