//! To-do list management.
//!
//! Users create, filter, sort, complete and delete short-lived task records.
//! The module follows hexagonal architecture:
//!
//! - Task records and the store in [`domain`]
//! - Submission rules in [`validation`]
//! - Filtering, ordering, statistics and the view model in [`view`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - The command-driven service in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
pub mod validation;
pub mod view;

#[cfg(test)]
mod tests;
