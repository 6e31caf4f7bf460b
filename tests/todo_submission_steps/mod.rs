//! Step definitions for task submission scenarios.

pub mod when;
pub mod world;
