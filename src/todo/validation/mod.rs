//! Submission validation for new tasks.
//!
//! Rules are pure functions in [`rules`]; [`SubmissionValidator`] runs them
//! together and reports failures per form field.

mod config;
mod error;
pub mod rules;
mod service;

pub use config::ValidationConfig;
pub use error::{DateError, NameError, SubmissionError, SubmissionField};
pub use rules::{validate_date, validate_name};
pub use service::SubmissionValidator;
