//! Unit tests for the to-do module.
//!
//! Tests are organised by component, covering happy paths, error cases and
//! the boundary values of each rule.

mod support;
