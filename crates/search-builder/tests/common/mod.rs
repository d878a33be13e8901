//! Test infrastructure for the search builders.
//!
//! Shared fixtures that walk a multi-search down to the handle under test, and
//! assertion helpers for rendered output and builder errors.

#![allow(dead_code)]

pub mod assertions;
pub mod fixtures;
pub mod harness;

pub use assertions::*;
pub use fixtures::*;
