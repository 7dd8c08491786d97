//! Shared helpers for integration tests.

pub mod directory_helpers;
pub mod fixtures;
