//! Foundation types for the MIB directory.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`Position`] - Line/column locations for parse diagnostics
//! - OID helpers ([`is_numeric_oid`], [`parse_arcs`], [`split_instance`])
//! - Domain constants (file extensions, core module order, tree root)
//!
//! This module has NO dependencies on other crate modules.

pub mod constants;
pub mod oid;
mod position;

pub use oid::{format_arcs, is_numeric_oid, normalize_oid, parse_arcs, split_instance};
pub use position::Position;
