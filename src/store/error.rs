//! Error types for the symbol store.

use crate::parser::ParseError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while registering or querying modules.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The definition file could not be read.
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The module text is malformed.
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// An `IMPORTS ... FROM` names a module that is not registered yet.
    #[error("Module '{module}' imports from unknown module '{import}'")]
    UnknownImport { module: String, import: String },

    /// An OID value names a parent that cannot be resolved.
    #[error("Module '{module}': cannot resolve OID of '{symbol}' (unknown parent '{parent}')")]
    UnresolvedOid {
        module: String,
        symbol: String,
        parent: String,
    },

    /// The module is not registered.
    #[error("Unknown module '{0}'")]
    UnknownModule(String),

    /// Any other engine failure.
    #[error("{0}")]
    Other(String),
}

impl StoreError {
    /// Create a generic engine error.
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other(message.into())
    }
}
