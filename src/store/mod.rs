//! Symbol store: the engine modules are registered into.
//!
//! The directory service only talks to a [`MibEngine`]. [`ModuleStore`] is
//! the engine shipped with the crate; it parses MIB text with
//! [`crate::parser`] and keeps per-module symbol tables plus a translation
//! index between numeric OIDs and `MODULE::symbol` names.
//!
//! Engines support adding modules but not removing them. Forgetting a module
//! means building a fresh engine and registering everything else again.

mod base_modules;
mod error;
mod module_store;
mod symbols;

pub use base_modules::BASE_MODULES;
pub use error::StoreError;
pub use module_store::ModuleStore;
pub use symbols::{EnumMap, Provider, ProviderKind, ProviderList, SymbolEntry, SymbolTable, Syntax};

use std::path::Path;

/// Direction of a [`MibEngine::translate`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TranslateMode {
    /// Numeric OID to `MODULE::symbol[.suffix]`.
    Module,
    /// Symbolic name to dotted numeric OID.
    Numeric,
}

/// The parsing and symbol engine behind a directory.
pub trait MibEngine: Send + Sync {
    /// Parse and register the module in `path`, returning its name.
    ///
    /// Fails when the module's prerequisites are not registered yet.
    fn parse_file(&mut self, path: &Path) -> Result<String, StoreError>;

    /// Translate between numeric and symbolic forms. `None` when unknown.
    fn translate(&self, identifier: &str, mode: TranslateMode) -> Option<String>;

    /// Symbol table of a registered module.
    fn module_symbols(&self, module: &str) -> Option<&SymbolTable>;

    /// OBJECT-TYPE providers of a registered module.
    fn providers(&self, module: &str) -> Result<ProviderList, StoreError>;

    /// Make a registered module's OIDs visible to [`translate`](Self::translate).
    fn register_translations(&mut self, module: &str) -> Result<(), StoreError>;

    /// Register modules the engine bundles, returning their names.
    fn preload_builtins(&mut self) -> Vec<String> {
        Vec::new()
    }
}
