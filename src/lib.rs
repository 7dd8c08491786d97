//! # mib-directory
//!
//! Directory service for SNMP MIB definitions: dependency-ordered loading,
//! a merged OID tree, and translation between numeric OIDs and symbols.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! directory → MibDirectory: fix-point loader, registry, tree, lookups
//!   ↓
//! project   → File inventory: listing, module-name scan, path probing
//!   ↓
//! store     → MibEngine trait + ModuleStore (symbols, OIDs, providers)
//!   ↓
//! parser    → Logos lexer, recursive-descent MIB module parser
//!   ↓
//! base      → Primitives (OID helpers, Position, constants)
//! ```

// ============================================================================
// MODULES (dependency order: base → parser → store → project → directory)
// ============================================================================

/// Foundation types: OID helpers, Position, constants
pub mod base;

/// Parser: Logos lexer and MIB module parser
pub mod parser;

/// Symbol store: the engine seam and the bundled engine
pub mod store;

/// File inventory for managed and system MIB directories
pub mod project;

/// The directory service
pub mod directory;

/// Configuration loaded from TOML
pub mod config;

// Re-export the service surface
pub use config::{ConfigError, MibConfig};
pub use directory::{
    LoadResult, LoadedModule, LookupResult, MibDirectory, OidTreeNode, SingleFileOutcome,
    enrich_value,
};
pub use store::{MibEngine, ModuleStore, StoreError, TranslateMode};

// Re-export foundation types
pub use base::{Position, is_numeric_oid};
