//! MIB module parser
//!
//! ```text
//! Source Text
//!     ↓
//! Lexer (logos) → Tokens (keywords are plain identifiers)
//!     ↓
//! Parser → ParsedModule (imports, definitions, OID values, syntax)
//!     ↓
//! ModuleStore → registered symbols and translations
//! ```
//!
//! [`scan_module_name`] is the cheap path used by file inventory: it only
//! looks for the module header and never parses the body.

#[allow(clippy::module_inception)]
mod parser;

pub mod ast;
mod error;
pub mod keywords;
mod lexer;

pub use ast::*;
pub use error::ParseError;
pub use lexer::{Lexer, Token, TokenKind, tokenize};
pub use parser::{parse_module, scan_module_name};
