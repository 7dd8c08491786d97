//! Per-module symbol tables and provider lists.

use crate::parser::DefinitionKind;
use indexmap::IndexMap;
use serde::Serialize;
use std::collections::BTreeMap;

/// Enumeration labels keyed by value.
pub type EnumMap = BTreeMap<i64, String>;

/// Resolved OBJECT-TYPE providers of one module, in declaration order.
pub type ProviderList = Vec<Provider>;

const INTEGER: &str = "INTEGER";
const OCTET_STRING: &str = "OCTET STRING";

/// A SYNTAX clause with type references followed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Syntax {
    pub type_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub named_numbers: Option<EnumMap>,
    /// Syntaxes of the referenced type chain, nearest first.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub nested: Vec<Syntax>,
}

impl Syntax {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            named_numbers: None,
            nested: Vec::new(),
        }
    }

    pub fn with_named_numbers(mut self, values: impl IntoIterator<Item = (i64, String)>) -> Self {
        self.named_numbers = Some(values.into_iter().collect());
        self
    }

    /// The enumeration map describing values of this syntax.
    ///
    /// An `INTEGER { .. }` list wins. `OCTET STRING` never has one.
    /// Otherwise the first mapping found on this syntax or along its
    /// referenced types is used, which covers textual conventions.
    pub fn enumeration(&self) -> Option<&EnumMap> {
        if self.type_name == INTEGER {
            if let Some(values) = &self.named_numbers {
                return Some(values);
            }
        }
        if self.type_name == OCTET_STRING {
            return None;
        }
        self.named_numbers
            .as_ref()
            .or_else(|| self.nested.iter().find_map(|s| s.named_numbers.as_ref()))
    }
}

/// One named definition inside a module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolEntry {
    pub name: String,
    pub kind: DefinitionKind,
    /// Dotted numeric OID; `None` for type definitions.
    pub oid: Option<String>,
    pub description: Option<String>,
    pub syntax: Option<Syntax>,
    pub status: Option<String>,
    pub access: Option<String>,
}

impl SymbolEntry {
    pub fn is_object_type(&self) -> bool {
        self.kind == DefinitionKind::ObjectType
    }
}

/// Symbols of one registered module.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolTable {
    entries: IndexMap<String, SymbolEntry>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, entry: SymbolEntry) {
        self.entries.insert(entry.name.clone(), entry);
    }

    pub fn get(&self, name: &str) -> Option<&SymbolEntry> {
        self.entries.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SymbolEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Role of an OBJECT-TYPE in the management tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    Scalar,
    Table,
    Row,
    Column,
}

/// A resolved object exposed for polling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Provider {
    pub name: String,
    pub oid: String,
    #[serde(rename = "type")]
    pub kind: ProviderKind,
}
