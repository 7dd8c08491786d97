//! Values returned by the directory service.
//!
//! All of these serialize to the JSON shapes HTTP callers expect: absent
//! optional fields are omitted rather than written as `null`.

use crate::store::EnumMap;
use serde::Serialize;

/// Outcome of a load or rebuild.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoadResult {
    /// Modules that became loaded during this call, in load order.
    pub loaded: Vec<String>,
    /// Per-file failure messages.
    pub errors: Vec<String>,
}

impl LoadResult {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// A registered module and the tracked file backing it, if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadedModule {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

/// Symbolic description of a numeric OID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LookupResult {
    /// Base symbol name, without any instance suffix.
    pub name: String,
    pub module: String,
    /// The OID as it was asked for.
    pub oid: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enums: Option<EnumMap>,
}

impl LookupResult {
    /// Append the enumeration label to a polled value, if one applies.
    pub fn enrich(&self, value: &str) -> String {
        match &self.enums {
            Some(enums) => super::translate::enrich_value(value, enums),
            None => value.to_string(),
        }
    }
}

/// Result of [`MibDirectory::load_single_file`](super::MibDirectory::load_single_file).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SingleFileOutcome {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SingleFileOutcome {
    pub fn loaded(module: impl Into<String>) -> Self {
        Self {
            success: true,
            module_name: Some(module.into()),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            module_name: None,
            error: Some(error.into()),
        }
    }
}

/// One node of the merged OID tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OidTreeNode {
    pub name: String,
    pub oid: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Children sorted by numeric arc; omitted on leaves.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<OidTreeNode>>,
}

impl OidTreeNode {
    pub fn children(&self) -> &[OidTreeNode] {
        self.children.as_deref().unwrap_or_default()
    }

    /// Find a descendant (or this node) by dotted numeric path.
    pub fn find(&self, oid: &str) -> Option<&OidTreeNode> {
        if self.oid == oid {
            return Some(self);
        }
        let prefix = format!("{}.", self.oid);
        if !oid.starts_with(&prefix) {
            return None;
        }
        self.children().iter().find_map(|child| child.find(oid))
    }
}
