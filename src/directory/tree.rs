//! Merged OID tree.
//!
//! Paths are inserted arc by arc under a fixed `iso` root. Intermediate
//! arcs that no definition names yet become placeholders; a later insert
//! may name a placeholder, but a named node is never renamed.

use super::types::OidTreeNode;
use crate::base::constants::{ROOT_NAME, ROOT_OID};
use crate::base::{is_numeric_oid, parse_arcs};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
enum NodeLabel {
    Named(String),
    Placeholder,
}

#[derive(Debug)]
struct TreeNode {
    label: NodeLabel,
    oid: String,
    description: Option<String>,
    children: BTreeMap<u32, TreeNode>,
}

impl TreeNode {
    fn placeholder(oid: String) -> Self {
        Self {
            label: NodeLabel::Placeholder,
            oid,
            description: None,
            children: BTreeMap::new(),
        }
    }

    fn into_output(self, arc: u32) -> OidTreeNode {
        let name = match self.label {
            NodeLabel::Named(name) => name,
            NodeLabel::Placeholder => arc.to_string(),
        };
        let children = if self.children.is_empty() {
            None
        } else {
            Some(
                self.children
                    .into_iter()
                    .map(|(arc, child)| child.into_output(arc))
                    .collect(),
            )
        };
        OidTreeNode {
            name,
            oid: self.oid,
            description: self.description,
            children,
        }
    }
}

/// Accumulates named OIDs into one tree rooted at `iso` (`1`).
#[derive(Debug)]
pub struct TreeBuilder {
    root: TreeNode,
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self {
            root: TreeNode {
                label: NodeLabel::Named(ROOT_NAME.to_string()),
                oid: ROOT_OID.to_string(),
                description: None,
                children: BTreeMap::new(),
            },
        }
    }

    /// Insert `oid` with an optional symbolic name and description.
    ///
    /// Paths outside `iso` and malformed paths are dropped. Returns whether
    /// the path was accepted.
    pub fn insert(&mut self, oid: &str, name: &str, description: Option<&str>) -> bool {
        let Some(arcs) = parse_arcs(oid) else {
            return false;
        };
        let Some((&first, rest)) = arcs.split_first() else {
            return false;
        };
        if first != 1 {
            return false;
        }

        let mut node = &mut self.root;
        for &arc in rest {
            let child_oid = format!("{}.{arc}", node.oid);
            node = node
                .children
                .entry(arc)
                .or_insert_with(|| TreeNode::placeholder(child_oid));
        }

        if node.label == NodeLabel::Placeholder && !name.is_empty() && !is_numeric_oid(name) {
            node.label = NodeLabel::Named(name.to_string());
        }
        if node.description.is_none() {
            node.description = description
                .filter(|d| !d.is_empty())
                .map(str::to_string);
        }
        true
    }

    pub fn build(self) -> OidTreeNode {
        let mut root = self.root.into_output(1);
        // The root keeps its children list even when nothing was inserted
        if root.children.is_none() {
            root.children = Some(Vec::new());
        }
        root
    }
}
