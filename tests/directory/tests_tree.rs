//! The merged OID tree.

use mibdir::directory::TreeBuilder;
use mibdir::{MibDirectory, OidTreeNode};
use tempfile::TempDir;

use crate::helpers::directory_helpers::{isolated_config, loaded_directory, system_directory};

fn assert_sorted(node: &OidTreeNode) {
    let arcs: Vec<u32> = node
        .children()
        .iter()
        .map(|child| child.oid.rsplit('.').next().unwrap().parse().unwrap())
        .collect();
    let mut sorted = arcs.clone();
    sorted.sort_unstable();
    assert_eq!(arcs, sorted, "children of {} out of order", node.oid);
    node.children().iter().for_each(assert_sorted);
}

fn assert_under_iso(node: &OidTreeNode) {
    assert!(node.oid == "1" || node.oid.starts_with("1."), "{}", node.oid);
    node.children().iter().for_each(assert_under_iso);
}

#[test]
fn test_root_is_iso() {
    let dir = TempDir::new().unwrap();
    let directory = MibDirectory::new(isolated_config(&dir).with_base_modules(false));

    let tree = directory.build_tree();

    assert_eq!(tree.name, "iso");
    assert_eq!(tree.oid, "1");
    assert!(tree.children().is_empty());
}

#[test]
fn test_tree_merges_symbols_and_providers() {
    let (_dir, directory) = loaded_directory();

    let tree = directory.build_tree();

    assert_eq!(tree.find("1.3.6.1").unwrap().name, "internet");
    assert_eq!(tree.find("1.3.6.1.2.1.1").unwrap().name, "system");
    let descr = tree.find("1.3.6.1.2.1.1.1").unwrap();
    assert_eq!(descr.name, "sysDescr");
    assert!(descr.description.is_some());
    assert!(descr.children.is_none());
    assert_eq!(tree.find("1.3.6.1.4.1.4242").unwrap().name, "baseMIB");
    assert_eq!(tree.find("1.3.6.1.4.1.4242.1.2").unwrap().name, "depLevel");
}

#[test]
fn test_tree_excludes_other_roots() {
    // SNMPv2-SMI defines zeroDotZero at 0.0
    let (_dir, directory) = system_directory();

    let tree = directory.build_tree();

    assert_under_iso(&tree);
    assert_sorted(&tree);
}

#[test]
fn test_interfaces_children_numeric_order() {
    let (_dir, directory) = system_directory();

    let tree = directory.build_tree();
    let entry = tree.find("1.3.6.1.2.1.2.2.1").unwrap();
    let names: Vec<&str> = entry.children().iter().map(|c| c.name.as_str()).collect();

    assert_eq!(
        names,
        [
            "ifIndex",
            "ifDescr",
            "ifType",
            "ifPhysAddress",
            "ifAdminStatus",
            "ifOperStatus",
            "ifInOctets"
        ]
    );
}

#[test]
fn test_tree_json_omits_empty_fields() {
    let (_dir, directory) = system_directory();

    let json = serde_json::to_value(directory.build_tree()).unwrap();

    assert_eq!(json["name"], "iso");
    assert!(json.get("description").is_none());
    let leaf = serde_json::to_value(
        directory
            .build_tree()
            .find("1.3.6.1.2.1.1.3")
            .unwrap()
            .clone(),
    )
    .unwrap();
    assert!(leaf.get("children").is_none());
    assert_eq!(leaf["name"], "sysUpTime");
}

#[test]
fn test_named_node_survives_empty_reinsert() {
    let mut builder = TreeBuilder::new();
    builder.insert("1.3.6.1.2.1.1.1", "sysDescr", None);
    builder.insert("1.3.6.1.2.1.1.1", "", None);

    let tree = builder.build();

    assert_eq!(tree.find("1.3.6.1.2.1.1.1").unwrap().name, "sysDescr");
}
