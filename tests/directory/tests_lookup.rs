//! OID lookups, symbol resolution and provider mappings.

use mibdir::directory::enrich_value;
use rstest::rstest;

use crate::helpers::directory_helpers::{loaded_directory, system_directory};

#[test]
fn test_lookup_sys_descr_instance() {
    let (_dir, directory) = system_directory();

    let hit = directory.lookup_oid("1.3.6.1.2.1.1.1.0").unwrap();

    assert_eq!(hit.name, "sysDescr");
    assert_eq!(hit.module, "RFC1213-MIB");
    assert_eq!(hit.oid, "1.3.6.1.2.1.1.1.0");
    let description = hit.description.as_deref().unwrap();
    assert!(description.starts_with("A textual description of the entity."));
    assert_eq!(hit.enums, None);
}

#[rstest]
#[case("1.3.6.1.2.1.1.5")]
#[case("1.3.6.1.2.1.2.2.1.2")]
#[case("1.3.6.1.4.1.4242.1.2")]
fn test_instance_suffix_keeps_base_name(#[case] oid: &str) {
    let (_dir, directory) = loaded_directory();

    let bare = directory.lookup_oid(oid).unwrap();
    let scalar = directory.lookup_oid(&format!("{oid}.0")).unwrap();
    let indexed = directory.lookup_oid(&format!("{oid}.12.3")).unwrap();

    assert_eq!(bare.name, scalar.name);
    assert_eq!(bare.name, indexed.name);
    assert_eq!(scalar.oid, format!("{oid}.0"));
}

#[test]
fn test_lookup_direct_enumeration() {
    let (_dir, directory) = system_directory();

    let hit = directory.lookup_oid("1.3.6.1.2.1.2.2.1.7.3").unwrap();

    assert_eq!(hit.name, "ifAdminStatus");
    let enums = hit.enums.as_ref().unwrap();
    assert_eq!(enums.get(&1).map(String::as_str), Some("up"));
    assert_eq!(enums.get(&3).map(String::as_str), Some("testing"));
    assert_eq!(hit.enrich("2"), "2 (down)");
    assert_eq!(hit.enrich("9"), "9");
}

#[test]
fn test_lookup_enumeration_through_imported_convention() {
    let (_dir, directory) = loaded_directory();

    let hit = directory.lookup_oid("1.3.6.1.4.1.4242.1.2.0").unwrap();

    assert_eq!(hit.name, "depLevel");
    assert_eq!(hit.module, "DEP");
    let enums = hit.enums.as_ref().unwrap();
    assert_eq!(enum_labels(enums), ["low", "medium", "high"]);
    assert_eq!(enrich_value("3", enums), "3 (high)");
}

fn enum_labels(enums: &mibdir::store::EnumMap) -> Vec<&str> {
    enums.values().map(String::as_str).collect()
}

#[test]
fn test_lookup_prefix_of_registered_node() {
    let (_dir, directory) = system_directory();

    let hit = directory.lookup_oid("1.3.6.1.2.1.1").unwrap();

    assert_eq!(hit.name, "system");
    assert_eq!(hit.description, None);
}

#[rstest]
#[case("2.999")]
#[case("not-an-oid")]
#[case("")]
fn test_lookup_miss(#[case] oid: &str) {
    let (_dir, directory) = system_directory();
    assert_eq!(directory.lookup_oid(oid), None);
}

#[test]
fn test_lookup_result_json() {
    let (_dir, directory) = system_directory();

    let sys = serde_json::to_value(directory.lookup_oid("1.3.6.1.2.1.1.3.0").unwrap()).unwrap();
    assert_eq!(sys["name"], "sysUpTime");
    assert_eq!(sys["module"], "RFC1213-MIB");
    assert!(sys.get("enums").is_none());

    let admin = serde_json::to_value(directory.lookup_oid("1.3.6.1.2.1.2.2.1.7").unwrap()).unwrap();
    assert_eq!(admin["enums"]["1"], "up");
}

#[rstest]
#[case("1.3.6.1.2.1.1.1.0")]
#[case("1")]
#[case("1.3.6.1.4.1.99999.7")]
fn test_resolve_symbol_identity_on_numeric(#[case] oid: &str) {
    let (_dir, directory) = system_directory();
    assert_eq!(directory.resolve_symbol(oid), oid);
}

#[rstest]
#[case("sysDescr", "1.3.6.1.2.1.1.1")]
#[case("sysDescr.0", "1.3.6.1.2.1.1.1.0")]
#[case("RFC1213-MIB::ifDescr.4", "1.3.6.1.2.1.2.2.1.2.4")]
#[case("enterprises", "1.3.6.1.4.1")]
#[case("depLevel.0", "1.3.6.1.4.1.4242.1.2.0")]
fn test_resolve_symbol_to_numeric(#[case] input: &str, #[case] expected: &str) {
    let (_dir, directory) = loaded_directory();
    assert_eq!(directory.resolve_symbol(input), expected);
}

#[rstest]
#[case("noSuchObject")]
#[case("NO-SUCH-MIB::sysDescr")]
#[case("sysDescr.x")]
fn test_resolve_symbol_falls_back_to_input(#[case] input: &str) {
    let (_dir, directory) = loaded_directory();
    assert_eq!(directory.resolve_symbol(input), input);
}

#[test]
fn test_all_oid_mappings() {
    let (_dir, directory) = loaded_directory();

    let mappings = directory.all_oid_mappings();

    assert_eq!(
        mappings.get("1.3.6.1.2.1.1.1").map(String::as_str),
        Some("sysDescr")
    );
    assert_eq!(
        mappings.get("1.3.6.1.2.1.2.2").map(String::as_str),
        Some("ifTable")
    );
    assert_eq!(
        mappings.get("1.3.6.1.4.1.4242.1.2").map(String::as_str),
        Some("depLevel")
    );
    // Only object types are providers
    assert!(!mappings.contains_key("1.3.6.1.2.1.1"));
}
