//! Loading, rebuilding and unloading against the bundled engine.

use std::fs;

use mibdir::{LoadResult, MibConfig, MibDirectory};
use rstest::rstest;
use tempfile::TempDir;

use crate::helpers::directory_helpers::{isolated_config, loaded_directory, ordering_directory};
use crate::helpers::fixtures::{copy_fixtures, ordering_dir, system_dir};

#[rstest]
#[case(&["DEP.mib", "BASE.mib"])]
#[case(&["BASE.mib", "DEP.mib"])]
fn test_dependency_order_is_discovered(#[case] files: &[&str]) {
    let (_dir, directory) = ordering_directory();

    let result = directory.load(files.iter().copied());

    assert_eq!(
        result,
        LoadResult {
            loaded: vec!["BASE".to_string(), "DEP".to_string()],
            errors: Vec::new(),
        }
    );
    assert!(directory.is_loaded("SNMPv2-SMI"));
}

#[test]
fn test_missing_prerequisite_reports_final_error() {
    let (_dir, directory) = ordering_directory();

    let result = directory.load(["DEP.mib"]);

    assert!(result.loaded.is_empty());
    assert_eq!(
        result.errors,
        ["Error DEP.mib: Module 'DEP' imports from unknown module 'BASE'"]
    );
}

#[test]
fn test_reload_is_idempotent() {
    let (_dir, directory) = loaded_directory();
    let modules = directory.loaded_modules();
    let mappings = directory.all_oid_mappings();

    let again = directory.load(["DEP.mib", "BASE.mib"]);

    assert_eq!(again, LoadResult::default());
    assert_eq!(directory.loaded_modules(), modules);
    assert_eq!(directory.all_oid_mappings(), mappings);
    assert_eq!(directory.tracked_files(), ["BASE.mib", "DEP.mib"]);
}

#[test]
fn test_rebuild_replays_tracked_files() {
    let (_dir, directory) = loaded_directory();

    let result = directory.rebuild();

    assert!(result.is_clean(), "{:?}", result.errors);
    assert_eq!(result.loaded, ["BASE", "DEP"]);
    assert!(directory.is_loaded("RFC1213-MIB"));
}

#[test]
fn test_loaded_modules_report_backing_files() {
    let (_dir, directory) = loaded_directory();

    let modules = directory.loaded_modules();
    let file_of = |name: &str| {
        modules
            .iter()
            .find(|m| m.name == name)
            .map(|m| m.file.clone())
    };

    assert_eq!(file_of("BASE"), Some(Some("BASE.mib".to_string())));
    assert_eq!(file_of("SNMPv2-SMI"), Some(None));
    assert_eq!(file_of("RFC1213-MIB"), Some(None));

    let json = serde_json::to_value(&modules[0]).unwrap();
    assert!(json.get("file").is_none());
}

#[test]
fn test_unload_module_drops_its_mappings() {
    let (_dir, directory) = loaded_directory();
    assert!(directory.all_oid_mappings().contains_key("1.3.6.1.4.1.4242.1.2"));

    assert!(directory.unload("DEP"));

    assert!(!directory.is_loaded("DEP"));
    assert!(directory.is_loaded("BASE"));
    assert_eq!(directory.tracked_files(), ["BASE.mib"]);
    let mappings = directory.all_oid_mappings();
    assert!(!mappings.contains_key("1.3.6.1.4.1.4242.1.2"));
    assert_eq!(
        mappings.get("1.3.6.1.4.1.4242.1.1").map(String::as_str),
        Some("baseCounter")
    );
}

#[rstest]
#[case("SNMPv2-SMI")]
#[case("RFC1213-MIB")]
#[case("NO-SUCH-MIB")]
fn test_unload_without_backing_file_fails(#[case] module: &str) {
    let (_dir, directory) = loaded_directory();

    assert!(!directory.unload(module));
    assert_eq!(directory.tracked_files(), ["BASE.mib", "DEP.mib"]);
}

#[test]
fn test_unloaded_core_module_stays_out_while_file_remains() {
    let dir = TempDir::new().unwrap();
    copy_fixtures(&system_dir(), dir.path(), &["RFC1213-MIB.txt"]);
    let directory = MibDirectory::new(isolated_config(&dir));

    let result = directory.load(["RFC1213-MIB.txt"]);
    assert!(result.is_clean(), "{:?}", result.errors);
    assert!(directory.is_loaded("RFC1213-MIB"));

    assert!(directory.unload("RFC1213-MIB"));

    assert!(dir.path().join("RFC1213-MIB.txt").is_file());
    assert!(directory.tracked_files().is_empty());
    assert!(!directory.is_loaded("RFC1213-MIB"));
    assert!(!directory.all_oid_mappings().contains_key("1.3.6.1.2.1.1.1"));

    let rebuilt = directory.rebuild();
    assert!(rebuilt.loaded.is_empty(), "{:?}", rebuilt.loaded);
    assert!(!directory.is_loaded("RFC1213-MIB"));
}

#[test]
fn test_untracked_core_module_file_is_not_loaded() {
    let dir = TempDir::new().unwrap();
    copy_fixtures(&system_dir(), dir.path(), &["RFC1213-MIB.txt"]);
    let directory = MibDirectory::new(isolated_config(&dir));

    let result = directory.load(Vec::<String>::new());

    assert_eq!(result, LoadResult::default());
    assert!(!directory.is_loaded("RFC1213-MIB"));
    assert_eq!(directory.list_mib_files(), ["RFC1213-MIB.txt"]);
}

#[test]
fn test_load_single_file_success_and_dependency_failure() {
    let (_dir, directory) = ordering_directory();

    let outcome = directory.load_single_file("DEP.mib");
    assert!(!outcome.success);
    assert_eq!(
        outcome.error.as_deref(),
        Some("Error DEP.mib: Module 'DEP' imports from unknown module 'BASE'")
    );

    let outcome = directory.load_single_file("BASE.mib");
    assert!(outcome.success);
    assert_eq!(outcome.module_name.as_deref(), Some("BASE"));
    // DEP stayed tracked, so the rebuild picked it up too
    assert!(directory.is_loaded("DEP"));
}

#[test]
fn test_parse_error_reported_per_file() {
    let dir = TempDir::new().unwrap();
    copy_fixtures(&ordering_dir(), dir.path(), &["BASE.mib"]);
    fs::write(
        dir.path().join("BROKEN-MIB.mib"),
        "BROKEN-MIB DEFINITIONS ::= BEGIN\n\
         broken OBJECT IDENTIFIER ::= {\n",
    )
    .unwrap();
    let directory = MibDirectory::new(isolated_config(&dir));

    let result = directory.load(["BROKEN-MIB.mib", "BASE.mib"]);

    assert_eq!(result.loaded, ["BASE"]);
    assert_eq!(result.errors.len(), 1);
    assert!(
        result.errors[0].starts_with("Error BROKEN-MIB.mib: Parse error: "),
        "{}",
        result.errors[0]
    );
}

#[test]
fn test_list_and_find_mib_files() {
    let (dir, directory) = ordering_directory();
    fs::write(dir.path().join("notes.md"), "not a mib").unwrap();

    assert_eq!(directory.list_mib_files(), ["BASE.mib", "DEP.mib"]);
    assert_eq!(directory.find_mib_path("DEP"), Some(dir.path().join("DEP.mib")));
    assert_eq!(directory.find_mib_path("MISSING"), None);
}

#[test]
fn test_config_from_toml_drives_directory() {
    let dir = TempDir::new().unwrap();
    copy_fixtures(&ordering_dir(), dir.path(), &["BASE.mib", "DEP.mib"]);
    let toml = format!(
        "mibs_dir = {:?}\nsystem_dirs = []\ncore_order = [\"BASE\"]\n",
        dir.path().display().to_string()
    );
    let config = MibConfig::from_toml_str(&toml).unwrap();

    let directory = MibDirectory::new(config);
    let result = directory.load(["DEP.mib", "BASE.mib"]);

    assert!(result.is_clean(), "{:?}", result.errors);
    assert_eq!(result.loaded, ["BASE", "DEP"]);
}
