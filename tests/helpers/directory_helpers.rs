//! Builders for directories rooted in temporary managed folders.

use mibdir::{MibConfig, MibDirectory};
use std::path::PathBuf;
use tempfile::TempDir;

use crate::helpers::fixtures::{copy_fixtures, ordering_dir, system_dir};

/// Config for `dir` that ignores host MIB directories.
pub fn isolated_config(dir: &TempDir) -> MibConfig {
    MibConfig::new(dir.path()).with_system_dirs(Vec::<PathBuf>::new())
}

/// Managed folder with BASE.mib and DEP.mib copied in, nothing loaded yet.
pub fn ordering_directory() -> (TempDir, MibDirectory) {
    let dir = TempDir::new().expect("create temp dir");
    copy_fixtures(&ordering_dir(), dir.path(), &["BASE.mib", "DEP.mib"]);
    let directory = MibDirectory::new(isolated_config(&dir));
    (dir, directory)
}

/// Directory whose only non-SMI module is the RFC1213-MIB builtin.
pub fn system_directory() -> (TempDir, MibDirectory) {
    let dir = TempDir::new().expect("create temp dir");
    let config = isolated_config(&dir).with_builtin_dirs([system_dir()]);
    let directory = MibDirectory::new(config);
    let result = directory.load(Vec::<String>::new());
    assert!(result.is_clean(), "builtin load failed: {:?}", result.errors);
    (dir, directory)
}

/// Directory with RFC1213-MIB builtin plus BASE and DEP tracked and loaded.
pub fn loaded_directory() -> (TempDir, MibDirectory) {
    let dir = TempDir::new().expect("create temp dir");
    copy_fixtures(&ordering_dir(), dir.path(), &["BASE.mib", "DEP.mib"]);
    let config = isolated_config(&dir).with_builtin_dirs([system_dir()]);
    let directory = MibDirectory::new(config);
    let result = directory.load(["BASE.mib", "DEP.mib"]);
    assert!(result.is_clean(), "load failed: {:?}", result.errors);
    (dir, directory)
}
