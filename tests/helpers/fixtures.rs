//! Paths to the MIB fixtures shipped with the tests.

use std::fs;
use std::path::{Path, PathBuf};

/// Root of `tests/fixtures`.
pub fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Directory holding an RFC1213-MIB subset (system and interfaces groups).
pub fn system_dir() -> PathBuf {
    fixtures_root().join("system")
}

/// Directory holding BASE.mib and DEP.mib, where DEP imports from BASE.
pub fn ordering_dir() -> PathBuf {
    fixtures_root().join("ordering")
}

/// Copy fixture files from `from` into `to` under the same names.
pub fn copy_fixtures(from: &Path, to: &Path, names: &[&str]) {
    for name in names {
        fs::copy(from.join(name), to.join(name))
            .unwrap_or_else(|err| panic!("copy fixture {name}: {err}"));
    }
}
