//! Definition-file inventory.
//!
//! Everything here is cheap: directory listings, existence probes and the
//! header scan that finds a file's module name without parsing its body.

use crate::config::MibConfig;
use crate::parser::scan_module_name;
use rayon::prelude::*;
use std::path::{Path, PathBuf};

/// Outcome of scanning one tracked file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileScan {
    /// The file declares this module.
    Typed(String),
    /// The file exists but has no recognizable module header.
    Untyped,
    /// The file is not on disk.
    Missing,
    /// The file exists but could not be read as text.
    Unreadable(String),
}

/// A tracked filename with its absolute path and scan outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedFile {
    pub filename: String,
    pub path: PathBuf,
    pub scan: FileScan,
}

/// Lists and locates definition files for a directory configuration.
#[derive(Debug, Clone)]
pub struct FileInventory {
    config: MibConfig,
}

impl FileInventory {
    pub fn new(config: &MibConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// Absolute path of a tracked filename.
    pub fn path_of(&self, filename: &str) -> PathBuf {
        self.config.mibs_dir.join(filename)
    }

    pub fn is_mib_file(&self, name: &str) -> bool {
        self.config.has_mib_extension(name)
    }

    /// Sorted filenames in the managed directory with a recognized extension.
    ///
    /// A missing or unreadable directory yields an empty list.
    pub fn list_mib_files(&self) -> Vec<String> {
        collect_mib_paths(&self.config.mibs_dir, &self.config)
            .into_iter()
            .filter_map(|path| Some(path.file_name()?.to_str()?.to_string()))
            .collect()
    }

    /// Locate a module or file by probing the managed directory, then each
    /// system directory, for `identifier` as-is and with each extension.
    pub fn find_mib_path(&self, identifier: &str) -> Option<PathBuf> {
        if identifier.is_empty() {
            return None;
        }
        std::iter::once(&self.config.mibs_dir)
            .chain(self.config.system_dirs.iter())
            .filter(|dir| dir.is_dir())
            .find_map(|dir| self.probe(dir, identifier))
    }

    /// Like [`find_mib_path`](Self::find_mib_path), but never looks in the
    /// managed directory. Files there only load once tracked.
    pub fn find_system_path(&self, identifier: &str) -> Option<PathBuf> {
        if identifier.is_empty() {
            return None;
        }
        self.config
            .system_dirs
            .iter()
            .filter(|dir| dir.is_dir())
            .find_map(|dir| self.probe(dir, identifier))
    }

    fn probe(&self, dir: &Path, identifier: &str) -> Option<PathBuf> {
        let exact = dir.join(identifier);
        if exact.is_file() {
            return Some(exact);
        }
        self.config
            .extensions
            .iter()
            .map(|ext| dir.join(format!("{identifier}.{ext}")))
            .find(|candidate| candidate.is_file())
    }

    /// Scan tracked files for their module names, in parallel.
    ///
    /// Results keep the order of `files`.
    pub fn scan(&self, files: &[String]) -> Vec<ScannedFile> {
        files
            .par_iter()
            .map(|filename| {
                let path = self.path_of(filename);
                let scan = scan_file(&path);
                ScannedFile {
                    filename: filename.clone(),
                    path,
                    scan,
                }
            })
            .collect()
    }
}

/// Sorted definition files directly inside `dir`.
pub fn collect_mib_paths(dir: &Path, config: &MibConfig) -> Vec<PathBuf> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return Vec::new();
    };
    let mut paths: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .filter(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| config.has_mib_extension(name))
        })
        .collect();
    paths.sort();
    paths
}

/// Declared module name of the file at `path`, if its header can be found.
pub fn read_module_name(path: &Path) -> std::io::Result<Option<String>> {
    let content = std::fs::read_to_string(path)?;
    Ok(scan_module_name(&content))
}

fn scan_file(path: &Path) -> FileScan {
    if !path.exists() {
        return FileScan::Missing;
    }
    match read_module_name(path) {
        Ok(Some(name)) => FileScan::Typed(name),
        Ok(None) => FileScan::Untyped,
        Err(err) => FileScan::Unreadable(err.to_string()),
    }
}
