//! Directory configuration.
//!
//! Every field has a default so a TOML file only needs the keys it changes:
//!
//! ```toml
//! mibs_dir = "/srv/mibs"
//! builtin_dirs = ["/usr/share/snmp/mibs/ietf"]
//! core_order = ["SNMPv2-SMI", "SNMPv2-TC", "IF-MIB"]
//! ```

use crate::base::constants::{
    DEFAULT_CORE_ORDER, DEFAULT_LIMITATION_MARKER, DEFAULT_MIBS_DIR, DEFAULT_SYSTEM_DIRS,
    MIB_EXTENSIONS,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while reading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Settings for a [`MibDirectory`](crate::directory::MibDirectory).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MibConfig {
    /// Managed directory holding tracked files.
    pub mibs_dir: PathBuf,

    /// Directories probed for core-order modules that are not tracked.
    pub system_dirs: Vec<PathBuf>,

    /// Directories whose definition files are pre-loaded as builtins.
    pub builtin_dirs: Vec<PathBuf>,

    /// Foundational module names attempted first, in order.
    pub core_order: Vec<String>,

    /// Recognized definition-file extensions, without the dot.
    pub extensions: Vec<String>,

    /// Parser-message substring rewritten to the limitation diagnostic.
    pub limitation_marker: String,

    /// Register the engine's embedded SMI base modules as builtins.
    pub preload_base_modules: bool,
}

impl Default for MibConfig {
    fn default() -> Self {
        Self {
            mibs_dir: PathBuf::from(DEFAULT_MIBS_DIR),
            system_dirs: DEFAULT_SYSTEM_DIRS.iter().map(PathBuf::from).collect(),
            builtin_dirs: Vec::new(),
            core_order: DEFAULT_CORE_ORDER.iter().map(|s| s.to_string()).collect(),
            extensions: MIB_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            limitation_marker: DEFAULT_LIMITATION_MARKER.to_string(),
            preload_base_modules: true,
        }
    }
}

impl MibConfig {
    /// Default configuration rooted at `mibs_dir`.
    pub fn new(mibs_dir: impl Into<PathBuf>) -> Self {
        Self {
            mibs_dir: mibs_dir.into(),
            ..Self::default()
        }
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn with_system_dirs<I, P>(mut self, dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.system_dirs = dirs.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_builtin_dirs<I, P>(mut self, dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.builtin_dirs = dirs.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_core_order<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.core_order = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_limitation_marker(mut self, marker: impl Into<String>) -> Self {
        self.limitation_marker = marker.into();
        self
    }

    pub fn with_base_modules(mut self, preload: bool) -> Self {
        self.preload_base_modules = preload;
        self
    }

    /// True if `name` ends in one of the recognized extensions.
    pub fn has_mib_extension(&self, name: &str) -> bool {
        Path::new(name)
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
    }
}
