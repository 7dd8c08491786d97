//! The MIB directory service.
//!
//! [`MibDirectory`] owns a live [`MibEngine`] plus the registry of tracked
//! files and loaded modules. Engines can only add modules, so forgetting one
//! means building a fresh engine and replaying the tracked files into it:
//!
//! ```text
//! tracked files ──► loader (fix-point) ──► engine + registry
//!                                              │
//!                         ┌────────────────────┼───────────────────┐
//!                         ▼                    ▼                   ▼
//!                     build_tree          lookup_oid        all_oid_mappings
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use mibdir::{MibConfig, MibDirectory};
//!
//! let directory = MibDirectory::new(MibConfig::new("/srv/mibs"));
//! let result = directory.load(["IF-MIB.txt"]);
//! let hit = directory.lookup_oid("1.3.6.1.2.1.2.2.1.8.3");
//! ```
//!
//! Mutations hold the write lock for their whole sequence, so a reader never
//! observes a half-rebuilt engine.

mod loader;
mod state;
mod translate;
mod tree;
mod types;

pub use translate::enrich_value;
pub use tree::TreeBuilder;
pub use types::{LoadResult, LoadedModule, LookupResult, OidTreeNode, SingleFileOutcome};

use crate::config::MibConfig;
use crate::project::{FileInventory, read_module_name};
use crate::store::{MibEngine, ModuleStore};
use loader::base_name;
use parking_lot::RwLock;
use state::{DirectoryState, Registry};
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info};

type EngineFactory<E> = Arc<dyn Fn() -> E + Send + Sync>;

/// Directory of loaded MIB modules backed by a managed file set.
///
/// Cloning is cheap; clones share the same state.
pub struct MibDirectory<E: MibEngine = ModuleStore> {
    state: Arc<RwLock<DirectoryState<E>>>,
    factory: EngineFactory<E>,
    inventory: Arc<FileInventory>,
    config: Arc<MibConfig>,
}

impl<E: MibEngine> Clone for MibDirectory<E> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            factory: Arc::clone(&self.factory),
            inventory: Arc::clone(&self.inventory),
            config: Arc::clone(&self.config),
        }
    }
}

impl MibDirectory<ModuleStore> {
    /// Directory backed by the bundled [`ModuleStore`] engine.
    pub fn new(config: MibConfig) -> Self {
        let base_modules = config.preload_base_modules;
        Self::with_engine(config, move || ModuleStore::with_base_modules(base_modules))
    }
}

impl<E: MibEngine> MibDirectory<E> {
    /// Directory backed by engines from `factory`. A new engine is built on
    /// every rebuild.
    pub fn with_engine<F>(config: MibConfig, factory: F) -> Self
    where
        F: Fn() -> E + Send + Sync + 'static,
    {
        let engine = factory();
        Self {
            state: Arc::new(RwLock::new(DirectoryState::new(engine))),
            factory: Arc::new(factory),
            inventory: Arc::new(FileInventory::new(&config)),
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &MibConfig {
        &self.config
    }

    // =========================================================================
    // MUTATIONS
    // =========================================================================

    /// Track `files` and load everything tracked into the live engine.
    pub fn load<I, S>(&self, files: I) -> LoadResult
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let requested: Vec<String> = files.into_iter().map(Into::into).collect();
        let mut state = self.state.write();
        loader::load(&mut state, &self.inventory, &self.config, &requested)
    }

    /// Replace the engine with a fresh one and reload the tracked files.
    pub fn rebuild(&self) -> LoadResult {
        let mut state = self.state.write();
        self.rebuild_locked(&mut state)
    }

    fn rebuild_locked(&self, state: &mut DirectoryState<E>) -> LoadResult {
        info!(tracked = state.registry.tracked_files.len(), "Rebuilding MIB directory");
        state.engine = (self.factory)();
        state.registry.reset();
        loader::load(state, &self.inventory, &self.config, &[])
    }

    /// Stop tracking a file, or the file backing a module, and rebuild.
    ///
    /// Returns false without rebuilding when nothing tracked matches, which
    /// includes every builtin module.
    pub fn unload(&self, identifier: &str) -> bool {
        let mut state = self.state.write();
        let Some(filename) = self.backing_file(&state.registry, identifier) else {
            debug!(identifier, "Nothing tracked to unload");
            return false;
        };
        state.registry.untrack(&filename);
        info!(identifier, file = %filename, "Unloading");
        self.rebuild_locked(&mut state);
        true
    }

    fn backing_file(&self, registry: &Registry, identifier: &str) -> Option<String> {
        if self.inventory.is_mib_file(identifier) && registry.tracked_files.contains(identifier) {
            return Some(identifier.to_string());
        }
        if let Some(file) = registry.module_to_file.get(identifier) {
            if registry.tracked_files.contains(file) {
                return Some(file.clone());
            }
        }
        // A module that never loaded still has a tracked file declaring it
        registry
            .tracked_files
            .iter()
            .find(|file| {
                read_module_name(&self.inventory.path_of(file))
                    .ok()
                    .flatten()
                    .is_some_and(|module| module == identifier)
            })
            .cloned()
    }

    /// Track one file, rebuild, and report on that file alone.
    ///
    /// The file stays tracked even when it fails to load.
    pub fn load_single_file(&self, filename: &str) -> SingleFileOutcome {
        if filename.is_empty() {
            return SingleFileOutcome::failed("No filename provided");
        }

        let mut state = self.state.write();
        state.registry.track(filename);
        let result = self.rebuild_locked(&mut state);

        let path = self.inventory.path_of(filename);
        if !path.is_file() {
            return SingleFileOutcome::failed("File not found on disk");
        }

        let module = read_module_name(&path).ok().flatten();
        if let Some(module) = &module {
            if state.registry.is_loaded(module) {
                state.registry.map_file(module, filename);
                return SingleFileOutcome::loaded(module.as_str());
            }
        }

        let base = base_name(filename);
        if let Some(error) = result.errors.iter().find(|e| e.contains(base)) {
            return SingleFileOutcome::failed(error.as_str());
        }

        match module {
            None => {
                let registered = state.registry.file_to_module.get(filename).cloned();
                SingleFileOutcome::loaded(registered.unwrap_or_else(|| filename.to_string()))
            }
            Some(module) => SingleFileOutcome::failed(format!(
                "Could not load module {module}. Check for missing dependencies."
            )),
        }
    }

    // =========================================================================
    // QUERIES
    // =========================================================================

    /// Describe a numeric OID. Instance suffixes are stripped from the name
    /// but kept in the returned `oid`.
    pub fn lookup_oid(&self, oid: &str) -> Option<LookupResult> {
        let state = self.state.read();
        translate::lookup_oid(&state.engine, oid)
    }

    /// Numeric form of a symbol, or `input` unchanged when it is already
    /// numeric or unknown.
    pub fn resolve_symbol(&self, input: &str) -> String {
        let state = self.state.read();
        translate::resolve_symbol(&state.engine, input)
    }

    /// Every provider of every loaded module as `oid -> name`.
    pub fn all_oid_mappings(&self) -> BTreeMap<String, String> {
        let state = self.state.read();
        let mut mappings = BTreeMap::new();
        for module in &state.registry.loaded_modules {
            let Some(providers) = state.registry.providers(&state.engine, module) else {
                continue;
            };
            for provider in providers.iter() {
                mappings.insert(provider.oid.clone(), provider.name.clone());
            }
        }
        mappings
    }

    /// Merge every loaded module's symbols, then its providers, into one
    /// tree rooted at `iso`.
    pub fn build_tree(&self) -> OidTreeNode {
        let state = self.state.read();
        let mut builder = TreeBuilder::new();
        for module in &state.registry.loaded_modules {
            if let Some(symbols) = state.engine.module_symbols(module) {
                for entry in symbols.iter() {
                    if let Some(oid) = &entry.oid {
                        builder.insert(oid, &entry.name, entry.description.as_deref());
                    }
                }
            }
            if let Some(providers) = state.registry.providers(&state.engine, module) {
                for provider in providers.iter() {
                    builder.insert(&provider.oid, &provider.name, None);
                }
            }
        }
        builder.build()
    }

    pub fn is_loaded(&self, module: &str) -> bool {
        self.state.read().registry.is_loaded(module)
    }

    /// Loaded modules in load order, with their backing files.
    pub fn loaded_modules(&self) -> Vec<LoadedModule> {
        let state = self.state.read();
        state
            .registry
            .loaded_modules
            .iter()
            .map(|name| LoadedModule {
                name: name.clone(),
                file: state.registry.module_to_file.get(name).cloned(),
            })
            .collect()
    }

    /// Tracked filenames in the order they were first tracked.
    pub fn tracked_files(&self) -> Vec<String> {
        self.state.read().registry.tracked_files.iter().cloned().collect()
    }

    pub fn list_mib_files(&self) -> Vec<String> {
        self.inventory.list_mib_files()
    }

    pub fn find_mib_path(&self, identifier: &str) -> Option<PathBuf> {
        self.inventory.find_mib_path(identifier)
    }
}

#[cfg(feature = "tokio")]
impl<E: MibEngine + 'static> MibDirectory<E> {
    /// [`load`](Self::load) on the blocking thread pool.
    pub async fn load_async(&self, files: Vec<String>) -> LoadResult {
        tokio::task::spawn_blocking({
            let directory = self.clone();
            move || directory.load(files)
        })
        .await
        .unwrap_or_else(|err| internal_failure(&err))
    }

    /// [`rebuild`](Self::rebuild) on the blocking thread pool.
    pub async fn rebuild_async(&self) -> LoadResult {
        tokio::task::spawn_blocking({
            let directory = self.clone();
            move || directory.rebuild()
        })
        .await
        .unwrap_or_else(|err| internal_failure(&err))
    }

    /// [`unload`](Self::unload) on the blocking thread pool.
    pub async fn unload_async(&self, identifier: String) -> bool {
        tokio::task::spawn_blocking({
            let directory = self.clone();
            move || directory.unload(&identifier)
        })
        .await
        .unwrap_or_else(|err| {
            tracing::warn!(error = %err, "Unload task failed");
            false
        })
    }

    /// [`load_single_file`](Self::load_single_file) on the blocking thread pool.
    pub async fn load_single_file_async(&self, filename: String) -> SingleFileOutcome {
        tokio::task::spawn_blocking({
            let directory = self.clone();
            move || directory.load_single_file(&filename)
        })
        .await
        .unwrap_or_else(|err| SingleFileOutcome::failed(format!("Internal Loader Error: {err}")))
    }
}

#[cfg(feature = "tokio")]
fn internal_failure(err: &tokio::task::JoinError) -> LoadResult {
    tracing::warn!(error = %err, "Load task failed");
    LoadResult {
        loaded: Vec::new(),
        errors: vec![format!("Internal Loader Error: {err}")],
    }
}
