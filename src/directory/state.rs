//! Registry state owned by a directory.

use crate::store::{MibEngine, ProviderList};
use indexmap::IndexSet;
use parking_lot::Mutex;
use rustc_hash::FxHashMap;
use std::sync::Arc;
use tracing::debug;

/// The live engine plus the bookkeeping that must change with it.
pub(crate) struct DirectoryState<E> {
    pub(crate) engine: E,
    pub(crate) registry: Registry,
}

impl<E> DirectoryState<E> {
    pub(crate) fn new(engine: E) -> Self {
        Self {
            engine,
            registry: Registry::default(),
        }
    }
}

/// Which modules are loaded and which files back them.
///
/// `tracked_files` is the source of truth; everything else is derived by
/// replaying a load over it and is cleared on rebuild.
#[derive(Default)]
pub(crate) struct Registry {
    pub(crate) tracked_files: IndexSet<String>,
    pub(crate) loaded_modules: IndexSet<String>,
    pub(crate) module_to_file: FxHashMap<String, String>,
    pub(crate) file_to_module: FxHashMap<String, String>,
    /// Filled lazily by readers, so it sits behind its own lock.
    providers_cache: Mutex<FxHashMap<String, Arc<ProviderList>>>,
}

impl Registry {
    /// Forget everything except the tracked files.
    pub(crate) fn reset(&mut self) {
        self.loaded_modules.clear();
        self.module_to_file.clear();
        self.file_to_module.clear();
        self.providers_cache.get_mut().clear();
    }

    pub(crate) fn track(&mut self, filename: &str) -> bool {
        if filename.is_empty() {
            return false;
        }
        self.tracked_files.insert(filename.to_string())
    }

    pub(crate) fn untrack(&mut self, filename: &str) -> bool {
        self.tracked_files.shift_remove(filename)
    }

    pub(crate) fn is_loaded(&self, module: &str) -> bool {
        self.loaded_modules.contains(module)
    }

    /// Point `module` and `filename` at each other, dropping any mapping
    /// either side had before.
    pub(crate) fn map_file(&mut self, module: &str, filename: &str) {
        if let Some(old_file) = self
            .module_to_file
            .insert(module.to_string(), filename.to_string())
        {
            if old_file != filename {
                self.file_to_module.remove(&old_file);
            }
        }
        if let Some(old_module) = self
            .file_to_module
            .insert(filename.to_string(), module.to_string())
        {
            if old_module != module {
                self.module_to_file.remove(&old_module);
            }
        }
    }

    pub(crate) fn cache_providers(&mut self, module: &str, providers: ProviderList) {
        self.providers_cache
            .get_mut()
            .insert(module.to_string(), Arc::new(providers));
    }

    /// Cached providers of `module`, asking the engine on a miss.
    pub(crate) fn providers<E: MibEngine>(
        &self,
        engine: &E,
        module: &str,
    ) -> Option<Arc<ProviderList>> {
        let mut cache = self.providers_cache.lock();
        if let Some(providers) = cache.get(module) {
            return Some(Arc::clone(providers));
        }
        match engine.providers(module) {
            Ok(providers) => {
                let providers = Arc::new(providers);
                cache.insert(module.to_string(), Arc::clone(&providers));
                Some(providers)
            }
            Err(err) => {
                debug!(module, error = %err, "Providers unavailable");
                None
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn cached_provider_modules(&self) -> Vec<String> {
        let mut modules: Vec<String> = self.providers_cache.lock().keys().cloned().collect();
        modules.sort();
        modules
    }
}
