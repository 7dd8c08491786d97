//! Dependency-ordered loading.
//!
//! Module files do not declare a load order the loader can see; a module
//! simply fails to register until its imports are registered. Loading
//! therefore runs in phases:
//!
//! 1. Builtins: the engine's bundled modules and any `builtin_dirs` files
//! 2. Header scan of every tracked file (parallel, no parsing)
//! 3. Core-order modules, once each
//! 4. Untyped files, once each
//! 5. Fix-point: retry everything still pending until a pass loads nothing
//! 6. Final pass: one last attempt per pending file, recording its error
//!
//! Only the final pass records errors, so a file that merely waited for a
//! prerequisite never shows up in `errors`.

use super::state::{DirectoryState, Registry};
use super::types::LoadResult;
use crate::base::constants::LIMITATION_MESSAGE;
use crate::config::MibConfig;
use crate::project::{FileInventory, FileScan, collect_mib_paths};
use crate::store::MibEngine;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};
use tracing::{debug, info, trace, warn};

/// Load `requested` (plus everything already tracked) into `state`.
///
/// Never fails: per-file problems and unexpected internal failures are all
/// reported through [`LoadResult::errors`].
pub(crate) fn load<E: MibEngine>(
    state: &mut DirectoryState<E>,
    inventory: &FileInventory,
    config: &MibConfig,
    requested: &[String],
) -> LoadResult {
    let mut result = LoadResult::default();
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        Loader {
            engine: &mut state.engine,
            registry: &mut state.registry,
            inventory,
            config,
            result: &mut result,
        }
        .run(requested)
    }));

    if let Err(payload) = outcome {
        let message = panic_message(payload.as_ref());
        warn!(error = %message, "Loader failed unexpectedly");
        result.errors.push(format!("Internal Loader Error: {message}"));
    }

    info!(
        loaded = result.loaded.len(),
        errors = result.errors.len(),
        "Module load finished"
    );
    result
}

/// A tracked file waiting to be registered.
struct Candidate {
    filename: String,
    path: PathBuf,
    /// Declared module name; `None` for untyped files.
    module: Option<String>,
    done: bool,
}

struct Loader<'a, E> {
    engine: &'a mut E,
    registry: &'a mut Registry,
    inventory: &'a FileInventory,
    config: &'a MibConfig,
    result: &'a mut LoadResult,
}

impl<E: MibEngine> Loader<'_, E> {
    fn run(mut self, requested: &[String]) {
        let config = self.config;
        for filename in requested {
            self.registry.track(filename);
        }

        self.preload_builtins();

        let (mut typed, mut untyped) = self.scan_tracked();

        for module in &config.core_order {
            if let Some(candidate) = typed.iter_mut().find(|c| c.module.as_ref() == Some(module)) {
                self.attempt(candidate, false);
            } else if !self.registry.is_loaded(module) {
                if let Some(path) = self.inventory.find_system_path(module) {
                    self.load_external(module, &path);
                }
            }
        }

        for candidate in untyped.iter_mut() {
            self.attempt(candidate, false);
        }

        let mut pending: Vec<&mut Candidate> = typed
            .iter_mut()
            .chain(untyped.iter_mut())
            .filter(|c| !c.done)
            .collect();

        let mut pass = 0;
        while !pending.is_empty() {
            pass += 1;
            let before = pending.len();
            for candidate in pending.iter_mut() {
                self.attempt(candidate, false);
            }
            pending.retain(|c| !c.done);
            debug!(pass, remaining = pending.len(), "Fix-point pass");
            if pending.len() == before {
                break;
            }
        }

        for candidate in pending {
            self.attempt(candidate, true);
        }
    }

    /// Register the engine's bundled modules and every file in the builtin
    /// directories. Failures are logged and otherwise ignored.
    fn preload_builtins(&mut self) {
        let config = self.config;
        for module in self.engine.preload_builtins() {
            self.registry.loaded_modules.insert(module);
        }

        for dir in &config.builtin_dirs {
            for path in collect_mib_paths(dir, config) {
                match self.engine.parse_file(&path) {
                    Ok(module) => {
                        if let Err(err) = self.engine.register_translations(&module) {
                            debug!(module = %module, error = %err, "Builtin translations failed");
                        }
                        self.registry.loaded_modules.insert(module);
                    }
                    Err(err) => {
                        debug!(path = %path.display(), error = %err, "Builtin failed to load");
                    }
                }
            }
        }
    }

    /// Header-scan tracked files into typed and untyped candidates.
    ///
    /// Files missing from disk or unreadable are reported right away.
    fn scan_tracked(&mut self) -> (Vec<Candidate>, Vec<Candidate>) {
        let files: Vec<String> = self.registry.tracked_files.iter().cloned().collect();
        let mut typed: Vec<Candidate> = Vec::new();
        let mut untyped = Vec::new();

        for scanned in self.inventory.scan(&files) {
            let module = match scanned.scan {
                FileScan::Typed(module) => Some(module),
                FileScan::Untyped => None,
                FileScan::Missing => {
                    self.record_error(&scanned.filename, "File not found");
                    continue;
                }
                FileScan::Unreadable(message) => {
                    self.record_error(&scanned.filename, &message);
                    continue;
                }
            };
            let candidate = Candidate {
                filename: scanned.filename,
                path: scanned.path,
                module,
                done: false,
            };
            if candidate.module.is_some() {
                // Two files declaring one module: the later file wins
                typed.retain(|c| c.module != candidate.module);
                typed.push(candidate);
            } else {
                untyped.push(candidate);
            }
        }
        (typed, untyped)
    }

    /// Try to register one candidate. Returns true once it is loaded.
    fn attempt(&mut self, candidate: &mut Candidate, record_failure: bool) -> bool {
        if candidate.done {
            return true;
        }
        if let Some(module) = &candidate.module {
            if self.registry.is_loaded(module) {
                candidate.done = true;
                return true;
            }
        }

        match self.engine.parse_file(&candidate.path) {
            Ok(module) => {
                if candidate.module.as_ref().is_some_and(|m| *m != module) {
                    debug!(
                        file = %candidate.filename,
                        declared = ?candidate.module,
                        registered = %module,
                        "Engine registered a different module name"
                    );
                }
                self.mark_loaded(&module, Some(&candidate.filename));
                candidate.done = true;
                true
            }
            Err(err) => {
                trace!(file = %candidate.filename, error = %err, "Load attempt failed");
                if record_failure {
                    self.record_error(&candidate.filename, &err.to_string());
                }
                false
            }
        }
    }

    /// Load a core-order module found in a system directory. It gets no
    /// file mapping and its failure is only logged.
    fn load_external(&mut self, module: &str, path: &Path) {
        match self.engine.parse_file(path) {
            Ok(registered) => self.mark_loaded(&registered, None),
            Err(err) => {
                debug!(module, path = %path.display(), error = %err, "Core module failed to load");
            }
        }
    }

    fn mark_loaded(&mut self, module: &str, filename: Option<&str>) {
        let newly_loaded = self.registry.loaded_modules.insert(module.to_string());
        if let Some(filename) = filename {
            self.registry.map_file(module, filename);
        }

        if let Err(err) = self.engine.register_translations(module) {
            debug!(module, error = %err, "Translations unavailable");
        }
        match self.engine.providers(module) {
            Ok(providers) => self.registry.cache_providers(module, providers),
            Err(err) => debug!(module, error = %err, "Providers unavailable"),
        }

        if newly_loaded {
            debug!(module, "Module loaded");
            self.result.loaded.push(module.to_string());
        }
    }

    fn record_error(&mut self, filename: &str, message: &str) {
        let message = classify_message(message, &self.config.limitation_marker);
        self.result
            .errors
            .push(format!("Error {}: {}", base_name(filename), message));
    }
}

/// Rewrite engine messages that signal a grammar the engine cannot handle.
pub(crate) fn classify_message<'m>(message: &'m str, marker: &str) -> &'m str {
    if !marker.is_empty() && message.contains(marker) {
        LIMITATION_MESSAGE
    } else {
        message
    }
}

pub(crate) fn base_name(filename: &str) -> &str {
    Path::new(filename)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(filename)
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown failure".to_string()
    }
}
