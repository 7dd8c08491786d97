//! Project layer: the managed MIB directory on disk.
//!
//! Nothing here parses module bodies. The directory service asks the
//! inventory which files exist and what modules they declare, then hands
//! paths to the engine.

pub mod file_loader;

pub use file_loader::{FileInventory, FileScan, ScannedFile, collect_mib_paths, read_module_name};
