//! Scans source files for `crate::<module>` references.

use std::fs;
use std::path::Path;
use walkdir::WalkDir;

const LAYERS: &[&str] = &["base", "parser", "store", "project", "directory", "config"];

/// Every `crate::<layer>` reference under `dir` that is not in `allowed`,
/// formatted as `path:line: text`.
pub fn collect_layer_violations(dir: &Path, allowed: &[&str]) -> Vec<String> {
    let own = dir.file_name().and_then(|n| n.to_str()).unwrap_or_default();
    let mut violations = Vec::new();

    for entry in WalkDir::new(dir).into_iter().filter_map(Result::ok) {
        let path = entry.path();
        if !is_production_source(path) {
            continue;
        }
        let Ok(content) = fs::read_to_string(path) else {
            continue;
        };
        for (index, line) in content.lines().enumerate() {
            let trimmed = line.trim_start();
            if trimmed.starts_with("//") {
                continue;
            }
            for layer in referenced_layers(trimmed) {
                if layer != own && !allowed.contains(&layer) {
                    violations.push(format!("{}:{}: {}", path.display(), index + 1, trimmed));
                }
            }
        }
    }
    violations
}

fn is_production_source(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "rs")
        && !path
            .components()
            .any(|c| c.as_os_str() == "tests" || c.as_os_str() == "tests.rs")
}

fn referenced_layers(line: &str) -> Vec<&'static str> {
    LAYERS
        .iter()
        .copied()
        .filter(|layer| {
            line.contains(&format!("crate::{layer}::"))
                || line.contains(&format!("crate::{layer};"))
                || line.contains(&format!("crate::{layer}{{"))
        })
        .collect()
}
