//! In-memory module store.
//!
//! Registration resolves every OID value of a module to numeric arcs up
//! front. Values may reference definitions later in the same file, so
//! resolution repeats over the pending definitions until a pass makes no
//! progress.

use super::base_modules::BASE_MODULES;
use super::error::StoreError;
use super::symbols::{Provider, ProviderKind, ProviderList, SymbolEntry, SymbolTable, Syntax};
use super::{MibEngine, TranslateMode};
use crate::base::constants::OID_ROOTS;
use crate::base::{format_arcs, is_numeric_oid, normalize_oid, parse_arcs, split_instance};
use crate::parser::{Definition, OidComponent, OidValue, ParsedModule, TypeSyntax, parse_module};
use indexmap::IndexMap;
use rustc_hash::{FxHashMap, FxHashSet};
use std::path::Path;
use tracing::debug;

/// Limit on type-reference chains followed when resolving a SYNTAX.
const MAX_TYPE_DEPTH: usize = 8;

/// Base types that are not references to other definitions.
fn is_primitive(type_name: &str) -> bool {
    matches!(
        type_name,
        "INTEGER" | "OCTET STRING" | "OBJECT IDENTIFIER" | "BITS" | "SEQUENCE" | "CHOICE" | "NULL"
    ) || type_name.starts_with("SEQUENCE OF ")
}

fn parent_arcs(arcs: &[u32]) -> Option<&[u32]> {
    arcs.split_last().map(|(_, parent)| parent)
}

/// Registered modules plus the translation index.
#[derive(Debug)]
pub struct ModuleStore {
    modules: IndexMap<String, SymbolTable>,
    /// Arcs → (module, symbol); first registration wins.
    by_oid: FxHashMap<Vec<u32>, (String, String)>,
    /// Symbol → (module, arcs); first registration wins.
    by_name: FxHashMap<String, (String, Vec<u32>)>,
    base_modules: bool,
}

impl Default for ModuleStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ModuleStore {
    /// A store that registers the embedded SMI base modules on preload.
    pub fn new() -> Self {
        Self::with_base_modules(true)
    }

    pub fn with_base_modules(base_modules: bool) -> Self {
        Self {
            modules: IndexMap::new(),
            by_oid: FxHashMap::default(),
            by_name: FxHashMap::default(),
            base_modules,
        }
    }

    pub fn contains_module(&self, name: &str) -> bool {
        self.modules.contains_key(name)
    }

    /// Parse and register a module from source text.
    pub fn load_source(&mut self, source: &str) -> Result<String, StoreError> {
        let parsed = parse_module(source)?;
        self.register(parsed)
    }

    fn register(&mut self, parsed: ParsedModule) -> Result<String, StoreError> {
        for import in parsed.imported_modules() {
            if !self.modules.contains_key(import) {
                return Err(StoreError::UnknownImport {
                    module: parsed.name.clone(),
                    import: import.to_string(),
                });
            }
        }

        let mut ctx = ResolveContext::new(&parsed);
        self.resolve_oids(&mut ctx)?;

        let mut table = SymbolTable::new();
        for def in &parsed.definitions {
            table.insert(SymbolEntry {
                name: def.name.clone(),
                kind: def.kind,
                oid: ctx.resolved.get(def.name.as_str()).map(|arcs| format_arcs(arcs)),
                description: def.description.clone(),
                syntax: def
                    .syntax
                    .as_ref()
                    .map(|syntax| self.resolve_syntax(&ctx, syntax, 0)),
                status: def.status.clone(),
                access: def.access.clone(),
            });
        }

        let name = parsed.name.clone();
        if self.modules.contains_key(&name) {
            debug!(module = %name, "Replacing registered module");
            self.forget_translations(&name);
        }
        debug!(module = %name, symbols = table.len(), "Registered module");
        self.modules.insert(name.clone(), table);
        Ok(name)
    }

    fn forget_translations(&mut self, module: &str) {
        self.by_oid.retain(|_, (owner, _)| owner != module);
        self.by_name.retain(|_, (owner, _)| owner != module);
    }

    // =========================================================================
    // OID RESOLUTION
    // =========================================================================

    fn resolve_oids(&self, ctx: &mut ResolveContext<'_>) -> Result<(), StoreError> {
        let mut pending: Vec<&Definition> = ctx
            .parsed
            .definitions
            .iter()
            .filter(|def| def.oid.is_some())
            .collect();

        while !pending.is_empty() {
            let before = pending.len();
            let mut unresolved = Vec::new();
            for def in pending {
                match self.resolve_value(ctx, def) {
                    Some(arcs) => {
                        ctx.resolved.insert(def.name.as_str(), arcs);
                    }
                    None => unresolved.push(def),
                }
            }
            pending = unresolved;
            if pending.len() == before {
                break;
            }
        }

        match pending.first() {
            Some(def) => Err(StoreError::UnresolvedOid {
                module: ctx.parsed.name.clone(),
                symbol: def.name.clone(),
                parent: parent_name(def),
            }),
            None => Ok(()),
        }
    }

    fn resolve_value(&self, ctx: &ResolveContext<'_>, def: &Definition) -> Option<Vec<u32>> {
        match def.oid.as_ref()? {
            OidValue::Trap { enterprise, number } => {
                let mut arcs = self.resolve_name(ctx, enterprise)?;
                arcs.extend([0, *number]);
                Some(arcs)
            }
            OidValue::Components(components) => {
                let (first, rest) = components.split_first()?;
                let mut arcs = match first {
                    OidComponent::Number(n) | OidComponent::NamedNumber(_, n) => vec![*n],
                    OidComponent::Name(name) => self.resolve_name(ctx, name)?,
                    OidComponent::Qualified { module, name } if *module == ctx.parsed.name => {
                        self.resolve_name(ctx, name)?
                    }
                    OidComponent::Qualified { module, name } => self.symbol_arcs(module, name)?,
                };
                for component in rest {
                    match component {
                        OidComponent::Number(n) | OidComponent::NamedNumber(_, n) => {
                            arcs.push(*n)
                        }
                        _ => return None,
                    }
                }
                Some(arcs)
            }
        }
    }

    /// Resolve a parent name: local definitions, then imports, then the
    /// well-known roots, then any registered module.
    fn resolve_name(&self, ctx: &ResolveContext<'_>, name: &str) -> Option<Vec<u32>> {
        if let Some(arcs) = ctx.resolved.get(name) {
            return Some(arcs.clone());
        }
        if ctx.declared.contains(name) {
            // Defined here but not resolved yet
            return None;
        }
        if let Some(arcs) = ctx
            .parsed
            .import_source(name)
            .and_then(|from| self.symbol_arcs(from, name))
        {
            return Some(arcs);
        }
        if let Some((_, arc)) = OID_ROOTS.iter().find(|(root, _)| *root == name) {
            return Some(vec![*arc]);
        }
        self.modules
            .values()
            .find_map(|table| table.get(name)?.oid.as_deref().and_then(parse_arcs))
    }

    fn symbol_arcs(&self, module: &str, name: &str) -> Option<Vec<u32>> {
        self.modules
            .get(module)?
            .get(name)?
            .oid
            .as_deref()
            .and_then(parse_arcs)
    }

    // =========================================================================
    // TYPE RESOLUTION
    // =========================================================================

    fn resolve_syntax(&self, ctx: &ResolveContext<'_>, syntax: &TypeSyntax, depth: usize) -> Syntax {
        let mut resolved = Syntax {
            type_name: syntax.base.clone(),
            named_numbers: syntax
                .named_numbers
                .as_ref()
                .map(|values| values.iter().map(|(label, n)| (*n, label.clone())).collect()),
            nested: Vec::new(),
        };
        if depth < MAX_TYPE_DEPTH && !is_primitive(&syntax.base) {
            if let Some(mut referenced) = self.lookup_type(ctx, &syntax.base, depth + 1) {
                let inner = std::mem::take(&mut referenced.nested);
                resolved.nested.push(referenced);
                resolved.nested.extend(inner);
            }
        }
        resolved
    }

    fn lookup_type(&self, ctx: &ResolveContext<'_>, name: &str, depth: usize) -> Option<Syntax> {
        if let Some(local) = ctx.types.get(name) {
            return Some(self.resolve_syntax(ctx, local, depth));
        }
        let registered = |table: &SymbolTable| {
            table
                .get(name)
                .filter(|entry| entry.kind.is_type())
                .and_then(|entry| entry.syntax.clone())
        };
        if let Some(syntax) = ctx
            .parsed
            .import_source(name)
            .and_then(|from| self.modules.get(from))
            .and_then(|table| registered(table))
        {
            return Some(syntax);
        }
        self.modules.values().find_map(|table| registered(table))
    }
}

impl MibEngine for ModuleStore {
    fn parse_file(&mut self, path: &Path) -> Result<String, StoreError> {
        let source = std::fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.load_source(&source)
    }

    fn translate(&self, identifier: &str, mode: TranslateMode) -> Option<String> {
        let arcs = self.to_arcs(identifier.trim())?;
        match mode {
            TranslateMode::Numeric => Some(format_arcs(&arcs)),
            TranslateMode::Module => self.to_module_name(&arcs),
        }
    }

    fn module_symbols(&self, module: &str) -> Option<&SymbolTable> {
        self.modules.get(module)
    }

    fn providers(&self, module: &str) -> Result<ProviderList, StoreError> {
        let table = self
            .modules
            .get(module)
            .ok_or_else(|| StoreError::UnknownModule(module.to_string()))?;

        let objects: Vec<(&SymbolEntry, Vec<u32>)> = table
            .iter()
            .filter(|entry| entry.is_object_type())
            .filter_map(|entry| Some((entry, entry.oid.as_deref().and_then(parse_arcs)?)))
            .collect();

        let tables: FxHashSet<&[u32]> = objects
            .iter()
            .filter(|(entry, _)| {
                entry
                    .syntax
                    .as_ref()
                    .is_some_and(|s| s.type_name.starts_with("SEQUENCE OF "))
            })
            .map(|(_, arcs)| arcs.as_slice())
            .collect();
        let rows: FxHashSet<&[u32]> = objects
            .iter()
            .map(|(_, arcs)| arcs.as_slice())
            .filter(|arcs| parent_arcs(arcs).is_some_and(|p| tables.contains(&p)))
            .collect();

        Ok(objects
            .iter()
            .map(|(entry, arcs)| {
                let arcs = arcs.as_slice();
                let kind = if tables.contains(&arcs) {
                    ProviderKind::Table
                } else if rows.contains(&arcs) {
                    ProviderKind::Row
                } else if parent_arcs(arcs).is_some_and(|p| rows.contains(&p)) {
                    ProviderKind::Column
                } else {
                    ProviderKind::Scalar
                };
                Provider {
                    name: entry.name.clone(),
                    oid: format_arcs(arcs),
                    kind,
                }
            })
            .collect())
    }

    fn register_translations(&mut self, module: &str) -> Result<(), StoreError> {
        let table = self
            .modules
            .get(module)
            .ok_or_else(|| StoreError::UnknownModule(module.to_string()))?;
        for entry in table.iter() {
            let Some(arcs) = entry.oid.as_deref().and_then(parse_arcs) else {
                continue;
            };
            self.by_oid
                .entry(arcs.clone())
                .or_insert_with(|| (module.to_string(), entry.name.clone()));
            self.by_name
                .entry(entry.name.clone())
                .or_insert_with(|| (module.to_string(), arcs));
        }
        debug!(module, "Registered translations");
        Ok(())
    }

    fn preload_builtins(&mut self) -> Vec<String> {
        if !self.base_modules {
            return Vec::new();
        }
        let mut loaded = Vec::new();
        for (name, source) in BASE_MODULES {
            if self.contains_module(name) {
                loaded.push(name.to_string());
                continue;
            }
            match self.load_source(source) {
                Ok(module) => {
                    if let Err(err) = self.register_translations(&module) {
                        debug!(module = %module, error = %err, "Base module translations failed");
                    }
                    loaded.push(module);
                }
                Err(err) => debug!(module = name, error = %err, "Base module failed to load"),
            }
        }
        loaded
    }
}

impl ModuleStore {
    /// Numeric arcs for a numeric path, `symbol[.suffix]` or
    /// `MODULE::symbol[.suffix]`.
    fn to_arcs(&self, identifier: &str) -> Option<Vec<u32>> {
        let identifier = normalize_oid(identifier);
        if is_numeric_oid(identifier) {
            return parse_arcs(identifier);
        }
        let (module, symbol) = match identifier.split_once("::") {
            Some((module, symbol)) => (Some(module), symbol),
            None => (None, identifier),
        };
        let (name, suffix) = split_instance(symbol);
        let mut arcs = match module {
            Some(module) => self.symbol_arcs(module, name)?,
            None => self.by_name.get(name)?.1.clone(),
        };
        if let Some(suffix) = suffix {
            arcs.extend(parse_arcs(suffix)?);
        }
        Some(arcs)
    }

    /// Longest registered prefix of `arcs`, as `MODULE::symbol[.suffix]`.
    fn to_module_name(&self, arcs: &[u32]) -> Option<String> {
        (1..=arcs.len()).rev().find_map(|len| {
            let (module, name) = self.by_oid.get(&arcs[..len])?;
            let mut out = format!("{module}::{name}");
            if len < arcs.len() {
                out.push('.');
                out.push_str(&format_arcs(&arcs[len..]));
            }
            Some(out)
        })
    }
}

/// Name of the parent an OID value hangs off, for error messages.
fn parent_name(def: &Definition) -> String {
    match &def.oid {
        Some(OidValue::Trap { enterprise, .. }) => enterprise.clone(),
        Some(OidValue::Components(components)) => components
            .iter()
            .find_map(|component| match component {
                OidComponent::Name(name) | OidComponent::NamedNumber(name, _) => Some(name.clone()),
                OidComponent::Qualified { module, name } => Some(format!("{module}.{name}")),
                OidComponent::Number(_) => None,
            })
            .unwrap_or_default(),
        None => String::new(),
    }
}

/// Per-registration lookup state.
struct ResolveContext<'p> {
    parsed: &'p ParsedModule,
    /// Local names that carry an OID value.
    declared: FxHashSet<&'p str>,
    /// Local type definitions.
    types: FxHashMap<&'p str, &'p TypeSyntax>,
    resolved: FxHashMap<&'p str, Vec<u32>>,
}

impl<'p> ResolveContext<'p> {
    fn new(parsed: &'p ParsedModule) -> Self {
        let declared = parsed
            .definitions
            .iter()
            .filter(|def| def.oid.is_some())
            .map(|def| def.name.as_str())
            .collect();
        let types = parsed
            .definitions
            .iter()
            .filter(|def| def.kind.is_type())
            .filter_map(|def| Some((def.name.as_str(), def.syntax.as_ref()?)))
            .collect();
        Self {
            parsed,
            declared,
            types,
            resolved: FxHashMap::default(),
        }
    }
}
