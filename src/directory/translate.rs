//! Numeric and symbolic lookups against the live engine.

use super::types::LookupResult;
use crate::base::{is_numeric_oid, normalize_oid, split_instance};
use crate::store::{EnumMap, MibEngine, TranslateMode};

/// Describe a numeric OID, instance suffix and all.
///
/// A miss is `None`, never an error.
pub(crate) fn lookup_oid<E: MibEngine>(engine: &E, oid: &str) -> Option<LookupResult> {
    let translated = engine.translate(oid, TranslateMode::Module)?;
    let (module, symbol) = translated.split_once("::")?;
    let (name, _instance) = split_instance(symbol);

    let entry = engine
        .module_symbols(module)
        .and_then(|symbols| symbols.get(name));
    let description = entry.and_then(|e| e.description.clone());
    let enums = entry
        .and_then(|e| e.syntax.as_ref())
        .and_then(|syntax| syntax.enumeration())
        .cloned();

    Some(LookupResult {
        name: name.to_string(),
        module: module.to_string(),
        oid: oid.to_string(),
        description,
        enums,
    })
}

/// Numeric form of `input`, or `input` itself when it is already numeric
/// or cannot be translated.
pub(crate) fn resolve_symbol<E: MibEngine>(engine: &E, input: &str) -> String {
    if is_numeric_oid(input) {
        return input.to_string();
    }
    match engine.translate(input, TranslateMode::Numeric) {
        Some(numeric) if is_numeric_oid(normalize_oid(&numeric)) => {
            normalize_oid(&numeric).to_string()
        }
        _ => input.to_string(),
    }
}

/// `"<value> (<label>)"` when `value` is an enumerated integer.
pub fn enrich_value(value: &str, enums: &EnumMap) -> String {
    let label = value
        .trim()
        .parse::<i64>()
        .ok()
        .and_then(|number| enums.get(&number));
    match label {
        Some(label) => format!("{value} ({label})"),
        None => value.to_string(),
    }
}
