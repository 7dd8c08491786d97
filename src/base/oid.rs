//! Helpers for dotted numeric object identifiers.
//!
//! OIDs travel through the crate as plain strings (`"1.3.6.1.2.1.1.1"`),
//! the form callers send and receive. These helpers validate and split them.

/// Returns true if `s` is a dotted numeric path (`^\d+(\.\d+)*$`).
pub fn is_numeric_oid(s: &str) -> bool {
    !s.is_empty()
        && s.split('.')
            .all(|seg| !seg.is_empty() && seg.bytes().all(|b| b.is_ascii_digit()))
}

/// Strip the leading dot some tools put in front of absolute OIDs.
pub fn normalize_oid(s: &str) -> &str {
    s.strip_prefix('.').unwrap_or(s)
}

/// Split a numeric OID into arcs.
///
/// Returns `None` if any segment is not a valid `u32` arc.
pub fn parse_arcs(oid: &str) -> Option<Vec<u32>> {
    let oid = normalize_oid(oid);
    if oid.is_empty() {
        return None;
    }
    oid.split('.').map(|seg| seg.parse::<u32>().ok()).collect()
}

/// Join arcs back into dotted form.
pub fn format_arcs(arcs: &[u32]) -> String {
    let mut out = String::with_capacity(arcs.len() * 3);
    for (i, arc) in arcs.iter().enumerate() {
        if i > 0 {
            out.push('.');
        }
        out.push_str(&arc.to_string());
    }
    out
}

/// Split `"sysDescr.0"` into the base symbol and its instance suffix.
///
/// Symbol names never contain dots, so everything after the first dot is
/// the instance part.
pub fn split_instance(symbol: &str) -> (&str, Option<&str>) {
    match symbol.split_once('.') {
        Some((base, suffix)) => (base, Some(suffix)),
        None => (symbol, None),
    }
}
