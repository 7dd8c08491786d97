//! Domain constants shared across layers.

/// File extensions recognized as MIB definition files.
pub const MIB_EXTENSIONS: &[&str] = &["mib", "txt", "my"];

/// Default managed directory for tracked files.
pub const DEFAULT_MIBS_DIR: &str = "mibs";

/// Host directories commonly holding distribution-installed MIBs.
pub const DEFAULT_SYSTEM_DIRS: &[&str] = &[
    "/usr/share/snmp/mibs",
    "/var/lib/mibs/ietf",
    "/var/lib/mibs/iana",
];

/// Foundational modules attempted before anything else.
pub const DEFAULT_CORE_ORDER: &[&str] = &[
    "SNMPv2-SMI",
    "RFC1155-SMI",
    "RFC-1212",
    "RFC-1215",
    "SNMPv2-TC",
    "SNMPv2-CONF",
    "SNMPv2-MIB",
    "RFC1213-MIB",
    "IF-MIB",
    "IP-MIB",
];

/// Substring of parser messages that signals a grammar the engine cannot handle.
pub const DEFAULT_LIMITATION_MARKER: &str = "TYPE NOTATION";

/// Replacement text for messages containing the limitation marker.
pub const LIMITATION_MESSAGE: &str =
    "Parser Limitation: MIB too complex or has unresolved dependencies.";

/// Name and numeric path of the tree root.
pub const ROOT_NAME: &str = "iso";
pub const ROOT_OID: &str = "1";

/// Well-known OID roots that need no definition.
pub const OID_ROOTS: &[(&str, u32)] = &[("ccitt", 0), ("iso", 1), ("joint-iso-ccitt", 2)];
