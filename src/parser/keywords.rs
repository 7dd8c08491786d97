//! MIB keywords recognized by the module parser.

use super::ast::DefinitionKind;

pub const DEFINITIONS: &str = "DEFINITIONS";
pub const PIB_DEFINITIONS: &str = "PIB-DEFINITIONS";
pub const BEGIN: &str = "BEGIN";
pub const END: &str = "END";
pub const IMPORTS: &str = "IMPORTS";
pub const EXPORTS: &str = "EXPORTS";
pub const FROM: &str = "FROM";
pub const MACRO: &str = "MACRO";
pub const OBJECT: &str = "OBJECT";
pub const IDENTIFIER: &str = "IDENTIFIER";
pub const OCTET: &str = "OCTET";
pub const STRING: &str = "STRING";
pub const SEQUENCE: &str = "SEQUENCE";
pub const CHOICE: &str = "CHOICE";
pub const OF: &str = "OF";
pub const IMPLICIT: &str = "IMPLICIT";
pub const EXPLICIT: &str = "EXPLICIT";
pub const SYNTAX: &str = "SYNTAX";
pub const DESCRIPTION: &str = "DESCRIPTION";
pub const STATUS: &str = "STATUS";
pub const ACCESS: &str = "ACCESS";
pub const MAX_ACCESS: &str = "MAX-ACCESS";
pub const ENTERPRISE: &str = "ENTERPRISE";
pub const TEXTUAL_CONVENTION: &str = "TEXTUAL-CONVENTION";
pub const TRAP_TYPE: &str = "TRAP-TYPE";

/// Macro keywords whose invocations end in `::= { oid }`.
pub fn oid_macro_kind(word: &str) -> Option<DefinitionKind> {
    match word {
        "OBJECT-TYPE" => Some(DefinitionKind::ObjectType),
        "OBJECT-IDENTITY" => Some(DefinitionKind::ObjectIdentity),
        "MODULE-IDENTITY" => Some(DefinitionKind::ModuleIdentity),
        "NOTIFICATION-TYPE" => Some(DefinitionKind::NotificationType),
        "OBJECT-GROUP" => Some(DefinitionKind::ObjectGroup),
        "NOTIFICATION-GROUP" => Some(DefinitionKind::NotificationGroup),
        "MODULE-COMPLIANCE" => Some(DefinitionKind::ModuleCompliance),
        "AGENT-CAPABILITIES" => Some(DefinitionKind::AgentCapabilities),
        _ => None,
    }
}
