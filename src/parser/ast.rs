//! Parsed form of a MIB module.
//!
//! This is deliberately shallow: it keeps what the store needs to register
//! symbols (names, OID values, syntax, descriptions) and drops the rest.

/// One parsed `<NAME> DEFINITIONS ::= BEGIN ... END` module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedModule {
    pub name: String,
    pub imports: Vec<Import>,
    pub definitions: Vec<Definition>,
}

impl ParsedModule {
    /// Modules named in `FROM` clauses, in order, without duplicates.
    pub fn imported_modules(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for import in &self.imports {
            if !seen.contains(&import.from.as_str()) {
                seen.push(import.from.as_str());
            }
        }
        seen
    }

    /// The module `symbol` is imported from, if any.
    pub fn import_source(&self, symbol: &str) -> Option<&str> {
        self.imports
            .iter()
            .find(|import| import.symbols.iter().any(|s| s == symbol))
            .map(|import| import.from.as_str())
    }
}

/// `sym1, sym2 FROM MODULE`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Import {
    pub from: String,
    pub symbols: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DefinitionKind {
    ValueAssignment,
    ObjectType,
    ObjectIdentity,
    ModuleIdentity,
    NotificationType,
    ObjectGroup,
    NotificationGroup,
    ModuleCompliance,
    AgentCapabilities,
    TrapType,
    TextualConvention,
    TypeAssignment,
}

impl DefinitionKind {
    /// Type definitions carry a syntax but no OID.
    pub fn is_type(self) -> bool {
        matches!(
            self,
            DefinitionKind::TextualConvention | DefinitionKind::TypeAssignment
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definition {
    pub name: String,
    pub kind: DefinitionKind,
    pub syntax: Option<TypeSyntax>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub access: Option<String>,
    pub oid: Option<OidValue>,
}

impl Definition {
    pub(crate) fn new(name: impl Into<String>, kind: DefinitionKind) -> Self {
        Self {
            name: name.into(),
            kind,
            syntax: None,
            description: None,
            status: None,
            access: None,
            oid: None,
        }
    }
}

/// The right-hand side of an OID-valued definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OidValue {
    /// `{ parent 1 2 }`
    Components(Vec<OidComponent>),
    /// SMIv1 `TRAP-TYPE ENTERPRISE e ... ::= n`, registered as `e.0.n`.
    Trap { enterprise: String, number: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OidComponent {
    /// `internet`
    Name(String),
    /// `6`
    Number(u32),
    /// `dod(6)` or `Module.dod(6)`; the number is authoritative.
    NamedNumber(String, u32),
    /// `Module.name`
    Qualified { module: String, name: String },
}

/// A SYNTAX clause or the right-hand side of a type assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeSyntax {
    /// `INTEGER`, `OCTET STRING`, `SEQUENCE OF IfEntry`, `DisplayString`, ...
    pub base: String,
    /// `{ up(1), down(2) }` labels in declaration order.
    pub named_numbers: Option<Vec<(String, i64)>>,
}

impl TypeSyntax {
    pub fn named(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            named_numbers: None,
        }
    }

    /// The row type of a `SEQUENCE OF` syntax.
    pub fn sequence_of(&self) -> Option<&str> {
        self.base.strip_prefix("SEQUENCE OF ")
    }
}
