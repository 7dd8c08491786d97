//! Recursive-descent parser for MIB modules.
//!
//! Only the parts of the grammar that carry names, OIDs and types are parsed
//! in detail. Every other clause is skipped token-by-token, with bracketed
//! groups skipped as a unit, so unusual vendor clauses do not break a module.

use super::ast::{
    Definition, DefinitionKind, Import, OidComponent, OidValue, ParsedModule, TypeSyntax,
};
use super::error::ParseError;
use super::keywords as kw;
use super::lexer::{Lexer, Token, TokenKind, tokenize};
use crate::base::Position;

/// Parse a complete module from source text.
pub fn parse_module(source: &str) -> Result<ParsedModule, ParseError> {
    Parser::new(source).module()
}

/// Find the declared module name without parsing the body.
///
/// Looks for the first `<NAME> DEFINITIONS ::= BEGIN` sequence, skipping
/// comments, so a name mentioned in a comment is never picked up.
pub fn scan_module_name(source: &str) -> Option<String> {
    let mut window: [Option<Token<'_>>; 4] = [None; 4];
    for token in Lexer::new(source).filter(|t| !t.kind.is_trivia()) {
        window.rotate_left(1);
        window[3] = Some(token);
        if let [Some(name), Some(defs), Some(assign), Some(begin)] = window {
            if name.kind == TokenKind::Ident
                && (defs.text == kw::DEFINITIONS || defs.text == kw::PIB_DEFINITIONS)
                && assign.kind == TokenKind::Assign
                && begin.text == kw::BEGIN
            {
                return Some(name.text.to_string());
            }
        }
    }
    None
}

struct Parser<'a> {
    source: &'a str,
    tokens: Vec<Token<'a>>,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            source,
            tokens: tokenize(source),
            pos: 0,
        }
    }

    // =========================================================================
    // TOKEN ACCESS
    // =========================================================================

    fn peek(&self) -> Option<Token<'a>> {
        self.tokens.get(self.pos).copied()
    }

    fn peek_nth(&self, n: usize) -> Option<Token<'a>> {
        self.tokens.get(self.pos + n).copied()
    }

    fn at(&self, kind: TokenKind) -> bool {
        self.peek().is_some_and(|t| t.kind == kind)
    }

    fn at_word(&self, word: &str) -> bool {
        self.nth_is_word(0, word)
    }

    fn nth_is_word(&self, n: usize, word: &str) -> bool {
        self.peek_nth(n)
            .is_some_and(|t| t.kind == TokenKind::Ident && t.text == word)
    }

    fn advance(&mut self) -> Option<Token<'a>> {
        let token = self.peek();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn eat(&mut self, kind: TokenKind) -> bool {
        if self.at(kind) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn eat_word(&mut self, word: &str) -> bool {
        if self.at_word(word) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: TokenKind, expected: &str) -> Result<Token<'a>, ParseError> {
        match self.peek() {
            Some(token) if token.kind == kind => {
                self.pos += 1;
                Ok(token)
            }
            _ => Err(self.unexpected(expected)),
        }
    }

    fn expect_word(&mut self, word: &str) -> Result<(), ParseError> {
        if self.eat_word(word) {
            Ok(())
        } else {
            Err(self.unexpected(word))
        }
    }

    fn expect_ident(&mut self, expected: &str) -> Result<&'a str, ParseError> {
        self.expect(TokenKind::Ident, expected).map(|t| t.text)
    }

    fn unexpected(&self, expected: &str) -> ParseError {
        match self.peek() {
            Some(token) if token.kind == TokenKind::Error => ParseError::InvalidCharacter {
                text: token.text.to_string(),
                position: self.position(token),
            },
            Some(token) => ParseError::Unexpected {
                expected: expected.to_string(),
                found: token.text.to_string(),
                position: self.position(token),
            },
            None => ParseError::UnexpectedEof {
                expected: expected.to_string(),
            },
        }
    }

    fn position(&self, token: Token<'_>) -> Position {
        Position::from_offset(self.source, token.offset)
    }

    fn number<T: std::str::FromStr>(&self, token: Token<'_>) -> Result<T, ParseError> {
        token.text.parse().map_err(|_| ParseError::InvalidNumber {
            text: token.text.to_string(),
            position: self.position(token),
        })
    }

    /// Skip one token, or a whole bracketed group if one starts here.
    fn skip_item(&mut self) -> Result<(), ParseError> {
        let Some(first) = self.advance() else {
            return Err(self.unexpected("'::='"));
        };
        if !matches!(
            first.kind,
            TokenKind::LBrace | TokenKind::LParen | TokenKind::LBracket
        ) {
            return Ok(());
        }
        let mut depth = 1usize;
        while depth > 0 {
            match self.advance().map(|t| t.kind) {
                Some(TokenKind::LBrace | TokenKind::LParen | TokenKind::LBracket) => depth += 1,
                Some(TokenKind::RBrace | TokenKind::RParen | TokenKind::RBracket) => depth -= 1,
                Some(_) => {}
                None => return Err(self.unexpected("closing bracket")),
            }
        }
        Ok(())
    }

    fn quoted_string(&mut self) -> Result<String, ParseError> {
        let token = self.expect(TokenKind::QuotedString, "quoted string")?;
        Ok(unquote(token.text))
    }

    // =========================================================================
    // MODULE
    // =========================================================================

    fn module(mut self) -> Result<ParsedModule, ParseError> {
        let name = self.expect_ident("module name")?.to_string();
        if !(self.eat_word(kw::DEFINITIONS) || self.eat_word(kw::PIB_DEFINITIONS)) {
            return Err(self.unexpected(kw::DEFINITIONS));
        }
        // `DEFINITIONS IMPLICIT TAGS ::=` and similar tag defaults
        while self.at(TokenKind::Ident) {
            self.advance();
        }
        self.expect(TokenKind::Assign, "'::='")?;
        self.expect_word(kw::BEGIN)?;

        if self.eat_word(kw::EXPORTS) {
            while !self.eat(TokenKind::Semicolon) {
                self.skip_item()?;
            }
        }

        let imports = if self.at_word(kw::IMPORTS) {
            self.imports()?
        } else {
            Vec::new()
        };

        let mut definitions = Vec::new();
        loop {
            if self.eat_word(kw::END) {
                break;
            }
            if self.peek().is_none() {
                return Err(self.unexpected(kw::END));
            }
            if let Some(def) = self.definition()? {
                definitions.push(def);
            }
        }

        Ok(ParsedModule {
            name,
            imports,
            definitions,
        })
    }

    fn imports(&mut self) -> Result<Vec<Import>, ParseError> {
        self.expect_word(kw::IMPORTS)?;
        let mut imports = Vec::new();
        loop {
            if self.eat(TokenKind::Semicolon) {
                break;
            }
            let mut symbols = Vec::new();
            while !self.at_word(kw::FROM) {
                symbols.push(self.expect_ident("imported symbol or FROM")?.to_string());
                self.eat(TokenKind::Comma);
            }
            self.expect_word(kw::FROM)?;
            let from = self.expect_ident("module name after FROM")?.to_string();
            imports.push(Import { from, symbols });
        }
        Ok(imports)
    }

    // =========================================================================
    // DEFINITIONS
    // =========================================================================

    /// Parse one definition. Returns `None` for MACRO definitions.
    fn definition(&mut self) -> Result<Option<Definition>, ParseError> {
        if !self.at(TokenKind::Ident) {
            return Err(self.unexpected("definition"));
        }

        if self.nth_is_word(1, kw::OBJECT) && self.nth_is_word(2, kw::IDENTIFIER) {
            return self.value_assignment().map(Some);
        }
        if self.nth_is_word(1, kw::MACRO) {
            self.skip_macro()?;
            return Ok(None);
        }
        if self.nth_is_word(1, kw::TRAP_TYPE) {
            return self.trap_type().map(Some);
        }
        if let Some(kind) = self
            .peek_nth(1)
            .filter(|t| t.kind == TokenKind::Ident)
            .and_then(|t| kw::oid_macro_kind(t.text))
        {
            return self.macro_invocation(kind).map(Some);
        }
        if self.peek_nth(1).is_some_and(|t| t.kind == TokenKind::Assign) {
            return self.type_assignment().map(Some);
        }

        // Point the error at the token after the name
        self.advance();
        Err(self.unexpected("OBJECT IDENTIFIER, macro invocation or '::='"))
    }

    /// `name OBJECT IDENTIFIER ::= { ... }`
    fn value_assignment(&mut self) -> Result<Definition, ParseError> {
        let name = self.expect_ident("name")?;
        self.expect_word(kw::OBJECT)?;
        self.expect_word(kw::IDENTIFIER)?;
        self.expect(TokenKind::Assign, "'::='")?;

        let mut def = Definition::new(name, DefinitionKind::ValueAssignment);
        def.oid = Some(OidValue::Components(self.oid_components()?));
        Ok(def)
    }

    /// `name OBJECT-TYPE SYNTAX ... DESCRIPTION "..." ::= { ... }` and friends.
    fn macro_invocation(&mut self, kind: DefinitionKind) -> Result<Definition, ParseError> {
        let name = self.expect_ident("name")?;
        self.advance();

        let mut def = Definition::new(name, kind);
        let is_object = kind == DefinitionKind::ObjectType;

        while !self.at(TokenKind::Assign) {
            if is_object && def.syntax.is_none() && self.eat_word(kw::SYNTAX) {
                def.syntax = Some(self.type_syntax()?);
            } else if def.description.is_none() && self.eat_word(kw::DESCRIPTION) {
                def.description = Some(self.quoted_string()?);
            } else if def.status.is_none() && self.eat_word(kw::STATUS) {
                def.status = Some(self.expect_ident("status value")?.to_string());
            } else if is_object
                && def.access.is_none()
                && (self.eat_word(kw::MAX_ACCESS) || self.eat_word(kw::ACCESS))
            {
                def.access = Some(self.expect_ident("access value")?.to_string());
            } else {
                self.skip_item()?;
            }
        }
        self.expect(TokenKind::Assign, "'::='")?;
        def.oid = Some(OidValue::Components(self.oid_components()?));
        Ok(def)
    }

    /// SMIv1 `name TRAP-TYPE ENTERPRISE e ... ::= n`
    fn trap_type(&mut self) -> Result<Definition, ParseError> {
        let name = self.expect_ident("name")?;
        self.expect_word(kw::TRAP_TYPE)?;

        let mut def = Definition::new(name, DefinitionKind::TrapType);
        let mut enterprise = None;
        while !self.at(TokenKind::Assign) {
            if enterprise.is_none() && self.eat_word(kw::ENTERPRISE) {
                enterprise = Some(self.expect_ident("enterprise")?.to_string());
            } else if def.description.is_none() && self.eat_word(kw::DESCRIPTION) {
                def.description = Some(self.quoted_string()?);
            } else {
                self.skip_item()?;
            }
        }
        self.expect(TokenKind::Assign, "'::='")?;
        let token = self.expect(TokenKind::Number, "trap number")?;
        let number = self.number(token)?;

        let Some(enterprise) = enterprise else {
            return Err(ParseError::Unexpected {
                expected: kw::ENTERPRISE.to_string(),
                found: token.text.to_string(),
                position: self.position(token),
            });
        };
        def.oid = Some(OidValue::Trap { enterprise, number });
        Ok(def)
    }

    /// `Name ::= TEXTUAL-CONVENTION ... SYNTAX t` or `Name ::= t`
    fn type_assignment(&mut self) -> Result<Definition, ParseError> {
        let name = self.expect_ident("type name")?;
        self.expect(TokenKind::Assign, "'::='")?;

        if !self.eat_word(kw::TEXTUAL_CONVENTION) {
            let mut def = Definition::new(name, DefinitionKind::TypeAssignment);
            def.syntax = Some(self.type_syntax()?);
            return Ok(def);
        }

        let mut def = Definition::new(name, DefinitionKind::TextualConvention);
        while !self.eat_word(kw::SYNTAX) {
            if def.description.is_none() && self.eat_word(kw::DESCRIPTION) {
                def.description = Some(self.quoted_string()?);
            } else if def.status.is_none() && self.eat_word(kw::STATUS) {
                def.status = Some(self.expect_ident("status value")?.to_string());
            } else if self.peek().is_none() {
                return Err(self.unexpected(kw::SYNTAX));
            } else {
                self.skip_item()?;
            }
        }
        def.syntax = Some(self.type_syntax()?);
        Ok(def)
    }

    /// `NAME MACRO ::= BEGIN ... END`; the body is not interpreted.
    fn skip_macro(&mut self) -> Result<(), ParseError> {
        self.advance();
        self.expect_word(kw::MACRO)?;
        loop {
            match self.advance() {
                Some(t) if t.kind == TokenKind::Ident && t.text == kw::END => return Ok(()),
                Some(_) => {}
                None => return Err(self.unexpected("END of MACRO")),
            }
        }
    }

    // =========================================================================
    // TYPES AND VALUES
    // =========================================================================

    fn type_syntax(&mut self) -> Result<TypeSyntax, ParseError> {
        // `[APPLICATION 1] IMPLICIT`
        if self.at(TokenKind::LBracket) {
            self.skip_item()?;
        }
        if !self.eat_word(kw::IMPLICIT) {
            self.eat_word(kw::EXPLICIT);
        }

        let first = self.expect_ident("type")?;
        let base = match first {
            kw::OCTET => {
                self.expect_word(kw::STRING)?;
                "OCTET STRING".to_string()
            }
            kw::OBJECT => {
                self.expect_word(kw::IDENTIFIER)?;
                "OBJECT IDENTIFIER".to_string()
            }
            kw::SEQUENCE if self.eat_word(kw::OF) => {
                format!("SEQUENCE OF {}", self.expect_ident("row type")?)
            }
            kw::SEQUENCE | kw::CHOICE => {
                if self.at(TokenKind::LBrace) {
                    self.skip_item()?;
                }
                first.to_string()
            }
            _ if self.at(TokenKind::Dot) => {
                // `Module.Type`
                self.advance();
                self.expect_ident("type name")?.to_string()
            }
            other => other.to_string(),
        };

        let named_numbers = if self.at(TokenKind::LBrace) && base != kw::SEQUENCE {
            Some(self.named_numbers()?)
        } else {
            None
        };

        // Size and range constraints
        while self.at(TokenKind::LParen) {
            self.skip_item()?;
        }

        Ok(TypeSyntax {
            base,
            named_numbers,
        })
    }

    /// `{ up(1), down(2) }`
    fn named_numbers(&mut self) -> Result<Vec<(String, i64)>, ParseError> {
        self.expect(TokenKind::LBrace, "'{'")?;
        let mut values = Vec::new();
        loop {
            let label = self.expect_ident("enumeration label")?.to_string();
            self.expect(TokenKind::LParen, "'('")?;
            let token = match self.peek() {
                Some(t) if matches!(t.kind, TokenKind::Number | TokenKind::NegativeNumber) => {
                    self.pos += 1;
                    t
                }
                _ => return Err(self.unexpected("number")),
            };
            values.push((label, self.number(token)?));
            self.expect(TokenKind::RParen, "')'")?;
            if !self.eat(TokenKind::Comma) {
                break;
            }
        }
        self.expect(TokenKind::RBrace, "'}'")?;
        Ok(values)
    }

    /// `{ iso(1) org(3) dod 6 internet 1 }`, `{ mib-2 1 }`, `{ RFC1213-MIB.system 1 }`
    fn oid_components(&mut self) -> Result<Vec<OidComponent>, ParseError> {
        self.expect(TokenKind::LBrace, "'{'")?;
        let mut components = Vec::new();
        while !self.eat(TokenKind::RBrace) {
            let token = match self.peek() {
                Some(t) => t,
                None => return Err(self.unexpected("'}'")),
            };
            match token.kind {
                TokenKind::Number => {
                    self.pos += 1;
                    components.push(OidComponent::Number(self.number(token)?));
                }
                TokenKind::Ident => {
                    self.pos += 1;
                    let mut name = token.text.to_string();
                    let mut module = None;
                    if self.eat(TokenKind::Dot) {
                        module = Some(name);
                        name = self.expect_ident("symbol after '.'")?.to_string();
                    }
                    if self.eat(TokenKind::LParen) {
                        let num = self.expect(TokenKind::Number, "number")?;
                        let value = self.number(num)?;
                        self.expect(TokenKind::RParen, "')'")?;
                        components.push(OidComponent::NamedNumber(name, value));
                    } else if let Some(module) = module {
                        components.push(OidComponent::Qualified { module, name });
                    } else {
                        components.push(OidComponent::Name(name));
                    }
                }
                _ => return Err(self.unexpected("OID component")),
            }
        }
        Ok(components)
    }
}

/// Strip quotes and normalize the indentation MIB authors put inside
/// multi-line DESCRIPTION strings.
fn unquote(text: &str) -> String {
    let inner = text
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(text);
    inner
        .lines()
        .map(str::trim)
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}
