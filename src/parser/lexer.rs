//! Logos-based lexer for SMIv1/SMIv2 MIB modules
//!
//! Fast tokenization using the logos crate. Keywords are lexed as plain
//! identifiers and classified by the parser (see [`keywords`](super::keywords)),
//! since MIB keywords such as `OBJECT-TYPE` share the identifier alphabet.

use logos::Logos;

/// A token with its kind, text, and byte offset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub offset: usize,
}

/// Token kinds produced by [`Lexer`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Whitespace,
    Comment,
    Ident,
    Number,
    NegativeNumber,
    QuotedString,
    BinString,
    HexString,
    /// `::=`
    Assign,
    LBrace,
    RBrace,
    LParen,
    RParen,
    LBracket,
    RBracket,
    Comma,
    Semicolon,
    Dot,
    DotDot,
    Pipe,
    Error,
}

impl TokenKind {
    pub fn is_trivia(self) -> bool {
        matches!(self, TokenKind::Whitespace | TokenKind::Comment)
    }
}

/// Lexer wrapping the logos-generated tokenizer
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, LogosToken>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: LogosToken::lexer(input),
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let logos_token = self.inner.next()?;
        let text = self.inner.slice();
        let offset = self.inner.span().start;

        let kind = match logos_token {
            Ok(t) => t.into(),
            Err(()) => TokenKind::Error,
        };

        Some(Token { kind, text, offset })
    }
}

/// Tokenize an entire string into a Vec, dropping whitespace and comments
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Lexer::new(input).filter(|t| !t.kind.is_trivia()).collect()
}

/// Logos token enum - maps to TokenKind
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
pub enum LogosToken {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    #[regex(r"[ \t\r\n\f]+")]
    Whitespace,

    // `--` runs to the end of the line or to the next `--`
    #[regex(r"--([^\-\n]|-[^\-\n])*-*")]
    Comment,

    // =========================================================================
    // LITERALS
    // =========================================================================
    #[regex(r"[a-zA-Z][a-zA-Z0-9_\-]*")]
    Ident,

    #[regex(r"[0-9]+")]
    Number,

    #[regex(r"-[0-9]+")]
    NegativeNumber,

    #[regex(r#""[^"]*""#)]
    QuotedString,

    #[regex(r"'[01]*'[bB]")]
    BinString,

    #[regex(r"'[0-9a-fA-F]*'[hH]")]
    HexString,

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    #[token("::=")]
    Assign,

    #[token("..")]
    DotDot,

    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,
    #[token(".")]
    Dot,
    #[token("|")]
    Pipe,
}

impl From<LogosToken> for TokenKind {
    fn from(token: LogosToken) -> Self {
        use LogosToken::*;
        match token {
            Whitespace => TokenKind::Whitespace,
            Comment => TokenKind::Comment,
            Ident => TokenKind::Ident,
            Number => TokenKind::Number,
            NegativeNumber => TokenKind::NegativeNumber,
            QuotedString => TokenKind::QuotedString,
            BinString => TokenKind::BinString,
            HexString => TokenKind::HexString,
            Assign => TokenKind::Assign,
            DotDot => TokenKind::DotDot,
            LBrace => TokenKind::LBrace,
            RBrace => TokenKind::RBrace,
            LParen => TokenKind::LParen,
            RParen => TokenKind::RParen,
            LBracket => TokenKind::LBracket,
            RBracket => TokenKind::RBracket,
            Comma => TokenKind::Comma,
            Semicolon => TokenKind::Semicolon,
            Dot => TokenKind::Dot,
            Pipe => TokenKind::Pipe,
        }
    }
}
