//! Token types for the Ripple tokenizer.
//!
//! A token is a `(kind, value)` pair plus the source span it came from:
//! - `kind` is the closed [`TokenKind`] set. Keyword and punctuation kinds carry registry IDs from
//!   `ripple_core::lang` instead of strings.
//! - `value` is the literal text for names/operators/keywords, the integer for `NUMBER`, the column for
//!   `INDENT`/`DEDENT`, and empty for `EOF`.
//!
//! ## Notes
//! - Use `crate::token_helpers` for ergonomic token matching at call sites.

use std::fmt;

use crate::ast::Span;
use crate::config::SyntaxConfig;
use ripple_core::lang::keywords::{self, KeywordId, Reservation};
use ripple_core::lang::punctuation::{self, PunctuationId};

// ============================================================================
// TOKEN TYPES
// ============================================================================

/// Kind of token produced by the tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // ========== Literals and names ==========
    Number,
    Identifier,

    // ========== Operators ==========
    Assign,
    Op,

    // ========== Keyword / punctuation (ID-based) ==========
    Keyword(KeywordId),
    Punctuation(PunctuationId),

    // ========== Layout ==========
    Newline,
    Indent,
    Dedent,

    // ========== Special ==========
    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Number => "NUMBER",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Assign => "ASSIGN",
            TokenKind::Op => "OP",
            TokenKind::Keyword(id) => keywords::token_name(*id),
            TokenKind::Punctuation(id) => punctuation::token_name(*id),
            TokenKind::Newline => "NEWLINE",
            TokenKind::Indent => "INDENT",
            TokenKind::Dedent => "DEDENT",
            TokenKind::Eof => "EOF",
        };
        f.write_str(name)
    }
}

/// Payload carried by a token.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TokenValue {
    /// `NUMBER`
    Int(i64),
    /// Names, keywords, operators, punctuation and `NEWLINE` (`"\n"`)
    Text(String),
    /// `INDENT` (the column pushed) / `DEDENT` (the column popped)
    Column(usize),
    /// `EOF`
    Empty,
}

impl TokenValue {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            TokenValue::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            TokenValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_column(&self) -> Option<usize> {
        match self {
            TokenValue::Column(c) => Some(*c),
            _ => None,
        }
    }
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenValue::Int(n) => write!(f, "{}", n),
            TokenValue::Text(s) => write!(f, "{:?}", s),
            TokenValue::Column(c) => write!(f, "{}", c),
            TokenValue::Empty => write!(f, "\"\""),
        }
    }
}

/// A token with its kind, value and source span.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub value: TokenValue,
    pub span: Span,
}

impl Token {
    /// Construct a new token.
    pub fn new(kind: TokenKind, value: TokenValue, span: Span) -> Self {
        Self { kind, value, span }
    }

    /// The end-of-input sentinel, `(EOF, "")`, positioned at `offset`.
    pub fn eof(offset: usize) -> Self {
        Self::new(TokenKind::Eof, TokenValue::Empty, Span::new(offset, offset))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.kind, self.value)
    }
}

/// Resolve an identifier spelling to a keyword id, if reserved under `config`.
pub fn keyword_id(name: &str, config: &SyntaxConfig) -> Option<KeywordId> {
    let id = keywords::from_str(name)?;
    match keywords::reservation(id) {
        Reservation::Always => Some(id),
        Reservation::RangeLoops => config.reserves_to().then_some(id),
    }
}
