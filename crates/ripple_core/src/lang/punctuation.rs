//! Punctuation vocabulary.
//!
//! This module defines the single-character delimiters and separators used by the tokenizer and parser.
//!
//! ## Notes
//! - This module is vocabulary only (spellings + metadata). It does not tokenize source text.
//!
//! ## Examples
//! ```rust
//! use ripple_core::lang::punctuation::{self, PunctuationId};
//!
//! assert_eq!(punctuation::from_char(';'), Some(PunctuationId::Semicolon));
//! assert_eq!(punctuation::token_name(PunctuationId::LParen), "LPAREN");
//! ```

/// Broad syntactic grouping for punctuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationCategory {
    /// Parentheses.
    Delimiter,
    /// Separators like `,`, `:` and `;`.
    Separator,
}

/// Stable identifier for punctuation tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationId {
    LParen,
    RParen,
    Colon,
    Comma,
    Semicolon,
}

/// Metadata for a punctuation token.
#[derive(Debug, Clone, Copy)]
pub struct PunctuationInfo {
    pub id: PunctuationId,
    pub canonical: char,
    pub token_name: &'static str,
    pub category: PunctuationCategory,
}

/// Registry of all punctuation tokens.
pub const PUNCTUATION: &[PunctuationInfo] = &[
    // Delimiters
    info(PunctuationId::LParen, '(', "LPAREN", PunctuationCategory::Delimiter),
    info(PunctuationId::RParen, ')', "RPAREN", PunctuationCategory::Delimiter),
    // Separators
    info(PunctuationId::Colon, ':', "COLON", PunctuationCategory::Separator),
    info(PunctuationId::Comma, ',', "COMMA", PunctuationCategory::Separator),
    info(PunctuationId::Semicolon, ';', "SEMICOLON", PunctuationCategory::Separator),
];

/// Return the canonical spelling for a punctuation token.
pub fn as_char(id: PunctuationId) -> char {
    info_for(id).canonical
}

/// Token-kind name (`LPAREN`, `COLON`, ...).
pub fn token_name(id: PunctuationId) -> &'static str {
    info_for(id).token_name
}

/// Return the category for a punctuation token.
pub fn category(id: PunctuationId) -> PunctuationCategory {
    info_for(id).category
}

/// Return full metadata for a punctuation token.
pub fn info_for(id: PunctuationId) -> &'static PunctuationInfo {
    match id {
        PunctuationId::LParen => &PUNCTUATION[0],
        PunctuationId::RParen => &PUNCTUATION[1],
        PunctuationId::Colon => &PUNCTUATION[2],
        PunctuationId::Comma => &PUNCTUATION[3],
        PunctuationId::Semicolon => &PUNCTUATION[4],
    }
}

/// Lookup by character.
pub fn from_char(c: char) -> Option<PunctuationId> {
    PUNCTUATION.iter().find(|p| p.canonical == c).map(|p| p.id)
}

const fn info(
    id: PunctuationId,
    canonical: char,
    token_name: &'static str,
    category: PunctuationCategory,
) -> PunctuationInfo {
    PunctuationInfo {
        id,
        canonical,
        token_name,
        category,
    }
}
