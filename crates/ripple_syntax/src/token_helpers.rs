//! Small helper APIs for working with `TokenKind`.
//!
//! These helpers exist to reduce repetitive `matches!(...)` at call sites and to make it easy
//! to work with ID-based tokens.

use crate::lexer::TokenKind;
use ripple_core::lang::keywords::KeywordId;
use ripple_core::lang::punctuation::PunctuationId;

impl TokenKind {
    /// Return `true` if this is the given keyword.
    pub fn is_keyword(&self, id: KeywordId) -> bool {
        matches!(self, TokenKind::Keyword(k) if *k == id)
    }

    /// Return `true` if this is the given punctuation.
    pub fn is_punctuation(&self, id: PunctuationId) -> bool {
        matches!(self, TokenKind::Punctuation(p) if *p == id)
    }

    /// Return `true` if this token ends a line of statements (`NEWLINE`, `DEDENT` or `EOF`).
    pub fn ends_line(&self) -> bool {
        matches!(self, TokenKind::Newline | TokenKind::Dedent | TokenKind::Eof)
    }
}
