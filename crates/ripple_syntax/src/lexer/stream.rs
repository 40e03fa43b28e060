//! Pop-front view over a finished token vector.
//!
//! [`TokenStream::next_token`] hands tokens out in source order and, once they are exhausted, keeps returning the
//! `(EOF, "")` sentinel forever. The unconsumed tail is available as a slice so it can be handed to the parser.

use super::tokens::Token;

/// Token buffer consumed from the front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenStream {
    tokens: Vec<Token>,
    cursor: usize,
    eof: Token,
}

impl TokenStream {
    /// Wrap `tokens`; the EOF sentinel is placed just after the last token.
    pub fn new(tokens: Vec<Token>) -> Self {
        let end = tokens.last().map(|t| t.span.end).unwrap_or(0);
        Self::with_eof_offset(tokens, end)
    }

    /// Wrap `tokens`, positioning the EOF sentinel at byte `offset` (usually the source length).
    pub fn with_eof_offset(tokens: Vec<Token>, offset: usize) -> Self {
        Self {
            tokens,
            cursor: 0,
            eof: Token::eof(offset),
        }
    }

    /// Pop the next token, or the EOF sentinel once exhausted.
    pub fn next_token(&mut self) -> Token {
        match self.tokens.get(self.cursor) {
            Some(token) => {
                self.cursor += 1;
                token.clone()
            }
            None => self.eof.clone(),
        }
    }

    /// Look `n` tokens ahead without consuming (`peek(0)` is the next token).
    pub fn peek(&self, n: usize) -> &Token {
        self.tokens.get(self.cursor + n).unwrap_or(&self.eof)
    }

    /// Tokens not yet consumed.
    pub fn remaining(&self) -> &[Token] {
        &self.tokens[self.cursor..]
    }

    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.tokens.len()
    }

    /// The sentinel returned after exhaustion.
    pub fn eof(&self) -> &Token {
        &self.eof
    }
}

impl From<Vec<Token>> for TokenStream {
    fn from(tokens: Vec<Token>) -> Self {
        TokenStream::new(tokens)
    }
}
