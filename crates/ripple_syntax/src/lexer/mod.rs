//! Tokenizer for the Ripple programming language
//!
//! Handles tokenization including:
//! - Keywords (def, if, elif, else, while, for, in, return, and `to` for range loops)
//! - Identifiers and integer literals
//! - Single-character operators and punctuation (`= + - * / ( ) : , ;`)
//! - Indentation-based blocks (INDENT/DEDENT tokens) and one NEWLINE per physical line
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, TokenValue, Token)
//! - `indent` - INDENT/DEDENT handling
//! - `stream` - Pop-front view over a finished token vector
//!
//! ## Notes
//! - Tokenization is batch and fail-fast: the whole input is processed before parsing, and the first
//!   unrecognized character aborts with a [`LexError`].
//! - The returned vector has no trailing `EOF`; consumers synthesize `(EOF, "")` once it is exhausted.

mod indent;
mod stream;
pub mod tokens;

pub use stream::TokenStream;
pub use tokens::{Token, TokenKind, TokenValue, keyword_id};

use crate::ast::Span;
use crate::config::SyntaxConfig;
use crate::diagnostics::LexError;
use ripple_core::lang::operators::{self, OperatorKind};
use ripple_core::lang::punctuation;

// ============================================================================
// LEXER STATE
// ----------------------------------------------------------------------------
// Per physical line:
//
// [Start of line] → measure leading whitespace → INDENT / DEDENT*
//                                                    ↓
//                                  scan tokens left to right (longest match)
//                                                    ↓
//                                               emit NEWLINE
//
// At end of input every still-open level is closed with a DEDENT.
// ============================================================================

/// Lexer for Ripple source code.
///
/// Converts source text into a stream of tokens, handling:
/// - Keywords and identifiers
/// - Integer literals
/// - Operators and punctuation
/// - Python-style indentation (INDENT/DEDENT tokens)
pub struct Lexer<'a> {
    source: &'a str,
    config: SyntaxConfig,
    /// Open indentation columns, strictly increasing, base `0` never popped
    indent_stack: Vec<usize>,
    tokens: Vec<Token>,
    /// Line currently being scanned (without its terminator)
    line: &'a str,
    /// Byte offset of `line` within `source`
    line_start: usize,
    /// Byte offset within `line`
    pos: usize,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source code.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            config: SyntaxConfig::default(),
            indent_stack: vec![0],
            tokens: Vec::new(),
            line: "",
            line_start: 0,
            pos: 0,
        }
    }

    /// Use `config` instead of the default syntax configuration.
    pub fn with_config(mut self, config: SyntaxConfig) -> Self {
        self.config = config;
        self
    }

    /// Tokenize the entire source code.
    ///
    /// Returns the tokens on success, or the first lexical error.
    pub fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        self.scan_all()?;
        Ok(self.tokens)
    }

    fn scan_all(&mut self) -> Result<(), LexError> {
        let source = self.source;
        let mut line_start = 0;

        // `\n`, `\r\n` and a lone `\r` each end a line.
        while line_start < source.len() {
            let rest = &source[line_start..];
            let (content_len, terminator_len) = match rest.find(['\n', '\r']) {
                Some(i) if rest[i..].starts_with("\r\n") => (i, 2),
                Some(i) => (i, 1),
                None => (rest.len(), 0),
            };
            let content = &rest[..content_len];
            let next = line_start + content_len + terminator_len;

            self.scan_line(content, line_start)?;
            self.add_token(
                TokenKind::Newline,
                TokenValue::Text("\n".to_string()),
                Span::new(line_start + content_len, next),
            );
            line_start = next;
        }

        self.close_open_levels(source.len());
        Ok(())
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    fn peek(&self) -> Option<char> {
        self.line[self.pos..].chars().next()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Consume characters while `pred` holds and return the consumed slice.
    fn eat_while(&mut self, pred: impl Fn(char) -> bool) -> &'a str {
        let line = self.line;
        let start = self.pos;
        while let Some(c) = self.peek() {
            if !pred(c) {
                break;
            }
            self.pos += c.len_utf8();
        }
        &line[start..self.pos]
    }

    /// Absolute span from a line-relative start to the current position.
    fn span_from(&self, start: usize) -> Span {
        Span::new(self.line_start + start, self.line_start + self.pos)
    }

    fn add_token(&mut self, kind: TokenKind, value: TokenValue, span: Span) {
        self.tokens.push(Token::new(kind, value, span));
    }

    // ========================================================================
    // Line scanning
    // ========================================================================

    fn scan_line(&mut self, line: &'a str, line_start: usize) -> Result<(), LexError> {
        self.line = line;
        self.line_start = line_start;
        self.pos = 0;

        let leading = self.eat_while(char::is_whitespace);
        // Whitespace-only lines only contribute their NEWLINE.
        if leading.len() == line.len() {
            return Ok(());
        }

        let indent = leading.chars().count();
        self.handle_indentation(indent, self.span_from(0));

        while let Some(c) = self.peek() {
            self.scan_token(c)?;
        }
        Ok(())
    }

    fn scan_token(&mut self, c: char) -> Result<(), LexError> {
        let start = self.pos;

        match c {
            ' ' | '\t' => {
                self.advance();
            }

            // Numbers
            '0'..='9' => self.scan_number(start)?,

            // Identifiers and keywords
            _ if is_ident_start(c) => self.scan_identifier(start),

            // Operators and punctuation
            _ => {
                self.advance();
                let span = self.span_from(start);
                let value = TokenValue::Text(c.to_string());
                if let Some(id) = operators::from_char(c) {
                    let kind = match operators::kind(id) {
                        OperatorKind::Assignment => TokenKind::Assign,
                        OperatorKind::Arithmetic => TokenKind::Op,
                    };
                    self.add_token(kind, value, span);
                } else if let Some(id) = punctuation::from_char(c) {
                    self.add_token(TokenKind::Punctuation(id), value, span);
                } else {
                    return Err(LexError::UnexpectedCharacter { ch: c, span });
                }
            }
        }
        Ok(())
    }

    // ========================================================================
    // Literal and identifier scanning
    // ========================================================================

    fn scan_number(&mut self, start: usize) -> Result<(), LexError> {
        let digits = self.eat_while(|c| c.is_ascii_digit());
        let span = self.span_from(start);
        let value = digits.parse::<i64>().map_err(|_| LexError::IntegerOverflow {
            literal: digits.to_string(),
            span,
        })?;
        self.add_token(TokenKind::Number, TokenValue::Int(value), span);
        Ok(())
    }

    fn scan_identifier(&mut self, start: usize) {
        let spelling = self.eat_while(is_ident_continue);
        let span = self.span_from(start);

        // Keywords keep their original spelling as the token value.
        let kind = match keyword_id(spelling, &self.config) {
            Some(id) => TokenKind::Keyword(id),
            None => TokenKind::Identifier,
        };
        self.add_token(kind, TokenValue::Text(spelling.to_string()), span);
    }
}

// ============================================================================
// Helper functions
// ============================================================================

/// Check if a character can start an identifier (ASCII-only).
fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Check if a character can continue an identifier (ASCII-only).
fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Convenience function to lex a source string with the default configuration.
///
/// This is a shorthand for `Lexer::new(source).tokenize()`.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(source).tokenize()
}

/// Lex a source string under `config`.
#[tracing::instrument(skip_all, fields(source_len = source.len(), for_loop = ?config.for_loop))]
pub fn lex_with_config(source: &str, config: SyntaxConfig) -> Result<Vec<Token>, LexError> {
    Lexer::new(source).with_config(config).tokenize()
}

/// Lex a source string into a pop-front [`TokenStream`].
pub fn lex_stream(source: &str, config: SyntaxConfig) -> Result<TokenStream, LexError> {
    let end = source.len();
    lex_with_config(source, config).map(|tokens| TokenStream::with_eof_offset(tokens, end))
}

// ============================================================================
// TESTS
// ============================================================================
