//! Diagnostics and error reporting for Ripple
//!
//! The front end has exactly two failure kinds, both fatal to the current call:
//! - [`LexError`]: the tokenizer met a character (or literal) it cannot turn into a token.
//! - [`SyntaxError`]: the parser met a token its grammar does not allow at that point.
//!
//! Both carry the byte span of the offending input and implement [`miette::Diagnostic`], so hosts can render them
//! with source context via [`format_error`]. The core never prints or logs them itself.

use miette::{Diagnostic, NamedSource, Report};
use thiserror::Error;

use crate::ast::Span;
use crate::lexer::{Token, TokenKind};

/// A tokenizer failure.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum LexError {
    #[error("Unexpected character '{ch}'")]
    #[diagnostic(
        code(ripple::lex::unexpected_character),
        help("Ripple has no comments or string literals; only names, integers and `= + - * / ( ) : , ;` are valid")
    )]
    UnexpectedCharacter {
        ch: char,
        #[label("no token starts with this character")]
        span: Span,
    },

    #[error("Integer literal {literal} does not fit in a 64-bit signed integer")]
    #[diagnostic(code(ripple::lex::integer_overflow))]
    IntegerOverflow {
        literal: String,
        #[label("literal too large")]
        span: Span,
    },
}

impl LexError {
    pub fn span(&self) -> Span {
        match self {
            LexError::UnexpectedCharacter { span, .. } | LexError::IntegerOverflow { span, .. } => *span,
        }
    }
}

/// A parser failure.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum SyntaxError {
    /// `eat(expected)` found some other token.
    #[error("Expected {expected}, got {found}")]
    #[diagnostic(code(ripple::syntax::expected))]
    Expected {
        expected: TokenKind,
        found: Token,
        #[label("unexpected token here")]
        span: Span,
    },

    /// Statement dispatch found no production starting with this token.
    #[error("Unexpected token: {found}")]
    #[diagnostic(
        code(ripple::syntax::unexpected_token),
        help("statements start with a name, `if`, `for`, `while`, `def` or `return`")
    )]
    UnexpectedToken {
        found: Token,
        #[label("not the start of a statement")]
        span: Span,
    },

    /// An expression position held something other than a number, name or `(`.
    #[error("Expected expression, got {found}")]
    #[diagnostic(code(ripple::syntax::expected_expression))]
    ExpectedExpression {
        found: Token,
        #[label("expected a number, a name or `(`")]
        span: Span,
    },

    /// Arithmetic operators are tokenized but never applied by the grammar.
    #[error("Operator '{op}' is not supported in expressions")]
    #[diagnostic(
        code(ripple::syntax::unsupported_operator),
        help("expressions are limited to numbers, names and parenthesized expressions")
    )]
    UnsupportedOperator {
        op: String,
        #[label("binary operators are not supported")]
        span: Span,
    },

    /// Blocks, `elif` chains or parentheses nested past [`crate::parser::MAX_NESTING_DEPTH`].
    #[error("Nesting exceeds the maximum depth of {limit}")]
    #[diagnostic(code(ripple::syntax::nesting_too_deep))]
    NestingTooDeep {
        limit: usize,
        #[label("nested too deeply")]
        span: Span,
    },
}

impl SyntaxError {
    pub fn expected(expected: TokenKind, found: &Token) -> Self {
        SyntaxError::Expected {
            expected,
            found: found.clone(),
            span: found.span,
        }
    }

    pub fn unexpected(found: &Token) -> Self {
        SyntaxError::UnexpectedToken {
            found: found.clone(),
            span: found.span,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            SyntaxError::Expected { span, .. }
            | SyntaxError::UnexpectedToken { span, .. }
            | SyntaxError::ExpectedExpression { span, .. }
            | SyntaxError::UnsupportedOperator { span, .. }
            | SyntaxError::NestingTooDeep { span, .. } => *span,
        }
    }
}

/// Either front-end failure, for callers that run both stages.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum CompileError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Syntax(#[from] SyntaxError),
}

impl CompileError {
    pub fn span(&self) -> Span {
        match self {
            CompileError::Lex(e) => e.span(),
            CompileError::Syntax(e) => e.span(),
        }
    }
}

/// Render an error with source context (file name, line, caret label) as a string.
pub fn format_error<E>(file_name: &str, source: &str, error: E) -> String
where
    E: Diagnostic + Send + Sync + 'static,
{
    let report = Report::new(error).with_source_code(NamedSource::new(file_name, source.to_string()));
    format!("{:?}", report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lex_error_message_names_character() {
        let err = LexError::UnexpectedCharacter {
            ch: '@',
            span: Span::new(4, 5),
        };
        assert_eq!(err.to_string(), "Unexpected character '@'");
        assert_eq!(err.span(), Span::new(4, 5));
    }

    #[test]
    fn test_format_error_includes_file_and_message() {
        let source = "x = @\n";
        let err = LexError::UnexpectedCharacter {
            ch: '@',
            span: Span::new(4, 5),
        };
        let rendered = format_error("demo.rpl", source, err);
        assert!(rendered.contains("Unexpected character '@'"), "got: {}", rendered);
        assert!(rendered.contains("demo.rpl"), "got: {}", rendered);
    }
}
