//! Indentation handling for the Ripple tokenizer
//!
//! Implements INDENT/DEDENT synthesis from leading whitespace.
//!
//! ## Notes
//! - Every whitespace character (space or tab) counts as one column. Mixing them is not rejected.
//! - A line indented to a column that was never pushed collapses to the nearest lower open level; no
//!   "inconsistent indentation" error is raised.

use super::tokens::{Token, TokenKind, TokenValue};
use super::Lexer;
use crate::ast::Span;

impl<'a> Lexer<'a> {
    /// Compare `indent` against the open levels and emit INDENT/DEDENT tokens; `leading` spans the whitespace.
    pub(super) fn handle_indentation(&mut self, indent: usize, leading: Span) {
        let current_indent = self.current_indent();

        if indent > current_indent {
            self.indent_stack.push(indent);
            tracing::debug!(indent, depth = self.indent_stack.len(), "indent level pushed");
            self.tokens.push(Token::new(
                TokenKind::Indent,
                TokenValue::Column(indent),
                leading,
            ));
        }

        while indent < self.current_indent() {
            self.pop_level(leading.start);
        }

        debug_assert!(
            self.indent_stack.windows(2).all(|w| w[0] < w[1]),
            "indent stack must be strictly increasing: {:?}",
            self.indent_stack
        );
    }

    /// Close every open level at end of input, leaving only the base level.
    pub(super) fn close_open_levels(&mut self, offset: usize) {
        while self.indent_stack.len() > 1 {
            self.pop_level(offset);
        }
    }

    /// The innermost open indentation column.
    pub(super) fn current_indent(&self) -> usize {
        self.indent_stack.last().copied().unwrap_or(0)
    }

    fn pop_level(&mut self, offset: usize) {
        // The base level is never popped.
        if self.indent_stack.len() <= 1 {
            return;
        }
        if let Some(popped) = self.indent_stack.pop() {
            tracing::debug!(popped, depth = self.indent_stack.len(), "indent level popped");
            self.tokens.push(Token::new(
                TokenKind::Dedent,
                TokenValue::Column(popped),
                Span::new(offset, offset),
            ));
        }
    }
}
