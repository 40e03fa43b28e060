// Parser core type and entrypoint.
//
// This chunk defines the `Parser` type and its top-level `parse()` entrypoint.
//
// ## Notes
// - This file is `include!`'d into `crate::parser` to keep all parser methods in a
//   single module while avoiding a single “god file”.

/// Deepest nesting of blocks, `elif` links and parenthesized expressions the parser accepts.
///
/// Each level costs a handful of stack frames, so the limit keeps deep but well-formed input from
/// overflowing the stack.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Parser state.
///
/// ## Notes
/// - The parser is single-pass with a strictly forward cursor and no error recovery: the first mismatch aborts.
/// - Reads past the end of the token slice yield an `(EOF, "")` sentinel.
pub struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    config: SyntaxConfig,
    eof: Token,
    /// Open blocks, `elif` links and parentheses
    depth: usize,
}

impl<'a> Parser<'a> {
    /// Create a new parser for a token stream.
    ///
    /// ## Parameters
    /// - `tokens`: Token stream produced by `ripple_syntax::lexer`.
    pub fn new(tokens: &'a [Token]) -> Self {
        let end = tokens.last().map(|t| t.span.end).unwrap_or(0);
        Self {
            tokens,
            pos: 0,
            config: SyntaxConfig::default(),
            eof: Token::eof(end),
            depth: 0,
        }
    }

    /// Use `config` instead of the default syntax configuration.
    pub fn with_config(mut self, config: SyntaxConfig) -> Self {
        self.config = config;
        self
    }

    /// Parse the entire token stream into a [`Program`].
    ///
    /// ## Errors
    /// Returns the first [`SyntaxError`] encountered; there is no partial result.
    pub fn parse(mut self) -> Result<Program, SyntaxError> {
        let mut statements = Vec::new();

        loop {
            self.skip_newlines();
            if self.is_at_end() {
                break;
            }
            // A DEDENT can only close a block; at the top level it means the stream was not produced by the lexer.
            if self.check(TokenKind::Dedent) {
                return Err(SyntaxError::unexpected(self.peek()));
            }
            self.statement_line(&mut statements)?;
        }

        Ok(Program { statements })
    }
}
