/// Token-stream helpers.
///
/// This chunk contains the low-level primitives used throughout parsing:
/// - Peeking/consuming tokens (`peek`, `peek_nth`, `advance`)
/// - Matching / expecting keywords and punctuation (`check*`, `match_*`, `eat`)
/// - Layout handling (`skip_newlines`)
impl<'a> Parser<'a> {
    // ========================================================================
    // Helpers
    // ========================================================================

    /// Return `true` once every token has been consumed.
    fn is_at_end(&self) -> bool {
        matches!(self.peek().kind, TokenKind::Eof)
    }

    /// Return the current token without consuming it.
    fn peek(&self) -> &Token {
        self.peek_nth(0)
    }

    /// Return the token `n` positions after the current one without consuming anything.
    fn peek_nth(&self, n: usize) -> &Token {
        self.tokens.get(self.pos + n).unwrap_or(&self.eof)
    }

    /// Move past the current token. The cursor never moves past the end.
    fn advance(&mut self) {
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
    }

    /// Return `true` if the current token is of `kind`.
    fn check(&self, kind: TokenKind) -> bool {
        self.peek().kind == kind
    }

    /// Return `true` if the current token is the given punctuation.
    fn check_punct(&self, id: PunctuationId) -> bool {
        self.peek().kind.is_punctuation(id)
    }

    fn match_keyword(&mut self, id: KeywordId) -> bool {
        if self.peek().kind.is_keyword(id) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn match_punct(&mut self, id: PunctuationId) -> bool {
        if self.check_punct(id) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume the current token if it is of `expected`, otherwise fail naming both kinds.
    fn eat(&mut self, expected: TokenKind) -> Result<(), SyntaxError> {
        if self.check(expected) {
            self.advance();
            Ok(())
        } else {
            Err(SyntaxError::expected(expected, self.peek()))
        }
    }

    /// Skip blank-line `NEWLINE` tokens.
    fn skip_newlines(&mut self) {
        while self.check(TokenKind::Newline) {
            self.advance();
        }
    }

    /// Run `f` one nesting level deeper, failing once [`MAX_NESTING_DEPTH`] is exceeded.
    fn nested<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T, SyntaxError>) -> Result<T, SyntaxError> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(SyntaxError::NestingTooDeep {
                limit: MAX_NESTING_DEPTH,
                span: self.peek().span,
            });
        }
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    /// Consume an identifier and return its name.
    fn identifier(&mut self) -> Result<Ident, SyntaxError> {
        if self.check(TokenKind::Identifier) {
            if let Some(name) = self.peek().value.as_text().map(str::to_string) {
                self.advance();
                return Ok(name);
            }
        }
        Err(SyntaxError::expected(TokenKind::Identifier, self.peek()))
    }
}
