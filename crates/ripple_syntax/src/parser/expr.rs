/// Expression parsing.
///
/// Expressions are atomic: a number, a name, or a parenthesized expression. Operator tokens are tokenized but
/// have no grammar rule, so one directly after an expression is reported as unsupported instead of surfacing later
/// as a confusing "Expected NEWLINE".
impl<'a> Parser<'a> {
    fn expression(&mut self) -> Result<Expr, SyntaxError> {
        let expr = self.primary()?;

        if self.check(TokenKind::Op) {
            let token = self.peek();
            return Err(SyntaxError::UnsupportedOperator {
                op: token.value.as_text().unwrap_or_default().to_string(),
                span: token.span,
            });
        }

        Ok(expr)
    }

    /// `NUMBER | IDENT | LPAREN expression RPAREN`
    fn primary(&mut self) -> Result<Expr, SyntaxError> {
        let kind = self.peek().kind;
        let atom = match kind {
            TokenKind::Number => self.peek().value.as_int().map(Expr::Num),
            TokenKind::Identifier => self.peek().value.as_text().map(|name| Expr::Var(name.to_string())),
            TokenKind::Punctuation(PunctuationId::LParen) => {
                self.advance();
                let inner = self.nested(Self::expression)?;
                self.eat(TokenKind::Punctuation(PunctuationId::RParen))?;
                return Ok(inner);
            }
            _ => None,
        };

        match atom {
            Some(expr) => {
                self.advance();
                Ok(expr)
            }
            None => {
                let found = self.peek().clone();
                Err(SyntaxError::ExpectedExpression {
                    span: found.span,
                    found,
                })
            }
        }
    }
}
