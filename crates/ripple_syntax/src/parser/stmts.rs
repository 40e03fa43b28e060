/// Statement parsing.
///
/// This chunk contains statement-line handling (`;` separation), block parsing and one method per statement
/// production (`if` / `for` / `while` / `def` / `return` / assignment / call).
impl<'a> Parser<'a> {
    // ========================================================================
    // Statement lines and blocks
    // ========================================================================

    /// Parse one logical line into `out`.
    ///
    /// ## Notes
    /// - Simple statements may be chained with `;`. After the last one the line must end
    ///   (`NEWLINE`, `DEDENT` or `EOF`).
    /// - A compound statement consumes its own block, so it always ends the line.
    fn statement_line(&mut self, out: &mut Block) -> Result<(), SyntaxError> {
        while !self.peek().kind.ends_line() {
            let stmt = self.statement()?;
            let compound = stmt.is_compound();
            out.push(stmt);

            if compound {
                break;
            }
            if self.match_punct(PunctuationId::Semicolon) {
                continue;
            }
            if !self.peek().kind.ends_line() {
                return Err(SyntaxError::expected(TokenKind::Newline, self.peek()));
            }
            break;
        }
        Ok(())
    }

    /// `INDENT statement_line+ DEDENT`
    fn block(&mut self) -> Result<Block, SyntaxError> {
        self.eat(TokenKind::Indent)?;

        let mut body = Vec::new();
        loop {
            self.skip_newlines();
            if self.check(TokenKind::Dedent) || self.is_at_end() {
                break;
            }
            self.statement_line(&mut body)?;
        }

        self.eat(TokenKind::Dedent)?;
        Ok(body)
    }

    /// `COLON NEWLINE block`, the tail shared by every compound header.
    fn suite(&mut self) -> Result<Block, SyntaxError> {
        self.eat(TokenKind::Punctuation(PunctuationId::Colon))?;
        self.eat(TokenKind::Newline)?;
        // Blank lines between a header and its body carry no layout.
        self.skip_newlines();
        self.nested(Self::block)
    }

    // ========================================================================
    // Statements
    // ========================================================================

    fn statement(&mut self) -> Result<Statement, SyntaxError> {
        tracing::trace!(token = %self.peek(), pos = self.pos, "statement");

        let kind = self.peek().kind;
        match kind {
            TokenKind::Identifier => {
                if self.peek_nth(1).kind.is_punctuation(PunctuationId::LParen) {
                    self.call_stmt()
                } else {
                    self.assignment()
                }
            }
            TokenKind::Keyword(KeywordId::If) => self.if_stmt(),
            TokenKind::Keyword(KeywordId::For) => self.for_stmt(),
            TokenKind::Keyword(KeywordId::While) => self.while_stmt(),
            TokenKind::Keyword(KeywordId::Def) => self.function_def(),
            TokenKind::Keyword(KeywordId::Return) => self.return_stmt(),
            _ => Err(SyntaxError::unexpected(self.peek())),
        }
    }

    /// `IDENT ASSIGN expression`
    fn assignment(&mut self) -> Result<Statement, SyntaxError> {
        let name = self.identifier()?;
        self.eat(TokenKind::Assign)?;
        let value = self.expression()?;
        Ok(Statement::Assign(AssignStmt { name, value }))
    }

    /// `RETURN expression`
    fn return_stmt(&mut self) -> Result<Statement, SyntaxError> {
        self.eat(TokenKind::Keyword(KeywordId::Return))?;
        Ok(Statement::Return(self.expression()?))
    }

    /// `IF expression suite (ELIF ... | ELSE suite)?`
    fn if_stmt(&mut self) -> Result<Statement, SyntaxError> {
        self.eat(TokenKind::Keyword(KeywordId::If))?;
        Ok(Statement::If(self.conditional()?))
    }

    /// Everything after `if` / `elif`. An `elif` becomes a nested [`IfStmt`] in the else branch.
    fn conditional(&mut self) -> Result<IfStmt, SyntaxError> {
        let condition = self.expression()?;
        let then_body = self.suite()?;

        let else_branch = if self.match_keyword(KeywordId::Elif) {
            Some(ElseBranch::Elif(Box::new(self.nested(Self::conditional)?)))
        } else if self.match_keyword(KeywordId::Else) {
            Some(ElseBranch::Else(self.suite()?))
        } else {
            None
        };

        Ok(IfStmt {
            condition,
            then_body,
            else_branch,
        })
    }

    /// `FOR IDENT IN expression (TO expression)? suite`
    ///
    /// ## Notes
    /// - The `TO` bound is required under [`ForLoopSyntax::Range`] and not accepted under
    ///   [`ForLoopSyntax::Iter`], where `to` is an ordinary name.
    fn for_stmt(&mut self) -> Result<Statement, SyntaxError> {
        self.eat(TokenKind::Keyword(KeywordId::For))?;
        let var = self.identifier()?;
        self.eat(TokenKind::Keyword(KeywordId::In))?;
        let start = self.expression()?;

        let end = match self.config.for_loop {
            ForLoopSyntax::Range => {
                self.eat(TokenKind::Keyword(KeywordId::To))?;
                Some(self.expression()?)
            }
            ForLoopSyntax::Iter => None,
        };

        let body = self.suite()?;
        Ok(Statement::For(ForStmt { var, start, end, body }))
    }

    /// `WHILE expression suite`
    fn while_stmt(&mut self) -> Result<Statement, SyntaxError> {
        self.eat(TokenKind::Keyword(KeywordId::While))?;
        let condition = self.expression()?;
        let body = self.suite()?;
        Ok(Statement::While(WhileStmt { condition, body }))
    }

    /// `DEF IDENT LPAREN params RPAREN suite`
    fn function_def(&mut self) -> Result<Statement, SyntaxError> {
        self.eat(TokenKind::Keyword(KeywordId::Def))?;
        let name = self.identifier()?;
        self.eat(TokenKind::Punctuation(PunctuationId::LParen))?;
        let params = self.params()?;
        self.eat(TokenKind::Punctuation(PunctuationId::RParen))?;
        let body = self.suite()?;

        tracing::trace!(%name, params = params.len(), "function definition");
        Ok(Statement::Def(FunctionDef { name, params, body }))
    }

    /// `(IDENT (COMMA IDENT)*)?`
    fn params(&mut self) -> Result<Vec<Ident>, SyntaxError> {
        let mut params = Vec::new();
        if self.check_punct(PunctuationId::RParen) {
            return Ok(params);
        }

        params.push(self.identifier()?);
        while self.match_punct(PunctuationId::Comma) {
            params.push(self.identifier()?);
        }
        Ok(params)
    }

    /// `IDENT LPAREN args RPAREN`
    fn call_stmt(&mut self) -> Result<Statement, SyntaxError> {
        let name = self.identifier()?;
        self.eat(TokenKind::Punctuation(PunctuationId::LParen))?;
        let args = self.call_args()?;
        self.eat(TokenKind::Punctuation(PunctuationId::RParen))?;
        Ok(Statement::Call(CallStmt { name, args }))
    }

    fn call_args(&mut self) -> Result<Vec<Expr>, SyntaxError> {
        let mut args = Vec::new();
        if self.check_punct(PunctuationId::RParen) {
            return Ok(args);
        }

        args.push(self.expression()?);
        while self.match_punct(PunctuationId::Comma) {
            args.push(self.expression()?);
        }
        Ok(args)
    }
}
