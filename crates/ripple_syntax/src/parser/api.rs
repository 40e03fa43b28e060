// Public parser entrypoints.
//
// ## Notes
// - `parse` and `parse_with_config` take lexer output; `parse_source` runs both stages.

/// Parse tokens into an AST with the default [`SyntaxConfig`].
///
/// ## Errors
/// Returns the first [`SyntaxError`]; there is no recovery.
#[tracing::instrument(skip_all, fields(token_count = tokens.len()))]
pub fn parse(tokens: &[Token]) -> Result<Program, SyntaxError> {
    Parser::new(tokens).parse()
}

/// Parse tokens into an AST under `config`.
///
/// `config` should be the one the tokens were lexed with; otherwise `to` may arrive as the wrong kind.
#[tracing::instrument(skip_all, fields(token_count = tokens.len(), for_loop = ?config.for_loop))]
pub fn parse_with_config(tokens: &[Token], config: SyntaxConfig) -> Result<Program, SyntaxError> {
    Parser::new(tokens).with_config(config).parse()
}

/// Tokenize and parse `source` in one call.
pub fn parse_source(source: &str, config: SyntaxConfig) -> Result<Program, CompileError> {
    let tokens = lexer::lex_with_config(source, config)?;
    Ok(parse_with_config(&tokens, config)?)
}
