//! Command implementations for the Ripple CLI
//!
//! Each command reads one source file, runs the front end, and prints listings to stdout. Failures come back as
//! [`CliError`] with the diagnostic already rendered against the source.

use std::fmt::Write as _;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use miette::Diagnostic;
use ripple_syntax::ast::Program;
use ripple_syntax::lexer::{self, Token};
use ripple_syntax::{SyntaxConfig, diagnostics, parser};

use super::{CliError, CliResult, ExitCode};

/// Maximum source file size (100 MB)
const MAX_SOURCE_SIZE: u64 = 100 * 1024 * 1024;

/// Read a source file with size validation.
///
/// ## Errors
/// - The file cannot be read (I/O error)
/// - The file exceeds `MAX_SOURCE_SIZE`
pub fn read_source(file_path: &Path) -> CliResult<String> {
    let shown = file_path.display();
    let metadata =
        fs::metadata(file_path).map_err(|e| CliError::failure(format!("Cannot access file '{}': {}", shown, e)))?;

    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(CliError::failure(format!(
            "Source file '{}' is too large ({} bytes, max {} bytes)",
            shown,
            metadata.len(),
            MAX_SOURCE_SIZE
        )));
    }

    let source =
        fs::read_to_string(file_path).map_err(|e| CliError::failure(format!("Error reading file '{}': {}", shown, e)))?;
    tracing::debug!(path = %shown, bytes = source.len(), "read source file");
    Ok(source)
}

/// Render a front-end failure against its source.
fn diagnostic_failure<E>(file_name: &str, source: &str, error: E) -> CliError
where
    E: Diagnostic + Send + Sync + 'static,
{
    let rendered = diagnostics::format_error(file_name, source, error);
    CliError::failure(rendered.trim_end())
}

/// Tokenize `source`, mapping a lexical error to a rendered [`CliError`].
pub fn tokenize(file_name: &str, source: &str, config: SyntaxConfig) -> CliResult<Vec<Token>> {
    lexer::lex_with_config(source, config).map_err(|e| diagnostic_failure(file_name, source, e))
}

/// Tokenize and parse `source`, returning both stages' output.
pub fn front_end(file_name: &str, source: &str, config: SyntaxConfig) -> CliResult<(Vec<Token>, Program)> {
    let tokens = tokenize(file_name, source, config)?;
    let program =
        parser::parse_with_config(&tokens, config).map_err(|e| diagnostic_failure(file_name, source, e))?;
    tracing::info!(
        file = file_name,
        tokens = tokens.len(),
        statements = program.statements.len(),
        "parsed"
    );
    Ok((tokens, program))
}

/// One token per line, as `(KIND, value)`.
pub fn render_tokens(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        let _ = writeln!(out, "{}", token);
    }
    out
}

/// Pretty-printed AST.
pub fn render_ast(program: &Program) -> String {
    format!("{:#?}\n", program.statements)
}

/// Lex and display tokens.
pub fn lex_file(file_path: &Path, config: SyntaxConfig) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let tokens = tokenize(&file_path.to_string_lossy(), &source, config)?;
    print!("{}", render_tokens(&tokens));
    Ok(ExitCode::SUCCESS)
}

/// Parse and display AST.
pub fn parse_file(file_path: &Path, config: SyntaxConfig) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let (_, program) = front_end(&file_path.to_string_lossy(), &source, config)?;
    print!("{}", render_ast(&program));
    Ok(ExitCode::SUCCESS)
}

/// Write the token listing, then the AST.
///
/// The tokens are written before parsing starts, so a syntax error still leaves the listing in `out`.
pub fn write_run<W: Write>(out: &mut W, file_name: &str, source: &str, config: SyntaxConfig) -> CliResult<()> {
    let tokens = tokenize(file_name, source, config)?;
    write_listing(out, "Tokens:", &render_tokens(&tokens))?;

    let program =
        parser::parse_with_config(&tokens, config).map_err(|e| diagnostic_failure(file_name, source, e))?;
    tracing::info!(
        file = file_name,
        tokens = tokens.len(),
        statements = program.statements.len(),
        "parsed"
    );
    write_listing(out, "Abstract Syntax Tree:", &render_ast(&program))
}

fn write_listing<W: Write>(out: &mut W, heading: &str, body: &str) -> CliResult<()> {
    writeln!(out, "{}", heading)
        .and_then(|_| out.write_all(body.as_bytes()))
        .and_then(|_| out.flush())
        .map_err(|e| CliError::failure(format!("Error writing output: {}", e)))
}

/// Display tokens, then the AST.
pub fn run_file(file_path: &Path, config: SyntaxConfig) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_run(&mut out, &file_path.to_string_lossy(), &source, config)?;
    Ok(ExitCode::SUCCESS)
}
