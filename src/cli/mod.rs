//! CLI module for Ripple
//!
//! ## Usage
//!
//! - `ripple <file>` - Print the token listing followed by the AST
//! - `ripple --lex <file>` - Print tokens only
//! - `ripple --parse <file>` - Print the AST only
//! - `--for-syntax range|iter` - Select the accepted `for` loop form
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use ripple_syntax::{ForLoopSyntax, SyntaxConfig};
use thiserror::Error;

use crate::version::RIPPLE_VERSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Accepted `for` loop form, as spelled on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ForSyntax {
    /// `for i in start to end:`
    #[default]
    Range,
    /// `for x in iterable:`
    Iter,
}

impl From<ForSyntax> for ForLoopSyntax {
    fn from(value: ForSyntax) -> Self {
        match value {
            ForSyntax::Range => ForLoopSyntax::Range,
            ForSyntax::Iter => ForLoopSyntax::Iter,
        }
    }
}

/// Tokenize and parse Ripple source files
#[derive(Parser, Debug)]
#[command(name = "ripple")]
#[command(version = RIPPLE_VERSION)]
#[command(about = "Tokenize and parse Ripple source files", long_about = None)]
pub struct Cli {
    /// File to tokenize and parse (prints tokens, then the AST)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    // Debug/development flags
    /// Tokenize only
    #[arg(long = "lex", value_name = "FILE", conflicts_with = "file")]
    pub lex_file: Option<PathBuf>,

    /// Parse only
    #[arg(long = "parse", value_name = "FILE", conflicts_with_all = ["file", "lex_file"])]
    pub parse_file: Option<PathBuf>,

    /// Accepted `for` loop form
    #[arg(long = "for-syntax", value_enum, default_value_t = ForSyntax::Range)]
    pub for_syntax: ForSyntax,
}

impl Cli {
    /// Syntax configuration selected by the flags.
    pub fn syntax_config(&self) -> SyntaxConfig {
        SyntaxConfig::new().with_for_loop(self.for_syntax.into())
    }
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    let config = cli.syntax_config();

    if let Some(file) = cli.lex_file {
        return commands::lex_file(&file, config);
    }
    if let Some(file) = cli.parse_file {
        return commands::parse_file(&file, config);
    }

    match cli.file {
        Some(file) => commands::run_file(&file, config),
        None => Err(CliError::failure("Error: no input file (see `ripple --help`)")),
    }
}

// ============================================================================
// Tests
// ============================================================================
