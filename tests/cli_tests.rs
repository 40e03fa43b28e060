//! Tests for the `ripple` CLI command implementations.

use std::fs;
use std::path::PathBuf;
use std::process;

use ripple::cli::ExitCode;
use ripple::cli::commands::{front_end, lex_file, parse_file, read_source, run_file, tokenize, write_run};
use ripple::{ForLoopSyntax, SyntaxConfig};

/// Write `source` to a uniquely named file in the system temp directory.
fn temp_source(name: &str, source: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("ripple_cli_{}_{}.rpl", process::id(), name));
    fs::write(&path, source).expect("write temp source");
    path
}

#[test]
fn run_file_succeeds_on_valid_program() {
    let path = temp_source("valid", "def f(a):\n    return a\nf(1)\n");
    let result = run_file(&path, SyntaxConfig::default());
    let _ = fs::remove_file(&path);
    assert_eq!(result.unwrap(), ExitCode::SUCCESS);
}

#[test]
fn debug_commands_succeed_on_valid_program() {
    let path = temp_source("debug", "x = 1\n");
    let lexed = lex_file(&path, SyntaxConfig::default());
    let parsed = parse_file(&path, SyntaxConfig::default());
    let _ = fs::remove_file(&path);
    assert_eq!(lexed.unwrap(), ExitCode::SUCCESS);
    assert_eq!(parsed.unwrap(), ExitCode::SUCCESS);
}

#[test]
fn missing_file_is_reported() {
    let err = read_source(&PathBuf::from("no/such/dir/prog.rpl")).unwrap_err();
    assert_eq!(err.exit_code, ExitCode::FAILURE);
    assert!(err.message.contains("Cannot access file"), "got: {}", err.message);
}

#[test]
fn lexical_error_is_rendered_with_file_name() {
    let err = tokenize("bad.rpl", "x = @\n", SyntaxConfig::default()).unwrap_err();
    assert_eq!(err.exit_code, ExitCode::FAILURE);
    assert!(err.message.contains("Unexpected character '@'"), "got: {}", err.message);
    assert!(err.message.contains("bad.rpl"), "got: {}", err.message);
}

#[test]
fn syntax_error_fails_parse_file() {
    let path = temp_source("syntax", "x 10\n");
    let result = parse_file(&path, SyntaxConfig::default());
    let _ = fs::remove_file(&path);
    let err = result.unwrap_err();
    assert_eq!(err.exit_code, ExitCode::FAILURE);
    assert!(err.message.contains("Expected ASSIGN, got (NUMBER, 10)"), "got: {}", err.message);
}

#[test]
fn front_end_honors_for_syntax() {
    let source = "for x in xs:\n    f(x)\n";
    assert!(front_end("loop.rpl", source, SyntaxConfig::default()).is_err());

    let iter = SyntaxConfig::new().with_for_loop(ForLoopSyntax::Iter);
    let (tokens, program) = front_end("loop.rpl", source, iter).unwrap();
    assert!(!tokens.is_empty());
    assert_eq!(program.statements.len(), 1);
}

#[test]
fn run_listing_shows_tokens_then_ast() {
    let mut out = Vec::new();
    write_run(&mut out, "ok.rpl", "x = 1\n", SyntaxConfig::default()).unwrap();
    let listing = String::from_utf8(out).unwrap();

    assert!(listing.starts_with("Tokens:\n(IDENTIFIER, \"x\")\n"), "got: {listing}");
    let ast_at = listing.find("Abstract Syntax Tree:\n").expect("AST heading");
    assert!(listing[ast_at..].contains("AssignStmt"), "got: {listing}");
}

#[test]
fn run_listing_keeps_tokens_on_syntax_error() {
    let mut out = Vec::new();
    let err = write_run(&mut out, "bad.rpl", "x 10\n", SyntaxConfig::default()).unwrap_err();
    let listing = String::from_utf8(out).unwrap();

    assert_eq!(listing, "Tokens:\n(IDENTIFIER, \"x\")\n(NUMBER, 10)\n(NEWLINE, \"\\n\")\n");
    assert!(err.message.contains("Expected ASSIGN, got (NUMBER, 10)"), "got: {}", err.message);
}

#[test]
fn run_listing_is_empty_on_lexical_error() {
    let mut out = Vec::new();
    let err = write_run(&mut out, "bad.rpl", "x = @\n", SyntaxConfig::default()).unwrap_err();
    assert!(out.is_empty());
    assert!(err.message.contains("Unexpected character '@'"), "got: {}", err.message);
}
