//! Property-based tests for the Ripple front end
//!
//! These tests use proptest to verify tokenizer and parser invariants across many randomly
//! generated inputs, catching edge cases that hand-written tests might miss.

use proptest::prelude::*;
use ripple::lexer::{self, TokenKind};
use ripple::{CompileError, SyntaxConfig, SyntaxError, parser};

// =============================================================================
// Strategies
// =============================================================================

/// Any text over the accepted alphabet, including layout characters.
fn alphabet_source_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9 \t=+*/():,;\n-]{0,120}"
}

/// A line that is either empty or starts at column 0.
fn flush_line_strategy() -> impl Strategy<Value = String> {
    "([a-z0-9=(][a-z0-9 =():,]{0,12})?"
}

/// A non-blank line at an arbitrary indentation.
fn indented_line_strategy() -> impl Strategy<Value = String> {
    (0usize..12, "[a-z]{1,6}").prop_map(|(indent, word)| format!("{}{}", " ".repeat(indent), word))
}

fn ident_strategy() -> impl Strategy<Value = String> {
    "[a-z_][a-z0-9_]{0,8}".prop_filter("must not be a keyword", |s| {
        ripple::lang::keywords::from_str(s).is_none()
    })
}

// =============================================================================
// Tokenizer Properties
// =============================================================================

proptest! {
    /// Property: tokenizing is a pure function of its input
    #[test]
    fn tokenizing_is_idempotent(source in alphabet_source_strategy()) {
        prop_assert_eq!(lexer::lex(&source), lexer::lex(&source));
    }

    /// Property: without leading whitespace there is no layout beyond one NEWLINE per physical line
    #[test]
    fn flush_source_has_no_indentation_tokens(lines in prop::collection::vec(flush_line_strategy(), 0..12)) {
        let source: String = lines.iter().map(|line| format!("{line}\n")).collect();
        let tokens = lexer::lex(&source).expect("alphabet is fully tokenizable");

        prop_assert!(tokens.iter().all(|t| !matches!(t.kind, TokenKind::Indent | TokenKind::Dedent)));
        let newlines = tokens.iter().filter(|t| t.kind == TokenKind::Newline).count();
        prop_assert_eq!(newlines, lines.len());
    }

    /// Property: INDENT/DEDENT nest like brackets and always close by end of input
    #[test]
    fn indentation_tokens_are_balanced(lines in prop::collection::vec(indented_line_strategy(), 0..16)) {
        let source = lines.join("\n");
        let tokens = lexer::lex(&source).expect("lex failed");

        let mut depth: i64 = 0;
        for token in &tokens {
            match token.kind {
                TokenKind::Indent => depth += 1,
                TokenKind::Dedent => depth -= 1,
                _ => {}
            }
            prop_assert!(depth >= 0, "DEDENT without a matching INDENT");
        }
        prop_assert_eq!(depth, 0);
    }

    /// Property: every INDENT column is later closed by a DEDENT of the same column
    #[test]
    fn dedent_columns_mirror_indents(lines in prop::collection::vec(indented_line_strategy(), 0..16)) {
        let source = lines.join("\n");
        let tokens = lexer::lex(&source).expect("lex failed");

        let mut open = Vec::new();
        for token in &tokens {
            match token.kind {
                TokenKind::Indent => open.push(token.value.as_column()),
                TokenKind::Dedent => {
                    prop_assert_eq!(open.pop(), Some(token.value.as_column()));
                }
                _ => {}
            }
        }
        prop_assert!(open.is_empty());
    }
}

// =============================================================================
// Parser Properties
// =============================================================================

proptest! {
    /// Property: flat assignment sequences parse to one statement per line
    #[test]
    fn assignments_parse_one_per_line(
        assignments in prop::collection::vec((ident_strategy(), 0i64..1_000_000), 1..10)
    ) {
        let source: String = assignments.iter().map(|(name, n)| format!("{name} = {n}\n")).collect();
        let program = parser::parse_source(&source, SyntaxConfig::default()).expect("parse failed");
        prop_assert_eq!(program.statements.len(), assignments.len());
    }

    /// Property: the parser never panics on tokenizable input
    #[test]
    fn parser_never_panics(source in alphabet_source_strategy()) {
        if let Ok(tokens) = lexer::lex(&source) {
            let _ = parser::parse(&tokens);
        }
    }

    /// Property: parenthesized nesting of any depth parses or fails with a nesting error, never overflows
    #[test]
    fn deep_parentheses_never_overflow(depth in 0usize..4096) {
        let source = format!("x = {}1{}\n", "(".repeat(depth), ")".repeat(depth));
        match parser::parse_source(&source, SyntaxConfig::default()) {
            Ok(program) => {
                prop_assert!(depth <= parser::MAX_NESTING_DEPTH);
                prop_assert_eq!(program.statements.len(), 1);
            }
            Err(err) => {
                prop_assert!(depth > parser::MAX_NESTING_DEPTH);
                let is_nesting_error = matches!(err, CompileError::Syntax(SyntaxError::NestingTooDeep { .. }));
                prop_assert!(is_nesting_error);
            }
        }
    }

    /// Property: nested `while` blocks of any depth parse back to the same depth
    #[test]
    fn nesting_depth_survives_parsing(depth in 1usize..8, name in ident_strategy()) {
        let mut source = String::new();
        for level in 0..depth {
            source.push_str(&format!("{}while {name}:\n", "  ".repeat(level)));
        }
        source.push_str(&format!("{}{name} = 0\n", "  ".repeat(depth)));

        let program = parser::parse_source(&source, SyntaxConfig::default()).expect("parse failed");
        let mut body = &program.statements;
        let mut seen = 0;
        while let Some(ripple::ast::Statement::While(stmt)) = body.first() {
            seen += 1;
            body = &stmt.body;
        }
        prop_assert_eq!(seen, depth);
    }
}
