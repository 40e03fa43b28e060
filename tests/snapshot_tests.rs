//! Snapshot tests for token listings and AST dumps
//!
//! These pin the exact text the `ripple` binary prints, so listing changes are reviewed and intentional.
//!
//! Run with: `cargo test --test snapshot_tests`
//! Review changes: `cargo insta review`

use ripple::cli::commands::{render_ast, render_tokens};
use ripple::{SyntaxConfig, lexer, parser};

fn token_listing(source: &str) -> String {
    let tokens = lexer::lex(source).expect("lexer failed");
    render_tokens(&tokens).trim_end().to_string()
}

fn ast_listing(source: &str) -> String {
    let program = parser::parse_source(source, SyntaxConfig::default()).expect("parse failed");
    render_ast(&program).trim_end().to_string()
}

#[test]
fn test_assignment_tokens() {
    insta::assert_snapshot!(token_listing("x = 10\n"), @r#"
(IDENTIFIER, "x")
(ASSIGN, "=")
(NUMBER, 10)
(NEWLINE, "\n")
"#);
}

#[test]
fn test_function_tokens() {
    insta::assert_snapshot!(token_listing("def f(a, b):\n    return a\n"), @r#"
(DEF, "def")
(IDENTIFIER, "f")
(LPAREN, "(")
(IDENTIFIER, "a")
(COMMA, ",")
(IDENTIFIER, "b")
(RPAREN, ")")
(COLON, ":")
(NEWLINE, "\n")
(INDENT, 4)
(RETURN, "return")
(IDENTIFIER, "a")
(NEWLINE, "\n")
(DEDENT, 4)
"#);
}

#[test]
fn test_nested_blocks_and_blank_line_tokens() {
    insta::assert_snapshot!(token_listing("for i in 0 to 3:\n  if i:\n    f(i)\n\ng()\n"), @r#"
(FOR, "for")
(IDENTIFIER, "i")
(IN, "in")
(NUMBER, 0)
(TO, "to")
(NUMBER, 3)
(COLON, ":")
(NEWLINE, "\n")
(INDENT, 2)
(IF, "if")
(IDENTIFIER, "i")
(COLON, ":")
(NEWLINE, "\n")
(INDENT, 4)
(IDENTIFIER, "f")
(LPAREN, "(")
(IDENTIFIER, "i")
(RPAREN, ")")
(NEWLINE, "\n")
(NEWLINE, "\n")
(DEDENT, 4)
(DEDENT, 2)
(IDENTIFIER, "g")
(LPAREN, "(")
(RPAREN, ")")
(NEWLINE, "\n")
"#);
}

#[test]
fn test_assignment_ast() {
    insta::assert_snapshot!(ast_listing("x = 10\n"), @r#"
[
    Assign(
        AssignStmt {
            name: "x",
            value: Num(
                10,
            ),
        },
    ),
]
"#);
}

#[test]
fn test_elif_ast() {
    insta::assert_snapshot!(ast_listing("if a:\n    f()\nelif b:\n    return b\n"), @r#"
[
    If(
        IfStmt {
            condition: Var(
                "a",
            ),
            then_body: [
                Call(
                    CallStmt {
                        name: "f",
                        args: [],
                    },
                ),
            ],
            else_branch: Some(
                Elif(
                    IfStmt {
                        condition: Var(
                            "b",
                        ),
                        then_body: [
                            Return(
                                Var(
                                    "b",
                                ),
                            ),
                        ],
                        else_branch: None,
                    },
                ),
            ),
        },
    ),
]
"#);
}
