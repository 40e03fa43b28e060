//! Syntax frontend for the Ripple language: tokenizer, parser, AST, diagnostics.
//!
//! Ripple is a small indentation-structured scripting language. This crate turns source text into a flat token
//! stream (with synthesized `INDENT`/`DEDENT`/`NEWLINE` layout tokens) and parses that stream into an AST.
//!
//! ## Notes
//! - This crate is "syntax-only": no semantic analysis, no evaluation.
//! - Vocabulary identity (keywords/operators/punctuation) comes from `ripple_core::lang` registries.
//! - Both stages fail fast: the first lexical or syntax error aborts the call.
//!
//! ## Examples
//! ```rust
//! use ripple_syntax::{lexer, parser};
//!
//! let tokens = lexer::lex("x = 10\n").unwrap();
//! let program = parser::parse(&tokens).unwrap();
//! assert_eq!(program.statements.len(), 1);
//! ```

pub mod ast;
pub mod config;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod token_helpers;

pub use config::{ForLoopSyntax, SyntaxConfig};
pub use diagnostics::{CompileError, LexError, SyntaxError};
