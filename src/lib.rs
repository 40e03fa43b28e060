#![forbid(unsafe_code)]
//! Ripple: a small indentation-structured scripting language
//!
//! This crate is the host around the syntax front end: it re-exports the tokenizer, parser and AST from
//! `ripple_syntax` and provides the `ripple` command-line driver.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod cli;
pub mod version;

pub use ripple_core::lang;
pub use ripple_syntax::{ast, config, diagnostics, lexer, parser};
pub use ripple_syntax::{CompileError, ForLoopSyntax, LexError, SyntaxConfig, SyntaxError};
