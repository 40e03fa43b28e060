//! Parser for the Ripple programming language
//!
//! Converts a token stream into an AST with one recursive-descent function per grammar production.
//!
//! ## Examples
//!
//! ```rust
//! use ripple_syntax::ast::{Expr, FunctionDef, Statement};
//! use ripple_syntax::{lexer, parser};
//!
//! let source = "def f(a, b):\n    return a\n";
//! let tokens = lexer::lex(source).unwrap();
//! let ast = parser::parse(&tokens).unwrap();
//! assert_eq!(
//!     ast.statements,
//!     vec![Statement::Def(FunctionDef {
//!         name: "f".to_string(),
//!         params: vec!["a".to_string(), "b".to_string()],
//!         body: vec![Statement::Return(Expr::Var("a".to_string()))],
//!     })]
//! );
//! ```

use crate::ast::*;
use crate::config::{ForLoopSyntax, SyntaxConfig};
use crate::diagnostics::{CompileError, SyntaxError};
use crate::lexer::{self, Token, TokenKind};
use ripple_core::lang::keywords::KeywordId;
use ripple_core::lang::punctuation::PunctuationId;

// NOTE: The chunks below are `include!`d rather than declared as submodules so every production stays a
// private method of the one `Parser` type.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/stmts.rs");
include!("parser/expr.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
