//! Ripple language vocabulary registries.
//!
//! This module is the "front door" for language-level vocabulary: reserved keywords, operators and punctuation.
//!
//! Callers work with **stable IDs** (e.g. `KeywordId`, `OperatorId`) and look up spellings/metadata via the
//! registry tables instead of comparing strings all over the tokenizer and parser.
//!
//! ## Notes
//! - Registries are **pure**: no AST types, no IO, no side effects.
//! - The tokenizer/parser enforce syntax; registries only provide spellings and metadata (diagnostics, docs,
//!   highlighting).
//!
//! ## Examples
//! ```rust
//! use ripple_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("elif"), Some(KeywordId::Elif));
//! assert_eq!(keywords::as_str(KeywordId::Elif), "elif");
//! ```

pub mod keywords;
pub mod operators;
pub mod punctuation;
