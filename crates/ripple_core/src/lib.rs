//! Provide the canonical language vocabulary for the Ripple front end.
//!
//! This crate is intentionally tiny and dependency-free. It holds the reserved-word, operator and punctuation
//! registries that both the tokenizer and any downstream tooling agree on.
//!
//! ## Notes
//!
//! - This is a "vocabulary core" crate: **no IO**, no global mutable state, and no syntax-tree types.
//! - Registries are `const` tables, so lookups never allocate and never need initialization.

pub mod lang;
