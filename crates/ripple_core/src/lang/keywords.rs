//! Define the reserved keyword vocabulary for the Ripple language.
//!
//! This module is the single source of truth for reserved words: a stable identifier ([`KeywordId`]) plus a
//! const metadata table ([`KEYWORDS`]) recording canonical spellings, categories and reservation rules.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**: `If` is an identifier, `if` is a keyword.
//! - `to` is only reserved when range-style for-loops are in use (see [`Reservation::RangeLoops`]). The tokenizer
//!   decides whether to honor that; this registry just records it.
//!
//! ## Examples
//! ```rust
//! use ripple_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("def"), Some(KeywordId::Def));
//! assert_eq!(keywords::token_name(KeywordId::Def), "DEF");
//! assert_eq!(keywords::from_str("Def"), None);
//! ```

/// Stable identifier for every reserved keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    // Control flow / statements
    If,
    Elif,
    Else,
    While,
    For,
    Return,

    // Definitions
    Def,

    // Loop clauses
    In,
    To,
}

/// High-level grouping for documentation and tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    ControlFlow,
    Definition,
    LoopClause,
}

/// When a spelling is treated as a keyword rather than an identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reservation {
    /// Always lexed as a keyword.
    Always,
    /// Only reserved when the `for ... in start to end:` loop form is enabled.
    RangeLoops,
}

/// Metadata for a keyword.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    /// Upper-case token-kind name used in diagnostics and token listings (`IF`, `DEF`, ...).
    pub token_name: &'static str,
    pub category: KeywordCategory,
    pub reservation: Reservation,
}

/// Registry of all keywords.
///
/// ## Notes
/// - The ordering is not semantically meaningful, but is grouped for readability.
pub const KEYWORDS: &[KeywordInfo] = &[
    // Control flow / statements
    info(KeywordId::If, "if", "IF", KeywordCategory::ControlFlow),
    info(KeywordId::Elif, "elif", "ELIF", KeywordCategory::ControlFlow),
    info(KeywordId::Else, "else", "ELSE", KeywordCategory::ControlFlow),
    info(KeywordId::While, "while", "WHILE", KeywordCategory::ControlFlow),
    info(KeywordId::For, "for", "FOR", KeywordCategory::ControlFlow),
    info(KeywordId::Return, "return", "RETURN", KeywordCategory::ControlFlow),
    // Definitions
    info(KeywordId::Def, "def", "DEF", KeywordCategory::Definition),
    // Loop clauses
    info(KeywordId::In, "in", "IN", KeywordCategory::LoopClause),
    KeywordInfo {
        id: KeywordId::To,
        canonical: "to",
        token_name: "TO",
        category: KeywordCategory::LoopClause,
        reservation: Reservation::RangeLoops,
    },
];

/// Canonical spelling.
///
/// ## Parameters
/// - `id`: Keyword identifier.
///
/// ## Returns
/// - The canonical spelling for `id`.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Token-kind name (`IF`, `RETURN`, ...).
pub fn token_name(id: KeywordId) -> &'static str {
    info_for(id).token_name
}

/// Category.
pub fn category(id: KeywordId) -> KeywordCategory {
    info_for(id).category
}

/// Reservation rule.
pub fn reservation(id: KeywordId) -> Reservation {
    info_for(id).reservation
}

/// Full metadata.
///
/// ## Returns
/// - The associated [`KeywordInfo`] from [`KEYWORDS`].
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    // Indexing by declaration order keeps this total without a fallible search.
    match id {
        KeywordId::If => &KEYWORDS[0],
        KeywordId::Elif => &KEYWORDS[1],
        KeywordId::Else => &KEYWORDS[2],
        KeywordId::While => &KEYWORDS[3],
        KeywordId::For => &KEYWORDS[4],
        KeywordId::Return => &KEYWORDS[5],
        KeywordId::Def => &KEYWORDS[6],
        KeywordId::In => &KEYWORDS[7],
        KeywordId::To => &KEYWORDS[8],
    }
}

/// Lookup by spelling.
///
/// ## Parameters
/// - `s`: Candidate keyword spelling.
///
/// ## Returns
/// - `Some(KeywordId)` if the spelling matches this registry, regardless of its [`Reservation`].
/// - `None` otherwise.
pub fn from_str(s: &str) -> Option<KeywordId> {
    KEYWORDS.iter().find(|k| k.canonical == s).map(|k| k.id)
}

// --- helpers -----------------------------------------------------------------

const fn info(
    id: KeywordId,
    canonical: &'static str,
    token_name: &'static str,
    category: KeywordCategory,
) -> KeywordInfo {
    KeywordInfo {
        id,
        canonical,
        token_name,
        category,
        reservation: Reservation::Always,
    }
}
