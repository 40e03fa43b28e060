//! Operator vocabulary.
//!
//! Ripple's token set declares the four arithmetic operators plus the assignment `=`. The grammar never applies
//! the arithmetic ones; they exist so the tokenizer can classify them and the parser can reject them with a clear
//! message.
//!
//! ## Examples
//! ```rust
//! use ripple_core::lang::operators::{self, OperatorId, OperatorKind};
//!
//! assert_eq!(operators::from_char('*'), Some(OperatorId::Star));
//! assert_eq!(operators::kind(OperatorId::Assign), OperatorKind::Assignment);
//! ```

/// Stable identifier for every operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorId {
    Plus,
    Minus,
    Star,
    Slash,
    Assign,
}

/// Whether an operator is arithmetic (`OP` tokens) or the assignment marker (`ASSIGN` token).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorKind {
    Arithmetic,
    Assignment,
}

/// Metadata for an operator.
#[derive(Debug, Clone, Copy)]
pub struct OperatorInfo {
    pub id: OperatorId,
    pub canonical: char,
    pub kind: OperatorKind,
}

/// Registry of all operators.
pub const OPERATORS: &[OperatorInfo] = &[
    info(OperatorId::Plus, '+', OperatorKind::Arithmetic),
    info(OperatorId::Minus, '-', OperatorKind::Arithmetic),
    info(OperatorId::Star, '*', OperatorKind::Arithmetic),
    info(OperatorId::Slash, '/', OperatorKind::Arithmetic),
    info(OperatorId::Assign, '=', OperatorKind::Assignment),
];

/// Canonical spelling.
pub fn as_char(id: OperatorId) -> char {
    info_for(id).canonical
}

/// Arithmetic vs. assignment.
pub fn kind(id: OperatorId) -> OperatorKind {
    info_for(id).kind
}

/// Full metadata.
pub fn info_for(id: OperatorId) -> &'static OperatorInfo {
    match id {
        OperatorId::Plus => &OPERATORS[0],
        OperatorId::Minus => &OPERATORS[1],
        OperatorId::Star => &OPERATORS[2],
        OperatorId::Slash => &OPERATORS[3],
        OperatorId::Assign => &OPERATORS[4],
    }
}

/// Lookup by character.
pub fn from_char(c: char) -> Option<OperatorId> {
    OPERATORS.iter().find(|o| o.canonical == c).map(|o| o.id)
}

const fn info(id: OperatorId, canonical: char, kind: OperatorKind) -> OperatorInfo {
    OperatorInfo { id, canonical, kind }
}
