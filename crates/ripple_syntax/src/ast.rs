//! Abstract Syntax Tree definitions for Ripple
//!
//! The tree is strictly owned: every node owns its children, nothing is shared and nothing points back up.

use std::fmt;

/// Source location span (byte offsets)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Span> for miette::SourceSpan {
    fn from(span: Span) -> Self {
        miette::SourceSpan::new(span.start.into(), span.len())
    }
}

/// Identifier (variable, function or parameter name)
pub type Ident = String;

/// An ordered sequence of statements delimited by one `INDENT` and its matching `DEDENT`.
pub type Block = Vec<Statement>;

/// A program is a block with no enclosing indentation requirement.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Program {
    pub statements: Block,
}

// ============================================================================
// Statements
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// `name = expr`
    Assign(AssignStmt),
    /// `return expr`
    Return(Expr),
    /// `if cond: ... [elif ...] [else: ...]`
    If(IfStmt),
    /// `for var in start to end: ...` or `for var in iterable: ...`
    For(ForStmt),
    /// `while cond: ...`
    While(WhileStmt),
    /// `def name(params): ...`
    Def(FunctionDef),
    /// `name(args)`
    Call(CallStmt),
}

impl Statement {
    /// Compound statements own an indented block and end their line at the block's `DEDENT`.
    pub fn is_compound(&self) -> bool {
        matches!(
            self,
            Statement::If(_) | Statement::For(_) | Statement::While(_) | Statement::Def(_)
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignStmt {
    pub name: Ident,
    pub value: Expr,
}

/// A conditional. `elif` chains nest to the right: each `elif` becomes the else-branch of the level above it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IfStmt {
    pub condition: Expr,
    pub then_body: Block,
    pub else_branch: Option<ElseBranch>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElseBranch {
    /// `elif cond: ...` (and whatever follows it)
    Elif(Box<IfStmt>),
    /// `else: ...`
    Else(Block),
}

/// A counting or iterating loop.
///
/// ## Notes
/// - With range-style loops (`for i in 0 to n:`) `end` is always `Some`.
/// - With iterator-style loops (`for x in xs:`) `start` holds the iterable and `end` is `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForStmt {
    pub var: Ident,
    pub start: Expr,
    pub end: Option<Expr>,
    pub body: Block,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhileStmt {
    pub condition: Expr,
    pub body: Block,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDef {
    pub name: Ident,
    pub params: Vec<Ident>,
    pub body: Block,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallStmt {
    pub name: Ident,
    pub args: Vec<Expr>,
}

// ============================================================================
// Expressions
// ============================================================================

/// Expressions are deliberately minimal: literals and names. Parenthesized groups parse to their inner expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Num(i64),
    Var(Ident),
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Num(n) => write!(f, "{}", n),
            Expr::Var(name) => write!(f, "{}", name),
        }
    }
}
