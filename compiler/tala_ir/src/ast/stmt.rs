//! Statements and modules.

use crate::{BindingPattern, ExprId, Span, Spanned, StmtRange};

/// Statement node.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
}

impl Stmt {
    pub const fn new(kind: StmtKind, span: Span) -> Self {
        Stmt { kind, span }
    }
}

impl Spanned for Stmt {
    fn span(&self) -> Span {
        self.span
    }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum StmtKind {
    /// `let pattern = init`
    Let {
        pattern: BindingPattern,
        init: ExprId,
    },
    /// `for pattern in iter { body }`
    For {
        pattern: BindingPattern,
        iter: ExprId,
        body: StmtRange,
    },
    Expr(ExprId),
}

/// A parsed compilation unit: its top-level statements in source order.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Module {
    pub stmts: StmtRange,
}

impl Module {
    pub fn new(stmts: StmtRange) -> Self {
        Module { stmts }
    }
}
