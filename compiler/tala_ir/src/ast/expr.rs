//! Expression nodes.

use std::fmt;

use crate::{BinaryOp, ExprId, ExprRange, LambdaId, Name, Span, Spanned, StmtRange, UnaryOp};

/// Expression node.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    #[inline]
    pub const fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }
}

impl Spanned for Expr {
    fn span(&self) -> Span {
        self.span
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.span)
    }
}

/// Expression kinds.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum ExprKind {
    Int(i64),
    /// Float stored as bits for `Hash`.
    Float(u64),
    Bool(bool),
    Str(Name),
    Void,

    Ident(Name),

    Binary {
        op: BinaryOp,
        left: ExprId,
        right: ExprId,
    },
    Unary {
        op: UnaryOp,
        operand: ExprId,
    },
    /// `&expr`. Tala has no references; the node exists so the checker can
    /// point at the marker.
    Ref(ExprId),

    Call {
        func: ExprId,
        args: ExprRange,
    },
    Index {
        receiver: ExprId,
        index: ExprId,
    },

    List(ExprRange),
    Tuple(ExprRange),

    /// `if c then a else b`, or the block form `if c { .. } else { .. }`
    /// (whose branches are `Block` expressions).
    If {
        cond: ExprId,
        then_branch: ExprId,
        else_branch: Option<ExprId>,
    },

    /// `{ stmt* }`; value of the last expression statement, else `void`.
    Block(StmtRange),

    Lambda(LambdaId),

    /// Placeholder produced during error recovery.
    Error,
}

impl ExprKind {
    /// Statement-level constructs: anything that carries statements.
    pub fn is_statement_level(&self) -> bool {
        matches!(self, ExprKind::Block(_))
    }
}
