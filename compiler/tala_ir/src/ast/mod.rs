//! Flat AST for Tala.
//!
//! Children are referenced through arena indices (`ExprId`, `ExprRange`,
//! `StmtRange`, `LambdaId`). Patterns own their sub-patterns directly since
//! they are small and never shared.

mod expr;
mod lambda;
mod operators;
mod patterns;
mod stmt;

pub use expr::{Expr, ExprKind};
pub use lambda::{Lambda, Param, ParsedType, WhereBinding};
pub use operators::{BinaryOp, UnaryOp};
pub use patterns::BindingPattern;
pub use stmt::{Module, Stmt, StmtKind};
