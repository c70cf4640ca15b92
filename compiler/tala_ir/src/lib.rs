//! Tala IR - core data structures shared by every compiler phase.
//!
//! - Spans for source locations
//! - Interned identifiers (`Name`)
//! - Tokens and `TokenList` for lexer output
//! - The flat AST: expressions, statements, lambdas and their `where` bindings
//! - Arena allocation for expressions, statements and lambdas
//! - A read-only visitor for walking the AST
//!
//! # Design
//!
//! - **Intern Everything**: identifiers and string literals become `Name(u32)`
//! - **Flatten Everything**: no `Box<Expr>`, children are `ExprId(u32)` indices
//!
//! Floats are stored as their `u64` bit pattern so every AST type can derive
//! `Eq` and `Hash`.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod arena;
pub mod ast;
mod expr_id;
mod interner;
mod name;
mod span;
mod token;
mod traits;
pub mod visitor;

pub use arena::{ExprArena, SharedArena};
pub use ast::{
    BinaryOp, BindingPattern, Expr, ExprKind, Lambda, Module, Param, ParsedType, Stmt, StmtKind,
    UnaryOp, WhereBinding,
};
pub use expr_id::{ExprId, ExprRange, LambdaId, StmtRange};
pub use interner::{InternError, SharedInterner, StringInterner};
pub use name::Name;
pub use span::{Span, SpanError};
pub use token::{Token, TokenKind, TokenList};
pub use traits::Spanned;

static_assert_size!(Span, 8);
static_assert_size!(Name, 4);
static_assert_size!(ExprId, 4);
