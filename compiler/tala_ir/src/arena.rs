//! Arena allocation for the flat AST.
//!
//! - Contiguous storage for all expressions, statements and lambdas
//! - Child references use `ExprId`/`LambdaId` indices
//! - Lists use ranges into a flattened side table

// Arc is needed for SharedArena, the handle lambda values carry.
#![expect(clippy::disallowed_types, reason = "Arc is the implementation of SharedArena")]

use std::fmt;
use std::sync::Arc;

use crate::{Expr, ExprId, ExprRange, Lambda, LambdaId, Stmt, StmtRange};

/// Contiguous storage for everything the parser produces for one source.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ExprArena {
    /// All expressions (indexed by `ExprId`).
    exprs: Vec<Expr>,

    /// Flattened expression lists (call args, list and tuple elements).
    expr_lists: Vec<ExprId>,

    /// Statements, grouped in contiguous runs addressed by `StmtRange`.
    stmts: Vec<Stmt>,

    /// Lambda definitions (indexed by `LambdaId`), in the order the parser
    /// finished them.
    lambdas: Vec<Lambda>,
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "arena sizes are bounded by source length, which Span already limits to u32"
)]
impl ExprArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Heuristic: ~1 expression per 8 bytes of source.
    pub fn with_capacity(source_len: usize) -> Self {
        let estimated = source_len / 8;
        ExprArena {
            exprs: Vec::with_capacity(estimated),
            expr_lists: Vec::with_capacity(estimated / 4),
            stmts: Vec::with_capacity(estimated / 8),
            lambdas: Vec::new(),
        }
    }

    // ===== Expressions =====

    #[inline]
    pub fn alloc_expr(&mut self, expr: Expr) -> ExprId {
        let id = ExprId::new(self.exprs.len() as u32);
        self.exprs.push(expr);
        id
    }

    /// # Panics
    /// Panics if `id` is out of bounds.
    #[inline]
    #[track_caller]
    pub fn get_expr(&self, id: ExprId) -> &Expr {
        &self.exprs[id.index()]
    }

    #[inline]
    pub fn expr_count(&self) -> usize {
        self.exprs.len()
    }

    // ===== Expression lists =====

    pub fn alloc_expr_list(&mut self, exprs: impl IntoIterator<Item = ExprId>) -> ExprRange {
        let start = self.expr_lists.len() as u32;
        self.expr_lists.extend(exprs);
        let len = self.expr_lists.len() as u32 - start;
        ExprRange::new(start, len)
    }

    #[inline]
    pub fn get_expr_list(&self, range: ExprRange) -> &[ExprId] {
        let start = range.start as usize;
        &self.expr_lists[start..start + range.len()]
    }

    // ===== Statements =====

    /// Store a run of statements contiguously.
    ///
    /// Nested blocks are parsed (and allocated) before their parent's run is
    /// pushed, so each run stays contiguous.
    pub fn alloc_stmts(&mut self, stmts: Vec<Stmt>) -> StmtRange {
        let start = self.stmts.len() as u32;
        let len = stmts.len() as u32;
        self.stmts.extend(stmts);
        StmtRange::new(start, len)
    }

    #[inline]
    pub fn get_stmts(&self, range: StmtRange) -> &[Stmt] {
        let start = range.start as usize;
        &self.stmts[start..start + range.len()]
    }

    // ===== Lambdas =====

    pub fn alloc_lambda(&mut self, lambda: Lambda) -> LambdaId {
        let id = LambdaId::new(self.lambdas.len() as u32);
        self.lambdas.push(lambda);
        id
    }

    /// # Panics
    /// Panics if `id` is out of bounds.
    #[inline]
    #[track_caller]
    pub fn get_lambda(&self, id: LambdaId) -> &Lambda {
        &self.lambdas[id.index()]
    }

    #[inline]
    pub fn lambda_count(&self) -> usize {
        self.lambdas.len()
    }

    /// All lambdas with their IDs, in allocation order (innermost first).
    pub fn lambdas(&self) -> impl Iterator<Item = (LambdaId, &Lambda)> {
        self.lambdas
            .iter()
            .enumerate()
            .map(|(i, lambda)| (LambdaId::new(i as u32), lambda))
    }
}

impl fmt::Debug for ExprArena {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ExprArena {{ {} exprs, {} list items, {} stmts, {} lambdas }}",
            self.exprs.len(),
            self.expr_lists.len(),
            self.stmts.len(),
            self.lambdas.len()
        )
    }
}

/// Shared, immutable arena.
///
/// Lambda values carry one so they can be called after the parse result that
/// produced them has gone out of scope, and from any thread.
#[derive(Clone)]
pub struct SharedArena(Arc<ExprArena>);

impl SharedArena {
    pub fn new(arena: ExprArena) -> Self {
        SharedArena(Arc::new(arena))
    }

    /// Whether two handles point at the same arena.
    pub fn ptr_eq(&self, other: &SharedArena) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl std::ops::Deref for SharedArena {
    type Target = ExprArena;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Debug for SharedArena {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SharedArena({:?})", &*self.0)
    }
}
