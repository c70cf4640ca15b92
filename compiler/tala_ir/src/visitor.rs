//! AST visitor.
//!
//! Default `visit_*` methods call the matching `walk_*` function, which
//! traverses children in source order. Override a `visit_*` method to act at a
//! node, and call the `walk_*` function from it to keep descending.
//!
//! ```text
//! struct CountLambdas(usize);
//!
//! impl<'ast> Visitor<'ast> for CountLambdas {
//!     fn visit_lambda(&mut self, id: LambdaId, lambda: &'ast Lambda, arena: &'ast ExprArena) {
//!         self.0 += 1;
//!         walk_lambda(self, lambda, arena);
//!     }
//! }
//! ```

use crate::ast::{BindingPattern, Expr, ExprKind, Lambda, Module, Param, Stmt, StmtKind, WhereBinding};
use crate::{ExprArena, ExprId, LambdaId};

/// Read-only AST visitor. The visitor may mutate its own state.
pub trait Visitor<'ast> {
    fn visit_module(&mut self, module: &'ast Module, arena: &'ast ExprArena) {
        walk_module(self, module, arena);
    }

    fn visit_stmt(&mut self, stmt: &'ast Stmt, arena: &'ast ExprArena) {
        walk_stmt(self, stmt, arena);
    }

    fn visit_expr(&mut self, expr: &'ast Expr, arena: &'ast ExprArena) {
        walk_expr(self, expr, arena);
    }

    fn visit_expr_id(&mut self, id: ExprId, arena: &'ast ExprArena) {
        self.visit_expr(arena.get_expr(id), arena);
    }

    fn visit_lambda(&mut self, id: LambdaId, lambda: &'ast Lambda, arena: &'ast ExprArena) {
        let _ = id;
        walk_lambda(self, lambda, arena);
    }

    fn visit_param(&mut self, param: &'ast Param, arena: &'ast ExprArena) {
        if let Some(default) = param.default {
            self.visit_expr_id(default, arena);
        }
    }

    fn visit_where_binding(&mut self, binding: &'ast WhereBinding, arena: &'ast ExprArena) {
        walk_where_binding(self, binding, arena);
    }

    fn visit_binding_pattern(&mut self, pattern: &'ast BindingPattern) {
        walk_binding_pattern(self, pattern);
    }
}

pub fn walk_module<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    module: &'ast Module,
    arena: &'ast ExprArena,
) {
    for stmt in arena.get_stmts(module.stmts) {
        visitor.visit_stmt(stmt, arena);
    }
}

pub fn walk_stmt<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    stmt: &'ast Stmt,
    arena: &'ast ExprArena,
) {
    match &stmt.kind {
        StmtKind::Let { pattern, init } => {
            visitor.visit_binding_pattern(pattern);
            visitor.visit_expr_id(*init, arena);
        }
        StmtKind::For { pattern, iter, body } => {
            visitor.visit_binding_pattern(pattern);
            visitor.visit_expr_id(*iter, arena);
            for stmt in arena.get_stmts(*body) {
                visitor.visit_stmt(stmt, arena);
            }
        }
        StmtKind::Expr(expr) => visitor.visit_expr_id(*expr, arena),
    }
}

pub fn walk_expr<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    expr: &'ast Expr,
    arena: &'ast ExprArena,
) {
    match &expr.kind {
        ExprKind::Int(_)
        | ExprKind::Float(_)
        | ExprKind::Bool(_)
        | ExprKind::Str(_)
        | ExprKind::Void
        | ExprKind::Ident(_)
        | ExprKind::Error => {}

        ExprKind::Binary { left, right, .. } => {
            visitor.visit_expr_id(*left, arena);
            visitor.visit_expr_id(*right, arena);
        }
        ExprKind::Unary { operand, .. } => visitor.visit_expr_id(*operand, arena),
        ExprKind::Ref(inner) => visitor.visit_expr_id(*inner, arena),
        ExprKind::Call { func, args } => {
            visitor.visit_expr_id(*func, arena);
            for &arg in arena.get_expr_list(*args) {
                visitor.visit_expr_id(arg, arena);
            }
        }
        ExprKind::Index { receiver, index } => {
            visitor.visit_expr_id(*receiver, arena);
            visitor.visit_expr_id(*index, arena);
        }
        ExprKind::List(items) | ExprKind::Tuple(items) => {
            for &item in arena.get_expr_list(*items) {
                visitor.visit_expr_id(item, arena);
            }
        }
        ExprKind::If {
            cond,
            then_branch,
            else_branch,
        } => {
            visitor.visit_expr_id(*cond, arena);
            visitor.visit_expr_id(*then_branch, arena);
            if let Some(else_branch) = else_branch {
                visitor.visit_expr_id(*else_branch, arena);
            }
        }
        ExprKind::Block(stmts) => {
            for stmt in arena.get_stmts(*stmts) {
                visitor.visit_stmt(stmt, arena);
            }
        }
        ExprKind::Lambda(id) => visitor.visit_lambda(*id, arena.get_lambda(*id), arena),
    }
}

/// Parameters, then `where` bindings in order, then the body.
pub fn walk_lambda<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    lambda: &'ast Lambda,
    arena: &'ast ExprArena,
) {
    for param in &lambda.params {
        visitor.visit_param(param, arena);
    }
    for binding in &lambda.bindings {
        visitor.visit_where_binding(binding, arena);
    }
    visitor.visit_expr_id(lambda.body, arena);
}

pub fn walk_where_binding<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    binding: &'ast WhereBinding,
    arena: &'ast ExprArena,
) {
    visitor.visit_binding_pattern(&binding.target);
    visitor.visit_expr_id(binding.source, arena);
}

pub fn walk_binding_pattern<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    pattern: &'ast BindingPattern,
) {
    if let BindingPattern::Destructure { elements, .. } = pattern {
        for element in elements {
            visitor.visit_binding_pattern(element);
        }
    }
}
