//! The validator walk.
//!
//! Per lambda: parameter uniqueness, then for each binding in order the
//! parameter shadow check, the intra-clause duplicate check, the reference
//! check and the structural check. `&` markers and `&expr` outside `where`
//! clauses are reported too.

use rustc_hash::FxHashMap;
use tala_ir::visitor::{walk_expr, walk_lambda, walk_stmt, Visitor};
use tala_ir::{
    Expr, ExprArena, ExprKind, Lambda, LambdaId, Name, Span, Spanned, Stmt, StmtKind,
    StringInterner, WhereBinding,
};
use tracing::trace;

use crate::{CheckError, CheckErrorKind, Collision, RefSite};

/// Names visible to the checks of one lambda's `where` clause.
struct ClauseFrame {
    params: Vec<(Name, Span)>,
    /// Names introduced by bindings checked so far.
    bound: FxHashMap<Name, Span>,
}

/// Offending nodes found while walking one binding's source.
#[derive(Default)]
struct SourceFrame {
    refs: Vec<Span>,
    blocks: Vec<Span>,
}

pub(crate) struct Checker<'a> {
    interner: &'a StringInterner,
    clauses: Vec<ClauseFrame>,
    sources: Vec<SourceFrame>,
    pub(crate) errors: Vec<CheckError>,
}

impl<'a> Checker<'a> {
    pub(crate) fn new(interner: &'a StringInterner) -> Self {
        Checker {
            interner,
            clauses: Vec::new(),
            sources: Vec::new(),
            errors: Vec::new(),
        }
    }

    fn name_str(&self, name: Name) -> String {
        self.interner.lookup(name).to_string()
    }

    fn check_params(&mut self, lambda: &Lambda) {
        let mut seen: FxHashMap<Name, Span> = FxHashMap::default();
        for param in &lambda.params {
            if let Some(&first) = seen.get(&param.name) {
                self.errors.push(
                    CheckError::new(
                        CheckErrorKind::DuplicateParameter {
                            name: self.name_str(param.name),
                        },
                        param.span,
                    )
                    .with_secondary(first, "first declared here"),
                );
            } else {
                seen.insert(param.name, param.span);
            }
        }
    }

    /// Checks 1 and 2 for every name the binding's target introduces.
    fn check_target_names(&mut self, binding: &WhereBinding) {
        let Some(frame) = self.clauses.last_mut() else {
            return;
        };
        let mut errors = Vec::new();
        let mut in_pattern: FxHashMap<Name, Span> = FxHashMap::default();

        for (name, span) in binding.target.names() {
            let shown = self.interner.lookup(name).to_string();
            if let Some(&(_, param_span)) = frame.params.iter().find(|(p, _)| *p == name) {
                errors.push(
                    CheckError::new(
                        CheckErrorKind::DuplicateBindingName {
                            name: shown,
                            collision: Collision::Parameter,
                        },
                        span,
                    )
                    .with_secondary(param_span, "parameter declared here"),
                );
            } else if let Some(&earlier) = frame.bound.get(&name) {
                errors.push(
                    CheckError::new(
                        CheckErrorKind::DuplicateBindingName {
                            name: shown,
                            collision: Collision::EarlierBinding,
                        },
                        span,
                    )
                    .with_secondary(earlier, "first bound here"),
                );
            } else if let Some(&earlier) = in_pattern.get(&name) {
                errors.push(
                    CheckError::new(
                        CheckErrorKind::DuplicateBindingName {
                            name: shown,
                            collision: Collision::SamePattern,
                        },
                        span,
                    )
                    .with_secondary(earlier, "first bound here"),
                );
            } else {
                in_pattern.insert(name, span);
            }
        }

        frame.bound.extend(in_pattern);
        self.errors.extend(errors);
    }

    fn report_ref(&mut self, span: Span, site: RefSite) {
        self.errors.push(CheckError::new(
            CheckErrorKind::ReferenceNotAllowed { site },
            span,
        ));
    }
}

impl<'ast> Visitor<'ast> for Checker<'_> {
    fn visit_stmt(&mut self, stmt: &'ast Stmt, arena: &'ast ExprArena) {
        if let StmtKind::Let { pattern, .. } | StmtKind::For { pattern, .. } = &stmt.kind {
            for span in pattern.ref_markers() {
                self.report_ref(span, RefSite::StatementTarget);
            }
        }
        walk_stmt(self, stmt, arena);
    }

    fn visit_expr(&mut self, expr: &'ast Expr, arena: &'ast ExprArena) {
        match &expr.kind {
            ExprKind::Ref(_) => match self.sources.last_mut() {
                Some(frame) => frame.refs.push(expr.span),
                None => self.report_ref(expr.span, RefSite::Expression),
            },
            ExprKind::Block(_) => {
                if let Some(frame) = self.sources.last_mut() {
                    frame.blocks.push(expr.span);
                }
            }
            ExprKind::If { then_branch, .. }
                if arena.get_expr(*then_branch).kind.is_statement_level() =>
            {
                if let Some(frame) = self.sources.last_mut() {
                    frame.blocks.push(expr.span);
                }
            }
            _ => {}
        }
        tala_stack::ensure_sufficient_stack(|| walk_expr(self, expr, arena));
    }

    fn visit_lambda(&mut self, id: LambdaId, lambda: &'ast Lambda, arena: &'ast ExprArena) {
        trace!(lambda = id.index(), bindings = lambda.bindings.len(), "checking lambda");
        self.check_params(lambda);
        self.clauses.push(ClauseFrame {
            params: lambda.params.iter().map(|p| (p.name, p.span)).collect(),
            bound: FxHashMap::default(),
        });
        walk_lambda(self, lambda, arena);
        self.clauses.pop();
    }

    fn visit_where_binding(&mut self, binding: &'ast WhereBinding, arena: &'ast ExprArena) {
        self.check_target_names(binding);

        for span in binding.target.ref_markers() {
            self.report_ref(span, RefSite::BindingTarget);
        }

        // Nested bindings inside the source push their own frame.
        self.sources.push(SourceFrame::default());
        self.visit_expr_id(binding.source, arena);
        let found = self.sources.pop().unwrap_or_default();

        for span in found.refs {
            self.report_ref(span, RefSite::BindingSource);
        }

        // A conditional block also contains its branch blocks; report the
        // outermost node only.
        let mut reported: Vec<Span> = Vec::new();
        for span in found.blocks {
            if reported.iter().any(|outer| outer.contains_span(span)) {
                continue;
            }
            reported.push(span);
            self.errors.push(
                CheckError::new(CheckErrorKind::StatementInBinding, span)
                    .with_secondary(binding.target.span(), "in the value of this binding"),
            );
        }
    }
}
