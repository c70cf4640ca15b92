//! Read-only views of lambdas and their `where` bindings.

use tala_ir::{BindingPattern, Expr, ExprId, Lambda, LambdaId, Name, ParsedType, Span};

use crate::CheckedModule;

/// A lambda of a checked module.
#[derive(Clone, Debug)]
pub struct LambdaView<'a> {
    pub id: LambdaId,
    pub lambda: &'a Lambda,
    /// In declaration order.
    pub bindings: Vec<BindingView<'a>>,
}

impl LambdaView<'_> {
    pub fn span(&self) -> Span {
        self.lambda.span
    }

    pub fn params(&self) -> impl Iterator<Item = (Name, Option<ParsedType>)> + '_ {
        self.lambda.params.iter().map(|p| (p.name, p.ty))
    }

    pub fn has_where_clause(&self) -> bool {
        self.lambda.has_where_clause()
    }
}

/// One `where` binding.
#[derive(Clone, Debug)]
pub struct BindingView<'a> {
    /// Position in the clause, from 0.
    pub index: usize,
    pub target: &'a BindingPattern,
    pub source: ExprId,
    pub source_expr: &'a Expr,
    /// Names the target introduces, left to right.
    pub names: Vec<Name>,
    pub span: Span,
}

/// Every lambda of the module, in source order.
pub fn lambdas(checked: &CheckedModule) -> Vec<LambdaView<'_>> {
    let arena = checked.arena();
    // Lambdas are allocated after their body, so inner ones come first.
    let mut ids: Vec<(LambdaId, &Lambda)> = arena.lambdas().collect();
    ids.sort_by_key(|(_, lambda)| lambda.span.start);
    ids.into_iter()
        .map(|(id, lambda)| view(checked, id, lambda))
        .collect()
}

/// A single lambda by id.
pub fn lambda(checked: &CheckedModule, id: LambdaId) -> LambdaView<'_> {
    view(checked, id, checked.arena().get_lambda(id))
}

fn view<'a>(checked: &'a CheckedModule, id: LambdaId, lambda: &'a Lambda) -> LambdaView<'a> {
    let arena = checked.arena();
    let bindings = lambda
        .bindings
        .iter()
        .enumerate()
        .map(|(index, binding)| BindingView {
            index,
            target: &binding.target,
            source: binding.source,
            source_expr: arena.get_expr(binding.source),
            names: binding.target.names().into_iter().map(|(n, _)| n).collect(),
            span: binding.span,
        })
        .collect();
    LambdaView {
        id,
        lambda,
        bindings,
    }
}
