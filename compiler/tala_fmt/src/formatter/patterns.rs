//! Binding patterns, lambda heads and `where` clauses.

use tala_ir::{BindingPattern, Lambda, Param, WhereBinding};

use super::Formatter;

impl Formatter<'_> {
    pub fn pattern(&mut self, pattern: &BindingPattern) {
        if pattern.by_ref() {
            self.emit("&");
        }
        match pattern {
            BindingPattern::Name { name, .. } => self.emit(self.interner.lookup(*name)),
            BindingPattern::Destructure { elements, .. } => {
                self.emit("[");
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        self.emit(", ");
                    }
                    self.pattern(element);
                }
                self.emit("]");
            }
        }
    }

    fn param(&mut self, param: &Param) {
        self.emit(self.interner.lookup(param.name));
        if let Some(ty) = param.ty {
            self.emit(": ");
            self.emit(ty.name());
        }
        if let Some(default) = param.default {
            self.emit(" = ");
            self.expr(default);
        }
    }

    /// `fn(params)` and an optional `: type`.
    pub fn lambda_head(&mut self, lambda: &Lambda) {
        self.emit("fn(");
        for (i, param) in lambda.params.iter().enumerate() {
            if i > 0 {
                self.emit(", ");
            }
            self.param(param);
        }
        self.emit(")");
        if let Some(ty) = lambda.ret_ty {
            self.emit(": ");
            self.emit(ty.name());
        }
    }

    pub fn where_binding(&mut self, binding: &WhereBinding) {
        self.pattern(&binding.target);
        self.emit(" = ");
        self.expr(binding.source);
    }

    pub(super) fn lambda(&mut self, lambda: &Lambda) {
        self.lambda_head(lambda);
        if lambda.has_where_clause() {
            self.emit(" where (");
            for (i, binding) in lambda.bindings.iter().enumerate() {
                if i > 0 {
                    self.emit(", ");
                }
                self.where_binding(binding);
            }
            self.emit(")");
        }
        self.emit(" => ");
        self.expr(lambda.body);
    }
}
