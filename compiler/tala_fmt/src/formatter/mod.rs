//! Rendering engine.
//!
//! Expressions render inline; blocks, `for` bodies and conditional blocks
//! break onto indented lines.
//!
//! - [`literals`]: literal values
//! - [`patterns`]: binding patterns, parameters and `where` clauses

mod literals;
mod patterns;

use tala_ir::{ExprArena, ExprId, ExprKind, Stmt, StmtKind, StmtRange, StringInterner};

/// Spaces per indentation level.
pub const INDENT_WIDTH: usize = 4;

/// Binding strength of a rendered expression. Operands weaker than their
/// context are parenthesized.
const PREC_OPEN: u8 = 0;
const PREC_UNARY: u8 = 7;
const PREC_ATOM: u8 = 9;

pub struct Formatter<'a> {
    arena: &'a ExprArena,
    interner: &'a StringInterner,
    buf: String,
    indent: usize,
}

impl<'a> Formatter<'a> {
    pub fn new(arena: &'a ExprArena, interner: &'a StringInterner) -> Self {
        Formatter {
            arena,
            interner,
            buf: String::new(),
            indent: 0,
        }
    }

    /// A formatter for a fragment at the current indentation.
    fn fragment(&self) -> Formatter<'a> {
        Formatter {
            arena: self.arena,
            interner: self.interner,
            buf: String::new(),
            indent: self.indent,
        }
    }

    pub fn finish(self) -> String {
        self.buf
    }

    #[inline]
    fn emit(&mut self, text: &str) {
        self.buf.push_str(text);
    }

    fn newline(&mut self) {
        self.buf.push('\n');
        for _ in 0..self.indent * INDENT_WIDTH {
            self.buf.push(' ');
        }
    }

    fn precedence(&self, id: ExprId) -> u8 {
        match &self.arena.get_expr(id).kind {
            ExprKind::Binary { op, .. } => op.precedence(),
            ExprKind::Unary { .. } | ExprKind::Ref(_) => PREC_UNARY,
            ExprKind::Lambda(_) | ExprKind::If { .. } => PREC_OPEN,
            _ => PREC_ATOM,
        }
    }

    /// Render `id`, parenthesized if it binds weaker than `min`.
    fn operand(&mut self, id: ExprId, min: u8) {
        if self.precedence(id) < min {
            self.emit("(");
            self.expr(id);
            self.emit(")");
        } else {
            self.expr(id);
        }
    }

    fn expr_list(&mut self, items: &[ExprId]) {
        for (i, &item) in items.iter().enumerate() {
            if i > 0 {
                self.emit(", ");
            }
            self.expr(item);
        }
    }

    pub fn expr(&mut self, id: ExprId) {
        tala_stack::ensure_sufficient_stack(|| self.expr_inner(id));
    }

    fn expr_inner(&mut self, id: ExprId) {
        let arena = self.arena;
        match &arena.get_expr(id).kind {
            ExprKind::Int(n) => self.emit(&n.to_string()),
            ExprKind::Float(bits) => self.emit(&literals::float(*bits)),
            ExprKind::Bool(b) => self.emit(if *b { "true" } else { "false" }),
            ExprKind::Str(name) => {
                let quoted = literals::quoted(self.interner.lookup(*name));
                self.emit(&quoted);
            }
            ExprKind::Void => self.emit("void"),
            ExprKind::Ident(name) => self.emit(self.interner.lookup(*name)),
            ExprKind::Binary { op, left, right } => {
                let prec = op.precedence();
                self.operand(*left, prec);
                self.emit(" ");
                self.emit(op.as_symbol());
                self.emit(" ");
                self.operand(*right, prec + 1);
            }
            ExprKind::Unary { op, operand } => {
                self.emit(op.as_symbol());
                self.operand(*operand, PREC_UNARY);
            }
            ExprKind::Ref(operand) => {
                self.emit("&");
                self.operand(*operand, PREC_UNARY);
            }
            ExprKind::Call { func, args } => {
                self.operand(*func, PREC_ATOM);
                self.emit("(");
                self.expr_list(arena.get_expr_list(*args));
                self.emit(")");
            }
            ExprKind::Index { receiver, index } => {
                self.operand(*receiver, PREC_ATOM);
                self.emit("[");
                self.expr(*index);
                self.emit("]");
            }
            ExprKind::List(items) => {
                self.emit("[");
                self.expr_list(arena.get_expr_list(*items));
                self.emit("]");
            }
            ExprKind::Tuple(items) => {
                let items = arena.get_expr_list(*items);
                self.emit("(");
                self.expr_list(items);
                if items.len() == 1 {
                    self.emit(",");
                }
                self.emit(")");
            }
            ExprKind::If {
                cond,
                then_branch,
                else_branch,
            } => self.if_expr(*cond, *then_branch, *else_branch),
            ExprKind::Block(stmts) => self.block(*stmts),
            ExprKind::Lambda(id) => self.lambda(arena.get_lambda(*id)),
            ExprKind::Error => self.emit("<error>"),
        }
    }

    fn if_expr(&mut self, cond: ExprId, then_branch: ExprId, else_branch: Option<ExprId>) {
        self.emit("if ");
        self.expr(cond);

        if matches!(self.arena.get_expr(then_branch).kind, ExprKind::Block(_)) {
            self.emit(" ");
            self.expr(then_branch);
            if let Some(else_branch) = else_branch {
                self.emit(" else ");
                self.expr(else_branch);
            }
            return;
        }

        self.emit(" then ");
        // `if a then if b then c else d` gives the `else` to the inner `if`.
        let dangling = else_branch.is_some()
            && matches!(
                self.arena.get_expr(then_branch).kind,
                ExprKind::If {
                    else_branch: None,
                    ..
                }
            );
        if dangling {
            self.emit("(");
            self.expr(then_branch);
            self.emit(")");
        } else {
            self.expr(then_branch);
        }
        if let Some(else_branch) = else_branch {
            self.emit(" else ");
            self.expr(else_branch);
        }
    }

    fn block(&mut self, stmts: StmtRange) {
        let stmts = self.arena.get_stmts(stmts);
        if stmts.is_empty() {
            self.emit("{}");
            return;
        }
        self.emit("{");
        self.indent += 1;
        self.newline();
        self.stmt_list(stmts);
        self.indent -= 1;
        self.newline();
        self.emit("}");
    }

    /// Statements on separate lines. A statement is terminated with `;` when
    /// the next one starts with `(` or `[`, which would otherwise continue it
    /// as a call or index.
    pub fn stmt_list(&mut self, stmts: &[Stmt]) {
        let rendered: Vec<String> = stmts
            .iter()
            .map(|stmt| {
                let mut f = self.fragment();
                f.stmt(stmt);
                f.finish()
            })
            .collect();

        for (i, text) in rendered.iter().enumerate() {
            if i > 0 {
                self.newline();
            }
            self.emit(text);
            let next_is_delimited = rendered
                .get(i + 1)
                .is_some_and(|next| next.starts_with('(') || next.starts_with('['));
            if next_is_delimited {
                self.emit(";");
            }
        }
    }

    pub fn stmt(&mut self, stmt: &Stmt) {
        match &stmt.kind {
            StmtKind::Let { pattern, init } => {
                self.emit("let ");
                self.pattern(pattern);
                self.emit(" = ");
                self.expr(*init);
            }
            StmtKind::For {
                pattern,
                iter,
                body,
            } => {
                self.emit("for ");
                self.pattern(pattern);
                self.emit(" in ");
                self.expr(*iter);
                self.emit(" ");
                self.block(*body);
            }
            StmtKind::Expr(expr) => self.expr(*expr),
        }
    }
}
