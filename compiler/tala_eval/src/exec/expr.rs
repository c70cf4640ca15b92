//! Expression and statement evaluation.

use smallvec::SmallVec;
use tala_ir::{BinaryOp, Expr, ExprId, ExprKind, ExprRange, Span, StmtKind, StmtRange};
use tala_stack::ensure_sufficient_stack;

use super::operators::{eval_binary, eval_unary};
use crate::errors::{self, EvalResult};
use crate::{Interpreter, LambdaValue, Value};

impl Interpreter<'_> {
    pub(crate) fn eval_expr(&mut self, id: ExprId) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_expr_inner(id))
    }

    fn eval_expr_inner(&mut self, id: ExprId) -> EvalResult {
        let Expr { kind, span } = self.arena.get_expr(id).clone();
        match kind {
            ExprKind::Int(n) => Ok(Value::Int(n)),
            ExprKind::Float(bits) => Ok(Value::Float(f64::from_bits(bits))),
            ExprKind::Bool(b) => Ok(Value::Bool(b)),
            ExprKind::Str(name) => Ok(Value::string(self.interner.lookup(name))),
            // Only present alongside a parse error, which prevents evaluation.
            ExprKind::Void | ExprKind::Error => Ok(Value::Void),

            ExprKind::Ident(name) => self
                .lookup_name(name)
                .ok_or_else(|| errors::undefined_variable(self.interner.lookup(name), span)),

            ExprKind::Binary {
                op: op @ (BinaryOp::And | BinaryOp::Or),
                left,
                right,
            } => self.eval_logical(op, left, right),
            ExprKind::Binary { op, left, right } => {
                let left = self.eval_expr(left)?;
                let right = self.eval_expr(right)?;
                eval_binary(op, &left, &right, span)
            }
            ExprKind::Unary { op, operand } => {
                let value = self.eval_expr(operand)?;
                eval_unary(op, &value, span)
            }
            // Rejected by the checker; evaluates to its operand.
            ExprKind::Ref(inner) => self.eval_expr(inner),

            ExprKind::Call { func, args } => {
                let func = self.eval_expr(func)?;
                let args = self.eval_args(args)?;
                self.call_value(&func, &args, span)
            }
            ExprKind::Index { receiver, index } => {
                let receiver = self.eval_expr(receiver)?;
                let index = self.eval_expr(index)?;
                eval_index(&receiver, &index, span)
            }

            ExprKind::List(range) => Ok(Value::list(self.eval_args(range)?.into_vec())),
            ExprKind::Tuple(range) => Ok(Value::tuple(self.eval_args(range)?.into_vec())),

            ExprKind::If {
                cond,
                then_branch,
                else_branch,
            } => {
                let cond_span = self.arena.get_expr(cond).span;
                match self.eval_expr(cond)? {
                    Value::Bool(true) => self.eval_expr(then_branch),
                    Value::Bool(false) => match else_branch {
                        Some(else_branch) => self.eval_expr(else_branch),
                        None => Ok(Value::Void),
                    },
                    other => Err(errors::type_mismatch("bool", other.type_name(), cond_span)),
                }
            }

            ExprKind::Block(stmts) => self.eval_block(stmts),

            ExprKind::Lambda(lambda) => Ok(Value::Lambda(LambdaValue::new(
                lambda,
                self.arena.clone(),
                self.env.capture(),
            ))),
        }
    }

    /// `&&` and `||`: the right operand runs only when it decides the result.
    fn eval_logical(&mut self, op: BinaryOp, left: ExprId, right: ExprId) -> EvalResult {
        let left = self.eval_bool(left)?;
        match (op, left) {
            (BinaryOp::And, false) => Ok(Value::Bool(false)),
            (BinaryOp::Or, true) => Ok(Value::Bool(true)),
            _ => self.eval_bool(right).map(Value::Bool),
        }
    }

    fn eval_bool(&mut self, id: ExprId) -> EvalResult<bool> {
        let span = self.arena.get_expr(id).span;
        match self.eval_expr(id)? {
            Value::Bool(b) => Ok(b),
            other => Err(errors::type_mismatch("bool", other.type_name(), span)),
        }
    }

    fn eval_args(&mut self, range: ExprRange) -> EvalResult<SmallVec<[Value; 4]>> {
        let ids: SmallVec<[ExprId; 4]> = self.arena.get_expr_list(range).iter().copied().collect();
        ids.into_iter().map(|id| self.eval_expr(id)).collect()
    }

    fn eval_block(&mut self, stmts: StmtRange) -> EvalResult {
        self.env.push_block();
        let result = self.eval_stmts(stmts);
        self.env.pop_block();
        result
    }

    /// Run statements in the current scope.
    ///
    /// The value is that of the final statement when it is an expression,
    /// otherwise `void`.
    pub(crate) fn eval_stmts(&mut self, stmts: StmtRange) -> EvalResult {
        let mut last = Value::Void;
        for index in 0..stmts.len() {
            let stmt = self.arena.get_stmts(stmts)[index].clone();
            last = match stmt.kind {
                StmtKind::Expr(expr) => self.eval_expr(expr)?,
                StmtKind::Let { pattern, init } => {
                    let value = self.eval_expr(init)?;
                    self.bind_pattern(&pattern, value)?;
                    Value::Void
                }
                StmtKind::For {
                    pattern,
                    iter,
                    body,
                } => {
                    let iter_span = self.arena.get_expr(iter).span;
                    let items = self.eval_expr(iter)?;
                    let Some(items) = items.as_sequence() else {
                        return Err(errors::type_mismatch(
                            "list or tuple",
                            items.type_name(),
                            iter_span,
                        ));
                    };
                    for item in items {
                        self.env.push_block();
                        let result = self
                            .bind_pattern(&pattern, item.clone())
                            .and_then(|()| self.eval_stmts(body));
                        self.env.pop_block();
                        result?;
                    }
                    Value::Void
                }
            };
        }
        Ok(last)
    }
}

fn eval_index(receiver: &Value, index: &Value, span: Span) -> EvalResult {
    let Some(items) = receiver.as_sequence() else {
        return Err(errors::type_mismatch(
            "list or tuple",
            receiver.type_name(),
            span,
        ));
    };
    let Value::Int(index) = *index else {
        return Err(errors::type_mismatch("int", index.type_name(), span));
    };
    usize::try_from(index)
        .ok()
        .and_then(|i| items.get(i))
        .cloned()
        .ok_or_else(|| errors::index_out_of_bounds(index, items.len(), span))
}
