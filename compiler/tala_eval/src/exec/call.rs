//! Lambda calls: parameters, then the `where` clause, then the body.

use tala_ir::{Lambda, Span};

use crate::errors::{self, EvalResult};
use crate::{Interpreter, Value};

impl Interpreter<'_> {
    /// Evaluate one call of `lambda` in this (fresh) call environment.
    ///
    /// Each `where` binding is evaluated exactly once, in declaration order,
    /// against the parameters, captures and earlier bindings. The first
    /// failure stops the call and propagates unchanged.
    pub(crate) fn eval_lambda_call(
        &mut self,
        lambda: &Lambda,
        args: &[Value],
        call_span: Span,
    ) -> EvalResult {
        self.bind_parameters(lambda, args, call_span)?;

        for (index, binding) in lambda.bindings.iter().enumerate() {
            let value = self.eval_expr(binding.source)?;
            tracing::trace!(index, value = %value, "where binding");
            self.bind_pattern(&binding.target, value)?;
        }

        let result = self.eval_expr(lambda.body)?;
        if let Some(ty) = lambda.ret_ty {
            if !result.matches(ty) {
                let body_span = self.arena.get_expr(lambda.body).span;
                return Err(errors::type_mismatch(ty.name(), result.type_name(), body_span));
            }
        }
        Ok(result)
    }

    /// Bind arguments positionally, filling missing ones from defaults.
    ///
    /// A default is evaluated in the call scope, so it can read the
    /// parameters before it.
    fn bind_parameters(&mut self, lambda: &Lambda, args: &[Value], call_span: Span) -> EvalResult<()> {
        let max = lambda.params.len();
        let min = lambda.required_params();
        if args.len() > max {
            return Err(errors::arity_mismatch(min, max, args.len(), call_span));
        }

        for (index, param) in lambda.params.iter().enumerate() {
            let value = match (args.get(index), param.default) {
                (Some(arg), _) => arg.clone(),
                (None, Some(default)) => self.eval_expr(default)?,
                (None, None) => {
                    return Err(errors::arity_mismatch(min, max, args.len(), call_span));
                }
            };
            if let Some(ty) = param.ty {
                if !value.matches(ty) {
                    return Err(errors::type_mismatch(ty.name(), value.type_name(), param.span));
                }
            }
            self.define(param.name, value, param.span)?;
        }
        Ok(())
    }
}
