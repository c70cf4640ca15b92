//! The tree-walking interpreter.
//!
//! One `Interpreter` evaluates one environment. Module code runs in the
//! interpreter the caller created; each lambda call runs in a child
//! interpreter that owns a fresh call environment and borrows the interner
//! and configuration from its parent. When the call finishes the child, and
//! with it the call scope, is dropped.

use tala_check::CheckedModule;
use tala_ir::{ExprArena, Name, SharedArena, Span, StringInterner};

use crate::environment::{AlreadyBound, Environment};
use crate::errors::{self, EvalResult};
use crate::{Builtin, EvalConfig, LambdaValue, Value};

pub struct Interpreter<'a> {
    pub(crate) interner: &'a StringInterner,
    pub(crate) config: &'a EvalConfig,
    /// Arena of the code currently being evaluated.
    pub(crate) arena: SharedArena,
    pub(crate) env: Environment,
    /// Number of lambda calls on the stack above module level.
    call_depth: usize,
}

impl<'a> Interpreter<'a> {
    pub fn new(interner: &'a StringInterner, config: &'a EvalConfig) -> Self {
        Interpreter {
            interner,
            config,
            arena: SharedArena::new(ExprArena::new()),
            env: Environment::new(),
            call_depth: 0,
        }
    }

    /// Evaluate a checked module's statements.
    ///
    /// Returns the value of the final statement when it is an expression,
    /// otherwise `void`. Top-level bindings stay in this interpreter's
    /// environment, so several modules can be run one after another against
    /// the same interner.
    pub fn run(&mut self, checked: &CheckedModule) -> EvalResult {
        self.arena = checked.shared_arena().clone();
        let stmts = checked.module().stmts;
        tracing::debug!(stmts = stmts.len(), "running module");
        self.eval_stmts(stmts)
    }

    /// Call a function value with already evaluated arguments.
    pub fn call(&mut self, func: &Value, args: &[Value]) -> EvalResult {
        let span = match func {
            Value::Lambda(lambda) => lambda.node().span,
            _ => Span::DUMMY,
        };
        self.call_value(func, args, span)
    }

    /// Look up a top-level variable by name.
    pub fn global(&self, name: &str) -> Option<Value> {
        self.lookup_name(self.interner.intern(name))
    }

    /// The environment of this interpreter.
    pub fn env(&self) -> &Environment {
        &self.env
    }

    pub(crate) fn call_value(&mut self, func: &Value, args: &[Value], span: Span) -> EvalResult {
        match func {
            Value::Lambda(lambda) => self.call_lambda(lambda, args, span),
            Value::Builtin(builtin) => builtin.call(args, &self.config.print, span),
            other => Err(errors::not_callable(other.type_name(), span)),
        }
    }

    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(lambda = lambda.id().index(), args = args.len(), depth = self.call_depth)
    )]
    fn call_lambda(&mut self, lambda: &LambdaValue, args: &[Value], span: Span) -> EvalResult {
        self.check_recursion_limit(span)?;
        let mut callee = Interpreter {
            interner: self.interner,
            config: self.config,
            arena: lambda.shared_arena().clone(),
            env: Environment::for_call(lambda.captures_handle()),
            call_depth: self.call_depth.saturating_add(1),
        };
        callee.eval_lambda_call(lambda.node(), args, span)
    }

    fn check_recursion_limit(&self, span: Span) -> EvalResult<()> {
        if self.call_depth >= self.config.max_call_depth {
            return Err(errors::stack_overflow(self.config.max_call_depth, span));
        }
        Ok(())
    }

    /// Resolve a name: environment first, then builtins.
    pub(crate) fn lookup_name(&self, name: Name) -> Option<Value> {
        self.env
            .lookup(name)
            .cloned()
            .or_else(|| Builtin::from_name(self.interner.lookup(name)).map(Value::Builtin))
    }

    pub(crate) fn define(&mut self, name: Name, value: Value, span: Span) -> EvalResult<()> {
        let interner = self.interner;
        self.env
            .define(name, value)
            .map_err(|AlreadyBound(name)| errors::already_bound(interner.lookup(name), span))
    }
}
