//! Built-in functions.
//!
//! Builtins are not stored in any scope. A name that is not bound anywhere
//! resolves to the builtin of the same name, so user bindings shadow them.

use tala_ir::Span;

use crate::errors::{self, EvalResult};
use crate::print_handler::PrintHandlerImpl;
use crate::Value;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Builtin {
    /// `print(v)`: writes `v`, returns `void`.
    Print,
    /// `trace(label, v)`: writes `label`, returns `v`.
    Trace,
    /// `len(v)`: element count of a list or tuple, char count of a string.
    Len,
}

impl Builtin {
    pub fn from_name(name: &str) -> Option<Builtin> {
        match name {
            "print" => Some(Builtin::Print),
            "trace" => Some(Builtin::Trace),
            "len" => Some(Builtin::Len),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Builtin::Print => "print",
            Builtin::Trace => "trace",
            Builtin::Len => "len",
        }
    }

    fn arity(self) -> usize {
        match self {
            Builtin::Print | Builtin::Len => 1,
            Builtin::Trace => 2,
        }
    }

    pub(crate) fn call(self, args: &[Value], print: &PrintHandlerImpl, span: Span) -> EvalResult {
        if args.len() != self.arity() {
            return Err(errors::arity_mismatch(
                self.arity(),
                self.arity(),
                args.len(),
                span,
            ));
        }
        match (self, args) {
            (Builtin::Print, [value]) => {
                print.println(&value.to_string());
                Ok(Value::Void)
            }
            (Builtin::Trace, [label, value]) => {
                print.println(&label.to_string());
                Ok(value.clone())
            }
            (Builtin::Len, [value]) => len(value, span),
            _ => Err(errors::arity_mismatch(
                self.arity(),
                self.arity(),
                args.len(),
                span,
            )),
        }
    }
}

fn len(value: &Value, span: Span) -> EvalResult {
    let count = match value {
        Value::List(items) | Value::Tuple(items) => items.len(),
        Value::Str(s) => s.chars().count(),
        other => {
            return Err(errors::type_mismatch(
                "list, tuple or str",
                other.type_name(),
                span,
            ))
        }
    };
    i64::try_from(count)
        .map(Value::Int)
        .map_err(|_| errors::integer_overflow("len", span))
}
