//! Tala Eval - tree-walking evaluator.
//!
//! - `Value`: runtime values; heap payloads are `Arc`-backed so values,
//!   including lambda values, are `Send + Sync`
//! - `Environment`: capture snapshot at the bottom, then the per-call scope,
//!   then block scopes
//! - `Interpreter`: evaluates a `CheckedModule` and calls lambda values
//!
//! A lambda call binds its parameters, evaluates each `where` binding in
//! declaration order into the call scope, then evaluates the body. The call
//! scope is dropped when the call returns or fails.

mod builtins;
mod config;
mod environment;
pub mod errors;
mod exec;
mod interpreter;
mod print_handler;
mod value;

pub use builtins::Builtin;
pub use config::{EvalConfig, DEFAULT_MAX_CALL_DEPTH};
pub use environment::{AlreadyBound, Environment, Scope, ScopeKind};
pub use errors::{EvalError, EvalErrorKind, EvalResult};
pub use interpreter::Interpreter;
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, PrintHandlerImpl, SharedPrintHandler,
};
pub use value::{Captures, Heap, LambdaValue, Value};

#[cfg(test)]
mod tests;
