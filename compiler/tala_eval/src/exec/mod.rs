//! Evaluation of expressions, statements, patterns and lambda calls.

mod call;
mod expr;
mod operators;
mod pattern;
