//! Grammar rules, one module per syntactic category.

mod expr;
mod lambda;
mod patterns;
mod stmt;
mod ty;
