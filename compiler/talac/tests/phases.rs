// Test code uses unwrap/expect for clarity - panics provide good test failure messages
#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Phase-based driver tests.
//!
//! Each module drives the whole pipeline through the `talac` library and
//! asserts on one phase's behavior:
//!
//! - `parse/` - lexer and `where` clause syntax errors as diagnostics
//! - `check/` - validation: rejected clauses never become callable
//! - `eval/` - end-to-end evaluation of `where` clauses
//! - `report/` - diagnostic rendering and the bindings dump
//! - `common/` - shared helpers
//!
//! ```bash
//! cargo test -p talac --test phases
//! cargo test -p talac --test phases eval
//! ```

#[path = "phases/common/mod.rs"]
mod common;

#[path = "phases/parse/mod.rs"]
mod parse;

#[path = "phases/check/mod.rs"]
mod check;

#[path = "phases/eval/mod.rs"]
mod eval;

#[path = "phases/report/mod.rs"]
mod report;
