//! Tala driver library.
//!
//! Runs the pipeline `lex -> parse -> check -> eval` over one source text and
//! converts every phase's errors to [`Diagnostic`]s. The `tala` binary is a
//! thin layer of commands over these functions.

mod pipeline;
mod report;

pub use pipeline::{compile, parse_source, run_source, run_source_with, Compiled, RunOptions};
pub use report::{bindings_report, render_diagnostics};

pub use tala_diagnostic::Diagnostic;
pub use tala_eval::Value;
