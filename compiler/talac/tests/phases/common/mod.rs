//! Shared helpers for phase tests.

use tala_diagnostic::ErrorCode;
use tala_eval::{buffer_handler, EvalConfig};
use talac::{Compiled, Diagnostic, Value};

/// Compile `source`, panicking with the diagnostics on failure.
pub fn compile_ok(source: &str) -> Compiled {
    match talac::compile(source) {
        Ok(compiled) => compiled,
        Err(diagnostics) => panic!("unexpected diagnostics for {source:?}: {diagnostics:#?}"),
    }
}

/// Diagnostics of a source expected to fail compilation.
pub fn compile_err(source: &str) -> Vec<Diagnostic> {
    match talac::compile(source) {
        Ok(_) => panic!("expected {source:?} to be rejected"),
        Err(diagnostics) => diagnostics,
    }
}

pub fn codes(source: &str) -> Vec<ErrorCode> {
    compile_err(source).iter().map(|d| d.code).collect()
}

/// Run with captured output.
pub fn run(source: &str) -> (Result<Value, Vec<Diagnostic>>, String) {
    let config = EvalConfig::default().with_print_handler(buffer_handler());
    let result = talac::run_source_with(source, &config);
    (result, config.print.output())
}

pub fn run_ok(source: &str) -> Value {
    match run(source).0 {
        Ok(value) => value,
        Err(diagnostics) => panic!("unexpected diagnostics for {source:?}: {diagnostics:#?}"),
    }
}
