//! Text output of the driver: diagnostics and reflection dumps.

use std::fmt::Write;

use tala_check::reflect;
use tala_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use tala_diagnostic::span_utils::LineOffsetTable;
use tala_diagnostic::Diagnostic;

use crate::Compiled;

/// Render diagnostics without colors, followed by a summary line.
pub fn render_diagnostics(path: &str, source: &str, diagnostics: &[Diagnostic]) -> String {
    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false)
        .with_source(path, source);
    emitter.emit_all(diagnostics);
    emitter.emit_summary(diagnostics.len(), 0);
    String::from_utf8_lossy(&emitter.into_inner()).into_owned()
}

/// Describe every lambda of a compiled module and its `where` bindings.
///
/// ```text
/// 1:9 fn(pair)
///   0: [a, b] = pair  (a, b)
///   1: sum = a + b  (sum)
/// ```
///
/// Lambdas appear in source order; one without a clause is marked
/// `(no where clause)`.
pub fn bindings_report(source: &str, compiled: &Compiled) -> String {
    let lines = LineOffsetTable::build(source);
    let arena = compiled.module.arena();
    let interner = &*compiled.interner;
    let mut out = String::new();

    for view in reflect::lambdas(&compiled.module) {
        let (line, col) = lines.offset_to_line_col(source, view.span().start);
        let head = tala_fmt::format_lambda_head(arena, interner, view.lambda);
        let _ = writeln!(out, "{line}:{col} {head}");
        if !view.has_where_clause() {
            out.push_str("  (no where clause)\n");
        }
        for (binding, node) in view.bindings.iter().zip(&view.lambda.bindings) {
            let names: Vec<&str> = binding.names.iter().map(|n| interner.lookup(*n)).collect();
            let _ = writeln!(
                out,
                "  {}: {}  ({})",
                binding.index,
                tala_fmt::format_binding(arena, interner, node),
                names.join(", ")
            );
        }
    }
    out
}
