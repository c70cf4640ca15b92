//! Validation through the driver: a rejected lambda is never callable.

use pretty_assertions::assert_eq;
use tala_diagnostic::ErrorCode;
use tala_ir::Span;

use crate::common::{codes, compile_err, compile_ok, run};

#[test]
fn shadowing_a_parameter_is_rejected() {
    let source = "let f = fn(x) where (x = 5) => x\nf(1)";
    let diagnostics = compile_err(source);
    assert_eq!(diagnostics.len(), 1);
    let diag = &diagnostics[0];
    assert_eq!(diag.code, ErrorCode::E2001);
    assert!(diag.message.contains("`x`"), "message: {}", diag.message);
    assert_eq!(diag.primary_span(), Some(Span::new(21, 22)));
}

#[test]
fn rejected_module_is_never_evaluated() {
    let (result, output) = run("print(\"side effect\")\nlet f = fn(x) where (x = 5) => x\nf(1)");
    let diagnostics = result.unwrap_err();
    assert_eq!(diagnostics[0].code, ErrorCode::E2001);
    assert_eq!(output, "");
}

#[test]
fn reference_marker_is_rejected_at_its_position() {
    let source = "fn(x) where (&y = x) => y";
    let diagnostics = compile_err(source);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].code, ErrorCode::E2002);
    let span = diagnostics[0].primary_span().unwrap();
    assert_eq!(span.start, 13);
}

#[test]
fn references_are_rejected_everywhere() {
    assert_eq!(codes("fn(x) where (y = &x) => y"), vec![ErrorCode::E2002]);
    assert_eq!(codes("let &a = 1"), vec![ErrorCode::E2002]);
    assert_eq!(codes("fn(x) => &x"), vec![ErrorCode::E2002]);
}

#[test]
fn duplicate_names_in_one_clause() {
    assert_eq!(codes("fn(x) where (a = x, a = 1) => a"), vec![ErrorCode::E2001]);
    assert_eq!(codes("fn(p) where ([a, a] = p) => a"), vec![ErrorCode::E2001]);
    assert_eq!(codes("fn(x, x) => x"), vec![ErrorCode::E2004]);
}

#[test]
fn every_violation_is_collected() {
    let source = "fn(x) where (x = 1, &y = 2) => y\nfn(a) where (a = &a) => a";
    assert_eq!(
        codes(source),
        vec![
            ErrorCode::E2001,
            ErrorCode::E2002,
            ErrorCode::E2001,
            ErrorCode::E2002
        ]
    );
}

#[test]
fn lambdas_without_clauses_are_unaffected() {
    let compiled = compile_ok("let inc = fn(x) => x + 1\nlet add = fn(a, b = 1) => a + b");
    assert_eq!(compiled.module.arena().lambda_count(), 2);
}
