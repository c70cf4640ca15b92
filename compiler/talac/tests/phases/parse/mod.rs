//! Syntax errors in and around `where` clauses.

use pretty_assertions::assert_eq;
use tala_diagnostic::ErrorCode;
use tala_ir::Span;

use crate::common::{codes, compile_err, compile_ok};

#[test]
fn clause_syntax_is_accepted() {
    for source in [
        "fn(x) where (y = x) => y",
        "fn(x) where (y = x,) => y",
        "fn(x): int where ([a, [b, c]] = x, d = a + b + c) => d",
        "fn(x, y = 2) where (z = if x < y then x else y) => z",
        "fn(x) => x + 1",
    ] {
        compile_ok(source);
    }
}

#[test]
fn missing_paren_after_where() {
    assert_eq!(codes("fn(x) where y = x => y"), vec![ErrorCode::E1003]);
}

#[test]
fn unbalanced_clause() {
    assert_eq!(codes("fn(x) where (y = x => y"), vec![ErrorCode::E1003]);
}

#[test]
fn missing_equals_after_target() {
    assert_eq!(codes("fn(x) where (y x) => y"), vec![ErrorCode::E1001]);
}

#[test]
fn empty_clause() {
    assert_eq!(codes("fn(x) where () => x"), vec![ErrorCode::E1008]);
}

#[test]
fn non_expression_source() {
    assert_eq!(codes("fn(x) where (y = ) => y"), vec![ErrorCode::E1002]);
}

#[test]
fn statements_in_a_binding() {
    for source in [
        "fn(x) where (y = let z = 1) => y",
        "fn(x) where (y = { x }) => y",
        "fn(x) where (y = if x { 1 } else { 2 }) => y",
        "fn(x) where (f = fn(a) => { a }) => f(x)",
    ] {
        assert_eq!(codes(source).first(), Some(&ErrorCode::E1016), "source: {source}");
    }
}

#[test]
fn second_where_clause() {
    let diagnostics = compile_err("fn(x) where (y = x) where (z = y) => z");
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].code, ErrorCode::E1017);
    assert_eq!(diagnostics[0].primary_span(), Some(Span::new(20, 25)));
}

#[test]
fn lexer_and_parser_errors_are_reported_together() {
    let codes = codes("let a = 1 $\nfn(x) where (y x) => y");
    assert_eq!(codes, vec![ErrorCode::E0001, ErrorCode::E1001]);
}

#[test]
fn a_lexer_error_alone_rejects_the_module() {
    assert_eq!(codes("fn(x) => x #"), vec![ErrorCode::E0001]);
}
