//! The `where` clause of a lambda.

use super::{error_codes, parse_source, top_lambda};
use pretty_assertions::assert_eq;
use tala_diagnostic::ErrorCode;
use tala_ir::{BinaryOp, BindingPattern, ExprKind, ParsedType, Spanned};

fn target_names(source: &str) -> Vec<Vec<String>> {
    let (out, interner) = parse_source(source);
    assert!(!out.has_errors(), "{:?}", out.errors);
    top_lambda(&out)
        .bindings
        .iter()
        .map(|b| {
            b.target
                .names()
                .into_iter()
                .map(|(n, _)| interner.lookup(n).to_string())
                .collect()
        })
        .collect()
}

fn first_error(source: &str) -> (ErrorCode, String) {
    let (out, _) = parse_source(source);
    assert_eq!(out.errors.len(), 1, "source: {source}, errors: {:?}", out.errors);
    let err = &out.errors[0];
    (err.code, err.message.clone())
}

#[test]
fn absent_clause_yields_no_bindings() {
    let (out, _) = parse_source("fn(x) => x + 1");
    let lambda = top_lambda(&out);
    assert_eq!(lambda.where_span, None);
    assert!(lambda.bindings.is_empty());
}

#[test]
fn single_binding() {
    let (out, interner) = parse_source("fn(x) where (y = x * 2) => y + 1");
    assert!(!out.has_errors());
    let lambda = top_lambda(&out);
    assert_eq!(lambda.bindings.len(), 1);

    let binding = &lambda.bindings[0];
    let BindingPattern::Name { name, by_ref, .. } = binding.target else {
        panic!("expected a name target");
    };
    assert_eq!(interner.lookup(name), "y");
    assert!(!by_ref);
    assert!(matches!(
        out.arena.get_expr(binding.source).kind,
        ExprKind::Binary {
            op: BinaryOp::Mul,
            ..
        }
    ));
}

#[test]
fn bindings_keep_source_order() {
    assert_eq!(
        target_names("fn(pair) where ([a, b] = pair, sum = a + b) => sum"),
        vec![vec!["a", "b"], vec!["sum"]]
    );
    assert_eq!(
        target_names("fn(n) where (sq = n * n, cube = sq * n) => [sq, cube]"),
        vec![vec!["sq"], vec!["cube"]]
    );
}

#[test]
fn nested_destructuring_flattens_left_to_right() {
    assert_eq!(
        target_names("fn(p) where ([a, [b, c]] = p) => a"),
        vec![vec!["a", "b", "c"]]
    );
}

#[test]
fn trailing_comma_adds_no_binding() {
    assert_eq!(target_names("fn(x) where (y = x,) => y"), vec![vec!["y"]]);
}

#[test]
fn clause_follows_return_type() {
    let (out, _) = parse_source("fn(x: int): int where (y = x) => y");
    assert!(!out.has_errors());
    let lambda = top_lambda(&out);
    assert_eq!(lambda.ret_ty, Some(ParsedType::Int));
    assert_eq!(lambda.bindings.len(), 1);
}

#[test]
fn spans_cover_clause_and_binding() {
    let source = "fn(x) where (y = x + 1) => y";
    let (out, _) = parse_source(source);
    let lambda = top_lambda(&out);
    let where_span = lambda.where_span.unwrap();
    assert_eq!(where_span.snippet(source), Some("where (y = x + 1)"));
    assert_eq!(lambda.bindings[0].span().snippet(source), Some("y = x + 1"));
    assert_eq!(lambda.span.snippet(source), Some(source));
}

#[test]
fn reference_markers_are_recorded_not_rejected() {
    let (out, _) = parse_source("fn(x) where (&y = x) => y");
    assert!(!out.has_errors());
    assert!(top_lambda(&out).bindings[0].target.by_ref());

    let (out, _) = parse_source("fn(x) where ([a, &b] = x) => a");
    assert!(!out.has_errors());
    assert_eq!(top_lambda(&out).bindings[0].target.ref_markers().len(), 1);

    let (out, _) = parse_source("fn(x) where (y = &x) => y");
    assert!(!out.has_errors());
    let source = top_lambda(&out).bindings[0].source;
    assert!(matches!(out.arena.get_expr(source).kind, ExprKind::Ref(_)));
}

#[test]
fn expression_conditional_is_allowed() {
    let (out, _) = parse_source("fn(x) where (y = if x > 0 then x else 0 - x) => y");
    assert!(!out.has_errors());
}

#[test]
fn nested_lambda_may_have_its_own_clause() {
    let (out, _) = parse_source("fn(x) where (f = fn(z) where (w = z) => w) => f(x)");
    assert!(!out.has_errors());
    assert_eq!(out.arena.lambda_count(), 2);
}

#[test]
fn missing_open_paren() {
    let (code, message) = first_error("fn(x) where y = x => y");
    assert_eq!(code, ErrorCode::E1003);
    assert_eq!(message, "expected `(` after `where`, found identifier `y`");
}

#[test]
fn unbalanced_clause() {
    let (out, _) = parse_source("fn(x) where (y = x => y");
    assert_eq!(error_codes(&out), vec![ErrorCode::E1003]);
    let err = &out.errors[0];
    assert_eq!(err.secondary.len(), 1);
    assert_eq!(err.secondary[0].1, "clause opened here");
}

#[test]
fn missing_equals_after_target() {
    let (code, message) = first_error("fn(x) where (y x) => y");
    assert_eq!(code, ErrorCode::E1001);
    assert_eq!(message, "expected `=` after binding target, found identifier `x`");
}

#[test]
fn empty_clause() {
    let source = "fn(x) where () => x";
    let (out, _) = parse_source(source);
    assert_eq!(error_codes(&out), vec![ErrorCode::E1008]);
    assert_eq!(out.errors[0].span.snippet(source), Some("where ()"));
}

#[test]
fn token_that_cannot_start_a_pattern() {
    let (code, _) = first_error("fn(x) where (1 = x) => x");
    assert_eq!(code, ErrorCode::E1008);
}

#[test]
fn missing_expression() {
    let (code, message) = first_error("fn(x) where (y = ) => y");
    assert_eq!(code, ErrorCode::E1002);
    assert_eq!(message, "expected expression, found `)`");
}

#[test]
fn statements_in_binding_are_rejected() {
    let cases = [
        "fn(x) where (let y = x) => y",
        "fn(x) where (y = { x }) => y",
        "fn(x) where (y = if x { 1 } else { 2 }) => y",
        "fn(x) where (y = for) => y",
        "fn(x) where (f = fn(z) => { z }) => f(x)",
        "fn(x) where (y = x, z = if y then { 1 } else 2) => z",
    ];
    for source in cases {
        let (code, _) = first_error(source);
        assert_eq!(code, ErrorCode::E1016, "source: {source}");
    }
}

#[test]
fn second_where_clause_is_rejected() {
    let source = "fn(x) where (y = x) where (z = y) => z";
    let (out, _) = parse_source(source);
    assert_eq!(error_codes(&out), vec![ErrorCode::E1017]);
    let err = &out.errors[0];
    assert_eq!(err.span.snippet(source), Some("where"));
    assert_eq!(err.span.start, 20);
    assert_eq!(err.secondary[0].0.snippet(source), Some("where (y = x)"));
}

#[test]
fn failure_aborts_the_whole_lambda() {
    let (out, _) = parse_source("fn(x) where (y x) => y");
    assert_eq!(out.arena.lambda_count(), 0);
    assert!(out.module.stmts.is_empty());
}
