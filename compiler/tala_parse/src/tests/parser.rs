//! Statements, expressions and plain lambdas.

use super::{error_codes, parse_source, stmt_expr, top_lambda};
use pretty_assertions::assert_eq;
use tala_diagnostic::ErrorCode;
use tala_ir::{BinaryOp, BindingPattern, ExprKind, ParsedType, StmtKind, UnaryOp};

#[test]
fn multiplication_binds_tighter_than_addition() {
    let (out, _) = parse_source("1 + 2 * 3");
    assert!(!out.has_errors());

    let ExprKind::Binary { op, left, right } = out.arena.get_expr(stmt_expr(&out, 0)).kind else {
        panic!("expected binary expression");
    };
    assert_eq!(op, BinaryOp::Add);
    assert_eq!(out.arena.get_expr(left).kind, ExprKind::Int(1));
    assert!(matches!(
        out.arena.get_expr(right).kind,
        ExprKind::Binary {
            op: BinaryOp::Mul,
            ..
        }
    ));
}

#[test]
fn subtraction_is_left_associative() {
    let (out, _) = parse_source("10 - 3 - 2");
    let ExprKind::Binary { op, left, right } = out.arena.get_expr(stmt_expr(&out, 0)).kind else {
        panic!("expected binary expression");
    };
    assert_eq!(op, BinaryOp::Sub);
    assert!(matches!(
        out.arena.get_expr(left).kind,
        ExprKind::Binary {
            op: BinaryOp::Sub,
            ..
        }
    ));
    assert_eq!(out.arena.get_expr(right).kind, ExprKind::Int(2));
}

#[test]
fn logical_operators_have_lowest_precedence() {
    let (out, _) = parse_source("a || b && c == d");
    let ExprKind::Binary { op, right, .. } = out.arena.get_expr(stmt_expr(&out, 0)).kind else {
        panic!("expected binary expression");
    };
    assert_eq!(op, BinaryOp::Or);
    let ExprKind::Binary { op, right, .. } = out.arena.get_expr(right).kind else {
        panic!("expected `&&`");
    };
    assert_eq!(op, BinaryOp::And);
    assert!(matches!(
        out.arena.get_expr(right).kind,
        ExprKind::Binary {
            op: BinaryOp::Eq,
            ..
        }
    ));
}

#[test]
fn unary_and_reference_markers() {
    let (out, _) = parse_source("-x; !done; &value");
    assert!(!out.has_errors());
    assert!(matches!(
        out.arena.get_expr(stmt_expr(&out, 0)).kind,
        ExprKind::Unary {
            op: UnaryOp::Neg,
            ..
        }
    ));
    assert!(matches!(
        out.arena.get_expr(stmt_expr(&out, 1)).kind,
        ExprKind::Unary {
            op: UnaryOp::Not,
            ..
        }
    ));
    assert!(matches!(
        out.arena.get_expr(stmt_expr(&out, 2)).kind,
        ExprKind::Ref(_)
    ));
}

#[test]
fn parens_group_or_build_tuples() {
    let (out, _) = parse_source("(1); (1,); (); (1, 2)");
    assert!(!out.has_errors());

    assert_eq!(out.arena.get_expr(stmt_expr(&out, 0)).kind, ExprKind::Int(1));
    let tuple_len = |index| match out.arena.get_expr(stmt_expr(&out, index)).kind {
        ExprKind::Tuple(range) => range.len(),
        ref other => panic!("expected tuple, got {other:?}"),
    };
    assert_eq!(tuple_len(1), 1);
    assert_eq!(tuple_len(2), 0);
    assert_eq!(tuple_len(3), 2);
}

#[test]
fn calls_and_indexing_chain() {
    let (out, _) = parse_source("f(1, 2)[0]");
    assert!(!out.has_errors());
    let ExprKind::Index { receiver, .. } = out.arena.get_expr(stmt_expr(&out, 0)).kind else {
        panic!("expected index");
    };
    let ExprKind::Call { args, .. } = out.arena.get_expr(receiver).kind else {
        panic!("expected call");
    };
    assert_eq!(args.len(), 2);
}

#[test]
fn list_literal_allows_trailing_comma() {
    let (out, _) = parse_source("[1, 2, 3,]");
    let ExprKind::List(range) = out.arena.get_expr(stmt_expr(&out, 0)).kind else {
        panic!("expected list");
    };
    assert_eq!(out.arena.get_expr_list(range).len(), 3);
}

#[test]
fn lists_and_statement_runs_past_u16_keep_every_entry() {
    let count = usize::from(u16::MAX) + 2;

    let elements = vec!["0"; count - 1].join(", ");
    let (out, _) = parse_source(&format!("[{elements}, 7]"));
    assert!(!out.has_errors());
    let ExprKind::List(range) = out.arena.get_expr(stmt_expr(&out, 0)).kind else {
        panic!("expected list");
    };
    let items = out.arena.get_expr_list(range);
    assert_eq!(items.len(), count);
    assert_eq!(out.arena.get_expr(items[count - 1]).kind, ExprKind::Int(7));

    let (out, _) = parse_source(&"1; ".repeat(count));
    assert!(!out.has_errors());
    assert_eq!(out.arena.get_stmts(out.module.stmts).len(), count);
}

#[test]
fn if_expression_and_conditional_block() {
    let (out, _) = parse_source("if a then 1 else 2; if a { 1 } else if b { 2 } else { 3 }");
    assert!(!out.has_errors());

    let ExprKind::If { then_branch, .. } = out.arena.get_expr(stmt_expr(&out, 0)).kind else {
        panic!("expected if");
    };
    assert_eq!(out.arena.get_expr(then_branch).kind, ExprKind::Int(1));

    let ExprKind::If {
        then_branch,
        else_branch: Some(else_branch),
        ..
    } = out.arena.get_expr(stmt_expr(&out, 1)).kind
    else {
        panic!("expected if with else");
    };
    assert!(matches!(out.arena.get_expr(then_branch).kind, ExprKind::Block(_)));
    assert!(matches!(out.arena.get_expr(else_branch).kind, ExprKind::If { .. }));
}

#[test]
fn let_and_for_statements() {
    let (out, interner) = parse_source("let [a, b] = (1, 2)\nfor x in [a, b] { print(x) }");
    assert!(!out.has_errors());
    let stmts = out.arena.get_stmts(out.module.stmts);
    assert_eq!(stmts.len(), 2);

    let StmtKind::Let { pattern, .. } = &stmts[0].kind else {
        panic!("expected let");
    };
    let names: Vec<&str> = pattern
        .names()
        .into_iter()
        .map(|(n, _)| interner.lookup(n))
        .collect();
    assert_eq!(names, vec!["a", "b"]);

    let StmtKind::For { pattern, body, .. } = &stmts[1].kind else {
        panic!("expected for");
    };
    assert!(matches!(pattern, BindingPattern::Name { .. }));
    assert_eq!(body.len(), 1);
}

#[test]
fn lambda_without_where_clause() {
    let (out, interner) = parse_source("fn(x) => x + 1");
    assert!(!out.has_errors());
    let lambda = top_lambda(&out);
    assert!(!lambda.has_where_clause());
    assert!(lambda.bindings.is_empty());
    assert_eq!(lambda.params.len(), 1);
    assert_eq!(interner.lookup(lambda.params[0].name), "x");
}

#[test]
fn lambda_params_with_types_and_defaults() {
    let (out, _) = parse_source("fn(a: int, b: float = 1.5,): str => \"s\"");
    assert!(!out.has_errors());
    let lambda = top_lambda(&out);
    assert_eq!(lambda.params.len(), 2);
    assert_eq!(lambda.params[0].ty, Some(ParsedType::Int));
    assert!(lambda.params[0].default.is_none());
    assert!(lambda.params[1].default.is_some());
    assert_eq!(lambda.ret_ty, Some(ParsedType::Str));
    assert_eq!(lambda.required_params(), 1);
}

#[test]
fn block_is_allowed_in_lambda_body() {
    let (out, _) = parse_source("fn(x) => { let y = x; y }");
    assert!(!out.has_errors());
    let body = out.arena.get_expr(top_lambda(&out).body);
    assert!(matches!(body.kind, ExprKind::Block(_)));
}

#[test]
fn malformed_lambdas() {
    let cases = [
        ("fn x => x", ErrorCode::E1001),
        ("fn(x) x", ErrorCode::E1001),
        ("fn(1) => 1", ErrorCode::E1004),
        ("fn(x: number) => x", ErrorCode::E1005),
        ("fn(x y) => x", ErrorCode::E1003),
    ];
    for (source, code) in cases {
        let (out, _) = parse_source(source);
        assert_eq!(error_codes(&out), vec![code], "source: {source}");
    }
}

#[test]
fn malformed_statements() {
    let cases = [
        ("let = 3", ErrorCode::E1008),
        ("let x 3", ErrorCode::E1001),
        ("{ 1", ErrorCode::E1003),
        ("f(1 2)", ErrorCode::E1003),
        ("1 + )", ErrorCode::E1002),
        ("for x in xs print(x)", ErrorCode::E1001),
        ("if a 1", ErrorCode::E1001),
        ("where", ErrorCode::E1002),
    ];
    for (source, code) in cases {
        let (out, _) = parse_source(source);
        assert_eq!(error_codes(&out), vec![code], "source: {source}");
    }
}

#[test]
fn error_converts_to_diagnostic_with_labels() {
    let (out, _) = parse_source("{ 1");
    let diag = out.errors[0].to_diagnostic();
    assert_eq!(diag.code, ErrorCode::E1003);
    assert_eq!(diag.labels.len(), 2);
    assert!(diag.labels[0].is_primary);
    assert_eq!(diag.labels[1].message, "block opened here");
}
