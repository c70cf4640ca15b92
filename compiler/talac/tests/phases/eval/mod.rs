//! End-to-end evaluation of `where` clauses.

use pretty_assertions::assert_eq;
use tala_diagnostic::ErrorCode;
use talac::{run_source, RunOptions, Value};

use crate::common::{run, run_ok};

#[test]
fn double_plus_one() {
    let source = "let double_plus_one = fn(x) where (y = x * 2) => y + 1\ndouble_plus_one(3)";
    assert_eq!(run_ok(source), Value::Int(7));
}

#[test]
fn sum_pair() {
    let source = "let sum_pair = fn(pair) where ([a, b] = pair, sum = a + b) => sum\nsum_pair((2, 3))";
    assert_eq!(run_ok(source), Value::Int(5));
}

#[test]
fn square_and_cube() {
    let source = "let f = fn(n) where (sq = n * n, cube = sq * n) => [sq, cube]\nf(4)";
    assert_eq!(
        run_ok(source),
        Value::list(vec![Value::Int(16), Value::Int(64)])
    );
}

#[test]
fn plain_lambda() {
    assert_eq!(run_ok("let inc = fn(x) => x + 1\ninc(10)"), Value::Int(11));
}

#[test]
fn trace_shows_order_and_single_evaluation() {
    let source = r#"
        let f = fn(n) where (
            sq = trace("sq", n * n),
            cube = trace("cube", sq * n),
            unused = trace("unused", 0),
        ) => [sq, cube, sq]
        print(f(2))
        print(f(3))
    "#;
    let (result, output) = run(source);
    assert_eq!(result, Ok(Value::Void));
    assert_eq!(
        output,
        "sq\ncube\nunused\n[4, 8, 4]\nsq\ncube\nunused\n[9, 27, 9]\n"
    );
}

#[test]
fn runtime_errors_become_diagnostics() {
    let source = "let f = fn(x) where (y = x / 0) => y\nf(1)";
    let diagnostics = run(source).0.unwrap_err();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].code, ErrorCode::E6004);
    let span = diagnostics[0].primary_span().unwrap();
    assert_eq!(span.snippet(source), Some("x / 0"));
}

#[test]
fn depth_limit_comes_from_run_options() {
    let options = RunOptions {
        max_depth: 16,
        quiet: true,
    };
    let diagnostics = run_source("let y = fn(f) => f(f)\ny(y)", &options).unwrap_err();
    assert_eq!(diagnostics[0].code, ErrorCode::E6010);
    assert!(diagnostics[0].message.contains("16"));
}

#[test]
fn quiet_runs_still_return_values() {
    let options = RunOptions {
        quiet: true,
        ..RunOptions::default()
    };
    assert_eq!(
        run_source("print(1); len(\"four\")", &options),
        Ok(Value::Int(4))
    );
}
