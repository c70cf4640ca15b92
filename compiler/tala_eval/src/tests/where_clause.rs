//! Scope building for `where` clauses.

use pretty_assertions::assert_eq;

use super::{eval, eval_err, eval_err_kind, eval_with_output};
use crate::{EvalErrorKind, Value};

#[test]
fn single_binding() {
    let source = "let f = fn(x) where (y = x * 2) => y + 1\nf(3)";
    assert_eq!(eval(source), Ok(Value::Int(7)));
}

#[test]
fn destructuring_then_dependent_binding() {
    let source = "let f = fn(pair) where ([a, b] = pair, sum = a + b) => sum\nf((2, 3))";
    assert_eq!(eval(source), Ok(Value::Int(5)));
}

#[test]
fn later_bindings_see_earlier_ones() {
    let source = "let f = fn(n) where (sq = n * n, cube = sq * n) => [sq, cube]\nf(4)";
    assert_eq!(
        eval(source),
        Ok(Value::list(vec![Value::Int(16), Value::Int(64)]))
    );
}

#[test]
fn lambda_without_clause() {
    assert_eq!(eval("let f = fn(x) => x + 1\nf(10)"), Ok(Value::Int(11)));
}

#[test]
fn bindings_run_in_declaration_order() {
    let source = r#"
        let f = fn(x) where (
            a = trace("a", x),
            b = trace("b", a + 1),
            c = trace("c", b + 1),
        ) => c
        f(1)
    "#;
    let (result, output) = eval_with_output(source);
    assert_eq!(result, Ok(Value::Int(3)));
    assert_eq!(output, "a\nb\nc\n");
}

#[test]
fn unused_bindings_still_run_once_per_call() {
    let source = r#"
        let f = fn(x) where (unused = trace("unused", x)) => x
        f(1)
        f(2)
    "#;
    let (result, output) = eval_with_output(source);
    assert_eq!(result, Ok(Value::Int(2)));
    assert_eq!(output, "unused\nunused\n");
}

#[test]
fn body_reuses_the_bound_value() {
    let source = r#"let f = fn(x) where (y = trace("y", x)) => y + y + y
f(2)"#;
    let (result, output) = eval_with_output(source);
    assert_eq!(result, Ok(Value::Int(6)));
    assert_eq!(output, "y\n");
}

#[test]
fn failing_binding_stops_the_call() {
    let source = r#"let f = fn(x) where (a = trace("a", x), b = x / 0, c = trace("c", 1)) => trace("body", c)
f(1)"#;
    let (result, output) = eval_with_output(source);
    let err = result.unwrap_err();
    assert_eq!(err.kind, EvalErrorKind::DivisionByZero);
    assert_eq!(err.span.snippet(source), Some("x / 0"));
    assert_eq!(output, "a\n");
}

#[test]
fn errors_from_nested_calls_propagate_unchanged() {
    let source = "let g = fn(v) => v[5]\nlet f = fn(xs) where (y = g(xs)) => y\nf([1, 2])";
    let err = eval_err(source);
    assert_eq!(err.kind, EvalErrorKind::IndexOutOfBounds { index: 5, len: 2 });
    assert_eq!(err.span.snippet(source), Some("v[5]"));
}

#[test]
fn forward_reference_is_undefined() {
    let source = "let f = fn(x) where (a = b, b = x) => a\nf(1)";
    let err = eval_err(source);
    assert_eq!(
        err.kind,
        EvalErrorKind::UndefinedVariable {
            name: "b".to_string()
        }
    );
    assert_eq!(err.span.snippet(source), Some("b"));
}

#[test]
fn bindings_do_not_leak_out_of_the_call() {
    let source = "let f = fn(x) where (y = x) => y\nf(1)\ny";
    assert_eq!(
        eval_err_kind(source),
        EvalErrorKind::UndefinedVariable {
            name: "y".to_string()
        }
    );
}

#[test]
fn calls_are_independent() {
    let source = r#"
        let f = fn(x) where (y = x * 2) => y
        let first = f(1)
        let second = f(5);
        (first, second)
    "#;
    assert_eq!(
        eval(source),
        Ok(Value::tuple(vec![Value::Int(2), Value::Int(10)]))
    );
}

#[test]
fn binding_may_shadow_a_captured_variable() {
    let source = "let x = 1\nlet f = fn(y) where (x = y * 3) => x\nlet r = f(2);\n(r, x)";
    assert_eq!(
        eval(source),
        Ok(Value::tuple(vec![Value::Int(6), Value::Int(1)]))
    );
}

#[test]
fn bindings_read_captured_variables() {
    let source = "let k = 10\nlet f = fn(x) where (y = x + k) => y\nf(1)";
    assert_eq!(eval(source), Ok(Value::Int(11)));
}

#[test]
fn bindings_read_defaulted_parameters() {
    let source = "let f = fn(x, step = 2) where (y = x + step) => y;\n[f(1), f(1, 5)]";
    assert_eq!(
        eval(source),
        Ok(Value::list(vec![Value::Int(3), Value::Int(6)]))
    );
}

#[test]
fn destructuring_ignores_extra_elements() {
    let source = "let f = fn(p) where ([a, b] = p) => a + b\nf([1, 2, 3])";
    assert_eq!(eval(source), Ok(Value::Int(3)));
}

#[test]
fn nested_destructuring() {
    let source = "let f = fn(p) where ([a, [b, c]] = p) => a + b + c\nf((1, [2, 3]))";
    assert_eq!(eval(source), Ok(Value::Int(6)));
}

#[test]
fn destructuring_a_short_sequence_fails() {
    let source = "let f = fn(p) where ([a, b] = p) => a\nf([1])";
    let err = eval_err(source);
    assert_eq!(err.kind, EvalErrorKind::PatternTooLong { expected: 2, got: 1 });
    assert_eq!(err.span.snippet(source), Some("[a, b]"));
}

#[test]
fn destructuring_a_scalar_fails() {
    let source = "let f = fn(p) where ([a] = p) => a\nf(7)";
    assert_eq!(
        eval_err_kind(source),
        EvalErrorKind::ExpectedSequence { got: "int" }
    );
}

#[test]
fn lambda_built_in_a_binding_captures_earlier_bindings() {
    let source = "let f = fn(x) where (base = x * 10, add = fn(y) => base + y) => add(1)\nf(4)";
    assert_eq!(eval(source), Ok(Value::Int(41)));
}

#[test]
fn nested_lambda_with_its_own_clause() {
    let source = r#"
        let outer = fn(x) where (inner = fn(y) where (z = y + x) => z * 2) => inner(1)
        outer(3)
    "#;
    assert_eq!(eval(source), Ok(Value::Int(8)));
}

#[test]
fn expression_conditional_in_a_binding() {
    let source = "let f = fn(x) where (sign = if x < 0 then -1 else 1) => sign * x;\n[f(-4), f(4)]";
    assert_eq!(
        eval(source),
        Ok(Value::list(vec![Value::Int(4), Value::Int(4)]))
    );
}

#[test]
fn return_type_is_checked_after_bindings() {
    let source = "let f = fn(x): int where (y = x) => y\nf(true)";
    let err = eval_err(source);
    assert_eq!(
        err.kind,
        EvalErrorKind::TypeMismatch {
            expected: "int".to_string(),
            got: "bool"
        }
    );
    assert_eq!(err.span.snippet(source), Some("y"));
}

#[test]
fn binding_to_a_very_long_list_keeps_every_element() {
    let zeros = vec!["0"; usize::from(u16::MAX) + 1].join(", ");
    let source = format!(
        "let f = fn(x) where (xs = [{zeros}, x]) => (len(xs), xs[65536])\nf(7)"
    );
    assert_eq!(
        eval(&source),
        Ok(Value::tuple(vec![Value::Int(65537), Value::Int(7)]))
    );
}
