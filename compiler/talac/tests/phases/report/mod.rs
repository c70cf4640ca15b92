//! Diagnostic rendering and the bindings dump.

use pretty_assertions::assert_eq;

use crate::common::{compile_err, compile_ok};

#[test]
fn bindings_dump_lists_lambdas_in_source_order() {
    let source = "let sum_pair = fn(pair) where ([a, b] = pair, sum = a + b) => sum\nlet inc = fn(x) => x + 1";
    let compiled = compile_ok(source);
    assert_eq!(
        talac::bindings_report(source, &compiled),
        "1:16 fn(pair)\n  0: [a, b] = pair  (a, b)\n  1: sum = a + b  (sum)\n2:11 fn(x)\n  (no where clause)\n"
    );
}

#[test]
fn nested_lambdas_are_listed_after_their_parent() {
    let source = "fn(x): int where (g = fn(y) where (z = y) => z) => g(x)";
    let compiled = compile_ok(source);
    let report = talac::bindings_report(source, &compiled);
    let heads: Vec<&str> = report.lines().filter(|l| !l.starts_with(' ')).collect();
    assert_eq!(heads, vec!["1:1 fn(x): int", "1:23 fn(y)"]);
}

#[test]
fn rendered_diagnostics_point_at_the_source() {
    let source = "fn(x) where (x = 5) => x";
    let rendered = talac::render_diagnostics("input.tala", source, &compile_err(source));
    assert!(rendered.starts_with("error[E2001]: binding `x` shadows a parameter"));
    assert!(rendered.contains("input.tala:1:14"), "{rendered}");
    assert!(rendered.contains("1 | fn(x) where (x = 5) => x"), "{rendered}");
    assert!(rendered.ends_with("error: aborting due to previous error\n"), "{rendered}");
}
