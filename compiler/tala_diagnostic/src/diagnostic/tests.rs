use pretty_assertions::assert_eq;
use tala_ir::Span;

use super::*;

#[test]
fn builder_collects_labels_in_order() {
    let diag = Diagnostic::error(ErrorCode::E2001)
        .with_message("`x` is already bound")
        .with_label(Span::new(12, 13), "bound again here")
        .with_secondary_label(Span::new(3, 4), "parameter `x` declared here")
        .with_note("names in a `where` clause must be fresh");

    assert_eq!(diag.labels.len(), 2);
    assert!(diag.labels[0].is_primary);
    assert!(!diag.labels[1].is_primary);
    assert_eq!(diag.primary_span(), Some(Span::new(12, 13)));
    assert_eq!(diag.notes, vec!["names in a `where` clause must be fresh".to_string()]);
    assert!(diag.is_error());
}

#[test]
fn primary_span_none_without_primary_label() {
    let diag = Diagnostic::warning(ErrorCode::E9001)
        .with_secondary_label(Span::new(0, 1), "context only");
    assert_eq!(diag.primary_span(), None);
    assert!(!diag.is_error());
}

#[test]
fn display_shows_header() {
    let diag = Diagnostic::error(ErrorCode::E1001).with_message("expected `=`, found `)`");
    assert_eq!(diag.to_string(), "error[E1001]: expected `=`, found `)`");
}
