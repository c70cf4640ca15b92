//! Parser tests.
//!
//! - `parser`: statements, expressions, precedence, lambdas without `where`
//! - `where_clause`: the binding list and every way it can be malformed
//! - `recovery`: multiple independent errors in one module

#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

mod parser;
mod where_clause;

use crate::{parse, ParseOutput};
use tala_diagnostic::ErrorCode;
use tala_ir::{ExprId, ExprKind, Lambda, StmtKind, StringInterner};

fn parse_source(source: &str) -> (ParseOutput, StringInterner) {
    let interner = StringInterner::new();
    let lexed = tala_lexer::lex(source, &interner);
    assert!(!lexed.has_errors(), "lex errors: {:?}", lexed.errors);
    let output = parse(&lexed.tokens, &interner);
    (output, interner)
}

fn error_codes(output: &ParseOutput) -> Vec<ErrorCode> {
    output.errors.iter().map(|e| e.code).collect()
}

/// The expression of the `index`th statement, which must be an expression
/// statement.
fn stmt_expr(output: &ParseOutput, index: usize) -> ExprId {
    let stmts = output.arena.get_stmts(output.module.stmts);
    match &stmts[index].kind {
        StmtKind::Expr(id) => *id,
        other => panic!("expected expression statement, got {other:?}"),
    }
}

/// The lambda that the first statement consists of.
fn top_lambda(output: &ParseOutput) -> &Lambda {
    let id = stmt_expr(output, 0);
    match output.arena.get_expr(id).kind {
        ExprKind::Lambda(lambda) => output.arena.get_lambda(lambda),
        ref other => panic!("expected lambda, got {other:?}"),
    }
}
