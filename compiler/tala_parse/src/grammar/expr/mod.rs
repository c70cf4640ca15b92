//! Expression parsing.
//!
//! - `mod.rs`: entry point (`parse_expr`), binary precedence climbing, unary
//! - `operators.rs`: token to operator mapping
//! - `primary.rs`: literals, identifiers, groups, lists, `if`, blocks, lambdas
//! - `postfix.rs`: calls and indexing

mod operators;
mod postfix;
mod primary;

use tala_diagnostic::ErrorCode;
use tala_ir::{Expr, ExprId, ExprKind, Span, TokenKind};

use crate::{ParseError, Parser};

impl Parser<'_> {
    /// Parse an expression.
    ///
    /// Uses `ensure_sufficient_stack` to prevent stack overflow on deeply
    /// nested expressions.
    pub(crate) fn parse_expr(&mut self) -> Result<ExprId, ParseError> {
        tala_stack::ensure_sufficient_stack(|| self.parse_binary(0))
    }

    /// Precedence climbing over `BinaryOp::precedence`. All binary operators
    /// are left-associative.
    fn parse_binary(&mut self, min_prec: u8) -> Result<ExprId, ParseError> {
        let mut left = self.parse_unary()?;

        while let Some(op) = self.match_binary_op() {
            let prec = op.precedence();
            if prec <= min_prec {
                break;
            }
            self.advance();
            let right = self.parse_binary(prec)?;
            let span = self
                .arena
                .get_expr(left)
                .span
                .merge(self.arena.get_expr(right).span);
            left = self
                .arena
                .alloc_expr(Expr::new(ExprKind::Binary { op, left, right }, span));
        }

        Ok(left)
    }

    /// `-x`, `!x`, and the reference marker `&x`.
    fn parse_unary(&mut self) -> Result<ExprId, ParseError> {
        if let Some(op) = self.match_unary_op() {
            let start = self.advance().span;
            let operand = tala_stack::ensure_sufficient_stack(|| self.parse_unary())?;
            let span = start.merge(self.arena.get_expr(operand).span);
            return Ok(self
                .arena
                .alloc_expr(Expr::new(ExprKind::Unary { op, operand }, span)));
        }

        if self.check(&TokenKind::Amp) {
            let start = self.advance().span;
            let operand = tala_stack::ensure_sufficient_stack(|| self.parse_unary())?;
            let span = start.merge(self.arena.get_expr(operand).span);
            return Ok(self.arena.alloc_expr(Expr::new(ExprKind::Ref(operand), span)));
        }

        self.parse_postfix()
    }

    /// Comma-separated expressions after an already-consumed opening
    /// delimiter, through `close`. A trailing comma is allowed.
    ///
    /// Returns the elements, whether a trailing comma was present after the
    /// last one, and the span of the closing delimiter.
    pub(crate) fn parse_expr_list(
        &mut self,
        open: Span,
        close: &TokenKind,
        what: &str,
    ) -> Result<(Vec<ExprId>, bool, Span), ParseError> {
        let mut items = Vec::new();
        let mut trailing_comma = false;
        while !self.check(close) {
            items.push(self.parse_expr()?);
            trailing_comma = self.eat(&TokenKind::Comma);
            if !trailing_comma && !self.check(close) {
                return Err(ParseError::new(
                    ErrorCode::E1003,
                    format!(
                        "expected `,` or `{}` in {what}, found {}",
                        close.display_name(),
                        self.cursor.describe_current()
                    ),
                    self.current_span(),
                )
                .with_secondary(open, format!("{what} opened here")));
            }
        }
        let close_span = self.advance().span;
        Ok((items, trailing_comma, close_span))
    }
}
