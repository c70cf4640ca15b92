//! Postfix expressions: calls and indexing.

use tala_diagnostic::ErrorCode;
use tala_ir::{Expr, ExprId, ExprKind, TokenKind};

use crate::{ParseError, Parser};

impl Parser<'_> {
    /// A primary expression followed by any number of `(args)` / `[index]`.
    pub(crate) fn parse_postfix(&mut self) -> Result<ExprId, ParseError> {
        let mut expr = self.parse_primary()?;
        loop {
            if self.check(&TokenKind::LParen) {
                let open = self.advance().span;
                let (args, _, close) =
                    self.parse_expr_list(open, &TokenKind::RParen, "argument list")?;
                let args = self.arena.alloc_expr_list(args);
                let span = self.arena.get_expr(expr).span.merge(close);
                expr = self
                    .arena
                    .alloc_expr(Expr::new(ExprKind::Call { func: expr, args }, span));
            } else if self.check(&TokenKind::LBracket) {
                let open = self.advance().span;
                let index = self.parse_expr()?;
                if !self.check(&TokenKind::RBracket) {
                    return Err(ParseError::new(
                        ErrorCode::E1003,
                        format!(
                            "expected `]` after index, found {}",
                            self.cursor.describe_current()
                        ),
                        self.current_span(),
                    )
                    .with_secondary(open, "index opened here"));
                }
                let close = self.advance().span;
                let span = self.arena.get_expr(expr).span.merge(close);
                expr = self.arena.alloc_expr(Expr::new(
                    ExprKind::Index {
                        receiver: expr,
                        index,
                    },
                    span,
                ));
            } else {
                break;
            }
        }
        Ok(expr)
    }
}
