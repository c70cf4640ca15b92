//! Lambda expressions and the `where` clause (the Binding Parser).
//!
//! ```text
//! lambda       = "fn" "(" params ")" (":" type)? where_clause? "=>" expr
//! param        = ident (":" type)? ("=" expr)?
//! where_clause = "where" "(" binding ("," binding)* ","? ")"
//! binding      = pattern "=" expr
//! ```

use tala_diagnostic::ErrorCode;
use tala_ir::{Expr, ExprId, ExprKind, Lambda, Param, Span, TokenKind, WhereBinding};
use tracing::trace;

use crate::{ParseContext, ParseError, Parser};

impl Parser<'_> {
    /// Parse a lambda starting at `fn`.
    pub(crate) fn parse_lambda(&mut self) -> Result<ExprId, ParseError> {
        let start = self.advance().span;

        let open = self.current_span();
        if !self.check(&TokenKind::LParen) {
            return Err(ParseError::new(
                ErrorCode::E1001,
                format!(
                    "expected `(` after `fn`, found {}",
                    self.cursor.describe_current()
                ),
                open,
            ));
        }
        self.advance();
        let params = self.parse_params(open)?;

        let ret_ty = if self.eat(&TokenKind::Colon) {
            Some(self.parse_type()?)
        } else {
            None
        };

        let (where_span, bindings) = self.parse_where_clause()?;

        if self.check(&TokenKind::Where) {
            let mut err = ParseError::new(
                ErrorCode::E1017,
                "a lambda can have only one `where` clause",
                self.current_span(),
            )
            .with_context("second `where` clause")
            .with_help("put every binding in the first clause; later bindings can use earlier ones");
            if let Some(first) = where_span {
                err = err.with_secondary(first, "first `where` clause here");
            }
            return Err(err);
        }

        if !self.check(&TokenKind::FatArrow) {
            let expected = if where_span.is_some() {
                "`=>`"
            } else {
                "`where` or `=>`"
            };
            return Err(ParseError::new(
                ErrorCode::E1001,
                format!(
                    "expected {expected} after lambda parameters, found {}",
                    self.cursor.describe_current()
                ),
                self.current_span(),
            ));
        }
        self.advance();

        let body = self.parse_expr()?;
        let span = start.merge(self.arena.get_expr(body).span);
        let id = self.arena.alloc_lambda(Lambda {
            params,
            ret_ty,
            where_span,
            bindings,
            body,
            span,
        });
        Ok(self.arena.alloc_expr(Expr::new(ExprKind::Lambda(id), span)))
    }

    /// Parameters after an already-consumed `(`, through the closing `)`.
    fn parse_params(&mut self, open: Span) -> Result<Vec<Param>, ParseError> {
        let mut params = Vec::new();
        while !self.check(&TokenKind::RParen) {
            let (name, name_span) = self.cursor.expect_ident()?;
            let ty = if self.eat(&TokenKind::Colon) {
                Some(self.parse_type()?)
            } else {
                None
            };
            let default = if self.eat(&TokenKind::Eq) {
                Some(self.parse_expr()?)
            } else {
                None
            };
            params.push(Param {
                name,
                ty,
                default,
                span: name_span.merge(self.previous_span()),
            });

            if !self.eat(&TokenKind::Comma) && !self.check(&TokenKind::RParen) {
                return Err(ParseError::new(
                    ErrorCode::E1003,
                    format!(
                        "expected `,` or `)` in parameter list, found {}",
                        self.cursor.describe_current()
                    ),
                    self.current_span(),
                )
                .with_secondary(open, "parameter list opened here"));
            }
        }
        self.advance();
        Ok(params)
    }

    /// Parse an optional `where (...)` clause.
    ///
    /// Without `where` nothing is consumed and the binding list is empty.
    /// Returns the span from `where` through `)` and the bindings in source
    /// order.
    pub(crate) fn parse_where_clause(
        &mut self,
    ) -> Result<(Option<Span>, Vec<WhereBinding>), ParseError> {
        if !self.check(&TokenKind::Where) {
            return Ok((None, Vec::new()));
        }
        let where_kw = self.advance().span;

        let open = self.current_span();
        if !self.check(&TokenKind::LParen) {
            return Err(ParseError::new(
                ErrorCode::E1003,
                format!(
                    "expected `(` after `where`, found {}",
                    self.cursor.describe_current()
                ),
                open,
            )
            .with_secondary(where_kw, "`where` clause starts here"));
        }
        self.advance();

        if self.check(&TokenKind::RParen) {
            return Err(ParseError::new(
                ErrorCode::E1008,
                "empty `where` clause",
                where_kw.merge(self.current_span()),
            )
            .with_context("no bindings")
            .with_help("remove the clause, or add a binding such as `y = x * 2`"));
        }

        let mut bindings = Vec::new();
        loop {
            bindings.push(self.parse_where_binding()?);
            if self.eat(&TokenKind::Comma) {
                if self.check(&TokenKind::RParen) {
                    break;
                }
                continue;
            }
            if self.check(&TokenKind::RParen) {
                break;
            }
            return Err(ParseError::new(
                ErrorCode::E1003,
                format!(
                    "expected `,` or `)` in `where` clause, found {}",
                    self.cursor.describe_current()
                ),
                self.current_span(),
            )
            .with_context("expected `,` or `)`")
            .with_secondary(open, "clause opened here"));
        }
        let close = self.advance().span;

        trace!(bindings = bindings.len(), "parsed where clause");
        Ok((Some(where_kw.merge(close)), bindings))
    }

    /// `pattern = expr`, with the right-hand side restricted to expressions.
    fn parse_where_binding(&mut self) -> Result<WhereBinding, ParseError> {
        if self.current_kind().starts_statement() {
            return Err(self.reject_statement_in_binding());
        }

        let target = self.parse_binding_pattern()?;

        if !self.check(&TokenKind::Eq) {
            return Err(ParseError::new(
                ErrorCode::E1001,
                format!(
                    "expected `=` after binding target, found {}",
                    self.cursor.describe_current()
                ),
                self.current_span(),
            )
            .with_context("expected `=`"));
        }
        self.advance();

        let source = self.with_context(ParseContext::IN_WHERE_BINDING, Self::parse_expr)?;
        let span = tala_ir::Spanned::span(&target).merge(self.arena.get_expr(source).span);
        Ok(WhereBinding {
            target,
            source,
            span,
        })
    }

    /// E1016 at the current token, which begins a statement-level construct.
    ///
    /// The token is consumed so recovery does not restart at a nested `let`.
    pub(crate) fn reject_statement_in_binding(&mut self) -> ParseError {
        let what = match self.current_kind() {
            TokenKind::Let => "`let` statements are",
            TokenKind::For => "`for` loops are",
            _ => "blocks are",
        };
        let span = self.advance().span;
        ParseError::new(
            ErrorCode::E1016,
            format!("{what} not allowed in a `where` binding"),
            span,
        )
        .with_context("statement-level construct")
        .with_help("a binding's value must be a single expression; use `if c then a else b` for conditionals")
    }
}
