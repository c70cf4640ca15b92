//! Primary expressions.

use tala_diagnostic::ErrorCode;
use tala_ir::{Expr, ExprId, ExprKind, TokenKind};

use crate::{ParseError, Parser};

impl Parser<'_> {
    pub(crate) fn parse_primary(&mut self) -> Result<ExprId, ParseError> {
        let span = self.current_span();
        let kind = match self.current_kind() {
            TokenKind::Int(n) => ExprKind::Int(n),
            TokenKind::Float(bits) => ExprKind::Float(bits),
            TokenKind::String(name) => ExprKind::Str(name),
            TokenKind::True => ExprKind::Bool(true),
            TokenKind::False => ExprKind::Bool(false),
            TokenKind::Void => ExprKind::Void,
            TokenKind::Ident(name) => ExprKind::Ident(name),
            TokenKind::LParen => return self.parse_paren(),
            TokenKind::LBracket => return self.parse_list(),
            TokenKind::If => return self.parse_if(),
            TokenKind::Fn => return self.parse_lambda(),
            TokenKind::LBrace => {
                if self.context.in_where_binding() {
                    return Err(self.reject_statement_in_binding());
                }
                return self.parse_block_expr();
            }
            TokenKind::Let | TokenKind::For => {
                if self.context.in_where_binding() {
                    return Err(self.reject_statement_in_binding());
                }
                return Err(ParseError::new(
                    ErrorCode::E1002,
                    format!(
                        "expected expression, found {}",
                        self.cursor.describe_current()
                    ),
                    span,
                )
                .with_help("statements cannot be used as values; wrap them in a `{ ... }` block"));
            }
            TokenKind::Where => {
                return Err(ParseError::new(
                    ErrorCode::E1002,
                    "expected expression, found `where`",
                    span,
                )
                .with_help("a `where` clause goes between a lambda's parameters and its `=>`"));
            }
            _ => {
                return Err(ParseError::new(
                    ErrorCode::E1002,
                    format!(
                        "expected expression, found {}",
                        self.cursor.describe_current()
                    ),
                    span,
                ));
            }
        };
        self.advance();
        Ok(self.arena.alloc_expr(Expr::new(kind, span)))
    }

    /// `()` is the empty tuple, `(a)` groups, `(a,)` and `(a, b)` are tuples.
    fn parse_paren(&mut self) -> Result<ExprId, ParseError> {
        let open = self.advance().span;
        let (items, trailing_comma, close) =
            self.parse_expr_list(open, &TokenKind::RParen, "parenthesized expression")?;
        let span = open.merge(close);

        if let [single] = items.as_slice() {
            if !trailing_comma {
                return Ok(*single);
            }
        }
        let range = self.arena.alloc_expr_list(items);
        Ok(self.arena.alloc_expr(Expr::new(ExprKind::Tuple(range), span)))
    }

    fn parse_list(&mut self) -> Result<ExprId, ParseError> {
        let open = self.advance().span;
        let (items, _, close) = self.parse_expr_list(open, &TokenKind::RBracket, "list")?;
        let range = self.arena.alloc_expr_list(items);
        Ok(self
            .arena
            .alloc_expr(Expr::new(ExprKind::List(range), open.merge(close))))
    }

    /// `if c then a (else b)?` or `if c { .. } (else { .. } | else if ..)?`.
    ///
    /// The block form is statement-level and rejected inside `where` bindings.
    fn parse_if(&mut self) -> Result<ExprId, ParseError> {
        let start = self.advance().span;
        let cond = self.parse_expr()?;

        if self.eat(&TokenKind::Then) {
            let then_branch = self.parse_expr()?;
            let else_branch = if self.eat(&TokenKind::Else) {
                Some(self.parse_expr()?)
            } else {
                None
            };
            let end = self.arena.get_expr(else_branch.unwrap_or(then_branch)).span;
            return Ok(self.arena.alloc_expr(Expr::new(
                ExprKind::If {
                    cond,
                    then_branch,
                    else_branch,
                },
                start.merge(end),
            )));
        }

        if self.check(&TokenKind::LBrace) {
            if self.context.in_where_binding() {
                return Err(ParseError::new(
                    ErrorCode::E1016,
                    "conditional blocks are not allowed in a `where` binding",
                    start.merge(self.current_span()),
                )
                .with_context("statement-level construct")
                .with_help("use the expression form `if c then a else b`"));
            }
            let then_branch = self.parse_block_expr()?;
            let else_branch = if self.eat(&TokenKind::Else) {
                if self.check(&TokenKind::If) {
                    Some(self.parse_if()?)
                } else if self.check(&TokenKind::LBrace) {
                    Some(self.parse_block_expr()?)
                } else {
                    return Err(ParseError::new(
                        ErrorCode::E1001,
                        format!(
                            "expected `{{` or `if` after `else`, found {}",
                            self.cursor.describe_current()
                        ),
                        self.current_span(),
                    ));
                }
            } else {
                None
            };
            let end = self.previous_span();
            return Ok(self.arena.alloc_expr(Expr::new(
                ExprKind::If {
                    cond,
                    then_branch,
                    else_branch,
                },
                start.merge(end),
            )));
        }

        Err(ParseError::new(
            ErrorCode::E1001,
            format!(
                "expected `then` or `{{` after `if` condition, found {}",
                self.cursor.describe_current()
            ),
            self.current_span(),
        )
        .with_secondary(start, "`if` starts here"))
    }

    /// `{ stmt* }` at the current `{`.
    fn parse_block_expr(&mut self) -> Result<ExprId, ParseError> {
        let open = self.advance().span;
        let stmts = self.parse_block_body(open)?;
        let span = open.merge(self.previous_span());
        Ok(self.arena.alloc_expr(Expr::new(ExprKind::Block(stmts), span)))
    }
}
