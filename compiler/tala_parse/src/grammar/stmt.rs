//! Statements and statement lists.

use tala_diagnostic::ErrorCode;
use tala_ir::{Span, Stmt, StmtKind, StmtRange, TokenKind};

use crate::recovery::{synchronize, RecoverySet};
use crate::{ParseContext, ParseError, Parser};

impl Parser<'_> {
    /// Parse statements until `terminator` (not consumed) or end of file.
    ///
    /// Errors are recorded and parsing resumes at the next statement.
    pub(crate) fn parse_stmt_list(&mut self, terminator: &TokenKind) -> Vec<Stmt> {
        let mut stmts = Vec::new();
        loop {
            while self.eat(&TokenKind::Semicolon) {}
            if self.check(terminator) || self.is_at_end() {
                break;
            }

            let start = self.cursor.position();
            match self.parse_stmt() {
                Ok(stmt) => stmts.push(stmt),
                Err(err) => {
                    self.errors.push(err);
                    self.recover_to_next_stmt(start);
                }
            }
        }
        stmts
    }

    fn recover_to_next_stmt(&mut self, failed_at: usize) {
        if self.cursor.position() == failed_at {
            self.advance();
        }
        let set = if self.context.in_block() {
            RecoverySet::BLOCK_STMT_START
        } else {
            RecoverySet::STMT_START
        };
        synchronize(&mut self.cursor, set);
    }

    /// `let pattern = expr` | `for pattern in expr { stmt* }` | `expr`
    fn parse_stmt(&mut self) -> Result<Stmt, ParseError> {
        let start = self.current_span();
        match self.current_kind() {
            TokenKind::Let => {
                self.advance();
                let pattern = self.parse_binding_pattern()?;
                if !self.check(&TokenKind::Eq) {
                    return Err(ParseError::new(
                        ErrorCode::E1001,
                        format!(
                            "expected `=` after `let` pattern, found {}",
                            self.cursor.describe_current()
                        ),
                        self.current_span(),
                    ));
                }
                self.advance();
                let init = self.parse_expr()?;
                let span = start.merge(self.arena.get_expr(init).span);
                Ok(Stmt::new(StmtKind::Let { pattern, init }, span))
            }
            TokenKind::For => {
                self.advance();
                let pattern = self.parse_binding_pattern()?;
                self.expect(&TokenKind::In)?;
                let iter = self.parse_expr()?;
                let open = self.current_span();
                if !self.check(&TokenKind::LBrace) {
                    return Err(ParseError::new(
                        ErrorCode::E1001,
                        format!(
                            "expected `{{` to start the loop body, found {}",
                            self.cursor.describe_current()
                        ),
                        open,
                    ));
                }
                self.advance();
                let body = self.parse_block_body(open)?;
                let span = start.merge(self.previous_span());
                Ok(Stmt::new(StmtKind::For { pattern, iter, body }, span))
            }
            _ => {
                let expr = self.parse_expr()?;
                Ok(Stmt::new(StmtKind::Expr(expr), self.arena.get_expr(expr).span))
            }
        }
    }

    /// Statements after an already-consumed `{`, through the closing `}`.
    pub(crate) fn parse_block_body(&mut self, open: Span) -> Result<StmtRange, ParseError> {
        let stmts = self.with_context(ParseContext::IN_BLOCK, |p| {
            p.parse_stmt_list(&TokenKind::RBrace)
        });
        if !self.check(&TokenKind::RBrace) {
            return Err(ParseError::new(
                ErrorCode::E1003,
                format!("unclosed `{{`, found {}", self.cursor.describe_current()),
                self.current_span(),
            )
            .with_context("expected `}`")
            .with_secondary(open, "block opened here"));
        }
        self.advance();
        Ok(self.arena.alloc_stmts(stmts))
    }
}
