//! Binding patterns: `&?ident` | `&?[pattern, ...]`.

use tala_diagnostic::ErrorCode;
use tala_ir::{BindingPattern, TokenKind};

use crate::{ParseError, Parser};

impl Parser<'_> {
    /// Parse a binding target. A leading `&` is recorded, not rejected.
    pub(crate) fn parse_binding_pattern(&mut self) -> Result<BindingPattern, ParseError> {
        tala_stack::ensure_sufficient_stack(|| self.parse_binding_pattern_inner())
    }

    fn parse_binding_pattern_inner(&mut self) -> Result<BindingPattern, ParseError> {
        let start = self.current_span();
        let by_ref = self.eat(&TokenKind::Amp);

        match self.current_kind() {
            TokenKind::Ident(name) => {
                let end = self.advance().span;
                Ok(BindingPattern::Name {
                    name,
                    span: start.merge(end),
                    by_ref,
                })
            }
            TokenKind::LBracket => {
                let open = self.advance().span;
                if self.check(&TokenKind::RBracket) {
                    return Err(ParseError::new(
                        ErrorCode::E1008,
                        "destructuring pattern binds no names",
                        open.merge(self.current_span()),
                    )
                    .with_help("list at least one name, e.g. `[a, b]`"));
                }

                let mut elements = Vec::new();
                loop {
                    elements.push(self.parse_binding_pattern()?);
                    if self.eat(&TokenKind::Comma) {
                        if self.check(&TokenKind::RBracket) {
                            break;
                        }
                        continue;
                    }
                    if self.check(&TokenKind::RBracket) {
                        break;
                    }
                    return Err(ParseError::new(
                        ErrorCode::E1003,
                        format!(
                            "expected `,` or `]` in pattern, found {}",
                            self.cursor.describe_current()
                        ),
                        self.current_span(),
                    )
                    .with_secondary(open, "pattern opened here"));
                }
                let close = self.advance().span;
                Ok(BindingPattern::Destructure {
                    elements,
                    span: start.merge(close),
                    by_ref,
                })
            }
            _ => Err(ParseError::new(
                ErrorCode::E1008,
                format!(
                    "expected a binding pattern, found {}",
                    self.cursor.describe_current()
                ),
                self.current_span(),
            )
            .with_context("expected an identifier or `[`")),
        }
    }
}
