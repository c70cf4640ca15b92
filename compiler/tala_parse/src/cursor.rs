//! Token cursor for navigating the token stream.

use tala_diagnostic::ErrorCode;
use tala_ir::{Name, Span, StringInterner, Token, TokenKind, TokenList};
use tracing::trace;

use crate::ParseError;

/// Position in a token stream whose last token is `Eof`.
pub struct Cursor<'a> {
    tokens: &'a TokenList,
    interner: &'a StringInterner,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// # Panics
    /// Panics (in debug builds) if `tokens` does not end with `Eof`.
    pub fn new(tokens: &'a TokenList, interner: &'a StringInterner) -> Self {
        debug_assert!(
            tokens
                .as_slice()
                .last()
                .is_some_and(|t| t.kind == TokenKind::Eof),
            "token list must end with Eof"
        );
        Cursor {
            tokens,
            interner,
            pos: 0,
        }
    }

    pub fn interner(&self) -> &'a StringInterner {
        self.interner
    }

    /// Used to detect whether a failed parse consumed anything.
    pub fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn current(&self) -> &Token {
        &self.tokens[self.pos]
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    #[inline]
    pub fn current_span(&self) -> Span {
        self.current().span
    }

    /// Span of the most recently consumed token.
    #[inline]
    pub fn previous_span(&self) -> Span {
        if self.pos > 0 {
            self.tokens[self.pos - 1].span
        } else {
            Span::DUMMY
        }
    }

    /// Kind of the token after the current one (`Eof` at the end).
    pub fn peek_next_kind(&self) -> TokenKind {
        self.tokens
            .get(self.pos + 1)
            .map_or(TokenKind::Eof, |t| t.kind)
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.current_kind() == TokenKind::Eof
    }

    /// Same variant as `kind`, ignoring payloads.
    #[inline]
    pub fn check(&self, kind: &TokenKind) -> bool {
        self.current_kind().same_kind(kind)
    }

    /// Consume the current token. Never moves past `Eof`.
    pub fn advance(&mut self) -> Token {
        let token = *self.current();
        trace!(
            pos = self.pos,
            kind = %token.kind.display_name(),
            span_start = token.span.start,
            span_end = token.span.end,
            "advance"
        );
        if token.kind != TokenKind::Eof {
            self.pos += 1;
        }
        token
    }

    /// Consume the current token if it is `kind`.
    pub fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume `kind` or fail with E1001.
    pub fn expect(&mut self, kind: &TokenKind) -> Result<Span, ParseError> {
        if self.check(kind) {
            Ok(self.advance().span)
        } else {
            Err(ParseError::new(
                ErrorCode::E1001,
                format!(
                    "expected `{}`, found {}",
                    kind.display_name(),
                    self.describe_current()
                ),
                self.current_span(),
            ))
        }
    }

    /// Consume an identifier or fail with E1004.
    pub fn expect_ident(&mut self) -> Result<(Name, Span), ParseError> {
        if let TokenKind::Ident(name) = self.current_kind() {
            let span = self.advance().span;
            Ok((name, span))
        } else {
            Err(ParseError::new(
                ErrorCode::E1004,
                format!("expected identifier, found {}", self.describe_current()),
                self.current_span(),
            ))
        }
    }

    /// The current token as it should appear in a message.
    pub fn describe_current(&self) -> String {
        match self.current_kind() {
            TokenKind::Ident(name) => format!("identifier `{}`", self.interner.lookup(name)),
            TokenKind::Int(n) => format!("integer `{n}`"),
            TokenKind::String(_) => "string literal".to_string(),
            TokenKind::Float(_) => "float literal".to_string(),
            TokenKind::Eof => "end of file".to_string(),
            kind => format!("`{}`", kind.display_name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tala_ir::Span;

    fn tokens(kinds: &[TokenKind]) -> TokenList {
        let mut list = TokenList::new();
        for (i, kind) in kinds.iter().enumerate() {
            let start = u32::try_from(i).unwrap_or(0) * 2;
            list.push(Token::new(*kind, Span::new(start, start + 1)));
        }
        list.push(Token::new(TokenKind::Eof, Span::point(99)));
        list
    }

    #[test]
    fn advance_stops_at_eof() {
        let interner = StringInterner::new();
        let list = tokens(&[TokenKind::Fn]);
        let mut cursor = Cursor::new(&list, &interner);
        assert_eq!(cursor.advance().kind, TokenKind::Fn);
        assert!(cursor.is_at_end());
        assert_eq!(cursor.advance().kind, TokenKind::Eof);
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn expect_reports_found_token() {
        let interner = StringInterner::new();
        let name = interner.intern("y");
        let list = tokens(&[TokenKind::Ident(name), TokenKind::Eq]);
        let mut cursor = Cursor::new(&list, &interner);
        let err = cursor.expect(&TokenKind::Eq).err();
        let err = err.as_ref().map(|e| (e.code, e.message.as_str()));
        assert_eq!(err, Some((ErrorCode::E1001, "expected `=`, found identifier `y`")));
        assert_eq!(cursor.expect_ident().ok(), Some((name, Span::new(0, 1))));
        assert!(cursor.eat(&TokenKind::Eq));
        assert_eq!(cursor.previous_span(), Span::new(2, 3));
    }

    #[test]
    fn check_ignores_payload() {
        let interner = StringInterner::new();
        let list = tokens(&[TokenKind::Int(5)]);
        let cursor = Cursor::new(&list, &interner);
        assert!(cursor.check(&TokenKind::Int(0)));
        assert_eq!(cursor.peek_next_kind(), TokenKind::Eof);
    }
}
