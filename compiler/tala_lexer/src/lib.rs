//! Lexer for Tala using logos with string interning.
//!
//! [`lex`] always produces a complete `TokenList` ending in `Eof`. Problems
//! become `TokenKind::Error` tokens and are reported once, in
//! [`LexOutput::errors`]; the parser skips over error tokens without
//! reporting them again.

mod convert;
mod escape;
mod lex_error;
mod raw_token;

use logos::Logos;
use tala_ir::{Span, StringInterner, Token, TokenKind, TokenList};

pub use lex_error::{LexError, LexErrorKind};

use convert::convert_token;
use raw_token::RawToken;

/// Result of lexing one source text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LexOutput {
    pub tokens: TokenList,
    pub errors: Vec<LexError>,
}

impl LexOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Lex source code into a `TokenList`.
///
/// A source longer than `u32::MAX` bytes is not lexed at all: the output is
/// a lone `Eof` and a single [`LexErrorKind::SourceTooLarge`].
pub fn lex(source: &str, interner: &StringInterner) -> LexOutput {
    let mut output = LexOutput::default();
    let whole = match whole_source(source.len()) {
        Ok(span) => span,
        Err(err) => {
            output.errors.push(err);
            output.tokens.push(Token::new(TokenKind::Eof, Span::DUMMY));
            return output;
        }
    };
    let mut logos = RawToken::lexer(source);

    while let Some(token_result) = logos.next() {
        let span = span_of(logos.span());
        let slice = logos.slice();

        match token_result {
            Ok(RawToken::LineComment) => {}
            Ok(raw) => {
                let kind = convert_token(raw, slice, span, interner, &mut output.errors);
                output.tokens.push(Token::new(kind, span));
            }
            Err(()) => {
                output.errors.push(LexError::new(
                    LexErrorKind::InvalidCharacter(slice.to_string()),
                    span,
                ));
                output.tokens.push(Token::new(TokenKind::Error, span));
            }
        }
    }

    output.tokens.push(Token::new(TokenKind::Eof, Span::point(whole.end)));

    tracing::debug!(
        tokens = output.tokens.len(),
        errors = output.errors.len(),
        "lexed source"
    );
    output
}

/// Span covering a source of `len` bytes.
fn whole_source(len: usize) -> Result<Span, LexError> {
    Span::try_from_range(0..len)
        .map_err(|_| LexError::new(LexErrorKind::SourceTooLarge(len), Span::DUMMY))
}

/// Only called for ranges inside a source that `whole_source` accepted.
#[expect(
    clippy::cast_possible_truncation,
    reason = "lex rejects sources longer than u32::MAX up front"
)]
fn span_of(range: std::ops::Range<usize>) -> Span {
    Span::new(range.start as u32, range.end as u32)
}

#[cfg(test)]
mod tests;
