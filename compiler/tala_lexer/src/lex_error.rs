//! Lexical errors.

use tala_diagnostic::{Diagnostic, ErrorCode};
use tala_ir::Span;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LexErrorKind {
    #[error("invalid character `{0}`")]
    InvalidCharacter(String),
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("integer literal `{0}` does not fit in 64 bits")]
    IntegerTooLarge(String),
    #[error("invalid float literal `{0}`")]
    InvalidFloat(String),
    #[error("unknown escape sequence `\\{0}`")]
    InvalidEscape(char),
    #[error("source is {0} bytes; at most 4 GiB can be lexed")]
    SourceTooLarge(usize),
}

/// A lexical error at a source location.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub span: Span,
}

impl LexError {
    pub fn new(kind: LexErrorKind, span: Span) -> Self {
        LexError { kind, span }
    }

    pub fn code(&self) -> ErrorCode {
        match self.kind {
            LexErrorKind::InvalidCharacter(_) => ErrorCode::E0001,
            LexErrorKind::UnterminatedString => ErrorCode::E0002,
            LexErrorKind::IntegerTooLarge(_) | LexErrorKind::InvalidFloat(_) => ErrorCode::E0003,
            LexErrorKind::InvalidEscape(_) => ErrorCode::E0004,
            LexErrorKind::SourceTooLarge(_) => ErrorCode::E0005,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let label = match &self.kind {
            LexErrorKind::InvalidCharacter(_) => "not valid in Tala source",
            LexErrorKind::UnterminatedString => "string starts here",
            LexErrorKind::IntegerTooLarge(_) | LexErrorKind::InvalidFloat(_) => "invalid literal",
            LexErrorKind::InvalidEscape(_) => "in this string",
            LexErrorKind::SourceTooLarge(_) => "nothing was lexed",
        };
        let diag = Diagnostic::error(self.code())
            .with_message(self.kind.to_string())
            .with_label(self.span, label);
        match self.kind {
            LexErrorKind::InvalidEscape(_) => {
                diag.with_note("supported escapes are `\\n`, `\\t`, `\\\\` and `\\\"`")
            }
            LexErrorKind::UnterminatedString => diag.with_suggestion("add a closing `\"`"),
            _ => diag,
        }
    }
}
