//! Raw token to `TokenKind` conversion: keyword mapping, literal decoding and
//! interning.

use tala_ir::{Span, StringInterner, TokenKind};

use crate::escape::unescape_string;
use crate::lex_error::{LexError, LexErrorKind};
use crate::raw_token::RawToken;

/// Convert one raw token. Literal problems are pushed to `errors` and the
/// token becomes `TokenKind::Error`.
pub(crate) fn convert_token(
    raw: RawToken,
    slice: &str,
    span: Span,
    interner: &StringInterner,
    errors: &mut Vec<LexError>,
) -> TokenKind {
    match raw {
        RawToken::Int => match slice.replace('_', "").parse::<i64>() {
            Ok(n) => TokenKind::Int(n),
            Err(_) => {
                errors.push(LexError::new(
                    LexErrorKind::IntegerTooLarge(slice.to_string()),
                    span,
                ));
                TokenKind::Error
            }
        },
        RawToken::Float => match slice.replace('_', "").parse::<f64>() {
            Ok(f) if f.is_finite() => TokenKind::Float(f.to_bits()),
            _ => {
                errors.push(LexError::new(
                    LexErrorKind::InvalidFloat(slice.to_string()),
                    span,
                ));
                TokenKind::Error
            }
        },
        RawToken::String => {
            let body = &slice[1..slice.len() - 1];
            let (text, invalid) = unescape_string(body);
            if let Some(c) = invalid {
                errors.push(LexError::new(LexErrorKind::InvalidEscape(c), span));
            }
            TokenKind::String(interner.intern(&text))
        }
        RawToken::UnterminatedString => {
            errors.push(LexError::new(LexErrorKind::UnterminatedString, span));
            TokenKind::Error
        }
        RawToken::Ident => TokenKind::Ident(interner.intern(slice)),

        // Comments are dropped by the caller.
        RawToken::LineComment => TokenKind::Error,

        RawToken::Let => TokenKind::Let,
        RawToken::Fn => TokenKind::Fn,
        RawToken::Where => TokenKind::Where,
        RawToken::If => TokenKind::If,
        RawToken::Then => TokenKind::Then,
        RawToken::Else => TokenKind::Else,
        RawToken::For => TokenKind::For,
        RawToken::In => TokenKind::In,
        RawToken::True => TokenKind::True,
        RawToken::False => TokenKind::False,
        RawToken::Void => TokenKind::Void,

        RawToken::IntType => TokenKind::IntType,
        RawToken::FloatType => TokenKind::FloatType,
        RawToken::BoolType => TokenKind::BoolType,
        RawToken::StrType => TokenKind::StrType,
        RawToken::ListType => TokenKind::ListType,
        RawToken::TupleType => TokenKind::TupleType,
        RawToken::AnyType => TokenKind::AnyType,

        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::LBracket => TokenKind::LBracket,
        RawToken::RBracket => TokenKind::RBracket,
        RawToken::LBrace => TokenKind::LBrace,
        RawToken::RBrace => TokenKind::RBrace,
        RawToken::Comma => TokenKind::Comma,
        RawToken::Semicolon => TokenKind::Semicolon,
        RawToken::Colon => TokenKind::Colon,

        RawToken::Eq => TokenKind::Eq,
        RawToken::FatArrow => TokenKind::FatArrow,
        RawToken::EqEq => TokenKind::EqEq,
        RawToken::NotEq => TokenKind::NotEq,
        RawToken::Lt => TokenKind::Lt,
        RawToken::LtEq => TokenKind::LtEq,
        RawToken::Gt => TokenKind::Gt,
        RawToken::GtEq => TokenKind::GtEq,
        RawToken::Plus => TokenKind::Plus,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Star => TokenKind::Star,
        RawToken::Slash => TokenKind::Slash,
        RawToken::Percent => TokenKind::Percent,
        RawToken::Bang => TokenKind::Bang,
        RawToken::AmpAmp => TokenKind::AmpAmp,
        RawToken::PipePipe => TokenKind::PipePipe,
        RawToken::Amp => TokenKind::Amp,
    }
}
