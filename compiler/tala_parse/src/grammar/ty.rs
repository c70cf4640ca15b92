//! Type annotations.

use tala_diagnostic::ErrorCode;
use tala_ir::{ParsedType, TokenKind};

use crate::{ParseError, Parser};

impl Parser<'_> {
    /// `int | float | bool | str | list | tuple | fn | any`
    pub(crate) fn parse_type(&mut self) -> Result<ParsedType, ParseError> {
        let ty = match self.current_kind() {
            TokenKind::IntType => ParsedType::Int,
            TokenKind::FloatType => ParsedType::Float,
            TokenKind::BoolType => ParsedType::Bool,
            TokenKind::StrType => ParsedType::Str,
            TokenKind::ListType => ParsedType::List,
            TokenKind::TupleType => ParsedType::Tuple,
            TokenKind::Fn => ParsedType::Fn,
            TokenKind::AnyType => ParsedType::Any,
            _ => {
                return Err(ParseError::new(
                    ErrorCode::E1005,
                    format!("expected type, found {}", self.cursor.describe_current()),
                    self.current_span(),
                )
                .with_help("types are `int`, `float`, `bool`, `str`, `list`, `tuple`, `fn` and `any`"));
            }
        };
        self.advance();
        Ok(ty)
    }
}
