//! Shared node traits.

use super::Span;

/// Anything the parser produced from a contiguous source range.
pub trait Spanned {
    fn span(&self) -> Span;
}

impl Spanned for super::Token {
    fn span(&self) -> Span {
        self.span
    }
}
