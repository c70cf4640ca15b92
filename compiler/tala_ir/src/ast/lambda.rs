//! Lambda expressions and their `where` clause.

use crate::{BindingPattern, ExprId, Name, Span, Spanned};

/// Built-in type annotations accepted on parameters and return types.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ParsedType {
    Int,
    Float,
    Bool,
    Str,
    List,
    Tuple,
    Fn,
    Any,
}

impl ParsedType {
    pub fn name(self) -> &'static str {
        match self {
            ParsedType::Int => "int",
            ParsedType::Float => "float",
            ParsedType::Bool => "bool",
            ParsedType::Str => "str",
            ParsedType::List => "list",
            ParsedType::Tuple => "tuple",
            ParsedType::Fn => "fn",
            ParsedType::Any => "any",
        }
    }
}

/// Lambda parameter: `name (: type)? (= default)?`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Param {
    pub name: Name,
    pub ty: Option<ParsedType>,
    pub default: Option<ExprId>,
    pub span: Span,
}

impl Spanned for Param {
    fn span(&self) -> Span {
        self.span
    }
}

/// One entry of a `where (...)` clause: `target = source`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct WhereBinding {
    pub target: BindingPattern,
    pub source: ExprId,
    /// From the start of the target to the end of the source.
    pub span: Span,
}

impl Spanned for WhereBinding {
    fn span(&self) -> Span {
        self.span
    }
}

/// `fn(params) (: ret)? (where (bindings))? => body`
///
/// `bindings` is in source order and is empty when there is no clause.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Lambda {
    pub params: Vec<Param>,
    pub ret_ty: Option<ParsedType>,
    /// Span of the `where` keyword through the closing `)`.
    pub where_span: Option<Span>,
    pub bindings: Vec<WhereBinding>,
    pub body: ExprId,
    pub span: Span,
}

impl Lambda {
    #[inline]
    pub fn has_where_clause(&self) -> bool {
        self.where_span.is_some()
    }

    /// Number of parameters without a default value.
    pub fn required_params(&self) -> usize {
        self.params.iter().filter(|p| p.default.is_none()).count()
    }
}

impl Spanned for Lambda {
    fn span(&self) -> Span {
        self.span
    }
}
