//! Recursive descent parser for Tala.
//!
//! Produces a flat AST in an `ExprArena`. A syntax error aborts the statement
//! it occurs in (including any lambda being parsed); the parser then
//! synchronizes to the next statement and keeps going, so one run reports
//! every independent error.

mod context;
mod cursor;
mod error;
mod grammar;
mod recovery;

pub use context::ParseContext;
pub use cursor::Cursor;
pub use error::ParseError;
pub use recovery::{synchronize, RecoverySet};

use tala_ir::{ExprArena, Module, Span, StringInterner, Token, TokenKind, TokenList};

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    arena: ExprArena,
    context: ParseContext,
    /// Errors recovered from so far.
    errors: Vec<ParseError>,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a TokenList, interner: &'a StringInterner) -> Self {
        Parser {
            cursor: Cursor::new(tokens, interner),
            arena: ExprArena::new(),
            context: ParseContext::new(),
            errors: Vec::new(),
        }
    }

    // Cursor delegation

    #[inline]
    fn current_kind(&self) -> TokenKind {
        self.cursor.current_kind()
    }

    #[inline]
    fn current_span(&self) -> Span {
        self.cursor.current_span()
    }

    #[inline]
    fn previous_span(&self) -> Span {
        self.cursor.previous_span()
    }

    #[inline]
    fn is_at_end(&self) -> bool {
        self.cursor.is_at_end()
    }

    #[inline]
    fn check(&self, kind: &TokenKind) -> bool {
        self.cursor.check(kind)
    }

    #[inline]
    fn advance(&mut self) -> Token {
        self.cursor.advance()
    }

    #[inline]
    fn eat(&mut self, kind: &TokenKind) -> bool {
        self.cursor.eat(kind)
    }

    #[inline]
    fn expect(&mut self, kind: &TokenKind) -> Result<Span, ParseError> {
        self.cursor.expect(kind)
    }

    /// Run `f` with `flag` added to the parse context.
    fn with_context<T>(&mut self, flag: ParseContext, f: impl FnOnce(&mut Self) -> T) -> T {
        let saved = self.context;
        self.context = saved.with(flag);
        let result = f(self);
        self.context = saved;
        result
    }

    /// Parse a whole module: statements up to end of file.
    pub fn parse_module(mut self) -> ParseOutput {
        let stmts = self.parse_stmt_list(&TokenKind::Eof);
        let stmts = self.arena.alloc_stmts(stmts);
        tracing::debug!(
            stmts = stmts.len(),
            lambdas = self.arena.lambda_count(),
            errors = self.errors.len(),
            "parsed module"
        );
        ParseOutput {
            module: Module::new(stmts),
            arena: self.arena,
            errors: self.errors,
        }
    }
}

/// Parse result: module, arena, and any errors.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ParseOutput {
    pub module: Module,
    pub arena: ExprArena,
    pub errors: Vec<ParseError>,
}

impl ParseOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Parse tokens into a module.
///
/// `Error` tokens were already reported by the lexer and are dropped here so
/// they do not cascade into parse errors.
pub fn parse(tokens: &TokenList, interner: &StringInterner) -> ParseOutput {
    let mut filtered = TokenList::new();
    for token in tokens.iter().filter(|t| t.kind != TokenKind::Error) {
        filtered.push(*token);
    }
    if filtered.is_empty() {
        filtered.push(Token::new(TokenKind::Eof, Span::DUMMY));
    }
    Parser::new(&filtered, interner).parse_module()
}

#[cfg(test)]
mod tests;
