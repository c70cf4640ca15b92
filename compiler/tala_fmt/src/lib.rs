//! Tala formatter.
//!
//! Renders the flat AST back to canonical source text: single spaces around
//! binary operators, `, ` separators, parentheses only where precedence needs
//! them, and blocks broken over indented lines. Formatting a parsed module and
//! parsing the result yields the same tree.
//!
//! Used for `tala parse` output and for printing `where` bindings in
//! reflection dumps.

mod formatter;

pub use formatter::{Formatter, INDENT_WIDTH};

use tala_ir::{BindingPattern, ExprArena, ExprId, Lambda, Module, StringInterner, WhereBinding};

/// Render a single expression.
pub fn format_expr(arena: &ExprArena, interner: &StringInterner, id: ExprId) -> String {
    let mut f = Formatter::new(arena, interner);
    f.expr(id);
    f.finish()
}

/// Render a binding pattern, e.g. `[a, &b]`.
pub fn format_pattern(
    arena: &ExprArena,
    interner: &StringInterner,
    pattern: &BindingPattern,
) -> String {
    let mut f = Formatter::new(arena, interner);
    f.pattern(pattern);
    f.finish()
}

/// Render one `where` binding as `target = source`.
pub fn format_binding(
    arena: &ExprArena,
    interner: &StringInterner,
    binding: &WhereBinding,
) -> String {
    let mut f = Formatter::new(arena, interner);
    f.where_binding(binding);
    f.finish()
}

/// Render a lambda's head: `fn(params)` and the return type, without the
/// `where` clause and body.
pub fn format_lambda_head(arena: &ExprArena, interner: &StringInterner, lambda: &Lambda) -> String {
    let mut f = Formatter::new(arena, interner);
    f.lambda_head(lambda);
    f.finish()
}

/// Render a whole module, one statement per line, with a trailing newline.
pub fn format_module(arena: &ExprArena, interner: &StringInterner, module: &Module) -> String {
    let mut f = Formatter::new(arena, interner);
    f.stmt_list(arena.get_stmts(module.stmts));
    let mut out = f.finish();
    if !out.is_empty() {
        out.push('\n');
    }
    out
}
