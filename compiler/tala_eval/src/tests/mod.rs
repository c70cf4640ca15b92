#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

mod where_clause;

use tala_check::CheckedModule;
use tala_ir::StringInterner;

use crate::{buffer_handler, EvalConfig, EvalError, EvalErrorKind, EvalResult, Interpreter};

/// Lex, parse and check `source`, panicking on any diagnostic.
pub(crate) fn checked(source: &str, interner: &StringInterner) -> CheckedModule {
    let lexed = tala_lexer::lex(source, interner);
    assert!(!lexed.has_errors(), "lex errors in {source:?}: {:?}", lexed.errors);
    let parsed = tala_parse::parse(&lexed.tokens, interner);
    tala_check::check(parsed, interner).unwrap()
}

/// Run `source` with a capturing print handler.
pub(crate) fn eval_with_config(source: &str, config: &EvalConfig) -> (EvalResult, String) {
    let interner = StringInterner::new();
    let module = checked(source, &interner);
    let mut interpreter = Interpreter::new(&interner, config);
    let result = interpreter.run(&module);
    (result, config.print.output())
}

pub(crate) fn eval_with_output(source: &str) -> (EvalResult, String) {
    let config = EvalConfig::default().with_print_handler(buffer_handler());
    eval_with_config(source, &config)
}

pub(crate) fn eval(source: &str) -> EvalResult {
    eval_with_output(source).0
}

pub(crate) fn eval_err(source: &str) -> EvalError {
    eval(source).unwrap_err()
}

pub(crate) fn eval_err_kind(source: &str) -> EvalErrorKind {
    eval_err(source).kind
}
