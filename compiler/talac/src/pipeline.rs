//! Source text to checked module to value.

use tala_check::CheckedModule;
use tala_diagnostic::Diagnostic;
use tala_eval::{silent_handler, EvalConfig, Interpreter, Value};
use tala_ir::{SharedInterner, StringInterner};
use tala_parse::ParseOutput;

/// A source that passed every static phase.
#[derive(Clone)]
pub struct Compiled {
    pub interner: SharedInterner,
    pub module: CheckedModule,
}

/// Lex and parse, reporting lexer and parser errors together.
pub fn parse_source(
    source: &str,
    interner: &StringInterner,
) -> Result<ParseOutput, Vec<Diagnostic>> {
    let lexed = tala_lexer::lex(source, interner);
    let parsed = tala_parse::parse(&lexed.tokens, interner);

    let mut diagnostics: Vec<Diagnostic> = lexed
        .errors
        .iter()
        .map(tala_lexer::LexError::to_diagnostic)
        .collect();
    diagnostics.extend(parsed.errors.iter().map(tala_parse::ParseError::to_diagnostic));
    if diagnostics.is_empty() {
        Ok(parsed)
    } else {
        Err(diagnostics)
    }
}

/// Lex, parse and validate `source`.
///
/// Lexer errors do not stop parsing, so one call reports lexer, parser and
/// (for a clean parse) validation problems at once.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn compile(source: &str) -> Result<Compiled, Vec<Diagnostic>> {
    let interner = SharedInterner::new();
    let lexed = tala_lexer::lex(source, &interner);
    let parsed = tala_parse::parse(&lexed.tokens, &interner);

    let mut diagnostics: Vec<Diagnostic> = lexed
        .errors
        .iter()
        .map(tala_lexer::LexError::to_diagnostic)
        .collect();
    match tala_check::check(parsed, &interner) {
        Ok(module) if diagnostics.is_empty() => Ok(Compiled { interner, module }),
        Ok(_) => Err(diagnostics),
        Err(errors) => {
            diagnostics.extend(errors.iter().map(tala_check::CheckError::to_diagnostic));
            Err(diagnostics)
        }
    }
}

/// Options for [`run_source`], as given on the command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    /// Maximum lambda call depth.
    pub max_depth: usize,
    /// Discard `print` and `trace` output.
    pub quiet: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        RunOptions {
            max_depth: tala_eval::DEFAULT_MAX_CALL_DEPTH,
            quiet: false,
        }
    }
}

impl RunOptions {
    /// Parse `--max-depth=N` and `--quiet`/`-q`.
    pub fn from_args(args: &[String]) -> Result<RunOptions, String> {
        let mut options = RunOptions::default();
        for arg in args {
            if let Some(depth) = arg.strip_prefix("--max-depth=") {
                options.max_depth = depth
                    .parse()
                    .map_err(|_| format!("invalid value for --max-depth: `{depth}`"))?;
            } else if arg == "--quiet" || arg == "-q" {
                options.quiet = true;
            } else {
                return Err(format!("unknown option `{arg}`"));
            }
        }
        Ok(options)
    }

    /// Evaluator configuration printing to stdout, or nowhere when quiet.
    pub fn eval_config(&self) -> EvalConfig {
        let config = EvalConfig::default().with_max_call_depth(self.max_depth);
        if self.quiet {
            config.with_print_handler(silent_handler())
        } else {
            config
        }
    }
}

/// Compile and evaluate `source`, returning the program's value.
pub fn run_source(source: &str, options: &RunOptions) -> Result<Value, Vec<Diagnostic>> {
    run_source_with(source, &options.eval_config())
}

/// Like [`run_source`] with an explicit evaluator configuration, e.g. one
/// whose print handler is [`tala_eval::buffer_handler`].
pub fn run_source_with(source: &str, config: &EvalConfig) -> Result<Value, Vec<Diagnostic>> {
    let compiled = compile(source)?;
    let mut interpreter = Interpreter::new(&compiled.interner, config);
    interpreter
        .run(&compiled.module)
        .map_err(|err| vec![err.to_diagnostic()])
}

#[cfg(test)]
mod tests {
    use super::*;
    use tala_eval::buffer_handler;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn run_options_from_args() {
        assert_eq!(RunOptions::from_args(&[]), Ok(RunOptions::default()));
        assert_eq!(
            RunOptions::from_args(&args(&["--max-depth=8", "-q"])),
            Ok(RunOptions {
                max_depth: 8,
                quiet: true
            })
        );
        assert!(RunOptions::from_args(&args(&["--max-depth=lots"])).is_err());
        assert!(RunOptions::from_args(&args(&["--fast"])).is_err());
    }

    #[test]
    fn buffered_run_captures_output() {
        let config = EvalConfig::default().with_print_handler(buffer_handler());
        let value = run_source_with("print(\"hi\"); 1", &config);
        assert_eq!(value, Ok(Value::Int(1)));
        assert_eq!(config.print.output(), "hi\n");
    }
}
