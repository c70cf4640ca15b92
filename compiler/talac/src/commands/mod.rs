//! Command handlers for the `tala` CLI.
//!
//! Each handler reads its file, runs part of the pipeline and exits with
//! status 1 after reporting diagnostics.

use tala_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use talac::Diagnostic;

mod bindings;
mod check;
mod explain;
mod parse;
mod run;

pub use bindings::print_bindings;
pub use check::check_file;
pub use explain::explain_error;
pub use parse::parse_file;
pub use run::run_file;

/// Read a source file, exiting on failure.
fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("error: cannot read `{path}`: {e}");
            std::process::exit(1);
        }
    }
}

/// Emit diagnostics to stderr and exit with status 1.
fn fail_with(path: &str, source: &str, diagnostics: &[Diagnostic]) -> ! {
    let is_tty = std::io::IsTerminal::is_terminal(&std::io::stderr());
    let mut emitter = TerminalEmitter::stderr(ColorMode::Auto, is_tty).with_source(path, source);
    emitter.emit_all(diagnostics);
    emitter.emit_summary(diagnostics.len(), 0);
    emitter.flush();
    std::process::exit(1);
}
