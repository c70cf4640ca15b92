//! Evaluator configuration.

use crate::print_handler::{stdout_handler, SharedPrintHandler};

/// Nesting limit for lambda calls when none is configured.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 512;

/// Settings shared by every interpreter of one run.
#[derive(Clone)]
pub struct EvalConfig {
    /// Calls nested deeper than this fail with `StackOverflow`.
    pub max_call_depth: usize,
    /// Destination of `print` and `trace` output.
    pub print: SharedPrintHandler,
}

impl EvalConfig {
    #[must_use]
    pub fn with_max_call_depth(mut self, depth: usize) -> Self {
        self.max_call_depth = depth;
        self
    }

    #[must_use]
    pub fn with_print_handler(mut self, print: SharedPrintHandler) -> Self {
        self.print = print;
        self
    }
}

impl Default for EvalConfig {
    fn default() -> Self {
        EvalConfig {
            max_call_depth: DEFAULT_MAX_CALL_DEPTH,
            print: stdout_handler(),
        }
    }
}

impl std::fmt::Debug for EvalConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EvalConfig")
            .field("max_call_depth", &self.max_call_depth)
            .finish_non_exhaustive()
    }
}
