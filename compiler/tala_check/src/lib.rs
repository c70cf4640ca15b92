//! Static validation of Tala modules.
//!
//! [`check`] is the only way to obtain a [`CheckedModule`], and the evaluator
//! only accepts a `CheckedModule`, so a lambda whose `where` clause breaks a
//! rule can never be called.
//!
//! [`reflect`] exposes the lambdas of a checked module and their bindings to
//! tooling without evaluating anything.

mod checker;
mod error;
pub mod reflect;

pub use error::{CheckError, CheckErrorKind, Collision, RefSite};

use tala_ir::visitor::Visitor;
use tala_ir::{ExprArena, Module, SharedArena, StringInterner};
use tala_parse::ParseOutput;

use checker::Checker;

/// A module that passed validation.
#[derive(Clone, Debug)]
pub struct CheckedModule {
    module: Module,
    arena: SharedArena,
}

impl CheckedModule {
    pub fn module(&self) -> &Module {
        &self.module
    }

    pub fn arena(&self) -> &ExprArena {
        &self.arena
    }

    /// Shared handle to the arena, for values that outlive this module.
    pub fn shared_arena(&self) -> &SharedArena {
        &self.arena
    }
}

/// Validate every lambda of a parsed module.
///
/// A module with parse errors is rejected as is: each parse error is
/// returned as a [`CheckErrorKind::Syntax`] and nothing is checked. All
/// validation errors are collected before returning.
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(lambdas = parsed.arena.lambda_count())
)]
pub fn check(
    parsed: ParseOutput,
    interner: &StringInterner,
) -> Result<CheckedModule, Vec<CheckError>> {
    if parsed.has_errors() {
        return Err(parsed
            .errors
            .into_iter()
            .map(|err| {
                let span = err.span;
                CheckError::new(CheckErrorKind::Syntax(err), span)
            })
            .collect());
    }

    let mut checker = Checker::new(interner);
    checker.visit_module(&parsed.module, &parsed.arena);

    if checker.errors.is_empty() {
        tracing::debug!("module is valid");
        Ok(CheckedModule {
            module: parsed.module,
            arena: SharedArena::new(parsed.arena),
        })
    } else {
        tracing::debug!(errors = checker.errors.len(), "module rejected");
        Err(checker.errors)
    }
}
