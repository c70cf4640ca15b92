//! Validation errors.

use tala_diagnostic::{Diagnostic, ErrorCode};
use tala_ir::Span;
use tala_parse::ParseError;
use thiserror::Error;

/// What an offending name collides with.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Collision {
    /// A parameter of the same lambda.
    Parameter,
    /// A name introduced by an earlier binding of the same clause.
    EarlierBinding,
    /// The same name twice in one destructuring pattern.
    SamePattern,
}

/// Where a reference marker was found.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum RefSite {
    BindingTarget,
    BindingSource,
    /// A `let` or `for` target.
    StatementTarget,
    Expression,
}

impl RefSite {
    fn describe(self) -> &'static str {
        match self {
            RefSite::BindingTarget => "a `where` binding target",
            RefSite::BindingSource => "a `where` binding value",
            RefSite::StatementTarget => "a `let` or `for` target",
            RefSite::Expression => "an expression",
        }
    }
}

#[derive(Clone, Eq, PartialEq, Debug, Error)]
pub enum CheckErrorKind {
    /// The module did not parse; no validation was attempted.
    #[error("{}", .0.message)]
    Syntax(ParseError),

    #[error("parameter `{name}` is declared more than once")]
    DuplicateParameter { name: String },

    #[error("{}", duplicate_message(name, *collision))]
    DuplicateBindingName { name: String, collision: Collision },

    #[error("reference marker `&` is not allowed in {}", site.describe())]
    ReferenceNotAllowed { site: RefSite },

    #[error("a `where` binding's value must be an expression, not a block")]
    StatementInBinding,
}

fn duplicate_message(name: &str, collision: Collision) -> String {
    match collision {
        Collision::Parameter => format!("binding `{name}` shadows a parameter of the same name"),
        Collision::EarlierBinding => {
            format!("`{name}` is already bound earlier in this `where` clause")
        }
        Collision::SamePattern => format!("`{name}` is bound twice in the same pattern"),
    }
}

/// A validation error with its primary location and related locations.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct CheckError {
    pub kind: CheckErrorKind,
    pub span: Span,
    pub secondary: Vec<(Span, String)>,
}

impl CheckError {
    #[cold]
    pub fn new(kind: CheckErrorKind, span: Span) -> Self {
        CheckError {
            kind,
            span,
            secondary: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_secondary(mut self, span: Span, message: impl Into<String>) -> Self {
        self.secondary.push((span, message.into()));
        self
    }

    pub fn code(&self) -> ErrorCode {
        match &self.kind {
            CheckErrorKind::Syntax(err) => err.code,
            CheckErrorKind::DuplicateBindingName { .. } => ErrorCode::E2001,
            CheckErrorKind::ReferenceNotAllowed { .. } => ErrorCode::E2002,
            CheckErrorKind::StatementInBinding => ErrorCode::E2003,
            CheckErrorKind::DuplicateParameter { .. } => ErrorCode::E2004,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let (label, note) = match &self.kind {
            CheckErrorKind::Syntax(err) => return err.to_diagnostic(),
            CheckErrorKind::DuplicateParameter { .. } => ("declared again here", None),
            CheckErrorKind::DuplicateBindingName { collision, .. } => (
                "introduced here",
                match collision {
                    Collision::Parameter => {
                        Some("bindings cannot shadow parameters; choose a new name")
                    }
                    Collision::EarlierBinding | Collision::SamePattern => {
                        Some("each name in a `where` clause is bound exactly once")
                    }
                },
            ),
            CheckErrorKind::ReferenceNotAllowed { .. } => (
                "reference marker",
                Some("Tala has no references; bind the value itself"),
            ),
            CheckErrorKind::StatementInBinding => (
                "block here",
                Some("use `if c then a else b` or move the work into the lambda body"),
            ),
        };

        let mut diag = Diagnostic::error(self.code())
            .with_message(self.kind.to_string())
            .with_label(self.span, label);
        for (span, message) in &self.secondary {
            diag = diag.with_secondary_label(*span, message);
        }
        if let Some(note) = note {
            diag = diag.with_note(note);
        }
        diag
    }
}

impl std::fmt::Display for CheckError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code(), self.kind)
    }
}

impl std::error::Error for CheckError {}
