//! Evaluation errors.
//!
//! Every runtime failure is an [`EvalError`]: a structured kind plus the span
//! of the expression that failed. Errors propagate unchanged through calls,
//! `where` bindings and blocks; nothing in the evaluator rewrites a kind or a
//! span on the way out.
//!
//! Constructors live here so call sites read as `errors::division_by_zero(span)`.

use tala_diagnostic::{Diagnostic, ErrorCode};
use tala_ir::Span;
use thiserror::Error;

/// Result of evaluating an expression.
pub type EvalResult<T = crate::Value> = Result<T, EvalError>;

#[derive(Clone, Eq, PartialEq, Debug, Error)]
pub enum EvalErrorKind {
    #[error("undefined variable `{name}`")]
    UndefinedVariable { name: String },

    #[error("type mismatch: expected {expected}, found {got}")]
    TypeMismatch { expected: String, got: &'static str },

    #[error("{}", arity_message(*min, *max, *got))]
    ArityMismatch { min: usize, max: usize, got: usize },

    #[error("division by zero")]
    DivisionByZero,

    #[error("modulo by zero")]
    ModuloByZero,

    #[error("integer overflow in {operation}")]
    IntegerOverflow { operation: &'static str },

    #[error("value of type `{type_name}` is not callable")]
    NotCallable { type_name: &'static str },

    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: i64, len: usize },

    #[error("pattern expects at least {expected} elements, found {got}")]
    PatternTooLong { expected: usize, got: usize },

    #[error("cannot destructure a value of type `{got}`; expected a list or tuple")]
    ExpectedSequence { got: &'static str },

    #[error("maximum call depth of {depth} exceeded")]
    StackOverflow { depth: usize },

    #[error("`{name}` is already bound in this call")]
    AlreadyBound { name: String },

    #[error("operator `{op}` cannot be applied to `{left}` and `{right}`")]
    InvalidOperands {
        op: &'static str,
        left: &'static str,
        right: &'static str,
    },

    #[error("operator `{op}` cannot be applied to `{operand}`")]
    InvalidOperand {
        op: &'static str,
        operand: &'static str,
    },
}

fn arity_message(min: usize, max: usize, got: usize) -> String {
    let plural = |n: usize| if n == 1 { "" } else { "s" };
    if min == max {
        format!("expected {min} argument{}, found {got}", plural(min))
    } else {
        format!("expected {min} to {max} arguments, found {got}")
    }
}

/// A runtime error and where it happened.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct EvalError {
    pub kind: EvalErrorKind,
    pub span: Span,
}

impl EvalError {
    #[cold]
    pub fn new(kind: EvalErrorKind, span: Span) -> Self {
        EvalError { kind, span }
    }

    pub fn code(&self) -> ErrorCode {
        match self.kind {
            EvalErrorKind::UndefinedVariable { .. } => ErrorCode::E6001,
            EvalErrorKind::TypeMismatch { .. } => ErrorCode::E6002,
            EvalErrorKind::ArityMismatch { .. } => ErrorCode::E6003,
            EvalErrorKind::DivisionByZero | EvalErrorKind::ModuloByZero => ErrorCode::E6004,
            EvalErrorKind::IntegerOverflow { .. } => ErrorCode::E6005,
            EvalErrorKind::NotCallable { .. } => ErrorCode::E6006,
            EvalErrorKind::IndexOutOfBounds { .. } => ErrorCode::E6007,
            EvalErrorKind::PatternTooLong { .. } => ErrorCode::E6008,
            EvalErrorKind::ExpectedSequence { .. } => ErrorCode::E6009,
            EvalErrorKind::StackOverflow { .. } => ErrorCode::E6010,
            EvalErrorKind::AlreadyBound { .. } => ErrorCode::E6011,
            EvalErrorKind::InvalidOperands { .. } | EvalErrorKind::InvalidOperand { .. } => {
                ErrorCode::E6012
            }
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code())
            .with_message(self.kind.to_string())
            .with_label(self.span, "evaluated here");
        match &self.kind {
            EvalErrorKind::UndefinedVariable { .. } => diag.with_note(
                "a `where` binding can only use parameters, captured variables and earlier bindings",
            ),
            EvalErrorKind::StackOverflow { .. } => {
                diag.with_note("raise the limit with `--max-depth=N`")
            }
            _ => diag,
        }
    }
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code(), self.kind)
    }
}

impl std::error::Error for EvalError {}

// Variables and calls

#[cold]
pub fn undefined_variable(name: &str, span: Span) -> EvalError {
    EvalError::new(
        EvalErrorKind::UndefinedVariable {
            name: name.to_owned(),
        },
        span,
    )
}

#[cold]
pub fn already_bound(name: &str, span: Span) -> EvalError {
    EvalError::new(
        EvalErrorKind::AlreadyBound {
            name: name.to_owned(),
        },
        span,
    )
}

#[cold]
pub fn not_callable(type_name: &'static str, span: Span) -> EvalError {
    EvalError::new(EvalErrorKind::NotCallable { type_name }, span)
}

#[cold]
pub fn arity_mismatch(min: usize, max: usize, got: usize, span: Span) -> EvalError {
    EvalError::new(EvalErrorKind::ArityMismatch { min, max, got }, span)
}

#[cold]
pub fn stack_overflow(depth: usize, span: Span) -> EvalError {
    EvalError::new(EvalErrorKind::StackOverflow { depth }, span)
}

#[cold]
pub fn type_mismatch(expected: impl Into<String>, got: &'static str, span: Span) -> EvalError {
    EvalError::new(
        EvalErrorKind::TypeMismatch {
            expected: expected.into(),
            got,
        },
        span,
    )
}

// Operators

#[cold]
pub fn division_by_zero(span: Span) -> EvalError {
    EvalError::new(EvalErrorKind::DivisionByZero, span)
}

#[cold]
pub fn modulo_by_zero(span: Span) -> EvalError {
    EvalError::new(EvalErrorKind::ModuloByZero, span)
}

#[cold]
pub fn integer_overflow(operation: &'static str, span: Span) -> EvalError {
    EvalError::new(EvalErrorKind::IntegerOverflow { operation }, span)
}

#[cold]
pub fn invalid_operands(
    op: &'static str,
    left: &'static str,
    right: &'static str,
    span: Span,
) -> EvalError {
    EvalError::new(EvalErrorKind::InvalidOperands { op, left, right }, span)
}

#[cold]
pub fn invalid_operand(op: &'static str, operand: &'static str, span: Span) -> EvalError {
    EvalError::new(EvalErrorKind::InvalidOperand { op, operand }, span)
}

// Indexing and destructuring

#[cold]
pub fn index_out_of_bounds(index: i64, len: usize, span: Span) -> EvalError {
    EvalError::new(EvalErrorKind::IndexOutOfBounds { index, len }, span)
}

#[cold]
pub fn pattern_too_long(expected: usize, got: usize, span: Span) -> EvalError {
    EvalError::new(EvalErrorKind::PatternTooLong { expected, got }, span)
}

#[cold]
pub fn expected_sequence(got: &'static str, span: Span) -> EvalError {
    EvalError::new(EvalErrorKind::ExpectedSequence { got }, span)
}
