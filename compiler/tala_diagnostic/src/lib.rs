//! Diagnostic system for rich error reporting.
//!
//! Every phase reports problems as a [`Diagnostic`]:
//! - an error code for searchability
//! - a message saying what went wrong
//! - a primary label saying where
//! - secondary labels and notes giving context
//!
//! Phases keep their own structured error types and convert them here at the
//! boundary, so the driver renders everything through one emitter.

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod span_utils;

pub use diagnostic::{Diagnostic, Label, Severity};
pub use error_code::ErrorCode;
