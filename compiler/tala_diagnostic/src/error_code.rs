//! Error codes for all compiler diagnostics.
//!
//! The first digit names the phase that raised the error.

use std::fmt;

/// Error codes for all compiler diagnostics.
///
/// Format: E#### where first digit indicates phase:
/// - E0xxx: Lexer errors
/// - E1xxx: Parser errors
/// - E2xxx: Validation errors
/// - E6xxx: Runtime / eval errors
/// - E9xxx: Internal errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// Invalid character in source
    E0001,
    /// Unterminated string literal
    E0002,
    /// Invalid number literal
    E0003,
    /// Invalid escape sequence
    E0004,
    /// Source text too large to address
    E0005,

    // Parser Errors (E1xxx)
    /// Unexpected token
    E1001,
    /// Expected expression
    E1002,
    /// Unclosed delimiter
    E1003,
    /// Expected identifier
    E1004,
    /// Expected type
    E1005,
    /// Invalid pattern syntax
    E1008,
    /// Statement in a `where` binding
    E1016,
    /// Second `where` clause on one lambda
    E1017,

    // Validation Errors (E2xxx)
    /// Duplicate binding name
    E2001,
    /// Reference not allowed
    E2002,
    /// Statement-level construct in a binding
    E2003,
    /// Duplicate parameter
    E2004,

    // Runtime Errors (E6xxx)
    /// Undefined variable
    E6001,
    /// Type mismatch
    E6002,
    /// Wrong number of arguments
    E6003,
    /// Division or modulo by zero
    E6004,
    /// Integer overflow
    E6005,
    /// Value is not callable
    E6006,
    /// Index out of bounds
    E6007,
    /// Destructuring pattern longer than value
    E6008,
    /// Destructuring a non-sequence value
    E6009,
    /// Call depth limit exceeded
    E6010,
    /// Name bound twice in one call scope
    E6011,
    /// Unsupported operand types
    E6012,

    // Internal Errors (E9xxx)
    /// Internal compiler error
    E9001,
}

impl ErrorCode {
    /// Every code, in numeric order.
    pub const ALL: &'static [ErrorCode] = &[
        ErrorCode::E0001,
        ErrorCode::E0002,
        ErrorCode::E0003,
        ErrorCode::E0004,
        ErrorCode::E0005,
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E1004,
        ErrorCode::E1005,
        ErrorCode::E1008,
        ErrorCode::E1016,
        ErrorCode::E1017,
        ErrorCode::E2001,
        ErrorCode::E2002,
        ErrorCode::E2003,
        ErrorCode::E2004,
        ErrorCode::E6001,
        ErrorCode::E6002,
        ErrorCode::E6003,
        ErrorCode::E6004,
        ErrorCode::E6005,
        ErrorCode::E6006,
        ErrorCode::E6007,
        ErrorCode::E6008,
        ErrorCode::E6009,
        ErrorCode::E6010,
        ErrorCode::E6011,
        ErrorCode::E6012,
        ErrorCode::E9001,
    ];

    /// Get the code as a string (e.g., "E1001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E0004 => "E0004",
            ErrorCode::E0005 => "E0005",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E1008 => "E1008",
            ErrorCode::E1016 => "E1016",
            ErrorCode::E1017 => "E1017",
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E2003 => "E2003",
            ErrorCode::E2004 => "E2004",
            ErrorCode::E6001 => "E6001",
            ErrorCode::E6002 => "E6002",
            ErrorCode::E6003 => "E6003",
            ErrorCode::E6004 => "E6004",
            ErrorCode::E6005 => "E6005",
            ErrorCode::E6006 => "E6006",
            ErrorCode::E6007 => "E6007",
            ErrorCode::E6008 => "E6008",
            ErrorCode::E6009 => "E6009",
            ErrorCode::E6010 => "E6010",
            ErrorCode::E6011 => "E6011",
            ErrorCode::E6012 => "E6012",
            ErrorCode::E9001 => "E9001",
        }
    }

    /// One-line description, used by `tala explain`-style listings.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "invalid character",
            ErrorCode::E0002 => "unterminated string literal",
            ErrorCode::E0003 => "invalid number literal",
            ErrorCode::E0004 => "invalid escape sequence",
            ErrorCode::E0005 => "source file too large",
            ErrorCode::E1001 => "unexpected token",
            ErrorCode::E1002 => "expected expression",
            ErrorCode::E1003 => "unclosed delimiter",
            ErrorCode::E1004 => "expected identifier",
            ErrorCode::E1005 => "expected type",
            ErrorCode::E1008 => "invalid pattern",
            ErrorCode::E1016 => "statement in `where` binding",
            ErrorCode::E1017 => "nested `where` clause",
            ErrorCode::E2001 => "duplicate binding name",
            ErrorCode::E2002 => "reference not allowed",
            ErrorCode::E2003 => "statement-level construct in binding",
            ErrorCode::E2004 => "duplicate parameter",
            ErrorCode::E6001 => "undefined variable",
            ErrorCode::E6002 => "type mismatch",
            ErrorCode::E6003 => "wrong number of arguments",
            ErrorCode::E6004 => "division by zero",
            ErrorCode::E6005 => "integer overflow",
            ErrorCode::E6006 => "value is not callable",
            ErrorCode::E6007 => "index out of bounds",
            ErrorCode::E6008 => "pattern longer than value",
            ErrorCode::E6009 => "expected a list or tuple",
            ErrorCode::E6010 => "call depth limit exceeded",
            ErrorCode::E6011 => "name already bound in this call",
            ErrorCode::E6012 => "unsupported operand types",
            ErrorCode::E9001 => "internal compiler error",
        }
    }

    /// Look up a code from its string form.
    pub fn from_code_str(code: &str) -> Option<ErrorCode> {
        Self::ALL.iter().copied().find(|c| c.as_str() == code)
    }

    pub fn is_lexer_error(&self) -> bool {
        self.as_str().starts_with("E0")
    }

    pub fn is_parser_error(&self) -> bool {
        self.as_str().starts_with("E1")
    }

    pub fn is_check_error(&self) -> bool {
        self.as_str().starts_with("E2")
    }

    pub fn is_eval_error(&self) -> bool {
        self.as_str().starts_with("E6")
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
