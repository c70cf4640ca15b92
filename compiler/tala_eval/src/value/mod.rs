//! Runtime values.

mod heap;
mod lambda;

use std::fmt;

use tala_ir::ParsedType;

use crate::builtins::Builtin;

pub use heap::Heap;
pub use lambda::{Captures, LambdaValue};

/// A Tala runtime value.
///
/// Scalars are stored inline; strings, lists and tuples live behind a
/// shared `Heap` pointer, so cloning a value never copies its contents.
#[derive(Clone, Debug)]
pub enum Value {
    Int(i64),
    Float(f64),
    Bool(bool),
    Str(Heap<String>),
    List(Heap<Vec<Value>>),
    Tuple(Heap<Vec<Value>>),
    Lambda(LambdaValue),
    Builtin(Builtin),
    Void,
}

impl Value {
    // Factory methods: the only way to build heap-backed values.

    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(Heap::new(s.into()))
    }

    #[inline]
    pub fn list(items: Vec<Value>) -> Self {
        Value::List(Heap::new(items))
    }

    #[inline]
    pub fn tuple(items: Vec<Value>) -> Self {
        Value::Tuple(Heap::new(items))
    }

    /// Type name as written in annotations and error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Bool(_) => "bool",
            Value::Str(_) => "str",
            Value::List(_) => "list",
            Value::Tuple(_) => "tuple",
            Value::Lambda(_) | Value::Builtin(_) => "fn",
            Value::Void => "void",
        }
    }

    /// Whether this value satisfies a type annotation.
    pub fn matches(&self, ty: ParsedType) -> bool {
        match ty {
            ParsedType::Any => true,
            ParsedType::Int => matches!(self, Value::Int(_)),
            ParsedType::Float => matches!(self, Value::Float(_)),
            ParsedType::Bool => matches!(self, Value::Bool(_)),
            ParsedType::Str => matches!(self, Value::Str(_)),
            ParsedType::List => matches!(self, Value::List(_)),
            ParsedType::Tuple => matches!(self, Value::Tuple(_)),
            ParsedType::Fn => matches!(self, Value::Lambda(_) | Value::Builtin(_)),
        }
    }

    /// Elements of a list or tuple.
    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) | Value::Tuple(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }

    #[inline]
    pub fn is_void(&self) -> bool {
        matches!(self, Value::Void)
    }

    /// Display form used inside containers: strings are quoted.
    fn fmt_nested(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => write!(f, "{:?}", &**s),
            other => fmt::Display::fmt(other, f),
        }
    }
}

/// Structural equality. Floats compare by IEEE rules, lambdas by identity.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            #[allow(clippy::float_cmp, reason = "language equality on floats is exact")]
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::List(a), Value::List(b)) | (Value::Tuple(a), Value::Tuple(b)) => a == b,
            (Value::Lambda(a), Value::Lambda(b)) => a.same_as(b),
            (Value::Builtin(a), Value::Builtin(b)) => a == b,
            (Value::Void, Value::Void) => true,
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(x) => fmt_float(*x, f),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Str(s) => f.write_str(s),
            Value::List(items) => {
                f.write_str("[")?;
                fmt_items(items, f)?;
                f.write_str("]")
            }
            Value::Tuple(items) => {
                f.write_str("(")?;
                fmt_items(items, f)?;
                if items.len() == 1 {
                    f.write_str(",")?;
                }
                f.write_str(")")
            }
            Value::Lambda(_) => f.write_str("<lambda>"),
            Value::Builtin(b) => write!(f, "<builtin {}>", b.name()),
            Value::Void => f.write_str("void"),
        }
    }
}

fn fmt_items(items: &[Value], f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        item.fmt_nested(f)?;
    }
    Ok(())
}

/// Whole floats keep a fractional digit so they read back as floats.
fn fmt_float(x: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if x.is_finite() && x.fract() == 0.0 && x.abs() < 1e16 {
        write!(f, "{x:.1}")
    } else {
        write!(f, "{x}")
    }
}
