//! Binary and unary operators on evaluated operands.
//!
//! No implicit conversions: arithmetic needs two ints or two floats.

use std::cmp::Ordering;

use tala_ir::{BinaryOp, Span, UnaryOp};

use crate::errors::{self, EvalResult};
use crate::Value;

/// Apply a non-short-circuiting binary operator.
pub(super) fn eval_binary(op: BinaryOp, left: &Value, right: &Value, span: Span) -> EvalResult {
    match op {
        BinaryOp::Eq => return Ok(Value::Bool(left == right)),
        BinaryOp::NotEq => return Ok(Value::Bool(left != right)),
        BinaryOp::Lt | BinaryOp::LtEq | BinaryOp::Gt | BinaryOp::GtEq => {
            return compare(op, left, right, span)
        }
        _ => {}
    }

    match (left, right) {
        (Value::Int(a), Value::Int(b)) => int_arith(op, *a, *b, span),
        (Value::Float(a), Value::Float(b)) => float_arith(op, *a, *b, span),
        (Value::Str(a), Value::Str(b)) if op == BinaryOp::Add => {
            let mut joined = String::with_capacity(a.len() + b.len());
            joined.push_str(a);
            joined.push_str(b);
            Ok(Value::string(joined))
        }
        (Value::List(a), Value::List(b)) if op == BinaryOp::Add => {
            Ok(Value::list(a.iter().chain(b.iter()).cloned().collect()))
        }
        _ => Err(invalid(op, left, right, span)),
    }
}

fn int_arith(op: BinaryOp, a: i64, b: i64, span: Span) -> EvalResult {
    let result = match op {
        BinaryOp::Add => a.checked_add(b).ok_or("addition"),
        BinaryOp::Sub => a.checked_sub(b).ok_or("subtraction"),
        BinaryOp::Mul => a.checked_mul(b).ok_or("multiplication"),
        BinaryOp::Div => {
            if b == 0 {
                return Err(errors::division_by_zero(span));
            }
            a.checked_div(b).ok_or("division")
        }
        BinaryOp::Mod => {
            if b == 0 {
                return Err(errors::modulo_by_zero(span));
            }
            a.checked_rem(b).ok_or("modulo")
        }
        _ => return Err(invalid(op, &Value::Int(a), &Value::Int(b), span)),
    };
    result
        .map(Value::Int)
        .map_err(|operation| errors::integer_overflow(operation, span))
}

fn float_arith(op: BinaryOp, a: f64, b: f64, span: Span) -> EvalResult {
    let result = match op {
        BinaryOp::Add => a + b,
        BinaryOp::Sub => a - b,
        BinaryOp::Mul => a * b,
        BinaryOp::Div if b == 0.0 => return Err(errors::division_by_zero(span)),
        BinaryOp::Div => a / b,
        BinaryOp::Mod if b == 0.0 => return Err(errors::modulo_by_zero(span)),
        BinaryOp::Mod => a % b,
        _ => return Err(invalid(op, &Value::Float(a), &Value::Float(b), span)),
    };
    Ok(Value::Float(result))
}

fn compare(op: BinaryOp, left: &Value, right: &Value, span: Span) -> EvalResult {
    let ordering = match (left, right) {
        (Value::Int(a), Value::Int(b)) => Some(a.cmp(b)),
        (Value::Float(a), Value::Float(b)) => a.partial_cmp(b),
        (Value::Str(a), Value::Str(b)) => Some(a.as_str().cmp(b.as_str())),
        _ => return Err(invalid(op, left, right, span)),
    };
    // NaN compares false both ways.
    let Some(ordering) = ordering else {
        return Ok(Value::Bool(false));
    };
    let holds = match op {
        BinaryOp::Lt => ordering == Ordering::Less,
        BinaryOp::LtEq => ordering != Ordering::Greater,
        BinaryOp::Gt => ordering == Ordering::Greater,
        BinaryOp::GtEq => ordering != Ordering::Less,
        _ => return Err(invalid(op, left, right, span)),
    };
    Ok(Value::Bool(holds))
}

pub(super) fn eval_unary(op: UnaryOp, operand: &Value, span: Span) -> EvalResult {
    match (op, operand) {
        (UnaryOp::Neg, Value::Int(n)) => n
            .checked_neg()
            .map(Value::Int)
            .ok_or_else(|| errors::integer_overflow("negation", span)),
        (UnaryOp::Neg, Value::Float(x)) => Ok(Value::Float(-x)),
        (UnaryOp::Not, Value::Bool(b)) => Ok(Value::Bool(!b)),
        _ => Err(errors::invalid_operand(
            op.as_symbol(),
            operand.type_name(),
            span,
        )),
    }
}

#[cold]
fn invalid(op: BinaryOp, left: &Value, right: &Value, span: Span) -> errors::EvalError {
    errors::invalid_operands(op.as_symbol(), left.type_name(), right.type_name(), span)
}
