//! Binary operator implementations for the evaluator.
//!
//! Direct enum-based dispatch over `BinaryOp`. Every operator checks the
//! types of its operands first and fails with an operator-specific error.
//!
//! Assignment, pipe and the list operators need the environment or the
//! ability to call functions, so the interpreter handles them before
//! reaching this table.

use waray_ir::BinaryOp;

use crate::errors::{binary_operands, invalid_repeat_count, EvalError, EvalResult};
use crate::value::{Heap, Value};

/// Longest string `*` may produce, in bytes.
const MAX_REPEAT_LEN: usize = 1 << 29;

/// Evaluate a binary operation on two resolved operands.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Callers hand over freshly resolved operands they no longer need"
)]
pub fn evaluate_binary(left: Value, right: Value, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Add => eval_add(&left, &right),
        BinaryOp::Sub | BinaryOp::Div | BinaryOp::Mod | BinaryOp::Pow => {
            let (a, b) = numbers(&left, &right, op)?;
            Ok(Value::Number(match op {
                BinaryOp::Sub => a - b,
                BinaryOp::Div => a / b,
                BinaryOp::Mod => a % b,
                _ => pow(a, b),
            }))
        }
        BinaryOp::Mul => eval_mul(&left, &right),
        BinaryOp::Lt | BinaryOp::LtEq | BinaryOp::Gt | BinaryOp::GtEq => {
            let (a, b) = numbers(&left, &right, op)?;
            Ok(Value::Bool(match op {
                BinaryOp::Lt => a < b,
                BinaryOp::LtEq => a <= b,
                BinaryOp::Gt => a > b,
                _ => a >= b,
            }))
        }
        BinaryOp::Eq => Ok(Value::Bool(strict_equals(&left, &right))),
        BinaryOp::NotEq => Ok(Value::Bool(!strict_equals(&left, &right))),
        BinaryOp::And | BinaryOp::Or => match (&left, &right) {
            (Value::Bool(a), Value::Bool(b)) => Ok(Value::Bool(if op == BinaryOp::And {
                *a && *b
            } else {
                *a || *b
            })),
            _ => Err(mismatch(&left, &right, op)),
        },
        BinaryOp::Assign | BinaryOp::Pipe | BinaryOp::Map | BinaryOp::Reduce | BinaryOp::Filter => {
            Err(mismatch(&left, &right, op))
        }
    }
}

/// The language's `==`: no type guard, lists and functions by identity,
/// `NaN` unequal to itself.
pub fn strict_equals(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => a == b,
        (Value::Str(a), Value::Str(b)) => **a == **b,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Nil, Value::Nil) => true,
        (Value::List(a), Value::List(b)) => Heap::ptr_eq(a, b),
        (Value::Function(a), Value::Function(b)) => a.ptr_eq(b),
        _ => false,
    }
}

fn eval_add(left: &Value, right: &Value) -> EvalResult {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
        (Value::Str(_), Value::Str(_) | Value::Number(_))
        | (Value::Number(_), Value::Str(_)) => Ok(Value::string(format!("{left}{right}"))),
        _ => Err(mismatch(left, right, BinaryOp::Add)),
    }
}

fn eval_mul(left: &Value, right: &Value) -> EvalResult {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a * b)),
        (Value::Number(count), Value::Str(s)) | (Value::Str(s), Value::Number(count)) => {
            repeat(s, *count).map(Value::string)
        }
        _ => Err(mismatch(left, right, BinaryOp::Mul)),
    }
}

/// Repeat `s` `count` times. The count is truncated toward zero (`NaN`
/// counts as zero); negative and infinite counts are rejected.
fn repeat(s: &str, count: f64) -> Result<String, EvalError> {
    if count.is_nan() {
        return Ok(String::new());
    }
    let times = count.trunc();
    if times < 0.0 || times.is_infinite() {
        return Err(invalid_repeat_count(count));
    }
    if s.is_empty() || times == 0.0 {
        return Ok(String::new());
    }
    if times > (MAX_REPEAT_LEN / s.len()) as f64 {
        return Err(invalid_repeat_count(count));
    }
    Ok(s.repeat(times as usize))
}

/// `powf` except where it disagrees with the language: a `NaN` exponent and
/// `(±1) ** ±Infinity` are both `NaN`.
fn pow(base: f64, exp: f64) -> f64 {
    if exp.is_nan() || (base.abs() == 1.0 && exp.is_infinite()) {
        f64::NAN
    } else {
        base.powf(exp)
    }
}

#[inline]
fn numbers(left: &Value, right: &Value, op: BinaryOp) -> Result<(f64, f64), EvalError> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok((*a, *b)),
        _ => Err(mismatch(left, right, op)),
    }
}

#[cold]
fn mismatch(left: &Value, right: &Value, op: BinaryOp) -> EvalError {
    binary_operands(op, left.type_name(), right.type_name())
}
