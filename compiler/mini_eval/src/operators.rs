//! Binary and comparison operator dispatch.
//!
//! The value kind set is fixed, so direct pattern matching is used for
//! exhaustiveness checking. All integer arithmetic is checked; overflow
//! surfaces as a runtime error, never a wrap or a panic.

use mini_ir::{BinaryOp, CmpOp};

use crate::errors::{division_by_zero, integer_overflow, type_mismatch, EvalResult};
use crate::Value;

/// Evaluate an arithmetic operation.
///
/// Both operands must be integers; `/` is floor division.
pub fn evaluate_binary(op: BinaryOp, left: &Value, right: &Value) -> EvalResult {
    let (Value::Int(a), Value::Int(b)) = (left, right) else {
        return Err(type_mismatch(op.symbol(), left, right));
    };
    let (a, b) = (*a, *b);

    match op {
        BinaryOp::Add => a
            .checked_add(b)
            .map(Value::Int)
            .ok_or_else(|| integer_overflow("addition")),
        BinaryOp::Sub => a
            .checked_sub(b)
            .map(Value::Int)
            .ok_or_else(|| integer_overflow("subtraction")),
        BinaryOp::Mul => a
            .checked_mul(b)
            .map(Value::Int)
            .ok_or_else(|| integer_overflow("multiplication")),
        BinaryOp::Div => {
            if b == 0 {
                Err(division_by_zero())
            } else {
                checked_floor_div(a, b)
                    .map(Value::Int)
                    .ok_or_else(|| integer_overflow("division"))
            }
        }
    }
}

/// Evaluate a comparison.
///
/// `>`/`<` require two integers. `==`/`!=` use structural equality
/// between like kinds and are always false/true across kinds — never
/// an error.
pub fn evaluate_comparison(op: CmpOp, left: &Value, right: &Value) -> EvalResult {
    match op {
        CmpOp::Eq => Ok(Value::Bool(left == right)),
        CmpOp::NotEq => Ok(Value::Bool(left != right)),
        CmpOp::Gt | CmpOp::Lt => {
            let (Value::Int(a), Value::Int(b)) = (left, right) else {
                return Err(type_mismatch(op.symbol(), left, right));
            };
            Ok(Value::Bool(match op {
                CmpOp::Gt => a > b,
                _ => a < b,
            }))
        }
    }
}

/// Floor division: truncates toward negative infinity.
///
/// `i64::checked_div` truncates toward zero, so the quotient is
/// adjusted when the remainder is nonzero and the signs differ.
/// Divisor is nonzero here; `None` only on `i64::MIN / -1`.
fn checked_floor_div(a: i64, b: i64) -> Option<i64> {
    let q = a.checked_div(b)?;
    let r = a % b;
    if r != 0 && (r < 0) != (b < 0) {
        q.checked_sub(1)
    } else {
        Some(q)
    }
}
