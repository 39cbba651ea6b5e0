//! Runtime error types and factory functions.
//!
//! Factory functions are the construction API; call sites never build
//! `EvalError` by hand, which keeps message wording in one place.

use std::fmt;

use crate::Value;

/// Result of evaluation.
pub type EvalResult = Result<Value, EvalError>;

/// Typed runtime error category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    /// A name was read before its first assignment.
    UndefinedVariable { name: String },
    /// Operand kind mismatch on arithmetic or ordering comparison.
    TypeMismatch {
        op: &'static str,
        left: &'static str,
        right: &'static str,
    },
    /// A loop/if condition produced a non-boolean value.
    ConditionNotBool { found: &'static str },
    /// Division by zero.
    DivisionByZero,
    /// Checked `i64` arithmetic overflowed.
    IntegerOverflow { op: &'static str },
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UndefinedVariable { name } => write!(f, "undefined variable `{name}`"),
            Self::TypeMismatch { op, left, right } => {
                write!(f, "cannot apply `{op}` to {left} and {right}")
            }
            Self::ConditionNotBool { found } => {
                write!(f, "condition evaluated to {found}, not a boolean")
            }
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::IntegerOverflow { op } => write!(f, "integer overflow in {op}"),
        }
    }
}

/// Runtime error that aborts evaluation at the point of failure.
///
/// Print output produced before the failure is preserved by the
/// interpreter; see `evaluate`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalError {
    pub kind: EvalErrorKind,
}

impl EvalError {
    pub fn new(kind: EvalErrorKind) -> Self {
        EvalError { kind }
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.kind.fmt(f)
    }
}

impl std::error::Error for EvalError {}

// Factory functions

/// Name was never assigned.
#[cold]
pub fn undefined_variable(name: impl Into<String>) -> EvalError {
    EvalError::new(EvalErrorKind::UndefinedVariable { name: name.into() })
}

/// Operand kinds don't fit the operator.
#[cold]
pub fn type_mismatch(op: &'static str, left: &Value, right: &Value) -> EvalError {
    EvalError::new(EvalErrorKind::TypeMismatch {
        op,
        left: left.type_name(),
        right: right.type_name(),
    })
}

/// Condition expression did not yield a boolean.
#[cold]
pub fn condition_not_bool(found: &Value) -> EvalError {
    EvalError::new(EvalErrorKind::ConditionNotBool {
        found: found.type_name(),
    })
}

/// Division by zero.
#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::new(EvalErrorKind::DivisionByZero)
}

/// Checked arithmetic overflowed.
#[cold]
pub fn integer_overflow(op: &'static str) -> EvalError {
    EvalError::new(EvalErrorKind::IntegerOverflow { op })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn error_messages() {
        assert_eq!(
            undefined_variable("x").to_string(),
            "undefined variable `x`"
        );
        assert_eq!(division_by_zero().to_string(), "division by zero");
        assert_eq!(
            type_mismatch("+", &Value::int(1), &Value::string("a")).to_string(),
            "cannot apply `+` to integer and string"
        );
    }
}
