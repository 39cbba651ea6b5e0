//! Runtime values.

use std::fmt;

/// Runtime value in the MiniScript interpreter.
///
/// Equality is structural and only holds between like kinds; the
/// derived `PartialEq` compares cross-kind values as unequal, which is
/// exactly the language's `==`/`!=` semantics.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// Integer value.
    Int(i64),
    /// String value (no surrounding quotes stored).
    Str(String),
    /// Boolean value.
    Bool(bool),
    /// List of values.
    List(Vec<Value>),
}

impl Value {
    /// Create an integer value.
    #[inline]
    pub fn int(n: i64) -> Self {
        Value::Int(n)
    }

    /// Create a string value.
    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(s.into())
    }

    /// Create a list value.
    #[inline]
    pub fn list(items: Vec<Value>) -> Self {
        Value::List(items)
    }

    /// Kind name for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "integer",
            Value::Str(_) => "string",
            Value::Bool(_) => "boolean",
            Value::List(_) => "list",
        }
    }
}

/// Display rendering used by `print`.
///
/// Integers render as decimal digits, booleans lowercase, strings as
/// their raw characters with no quotes, lists as `[a, b, c]` of their
/// elements' renderings.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Str(s) => f.write_str(s),
            Value::Bool(b) => write!(f, "{b}"),
            Value::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn display_rendering() {
        assert_eq!(Value::int(-7).to_string(), "-7");
        assert_eq!(Value::Bool(true).to_string(), "true");
        assert_eq!(Value::string("hi").to_string(), "hi");
        assert_eq!(
            Value::list(vec![Value::int(1), Value::string("a"), Value::Bool(true)]).to_string(),
            "[1, a, true]"
        );
    }

    #[test]
    fn nested_list_rendering() {
        let v = Value::list(vec![Value::list(vec![Value::int(1)]), Value::int(2)]);
        assert_eq!(v.to_string(), "[[1], 2]");
    }

    #[test]
    fn cross_kind_values_are_unequal() {
        assert_ne!(Value::int(1), Value::string("1"));
        assert_ne!(Value::Bool(true), Value::int(1));
    }

    #[test]
    fn lists_compare_elementwise() {
        let a = Value::list(vec![Value::int(1), Value::int(2)]);
        let b = Value::list(vec![Value::int(1), Value::int(2)]);
        let c = Value::list(vec![Value::int(2), Value::int(1)]);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
