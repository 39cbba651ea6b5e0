//! Parse tree types.
//!
//! A tagged-variant tree of statements and expressions. Nodes are
//! immutable once built; the evaluator and the tree dump both walk
//! this structure without modifying it.

use std::fmt;

use crate::Span;

/// A complete parsed program: one or more statements.
#[derive(Clone, Debug, PartialEq)]
pub struct Program {
    pub stmts: Vec<Stmt>,
}

/// Statement node.
#[derive(Clone, PartialEq)]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
}

impl Stmt {
    pub fn new(kind: StmtKind, span: Span) -> Self {
        Stmt { kind, span }
    }
}

impl fmt::Debug for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.span)
    }
}

/// Statement variants.
///
/// `body` sequences are always non-empty (`block := statement+`).
#[derive(Clone, Debug, PartialEq)]
pub enum StmtKind {
    /// `name = expr`
    Assign { name: String, value: Expr },

    /// `if condition block end` (no else branch in the language)
    If { cond: Expr, body: Vec<Stmt> },

    /// `while condition block end`
    While { cond: Expr, body: Vec<Stmt> },

    /// `loop var in expr block end`
    ForEach {
        var: String,
        iterable: Expr,
        body: Vec<Stmt>,
    },

    /// `loop_while condition block end` — same semantics as `While`,
    /// kept distinct as a surface form.
    LoopWhile { cond: Expr, body: Vec<Stmt> },

    /// `print ( expr )`
    Print { value: Expr },
}

/// Expression node.
#[derive(Clone, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.span)
    }
}

/// Expression variants.
#[derive(Clone, Debug, PartialEq)]
pub enum ExprKind {
    /// Variable reference.
    Var(String),

    /// Integer literal, already parsed.
    Int(i64),

    /// String literal, quotes already stripped.
    Str(String),

    /// Boolean literal: `true` / `false`.
    Bool(bool),

    /// List literal: `[a, b, c]` (possibly empty).
    List(Vec<Expr>),

    /// Arithmetic: `left op right`.
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },

    /// Comparison: `left op right`. Only appears in `if`/`while`/
    /// `loop_while` headers; always evaluates to a boolean.
    Condition {
        op: CmpOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
}

/// Arithmetic operators.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    /// Floor division (truncates toward negative infinity).
    Div,
}

impl BinaryOp {
    /// Source-level symbol.
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Comparison operators.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CmpOp {
    Gt,
    Lt,
    Eq,
    NotEq,
}

impl CmpOp {
    /// Source-level symbol.
    pub fn symbol(self) -> &'static str {
        match self {
            CmpOp::Gt => ">",
            CmpOp::Lt => "<",
            CmpOp::Eq => "==",
            CmpOp::NotEq => "!=",
        }
    }
}

impl fmt::Display for CmpOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn operator_symbols() {
        assert_eq!(BinaryOp::Div.symbol(), "/");
        assert_eq!(CmpOp::NotEq.symbol(), "!=");
        assert_eq!(BinaryOp::Add.to_string(), "+");
    }

    #[test]
    fn expr_debug_includes_span() {
        let e = Expr::new(ExprKind::Int(7), Span::new(0, 1));
        assert_eq!(format!("{e:?}"), "Int(7) @ 0..1");
    }
}
