//! Mini IR - Token and AST types for the MiniScript interpreter.
//!
//! Pure data shared by the lexer, parser, evaluator, and diagnostics:
//! - `Span`: compact byte-offset source locations
//! - `Token`, `TokenKind`, `TokenList`: the lexer's output
//! - `Program`, `Stmt`, `Expr`: the parse tree
//!
//! This crate has no dependencies and performs no I/O.

mod ast;
mod span;
mod token;

pub use ast::{BinaryOp, CmpOp, Expr, ExprKind, Program, Stmt, StmtKind};
pub use span::Span;
pub use token::{Token, TokenKind, TokenList};
