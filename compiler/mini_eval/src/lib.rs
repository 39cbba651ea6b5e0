//! Tree-walking evaluator for MiniScript.
//!
//! Programs execute statement by statement over a single flat, mutable
//! environment. There is no scoping: a binding made anywhere — top
//! level, a loop body, an `if` body — is visible everywhere and
//! persists until overwritten.
//!
//! The public entry point is [`evaluate`], which runs a parsed
//! [`Program`](mini_ir::Program) with a buffering print handler and
//! returns the captured output alongside the runtime error that
//! stopped execution, if any. [`Interpreter`] is the lower-level
//! driver for callers that want to choose their own [`PrintHandler`].

mod environment;
mod errors;
mod interpreter;
mod operators;
mod print_handler;
mod value;

pub use environment::Environment;
pub use errors::{
    condition_not_bool, division_by_zero, integer_overflow, type_mismatch, undefined_variable,
    EvalError, EvalErrorKind, EvalResult,
};
pub use interpreter::{evaluate, Interpreter};
pub use operators::{evaluate_binary, evaluate_comparison};
pub use print_handler::{BufferPrintHandler, PrintHandler};
pub use value::Value;
