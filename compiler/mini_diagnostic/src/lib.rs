//! Inspection-side rendering for MiniScript.
//!
//! This crate turns the pipeline's intermediate artifacts into
//! human-readable text: the token stream as a `category: text` listing
//! and the parse tree as an indented structural dump. Rendering never
//! executes anything; it sits beside the evaluator, not in front of
//! it.
//!
//! [`line_col`] supports error reporting by mapping byte offsets back
//! to 1-based line and column positions.

mod source;
mod tokens;
mod tree;

pub use source::line_col;
pub use tokens::render_tokens;
pub use tree::render_program;
