//! Parse error type.

use mini_ir::{Span, Token, TokenKind};
use std::fmt;

/// Grammar violation: the parser needed one thing and found another.
#[derive(Clone, Debug, PartialEq)]
pub struct ParseError {
    /// What the grammar required at this point.
    pub expected: &'static str,
    /// The token actually found.
    pub found: TokenKind,
    /// Location of the found token.
    pub span: Span,
}

impl ParseError {
    /// Create a parse error at the given token.
    #[cold]
    pub fn new(expected: &'static str, found: &Token) -> Self {
        ParseError {
            expected,
            found: found.kind.clone(),
            span: found.span,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expected {}, found {}", self.expected, self.found)
    }
}

impl std::error::Error for ParseError {}
