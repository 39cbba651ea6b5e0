//! Token types produced by the lexer.

use std::fmt;

use crate::Span;

/// A single classified lexical unit.
#[derive(Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.span)
    }
}

/// Token kind.
///
/// Literal values are converted at lex time: integers are parsed and
/// string quotes are stripped, so later phases never re-parse text.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    // === Keywords ===
    If,
    End,
    While,
    Loop,
    In,
    LoopWhile,
    True,
    False,
    Print,

    // === Literals and names ===
    Ident(String),
    Int(i64),
    /// String literal content, quotes already stripped.
    Str(String),

    // === Operators ===
    Plus,
    Minus,
    Star,
    Slash,
    Assign,
    Gt,
    Lt,
    EqEq,
    NotEq,

    // === Punctuation ===
    LParen,
    RParen,
    LBracket,
    RBracket,
    Comma,

    /// End of input. Always the last token in a `TokenList`.
    Eof,
}

impl TokenKind {
    /// Coarse lexical category, used by the token dump.
    pub fn category(&self) -> &'static str {
        match self {
            TokenKind::If
            | TokenKind::End
            | TokenKind::While
            | TokenKind::Loop
            | TokenKind::In
            | TokenKind::LoopWhile
            | TokenKind::True
            | TokenKind::False
            | TokenKind::Print => "keyword",
            TokenKind::Ident(_) => "identifier",
            TokenKind::Int(_) => "integer-literal",
            TokenKind::Str(_) => "string-literal",
            TokenKind::Plus
            | TokenKind::Minus
            | TokenKind::Star
            | TokenKind::Slash
            | TokenKind::Assign
            | TokenKind::Gt
            | TokenKind::Lt
            | TokenKind::EqEq
            | TokenKind::NotEq => "operator",
            TokenKind::LParen
            | TokenKind::RParen
            | TokenKind::LBracket
            | TokenKind::RBracket
            | TokenKind::Comma => "punctuation",
            TokenKind::Eof => "eof",
        }
    }

    /// Check if this is the end-of-input marker.
    #[inline]
    pub fn is_eof(&self) -> bool {
        matches!(self, TokenKind::Eof)
    }
}

/// Human-readable token rendering for error messages.
impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::If => write!(f, "`if`"),
            TokenKind::End => write!(f, "`end`"),
            TokenKind::While => write!(f, "`while`"),
            TokenKind::Loop => write!(f, "`loop`"),
            TokenKind::In => write!(f, "`in`"),
            TokenKind::LoopWhile => write!(f, "`loop_while`"),
            TokenKind::True => write!(f, "`true`"),
            TokenKind::False => write!(f, "`false`"),
            TokenKind::Print => write!(f, "`print`"),
            TokenKind::Ident(name) => write!(f, "identifier `{name}`"),
            TokenKind::Int(n) => write!(f, "integer `{n}`"),
            TokenKind::Str(s) => write!(f, "string \"{s}\""),
            TokenKind::Plus => write!(f, "`+`"),
            TokenKind::Minus => write!(f, "`-`"),
            TokenKind::Star => write!(f, "`*`"),
            TokenKind::Slash => write!(f, "`/`"),
            TokenKind::Assign => write!(f, "`=`"),
            TokenKind::Gt => write!(f, "`>`"),
            TokenKind::Lt => write!(f, "`<`"),
            TokenKind::EqEq => write!(f, "`==`"),
            TokenKind::NotEq => write!(f, "`!=`"),
            TokenKind::LParen => write!(f, "`(`"),
            TokenKind::RParen => write!(f, "`)`"),
            TokenKind::LBracket => write!(f, "`[`"),
            TokenKind::RBracket => write!(f, "`]`"),
            TokenKind::Comma => write!(f, "`,`"),
            TokenKind::Eof => write!(f, "end of input"),
        }
    }
}

/// Ordered token sequence, terminated with a single `Eof` token.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    pub fn new() -> Self {
        TokenList { tokens: Vec::new() }
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }
}

impl std::ops::Index<usize> for TokenList {
    type Output = Token;

    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
