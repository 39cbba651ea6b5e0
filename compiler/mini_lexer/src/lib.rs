//! Mini Lexer - converts MiniScript source text into a `TokenList`.
//!
//! Built on logos. Keywords are `#[token]` literals and therefore win
//! over the identifier regex when both match, which gives the required
//! keyword-before-identifier classification. Whitespace is skipped and
//! never produces a token.
//!
//! Literal conversion happens here: integers are parsed and string
//! quotes are stripped, so later phases never re-parse literal text.

use logos::Logos;
use mini_ir::{Span, Token, TokenKind, TokenList};
use std::fmt;

/// Lexing failure carried through logos.
///
/// `UnrecognizedCharacter` is the default produced for input matching
/// no rule; callbacks produce the other variants.
#[derive(Clone, Debug, Default, PartialEq)]
enum RawLexError {
    #[default]
    UnrecognizedCharacter,
    IntegerOutOfRange,
}

/// Raw token from logos (before conversion to `TokenKind`).
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r\n]+", error = RawLexError)]
enum RawToken {
    // === Keywords ===
    #[token("if")]
    If,
    #[token("end")]
    End,
    #[token("while")]
    While,
    #[token("loop")]
    Loop,
    #[token("in")]
    In,
    #[token("loop_while")]
    LoopWhile,
    #[token("true")]
    True,
    #[token("false")]
    False,
    #[token("print")]
    Print,

    // === Operators ===
    #[token("==")]
    EqEq,
    #[token("!=")]
    NotEq,
    #[token("=")]
    Assign,
    #[token(">")]
    Gt,
    #[token("<")]
    Lt,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,

    // === Punctuation ===
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token(",")]
    Comma,

    // === Literals ===

    // Integer; a digit run is always a valid token, so a value too
    // large for i64 is a range error, not an unmatched character
    #[regex(r"[0-9]+", |lex| {
        lex.slice()
            .parse::<i64>()
            .map_err(|_| RawLexError::IntegerOutOfRange)
    })]
    Int(i64),

    // String literal, no escape processing; quotes stripped here
    #[regex(r#""[^"]*""#, |lex| {
        let s = lex.slice();
        s[1..s.len() - 1].to_owned()
    })]
    Str(String),

    // Identifier
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*", |lex| lex.slice().to_owned())]
    Ident(String),
}

/// What went wrong while lexing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LexErrorKind {
    /// A character matching no token rule.
    UnrecognizedCharacter { ch: char },
    /// A digit run too large for a 64-bit integer.
    IntegerOutOfRange,
}

/// Error halting the lexer, with the location of the offending input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LexError {
    pub kind: LexErrorKind,
    pub span: Span,
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            LexErrorKind::UnrecognizedCharacter { ch } => {
                write!(f, "unrecognized character `{ch}`")
            }
            LexErrorKind::IntegerOutOfRange => write!(f, "integer literal out of range"),
        }
    }
}

impl std::error::Error for LexError {}

/// Lex source text into a `TokenList`.
///
/// Returns the tokens in source order with a trailing `Eof`, or the
/// first `LexError` encountered. Usable standalone (the diagnostics
/// path calls this without ever invoking the parser).
pub fn lex(source: &str) -> Result<TokenList, LexError> {
    let mut result = TokenList::new();
    let mut lexer = RawToken::lexer(source);

    while let Some(raw) = lexer.next() {
        let span = Span::from_range(lexer.span());
        match raw {
            Ok(raw) => result.push(Token::new(convert_token(raw), span)),
            Err(RawLexError::IntegerOutOfRange) => {
                return Err(LexError {
                    kind: LexErrorKind::IntegerOutOfRange,
                    span,
                });
            }
            Err(RawLexError::UnrecognizedCharacter) => {
                let ch = lexer
                    .slice()
                    .chars()
                    .next()
                    .unwrap_or(char::REPLACEMENT_CHARACTER);
                return Err(LexError {
                    kind: LexErrorKind::UnrecognizedCharacter { ch },
                    span,
                });
            }
        }
    }

    let eof_offset = u32::try_from(source.len()).unwrap_or(u32::MAX);
    result.push(Token::new(TokenKind::Eof, Span::point(eof_offset)));

    Ok(result)
}

/// Convert a raw logos token to a `TokenKind`.
fn convert_token(raw: RawToken) -> TokenKind {
    match raw {
        RawToken::If => TokenKind::If,
        RawToken::End => TokenKind::End,
        RawToken::While => TokenKind::While,
        RawToken::Loop => TokenKind::Loop,
        RawToken::In => TokenKind::In,
        RawToken::LoopWhile => TokenKind::LoopWhile,
        RawToken::True => TokenKind::True,
        RawToken::False => TokenKind::False,
        RawToken::Print => TokenKind::Print,
        RawToken::EqEq => TokenKind::EqEq,
        RawToken::NotEq => TokenKind::NotEq,
        RawToken::Assign => TokenKind::Assign,
        RawToken::Gt => TokenKind::Gt,
        RawToken::Lt => TokenKind::Lt,
        RawToken::Plus => TokenKind::Plus,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Star => TokenKind::Star,
        RawToken::Slash => TokenKind::Slash,
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::LBracket => TokenKind::LBracket,
        RawToken::RBracket => TokenKind::RBracket,
        RawToken::Comma => TokenKind::Comma,
        RawToken::Int(n) => TokenKind::Int(n),
        RawToken::Str(s) => TokenKind::Str(s),
        RawToken::Ident(name) => TokenKind::Ident(name),
    }
}
