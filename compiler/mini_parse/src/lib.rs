//! Mini Parse - grammar-driven parser for MiniScript.
//!
//! Deterministic single-pass recursive descent with one token of
//! lookahead; no backtracking. Grammar:
//!
//! ```text
//! program      := statement+
//! statement    := assignment | if_stmt | while_stmt | foreach_stmt
//!               | loopwhile_stmt | print_stmt
//! assignment   := NAME "=" expr
//! if_stmt      := "if" condition block "end"
//! while_stmt   := "while" condition block "end"
//! foreach_stmt := "loop" NAME "in" expr block "end"
//! loopwhile_stmt := "loop_while" condition block "end"
//! print_stmt   := "print" "(" expr ")"
//! block        := statement+
//! condition    := expr (">" | "<" | "==" | "!=") expr
//! expr         := expr ("+"|"-") term | term
//! term         := term ("*"|"/") factor | factor
//! factor       := NAME | STRING | NUMBER | boolean | list | "(" expr ")"
//! list         := "[" [expr ("," expr)*] "]"
//! ```
//!
//! The whole token stream must be consumed; a leftover token is a
//! `ParseError`, never silently skipped.

mod error;

pub use error::ParseError;

use mini_ir::{
    BinaryOp, CmpOp, Expr, ExprKind, Program, Span, Stmt, StmtKind, Token, TokenKind, TokenList,
};
use tracing::{debug, trace};

/// Parse a token stream into a `Program`.
pub fn parse(tokens: &TokenList) -> Result<Program, ParseError> {
    debug!(token_count = tokens.len(), "parse start");
    Parser::new(tokens).parse_program()
}

/// Recursive-descent parser over a `TokenList`.
struct Parser<'a> {
    tokens: &'a TokenList,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a TokenList) -> Self {
        Parser { tokens, pos: 0 }
    }

    // === Cursor ===

    /// Current token. Lexed token lists always end with `Eof`;
    /// a hand-built list may not, so the cursor falls back to a
    /// synthetic `Eof` rather than running off the end.
    fn current(&self) -> &'a Token {
        static EOF: Token = Token {
            kind: TokenKind::Eof,
            span: Span::DUMMY,
        };
        self.tokens.get(self.pos).unwrap_or(&EOF)
    }

    fn current_kind(&self) -> &'a TokenKind {
        &self.current().kind
    }

    fn current_span(&self) -> Span {
        self.current().span
    }

    fn advance(&mut self) -> &'a Token {
        let token = self.current();
        if !token.kind.is_eof() {
            self.pos += 1;
        }
        token
    }

    fn check(&self, kind: &TokenKind) -> bool {
        self.current_kind() == kind
    }

    /// Consume a specific payload-free token or fail.
    fn expect(&mut self, kind: &TokenKind, expected: &'static str) -> Result<Span, ParseError> {
        if self.check(kind) {
            Ok(self.advance().span)
        } else {
            Err(ParseError::new(expected, self.current()))
        }
    }

    /// Consume an identifier and return its name.
    fn expect_ident(&mut self, expected: &'static str) -> Result<(String, Span), ParseError> {
        match self.current_kind() {
            TokenKind::Ident(name) => {
                let name = name.clone();
                let span = self.advance().span;
                Ok((name, span))
            }
            _ => Err(ParseError::new(expected, self.current())),
        }
    }

    // === Grammar: program and statements ===

    fn parse_program(mut self) -> Result<Program, ParseError> {
        let mut stmts = Vec::new();
        while !self.current_kind().is_eof() {
            stmts.push(self.parse_stmt()?);
        }
        if stmts.is_empty() {
            // program := statement+
            return Err(ParseError::new("a statement", self.current()));
        }
        Ok(Program { stmts })
    }

    fn parse_stmt(&mut self) -> Result<Stmt, ParseError> {
        trace!(token = %self.current_kind(), "parse_stmt");
        match self.current_kind() {
            TokenKind::Ident(_) => self.parse_assignment(),
            TokenKind::If => self.parse_if(),
            TokenKind::While => self.parse_while(),
            TokenKind::Loop => self.parse_foreach(),
            TokenKind::LoopWhile => self.parse_loop_while(),
            TokenKind::Print => self.parse_print(),
            _ => Err(ParseError::new("a statement", self.current())),
        }
    }

    /// `NAME "=" expr`
    fn parse_assignment(&mut self) -> Result<Stmt, ParseError> {
        let (name, start) = self.expect_ident("a variable name")?;
        self.expect(&TokenKind::Assign, "`=`")?;
        let value = self.parse_expr()?;
        let span = start.merge(value.span);
        Ok(Stmt::new(StmtKind::Assign { name, value }, span))
    }

    /// `"if" condition block "end"`
    fn parse_if(&mut self) -> Result<Stmt, ParseError> {
        let start = self.advance().span;
        let cond = self.parse_condition()?;
        let body = self.parse_block()?;
        let end = self.expect(&TokenKind::End, "`end`")?;
        Ok(Stmt::new(StmtKind::If { cond, body }, start.merge(end)))
    }

    /// `"while" condition block "end"`
    fn parse_while(&mut self) -> Result<Stmt, ParseError> {
        let start = self.advance().span;
        let cond = self.parse_condition()?;
        let body = self.parse_block()?;
        let end = self.expect(&TokenKind::End, "`end`")?;
        Ok(Stmt::new(StmtKind::While { cond, body }, start.merge(end)))
    }

    /// `"loop" NAME "in" expr block "end"`
    fn parse_foreach(&mut self) -> Result<Stmt, ParseError> {
        let start = self.advance().span;
        let (var, _) = self.expect_ident("a loop variable")?;
        self.expect(&TokenKind::In, "`in`")?;
        let iterable = self.parse_expr()?;
        let body = self.parse_block()?;
        let end = self.expect(&TokenKind::End, "`end`")?;
        Ok(Stmt::new(
            StmtKind::ForEach {
                var,
                iterable,
                body,
            },
            start.merge(end),
        ))
    }

    /// `"loop_while" condition block "end"`
    fn parse_loop_while(&mut self) -> Result<Stmt, ParseError> {
        let start = self.advance().span;
        let cond = self.parse_condition()?;
        let body = self.parse_block()?;
        let end = self.expect(&TokenKind::End, "`end`")?;
        Ok(Stmt::new(
            StmtKind::LoopWhile { cond, body },
            start.merge(end),
        ))
    }

    /// `"print" "(" expr ")"`
    fn parse_print(&mut self) -> Result<Stmt, ParseError> {
        let start = self.advance().span;
        self.expect(&TokenKind::LParen, "`(`")?;
        let value = self.parse_expr()?;
        let end = self.expect(&TokenKind::RParen, "`)`")?;
        Ok(Stmt::new(StmtKind::Print { value }, start.merge(end)))
    }

    /// `statement+` terminated by `end` (which is left unconsumed).
    fn parse_block(&mut self) -> Result<Vec<Stmt>, ParseError> {
        let mut stmts = Vec::new();
        while !self.check(&TokenKind::End) && !self.current_kind().is_eof() {
            stmts.push(self.parse_stmt()?);
        }
        if stmts.is_empty() {
            // block := statement+
            return Err(ParseError::new("a statement", self.current()));
        }
        Ok(stmts)
    }

    // === Grammar: conditions and expressions ===

    /// `expr comparator expr` — always yields a boolean at runtime.
    fn parse_condition(&mut self) -> Result<Expr, ParseError> {
        let left = self.parse_expr()?;
        let Some(op) = self.match_cmp_op() else {
            return Err(ParseError::new("a comparison operator", self.current()));
        };
        self.advance();
        let right = self.parse_expr()?;
        let span = left.span.merge(right.span);
        Ok(Expr::new(
            ExprKind::Condition {
                op,
                left: Box::new(left),
                right: Box::new(right),
            },
            span,
        ))
    }

    /// `expr := expr ("+"|"-") term | term`, left-associative.
    fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        let mut lhs = self.parse_term()?;
        while let Some(op) = self.match_additive_op() {
            self.advance();
            let rhs = self.parse_term()?;
            let span = lhs.span.merge(rhs.span);
            lhs = Expr::new(
                ExprKind::Binary {
                    op,
                    left: Box::new(lhs),
                    right: Box::new(rhs),
                },
                span,
            );
        }
        Ok(lhs)
    }

    /// `term := term ("*"|"/") factor | factor`, left-associative.
    fn parse_term(&mut self) -> Result<Expr, ParseError> {
        let mut lhs = self.parse_factor()?;
        while let Some(op) = self.match_multiplicative_op() {
            self.advance();
            let rhs = self.parse_factor()?;
            let span = lhs.span.merge(rhs.span);
            lhs = Expr::new(
                ExprKind::Binary {
                    op,
                    left: Box::new(lhs),
                    right: Box::new(rhs),
                },
                span,
            );
        }
        Ok(lhs)
    }

    /// `factor := NAME | STRING | NUMBER | boolean | list | "(" expr ")"`
    fn parse_factor(&mut self) -> Result<Expr, ParseError> {
        let span = self.current_span();
        match self.current_kind() {
            TokenKind::Ident(name) => {
                let name = name.clone();
                self.advance();
                Ok(Expr::new(ExprKind::Var(name), span))
            }
            TokenKind::Int(n) => {
                let n = *n;
                self.advance();
                Ok(Expr::new(ExprKind::Int(n), span))
            }
            TokenKind::Str(s) => {
                let s = s.clone();
                self.advance();
                Ok(Expr::new(ExprKind::Str(s), span))
            }
            TokenKind::True => {
                self.advance();
                Ok(Expr::new(ExprKind::Bool(true), span))
            }
            TokenKind::False => {
                self.advance();
                Ok(Expr::new(ExprKind::Bool(false), span))
            }
            TokenKind::LBracket => self.parse_list(),
            TokenKind::LParen => {
                let start = self.advance().span;
                let inner = self.parse_expr()?;
                let end = self.expect(&TokenKind::RParen, "`)`")?;
                // Parentheses only group; the node keeps the full span.
                Ok(Expr::new(inner.kind, start.merge(end)))
            }
            _ => Err(ParseError::new("an expression", self.current())),
        }
    }

    /// `list := "[" [expr ("," expr)*] "]"`
    fn parse_list(&mut self) -> Result<Expr, ParseError> {
        let start = self.advance().span;
        let mut elements = Vec::new();
        if !self.check(&TokenKind::RBracket) {
            elements.push(self.parse_expr()?);
            while self.check(&TokenKind::Comma) {
                self.advance();
                elements.push(self.parse_expr()?);
            }
        }
        let end = self.expect(&TokenKind::RBracket, "`]` or `,`")?;
        Ok(Expr::new(ExprKind::List(elements), start.merge(end)))
    }

    // === Operator matching helpers ===

    fn match_additive_op(&self) -> Option<BinaryOp> {
        match self.current_kind() {
            TokenKind::Plus => Some(BinaryOp::Add),
            TokenKind::Minus => Some(BinaryOp::Sub),
            _ => None,
        }
    }

    fn match_multiplicative_op(&self) -> Option<BinaryOp> {
        match self.current_kind() {
            TokenKind::Star => Some(BinaryOp::Mul),
            TokenKind::Slash => Some(BinaryOp::Div),
            _ => None,
        }
    }

    fn match_cmp_op(&self) -> Option<CmpOp> {
        match self.current_kind() {
            TokenKind::Gt => Some(CmpOp::Gt),
            TokenKind::Lt => Some(CmpOp::Lt),
            TokenKind::EqEq => Some(CmpOp::Eq),
            TokenKind::NotEq => Some(CmpOp::NotEq),
            _ => None,
        }
    }
}
