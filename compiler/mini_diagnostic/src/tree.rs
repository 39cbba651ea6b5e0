//! Structural parse-tree rendering.
//!
//! Produces an indentation-based dump of a parsed program, two spaces
//! per nesting level. The rendering is purely structural: it is never
//! fed back into the pipeline.

use mini_ir::{Expr, ExprKind, Program, Stmt, StmtKind};

const INDENT: &str = "  ";

/// Render a program as an indented tree, one node per line.
pub fn render_program(program: &Program) -> String {
    let mut out = String::from("program\n");
    for stmt in &program.stmts {
        render_stmt(&mut out, stmt, 1);
    }
    out
}

fn push_line(out: &mut String, depth: usize, line: &str) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
    out.push_str(line);
    out.push('\n');
}

fn render_stmt(out: &mut String, stmt: &Stmt, depth: usize) {
    match &stmt.kind {
        StmtKind::Assign { name, value } => {
            push_line(out, depth, &format!("assign `{name}`"));
            render_expr(out, value, depth + 1);
        }
        StmtKind::If { cond, body } => {
            push_line(out, depth, "if");
            render_expr(out, cond, depth + 1);
            render_body(out, body, depth + 1);
        }
        StmtKind::While { cond, body } => {
            push_line(out, depth, "while");
            render_expr(out, cond, depth + 1);
            render_body(out, body, depth + 1);
        }
        StmtKind::ForEach {
            var,
            iterable,
            body,
        } => {
            push_line(out, depth, &format!("loop `{var}` in"));
            render_expr(out, iterable, depth + 1);
            render_body(out, body, depth + 1);
        }
        StmtKind::LoopWhile { cond, body } => {
            push_line(out, depth, "loop_while");
            render_expr(out, cond, depth + 1);
            render_body(out, body, depth + 1);
        }
        StmtKind::Print { value } => {
            push_line(out, depth, "print");
            render_expr(out, value, depth + 1);
        }
    }
}

fn render_body(out: &mut String, body: &[Stmt], depth: usize) {
    push_line(out, depth, "body");
    for stmt in body {
        render_stmt(out, stmt, depth + 1);
    }
}

fn render_expr(out: &mut String, expr: &Expr, depth: usize) {
    match &expr.kind {
        ExprKind::Var(name) => push_line(out, depth, &format!("var `{name}`")),
        ExprKind::Int(n) => push_line(out, depth, &format!("int {n}")),
        ExprKind::Str(s) => push_line(out, depth, &format!("string \"{s}\"")),
        ExprKind::Bool(b) => push_line(out, depth, &format!("bool {b}")),
        ExprKind::List(elements) => {
            push_line(out, depth, "list");
            for element in elements {
                render_expr(out, element, depth + 1);
            }
        }
        ExprKind::Binary { op, left, right } => {
            push_line(out, depth, &format!("binary `{}`", op.symbol()));
            render_expr(out, left, depth + 1);
            render_expr(out, right, depth + 1);
        }
        ExprKind::Condition { op, left, right } => {
            push_line(out, depth, &format!("condition `{}`", op.symbol()));
            render_expr(out, left, depth + 1);
            render_expr(out, right, depth + 1);
        }
    }
}
