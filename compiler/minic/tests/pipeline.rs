// Test code uses unwrap/expect for clarity - panics provide good test failure messages
#![allow(clippy::unwrap_used, clippy::expect_used)]

//! End-to-end pipeline tests through the embedding entry points.
//!
//! Everything here goes through [`minic::analyze`] and
//! [`minic::lex_dump`] the way a host application would, exercising
//! the lexer, parser, evaluator, and renderers together.

use minic::{analyze, lex_dump, Analysis};
use pretty_assertions::assert_eq;

fn analyze_ok(source: &str) -> Analysis {
    let analysis = analyze(source);
    assert_eq!(analysis.error, None, "unexpected error for {source:?}");
    analysis
}

#[test]
fn hello_world() {
    let analysis = analyze_ok(r#"print("hello")"#);
    assert_eq!(analysis.output, "hello\n");
    assert_eq!(
        analysis.parse_tree,
        "program\n  print\n    string \"hello\"\n"
    );
}

#[test]
fn counting_loop() {
    let source = "\
x = 0
while x < 5
    print(x)
    x = x + 1
end
print(\"done\")
";
    let analysis = analyze_ok(source);
    assert_eq!(analysis.output, "0\n1\n2\n3\n4\ndone\n");
}

#[test]
fn foreach_sums_a_list() {
    let source = "\
total = 0
loop n in [10, 20, 30]
    total = total + n
end
print(total)
";
    assert_eq!(analyze_ok(source).output, "60\n");
}

#[test]
fn loop_while_mirrors_while() {
    let a = analyze_ok("x = 3 while x > 0 print(x) x = x - 1 end");
    let b = analyze_ok("x = 3 loop_while x > 0 print(x) x = x - 1 end");
    assert_eq!(a.output, b.output);
}

#[test]
fn analysis_is_idempotent() {
    let source = "x = 2 * 3 + 4 print(x) if x > 5 print(\"big\") end";
    assert_eq!(analyze(source), analyze(source));
}

#[test]
fn runtime_error_keeps_tree_and_prior_output() {
    let analysis = analyze("print(1) x = y print(2)");
    assert!(analysis.parse_tree.starts_with("program\n"));
    assert_eq!(analysis.output, "1\n");
    assert_eq!(analysis.error.as_deref(), Some("undefined variable `y`"));
}

#[test]
fn parse_error_yields_empty_tree_and_output() {
    let analysis = analyze("while x < 3 print(x)");
    assert_eq!(analysis.parse_tree, "");
    assert_eq!(analysis.output, "");
    assert!(analysis.error.is_some());
}

#[test]
fn lex_error_is_positioned() {
    let analysis = analyze("x = 1\ny = @");
    assert_eq!(
        analysis.error.as_deref(),
        Some("error at line 2, column 5: unrecognized character `@`")
    );
}

#[test]
fn oversized_integer_literal_is_positioned() {
    let analysis = analyze("x = 99999999999999999999");
    assert_eq!(analysis.parse_tree, "");
    assert_eq!(
        analysis.error.as_deref(),
        Some("error at line 1, column 5: integer literal out of range")
    );
}

#[test]
fn lex_dump_lists_every_unit_in_order() {
    assert_eq!(
        lex_dump("if x == 10"),
        "keyword: if\nidentifier: x\noperator: ==\ninteger-literal: 10\n"
    );
}

#[test]
fn lex_dump_reports_errors() {
    assert_eq!(
        lex_dump("x = $"),
        "error at line 1, column 5: unrecognized character `$`"
    );
}

#[test]
fn mixed_list_prints_unquoted() {
    let analysis = analyze_ok(r#"xs = [1, "two", true] print(xs)"#);
    assert_eq!(analysis.output, "[1, two, true]\n");
}

#[test]
fn division_truncates_toward_negative_infinity() {
    let analysis = analyze_ok("print(7 / 2) print((0 - 7) / 2)");
    assert_eq!(analysis.output, "3\n-4\n");
}
