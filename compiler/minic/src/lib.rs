//! MiniScript driver: the two embedding entry points plus the CLI
//! command handlers.
//!
//! Hosts that embed the language (an editor pane, a test harness) call
//! [`analyze`] for the full lex → parse → evaluate pipeline and
//! [`lex_dump`] for the token listing on its own. Both take bare
//! source text and return plain strings; neither touches the
//! filesystem or the terminal.

pub mod commands;

use mini_diagnostic::{line_col, render_program, render_tokens};
use mini_eval::evaluate;

/// Everything one analysis pass produces.
///
/// `parse_tree` is empty when lexing or parsing failed; in that case
/// `error` carries the failure description and `output` is empty. On a
/// runtime failure `output` still holds everything printed before the
/// failing statement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Analysis {
    /// Indented structural dump of the parse tree.
    pub parse_tree: String,
    /// Accumulated print output.
    pub output: String,
    /// Description of the lex, parse, or runtime failure, if any.
    pub error: Option<String>,
}

/// Run the full pipeline over `source`.
///
/// Analysis is a pure function of the source text: repeated calls on
/// the same input produce the same result.
pub fn analyze(source: &str) -> Analysis {
    let tokens = match mini_lexer::lex(source) {
        Ok(tokens) => tokens,
        Err(err) => {
            return Analysis {
                parse_tree: String::new(),
                output: String::new(),
                error: Some(describe_at(source, err.span.start, &err.to_string())),
            };
        }
    };
    let program = match mini_parse::parse(&tokens) {
        Ok(program) => program,
        Err(err) => {
            return Analysis {
                parse_tree: String::new(),
                output: String::new(),
                error: Some(describe_at(source, err.span.start, &err.to_string())),
            };
        }
    };
    let parse_tree = render_program(&program);
    let (output, runtime_error) = evaluate(&program);
    Analysis {
        parse_tree,
        output,
        error: runtime_error.map(|err| err.to_string()),
    }
}

/// Tokenize `source` and return the token dump, or a lex-error
/// description.
pub fn lex_dump(source: &str) -> String {
    match mini_lexer::lex(source) {
        Ok(tokens) => render_tokens(source, &tokens),
        Err(err) => describe_at(source, err.span.start, &err.to_string()),
    }
}

/// Prefix a failure description with its source position.
pub(crate) fn describe_at(source: &str, offset: u32, message: &str) -> String {
    let (line, col) = line_col(source, offset);
    format!("error at line {line}, column {col}: {message}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn lex_failure_reports_position() {
        let analysis = analyze("x = 1 %");
        assert_eq!(analysis.parse_tree, "");
        assert_eq!(analysis.output, "");
        assert_eq!(
            analysis.error.as_deref(),
            Some("error at line 1, column 7: unrecognized character `%`")
        );
    }

    #[test]
    fn parse_failure_reports_position() {
        let analysis = analyze("x =");
        assert_eq!(analysis.parse_tree, "");
        assert!(analysis
            .error
            .as_deref()
            .is_some_and(|e| e.starts_with("error at line 1, column 4: expected")));
    }

    #[test]
    fn runtime_failure_keeps_tree_and_partial_output() {
        let analysis = analyze("print(1) print(2 / 0)");
        assert!(analysis.parse_tree.starts_with("program\n"));
        assert_eq!(analysis.output, "1\n");
        assert_eq!(analysis.error.as_deref(), Some("division by zero"));
    }
}
