//! Token stream rendering.

use mini_ir::TokenList;

/// Render a token stream as one `category: text` line per token.
///
/// `text` is the token's source slice, so string literals keep their
/// quotes here even though the token itself stores the unquoted value.
/// The trailing end-of-input marker is not rendered.
pub fn render_tokens(source: &str, tokens: &TokenList) -> String {
    let mut out = String::new();
    for token in tokens {
        if token.kind.is_eof() {
            break;
        }
        out.push_str(token.kind.category());
        out.push_str(": ");
        out.push_str(token.span.slice(source));
        out.push('\n');
    }
    out
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn render(source: &str) -> String {
        render_tokens(source, &mini_lexer::lex(source).unwrap())
    }

    #[test]
    fn one_line_per_token() {
        assert_eq!(
            render("x = 42"),
            "identifier: x\noperator: =\ninteger-literal: 42\n"
        );
    }

    #[test]
    fn string_literal_keeps_source_quotes() {
        assert_eq!(render(r#"print("hi")"#),
            "keyword: print\npunctuation: (\nstring-literal: \"hi\"\npunctuation: )\n");
    }

    #[test]
    fn eof_is_not_rendered() {
        assert_eq!(render(""), "");
    }

    #[test]
    fn compound_operators_render_whole() {
        assert_eq!(render("a != b"), "identifier: a\noperator: !=\nidentifier: b\n");
    }
}
