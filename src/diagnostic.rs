//! Caret-style rendering of compile errors.
//!
//! ```text
//! error: unbalanced parenthesis opened at offset 12, found end of input at offset 24 instead of ')'
//!   |
//!   | atom CA and (residue ALA
//!   |             ^
//! ```

use crate::{lexer::Span, parser::ParseError};

const GUTTER: &str = "  | ";

/// Renders `error` with a caret line under the text it blames.
pub fn render(source: &str, error: &ParseError) -> String {
    render_span(source, error.span(), &error.to_string())
}

/// Renders an arbitrary message pointing at `span` within `source`.
///
/// Whitespace in the source is shown as plain spaces so the caret column
/// always equals the character offset. A span past the end of the source
/// points just after the last character.
pub fn render_span(source: &str, span: Span, message: &str) -> String {
    let shown: String = source
        .chars()
        .map(|c| if c.is_whitespace() { ' ' } else { c })
        .collect();
    let end = shown.chars().count();
    let offset = span.offset.min(end);
    let len = span.len.min(end.saturating_sub(offset)).max(1);

    format!(
        "error: {message}\n{gutter}\n{GUTTER}{shown}\n{GUTTER}{pad}{carets}",
        gutter = GUTTER.trim_end(),
        pad = " ".repeat(offset),
        carets = "^".repeat(len),
    )
}
