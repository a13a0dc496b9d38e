//! Token and tree listings for debugging selections

use super::CliError;
use crate::{Lexer, SelectionExpression, TokenKind};

/// One line per token: offset, kind and raw text.
///
/// ```text
/// 0	alpha	atom
/// 5	alpha	CA
/// 7	end-of-input
/// ```
pub fn render_tokens(selection: &str) -> Result<String, CliError> {
    let tokens = Lexer::new(selection)
        .tokenize()
        .map_err(|e| CliError::parse(selection, e.into()))?;

    let mut out = String::new();
    for token in tokens {
        let line = match token.kind {
            TokenKind::Eof => format!("{}\t{}\n", token.offset, token.kind),
            _ => format!("{}\t{}\t{}\n", token.offset, token.kind, token.text),
        };
        out.push_str(&line);
    }
    Ok(out)
}

/// The parsed tree, one node per line, followed by the fully parenthesized
/// reading of the selection.
pub fn render_tree(selection: &str) -> Result<String, CliError> {
    let compiled =
        SelectionExpression::new(selection).map_err(|e| CliError::parse(selection, e))?;
    let root = compiled.root();
    Ok(format!("{}\n{}\n", root.to_tree_string().trim_end(), root))
}
