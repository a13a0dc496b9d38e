use std::fmt;

/// Lexical category of a [`Token`].
///
/// These are the raw kinds the lexer can produce. Resolved predicate kinds
/// (`atom-name`, `residue-number`, ...) are never tokens; the parser turns a
/// keyword plus its value into a [`LeafKind`](crate::ast::LeafKind).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Run of letters and digits containing at least one letter
    ///
    /// # Examples
    /// ```text
    /// atom
    /// CA1
    /// ALA
    /// ```
    Alpha,

    /// Run of digits only
    ///
    /// # Examples
    /// ```text
    /// 12
    /// 007
    /// ```
    Numeric,

    /// Left parenthesis for grouping
    LParen,

    /// Right parenthesis
    RParen,

    /// Logical AND (word, case-insensitive)
    ///
    /// # Examples
    /// ```text
    /// atom CA and chain A
    /// atom CA AND chain A
    /// ```
    And,

    /// Logical OR (word, case-insensitive)
    Or,

    /// Range word `to`
    ///
    /// # Examples
    /// ```text
    /// residue 10 to 20
    /// ```
    Range,

    /// End of input
    Eof,
}

impl TokenKind {
    /// Human-readable name used in diagnostics and the `tokens` listing.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Alpha => "alpha",
            TokenKind::Numeric => "numeric",
            TokenKind::LParen => "left-paren",
            TokenKind::RParen => "right-paren",
            TokenKind::And => "and",
            TokenKind::Or => "or",
            TokenKind::Range => "range",
            TokenKind::Eof => "end-of-input",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One lexical unit together with where it started in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Raw source text, case preserved. Empty for [`TokenKind::Eof`].
    pub text: String,
    /// Zero-based character offset of the first character of the token.
    pub offset: usize,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, offset: usize) -> Self {
        Token {
            kind,
            text: text.into(),
            offset,
        }
    }

    pub fn eof(offset: usize) -> Self {
        Token::new(TokenKind::Eof, "", offset)
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    /// Width of the token in characters, at least 1 so a caret can point at
    /// end of input.
    pub fn width(&self) -> usize {
        self.text.chars().count().max(1)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Eof => write!(f, "end of input"),
            _ => write!(f, "'{}'", self.text),
        }
    }
}
