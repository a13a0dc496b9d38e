use std::mem;

use thiserror::Error;

use crate::{
    ast::{Keyword, LogicalOp, Node, Predicate, Token, TokenKind},
    lexer::{LexError, Lexer, Span},
};

/// Errors raised while turning a selection into a tree.
///
/// Every variant knows the span of source text it blames, see
/// [`ParseError::span`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error(transparent)]
    Lex(#[from] LexError),

    /// Word in keyword position that is not `atom`, `residue` or `chain`
    #[error("unknown keyword '{keyword}' at offset {offset}")]
    UnknownKeyword { keyword: String, offset: usize },

    /// Keyword followed by a value of the wrong kind, e.g. `chain 12`
    #[error("unknown keyword/value combination '{keyword} {value}' at offset {offset}")]
    InvalidValue {
        keyword: Keyword,
        value: String,
        offset: usize,
    },

    /// Keyword not followed by a name or number
    #[error("expected a value after '{keyword}', found {found} at offset {offset}")]
    MissingValue {
        keyword: String,
        found: String,
        offset: usize,
        len: usize,
    },

    /// Position where a selection must start holds something else
    #[error("expected 'atom', 'residue', 'chain' or '(', found {found} at offset {offset}")]
    ExpectedSelection {
        found: String,
        offset: usize,
        len: usize,
    },

    /// `(` never closed; blames the opening parenthesis, `found_offset` is
    /// where the `)` was expected
    #[error(
        "unbalanced parenthesis opened at offset {open_offset}, found {found} at offset {found_offset} instead of ')'"
    )]
    UnbalancedParenthesis {
        open_offset: usize,
        found: String,
        found_offset: usize,
    },

    /// Tokens left over after a complete selection
    #[error("unexpected token {found} at offset {offset}")]
    UnexpectedToken {
        found: String,
        offset: usize,
        len: usize,
    },

    /// Atom position or range bound too large to represent
    #[error("number {value} at offset {offset} is out of range")]
    NumberOutOfRange { value: String, offset: usize },

    /// `residue a to b` with `a > b`
    #[error("empty residue range {start} to {end} at offset {offset}")]
    InvalidRange {
        start: i64,
        end: i64,
        offset: usize,
        len: usize,
    },
}

impl ParseError {
    /// Source text blamed by this error.
    pub fn span(&self) -> Span {
        match self {
            ParseError::Lex(e) => e.span(),
            ParseError::UnknownKeyword { keyword, offset } => {
                Span::new(*offset, keyword.chars().count())
            }
            ParseError::InvalidValue { value, offset, .. }
            | ParseError::NumberOutOfRange { value, offset } => {
                Span::new(*offset, value.chars().count())
            }
            ParseError::MissingValue { offset, len, .. }
            | ParseError::ExpectedSelection { offset, len, .. }
            | ParseError::UnexpectedToken { offset, len, .. }
            | ParseError::InvalidRange { offset, len, .. } => Span::new(*offset, *len),
            ParseError::UnbalancedParenthesis { open_offset, .. } => Span::new(*open_offset, 1),
        }
    }

    pub fn offset(&self) -> usize {
        self.span().offset
    }
}

/// Recursive-descent parser over the token stream of one selection.
///
/// ```text
/// expression := factor ( (and | or) factor )*
/// factor     := keyword value
///             | "residue" numeric "to" numeric
///             | '(' expression ')'
/// ```
pub struct Parser {
    lexer: Lexer,
    current_token: Token,
}

impl Parser {
    pub fn new(mut lexer: Lexer) -> Result<Self, ParseError> {
        let current_token = lexer.next_token()?;
        Ok(Parser {
            lexer,
            current_token,
        })
    }

    fn advance(&mut self) -> Result<Token, ParseError> {
        let next = self.lexer.next_token()?;
        Ok(mem::replace(&mut self.current_token, next))
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.current_token.is(kind)
    }

    /// Parses a whole selection and requires the input to end right after it.
    pub fn parse(&mut self) -> Result<Node, ParseError> {
        let node = self.parse_expression()?;
        if !self.check(TokenKind::Eof) {
            return Err(ParseError::UnexpectedToken {
                found: self.current_token.to_string(),
                offset: self.current_token.offset,
                len: self.current_token.width(),
            });
        }
        Ok(node)
    }

    /// `and`/`or` share one level and fold to the left.
    ///
    /// Only tokens that convert to a [`LogicalOp`] ever become internal nodes.
    pub fn parse_expression(&mut self) -> Result<Node, ParseError> {
        let mut left = self.parse_factor()?;

        while let Ok(op) = LogicalOp::try_from(self.current_token.kind) {
            self.advance()?;
            let right = self.parse_factor()?;
            left = Node::binary(op, left, right);
        }
        Ok(left)
    }

    fn parse_factor(&mut self) -> Result<Node, ParseError> {
        match self.current_token.kind {
            TokenKind::LParen => {
                let open = self.advance()?;
                let inner = self.parse_expression()?;
                if !self.check(TokenKind::RParen) {
                    return Err(ParseError::UnbalancedParenthesis {
                        open_offset: open.offset,
                        found: self.current_token.to_string(),
                        found_offset: self.current_token.offset,
                    });
                }
                self.advance()?;
                Ok(inner)
            }
            TokenKind::Alpha => {
                let keyword_token = self.advance()?;
                let keyword = Keyword::lookup(&keyword_token.text).ok_or_else(|| {
                    ParseError::UnknownKeyword {
                        keyword: keyword_token.text.clone(),
                        offset: keyword_token.offset,
                    }
                })?;
                self.parse_predicate(keyword, &keyword_token)
                    .map(Node::leaf)
            }
            _ => Err(ParseError::ExpectedSelection {
                found: self.current_token.to_string(),
                offset: self.current_token.offset,
                len: self.current_token.width(),
            }),
        }
    }

    /// Resolves `keyword value` into a predicate by looking at the lexical
    /// kind of the value.
    fn parse_predicate(
        &mut self,
        keyword: Keyword,
        keyword_token: &Token,
    ) -> Result<Predicate, ParseError> {
        let value = match self.current_token.kind {
            TokenKind::Alpha | TokenKind::Numeric => self.advance()?,
            _ => {
                return Err(ParseError::MissingValue {
                    keyword: keyword_token.text.clone(),
                    found: self.current_token.to_string(),
                    offset: self.current_token.offset,
                    len: self.current_token.width(),
                });
            }
        };

        match (keyword, value.kind) {
            (Keyword::Atom, TokenKind::Alpha) => Ok(Predicate::AtomName(value.text)),
            (Keyword::Atom, _) => Ok(Predicate::AtomNumber(parse_number(&value)?)),
            (Keyword::Residue, TokenKind::Alpha) => Ok(Predicate::ResidueName(value.text)),
            (Keyword::Residue, _) if self.check(TokenKind::Range) => {
                let start = parse_number(&value)?;
                self.parse_range_end(&value, start)
            }
            (Keyword::Residue, _) => Ok(Predicate::ResidueNumber(value.text)),
            (Keyword::Chain, TokenKind::Alpha) => Ok(Predicate::ChainName(value.text)),
            (Keyword::Chain, _) => Err(ParseError::InvalidValue {
                keyword,
                value: value.text,
                offset: value.offset,
            }),
        }
    }

    /// Finishes `residue <start> to <end>`; the current token is `to`.
    fn parse_range_end(&mut self, start_token: &Token, start: i64) -> Result<Predicate, ParseError> {
        let range_token = self.advance()?;
        if !self.check(TokenKind::Numeric) {
            return Err(ParseError::MissingValue {
                keyword: range_token.text,
                found: self.current_token.to_string(),
                offset: self.current_token.offset,
                len: self.current_token.width(),
            });
        }
        let end_token = self.advance()?;
        let end = parse_number(&end_token)?;

        if start > end {
            return Err(ParseError::InvalidRange {
                start,
                end,
                offset: start_token.offset,
                len: end_token.offset + end_token.width() - start_token.offset,
            });
        }
        Ok(Predicate::ResidueRange { start, end })
    }
}

fn parse_number<T: std::str::FromStr>(token: &Token) -> Result<T, ParseError> {
    token
        .text
        .parse::<T>()
        .map_err(|_| ParseError::NumberOutOfRange {
            value: token.text.clone(),
            offset: token.offset,
        })
}
