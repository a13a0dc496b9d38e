use thiserror::Error;
use tracing::trace;

use crate::ast::{Token, TokenKind};

/// A run of source characters, used to point diagnostics at the offending
/// text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Zero-based character offset of the first character
    pub offset: usize,
    /// Number of characters, never zero
    pub len: usize,
}

impl Span {
    pub fn new(offset: usize, len: usize) -> Self {
        Span {
            offset,
            len: len.max(1),
        }
    }

    pub fn of(token: &Token) -> Self {
        Span::new(token.offset, token.width())
    }
}

/// Errors raised while splitting a selection into tokens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// Anything other than letters, digits, whitespace and parentheses
    #[error("unexpected character '{ch}' at offset {offset}")]
    UnexpectedCharacter { ch: char, offset: usize },
}

impl LexError {
    pub fn span(&self) -> Span {
        match self {
            LexError::UnexpectedCharacter { offset, .. } => Span::new(*offset, 1),
        }
    }
}

pub struct Lexer {
    input: Vec<char>,
    position: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Lexer {
            input: input.chars().collect(),
            position: 0,
        }
    }

    fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char() {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    /// Reads a maximal run of ASCII letters and digits. The run is numeric
    /// only if every character is a digit.
    fn read_word(&mut self) -> Token {
        let start = self.position;
        let mut text = String::new();
        let mut has_letter = false;

        while let Some(ch) = self.current_char() {
            if ch.is_ascii_alphanumeric() {
                has_letter |= ch.is_ascii_alphabetic();
                text.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        if !has_letter {
            return Token::new(TokenKind::Numeric, text, start);
        }

        let kind = match text.to_ascii_lowercase().as_str() {
            "and" => TokenKind::And,
            "or" => TokenKind::Or,
            "to" => TokenKind::Range,
            _ => TokenKind::Alpha,
        };
        Token::new(kind, text, start)
    }

    /// Returns the next token. Once the input is exhausted every call returns
    /// [`TokenKind::Eof`] at the end offset.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_whitespace();

        let start = self.position;
        let token = match self.current_char() {
            None => Token::eof(start),
            Some('(') => {
                self.advance();
                Token::new(TokenKind::LParen, "(", start)
            }
            Some(')') => {
                self.advance();
                Token::new(TokenKind::RParen, ")", start)
            }
            Some(ch) if ch.is_ascii_alphanumeric() => self.read_word(),
            Some(ch) => {
                return Err(LexError::UnexpectedCharacter { ch, offset: start });
            }
        };

        trace!(kind = %token.kind, text = %token.text, offset = token.offset, "token");
        Ok(token)
    }

    /// Drains the lexer. The returned list always ends with a single
    /// [`TokenKind::Eof`] token.
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let done = token.is(TokenKind::Eof);
            tokens.push(token);
            if done {
                return Ok(tokens);
            }
        }
    }
}

#[test]
fn test_keywords() {
    let mut lexer = Lexer::new("and OR To");
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::And);
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Or);
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Range);
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Eof);
}

#[test]
fn test_parenthesized_selection() {
    let mut lexer = Lexer::new("(atom CA)");
    assert_eq!(lexer.next_token().unwrap(), Token::new(TokenKind::LParen, "(", 0));
    assert_eq!(lexer.next_token().unwrap(), Token::new(TokenKind::Alpha, "atom", 1));
    assert_eq!(lexer.next_token().unwrap(), Token::new(TokenKind::Alpha, "CA", 6));
    assert_eq!(lexer.next_token().unwrap(), Token::new(TokenKind::RParen, ")", 8));
    assert_eq!(lexer.next_token().unwrap(), Token::eof(9));
}
