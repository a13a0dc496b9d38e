// tests/lexer_tests.rs

use prosel::ast::{Token, TokenKind};
use prosel::lexer::{LexError, Lexer};

fn kinds(input: &str) -> Vec<TokenKind> {
    Lexer::new(input)
        .tokenize()
        .unwrap()
        .into_iter()
        .map(|t| t.kind)
        .collect()
}

// ============================================================================
// Words and Numbers
// ============================================================================

#[test]
fn test_alpha_and_numeric() {
    let mut lexer = Lexer::new("atom 12");
    assert_eq!(lexer.next_token().unwrap(), Token::new(TokenKind::Alpha, "atom", 0));
    assert_eq!(lexer.next_token().unwrap(), Token::new(TokenKind::Numeric, "12", 5));
    assert_eq!(lexer.next_token().unwrap(), Token::eof(7));
}

#[test]
fn test_name_with_trailing_digits_is_alpha() {
    let mut lexer = Lexer::new("CA1");
    assert_eq!(lexer.next_token().unwrap(), Token::new(TokenKind::Alpha, "CA1", 0));
}

#[test]
fn test_digits_then_letter_is_alpha() {
    let mut lexer = Lexer::new("1HB");
    assert_eq!(lexer.next_token().unwrap(), Token::new(TokenKind::Alpha, "1HB", 0));
}

#[test]
fn test_leading_zeros_stay_numeric() {
    let mut lexer = Lexer::new("007");
    assert_eq!(lexer.next_token().unwrap(), Token::new(TokenKind::Numeric, "007", 0));
}

#[test]
fn test_value_case_is_preserved() {
    let mut lexer = Lexer::new("Ca");
    assert_eq!(lexer.next_token().unwrap().text, "Ca");
}

// ============================================================================
// Keywords
// ============================================================================

#[test]
fn test_logical_keywords() {
    let test_cases = vec![
        ("and", TokenKind::And),
        ("AND", TokenKind::And),
        ("And", TokenKind::And),
        ("or", TokenKind::Or),
        ("OR", TokenKind::Or),
        ("to", TokenKind::Range),
        ("TO", TokenKind::Range),
    ];

    for (input, expected) in test_cases {
        let mut lexer = Lexer::new(input);
        let token = lexer.next_token().unwrap();
        assert_eq!(token.kind, expected, "Failed for input: {}", input);
        assert_eq!(token.text, input);
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Eof);
    }
}

#[test]
fn test_keywords_vs_names() {
    // Selection keywords are ordinary words at the lexical level
    assert_eq!(kinds("atom"), vec![TokenKind::Alpha, TokenKind::Eof]);
    assert_eq!(kinds("android"), vec![TokenKind::Alpha, TokenKind::Eof]);
    assert_eq!(kinds("order"), vec![TokenKind::Alpha, TokenKind::Eof]);
    assert_eq!(kinds("tO1"), vec![TokenKind::Alpha, TokenKind::Eof]);
}

// ============================================================================
// Punctuation and Whitespace
// ============================================================================

#[test]
fn test_parentheses_split_words() {
    assert_eq!(
        kinds("(atom CA)or(atom CB)"),
        vec![
            TokenKind::LParen,
            TokenKind::Alpha,
            TokenKind::Alpha,
            TokenKind::RParen,
            TokenKind::Or,
            TokenKind::LParen,
            TokenKind::Alpha,
            TokenKind::Alpha,
            TokenKind::RParen,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_offsets_skip_whitespace() {
    let tokens = Lexer::new("  atom\tCA \n and  chain H ").tokenize().unwrap();
    let offsets: Vec<usize> = tokens.iter().map(|t| t.offset).collect();
    assert_eq!(offsets, vec![2, 7, 12, 17, 23, 25]);
}

#[test]
fn test_empty_and_blank_input() {
    assert_eq!(Lexer::new("").tokenize().unwrap(), vec![Token::eof(0)]);
    assert_eq!(Lexer::new("   ").tokenize().unwrap(), vec![Token::eof(3)]);
}

#[test]
fn test_eof_is_idempotent() {
    let mut lexer = Lexer::new("atom");
    lexer.next_token().unwrap();
    for _ in 0..3 {
        assert_eq!(lexer.next_token().unwrap(), Token::eof(4));
    }
}

#[test]
fn test_offsets_count_characters() {
    // Multi-byte whitespace still counts as one character
    let tokens = Lexer::new("\u{00a0}atom").tokenize().unwrap();
    assert_eq!(tokens[0].offset, 1);
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_unknown_punctuation() {
    for (input, ch, offset) in [("atom CA;", ';', 7), ("atom C*", '*', 6), ("chain A-B", '-', 7)] {
        let err = Lexer::new(input).tokenize().unwrap_err();
        assert_eq!(err, LexError::UnexpectedCharacter { ch, offset }, "input: {}", input);
    }
}

#[test]
fn test_non_ascii_letter_is_rejected() {
    let err = Lexer::new("atom Cα").tokenize().unwrap_err();
    assert_eq!(err, LexError::UnexpectedCharacter { ch: 'α', offset: 6 });
    assert_eq!(err.span().offset, 6);
    assert!(err.to_string().contains("unexpected character 'α'"));
}

#[test]
fn test_tokens_before_error_are_produced() {
    let mut lexer = Lexer::new("atom ' CA");
    assert_eq!(lexer.next_token().unwrap().text, "atom");
    assert!(lexer.next_token().is_err());
}
