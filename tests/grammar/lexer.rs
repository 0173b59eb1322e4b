//! Integration tests for the reference lexer

use verseref_grammar::{Lexer, Span, TokenKind};

fn kinds(source: &str) -> Vec<TokenKind> {
    Lexer::tokenize(source).into_iter().map(|t| t.kind).collect()
}

// =============================================================================
// Basic Tokens
// =============================================================================

#[test]
fn lex_empty() {
    assert_eq!(kinds(""), vec![TokenKind::Eof]);
    assert_eq!(kinds("   "), vec![TokenKind::Eof]);
}

#[test]
fn lex_chapter_and_verse_range() {
    assert_eq!(
        kinds("1:1-2, 4-6"),
        vec![
            TokenKind::Number(1),
            TokenKind::Colon,
            TokenKind::Number(1),
            TokenKind::Dash,
            TokenKind::Number(2),
            TokenKind::Comma,
            TokenKind::Number(4),
            TokenKind::Dash,
            TokenKind::Number(6),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn lex_typographic_dashes() {
    assert_eq!(
        kinds("2:1\u{2013}4"),
        vec![
            TokenKind::Number(2),
            TokenKind::Colon,
            TokenKind::Number(1),
            TokenKind::Dash,
            TokenKind::Number(4),
            TokenKind::Eof,
        ]
    );
    assert!(kinds("1\u{2014}3").contains(&TokenKind::Dash));
}

#[test]
fn lex_word() {
    assert_eq!(
        kinds("abc:1"),
        vec![
            TokenKind::Word,
            TokenKind::Colon,
            TokenKind::Number(1),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn lex_overflowing_number_is_word() {
    assert_eq!(kinds("99999999999"), vec![TokenKind::Word, TokenKind::Eof]);
}

// =============================================================================
// Spans
// =============================================================================

#[test]
fn spans_cover_source_text() {
    let source = "12 : 3";
    let tokens = Lexer::tokenize(source);
    assert_eq!(tokens[0].span, Span::new(0, 2));
    assert_eq!(tokens[0].text(source), "12");
    assert_eq!(tokens[1].text(source), ":");
    assert_eq!(tokens[2].text(source), "3");
    assert!(tokens[3].span.is_empty());
}

#[test]
fn next_token_repeats_eof() {
    let mut lexer = Lexer::new("1");
    assert_eq!(lexer.next_token().kind, TokenKind::Number(1));
    assert_eq!(lexer.next_token().kind, TokenKind::Eof);
    assert_eq!(lexer.next_token().kind, TokenKind::Eof);
}

#[test]
fn separators() {
    let tokens = Lexer::tokenize("1:2,3-4");
    let separators: Vec<_> = tokens.iter().filter(|t| t.is_separator()).map(|t| t.kind).collect();
    assert_eq!(separators, vec![TokenKind::Colon, TokenKind::Comma]);
}
