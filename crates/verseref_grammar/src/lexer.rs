//! Lexer for chapter/verse references.
//!
//! The lexer converts the text after a book name into a stream of tokens.
//! Whitespace is insignificant and never produces a token.

use crate::span::Span;
use crate::token::{Token, TokenKind};

/// Lexer for reference text such as `"1:1-2, 4-6"`.
pub struct Lexer<'src> {
    /// Source text being tokenized.
    source: &'src str,
    /// Remaining source text.
    rest: &'src str,
    /// Current byte offset in source.
    position: usize,
}

impl<'src> Lexer<'src> {
    /// Creates a new lexer for the given source.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            rest: source,
            position: 0,
        }
    }

    /// Returns the next token from the source.
    ///
    /// Once the input is exhausted every call returns [`TokenKind::Eof`].
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let start = self.position;
        let Some(c) = self.peek_char() else {
            return Token::new(TokenKind::Eof, Span::empty(start));
        };

        let kind = match c {
            ':' => {
                self.advance();
                TokenKind::Colon
            }
            ',' => {
                self.advance();
                TokenKind::Comma
            }
            c if is_dash(c) => {
                self.advance();
                TokenKind::Dash
            }
            c if c.is_ascii_digit() => self.scan_number(),
            _ => self.scan_word(),
        };

        Token::new(kind, Span::new(start, self.position))
    }

    /// Tokenizes all source and returns a vector of tokens ending in `Eof`.
    #[must_use]
    pub fn tokenize(source: &str) -> Vec<Token> {
        let mut lexer = Lexer::new(source);
        let mut tokens = Vec::new();
        loop {
            let token = lexer.next_token();
            let is_eof = token.kind == TokenKind::Eof;
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        tokens
    }

    /// Peeks at the next character without consuming it.
    fn peek_char(&self) -> Option<char> {
        self.rest.chars().next()
    }

    /// Advances past the next character.
    fn advance(&mut self) {
        if let Some(c) = self.peek_char() {
            let len = c.len_utf8();
            self.rest = &self.rest[len..];
            self.position += len;
        }
    }

    /// Skips whitespace characters.
    fn skip_whitespace(&mut self) {
        while self.peek_char().is_some_and(char::is_whitespace) {
            self.advance();
        }
    }

    /// Scans a run of ASCII digits.
    fn scan_number(&mut self) -> TokenKind {
        let start = self.position;
        while self.peek_char().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }

        // Too large for a chapter or verse; let the parser reject it by text.
        match self.source[start..self.position].parse::<u32>() {
            Ok(n) => TokenKind::Number(n),
            Err(_) => TokenKind::Word,
        }
    }

    /// Scans anything that is not a number, separator, dash or whitespace.
    fn scan_word(&mut self) -> TokenKind {
        while let Some(c) = self.peek_char() {
            if c.is_whitespace() || c.is_ascii_digit() || c == ':' || c == ',' || is_dash(c) {
                break;
            }
            self.advance();
        }
        TokenKind::Word
    }
}

/// Returns true for the hyphen and the en/em dashes people type in ranges.
fn is_dash(c: char) -> bool {
    matches!(c, '-' | '\u{2013}' | '\u{2014}')
}
