//! Token types for the reference grammar.
//!
//! Tokens are the output of the lexer and input to the parser.

use crate::span::Span;

/// A token from lexical analysis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token {
    /// The type and value of this token.
    pub kind: TokenKind,
    /// Source location of this token.
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Returns the text this token covers in the given source.
    #[must_use]
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        self.span.text(source)
    }

    /// Returns true if this token ends a fragment (`:` or `,`).
    #[must_use]
    pub const fn is_separator(&self) -> bool {
        matches!(self.kind, TokenKind::Colon | TokenKind::Comma)
    }
}

/// Token types for the reference grammar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    /// Unsigned integer like `12`
    Number(u32),
    /// `:` between chapter and verse
    Colon,
    /// `,` between list items
    Comma,
    /// `-`, `–` or `—` inside a verse range
    Dash,
    /// Any other run of characters, including digit runs too large for a number
    Word,
    /// End of input
    Eof,
}
