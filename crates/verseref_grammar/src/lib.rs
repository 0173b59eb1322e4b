//! Lexer and reference grammar for the chapter/verse part of a query.
//!
//! Given the text that follows a book name (`"1:1-2,4-6"`, `"1,2:1,3"`), this
//! crate produces the ordered list of [`ChapterData`] it requests.
//!
//! - [`Lexer`] - Tokenization into numbers, colons, commas, dashes and words
//! - [`Priority`] - Chapter-priority vs verse-priority interpretation
//! - [`parse_references`] - The reference grammar itself
//!
//! [`ChapterData`]: verseref_foundation::ChapterData

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod lexer;
pub mod parser;
pub mod span;
pub mod token;


pub use lexer::Lexer;
pub use parser::{
    Priority, is_verse_priority, parse_chapter_number, parse_chapter_priority, parse_references,
    parse_verse_priority, parse_verse_range,
};
pub use span::Span;
pub use token::{Token, TokenKind};
