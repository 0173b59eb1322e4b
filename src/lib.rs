//! Verseref - Scripture reference parser
//!
//! This crate re-exports all layers of the Verseref system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: verseref_parser     - Splitting, validation, normalization, book catalog
//! Layer 1: verseref_grammar    - Reference lexer and chapter/verse grammar
//! Layer 0: verseref_foundation - Core types (BookData, ChapterData, VerseRange, Error)
//! ```
//!
//! # Example
//!
//! ```
//! let result = verseref::parse_query("1Kings1:2;IIIJohn1");
//! assert_eq!(result.to_string(), "1 Kings 1:2; 3 John 1");
//! assert!(result.errors.is_empty());
//! ```

pub use verseref_foundation as foundation;
pub use verseref_grammar as grammar;
pub use verseref_parser as parser;

pub use verseref_foundation::{BookData, ChapterData, Error, ErrorKind, QueryResult, VerseRange};
pub use verseref_parser::{BookCatalog, QueryConfig, QueryParser, parse_book, parse_query};
