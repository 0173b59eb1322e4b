//! Scripture reference query parser.
//!
//! This crate transforms human-typed queries like `"1 Kings 1:2; III John 1"`
//! into [`BookData`] values naming a canonical book and the chapters and
//! verses requested from it.
//!
//! # Architecture
//!
//! ```text
//! "1Kings1:2;IIIJohn1"
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   SPLITTER      │  → ["1Kings1:2", "IIIJohn1"]
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   VALIDATOR     │  → rejects "1::2", "IIII John", "Mat 1, Gal 1", ...
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   NORMALIZER    │  → ("1 Kings", "1:2"), ("3 John", "1")
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   CATALOG       │  → "1 Kings", "3 John" (canonical names)
//! │   LOOKUP        │
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   REFERENCE     │  → [1:2], [1]
//! │   GRAMMAR       │
//! └─────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`catalog`] - Canonical names and aliases, case-insensitive lookup
//! - [`canon`] - The standard 66-book canon
//! - [`splitter`] - Split a query into book segments
//! - [`validator`] - Character-level segment validation
//! - [`normalizer`] - Book number rewriting and book-name scanning
//! - [`parser`] - Main query pipeline orchestration
//! - [`config`] - Query parsing configuration
//!
//! [`BookData`]: verseref_foundation::BookData

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod canon;
pub mod catalog;
pub mod config;
pub mod normalizer;
pub mod parser;
pub mod splitter;
pub mod validator;


// Re-export main types for convenience
pub use catalog::{BookCatalog, CatalogEntry, validate_book_name};
pub use config::QueryConfig;
pub use normalizer::{NormalizedSegment, normalize_segment, parse_book_name, replace_roman_numbers};
pub use parser::{QueryParser, parse_book, parse_query};
pub use splitter::{QuerySplitter, split_query_by_books};
pub use validator::{is_valid_segment, validate_segment};
