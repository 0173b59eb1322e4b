//! Core types for verseref.
//!
//! This crate provides:
//! - [`VerseRange`], [`ChapterData`], [`BookData`] - The parsed reference model
//! - [`QueryResult`] - The outcome of parsing a multi-book query
//! - [`Error`] - Rich error types with segment context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod reference;

pub use error::{Error, ErrorKind, Result, Violation};
pub use reference::{BookData, ChapterData, QueryResult, VerseRange};
