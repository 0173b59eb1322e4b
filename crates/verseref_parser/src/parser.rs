//! Main query pipeline.
//!
//! Orchestrates the full parsing flow from a raw query to a [`QueryResult`].
//! A bad segment never aborts the query: its report string goes to
//! [`QueryResult::errors`] and the next segment is parsed.

use tracing::debug;
use verseref_foundation::{BookData, Error, QueryResult, Result};
use verseref_grammar::parse_references;

use crate::catalog::BookCatalog;
use crate::config::QueryConfig;
use crate::normalizer::normalize_segment;
use crate::splitter::QuerySplitter;
use crate::validator::validate_segment;

/// Parses queries against a book catalog.
#[derive(Clone, Debug)]
pub struct QueryParser<'c> {
    catalog: &'c BookCatalog,
    config: QueryConfig,
}

impl Default for QueryParser<'static> {
    fn default() -> Self {
        Self::new(BookCatalog::standard())
    }
}

impl<'c> QueryParser<'c> {
    /// Creates a parser over the given catalog with the default configuration.
    #[must_use]
    pub fn new(catalog: &'c BookCatalog) -> Self {
        Self {
            catalog,
            config: QueryConfig::default(),
        }
    }

    /// Replaces the configuration.
    #[must_use]
    pub fn with_config(mut self, config: QueryConfig) -> Self {
        self.config = config;
        self
    }

    /// Gets the configuration.
    #[must_use]
    pub fn config(&self) -> &QueryConfig {
        &self.config
    }

    /// Gets the catalog books are resolved against.
    #[must_use]
    pub fn catalog(&self) -> &'c BookCatalog {
        self.catalog
    }

    /// Parses a multi-book query.
    pub fn parse(&self, query: &str) -> QueryResult {
        let mut result = QueryResult::new();

        for segment in QuerySplitter::split(query, self.config.separator) {
            match self.parse_segment(segment) {
                Ok(book) => {
                    debug!(segment, book = %book, "segment parsed");
                    result.books.push(book);
                }
                Err(err) => {
                    debug!(segment, error = %err, "segment rejected");
                    result.errors.push(err.report());
                }
            }
        }

        result
    }

    /// Parses a single book segment.
    ///
    /// # Errors
    /// Returns an error if the segment fails validation, names no known book,
    /// or holds an invalid chapter or verse number.
    pub fn parse_segment(&self, segment: &str) -> Result<BookData> {
        let segment = segment.trim();

        validate_segment(segment).map_err(|violation| Error::invalid_segment(segment, violation))?;

        let normalized = normalize_segment(segment);
        let entry = self
            .catalog
            .resolve(&normalized.book_name)
            .ok_or_else(|| Error::unknown_book(&normalized.book_name).with_segment(segment))?;

        let references =
            parse_references(normalized.remainder()).map_err(|err| err.with_segment(segment))?;

        if self.config.reject_descending_ranges {
            let descending = references
                .iter()
                .flat_map(|chapter| &chapter.verses)
                .find(|range| range.is_descending());
            if let Some(range) = descending {
                let to = range.to.unwrap_or(range.from);
                return Err(Error::descending_range(range.from, to).with_segment(segment));
            }
        }

        Ok(BookData::new(entry.name.clone(), references))
    }
}

/// Parses a query against the standard canon with the default configuration.
#[must_use]
pub fn parse_query(query: &str) -> QueryResult {
    QueryParser::default().parse(query)
}

/// Parses a single book segment against the standard canon.
///
/// # Errors
/// Returns an error if the segment fails validation, names no known book,
/// or holds an invalid chapter or verse number.
pub fn parse_book(segment: &str) -> Result<BookData> {
    QueryParser::default().parse_segment(segment)
}
