//! Query splitting.
//!
//! Cuts a multi-book query into one segment per book.

/// Separator between books in a query.
pub const DEFAULT_SEPARATOR: char = ';';

/// Splits raw queries into book segments.
pub struct QuerySplitter;

impl QuerySplitter {
    /// Splits `query` on `separator`.
    ///
    /// - Trims whitespace from each segment
    /// - Drops segments that are empty after trimming
    /// - Preserves input order
    #[must_use]
    pub fn split(query: &str, separator: char) -> Vec<&str> {
        query
            .split(separator)
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .collect()
    }
}

/// Splits `query` on the default `;` separator.
#[must_use]
pub fn split_query_by_books(query: &str) -> Vec<&str> {
    QuerySplitter::split(query, DEFAULT_SEPARATOR)
}
