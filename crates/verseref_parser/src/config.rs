//! Configuration for query parsing.

use crate::splitter::DEFAULT_SEPARATOR;

/// Configuration for [`QueryParser`](crate::QueryParser).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryConfig {
    /// Character separating books in a query.
    pub separator: char,

    /// Fail segments containing a range that ends before it starts (`5-3`).
    ///
    /// Off by default: such ranges are passed through as written.
    pub reject_descending_ranges: bool,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR,
            reject_descending_ranges: false,
        }
    }
}

impl QueryConfig {
    /// Creates a configuration that rejects descending verse ranges.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            reject_descending_ranges: true,
            ..Self::default()
        }
    }

    /// Builder method to set the book separator.
    #[must_use]
    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// Builder method to enable/disable descending range rejection.
    #[must_use]
    pub fn with_reject_descending_ranges(mut self, reject: bool) -> Self {
        self.reject_descending_ranges = reject;
        self
    }
}
