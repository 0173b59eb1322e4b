//! Error types for verseref.
//!
//! Uses `thiserror` for ergonomic error definition. No error is fatal to a
//! whole query: the orchestrator turns each one into a report string via
//! [`Error::report`] and moves on to the next segment.

use std::fmt;

use thiserror::Error;

/// Result type alias using the verseref [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for verseref operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// The query segment being parsed when the error occurred.
    pub segment: Option<String>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            segment: None,
        }
    }

    /// Attaches the segment the error belongs to.
    #[must_use]
    pub fn with_segment(mut self, segment: impl Into<String>) -> Self {
        self.segment = Some(segment.into());
        self
    }

    /// Creates a segment validation error.
    #[must_use]
    pub fn invalid_segment(segment: impl Into<String>, violation: Violation) -> Self {
        Self::new(ErrorKind::InvalidSegment {
            segment: segment.into(),
            violation,
        })
    }

    /// Creates an unknown book error.
    #[must_use]
    pub fn unknown_book(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownBook(name.into()))
    }

    /// Creates an invalid chapter number error.
    #[must_use]
    pub fn invalid_chapter(literal: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidChapterNumber(literal.into()))
    }

    /// Creates an invalid verse number error.
    #[must_use]
    pub fn invalid_verse(literal: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidVerseNumber(literal.into()))
    }

    /// Creates a descending range error.
    #[must_use]
    pub fn descending_range(from: u32, to: u32) -> Self {
        Self::new(ErrorKind::DescendingRange { from, to })
    }

    /// Creates an alias collision error.
    #[must_use]
    pub fn alias_collision(
        alias: impl Into<String>,
        first: impl Into<String>,
        second: impl Into<String>,
    ) -> Self {
        Self::new(ErrorKind::AliasCollision {
            alias: alias.into(),
            first: first.into(),
            second: second.into(),
        })
    }

    /// Renders the string recorded in a query's error list.
    ///
    /// Rejected segments report their raw text and unknown books their raw
    /// name; everything else reports its message.
    #[must_use]
    pub fn report(&self) -> String {
        match &self.kind {
            ErrorKind::InvalidSegment { segment, .. } => segment.clone(),
            ErrorKind::UnknownBook(name) => name.clone(),
            kind => kind.to_string(),
        }
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// Segment failed character-set or punctuation validation.
    #[error("invalid segment {segment:?}: {violation}")]
    InvalidSegment {
        /// The raw segment text.
        segment: String,
        /// The rule it broke.
        violation: Violation,
    },

    /// Book name matched no catalog entry or alias.
    #[error("unknown book: {0}")]
    UnknownBook(String),

    /// A chapter slot did not hold a positive integer.
    #[error("invalid chapter number: {0}")]
    InvalidChapterNumber(String),

    /// A verse slot did not hold a positive integer.
    #[error("invalid verse number: {0}")]
    InvalidVerseNumber(String),

    /// Verse range ends before it starts.
    #[error("descending verse range: {from}-{to}")]
    DescendingRange {
        /// First verse.
        from: u32,
        /// Last verse (smaller than `from`).
        to: u32,
    },

    /// A name or alias maps to two different books.
    #[error("alias {alias:?} is claimed by both {first} and {second}")]
    AliasCollision {
        /// The colliding name or alias.
        alias: String,
        /// Book that registered it first.
        first: String,
        /// Book that tried to register it again.
        second: String,
    },
}

/// The validation rule a segment broke.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Violation {
    /// Character outside the allowed set.
    DisallowedCharacter(char),
    /// Four or more consecutive `I` characters.
    RomanNumeralRun,
    /// Two punctuation marks in a row, e.g. `1::1` or `1, -2`.
    AdjacentPunctuation,
    /// Comma not immediately followed by a digit.
    CommaWithoutDigit,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DisallowedCharacter(c) => write!(f, "disallowed character {c:?}"),
            Self::RomanNumeralRun => write!(f, "roman numeral larger than III"),
            Self::AdjacentPunctuation => write!(f, "adjacent punctuation"),
            Self::CommaWithoutDigit => write!(f, "comma not followed by a number"),
        }
    }
}
