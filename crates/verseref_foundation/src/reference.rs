//! The parsed reference model.
//!
//! A query such as `"Genesis 1:10-12; Song of Solomon"` parses into a
//! [`QueryResult`] holding one [`BookData`] per resolved book. Each book holds
//! the chapters requested, and each chapter the verse ranges requested. Empty
//! collections mean "everything": a book without references is the whole
//! book, a chapter without verses is the whole chapter.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A range of verses within a chapter.
///
/// `to` is `None` for a single verse and for open-ended ranges like `3-`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VerseRange {
    /// First verse (1-based).
    pub from: u32,
    /// Last verse, if the range is closed.
    pub to: Option<u32>,
}

impl VerseRange {
    /// Creates a single-verse range.
    #[must_use]
    pub const fn single(from: u32) -> Self {
        Self { from, to: None }
    }

    /// Creates a closed range.
    #[must_use]
    pub const fn closed(from: u32, to: u32) -> Self {
        Self { from, to: Some(to) }
    }

    /// Returns true if the range ends before it starts (`5-3`).
    #[must_use]
    pub const fn is_descending(&self) -> bool {
        match self.to {
            Some(to) => to < self.from,
            None => false,
        }
    }
}

impl fmt::Display for VerseRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to {
            Some(to) => write!(f, "{}-{to}", self.from),
            None => write!(f, "{}", self.from),
        }
    }
}

/// A chapter together with the verse ranges requested from it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ChapterData {
    /// Chapter number (1-based).
    pub chapter: u32,
    /// Requested verse ranges, in input order. Empty means the whole chapter.
    pub verses: Vec<VerseRange>,
}

impl ChapterData {
    /// Creates a whole-chapter reference.
    #[must_use]
    pub const fn new(chapter: u32) -> Self {
        Self {
            chapter,
            verses: Vec::new(),
        }
    }

    /// Creates a chapter reference with the given verse ranges.
    #[must_use]
    pub fn with_verses(chapter: u32, verses: impl IntoIterator<Item = VerseRange>) -> Self {
        Self {
            chapter,
            verses: verses.into_iter().collect(),
        }
    }

    /// Returns true if no specific verses were requested.
    #[must_use]
    pub fn is_whole_chapter(&self) -> bool {
        self.verses.is_empty()
    }
}

/// Verse ranges are joined by a bare comma (`1:1-2,4-6`) so they cannot be
/// confused with the `", "` between chapters of a [`BookData`].
impl fmt::Display for ChapterData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.chapter)?;
        for (i, range) in self.verses.iter().enumerate() {
            if i == 0 {
                write!(f, ":{range}")?;
            } else {
                write!(f, ",{range}")?;
            }
        }
        Ok(())
    }
}

/// A resolved book and the chapters requested from it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BookData {
    /// Canonical book name.
    pub name: String,
    /// Requested chapters, in input order. Empty means the whole book.
    pub references: Vec<ChapterData>,
}

impl BookData {
    /// Creates a book reference.
    #[must_use]
    pub fn new(name: impl Into<String>, references: Vec<ChapterData>) -> Self {
        Self {
            name: name.into(),
            references,
        }
    }

    /// Creates a whole-book reference.
    #[must_use]
    pub fn whole(name: impl Into<String>) -> Self {
        Self::new(name, Vec::new())
    }

    /// Returns true if no specific chapters were requested.
    #[must_use]
    pub fn is_whole_book(&self) -> bool {
        self.references.is_empty()
    }
}

/// Renders for people, not for parsing: `Genesis 1:1, 2` lists verse 1:1 and
/// the whole of chapter 2, which a query has no way to spell.
impl fmt::Display for BookData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        for (i, chapter) in self.references.iter().enumerate() {
            if i == 0 {
                write!(f, " {chapter}")?;
            } else {
                write!(f, ", {chapter}")?;
            }
        }
        Ok(())
    }
}

/// The outcome of parsing a multi-book query.
///
/// Successes and failures are kept apart; each list preserves input order
/// relative to itself.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct QueryResult {
    /// Successfully parsed books.
    pub books: Vec<BookData>,
    /// Report strings for segments that could not be parsed.
    pub errors: Vec<String>,
}

impl QueryResult {
    /// Creates an empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if every segment parsed.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

impl fmt::Display for QueryResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, book) in self.books.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{book}")?;
        }
        Ok(())
    }
}
