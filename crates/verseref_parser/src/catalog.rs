//! Book catalog.
//!
//! Maps canonical book names and their aliases to catalog entries. Lookups
//! are case-insensitive and exact; nothing is guessed.

use std::collections::HashMap;
use std::sync::LazyLock;

use verseref_foundation::{Error, Result};

use crate::canon;

static STANDARD: LazyLock<BookCatalog> = LazyLock::new(|| {
    BookCatalog::from_table(canon::BOOKS).expect("standard canon aliases are unique")
});

/// A book with its canonical name and accepted aliases.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Canonical display name
    pub name: String,
    /// Abbreviations and alternate spellings
    pub aliases: Vec<String>,
}

impl CatalogEntry {
    /// Creates an entry.
    #[must_use]
    pub fn new(name: impl Into<String>, aliases: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            name: name.into(),
            aliases: aliases.into_iter().map(Into::into).collect(),
        }
    }

    /// The canonical name followed by every alias.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str()).chain(self.aliases.iter().map(String::as_str))
    }
}

/// Registry of books, kept in canonical order.
#[derive(Clone, Debug, Default)]
pub struct BookCatalog {
    /// Entries in registration order
    entries: Vec<CatalogEntry>,
    /// Lookup key (name or alias) -> index into `entries`
    index: HashMap<String, usize>,
}

impl BookCatalog {
    /// Creates a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide catalog of the 66-book canon.
    #[must_use]
    pub fn standard() -> &'static BookCatalog {
        &STANDARD
    }

    /// Builds a catalog from entries, in order.
    ///
    /// # Errors
    /// Returns [`ErrorKind::AliasCollision`] if two books claim the same name
    /// or alias.
    ///
    /// [`ErrorKind::AliasCollision`]: verseref_foundation::ErrorKind::AliasCollision
    pub fn from_entries(entries: impl IntoIterator<Item = CatalogEntry>) -> Result<Self> {
        let mut catalog = Self::new();
        for entry in entries {
            catalog.register(entry)?;
        }
        Ok(catalog)
    }

    /// Builds a catalog from a static `(name, aliases)` table.
    ///
    /// # Errors
    /// Returns an error if two books claim the same name or alias.
    pub fn from_table(table: &[(&str, &[&str])]) -> Result<Self> {
        Self::from_entries(
            table
                .iter()
                .map(|(name, aliases)| CatalogEntry::new(*name, aliases.iter().copied())),
        )
    }

    /// Registers a book after every other registered book.
    ///
    /// Nothing is registered if any of the entry's names collides.
    ///
    /// # Errors
    /// Returns an error if a name or alias already belongs to another book.
    pub fn register(&mut self, entry: CatalogEntry) -> Result<()> {
        let keys: Vec<String> = entry.names().map(lookup_key).collect();
        for (key, alias) in keys.iter().zip(entry.names()) {
            if let Some(&existing) = self.index.get(key) {
                return Err(Error::alias_collision(
                    alias,
                    &self.entries[existing].name,
                    &entry.name,
                ));
            }
        }

        let position = self.entries.len();
        for key in keys {
            self.index.insert(key, position);
        }
        self.entries.push(entry);
        Ok(())
    }

    /// Looks up a book by canonical name or alias, ignoring case.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<&CatalogEntry> {
        self.position(name).map(|i| &self.entries[i])
    }

    /// Returns the canonical name for a name or alias.
    #[must_use]
    pub fn canonical_name(&self, name: &str) -> Option<&str> {
        self.resolve(name).map(|entry| entry.name.as_str())
    }

    /// Returns the book's position in canonical order.
    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.index.get(&lookup_key(name)).copied()
    }

    /// All entries in canonical order.
    #[must_use]
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Number of books.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no books are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Resolves a name or alias against the standard canon.
#[must_use]
pub fn validate_book_name(name: &str) -> Option<&'static str> {
    BookCatalog::standard().canonical_name(name)
}

/// Lowercases and collapses internal whitespace.
fn lookup_key(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
