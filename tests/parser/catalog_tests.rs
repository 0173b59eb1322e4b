//! Tests for the book catalog

use proptest::prelude::*;
use verseref_foundation::ErrorKind;
use verseref_parser::{BookCatalog, CatalogEntry, canon, validate_book_name};

#[test]
fn standard_catalog_has_the_full_canon() {
    let catalog = BookCatalog::standard();
    assert_eq!(catalog.len(), canon::BOOKS.len());
    assert_eq!(catalog.entries()[0].name, "Genesis");
    assert_eq!(catalog.entries()[65].name, "Revelation");
}

#[test]
fn every_alias_resolves_to_its_canonical_name() {
    for (name, aliases) in canon::BOOKS {
        assert_eq!(validate_book_name(name), Some(*name));
        for alias in *aliases {
            assert_eq!(validate_book_name(alias), Some(*name), "{alias}");
        }
    }
}

#[test]
fn unknown_names_do_not_resolve() {
    for name in ["Hezekiah", "Gen 1", "Genesiss", "4 John", ""] {
        assert_eq!(validate_book_name(name), None, "{name}");
    }
}

#[test]
fn custom_catalog_reports_collisions() {
    let err = BookCatalog::from_entries([
        CatalogEntry::new("Judges", ["Jdg"]),
        CatalogEntry::new("Judith", ["JDG"]),
    ])
    .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::AliasCollision { .. }));
}

#[test]
fn custom_catalog_extends_in_order() {
    let mut catalog = BookCatalog::from_table(canon::BOOKS).unwrap();
    catalog
        .register(CatalogEntry::new("Tobit", ["Tob", "Tb"]))
        .unwrap();
    assert_eq!(catalog.position("tb"), Some(66));
    assert_eq!(catalog.canonical_name("TOB"), Some("Tobit"));
}

proptest! {
    #[test]
    fn resolution_ignores_case(index in 0..canon::BOOKS.len(), upper in any::<bool>()) {
        let (name, aliases) = canon::BOOKS[index];
        for candidate in std::iter::once(name).chain(aliases.iter().copied()) {
            let cased = if upper {
                candidate.to_uppercase()
            } else {
                candidate.to_lowercase()
            };
            prop_assert_eq!(validate_book_name(&cased), Some(name));
        }
    }
}
