//! Integration tests for the reference model
//!
//! Tests construction helpers, whole-book/whole-chapter semantics, and display.

use verseref_foundation::{BookData, ChapterData, QueryResult, VerseRange};

// =============================================================================
// VerseRange
// =============================================================================

#[test]
fn verse_range_single() {
    let range = VerseRange::single(3);
    assert_eq!(range.from, 3);
    assert_eq!(range.to, None);
    assert!(!range.is_descending());
    assert_eq!(range.to_string(), "3");
}

#[test]
fn verse_range_closed() {
    let range = VerseRange::closed(10, 12);
    assert_eq!(range.to, Some(12));
    assert!(!range.is_descending());
    assert_eq!(range.to_string(), "10-12");
}

#[test]
fn verse_range_equal_bounds_is_not_descending() {
    assert!(!VerseRange::closed(4, 4).is_descending());
}

#[test]
fn verse_range_descending() {
    assert!(VerseRange::closed(5, 3).is_descending());
}

// =============================================================================
// ChapterData
// =============================================================================

#[test]
fn chapter_without_verses_is_whole() {
    let chapter = ChapterData::new(2);
    assert!(chapter.is_whole_chapter());
    assert_eq!(chapter.to_string(), "2");
}

#[test]
fn chapter_with_verses_keeps_order() {
    let chapter = ChapterData::with_verses(
        1,
        [VerseRange::closed(4, 6), VerseRange::single(1)],
    );
    assert!(!chapter.is_whole_chapter());
    assert_eq!(chapter.verses[0], VerseRange::closed(4, 6));
    assert_eq!(chapter.to_string(), "1:4-6,1");
}

// =============================================================================
// BookData
// =============================================================================

#[test]
fn whole_book() {
    let book = BookData::whole("Song of Solomon");
    assert!(book.is_whole_book());
    assert_eq!(book.to_string(), "Song of Solomon");
}

#[test]
fn book_display_lists_chapters() {
    let book = BookData::new(
        "Genesis",
        vec![
            ChapterData::with_verses(1, [VerseRange::closed(1, 2)]),
            ChapterData::new(3),
        ],
    );
    assert!(!book.is_whole_book());
    assert_eq!(book.to_string(), "Genesis 1:1-2, 3");
}

// =============================================================================
// QueryResult
// =============================================================================

#[test]
fn empty_result_is_clean() {
    let result = QueryResult::new();
    assert!(result.is_clean());
    assert!(result.books.is_empty());
    assert_eq!(result.to_string(), "");
}

#[test]
fn result_with_errors_is_not_clean() {
    let result = QueryResult {
        books: vec![BookData::whole("Ruth")],
        errors: vec!["Hezekiah".to_string()],
    };
    assert!(!result.is_clean());
    assert_eq!(result.to_string(), "Ruth");
}

#[test]
fn result_display_joins_books() {
    let result = QueryResult {
        books: vec![
            BookData::new("1 Kings", vec![ChapterData::with_verses(1, [VerseRange::single(2)])]),
            BookData::new("3 John", vec![ChapterData::new(1)]),
        ],
        errors: Vec::new(),
    };
    assert_eq!(result.to_string(), "1 Kings 1:2; 3 John 1");
}
