//! Property tests over the whole pipeline

use proptest::prelude::*;
use verseref::parser::canon;
use verseref::{BookData, ChapterData, VerseRange, parse_query};

/// Canonical names whose spelling survives normalization unchanged.
fn plain_book() -> impl Strategy<Value = &'static str> {
    proptest::sample::select(
        canon::BOOKS
            .iter()
            .map(|(name, _)| *name)
            .collect::<Vec<_>>(),
    )
}

proptest! {
    #[test]
    fn single_verse_queries(book in plain_book(), chapter in 1u32..=150, verse in 1u32..=176) {
        let result = parse_query(&format!("{book} {chapter}:{verse}"));
        prop_assert!(result.errors.is_empty(), "{:?}", result.errors);
        prop_assert_eq!(
            result.books,
            vec![BookData::new(
                book,
                vec![ChapterData::with_verses(chapter, [VerseRange::single(verse)])]
            )]
        );
    }

    #[test]
    fn whole_book_queries(book in plain_book()) {
        let result = parse_query(book);
        prop_assert_eq!(result.books, vec![BookData::whole(book)]);
    }

    #[test]
    fn parse_query_never_panics(query in "\\PC{0,64}") {
        let _ = parse_query(&query);
    }

    #[test]
    fn every_segment_lands_somewhere(query in "[A-Za-z0-9 :,;-]{0,48}") {
        let result = parse_query(&query);
        let segments = verseref::parser::split_query_by_books(&query).len();
        prop_assert_eq!(result.books.len() + result.errors.len(), segments);
    }
}
