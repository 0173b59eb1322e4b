//! End-to-end queries through the top-level re-exports

use verseref::{BookData, ChapterData, QueryParser, VerseRange, parse_query};

#[test]
fn display_round_trip_through_layers() {
    let result = parse_query("Genesis 1:1-2,4-6; Ps 23; III John");
    assert_eq!(result.to_string(), "Genesis 1:1-2,4-6; Psalms 23; 3 John");
}

#[test]
fn layers_are_reachable_by_name() {
    let tokens = verseref::grammar::Lexer::tokenize("1:2");
    assert_eq!(tokens.len(), 4);

    let chapters = verseref::grammar::parse_references("1:2").unwrap();
    let book = verseref::foundation::BookData::new("Ruth", chapters);
    assert_eq!(book.to_string(), "Ruth 1:2");

    assert_eq!(
        verseref::parser::validate_book_name("Song of Songs"),
        verseref::parser::validate_book_name("Song of Solomon")
    );
}

#[test]
fn catalog_is_shared_across_threads() {
    let handles: Vec<_> = ["Genesis 1:1", "Exodus 2", "Leviticus 3:4-5", "Numbers"]
        .into_iter()
        .map(|query| std::thread::spawn(move || parse_query(query)))
        .collect();

    let names: Vec<String> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap().books[0].name.clone())
        .collect();
    assert_eq!(names, vec!["Genesis", "Exodus", "Leviticus", "Numbers"]);
}

#[test]
fn parser_is_reusable() {
    let parser = QueryParser::default();
    let first = parser.parse("Jude 3");
    let second = parser.parse("Jude 3");
    assert_eq!(first, second);
    assert_eq!(
        first.books,
        vec![BookData::new("Jude", vec![ChapterData::new(3)])]
    );
}

#[test]
fn typed_en_dash_ranges() {
    let result = parse_query("Song of Solomon 2:1\u{2013}4");
    assert_eq!(
        result.books[0].references,
        vec![ChapterData::with_verses(2, [VerseRange::closed(1, 4)])]
    );
}
