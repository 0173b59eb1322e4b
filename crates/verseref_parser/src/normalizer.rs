//! Book-name normalization.
//!
//! Turns the many ways people number a book (`1 John`, `1st John`,
//! `First John`, `I John`, `1John`) into a single `"<digit> "` prefix, then
//! splits the segment into the book name and the reference text after it.
//!
//! ```text
//! "IIIJohn1"  ──rewrite──▶  "3 John1"  ──scan──▶  name "3 John", references "1"
//! ```

use tracing::trace;

/// Ordinal prefixes, longest spelling first within each number.
const ORDINALS: &[(&str, u8)] = &[
    ("first", 1),
    ("second", 2),
    ("third", 3),
    ("1st", 1),
    ("2nd", 2),
    ("3rd", 3),
    ("1", 1),
    ("2", 2),
    ("3", 3),
];

/// Roman numeral prefixes, longest first.
const ROMAN_NUMERALS: &[(&str, u8)] = &[("iii", 3), ("ii", 2), ("i", 1)];

/// What to do with a segment that starts with a listed prefix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RomanException {
    /// The leading `I` belongs to the word; leave the segment alone.
    Keep,
    /// The first `len` characters are the numeral `value`, written without a space.
    Numeral {
        /// Book number the numeral stands for
        value: u8,
        /// Characters the numeral occupies
        len: usize,
    },
}

/// Prefixes consulted, in order, before generic roman-numeral stripping.
///
/// Matching is case-insensitive; the first matching prefix wins, so longer
/// prefixes must precede shorter ones that they extend.
pub const ROMAN_EXCEPTIONS: &[(&str, RomanException)] = &[
    ("isamuel", RomanException::Numeral { value: 1, len: 1 }),
    ("isam", RomanException::Numeral { value: 1, len: 1 }),
    ("ism", RomanException::Numeral { value: 1, len: 1 }),
    ("isaiah", RomanException::Keep),
    ("isa", RomanException::Keep),
    ("is", RomanException::Keep),
];

/// The book name scanned from the front of a segment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BookToken {
    /// Book name with single spaces, including any leading book number
    pub name: String,
    /// Byte index where the reference text begins (`len` if there is none)
    pub chapter_begin: usize,
}

/// A segment after numeral rewriting and name scanning.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NormalizedSegment {
    /// Segment text with its book number rewritten to `"<digit> "`
    pub text: String,
    /// Raw book name, ready for catalog lookup
    pub book_name: String,
    /// Byte index into `text` where the reference text begins
    pub chapter_begin: usize,
}

impl NormalizedSegment {
    /// The reference text after the book name (possibly empty).
    #[must_use]
    pub fn remainder(&self) -> &str {
        &self.text[self.chapter_begin..]
    }
}

/// Rewrites a leading ordinal or roman numeral to `"<digit> "`.
///
/// Returns the input unchanged if it does not start with a book number, or if
/// it is already in `"<digit> <name>"` form.
#[must_use]
pub fn replace_roman_numbers(segment: &str) -> String {
    let trimmed = segment.trim_start();
    match strip_ordinal(trimmed).or_else(|| strip_roman(trimmed)) {
        Some((value, rest)) => {
            let rewritten = format!("{value} {}", rest.trim_start());
            trace!(segment, %rewritten, "book number rewritten");
            rewritten
        }
        None => segment.to_string(),
    }
}

/// Splits a rewritten segment into book name and reference start.
///
/// A leading digit that is not followed by another digit is the book number
/// and stays in the name. After it, the first digit starts the references.
/// Runs of spaces in the name collapse to one.
#[must_use]
pub fn parse_book_name(segment: &str) -> BookToken {
    let mut name = String::new();
    let mut body_start = 0;

    if let Some(digit) = sequence_digit(segment) {
        name.push(digit);
        name.push(' ');
        body_start = digit.len_utf8();
    }

    for (offset, c) in segment[body_start..].char_indices() {
        if c == ' ' {
            if !name.is_empty() && !name.ends_with(' ') {
                name.push(' ');
            }
            continue;
        }
        if c.is_ascii_digit() {
            return BookToken {
                name: name.trim().to_string(),
                chapter_begin: body_start + offset,
            };
        }
        name.push(c);
    }

    BookToken {
        name: name.trim().to_string(),
        chapter_begin: segment.len(),
    }
}

/// Rewrites the book number and scans the book name.
#[must_use]
pub fn normalize_segment(segment: &str) -> NormalizedSegment {
    let text = replace_roman_numbers(segment);
    let BookToken {
        name,
        chapter_begin,
    } = parse_book_name(&text);
    NormalizedSegment {
        text,
        book_name: name,
        chapter_begin,
    }
}

fn strip_ordinal(s: &str) -> Option<(u8, &str)> {
    ORDINALS.iter().find_map(|(prefix, value)| {
        let rest = strip_prefix_ignore_case(s, prefix)?;
        // "12" is a chapter, not book 1 of chapter 2.
        if prefix.starts_with(|c: char| c.is_ascii_digit())
            && prefix.len() == 1
            && rest.starts_with(|c: char| c.is_ascii_digit())
        {
            return None;
        }
        Some((*value, rest))
    })
}

fn strip_roman(s: &str) -> Option<(u8, &str)> {
    for (prefix, exception) in ROMAN_EXCEPTIONS {
        if strip_prefix_ignore_case(s, prefix).is_some() {
            return match *exception {
                RomanException::Keep => None,
                RomanException::Numeral { value, len } => {
                    s.get(len..).map(|rest| (value, rest))
                }
            };
        }
    }

    ROMAN_NUMERALS.iter().find_map(|(numeral, value)| {
        strip_prefix_ignore_case(s, numeral).map(|rest| (*value, rest))
    })
}

fn strip_prefix_ignore_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let head = s.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix)
        .then(|| &s[prefix.len()..])
}

/// The book-number digit at the front of `s`, if any.
fn sequence_digit(s: &str) -> Option<char> {
    let mut chars = s.chars();
    let first = chars.next().filter(|c| matches!(c, '1'..='9'))?;
    match chars.next() {
        Some(c) if c.is_ascii_digit() => None,
        _ => Some(first),
    }
}
