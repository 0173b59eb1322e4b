//! Segment validation.
//!
//! Cheap character-level checks that reject malformed segments before the
//! normalizer and grammar ever see them.

use verseref_foundation::Violation;

/// Punctuation allowed anywhere in a segment.
const ALLOWED_PUNCTUATION: [char; 6] = [',', '\u{2013}', ';', '\u{2014}', ':', '-'];

/// Marks that may not follow one another, even across spaces.
const SEPARATOR_MARKS: [char; 4] = [',', ':', ';', '-'];

/// Longest run of `I` a book number can use (`III`).
const MAX_ROMAN_RUN: usize = 3;

/// Checks a segment against every validation rule.
///
/// # Errors
/// Returns the first [`Violation`] found, checking rules in this order:
/// character set, roman numeral runs, adjacent punctuation, commas.
pub fn validate_segment(segment: &str) -> Result<(), Violation> {
    if let Some(c) = segment.chars().find(|c| !is_allowed(*c)) {
        return Err(Violation::DisallowedCharacter(c));
    }

    let mut run = 0;
    for c in segment.chars() {
        if c.eq_ignore_ascii_case(&'i') {
            run += 1;
            if run > MAX_ROMAN_RUN {
                return Err(Violation::RomanNumeralRun);
            }
        } else {
            run = 0;
        }
    }

    let mut previous: Option<char> = None;
    for c in segment.chars().filter(|c| *c != ' ') {
        if SEPARATOR_MARKS.contains(&c) && previous.is_some_and(|p| SEPARATOR_MARKS.contains(&p)) {
            return Err(Violation::AdjacentPunctuation);
        }
        previous = Some(c);
    }

    let mut chars = segment.chars().peekable();
    while let Some(c) = chars.next() {
        if c == ',' && !chars.peek().is_some_and(char::is_ascii_digit) {
            return Err(Violation::CommaWithoutDigit);
        }
    }

    Ok(())
}

/// Returns true if the segment passes every validation rule.
#[must_use]
pub fn is_valid_segment(segment: &str) -> bool {
    validate_segment(segment).is_ok()
}

fn is_allowed(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == ' ' || ALLOWED_PUNCTUATION.contains(&c)
}
