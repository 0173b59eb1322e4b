//! Reference grammar.
//!
//! The token stream is cut into *fragments*: the tokens between two
//! separators (`:` or `,`). Each fragment, together with the separator that
//! ends it, drives one transition of a small state machine.
//!
//! How a comma is read depends on which separator comes first:
//!
//! ```text
//! 1, 2, 3:1, 4      chapter priority  → chapters 1, 2, 3 (v1), 4
//! 1:1, 2, 3:1, 4    verse priority    → chapter 1 (v1, v2), chapter 3 (v1, v4)
//! ```

use tracing::trace;
use verseref_foundation::{ChapterData, Error, Result, VerseRange};

use crate::lexer::Lexer;
use crate::token::{Token, TokenKind};

/// How top-level commas are interpreted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Priority {
    /// Commas start new chapters.
    Chapter,
    /// Commas continue the current chapter's verse list.
    Verse,
}

impl Priority {
    /// Picks the priority from the first colon and first comma in the tokens.
    ///
    /// Verse priority only when a colon is present and precedes every comma.
    #[must_use]
    pub fn detect(tokens: &[Token]) -> Self {
        let colon = tokens.iter().position(|t| t.kind == TokenKind::Colon);
        let comma = tokens.iter().position(|t| t.kind == TokenKind::Comma);
        match (colon, comma) {
            (Some(colon), Some(comma)) if colon < comma => Self::Verse,
            (Some(_), None) => Self::Verse,
            _ => Self::Chapter,
        }
    }
}

/// Returns true if `input` would be parsed with verse priority.
#[must_use]
pub fn is_verse_priority(input: &str) -> bool {
    Priority::detect(&Lexer::tokenize(input)) == Priority::Verse
}

/// Parses reference text, choosing the priority from the text itself.
///
/// # Errors
/// Returns an error if a chapter or verse slot does not hold a positive integer.
pub fn parse_references(input: &str) -> Result<Vec<ChapterData>> {
    let tokens = Lexer::tokenize(input);
    let priority = Priority::detect(&tokens);
    trace!(input, ?priority, "reference priority");
    ReferenceParser::new(input, &tokens, priority).parse()
}

/// Parses reference text with verse priority.
///
/// # Errors
/// Returns an error if a chapter or verse slot does not hold a positive integer.
pub fn parse_verse_priority(input: &str) -> Result<Vec<ChapterData>> {
    ReferenceParser::new(input, &Lexer::tokenize(input), Priority::Verse).parse()
}

/// Parses reference text with chapter priority.
///
/// # Errors
/// Returns an error if a chapter or verse slot does not hold a positive integer.
pub fn parse_chapter_priority(input: &str) -> Result<Vec<ChapterData>> {
    ReferenceParser::new(input, &Lexer::tokenize(input), Priority::Chapter).parse()
}

/// Parses a single verse range such as `"4"`, `"1-5"` or `"3-"`.
///
/// # Errors
/// Returns an error if either bound is not a positive integer, or if the text
/// contains a separator.
pub fn parse_verse_range(input: &str) -> Result<VerseRange> {
    let tokens = Lexer::tokenize(input);
    let fragment = Fragment::whole(input, &tokens);
    if fragment.has_separator() {
        return Err(Error::invalid_verse(input.trim()));
    }
    fragment.verse_range()
}

/// Parses a chapter number, which must be a positive integer.
///
/// # Errors
/// Returns an error carrying the offending text otherwise.
pub fn parse_chapter_number(input: &str) -> Result<u32> {
    let tokens = Lexer::tokenize(input);
    let fragment = Fragment::whole(input, &tokens);
    if fragment.has_separator() {
        return Err(Error::invalid_chapter(input.trim()));
    }
    fragment.chapter()
}

/// What ended a fragment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Terminator {
    Colon,
    Comma,
    End,
}

/// The tokens between two separators.
#[derive(Clone, Copy, Debug)]
struct Fragment<'a> {
    source: &'a str,
    tokens: &'a [Token],
}

impl<'a> Fragment<'a> {
    /// Wraps a whole token stream, minus the trailing `Eof`.
    fn whole(source: &'a str, tokens: &'a [Token]) -> Self {
        let end = tokens
            .iter()
            .position(|t| t.kind == TokenKind::Eof)
            .unwrap_or(tokens.len());
        Self {
            source,
            tokens: &tokens[..end],
        }
    }

    fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    fn has_separator(&self) -> bool {
        self.tokens.iter().any(Token::is_separator)
    }

    /// The source text the fragment covers, inner spacing included.
    fn text(&self) -> &'a str {
        match (self.tokens.first(), self.tokens.last()) {
            (Some(first), Some(last)) => first.span.to(last.span).text(self.source),
            _ => "",
        }
    }

    /// A chapter number: the fragment must begin with a positive integer.
    fn chapter(&self) -> Result<u32> {
        leading_positive(self.source, self.tokens)
            .ok_or_else(|| Error::invalid_chapter(self.text()))
    }

    /// A verse range, split at the first dash.
    fn verse_range(&self) -> Result<VerseRange> {
        let (from, to) = match self.tokens.iter().position(|t| t.kind == TokenKind::Dash) {
            Some(dash) => (&self.tokens[..dash], &self.tokens[dash + 1..]),
            None => (self.tokens, &[][..]),
        };

        let from = leading_positive(self.source, from)
            .ok_or_else(|| Error::invalid_verse(self.text()))?;
        let to = if to.is_empty() {
            None
        } else {
            Some(
                leading_positive(self.source, to)
                    .ok_or_else(|| Error::invalid_verse(self.text()))?,
            )
        };
        Ok(VerseRange { from, to })
    }
}

/// The number spelled by the leading run of digit tokens, if it is greater
/// than zero.
///
/// Spaces never split a number: `1 2` is twelve. Anything after the digits
/// is ignored.
fn leading_positive(source: &str, tokens: &[Token]) -> Option<u32> {
    let digits: String = tokens
        .iter()
        .map(|t| t.text(source))
        .take_while(|text| text.bytes().all(|b| b.is_ascii_digit()))
        .collect();
    digits.parse::<u32>().ok().filter(|n| *n > 0)
}

/// Parser state between fragments.
#[derive(Debug)]
enum State {
    /// No chapter open; the next fragment names a chapter.
    ExpectChapter,
    /// A colon just opened this chapter and no verse has been read yet.
    ChapterOpenNoVerse(ChapterData),
    /// This chapter is open and has at least one verse range.
    ExpectVerse(ChapterData),
}

/// Runs the fragment state machine over a token stream.
struct ReferenceParser<'a> {
    source: &'a str,
    tokens: &'a [Token],
    priority: Priority,
}

impl<'a> ReferenceParser<'a> {
    fn new(source: &'a str, tokens: &'a [Token], priority: Priority) -> Self {
        Self {
            source,
            tokens,
            priority,
        }
    }

    /// Splits the token stream into fragments and their terminators.
    ///
    /// The last item is always terminated by [`Terminator::End`].
    fn fragments(&self) -> Vec<(Fragment<'a>, Terminator)> {
        let mut pieces = Vec::new();
        let mut start = 0;
        for (i, token) in self.tokens.iter().enumerate() {
            let terminator = match token.kind {
                TokenKind::Colon => Terminator::Colon,
                TokenKind::Comma => Terminator::Comma,
                TokenKind::Eof => Terminator::End,
                _ => continue,
            };
            pieces.push((
                Fragment {
                    source: self.source,
                    tokens: &self.tokens[start..i],
                },
                terminator,
            ));
            if terminator == Terminator::End {
                return pieces;
            }
            start = i + 1;
        }
        // Token streams from the lexer always end in Eof; tolerate ones that don't.
        pieces.push((
            Fragment {
                source: self.source,
                tokens: &self.tokens[start..],
            },
            Terminator::End,
        ));
        pieces
    }

    fn parse(&self) -> Result<Vec<ChapterData>> {
        let mut refs = Vec::new();
        let mut state = State::ExpectChapter;

        for (fragment, terminator) in self.fragments() {
            state = self.step(state, fragment, terminator, &mut refs)?;
        }

        Ok(refs)
    }

    fn step(
        &self,
        state: State,
        fragment: Fragment<'_>,
        terminator: Terminator,
        refs: &mut Vec<ChapterData>,
    ) -> Result<State> {
        let next = match (state, terminator) {
            (State::ExpectChapter, Terminator::Colon) => {
                State::ChapterOpenNoVerse(ChapterData::new(fragment.chapter()?))
            }
            (State::ChapterOpenNoVerse(open) | State::ExpectVerse(open), Terminator::Colon) => {
                match self.priority {
                    Priority::Verse => refs.push(open),
                    Priority::Chapter => {
                        trace!(chapter = open.chapter, "chapter replaced by a later colon");
                    }
                }
                State::ChapterOpenNoVerse(ChapterData::new(fragment.chapter()?))
            }

            (State::ExpectChapter, Terminator::Comma) => {
                match self.priority {
                    Priority::Chapter => refs.push(ChapterData::new(fragment.chapter()?)),
                    Priority::Verse => {
                        trace!(fragment = fragment.text(), "no open chapter, fragment ignored");
                    }
                }
                State::ExpectChapter
            }
            (
                State::ChapterOpenNoVerse(mut open) | State::ExpectVerse(mut open),
                Terminator::Comma,
            ) => {
                open.verses.push(fragment.verse_range()?);
                match self.priority {
                    Priority::Chapter => {
                        refs.push(open);
                        State::ExpectChapter
                    }
                    Priority::Verse => State::ExpectVerse(open),
                }
            }

            (State::ExpectChapter, Terminator::End) => {
                if !fragment.is_empty() {
                    match self.priority {
                        Priority::Chapter => refs.push(ChapterData::new(fragment.chapter()?)),
                        Priority::Verse => {
                            trace!(fragment = fragment.text(), "no open chapter, fragment ignored");
                        }
                    }
                }
                State::ExpectChapter
            }
            (State::ChapterOpenNoVerse(mut open), Terminator::End) => {
                if !fragment.is_empty() {
                    open.verses.push(fragment.verse_range()?);
                    refs.push(open);
                } else if self.priority == Priority::Verse {
                    // A trailing colon asks for the chapter from its first verse.
                    open.verses.push(VerseRange::single(1));
                    refs.push(open);
                } else {
                    trace!(chapter = open.chapter, "trailing colon, chapter dropped");
                }
                State::ExpectChapter
            }
            (State::ExpectVerse(mut open), Terminator::End) => {
                if !fragment.is_empty() {
                    open.verses.push(fragment.verse_range()?);
                }
                refs.push(open);
                State::ExpectChapter
            }
        };
        Ok(next)
    }
}
