//! Scripture reference parsing.
//!
//! A reference is one or more comma-separated segments, each either a single
//! verse (`John 3:16`) or a verse range inside one chapter (`Psalm 23:1-3`).
//! Book names are taken as written; nothing here knows the canon.

use std::fmt;

use crate::constants::MAX_RANGE_VERSES;
use crate::error::{Error, FormatReason, Result};

/// One verse of one chapter, the unit the comparator looks up.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VerseRef {
    /// Book and chapter as written, e.g. `"John 3"`.
    pub book_chapter: String,
    /// Verse number within the chapter.
    pub verse: u32,
}

impl VerseRef {
    /// Create a verse reference.
    pub fn new(book_chapter: impl Into<String>, verse: u32) -> Self {
        Self {
            book_chapter: book_chapter.into(),
            verse,
        }
    }

    /// Corpus lookup key, `"Book Chapter:Verse"`.
    pub fn key(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for VerseRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.book_chapter, self.verse)
    }
}

/// A single parsed segment: one verse or an inclusive range in one chapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptureRef {
    /// Book and chapter as written.
    pub book_chapter: String,
    /// Starting verse.
    pub start_verse: u32,
    /// Ending verse (same as start for single verse).
    pub end_verse: u32,
}

impl ScriptureRef {
    /// Create a reference for a single verse.
    pub fn single(book_chapter: impl Into<String>, verse: u32) -> Self {
        Self {
            book_chapter: book_chapter.into(),
            start_verse: verse,
            end_verse: verse,
        }
    }

    /// Create a reference for a verse range.
    pub fn range(book_chapter: impl Into<String>, start: u32, end: u32) -> Self {
        Self {
            book_chapter: book_chapter.into(),
            start_verse: start,
            end_verse: end,
        }
    }

    /// Expand into one [`VerseRef`] per verse, ascending.
    pub fn verses(&self) -> impl Iterator<Item = VerseRef> + '_ {
        (self.start_verse..=self.end_verse)
            .map(|verse| VerseRef::new(self.book_chapter.as_str(), verse))
    }

    /// Format as a display string (e.g., "John 3:16-18").
    pub fn display(&self) -> String {
        if self.start_verse == self.end_verse {
            format!("{}:{}", self.book_chapter, self.start_verse)
        } else {
            format!("{}:{}-{}", self.book_chapter, self.start_verse, self.end_verse)
        }
    }
}

/// Parse a full reference like `"John 3:16-18, Psalm 23:1-3"` into verses.
///
/// Ranges are expanded in ascending order and segments keep their input
/// order. The first malformed segment aborts the whole parse.
pub fn parse_reference(text: &str) -> Result<Vec<VerseRef>> {
    let mut verses = Vec::new();
    for segment in text.split(',') {
        let parsed = parse_segment(segment)?;
        verses.extend(parsed.verses());
    }
    tracing::debug!("Parsed {text:?} into {} verses", verses.len());
    Ok(verses)
}

/// Parse one comma-free segment like `"Psalm 23:1-3"`.
pub fn parse_segment(segment: &str) -> Result<ScriptureRef> {
    let segment = segment.trim();
    let fail = |reason| Error::format(segment, reason);

    if segment.is_empty() {
        return Err(fail(FormatReason::EmptySegment));
    }

    let (book_chapter, verse_spec) = segment
        .rsplit_once(':')
        .ok_or_else(|| fail(FormatReason::MissingColon))?;
    let book_chapter = book_chapter.trim();
    if book_chapter.is_empty() {
        return Err(fail(FormatReason::MissingBookChapter));
    }

    let Some((start, end)) = verse_spec.split_once('-') else {
        let verse = parse_verse(verse_spec).map_err(fail)?;
        return Ok(ScriptureRef::single(book_chapter, verse));
    };
    if end.contains('-') {
        return Err(fail(FormatReason::TooManyBounds));
    }

    let start = parse_verse(start).map_err(fail)?;
    let end = parse_verse(end).map_err(fail)?;
    if start > end {
        return Err(fail(FormatReason::ReversedRange { start, end }));
    }
    if end - start >= MAX_RANGE_VERSES {
        return Err(fail(FormatReason::RangeTooLarge { start, end }));
    }
    Ok(ScriptureRef::range(book_chapter, start, end))
}

fn parse_verse(text: &str) -> std::result::Result<u32, FormatReason> {
    let text = text.trim();
    text.parse()
        .map_err(|_| FormatReason::InvalidVerse(text.to_string()))
}
