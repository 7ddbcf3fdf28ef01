//! Section Scanner
//!
//!     Walks the text left to right and yields one raw (title, body) pair per recognized
//!     title. Matches never overlap: the next search always starts where the previous body
//!     ended, and a consumed position is never looked at again.
//!
//!     Body boundaries:
//!
//!         - The body starts after the title colon and any whitespace that follows it
//!           (line breaks included).
//!         - The body ends at the earliest of: the next line break that is followed by a full
//!           title, or the start of the trailing whitespace of the text.
//!
//!     The body is the shortest span that satisfies those rules, so one section can never
//!     swallow the title of the next one.
//!
//!     Raw pairs are borrowed slices of the source and are not trimmed here.

use super::grammar::{NEXT_TITLE_REGEX, SECTION_START_REGEX};
use std::ops::Range;

/// A title/body pair as found in the source, before normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSection<'a> {
    pub title: &'a str,
    pub content: &'a str,
    /// Byte range from the start of the title match to the end of the body.
    pub span: Range<usize>,
}

/// Iterator over the raw sections of a text.
pub struct SectionScanner<'a> {
    source: &'a str,
    position: usize,
    trailing_whitespace_start: usize,
}

impl<'a> SectionScanner<'a> {
    pub fn new(source: &'a str) -> Self {
        SectionScanner {
            source,
            position: 0,
            trailing_whitespace_start: source.trim_end().len(),
        }
    }

    /// Where the body that starts at `content_start` ends.
    fn content_end(&self, content_start: usize) -> usize {
        let tail = self.trailing_whitespace_start.max(content_start);
        match NEXT_TITLE_REGEX.find_at(self.source, content_start) {
            Some(next) => next.start().min(tail),
            None => tail,
        }
    }
}

impl<'a> Iterator for SectionScanner<'a> {
    type Item = RawSection<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.position >= self.source.len() {
            return None;
        }

        let captures = SECTION_START_REGEX.captures_at(self.source, self.position)?;
        let matched = captures.get(0)?;
        let title = captures.name("title")?;

        let content_start = skip_whitespace(self.source, matched.end());
        let content_end = self.content_end(content_start);
        self.position = content_end;

        Some(RawSection {
            title: title.as_str(),
            content: &self.source[content_start..content_end],
            span: matched.start()..content_end,
        })
    }
}

/// Byte offset of the first non-whitespace character at or after `from`.
fn skip_whitespace(source: &str, from: usize) -> usize {
    source[from..]
        .char_indices()
        .find(|(_, c)| !c.is_whitespace())
        .map(|(i, _)| from + i)
        .unwrap_or(source.len())
}

/// Scan `source` into raw sections.
pub fn scan(source: &str) -> SectionScanner<'_> {
    SectionScanner::new(source)
}
