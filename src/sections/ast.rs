//! Section and ParsedDocument
//!
//!     A parsed document is a flat, ordered list of sections. There is no nesting: each
//!     section is a title plus the body text that followed it in the source, in the order
//!     the titles appeared.
//!
//!     Sections are plain owned values. Every parse produces a fresh document, nothing is
//!     cached or shared between calls.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Title used when the input has content but no recognizable title at all.
pub const FALLBACK_TITLE: &str = "Notes";

/// Title used when a title capture trims down to nothing.
pub const UNTITLED_TITLE: &str = "Untitled";

/// A titled span of text extracted from a larger document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    pub content: String,
}

impl Section {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Section {
            title: title.into(),
            content: content.into(),
        }
    }

    /// True when the body is empty (title only).
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.content)
    }
}

/// The ordered sequence of sections produced from one input text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParsedDocument {
    pub sections: Vec<Section>,
}

impl ParsedDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sections(sections: Vec<Section>) -> Self {
        ParsedDocument { sections }
    }

    pub fn push(&mut self, section: Section) {
        self.sections.push(section);
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Section> {
        self.sections.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Section> {
        self.sections.iter()
    }

    /// Titles in source order.
    pub fn titles(&self) -> Vec<&str> {
        self.sections.iter().map(|s| s.title.as_str()).collect()
    }

    pub fn into_sections(self) -> Vec<Section> {
        self.sections
    }
}

impl<'a> IntoIterator for &'a ParsedDocument {
    type Item = &'a Section;
    type IntoIter = std::slice::Iter<'a, Section>;

    fn into_iter(self) -> Self::IntoIter {
        self.sections.iter()
    }
}

impl IntoIterator for ParsedDocument {
    type Item = Section;
    type IntoIter = std::vec::IntoIter<Section>;

    fn into_iter(self) -> Self::IntoIter {
        self.sections.into_iter()
    }
}

impl FromIterator<Section> for ParsedDocument {
    fn from_iter<I: IntoIterator<Item = Section>>(iter: I) -> Self {
        ParsedDocument {
            sections: iter.into_iter().collect(),
        }
    }
}
