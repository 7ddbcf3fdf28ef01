//! Fluent assertions for ParsedDocument

use crate::sections::ast::{ParsedDocument, Section, FALLBACK_TITLE};

/// Create an assertion builder for a document
pub fn assert_sections(doc: &ParsedDocument) -> DocumentAssertion<'_> {
    DocumentAssertion { doc }
}

pub struct DocumentAssertion<'a> {
    doc: &'a ParsedDocument,
}

impl<'a> DocumentAssertion<'a> {
    pub fn is_empty(self) -> Self {
        assert!(
            self.doc.is_empty(),
            "Expected empty document, found {} sections: {:#?}",
            self.doc.len(),
            self.doc
        );
        self
    }

    pub fn section_count(self, expected: usize) -> Self {
        assert_eq!(
            self.doc.len(),
            expected,
            "Expected {} sections, found {}: {:#?}",
            expected,
            self.doc.len(),
            self.doc
        );
        self
    }

    /// Titles in order, and nothing else.
    pub fn titles(self, expected: &[&str]) -> Self {
        assert_eq!(self.doc.titles(), expected, "Titles differ: {:#?}", self.doc);
        self
    }

    /// The document is the single fallback section holding `content`.
    pub fn is_fallback(self, content: &str) -> Self {
        let doc = self.section_count(1);
        doc.section(0, |s| {
            s.title(FALLBACK_TITLE).content(content);
        })
    }

    pub fn section<F>(self, index: usize, check: F) -> Self
    where
        F: FnOnce(SectionAssertion<'a>),
    {
        let section = self.doc.get(index).unwrap_or_else(|| {
            panic!(
                "Section index {} out of bounds (document has {} sections)",
                index,
                self.doc.len()
            )
        });
        check(SectionAssertion {
            section,
            context: format!("section[{}]", index),
        });
        self
    }
}

pub struct SectionAssertion<'a> {
    section: &'a Section,
    context: String,
}

impl<'a> SectionAssertion<'a> {
    pub fn title(self, expected: &str) -> Self {
        assert_eq!(
            self.section.title, expected,
            "{}: title mismatch",
            self.context
        );
        self
    }

    pub fn content(self, expected: &str) -> Self {
        assert_eq!(
            self.section.content, expected,
            "{}: content mismatch",
            self.context
        );
        self
    }

    pub fn content_contains(self, needle: &str) -> Self {
        assert!(
            self.section.content.contains(needle),
            "{}: expected content to contain {:?}, found {:?}",
            self.context,
            needle,
            self.section.content
        );
        self
    }

    /// Content is a `- item` bullet list with exactly these items.
    pub fn content_is_list(self, items: &[&str]) -> Self {
        let expected = items
            .iter()
            .map(|item| format!("- {}", item))
            .collect::<Vec<_>>()
            .join("\n");
        assert_eq!(
            self.section.content, expected,
            "{}: content is not the expected list",
            self.context
        );
        self
    }

    pub fn content_is_empty(self) -> Self {
        assert!(
            self.section.content.is_empty(),
            "{}: expected empty content, found {:?}",
            self.context,
            self.section.content
        );
        self
    }
}
