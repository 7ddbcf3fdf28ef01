//! SectionParser
//!
//!     Turns one block of text into a [ParsedDocument]:
//!
//!         1. Empty or whitespace-only text gives an empty document.
//!         2. Every scanned title/body pair becomes a section. Titles and bodies are trimmed,
//!            a blank title becomes the untitled sentinel, and a bracketed body is offered to
//!            list coercion.
//!         3. If nothing was recognized, the whole trimmed text becomes a single section under
//!            the fallback title.
//!
//!     The parser holds only its options. It never fails and never mutates anything outside
//!     the call, so one instance can be shared freely between threads.

use super::list_coercion::coerce_list;
use super::scanner::scan;
use crate::sections::ast::{ParsedDocument, Section, FALLBACK_TITLE, UNTITLED_TITLE};

/// Knobs for [SectionParser]. The defaults are the canonical behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserOptions {
    /// Rewrite bracketed array bodies as bullet lists.
    pub coerce_lists: bool,
    /// Title of the single section emitted when no title is recognized.
    pub fallback_title: String,
    /// Title used when a title capture is blank after trimming.
    pub untitled_title: String,
    /// Marker placed before each coerced list item.
    pub bullet_marker: String,
}

impl Default for ParserOptions {
    fn default() -> Self {
        ParserOptions {
            coerce_lists: true,
            fallback_title: FALLBACK_TITLE.to_string(),
            untitled_title: UNTITLED_TITLE.to_string(),
            bullet_marker: "-".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SectionParser {
    options: ParserOptions,
}

impl SectionParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ParserOptions) -> Self {
        SectionParser { options }
    }

    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// Parse a possibly absent text. Absent is the same as empty.
    pub fn parse_optional(&self, text: Option<&str>) -> ParsedDocument {
        self.parse(text.unwrap_or_default())
    }

    /// Parse a text into its sections.
    pub fn parse(&self, text: &str) -> ParsedDocument {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return ParsedDocument::new();
        }

        let mut doc: ParsedDocument = scan(text)
            .map(|raw| self.build_section(raw.title, raw.content))
            .collect();

        if doc.is_empty() {
            log::debug!(
                "no titles recognized, using '{}' for {} bytes",
                self.options.fallback_title,
                trimmed.len()
            );
            doc.push(Section::new(self.options.fallback_title.clone(), trimmed));
        }

        doc
    }

    fn build_section(&self, raw_title: &str, raw_content: &str) -> Section {
        let title = match raw_title.trim() {
            "" => self.options.untitled_title.clone(),
            title => title.to_string(),
        };
        let content = raw_content.trim();
        log::trace!("section '{}' ({} bytes)", title, content.len());

        let content = if self.options.coerce_lists {
            coerce_list(content)
                .render(&self.options.bullet_marker)
                .unwrap_or_else(|| content.to_string())
        } else {
            content.to_string()
        };

        Section { title, content }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_text_is_empty() {
        let parser = SectionParser::new();
        assert!(parser.parse_optional(None).is_empty());
        assert!(parser.parse_optional(Some("   \n\t")).is_empty());
    }

    #[test]
    fn test_fallback_uses_trimmed_text() {
        let doc = SectionParser::new().parse("  plain words\n");
        assert_eq!(doc.sections, vec![Section::new("Notes", "plain words")]);
    }

    #[test]
    fn test_blank_title_becomes_untitled() {
        let parser = SectionParser::new();
        let section = parser.build_section("   ", " body ");
        assert_eq!(section, Section::new("Untitled", "body"));
    }

    #[test]
    fn test_coercion_can_be_disabled() {
        let parser = SectionParser::with_options(ParserOptions {
            coerce_lists: false,
            ..ParserOptions::default()
        });
        let doc = parser.parse("Suggestions: ['a', 'b']");
        assert_eq!(doc.sections[0].content, "['a', 'b']");
    }

    #[test]
    fn test_custom_sentinels_and_marker() {
        let parser = SectionParser::with_options(ParserOptions {
            fallback_title: "Summary".to_string(),
            bullet_marker: "*".to_string(),
            ..ParserOptions::default()
        });
        assert_eq!(parser.parse("no titles").sections[0].title, "Summary");
        assert_eq!(
            parser.parse("Hashtags: ['#a', '#b']").sections[0].content,
            "* #a\n* #b"
        );
    }
}
