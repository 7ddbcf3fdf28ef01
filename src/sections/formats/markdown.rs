//! Markdown rendering
//!
//! Each section becomes a heading followed by its body. Bodies are already markdown (coerced
//! lists are bullet lists), so they are written through untouched.

use super::registry::Formatter;
use crate::sections::ast::ParsedDocument;
use crate::sections::error::FormatError;

pub const DEFAULT_HEADING_LEVEL: usize = 3;

pub struct MarkdownFormatter {
    heading_level: usize,
}

impl MarkdownFormatter {
    /// Section headings at `level`, clamped to the markdown range 1..=6.
    pub fn new(level: usize) -> Self {
        MarkdownFormatter {
            heading_level: level.clamp(1, 6),
        }
    }

    pub fn heading_level(&self) -> usize {
        self.heading_level
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_HEADING_LEVEL)
    }
}

impl Formatter for MarkdownFormatter {
    fn name(&self) -> &str {
        "markdown"
    }

    fn description(&self) -> &str {
        "Section titles as headings, bodies as markdown"
    }

    fn serialize(&self, doc: &ParsedDocument) -> Result<String, FormatError> {
        let hashes = "#".repeat(self.heading_level);
        let blocks: Vec<String> = doc
            .iter()
            .map(|section| {
                let mut block = format!("{} {}\n", hashes, section.title);
                if !section.content.is_empty() {
                    block.push('\n');
                    block.push_str(&section.content);
                    block.push('\n');
                }
                block
            })
            .collect();
        Ok(blocks.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::ast::Section;

    #[test]
    fn test_heading_and_body() {
        let doc = ParsedDocument::with_sections(vec![
            Section::new("Tone", "Formal"),
            Section::new("Hashtags", "- #a\n- #b"),
        ]);
        let out = MarkdownFormatter::default().serialize(&doc).unwrap();
        assert_eq!(out, "### Tone\n\nFormal\n\n### Hashtags\n\n- #a\n- #b\n");
    }

    #[test]
    fn test_empty_body_is_heading_only() {
        let doc = ParsedDocument::with_sections(vec![Section::new("Tone", "")]);
        let out = MarkdownFormatter::new(5).serialize(&doc).unwrap();
        assert_eq!(out, "##### Tone\n");
    }

    #[test]
    fn test_heading_level_is_clamped() {
        assert_eq!(MarkdownFormatter::new(0).heading_level(), 1);
        assert_eq!(MarkdownFormatter::new(9).heading_level(), 6);
    }

    #[test]
    fn test_empty_document() {
        let out = MarkdownFormatter::default()
            .serialize(&ParsedDocument::new())
            .unwrap();
        assert_eq!(out, "");
    }
}
