//! Treeviz formatter for parsed documents
//!
//! One line per node, nesting shown as 2 spaces per level, labels truncated to 30
//! characters. Handy for eyeballing how a text was segmented.
//!
//!     ⧉ Document (2 sections)
//!       § Tone
//!         ↵ Formal
//!       § Hashtags
//!         • #SEO
//!         • #Growth
//!
//! Icons
//!     Document: ⧉
//!     Section: §
//!     Body line: ↵
//!     Bullet line: •

use super::registry::Formatter;
use crate::sections::ast::ParsedDocument;
use crate::sections::error::FormatError;

const LABEL_MAX_CHARS: usize = 30;

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

/// Single-line label: line breaks inside titles are shown as spaces.
fn label(s: &str) -> String {
    truncate(&s.split_whitespace().collect::<Vec<_>>().join(" "), LABEL_MAX_CHARS)
}

pub fn to_treeviz_str(doc: &ParsedDocument) -> String {
    let noun = if doc.len() == 1 { "section" } else { "sections" };
    let mut out = format!("⧉ Document ({} {})\n", doc.len(), noun);

    for section in doc {
        out.push_str(&format!("  § {}\n", label(&section.title)));
        for line in section.content.lines().filter(|l| !l.trim().is_empty()) {
            let line = line.trim();
            match line.strip_prefix("- ") {
                Some(item) => out.push_str(&format!("    • {}\n", label(item))),
                None => out.push_str(&format!("    ↵ {}\n", label(line))),
            }
        }
    }

    out
}

pub struct TreevizFormatter;

impl Formatter for TreevizFormatter {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn description(&self) -> &str {
        "One line per section and body line"
    }

    fn serialize(&self, doc: &ParsedDocument) -> Result<String, FormatError> {
        Ok(to_treeviz_str(doc))
    }
}
