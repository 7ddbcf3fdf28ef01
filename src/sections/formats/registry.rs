//! Format registry for document rendering
//!
//! This module provides a pluggable registry of output formats. Each format implements the
//! `Formatter` trait and can be registered with `FormatRegistry`.

use crate::sections::ast::ParsedDocument;
use crate::sections::error::FormatError;
use crate::sections::response::AnalysisReport;
use std::collections::HashMap;

/// Trait for document formatters
///
/// Implementors provide a way to render a ParsedDocument to a string.
pub trait Formatter: Send + Sync {
    /// The name of this format (e.g., "markdown", "json")
    fn name(&self) -> &str;

    /// Render a single document
    fn serialize(&self, doc: &ParsedDocument) -> Result<String, FormatError>;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// Render the three panels of a report one after another, each under its panel name.
    fn serialize_report(&self, report: &AnalysisReport) -> Result<String, FormatError> {
        let mut out = String::new();
        for (index, (panel, doc)) in report.panels().into_iter().enumerate() {
            if index > 0 {
                out.push('\n');
            }
            out.push_str(&format!("## {}\n\n", panel));
            out.push_str(&self.serialize(doc)?);
        }
        Ok(out)
    }
}

/// Registry of document formatters
pub struct FormatRegistry {
    formatters: HashMap<String, Box<dyn Formatter>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formatters: HashMap::new(),
        }
    }

    /// Register a formatter
    ///
    /// If a formatter with the same name already exists, it will be replaced.
    pub fn register<F: Formatter + 'static>(&mut self, formatter: F) {
        self.formatters
            .insert(formatter.name().to_string(), Box::new(formatter));
    }

    /// Get a formatter by name
    pub fn get(&self, name: &str) -> Option<&dyn Formatter> {
        self.formatters.get(name).map(|f| f.as_ref())
    }

    /// Check if a format exists
    pub fn has(&self, name: &str) -> bool {
        self.formatters.contains_key(name)
    }

    fn lookup(&self, format: &str) -> Result<&dyn Formatter, FormatError> {
        self.get(format)
            .ok_or_else(|| FormatError::FormatNotFound(format.to_string()))
    }

    /// Render a document using the specified format
    pub fn serialize(&self, doc: &ParsedDocument, format: &str) -> Result<String, FormatError> {
        self.lookup(format)?.serialize(doc)
    }

    /// Render a whole analysis report using the specified format
    pub fn serialize_report(
        &self,
        report: &AnalysisReport,
        format: &str,
    ) -> Result<String, FormatError> {
        self.lookup(format)?.serialize_report(report)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formatters.keys().cloned().collect();
        names.sort();
        names
    }

    /// Create a registry with default formatters
    pub fn with_defaults() -> Self {
        Self::with_heading_level(super::markdown::DEFAULT_HEADING_LEVEL)
    }

    /// Default formatters, with markdown section headings at `level`
    pub fn with_heading_level(level: usize) -> Self {
        let mut registry = Self::new();

        registry.register(super::MarkdownFormatter::new(level));
        registry.register(super::JsonFormatter);
        registry.register(super::YamlFormatter);
        registry.register(super::TreevizFormatter);

        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::ast::Section;

    // Test formatter
    struct TitlesFormatter;
    impl Formatter for TitlesFormatter {
        fn name(&self) -> &str {
            "titles"
        }

        fn serialize(&self, doc: &ParsedDocument) -> Result<String, FormatError> {
            Ok(doc.titles().join(","))
        }
    }

    fn sample() -> ParsedDocument {
        ParsedDocument::with_sections(vec![
            Section::new("Tone", "Formal"),
            Section::new("Clarity", "High"),
        ])
    }

    #[test]
    fn test_registry_register_and_get() {
        let mut registry = FormatRegistry::new();
        registry.register(TitlesFormatter);

        assert!(registry.has("titles"));
        assert!(registry.get("titles").is_some());
        assert!(!registry.has("nonexistent"));
    }

    #[test]
    fn test_registry_serialize() {
        let mut registry = FormatRegistry::new();
        registry.register(TitlesFormatter);

        assert_eq!(registry.serialize(&sample(), "titles").unwrap(), "Tone,Clarity");
    }

    #[test]
    fn test_registry_format_not_found() {
        let registry = FormatRegistry::new();
        let result = registry.serialize(&sample(), "nonexistent");
        assert_eq!(
            result,
            Err(FormatError::FormatNotFound("nonexistent".to_string()))
        );
    }

    #[test]
    fn test_registry_defaults() {
        let registry = FormatRegistry::with_defaults();
        assert_eq!(
            registry.list_formats(),
            vec!["json", "markdown", "treeviz", "yaml"]
        );
    }

    #[test]
    fn test_default_report_layout() {
        let report = AnalysisReport {
            analysis: sample(),
            recommendations: ParsedDocument::new(),
            rewrite: ParsedDocument::new(),
        };
        let out = TitlesFormatter.serialize_report(&report).unwrap();
        assert_eq!(
            out,
            "## Post Analysis\n\nTone,Clarity\n## Recommendations\n\n\n## AI Rewrite\n\n"
        );
    }
}
