//! Data formats (JSON and YAML)
//!
//! Both write the document as a list of `{title, content}` records. For a report the three
//! panels become the keys `analysis`, `recommendations` and `rewrite`.

use super::registry::Formatter;
use crate::sections::ast::ParsedDocument;
use crate::sections::error::FormatError;
use crate::sections::response::AnalysisReport;

pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Pretty-printed JSON array of sections"
    }

    fn serialize(&self, doc: &ParsedDocument) -> Result<String, FormatError> {
        serde_json::to_string_pretty(doc)
            .map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn serialize_report(&self, report: &AnalysisReport) -> Result<String, FormatError> {
        serde_json::to_string_pretty(report)
            .map_err(|e| FormatError::SerializationError(e.to_string()))
    }
}

pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn name(&self) -> &str {
        "yaml"
    }

    fn description(&self) -> &str {
        "YAML sequence of sections"
    }

    fn serialize(&self, doc: &ParsedDocument) -> Result<String, FormatError> {
        serde_yaml::to_string(doc).map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn serialize_report(&self, report: &AnalysisReport) -> Result<String, FormatError> {
        serde_yaml::to_string(report)
            .map_err(|e| FormatError::SerializationError(e.to_string()))
    }
}
