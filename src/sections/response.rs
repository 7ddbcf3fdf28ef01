//! Analysis responses
//!
//! An analysis carries three independent text fields: the analysis itself, the
//! recommendations and the rewritten post. Each one is parsed on its own into a
//! [ParsedDocument]; nothing is shared between them.
//!
//! Two sources are supported:
//!
//!     - [AnalysisResponse::from_json]: the response body of the analysis endpoint, where the
//!       fields are already strings. Missing or empty fields get a placeholder text.
//!     - [AnalysisResponse::from_model_output]: the raw generator output, which is flattened
//!       first (see [normalize]).

pub mod normalize;

use crate::sections::ast::ParsedDocument;
use crate::sections::error::ResponseError;
use crate::sections::parsing::SectionParser;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const NO_ANALYSIS_RETURNED: &str = "No analysis returned.";
pub const NO_RECOMMENDATIONS_RETURNED: &str = "No recommendations returned.";
pub const NO_REWRITE_RETURNED: &str = "No rewrite returned.";

pub const NO_ANALYSIS_PROVIDED: &str = "No analysis provided.";
pub const NO_RECOMMENDATIONS_PROVIDED: &str = "No recommendations provided.";
pub const NO_REWRITE_PROVIDED: &str = "No rewrite provided.";

/// The three text fields of one analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extracted_text: Option<String>,
    pub analysis: String,
    pub recommendations: String,
    pub rewrite: String,
}

#[derive(Debug, Default, Deserialize)]
struct ResponseBody {
    #[serde(default)]
    extracted_text: Option<String>,
    #[serde(default)]
    analysis: Option<String>,
    #[serde(default)]
    recommendations: Option<String>,
    #[serde(default)]
    rewrite: Option<String>,
}

fn or_placeholder(field: Option<String>, placeholder: &str) -> String {
    field
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| placeholder.to_string())
}

impl AnalysisResponse {
    /// Decode an analysis endpoint response body.
    pub fn from_json(body: &str) -> Result<Self, ResponseError> {
        let body: ResponseBody = serde_json::from_str(body)?;
        Ok(AnalysisResponse {
            extracted_text: body.extracted_text,
            analysis: or_placeholder(body.analysis, NO_ANALYSIS_RETURNED),
            recommendations: or_placeholder(body.recommendations, NO_RECOMMENDATIONS_RETURNED),
            rewrite: or_placeholder(body.rewrite, NO_REWRITE_RETURNED),
        })
    }

    /// Normalize raw generator output (optionally fenced JSON) into the three fields.
    pub fn from_model_output(raw: &str) -> Result<Self, ResponseError> {
        let cleaned = normalize::strip_code_fences(raw);
        let value: Value = serde_json::from_str(&cleaned)?;
        let fields = value
            .as_object()
            .ok_or_else(|| ResponseError::NotAnObject(json_kind(&value)))?;

        let field = |key: &str, placeholder: &str| {
            fields
                .get(key)
                .filter(|value| !value.is_null())
                .map(normalize::flatten_field)
                .unwrap_or_else(|| placeholder.to_string())
        };

        Ok(AnalysisResponse {
            extracted_text: None,
            analysis: field("analysis", NO_ANALYSIS_PROVIDED),
            recommendations: field("recommendations", NO_RECOMMENDATIONS_PROVIDED),
            rewrite: field("rewrite", NO_REWRITE_PROVIDED),
        })
    }

    /// Parse each field independently.
    pub fn parse(&self, parser: &SectionParser) -> AnalysisReport {
        AnalysisReport {
            analysis: parser.parse(&self.analysis),
            recommendations: parser.parse(&self.recommendations),
            rewrite: parser.parse(&self.rewrite),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Parsed documents for the three fields of an analysis.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AnalysisReport {
    pub analysis: ParsedDocument,
    pub recommendations: ParsedDocument,
    pub rewrite: ParsedDocument,
}

impl AnalysisReport {
    /// Display panels in order, with their headings.
    pub fn panels(&self) -> [(&'static str, &ParsedDocument); 3] {
        [
            ("Post Analysis", &self.analysis),
            ("Recommendations", &self.recommendations),
            ("AI Rewrite", &self.rewrite),
        ]
    }
}
