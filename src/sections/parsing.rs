//! Parsing
//!
//! Text in, sections out. The parse is split in three small stages:
//!
//!     - [grammar]: the title patterns and their length bounds
//!     - [scanner]: the left to right, non-overlapping title/body scan
//!     - [list_coercion]: best-effort rewrite of bracketed bodies as bullet lists
//!
//! [parser::SectionParser] ties them together and applies the empty-input and fallback rules.
//! Parsing never fails: every input maps to a (possibly empty) [ParsedDocument].

pub mod grammar;
pub mod list_coercion;
pub mod parser;
pub mod scanner;

pub use list_coercion::{coerce_list, Coercion};
pub use parser::{ParserOptions, SectionParser};

use crate::sections::ast::ParsedDocument;

/// Parse `text` with the default options.
pub fn parse_sections(text: &str) -> ParsedDocument {
    SectionParser::new().parse(text)
}
