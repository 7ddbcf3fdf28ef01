//! Output formats for parsed documents
//!
//! A renderer takes a [ParsedDocument](crate::sections::ast::ParsedDocument) and shows each
//! section in order: the title as a heading, the body as markdown. The parser never
//! pre-renders anything, so every format here works from the same plain sections.
//!
//! Formats are looked up by name through the [FormatRegistry].

pub mod data;
pub mod markdown;
pub mod registry;
pub mod treeviz;

pub use crate::sections::error::FormatError;
pub use data::{JsonFormatter, YamlFormatter};
pub use markdown::MarkdownFormatter;
pub use registry::{FormatRegistry, Formatter};
pub use treeviz::TreevizFormatter;
