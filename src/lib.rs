//! # postcraft
//!
//! Turns the free-form text produced by the post analysis service into an ordered list of
//! titled sections that a renderer can show as heading + markdown body.
//!
//! File Layout
//!
//! src/sections
//!   ├── ast         Section and ParsedDocument
//!   ├── parsing     Title grammar, scanner, list coercion and the SectionParser
//!   ├── response    The three text fields of an analysis response (and raw model output)
//!   ├── formats     Renderers for parsed documents (markdown, json, yaml, treeviz)
//!   ├── config      Layered configuration
//!   └── testing     Fluent assertions used by the tests
//!
//! The parser is the only place with decision logic. Everything around it only moves strings
//! in and rendered text out. For testing guidelines, see the [testing module](sections::testing).

pub mod sections;

pub use sections::ast::{ParsedDocument, Section};
pub use sections::parsing::{parse_sections, SectionParser};
