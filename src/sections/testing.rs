//! Testing utilities for parsed documents
//!
//!     Tests assert on documents through the fluent API in [section_assertions] instead of
//!     indexing into `doc.sections` by hand. The assertion messages carry the section index
//!     and the full document, which makes a failing segmentation easy to read, and tests keep
//!     working if the document type grows more fields.
//!
//!     ```rust,ignore
//!     use postcraft::sections::parsing::parse_sections;
//!     use postcraft::sections::testing::assert_sections;
//!
//!     let doc = parse_sections("Tone: Formal\nHashtags: ['#a', '#b']");
//!
//!     assert_sections(&doc)
//!         .section_count(2)
//!         .titles(&["Tone", "Hashtags"])
//!         .section(1, |s| {
//!             s.content_is_list(&["#a", "#b"]);
//!         });
//!     ```

pub mod section_assertions;

pub use section_assertions::{assert_sections, DocumentAssertion, SectionAssertion};
