//! List Coercion
//!
//!     Generated bodies often carry a list serialized as a bracketed literal, for example
//!     `['Add examples', 'Shorten intro']`. When a body has that shape we try to read it as an
//!     array and show it as a markdown bullet list instead.
//!
//!     This is best effort. Quoting is relaxed (single quotes are read as double quotes) and
//!     the result must be a JSON array. Anything else leaves the body exactly as it was, so a
//!     failed attempt is indistinguishable from not trying.
//!
//!     Item rendering: strings are used verbatim, every other value is written as compact
//!     JSON (`1`, `true`, `null`, `["a","b"]`).

use serde_json::Value;

/// Outcome of a coercion attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Coercion {
    /// The body was an array; items in source order.
    Parsed(Vec<String>),
    /// The body is not a readable array and must be kept as is.
    Unchanged,
}

impl Coercion {
    /// Render parsed items as a bullet list, one `<marker> <item>` per line.
    ///
    /// Returns None for [Coercion::Unchanged].
    pub fn render(&self, marker: &str) -> Option<String> {
        match self {
            Coercion::Parsed(items) => Some(
                items
                    .iter()
                    .map(|item| format!("{} {}", marker, item))
                    .collect::<Vec<_>>()
                    .join("\n"),
            ),
            Coercion::Unchanged => None,
        }
    }
}

/// True when the (already trimmed) body starts with `[` and ends with `]`.
pub fn is_bracketed(content: &str) -> bool {
    content.len() >= 2 && content.starts_with('[') && content.ends_with(']')
}

/// Try to read a bracketed body as an array.
pub fn coerce_list(content: &str) -> Coercion {
    if !is_bracketed(content) {
        return Coercion::Unchanged;
    }

    let relaxed = content.replace('\'', "\"");
    match serde_json::from_str::<Vec<Value>>(&relaxed) {
        Ok(values) => Coercion::Parsed(values.into_iter().map(render_item).collect()),
        Err(err) => {
            log::debug!("bracketed body kept verbatim: {}", err);
            Coercion::Unchanged
        }
    }
}

fn render_item(value: Value) -> String {
    match value {
        Value::String(text) => text,
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_quoted_items() {
        let coercion = coerce_list("['Add examples', 'Shorten intro']");
        assert_eq!(
            coercion,
            Coercion::Parsed(vec!["Add examples".into(), "Shorten intro".into()])
        );
        assert_eq!(
            coercion.render("-").as_deref(),
            Some("- Add examples\n- Shorten intro")
        );
    }

    #[test]
    fn test_double_quoted_items() {
        let coercion = coerce_list(r##"["#SEO", "#Growth"]"##);
        assert_eq!(
            coercion.render("-").as_deref(),
            Some("- #SEO\n- #Growth")
        );
    }

    #[test]
    fn test_scalar_items() {
        let coercion = coerce_list("[1, 2.5, true, null]");
        assert_eq!(
            coercion.render("-").as_deref(),
            Some("- 1\n- 2.5\n- true\n- null")
        );
    }

    #[test]
    fn test_empty_array_renders_empty() {
        assert_eq!(coerce_list("[]").render("-").as_deref(), Some(""));
    }

    #[test]
    fn test_unterminated_is_unchanged() {
        assert_eq!(coerce_list("[unterminated"), Coercion::Unchanged);
    }

    #[test]
    fn test_bare_words_are_unchanged() {
        assert_eq!(coerce_list("[Add examples, Shorten intro]"), Coercion::Unchanged);
    }

    #[test]
    fn test_apostrophe_breaks_relaxed_quoting() {
        assert_eq!(coerce_list("['Don't stop']"), Coercion::Unchanged);
    }

    #[test]
    fn test_not_bracketed() {
        assert_eq!(coerce_list("Add examples"), Coercion::Unchanged);
        assert_eq!(coerce_list("["), Coercion::Unchanged);
        assert_eq!(Coercion::Unchanged.render("-"), None);
    }
}
