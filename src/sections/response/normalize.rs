//! Model output normalization
//!
//! The generator is asked for a JSON object with `analysis`, `recommendations` and
//! `rewrite` keys, but each value may come back as a string, a list or a nested object, and
//! the whole thing is often wrapped in a markdown code fence. This module flattens each value
//! into the plain text the section parser expects:
//!
//!     - object: one `Key Title: value` line per entry (underscores in keys become spaces)
//!     - array:  one line per item
//!     - scalar: its text
//!
//! Nested values inside an object line are written as Python-style literals, e.g.
//! `Hashtags: ['#SEO', '#Growth']`. That bracketed shape is exactly what list coercion turns
//! back into a bullet list once the line is parsed as a section.

use serde_json::Value;

/// Remove ```json / ``` fences and surrounding whitespace.
pub fn strip_code_fences(raw: &str) -> String {
    raw.replace("```json", "").replace("```", "").trim().to_string()
}

/// Flatten one top-level field into display text.
pub fn flatten_field(value: &Value) -> String {
    match value {
        Value::Object(entries) => entries
            .iter()
            .map(|(key, value)| format!("{}: {}", title_case(key), display(value)))
            .collect::<Vec<_>>()
            .join("\n"),
        Value::Array(items) => items.iter().map(display).collect::<Vec<_>>().join("\n"),
        other => display(other),
    }
}

/// `snake_case` key to `Title Case` label.
///
/// Every run of letters gets an uppercase first letter and lowercase rest; anything that is
/// not a letter starts a new run.
pub fn title_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut in_word = false;
    for c in key.chars() {
        let c = if c == '_' { ' ' } else { c };
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

/// Display text of a value: strings as is, everything else as a literal.
fn display(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => literal(other),
    }
}

/// Python-style literal of a value.
fn literal(value: &Value) -> String {
    match value {
        Value::Null => "None".to_string(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(text) => quote(text),
        Value::Array(items) => format!(
            "[{}]",
            items.iter().map(literal).collect::<Vec<_>>().join(", ")
        ),
        Value::Object(entries) => format!(
            "{{{}}}",
            entries
                .iter()
                .map(|(k, v)| format!("{}: {}", quote(k), literal(v)))
                .collect::<Vec<_>>()
                .join(", ")
        ),
    }
}

/// Single quotes unless the text has a single quote and no double quote.
fn quote(text: &str) -> String {
    let delimiter = if text.contains('\'') && !text.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut out = String::with_capacity(text.len() + 2);
    out.push(delimiter);
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == delimiter => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out.push(delimiter);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_strip_code_fences() {
        assert_eq!(strip_code_fences("```json\n{\"a\": 1}\n```\n"), "{\"a\": 1}");
        assert_eq!(strip_code_fences("  {}  "), "{}");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("seo_effectiveness"), "Seo Effectiveness");
        assert_eq!(title_case("calls_to_action"), "Calls To Action");
        assert_eq!(title_case("CTAs"), "Ctas");
        assert_eq!(title_case("tone"), "Tone");
    }

    #[test]
    fn test_object_becomes_titled_lines() {
        let value = json!({
            "tone": "Formal",
            "hashtags": ["#SEO", "#Growth"],
            "score": 7
        });
        assert_eq!(
            flatten_field(&value),
            "Tone: Formal\nHashtags: ['#SEO', '#Growth']\nScore: 7"
        );
    }

    #[test]
    fn test_array_becomes_lines() {
        let value = json!(["Add examples", ["nested", true], null]);
        assert_eq!(
            flatten_field(&value),
            "Add examples\n['nested', True]\nNone"
        );
    }

    #[test]
    fn test_scalar_is_text() {
        assert_eq!(flatten_field(&json!("Plain rewrite")), "Plain rewrite");
        assert_eq!(flatten_field(&json!(false)), "False");
    }

    #[test]
    fn test_quote_picks_delimiter() {
        assert_eq!(quote("plain"), "'plain'");
        assert_eq!(quote("don't"), "\"don't\"");
        assert_eq!(quote("both ' and \""), "'both \\' and \"'");
        assert_eq!(literal(&json!({"k": [1]})), "{'k': [1]}");
    }
}
