//! Title Grammar
//!
//! A title is an uppercase ASCII letter followed by a run of title characters, closed by a
//! colon:
//!
//!     <title>  = [A-Z] <title-char>{1,100} ":"
//!     <title-char> = ASCII letter | digit | "_" | whitespace | "/" | "&" | "+" | "-"
//!
//! so a full title is 2 to 101 characters long. The upper bound keeps a malformed body from
//! being read as one giant title, and keeps the scan linear: no candidate title is ever
//! longer than [MAX_TITLE_LEN] characters.
//!
//! Titles only count at the start of the text or right after a line break. Whitespace in the
//! title character set includes line breaks, so a short uncolonned line directly above a
//! title line becomes part of that title.
//!
//! The regex crate has no look-around, so the grammar is split in two patterns: one that
//! finds the next title where a section starts, and one that finds the line break that ends
//! a section body.

use once_cell::sync::Lazy;
use regex::Regex;

/// Shortest title, counting the leading uppercase letter.
pub const MIN_TITLE_LEN: usize = 2;

/// Longest title, counting the leading uppercase letter.
pub const MAX_TITLE_LEN: usize = 101;

/// Characters allowed after the leading uppercase letter.
const TITLE_CHAR_CLASS: &str = r"[A-Za-z0-9_\s/&+\-]";

fn title_pattern() -> String {
    format!(
        r"[A-Z]{}{{{},{}}}?",
        TITLE_CHAR_CLASS,
        MIN_TITLE_LEN - 1,
        MAX_TITLE_LEN - 1
    )
}

/// A title at the start of the text or after a line break, capturing the title text.
///
/// Used with `captures_at`, so `\A` still means the start of the whole text.
pub(super) static SECTION_START_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"(?:\A|\n)(?P<title>{}):", title_pattern()))
        .expect("section start pattern is valid")
});

/// A line break immediately followed by a complete title. Its start is where a body ends.
pub(super) static NEXT_TITLE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"\n{}:", title_pattern())).expect("next title pattern is valid")
});

#[cfg(test)]
mod tests {
    use super::*;

    fn title_of(text: &str) -> Option<String> {
        SECTION_START_REGEX
            .captures(text)
            .and_then(|caps| caps.name("title").map(|m| m.as_str().to_string()))
    }

    #[test]
    fn test_title_needs_two_characters() {
        assert_eq!(title_of("A: x"), None);
        assert_eq!(title_of("AB: x"), Some("AB".to_string()));
    }

    #[test]
    fn test_title_length_is_bounded() {
        let longest = format!("A{}", "b".repeat(MAX_TITLE_LEN - 1));
        assert_eq!(title_of(&format!("{}: x", longest)), Some(longest.clone()));

        let too_long = format!("A{}", "b".repeat(MAX_TITLE_LEN));
        assert_eq!(title_of(&format!("{}: x", too_long)), None);
    }

    #[test]
    fn test_title_must_start_uppercase() {
        assert_eq!(title_of("tone: formal"), None);
        assert_eq!(title_of("1st: formal"), None);
    }

    #[test]
    fn test_title_accepts_punctuation_set() {
        assert_eq!(
            title_of("Keywords/Hashtags & CTAs + Follow-ups: yes"),
            Some("Keywords/Hashtags & CTAs + Follow-ups".to_string())
        );
    }

    #[test]
    fn test_backslash_is_not_a_title_character() {
        assert_eq!(title_of(r"Left\Right: x"), None);
    }

    #[test]
    fn test_title_only_after_line_break() {
        assert_eq!(title_of("Say hi. Tone: x"), None);
        assert_eq!(title_of("say hi\nTone: x"), Some("Tone".to_string()));
    }

    #[test]
    fn test_next_title_requires_line_break() {
        assert!(NEXT_TITLE_REGEX.find("Formal Clarity: High").is_none());
        let found = NEXT_TITLE_REGEX.find("Formal\nClarity: High").unwrap();
        assert_eq!(found.start(), 6);
    }
}
