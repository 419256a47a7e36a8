//! Phrase tables for escape letters and canonical character classes.

use phf::{Map, phf_map};

/// Phrases for `\X` escapes, keyed by the letter after the backslash.
const ESCAPE_PHRASES: Map<char, &'static str> = phf_map! {
    'd' => "digit",
    'D' => "non-digit",
    'w' => "word character",
    'W' => "non-word character",
    's' => "whitespace",
    'S' => "non-whitespace",
    'b' => "word boundary",
    'B' => "non-word boundary",
    'n' => "newline",
    'r' => "carriage return",
    't' => "tab",
    'f' => "form feed",
    'v' => "vertical tab",
    '0' => "null character",
};

/// Phrases for bracket contents that name a well-known range.
const CLASS_PHRASES: Map<&'static str, &'static str> = phf_map! {
    "a-z" => "lowercase letters",
    "A-Z" => "uppercase letters",
    "0-9" => "digits",
    "a-zA-Z" => "letters",
    "A-Za-z" => "letters",
    "a-zA-Z0-9" => "letters and digits",
    "A-Za-z0-9" => "letters and digits",
};

/// The contents of a `[…]` span and how they read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharClassSpec {
    /// Text between the brackets, a leading `^` included.
    pub raw: String,
    pub phrase: String,
}

impl CharClassSpec {
    pub fn new(raw: &str) -> Self {
        Self {
            raw: raw.to_string(),
            phrase: describe_char_class(raw),
        }
    }
}

/// Phrase for the escape `\letter`, if it is one we know.
pub fn escape_phrase(letter: char) -> Option<&'static str> {
    ESCAPE_PHRASES.get(&letter).copied()
}

/// Describe the text between `[` and `]`.
///
/// Canonical ranges get their table phrase. Other text with a hyphen
/// between two characters is rendered as `X through Y`, where `X` is the
/// character before the first such hyphen and `Y` the one after the last.
/// Anything else (a leading `^` included) is passed through verbatim.
pub fn describe_char_class(inner: &str) -> String {
    if let Some(phrase) = CLASS_PHRASES.get(inner) {
        return phrase.to_string();
    }
    let chars: Vec<char> = inner.chars().collect();
    let is_range_hyphen = |i: usize| chars[i] == '-' && i > 0 && i + 1 < chars.len();
    let first = (0..chars.len()).find(|&i| is_range_hyphen(i));
    let last = (0..chars.len()).rev().find(|&i| is_range_hyphen(i));
    match (first, last) {
        (Some(first), Some(last)) => {
            let lead: String = chars[..first - 1].iter().collect();
            let trail: String = chars[last + 2..].iter().collect();
            format!(
                "{lead}{} through {}{trail}",
                chars[first - 1],
                chars[last + 1]
            )
        }
        _ => inner.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_escapes() {
        assert_eq!(escape_phrase('d'), Some("digit"));
        assert_eq!(escape_phrase('W'), Some("non-word character"));
        assert_eq!(escape_phrase('t'), Some("tab"));
    }

    #[test]
    fn unknown_escape_is_none() {
        assert_eq!(escape_phrase('.'), None);
        assert_eq!(escape_phrase('q'), None);
    }

    #[test]
    fn canonical_classes() {
        assert_eq!(describe_char_class("a-z"), "lowercase letters");
        assert_eq!(describe_char_class("A-Z"), "uppercase letters");
        assert_eq!(describe_char_class("0-9"), "digits");
        assert_eq!(describe_char_class("A-Za-z"), "letters");
        assert_eq!(describe_char_class("a-zA-Z0-9"), "letters and digits");
    }

    #[test]
    fn other_ranges_use_bounding_characters() {
        assert_eq!(describe_char_class("a-f"), "a through f");
        assert_eq!(describe_char_class("0-9a-f"), "0 through f");
    }

    #[test]
    fn text_around_the_range_is_kept() {
        assert_eq!(describe_char_class("^a-z"), "^a through z");
        assert_eq!(describe_char_class("a-f_"), "a through f_");
    }

    #[test]
    fn edge_hyphens_are_not_ranges() {
        assert_eq!(describe_char_class("-+"), "-+");
        assert_eq!(describe_char_class("._%+-"), "._%+-");
    }

    #[test]
    fn keeps_raw_class_text() {
        let class = CharClassSpec::new("A-Z");
        assert_eq!(class.raw, "A-Z");
        assert_eq!(class.phrase, "uppercase letters");
    }

    #[test]
    fn plain_sets_pass_through() {
        assert_eq!(describe_char_class("aeiou"), "aeiou");
        assert_eq!(describe_char_class(""), "");
    }
}
