//! Build patterns from short English descriptions.
//!
//! A few phrase shapes (`starts with X`, `ends with X`, `contains X`,
//! `length N`, `N characters`) are recognised first; otherwise the
//! description is searched for a known keyword. Text matching neither is
//! taken literally.

use std::cmp::Reverse;

use itertools::Itertools;
use phf::{Map, phf_map};

use crate::compiled::Pattern;
use crate::error::ExplainError;

/// Keyword to pattern source. Keep keys lower-case.
const KEYWORD_PATTERNS: Map<&'static str, &'static str> = phf_map! {
    "alphanumeric" => r"^[a-zA-Z0-9]+$",
    "credit card" => r"^\d{4}[- ]?\d{4}[- ]?\d{4}[- ]?\d{4}$",
    "date" => r"^\d{4}-\d{2}-\d{2}$",
    "decimal" => r"^-?\d+\.\d+$",
    "digit" => r"\d",
    "digits" => r"\d+",
    "email" => r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$",
    "hex color" => r"^#?([0-9a-fA-F]{3}|[0-9a-fA-F]{6})$",
    "integer" => r"^-?\d+$",
    "ip address" => r"^(\d{1,3}\.){3}\d{1,3}$",
    "letters" => r"[a-zA-Z]+",
    "lowercase" => r"[a-z]+",
    "number" => r"^-?\d+(\.\d+)?$",
    "phone" => r"^\(?\d{3}\)?[-. ]?\d{3}[-. ]?\d{4}$",
    "phone number" => r"^\(?\d{3}\)?[-. ]?\d{3}[-. ]?\d{4}$",
    "ssn" => r"^\d{3}-\d{2}-\d{4}$",
    "time" => r"^\d{2}:\d{2}(:\d{2})?$",
    "uppercase" => r"[A-Z]+",
    "url" => r"^https?://[^\s/$.?#][^\s]*$",
    "whitespace" => r"\s+",
    "word" => r"\b\w+\b",
    "words" => r"\w+",
    "zip code" => r"^\d{5}(-\d{4})?$",
};

/// Build a pattern from a free-text description.
pub fn build(description: &str) -> Result<Pattern, ExplainError> {
    let text = description.trim();
    if text.is_empty() {
        return Err(ExplainError::InvalidInput("empty description"));
    }
    if let Some(operand) = strip_phrase(text, "starts with") {
        return starts_with(operand);
    }
    if let Some(operand) = strip_phrase(text, "ends with") {
        return ends_with(operand);
    }
    if let Some(operand) = strip_phrase(text, "contains") {
        return contains(operand);
    }
    if let Some(n) = length_of(text) {
        return exact_length(n);
    }
    match keyword_source(text) {
        Some(source) => Pattern::new(source, ""),
        None => contains(text),
    }
}

/// Pattern matching text that begins with `prefix`.
pub fn starts_with(prefix: &str) -> Result<Pattern, ExplainError> {
    Pattern::new(&format!("^{}", regex::escape(prefix)), "")
}

/// Pattern matching text that ends with `suffix`.
pub fn ends_with(suffix: &str) -> Result<Pattern, ExplainError> {
    Pattern::new(&format!("{}$", regex::escape(suffix)), "")
}

/// Pattern matching `needle` anywhere.
pub fn contains(needle: &str) -> Result<Pattern, ExplainError> {
    Pattern::new(&regex::escape(needle), "")
}

/// Pattern matching any text exactly `n` characters long.
pub fn exact_length(n: usize) -> Result<Pattern, ExplainError> {
    Pattern::new(&format!("^.{{{n}}}$"), "")
}

/// The longest keyword found in `text` as whole words, case-insensitively.
fn keyword_source(text: &str) -> Option<&'static str> {
    let lower = text.to_lowercase();
    let words = lower
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .join(" ");
    let padded = format!(" {words} ");
    KEYWORD_PATTERNS
        .entries()
        .sorted_by_key(|(keyword, _)| (Reverse(keyword.len()), **keyword))
        .find(|(keyword, _)| padded.contains(&format!(" {keyword} ")))
        .map(|(_, source)| *source)
}

/// If `text` opens with `phrase` (ignoring case), the rest with any
/// surrounding quotes removed.
fn strip_phrase<'a>(text: &'a str, phrase: &str) -> Option<&'a str> {
    let head = text.get(..phrase.len())?;
    if !head.eq_ignore_ascii_case(phrase) {
        return None;
    }
    let rest = &text[phrase.len()..];
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let rest = rest.trim();
    if rest.is_empty() {
        return None;
    }
    let unquoted = ['"', '\'']
        .iter()
        .find_map(|q| rest.strip_prefix(*q).and_then(|r| r.strip_suffix(*q)));
    Some(unquoted.filter(|s| !s.is_empty()).unwrap_or(rest))
}

/// `length N` or `N characters`.
fn length_of(text: &str) -> Option<usize> {
    if let Some(rest) = strip_phrase(text, "length") {
        return rest.parse().ok();
    }
    let (count, unit) = text.split_once(' ')?;
    if unit.trim().eq_ignore_ascii_case("characters") {
        count.parse().ok()
    } else {
        None
    }
}
