use proptest::prelude::*;

use super::special_case::SPECIAL_CASES;
use super::*;

fn in_order<S: AsRef<str>>(text: &str, parts: &[S]) -> bool {
    let mut from = 0;
    for part in parts {
        let part = part.as_ref();
        match text[from..].find(part) {
            Some(at) => from += at + part.len(),
            None => return false,
        }
    }
    true
}

fn assert_in_order(text: &str, parts: &[&str]) {
    assert!(in_order(text, parts), "{parts:?} not found in order in {text:?}");
}

#[test]
fn test_special_cases_bypass_narration() {
    for case in SPECIAL_CASES {
        assert_eq!(describe(case.source), case.description);
    }
}

#[test]
fn test_ssn_pattern() {
    assert_eq!(
        describe(r"^\d{3}-\d{2}-\d{4}$"),
        "3 digits - 2 digits - 4 digits (SSN-like pattern)"
    );
}

#[test]
fn test_lowercase_class_one_or_more() {
    let text = describe("[a-z]+");
    assert_in_order(
        &text,
        &["character from set: lowercase letters", "(one or more times)"],
    );
    assert_eq!(
        text,
        "character from set: lowercase letters (one or more times)"
    );
}

#[test]
fn test_alternation_order() {
    assert_in_order(&describe("a|b"), &["literal a", " OR ", "literal b"]);
}

#[test]
fn test_group_markers() {
    assert_in_order(
        &describe("(ab)"),
        &[token::GROUP_OPEN, "literal a", "literal b", token::GROUP_CLOSE],
    );
}

#[test]
fn test_escaped_brackets_are_not_a_class() {
    let text = describe(r"\[abc\]");
    assert!(!text.contains("character from set"), "{text}");
    assert_eq!(
        text,
        "literal [, then literal a, then literal b, then literal c, then literal ]"
    );
}

#[test]
fn test_unmatched_group_is_literal() {
    assert_eq!(
        describe("(abc"),
        "literal (, then literal a, then literal b, then literal c"
    );
}

#[test]
fn test_quantifier_is_not_a_separate_step() {
    let text = describe("a*");
    assert_eq!(text, "literal a (zero or more times)");
    assert!(!text.contains(", then (zero"));
}

#[test]
fn test_empty_source_uses_fallback() {
    assert_eq!(describe(""), FALLBACK);
}

#[test]
fn test_anchored_word() {
    assert_eq!(
        describe(r"^\w+$"),
        "start of string/line, word character (one or more times), end of string/line"
    );
}

#[test]
fn test_range_quantifier_inside_group() {
    assert_eq!(
        describe(r"(\d{2,4}|x)?"),
        "group: (digit (2 to 4 times) OR literal x) (optional)"
    );
}

#[test]
fn test_nested_groups_narrate_flat() {
    assert_eq!(
        describe("((a)b)"),
        "group: (group: (literal a), then literal b)"
    );
}

#[test]
fn test_char_class_with_hex_range() {
    assert_eq!(
        describe("#[0-9a-f]{6}"),
        "literal #, then character from set: 0 through f (exactly 6 times)"
    );
}

#[test]
fn test_tokens_listing() {
    let kinds: Vec<TokenKind> = tokens("^a.").into_iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![TokenKind::Anchor, TokenKind::Literal, TokenKind::CharClass]
    );
}

#[test]
fn test_trailing_comma_and_space_are_kept() {
    assert_eq!(describe("a,"), "literal a, then literal ,");
    assert_eq!(describe(","), "literal ,");
    assert_eq!(describe("a "), "literal a, then literal  ");
    assert_eq!(describe(r"\d,"), "digit, then literal ,");
}

#[test]
fn test_class_ending_in_comma_space_is_kept() {
    assert_eq!(describe("[a, ]"), "character from set: a, ");
}

proptest! {
    #[test]
    fn prop_output_is_never_empty(source in ".{0,40}") {
        prop_assert!(!describe(&source).is_empty());
    }

    #[test]
    fn prop_describe_is_idempotent(source in r"[\\\[\](){}|*+?^$.a-c0-9,-]{0,30}") {
        prop_assert_eq!(describe(&source), describe(&source));
    }

    #[test]
    fn prop_literals_appear_in_order(source in r"[\\\[\](){}|*+?^$.a-c0-9, -]{0,30}") {
        let literals: Vec<String> = tokens(&source)
            .into_iter()
            .filter(|t| t.kind == TokenKind::Literal)
            .map(|t| t.phrase)
            .collect();
        let text = narrate(&source);
        prop_assert!(in_order(&text, &literals), "{:?} missing from {:?}", literals, text);
    }

    #[test]
    fn prop_tokens_cover_source(source in r"[\\\[\](){}|*+?^$.a-c0-9,-]{0,30}") {
        let total: usize = tokens(&source).iter().map(|t| t.end - t.start).sum();
        prop_assert_eq!(total, source.chars().count());
    }
}
