//! Pattern-to-English translator.
//!
//! A curated description is used when the source is a well-known idiom;
//! otherwise the source is narrated token by token in one pass.
//!
//! # Narration
//!
//! | Source        | Phrase                                          |
//! |---------------|-------------------------------------------------|
//! | `^` `$`       | `start of string/line`, `end of string/line`    |
//! | `.`           | `any character`                                 |
//! | `\d` `\w` …   | `digit`, `word character`, …                    |
//! | `\X` (other)  | `literal X`                                     |
//! | `[…]`         | `character from set: …`                         |
//! | `*` `+` `?`   | `(zero or more times)` etc. on the previous step |
//! | `{n}` `{n,m}` | `(exactly n times)`, `(n to m times)` etc.      |
//! | `(` … `)`     | `group: (` … `)`                                |
//! | `\|`          | `OR`                                            |
//! | anything else | `literal X`                                     |
//!
//! Steps are joined with `, then `. Unclosed `(`, `[` or `{` are narrated
//! as literal characters.

pub mod delimiter;
mod finalize;
pub mod lexicon;
mod narrator;
pub mod special_case;
pub mod token;

#[cfg(test)]
mod tests;

pub use delimiter::find_matching_close;
pub use finalize::FALLBACK;
pub use lexicon::{CharClassSpec, describe_char_class, escape_phrase};
pub use narrator::narrate;
pub use special_case::special_case;
pub use token::{Token, TokenKind, Tokens};

/// Describe bare pattern source in English. Never returns an empty string.
pub fn describe(source: &str) -> String {
    match special_case(source) {
        Some(description) => description.to_string(),
        None => narrate(source),
    }
}

/// Classify `source` into its tokens.
pub fn tokens(source: &str) -> Vec<Token> {
    Tokens::new(source).collect()
}
