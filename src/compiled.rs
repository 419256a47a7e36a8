//! The compiled-pattern object shared by the explainer, builder and tester.

use regex::{Regex, RegexBuilder};

use crate::error::ExplainError;

/// Flag letters accepted by [`Pattern::new`].
pub(crate) const FLAG_LETTERS: &str = "imsxgu";

/// A pattern source together with its flag letters and compiled engine.
///
/// Renders as a `/source/flags` literal.
#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    flags: String,
    regex: Regex,
}

impl Pattern {
    /// Compile `source` with the given flag letters.
    ///
    /// Recognised flags are `i`, `m`, `s`, `x`, `g` and `u`. Repeated
    /// letters are accepted and kept once.
    pub fn new(source: &str, flags: &str) -> Result<Self, ExplainError> {
        let mut builder = RegexBuilder::new(source);
        let mut kept = String::new();
        for flag in flags.chars() {
            match flag {
                'i' => {
                    builder.case_insensitive(true);
                }
                'm' => {
                    builder.multi_line(true);
                }
                's' => {
                    builder.dot_matches_new_line(true);
                }
                'x' => {
                    builder.ignore_whitespace(true);
                }
                // `g` only affects how many matches the tester reports,
                // and the engine is always Unicode-aware.
                'g' | 'u' => {}
                other => return Err(ExplainError::InvalidFlag(other)),
            }
            if !kept.contains(flag) {
                kept.push(flag);
            }
        }
        Ok(Self {
            source: source.to_string(),
            flags: kept,
            regex: builder.build()?,
        })
    }

    /// Compile a `/source/flags` literal, or a bare source with no flags.
    pub fn parse_literal(text: &str) -> Result<Self, ExplainError> {
        match split_literal(text) {
            Some((source, flags)) => Self::new(source, flags),
            None => Self::new(text, ""),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn flags(&self) -> &str {
        &self.flags
    }

    /// True when every match should be reported, not just the first.
    pub fn is_global(&self) -> bool {
        self.flags.contains('g')
    }

    pub fn regex(&self) -> &Regex {
        &self.regex
    }
}

impl std::fmt::Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "/{}/{}", self.source, self.flags)
    }
}

/// Split a `/source/flags` literal into its source and trailing flag letters.
///
/// Returns `None` unless `text` opens with `/`, has a second `/` later on,
/// and only letters from [`FLAG_LETTERS`] follow that last `/`.
pub(crate) fn split_literal(text: &str) -> Option<(&str, &str)> {
    let rest = text.strip_prefix('/')?;
    let close = rest.rfind('/')?;
    let (source, tail) = rest.split_at(close);
    let flags = &tail[1..];
    if flags.chars().all(|c| FLAG_LETTERS.contains(c)) {
        Some((source, flags))
    } else {
        None
    }
}
