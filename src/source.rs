//! Input normalisation: reduce caller input to bare pattern source.

use crate::compiled::{Pattern, split_literal};
use crate::error::ExplainError;

/// The two shapes of input the explainer accepts.
#[derive(Debug, Clone, Copy)]
pub enum PatternInput<'a> {
    /// A compiled pattern; its source is used and its flags ignored.
    Compiled(&'a Pattern),
    /// Raw text, either bare source or a `/source/flags` literal.
    Text(&'a str),
}

impl<'a> From<&'a str> for PatternInput<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(text)
    }
}

impl<'a> From<&'a String> for PatternInput<'a> {
    fn from(text: &'a String) -> Self {
        Self::Text(text)
    }
}

impl<'a> From<&'a Pattern> for PatternInput<'a> {
    fn from(pattern: &'a Pattern) -> Self {
        Self::Compiled(pattern)
    }
}

/// Reduce `input` to the pattern source to be narrated.
///
/// A `/source/flags` wrapper is stripped; anything else passes through
/// unchanged. The result may be empty (e.g. `//`), which the narrator
/// handles with its fallback text.
pub fn normalize<'a>(input: Option<PatternInput<'a>>) -> Result<&'a str, ExplainError> {
    match input {
        None => Err(ExplainError::InvalidInput("no pattern given")),
        Some(PatternInput::Compiled(pattern)) => Ok(pattern.source()),
        Some(PatternInput::Text("")) => Err(ExplainError::InvalidInput("empty pattern")),
        Some(PatternInput::Text(text)) => Ok(split_literal(text)
            .map(|(source, _flags)| source)
            .unwrap_or(text)),
    }
}
