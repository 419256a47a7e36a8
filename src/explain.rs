use crate::error::ExplainError;
use crate::pattern::describe;
use crate::source::{PatternInput, normalize};

/// Explain a pattern in English.
///
/// Accepts a compiled [`Pattern`](crate::Pattern) or text, optionally as a
/// `/source/flags` literal. Fails only when the input is absent or empty.
pub fn explain(input: Option<PatternInput<'_>>) -> Result<String, ExplainError> {
    let source = normalize(input)?;
    Ok(describe(source))
}
