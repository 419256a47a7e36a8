/// Errors surfaced to callers of the explainer, builder and tester.
///
/// Malformed pattern syntax is never an error for the narrator: unmatched
/// delimiters fall back to literal narration. Only the compiled-pattern
/// side can reject a source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExplainError {
    /// The argument was absent, empty, or otherwise unusable.
    InvalidInput(&'static str),
    /// A flag letter the pattern engine does not understand.
    InvalidFlag(char),
    /// The pattern engine refused to compile the source.
    InvalidPattern(String),
}

impl std::fmt::Display for ExplainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(why) => write!(f, "Invalid input: {why}"),
            Self::InvalidFlag(c) => write!(f, "Unsupported pattern flag: {c:?}"),
            Self::InvalidPattern(msg) => write!(f, "Invalid pattern: {msg}"),
        }
    }
}

impl std::error::Error for ExplainError {}

impl From<regex::Error> for ExplainError {
    fn from(err: regex::Error) -> Self {
        Self::InvalidPattern(err.to_string())
    }
}
