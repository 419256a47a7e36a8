//! Explain regular expressions in plain English.
//!
//! # Example
//!
//! ```rust
//! use rexplain::{Pattern, explain};
//!
//! assert_eq!(
//!     explain(Some("[a-z]+".into())).unwrap(),
//!     "character from set: lowercase letters (one or more times)"
//! );
//!
//! let ssn = Pattern::new(r"^\d{3}-\d{2}-\d{4}$", "").unwrap();
//! assert_eq!(
//!     explain(Some((&ssn).into())).unwrap(),
//!     "3 digits - 2 digits - 4 digits (SSN-like pattern)"
//! );
//! ```

pub mod builder;
mod compiled;
mod error;
mod explain;
pub mod pattern;
mod source;
pub mod tester;

pub use builder::build;
pub use compiled::Pattern;
pub use error::ExplainError;
pub use explain::explain;
pub use pattern::{describe, tokens};
pub use source::{PatternInput, normalize};
pub use tester::{MatchReport, TestOptions, test_pattern};
