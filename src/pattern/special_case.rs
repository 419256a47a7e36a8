//! Curated descriptions for frequently documented idioms.
//!
//! These bypass token-by-token narration, which reads poorly for
//! patterns people look up all the time.

/// An exact pattern source and the description it is always given.
pub struct SpecialCase {
    pub source: &'static str,
    pub description: &'static str,
}

/// Checked in order; the first exact match wins.
pub const SPECIAL_CASES: &[SpecialCase] = &[
    SpecialCase {
        source: r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$",
        description: "Email address (name@domain.tld)",
    },
    SpecialCase {
        source: r"^[^\s@]+@[^\s@]+\.[^\s@]+$",
        description: "Email address (name@domain.tld)",
    },
    SpecialCase {
        source: r"^\d{3}-\d{2}-\d{4}$",
        description: "3 digits - 2 digits - 4 digits (SSN-like pattern)",
    },
    SpecialCase {
        source: r"^\d{5}(-\d{4})?$",
        description: "5 digits, optionally followed by - and 4 digits (ZIP code)",
    },
    SpecialCase {
        source: r"^\d{5}$",
        description: "5 digits (ZIP code)",
    },
    SpecialCase {
        source: r"^\d{4}[- ]?\d{4}[- ]?\d{4}[- ]?\d{4}$",
        description: "4 groups of 4 digits, optionally separated by - or space (credit card-like pattern)",
    },
    SpecialCase {
        source: r"^\d{4}-\d{4}-\d{4}-\d{4}$",
        description: "4 digits - 4 digits - 4 digits - 4 digits (credit card-like pattern)",
    },
    SpecialCase {
        source: r"^https?://",
        description: "starts with http:// or https://",
    },
    SpecialCase {
        source: r"^https?:\/\/",
        description: "starts with http:// or https://",
    },
];

/// The curated description for `source`, if it is one of the known idioms.
pub fn special_case(source: &str) -> Option<&'static str> {
    SPECIAL_CASES
        .iter()
        .find(|case| case.source == source)
        .map(|case| case.description)
}
