//! Clean-up of assembled narration text.

use super::narrator::Narration;
use super::token::{END_ANCHOR, START_ANCHOR};

/// Returned when nothing could be narrated.
pub const FALLBACK: &str = "Complex regex pattern";

/// Join the narration, tidy it, and never return an empty string.
///
/// The trailing connector is dropped before joining, so a fragment that
/// itself ends in `,` or a space (`literal ,`, `literal  `) keeps it.
pub(super) fn finalize(mut narration: Narration) -> String {
    narration.drop_dangling_connector();
    tidy(&narration.into_text())
}

/// Collapse anchor-adjacent connectors, falling back when empty.
fn tidy(text: &str) -> String {
    let text = text
        .replace(&format!("{START_ANCHOR}, then "), &format!("{START_ANCHOR}, "))
        .replace(&format!(", then {END_ANCHOR}"), &format!(", {END_ANCHOR}"));
    if text.trim().is_empty() {
        FALLBACK.to_string()
    } else {
        text
    }
}
