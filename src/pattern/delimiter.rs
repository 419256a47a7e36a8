//! Balanced delimiter scanning shared by groups, classes and brace counts.

/// Find the index of the delimiter closing the one at `open_index`.
///
/// Depth starts at 1 and is adjusted by every unescaped `open` and `close`
/// after `open_index`; the character following an unescaped backslash is
/// skipped. When `open == close` only the closing role applies.
///
/// Returns `None` if the source runs out first. Callers treat that as a
/// plain literal opening character rather than an error.
pub fn find_matching_close(
    chars: &[char],
    open_index: usize,
    open: char,
    close: char,
) -> Option<usize> {
    let mut depth = 1usize;
    let mut i = open_index + 1;
    while i < chars.len() {
        let ch = chars[i];
        if ch == '\\' {
            i += 2;
            continue;
        }
        if ch == close {
            depth -= 1;
            if depth == 0 {
                return Some(i);
            }
        } else if ch == open {
            depth += 1;
        }
        i += 1;
    }
    None
}
