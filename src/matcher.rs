//! Boundary-safe token matching
//!
//! Decides whether an operator token occurs in a line as a whole token
//! rather than as the start of a longer identifier.

/// Returns true when `token` occurs somewhere in `line` as a genuine
/// occurrence.
///
/// Every candidate offset is inspected, overlapping ones included. An
/// occurrence is genuine when it ends exactly at end-of-line, or when the
/// character immediately after the matched span is not alphabetic — digits,
/// punctuation and the `$` sigil all qualify. A following letter means the
/// match is the prefix of a longer identifier (`$sum` inside
/// `$sumOfSquares`) and that occurrence is rejected.
///
/// Only the trailing boundary is checked: a token that is the suffix of a
/// longer identifier (`$sum` inside `$$sum`) still matches. Downstream
/// reports calibrate around that asymmetry, so it is part of the contract
/// here, not an oversight to fix.
///
/// The check short-circuits on the first genuine occurrence; a line
/// contributes at most one hit per token.
pub fn line_contains_token(line: &str, token: &str) -> bool {
    if token.is_empty() {
        return false;
    }
    // Resuming one character past a rejected occurrence keeps overlapping
    // candidates in play.
    let step = token.chars().next().map_or(1, char::len_utf8);
    let mut search_from = 0;
    while let Some(offset) = line[search_from..].find(token) {
        let start = search_from + offset;
        let end = start + token.len();
        match line[end..].chars().next() {
            None => return true,
            Some(next) if !next.is_alphabetic() => return true,
            Some(_) => search_from = start + step,
        }
    }
    false
}
