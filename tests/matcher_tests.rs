//! Tests for the boundary-safe matcher

use opcheck::matcher::line_contains_token;

#[test]
fn test_token_followed_by_space_is_accepted() {
    assert!(line_contains_token("use $sum here", "$sum"));
}

#[test]
fn test_token_prefix_of_identifier_is_rejected() {
    assert!(!line_contains_token("$sumOfValues", "$sum"));
}

#[test]
fn test_token_at_exact_end_of_line_is_accepted() {
    assert!(line_contains_token("group by $sum", "$sum"));
}

#[test]
fn test_non_letter_followers_are_accepted() {
    assert!(line_contains_token("$sum: 1", "$sum"));
    assert!(line_contains_token("$sum7", "$sum"));
    assert!(line_contains_token("$sum$", "$sum"));
    assert!(line_contains_token("\"$sum\"", "$sum"));
}

#[test]
fn test_letter_follower_is_rejected() {
    assert!(!line_contains_token("$sums", "$sum"));
    assert!(!line_contains_token("before $sumX after", "$sum"));
}

#[test]
fn test_rejected_occurrence_does_not_mask_later_genuine_one() {
    assert!(line_contains_token("$sumOfValues then $sum", "$sum"));
}

#[test]
fn test_only_trailing_boundary_is_checked() {
    // Documented asymmetry: a token embedded as the suffix of a longer
    // identifier still matches.
    assert!(line_contains_token("$$sum", "$sum"));
    assert!(line_contains_token("total$sum", "$sum"));
}

#[test]
fn test_double_sigil_variable_tokens() {
    assert!(line_contains_token("\"$$ROOT\"", "$$ROOT"));
    assert!(!line_contains_token("$$ROOTLESS", "$$ROOT"));
}
