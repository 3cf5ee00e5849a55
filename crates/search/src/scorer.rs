//! Similarity scoring for one matched field value against one token
//!
//! The score measures how much of the field value the token covers:
//! remove every occurrence of the token from the field value, then
//!
//! ```text
//! score = 1 - remaining_chars / field_chars
//! ```
//!
//! An exact match scores 1.0, a token absent from the field scores 0.0, and
//! partial coverage lands in between. Scores are plain `f64`s, not clamped;
//! under this formula they stay within `[0, 1]` because removal can only
//! shorten the string.

/// Score a matched field value against a search token.
///
/// Both sides are lowercased before matching. Occurrences are removed in one
/// non-overlapping left-to-right pass (`str::replace` semantics); fragments
/// that only form the token after a removal are not re-matched. Lengths are
/// counted in chars of the lowercased field value, so multi-byte names score
/// the same as ASCII ones.
///
/// An empty field value scores 0.0: it cannot contain a token, and returning
/// the formula's limit avoids a division by zero poisoning aggregate sums.
///
/// # Example
///
/// ```
/// use denkmal_search::scorer::similarity;
///
/// assert_eq!(similarity("Tor", "tor"), 1.0);
/// assert_eq!(similarity("Brandenburger Tor", "xyz"), 0.0);
/// // "Brandenburger " (14 chars) remains of 17.
/// assert_eq!(similarity("Brandenburger Tor", "tor"), 1.0 - 14.0 / 17.0);
/// ```
pub fn similarity(field_value: &str, token: &str) -> f64 {
    let hay = field_value.to_lowercase();
    let field_chars = hay.chars().count();
    if field_chars == 0 {
        return 0.0;
    }
    let needle = token.to_lowercase();
    let remaining = hay.replace(&needle, "");
    let mismatch = remaining.chars().count();
    1.0 - mismatch as f64 / field_chars as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_exact_match_scores_one() {
        assert_eq!(similarity("Tor", "tor"), 1.0);
        assert_eq!(similarity("tor", "Tor"), 1.0);
    }

    #[test]
    fn test_absent_token_scores_zero() {
        assert_eq!(similarity("Brandenburger Tor", "xyz"), 0.0);
    }

    #[test]
    fn test_partial_coverage() {
        // Removing "tor" leaves "Brandenburger ", 14 of 17 chars.
        let expected = 1.0 - 14.0 / 17.0;
        assert!((similarity("Brandenburger Tor", "tor") - expected).abs() < 1e-12);
    }

    #[test]
    fn test_repeated_occurrences_all_removed() {
        // "abab" minus "ab" twice leaves nothing.
        assert_eq!(similarity("abab", "ab"), 1.0);
        // "aabbaabb" minus "aabb" twice leaves nothing.
        assert_eq!(similarity("aabbaabb", "aabb"), 1.0);
    }

    #[test]
    fn test_removal_is_single_pass() {
        // "aabb" minus "ab": one occurrence removed, the "ab" that forms
        // afterwards is not re-matched. 2 of 4 chars remain.
        assert_eq!(similarity("aabb", "ab"), 0.5);
    }

    #[test]
    fn test_empty_field_value_scores_zero() {
        assert_eq!(similarity("", "tor"), 0.0);
    }

    #[test]
    fn test_multibyte_chars_counted_as_chars() {
        // "Siegessäule" is 11 chars; removing "säule" leaves "sieges" (6).
        let expected = 1.0 - 6.0 / 11.0;
        assert!((similarity("Siegessäule", "säule") - expected).abs() < 1e-12);
    }

    proptest! {
        #[test]
        fn prop_score_is_bounded(field in ".{0,40}", token in ".{1,10}") {
            let score = similarity(&field, &token);
            prop_assert!(score.is_finite());
            prop_assert!((0.0..=1.0).contains(&score));
        }

        #[test]
        fn prop_identical_nonempty_strings_score_one(s in ".{1,40}") {
            // Lowercasing can change char counts for exotic code points, so
            // feed the lowercased form on both sides.
            let s = s.to_lowercase();
            prop_assert_eq!(similarity(&s, &s), 1.0);
        }
    }
}
