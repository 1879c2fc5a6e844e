//! Edit-distance matching
//!
//! Classic Levenshtein distance over Unicode scalar values, plus the
//! substring-or-nearby-word test the scorer uses to decide whether a
//! text "contains" a term.

/// Default edit distance tolerated by [`fuzzy_match`]
pub const DEFAULT_MAX_DISTANCE: usize = 2;

/// Levenshtein distance between two strings (unit-cost insert, delete, substitute)
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j] + cost).min(prev[j + 1] + 1).min(curr[j] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Are these strings within `max` edits of each other?
///
/// The length difference is a lower bound on the distance, so strings whose
/// lengths differ by more than `max` are rejected without running the DP.
pub fn within_distance(a: &str, b: &str, max: usize) -> bool {
    let a_len = a.chars().count();
    let b_len = b.chars().count();
    if a_len.abs_diff(b_len) > max {
        return false;
    }
    levenshtein(a, b) <= max
}

/// True when `haystack` contains `term` literally, or any of its words is
/// within `max_distance` edits of `term`.
///
/// Both arguments are expected to be lowercased already.
pub fn fuzzy_match(haystack: &str, term: &str, max_distance: usize) -> bool {
    if haystack.contains(term) {
        return true;
    }
    has_nearby_word(haystack, term, max_distance)
}

/// True when some whitespace-delimited word of `text` is within `max_distance` of `term`
pub fn has_nearby_word(text: &str, term: &str, max_distance: usize) -> bool {
    text.split_whitespace()
        .any(|word| within_distance(word, term, max_distance))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein_known_values() {
        assert_eq!(levenshtein("kitten", "sitting"), 3);
        assert_eq!(levenshtein("", "abc"), 3);
        assert_eq!(levenshtein("abc", ""), 3);
        assert_eq!(levenshtein("abc", "abc"), 0);
        assert_eq!(levenshtein("flaw", "lawn"), 2);
        assert_eq!(levenshtein("cardiology", "cardiologi"), 1);
    }

    #[test]
    fn test_levenshtein_is_symmetric() {
        let pairs = [("insulin", "insuline"), ("tumor", "tumour"), ("acne", "")];
        for (a, b) in pairs {
            assert_eq!(levenshtein(a, b), levenshtein(b, a));
        }
    }

    #[test]
    fn test_levenshtein_counts_characters_not_bytes() {
        assert_eq!(levenshtein("café", "cafe"), 1);
        assert_eq!(levenshtein("ñ", ""), 1);
    }

    #[test]
    fn test_within_distance_agrees_with_levenshtein() {
        let words = ["heart", "hearts", "cardiac", "cardio", "hurt", "", "ache"];
        for a in words {
            for b in words {
                for max in 0..4 {
                    assert_eq!(
                        within_distance(a, b, max),
                        levenshtein(a, b) <= max,
                        "{a:?} vs {b:?} at {max}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_fuzzy_match_substring() {
        assert!(fuzzy_match("pediatric cardiology", "cardio", 2));
        assert!(fuzzy_match("anything at all", "", 2));
    }

    #[test]
    fn test_fuzzy_match_typo() {
        assert!(fuzzy_match("cardiology department", "cardiologi", 2));
        assert!(fuzzy_match("dermatology", "dermatolgy", 2));
        assert!(!fuzzy_match("dermatology", "neurology", 2));
    }

    #[test]
    fn test_fuzzy_match_respects_max_distance() {
        assert!(!fuzzy_match("oncology", "oncolgoy", 1));
        assert!(fuzzy_match("oncology", "oncolgoy", 2));
    }

    #[test]
    fn test_fuzzy_match_empty_haystack() {
        assert!(!fuzzy_match("", "skin", 2));
        assert!(!fuzzy_match("   ", "skin", 2));
    }
}
