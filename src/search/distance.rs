//! Edit distance and normalized similarity between two strings.
//!
//! CHANGELOG:
//! - 10/18/2026 - Length-gap short-circuit ahead of the DP matrix
//! - 10/18/2026 - Initial implementation on top of strsim

use strsim::levenshtein;

/// Length difference above which the true distance is not computed.
///
/// Past this gap the two strings are clearly dissimilar, so the longer
/// length is returned as an upper bound instead.
pub const MAX_LENGTH_GAP: usize = 5;

/// Levenshtein distance between `a` and `b`, measured in chars.
///
/// - Either side empty: the other side's length.
/// - Lengths differing by more than [`MAX_LENGTH_GAP`]: `max(len(a), len(b))`,
///   which is an approximation, not the exact distance.
/// - Otherwise the full insert/delete/substitute DP.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_len = a.chars().count();
    let b_len = b.chars().count();

    if a_len == 0 {
        return b_len;
    }
    if b_len == 0 {
        return a_len;
    }

    if a_len.abs_diff(b_len) > MAX_LENGTH_GAP {
        return a_len.max(b_len);
    }

    levenshtein(a, b)
}

/// Case-insensitive similarity in `[0, 1]`.
///
/// Empty input on either side means "nothing to compare" and yields 0.
pub fn get_similarity(a: &str, b: &str) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let a_lower = a.to_lowercase();
    let b_lower = b.to_lowercase();

    if a_lower == b_lower {
        return 1.0;
    }

    let max_len = a_lower.chars().count().max(b_lower.chars().count());
    let distance = levenshtein_distance(&a_lower, &b_lower);

    1.0 - (distance as f64 / max_len as f64)
}
