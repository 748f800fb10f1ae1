//! Top-level fuzzy search: tokenize, score, filter, rank, cap.
//!
//! CHANGELOG:
//! - 10/19/2026 - Whole-query phrase only counts when it matches a field exactly
//! - 10/18/2026 - Initial implementation

use serde::Serialize;
use tracing::debug;

use super::options::SearchOptions;
use super::record::Searchable;
use super::scorer::{best_field, score_record, MatchType};

/// Queries shorter than this (after trimming) return no results.
pub const MIN_QUERY_CHARS: usize = 2;

/// One ranked search hit.
#[derive(Debug, Serialize)]
pub struct FuzzyResult<'a, T> {
    pub item: &'a T,
    pub score: f64,
    pub match_type: MatchType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_field: Option<&'a str>,
}

/// Lowercase, trim and split a query on whitespace.
pub fn tokenize(query: &str) -> Vec<String> {
    query
        .trim()
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Search `items` for `query` across the string fields named in `keys`.
///
/// Results are sorted by score, highest first; equal scores keep input
/// order. Items scoring below `options.threshold` are dropped, and the
/// list is cut to `options.max_results` when set. A query shorter than
/// [`MIN_QUERY_CHARS`] yields nothing. Never fails.
pub fn fuzzy_search<'a, T, K>(
    items: &'a [T],
    query: &str,
    keys: &'a [K],
    options: &SearchOptions,
) -> Vec<FuzzyResult<'a, T>>
where
    T: Searchable,
    K: AsRef<str>,
{
    if query.trim().chars().count() < MIN_QUERY_CHARS {
        return Vec::new();
    }

    let tokens = tokenize(query);
    if tokens.is_empty() {
        return Vec::new();
    }

    // Whole query as one token; only an exact hit on it overrides the per-token aggregate
    let phrase = tokens.join(" ");

    let mut results: Vec<FuzzyResult<'a, T>> = items
        .iter()
        .filter_map(|item| {
            let (score, match_type, matched_field) = if let [token] = tokens.as_slice() {
                let (best, key) = best_field(item, token, keys, options);
                (best.score, best.match_type, key)
            } else {
                let (whole, whole_key) = best_field(item, &phrase, keys, options);
                let scored = score_record(item, &tokens, keys, options);
                if whole.match_type == MatchType::Exact && whole.score >= scored.score {
                    (whole.score, whole.match_type, whole_key)
                } else {
                    (scored.score, scored.match_type, scored.matched_field)
                }
            };

            (score >= options.threshold).then_some(FuzzyResult {
                item,
                score,
                match_type,
                matched_field,
            })
        })
        .collect();

    // sort_by is stable: ties keep encounter order
    results.sort_by(|a, b| b.score.total_cmp(&a.score));

    if let Some(max) = options.max_results {
        results.truncate(max);
    }

    debug!(
        tokens = tokens.len(),
        candidates = items.len(),
        results = results.len(),
        "fuzzy search complete"
    );

    results
}
