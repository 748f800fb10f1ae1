//! Field scoring and multi-word query aggregation.
//!
//! A field is scored against one query token by tiers: exact, prefix,
//! prefix of an inner word, substring, whole-field fuzzy, word-level fuzzy.
//! Multi-token queries take the best field per token and discount by the
//! fraction of tokens that matched at all.
//!
//! CHANGELOG:
//! - 10/18/2026 - Inner-word prefix checked ahead of plain substring
//! - 10/18/2026 - Initial implementation

use serde::Serialize;
use std::fmt;

use super::distance::get_similarity;
use super::options::SearchOptions;
use super::record::Searchable;

/// Discount applied to a prefix match on an inner word rather than the whole field.
pub const WORD_PREFIX_FACTOR: f64 = 0.9;

/// Discount applied to a fuzzy match on a single word rather than the whole field.
pub const WORD_FUZZY_FACTOR: f64 = 0.95;

/// How a field matched a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchType {
    Exact,
    StartsWith,
    Contains,
    Fuzzy,
    None,
}

impl MatchType {
    /// Position in the precedence list; lower is better.
    fn rank(self) -> u8 {
        match self {
            MatchType::Exact => 0,
            MatchType::StartsWith => 1,
            MatchType::Contains => 2,
            MatchType::Fuzzy => 3,
            MatchType::None => 4,
        }
    }

    /// True if `self` ranks strictly ahead of `other`.
    pub fn outranks(self, other: MatchType) -> bool {
        self.rank() < other.rank()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MatchType::Exact => "exact",
            MatchType::StartsWith => "starts-with",
            MatchType::Contains => "contains",
            MatchType::Fuzzy => "fuzzy",
            MatchType::None => "none",
        }
    }
}

impl fmt::Display for MatchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// True iff the match came from edit-distance similarity.
pub fn is_fuzzy_match(match_type: MatchType) -> bool {
    match_type == MatchType::Fuzzy
}

/// Score of one field value against one token.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FieldScore {
    pub score: f64,
    pub match_type: MatchType,
}

impl FieldScore {
    pub const NONE: FieldScore = FieldScore {
        score: 0.0,
        match_type: MatchType::None,
    };

    fn new(score: f64, match_type: MatchType) -> Self {
        Self { score, match_type }
    }
}

/// Score a single field value against a single query token.
///
/// First matching rule wins:
/// 1. empty value: no match
/// 2. equal (case-insensitive): `boost_exact`
/// 3. value starts with token: `boost_starts_with`
/// 4. an inner word starts with token: `boost_starts_with * 0.9`
/// 5. value contains token: `boost_contains`
/// 6. whole-value similarity at or above threshold: the similarity
/// 7. first word whose similarity reaches threshold: similarity * 0.95
pub fn score_field(value: &str, token: &str, options: &SearchOptions) -> FieldScore {
    if value.is_empty() {
        return FieldScore::NONE;
    }

    let value_lower = value.to_lowercase();
    let token_lower = token.to_lowercase();

    if value_lower == token_lower {
        return FieldScore::new(options.boost_exact, MatchType::Exact);
    }

    if value_lower.starts_with(&token_lower) {
        return FieldScore::new(options.boost_starts_with, MatchType::StartsWith);
    }

    let words: Vec<&str> = value_lower.split_whitespace().collect();

    if words.iter().any(|word| word.starts_with(&token_lower)) {
        return FieldScore::new(
            options.boost_starts_with * WORD_PREFIX_FACTOR,
            MatchType::StartsWith,
        );
    }

    if value_lower.contains(&token_lower) {
        return FieldScore::new(options.boost_contains, MatchType::Contains);
    }

    let similarity = get_similarity(&value_lower, &token_lower);
    if similarity >= options.threshold {
        return FieldScore::new(similarity, MatchType::Fuzzy);
    }

    // Word-level fallback for multi-word values like "Mercury FourStroke 115 EFI"
    for word in &words {
        let similarity = get_similarity(word, &token_lower);
        if similarity >= options.threshold {
            return FieldScore::new(similarity * WORD_FUZZY_FACTOR, MatchType::Fuzzy);
        }
    }

    FieldScore::NONE
}

/// Best field of `record` for one token. Ties keep the earlier key.
pub(crate) fn best_field<'k, R, K>(
    record: &R,
    token: &str,
    keys: &'k [K],
    options: &SearchOptions,
) -> (FieldScore, Option<&'k str>)
where
    R: Searchable + ?Sized,
    K: AsRef<str>,
{
    let mut best = FieldScore::NONE;
    let mut best_key = None;

    for key in keys {
        let key = key.as_ref();
        let Some(value) = record.field(key) else {
            continue;
        };

        let scored = score_field(value, token, options);
        if scored.score > best.score {
            best = scored;
            best_key = Some(key);
        }
    }

    (best, best_key)
}

/// Aggregate score of one record against a tokenized query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecordScore<'k> {
    pub score: f64,
    pub match_type: MatchType,
    pub matched_field: Option<&'k str>,
}

/// Score a record against every token of a multi-word query.
///
/// `score = (sum of per-token best scores / tokens) * coverage`, where
/// coverage is the fraction of tokens whose best score is above zero.
/// Partial matches are therefore penalized twice, which keeps them well
/// below a single strong match.
pub fn score_record<'k, R, T, K>(
    record: &R,
    tokens: &[T],
    keys: &'k [K],
    options: &SearchOptions,
) -> RecordScore<'k>
where
    R: Searchable + ?Sized,
    T: AsRef<str>,
    K: AsRef<str>,
{
    if tokens.is_empty() {
        return RecordScore {
            score: 0.0,
            match_type: MatchType::None,
            matched_field: None,
        };
    }

    let mut total = 0.0;
    let mut matched = 0usize;
    let mut match_type = MatchType::None;
    let mut top_score = 0.0;
    let mut matched_field = None;

    for token in tokens {
        let (best, key) = best_field(record, token.as_ref(), keys, options);
        if best.score <= 0.0 {
            continue;
        }

        matched += 1;
        total += best.score;

        if best.match_type.outranks(match_type) {
            match_type = best.match_type;
        }

        // Later tokens win ties
        if best.score >= top_score {
            top_score = best.score;
            matched_field = key;
        }
    }

    let token_count = tokens.len() as f64;
    let coverage = matched as f64 / token_count;

    RecordScore {
        score: (total / token_count) * coverage,
        match_type,
        matched_field,
    }
}
