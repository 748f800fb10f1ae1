//! motor-search library
//!
//! Fuzzy search over outboard motor inventory records: edit distance,
//! tiered field scoring, multi-word aggregation and ranking. The binary
//! wraps it with inventory loading, option files and output formatting.
//!
//! CHANGELOG:
//! - 10/18/2026 - Initial library structure

pub mod commands;
pub mod config;
pub mod inventory;
pub mod output;
pub mod search;

pub use search::{
    fuzzy_search, get_similarity, is_fuzzy_match, levenshtein_distance, FuzzyResult, MatchType,
    PartialSearchOptions, SearchOptions, Searchable,
};
