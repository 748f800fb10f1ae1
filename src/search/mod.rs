//! Approximate string matching for inventory search.
//!
//! Pure and synchronous: no I/O, no shared state, nothing cached between
//! calls. Invalid input degrades to empty results instead of an error.
//!
//! CHANGELOG:
//! - 10/18/2026 - Initial module structure

pub mod distance;
pub mod options;
pub mod ranker;
pub mod record;
pub mod scorer;

pub use distance::{get_similarity, levenshtein_distance};
pub use options::{PartialSearchOptions, SearchOptions};
pub use ranker::{fuzzy_search, tokenize, FuzzyResult};
pub use record::Searchable;
pub use scorer::{is_fuzzy_match, score_field, score_record, FieldScore, MatchType, RecordScore};
