//! Search options and the partial overlay merged on top of them.
//!
//! CHANGELOG:
//! - 10/18/2026 - `max_results: None` is unlimited, `Some(0)` is zero results
//! - 10/18/2026 - Initial implementation

use serde::{Deserialize, Deserializer, Serialize};

/// Default minimum score for a result to be kept.
pub const DEFAULT_THRESHOLD: f64 = 0.4;

/// Default cap on returned results.
pub const DEFAULT_MAX_RESULTS: usize = 50;

/// Resolved options for a single search call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SearchOptions {
    /// Minimum score to include a result.
    pub threshold: f64,
    /// Cap on returned results. `None` disables truncation.
    pub max_results: Option<usize>,
    /// Score for an exact (case-insensitive) field match.
    pub boost_exact: f64,
    /// Score for a field that starts with the token.
    pub boost_starts_with: f64,
    /// Score for a field containing the token.
    pub boost_contains: f64,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            max_results: Some(DEFAULT_MAX_RESULTS),
            boost_exact: 1.0,
            boost_starts_with: 0.95,
            boost_contains: 0.85,
        }
    }
}

/// Caller-supplied options; every field left as `None` keeps the base value.
///
/// Accepts both `camelCase` (`maxResults`, `boostStartsWith`) and
/// `snake_case` keys when read from JSON. For `maxResults`, an explicit
/// `null` means unlimited, while a missing key keeps the base value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PartialSearchOptions {
    #[serde(default)]
    pub threshold: Option<f64>,
    #[serde(default, alias = "max_results", deserialize_with = "explicit_null")]
    pub max_results: Option<Option<usize>>,
    #[serde(default, alias = "boost_exact")]
    pub boost_exact: Option<f64>,
    #[serde(default, alias = "boost_starts_with")]
    pub boost_starts_with: Option<f64>,
    #[serde(default, alias = "boost_contains")]
    pub boost_contains: Option<f64>,
}

/// Keeps a present-but-null value distinct from a missing key.
fn explicit_null<'de, D>(deserializer: D) -> Result<Option<Option<usize>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<usize>::deserialize(deserializer).map(Some)
}

impl PartialSearchOptions {
    /// Shallow-merge these options over `base`.
    pub fn merge_over(&self, base: &SearchOptions) -> SearchOptions {
        SearchOptions {
            threshold: self.threshold.unwrap_or(base.threshold),
            max_results: self.max_results.unwrap_or(base.max_results),
            boost_exact: self.boost_exact.unwrap_or(base.boost_exact),
            boost_starts_with: self.boost_starts_with.unwrap_or(base.boost_starts_with),
            boost_contains: self.boost_contains.unwrap_or(base.boost_contains),
        }
    }

    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl From<PartialSearchOptions> for SearchOptions {
    fn from(partial: PartialSearchOptions) -> Self {
        partial.merge_over(&SearchOptions::default())
    }
}
