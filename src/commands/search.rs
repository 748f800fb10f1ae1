//! Search commands: search, distance.
//!
//! CHANGELOG:
//! - 10/18/2026 - Added distance diagnostics command
//! - 10/18/2026 - Initial implementation

use crate::config;
use crate::inventory::InventoryManager;
use crate::output::OutputControls;
use crate::search::{
    get_similarity, is_fuzzy_match, levenshtein_distance, score_field, FuzzyResult, MatchType,
    PartialSearchOptions, SearchOptions,
};
use anyhow::{bail, Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::path::Path;

/// Arguments for the search command.
#[derive(Debug, Default)]
pub struct SearchArgs<'a> {
    pub query: &'a str,
    pub file: Option<&'a Path>,
    pub keys: Option<&'a str>,
    pub options_file: Option<&'a Path>,
    pub flags: PartialSearchOptions,
}

/// Search report for serialization.
#[derive(Debug, Serialize)]
pub struct SearchReport<'a> {
    pub query: &'a str,
    pub keys: &'a [String],
    pub options: SearchOptions,
    pub total_records: usize,
    pub results: Vec<FuzzyResult<'a, Value>>,
}

/// Split a comma-separated key list, dropping blanks.
fn parse_keys(keys: &str) -> Vec<String> {
    keys.split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(String::from)
        .collect()
}

/// Resolve the keys to search: explicit list, else every string field.
pub fn resolve_keys(keys: Option<&str>, inventory: &InventoryManager) -> Vec<String> {
    match keys {
        Some(list) => parse_keys(list),
        None => inventory.string_fields(),
    }
}

/// Run a search and build its report.
pub fn build_report<'a>(
    inventory: &'a InventoryManager,
    query: &'a str,
    keys: &'a [String],
    options: SearchOptions,
) -> SearchReport<'a> {
    SearchReport {
        query,
        keys,
        options,
        total_records: inventory.len(),
        results: inventory.search(query, keys, &options),
    }
}

/// Text shown for a result: the matched field, else the first key present.
fn display_label<'a>(result: &FuzzyResult<'a, Value>, keys: &'a [String]) -> &'a str {
    result
        .matched_field
        .and_then(|field| result.item.get(field).and_then(Value::as_str))
        .or_else(|| {
            keys.iter()
                .find_map(|key| result.item.get(key.as_str()).and_then(Value::as_str))
        })
        .unwrap_or("<record>")
}

/// Search the inventory for a query.
pub fn search(args: &SearchArgs<'_>, output: &OutputControls) -> Result<()> {
    let options = config::resolve_options(args.options_file, &args.flags)
        .context("Failed to resolve search options")?;

    let inventory = match args.file {
        Some(path) => InventoryManager::load(path),
        None => InventoryManager::load_default(),
    }
    .context("Failed to load inventory")?;

    let keys = resolve_keys(args.keys, &inventory);
    if keys.is_empty() {
        bail!("No string fields to search - pass --keys or load records with text fields");
    }

    let report = build_report(&inventory, args.query, &keys, options);

    if output.json {
        output.print(&report);
        return Ok(());
    }

    if report.results.is_empty() {
        println!(
            "No matches for \"{}\" in {} records.",
            report.query, report.total_records
        );
        return Ok(());
    }

    println!(
        "Results for \"{}\" ({} of {} records):",
        report.query,
        report.results.len(),
        report.total_records
    );
    println!("{}", "-".repeat(60));
    for (rank, result) in report.results.iter().enumerate() {
        let field = result.matched_field.unwrap_or("-");
        let marker = if is_fuzzy_match(result.match_type) { " ~" } else { "" };
        println!(
            "{:>3}. {:.3}  {:<11}  {:<12}  {}{}",
            rank + 1,
            result.score,
            result.match_type.as_str(),
            field,
            display_label(result, &keys),
            marker
        );
    }

    Ok(())
}

/// Distance report for serialization.
#[derive(Debug, Serialize)]
pub struct DistanceReport<'a> {
    pub a: &'a str,
    pub b: &'a str,
    pub distance: usize,
    pub similarity: f64,
    pub match_type: MatchType,
    pub field_score: f64,
}

/// Compare two strings the way the search scores a field against a token.
pub fn distance_report<'a>(a: &'a str, b: &'a str) -> DistanceReport<'a> {
    let scored = score_field(a, b, &SearchOptions::default());
    DistanceReport {
        a,
        b,
        distance: levenshtein_distance(&a.to_lowercase(), &b.to_lowercase()),
        similarity: get_similarity(a, b),
        match_type: scored.match_type,
        field_score: scored.score,
    }
}

/// Print distance, similarity and field score of `b` against `a`.
pub fn distance(a: &str, b: &str, output: &OutputControls) -> Result<()> {
    let report = distance_report(a, b);

    if output.json {
        output.print(&report);
    } else {
        println!("\"{}\" vs \"{}\"", report.a, report.b);
        println!("  distance:    {}", report.distance);
        println!("  similarity:  {:.3}", report.similarity);
        println!("  field score: {:.3} ({})", report.field_score, report.match_type);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn inventory() -> InventoryManager {
        InventoryManager::from_records(vec![
            json!({"model": "Mercury 115 FourStroke", "family": "FourStroke", "hp": 115}),
            json!({"model": "Verado 300", "family": "Verado", "hp": 300}),
        ])
    }

    #[test]
    fn test_parse_keys() {
        assert_eq!(parse_keys("model, family,,"), vec!["model", "family"]);
        assert!(parse_keys(" , ").is_empty());
    }

    #[test]
    fn test_resolve_keys_defaults_to_string_fields() {
        let keys = resolve_keys(None, &inventory());
        assert_eq!(keys, vec!["family", "model"]);
        assert_eq!(resolve_keys(Some("model"), &inventory()), vec!["model"]);
    }

    #[test]
    fn test_build_report() {
        let inventory = inventory();
        let keys = vec!["model".to_string()];
        let report = build_report(&inventory, "verado", &keys, SearchOptions::default());
        assert_eq!(report.total_records, 2);
        assert_eq!(report.results.len(), 1);
        assert_eq!(display_label(&report.results[0], &keys), "Verado 300");
    }

    #[test]
    fn test_report_serializes() {
        let inventory = inventory();
        let keys = vec!["family".to_string()];
        let report = build_report(&inventory, "verado", &keys, SearchOptions::default());
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["results"][0]["match_type"], "exact");
        assert_eq!(value["options"]["max_results"], 50);
    }

    #[test]
    fn test_distance_report() {
        let report = distance_report("FourStroke", "Forstroke");
        assert_eq!(report.distance, 1);
        assert!((report.similarity - 0.9).abs() < 1e-9);
        assert_eq!(report.match_type, MatchType::Fuzzy);
    }
}
