//! Inventory manager - load motor records from JSON and search them.
//!
//! CHANGELOG:
//! - 10/19/2026 - Documented string field ordering
//! - 10/18/2026 - Added string field discovery for default search keys
//! - 10/18/2026 - Initial implementation

use crate::search::{fuzzy_search, FuzzyResult, SearchOptions};
use serde_json::Value;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Env var overriding the inventory file location.
pub const INVENTORY_ENV: &str = "MOTOR_SEARCH_INVENTORY";

/// Top-level keys accepted for the wrapped file format, in lookup order.
const WRAPPER_KEYS: [&str; 2] = ["motors", "items"];

/// Errors that can occur when loading an inventory file.
#[derive(Error, Debug)]
pub enum InventoryError {
    #[error("Failed to read inventory file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse inventory JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Inventory must be a JSON array or an object with a \"motors\" or \"items\" array")]
    UnexpectedShape,
}

/// Default inventory.json path.
///
/// Tries multiple locations in order:
/// 1. MOTOR_SEARCH_INVENTORY env var
/// 2. ~/.motor-search/inventory.json (if it exists)
/// 3. ./inventory.json
pub fn default_inventory_path() -> PathBuf {
    if let Ok(path) = std::env::var(INVENTORY_ENV) {
        return PathBuf::from(path);
    }

    if let Some(home) = dirs::home_dir() {
        let home_path = home.join(".motor-search").join("inventory.json");
        if home_path.exists() {
            return home_path;
        }
    }

    PathBuf::from("inventory.json")
}

/// Holds inventory records of any shape.
#[derive(Debug, Clone, Default)]
pub struct InventoryManager {
    records: Vec<Value>,
}

impl InventoryManager {
    /// Load records from a JSON file.
    ///
    /// Supports both formats:
    /// - `{"motors": [...]}` or `{"items": [...]}`
    /// - `[...]` (flat array)
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, InventoryError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| InventoryError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let manager = Self::from_json_str(&content)?;
        debug!(path = ?path, records = manager.len(), "loaded inventory");
        Ok(manager)
    }

    /// Load from default path.
    pub fn load_default() -> Result<Self, InventoryError> {
        Self::load(default_inventory_path())
    }

    /// Parse records from JSON text in either supported format.
    pub fn from_json_str(content: &str) -> Result<Self, InventoryError> {
        let records = match serde_json::from_str::<Value>(content)? {
            Value::Array(records) => records,
            Value::Object(mut map) => WRAPPER_KEYS
                .iter()
                .find_map(|key| match map.remove(*key) {
                    Some(Value::Array(records)) => Some(records),
                    _ => None,
                })
                .ok_or(InventoryError::UnexpectedShape)?,
            _ => return Err(InventoryError::UnexpectedShape),
        };

        Ok(Self::from_records(records))
    }

    /// Build from already-parsed records. Non-object entries are dropped.
    pub fn from_records(records: Vec<Value>) -> Self {
        let total = records.len();
        let records: Vec<Value> = records.into_iter().filter(Value::is_object).collect();

        let skipped = total - records.len();
        if skipped > 0 {
            warn!(skipped, "skipping non-object inventory records");
        }

        Self { records }
    }

    /// Create an empty manager (for when no inventory is available).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Get all records.
    pub fn all(&self) -> &[Value] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Names of fields holding a string in at least one record.
    ///
    /// Records are visited in order; keys within a record come alphabetically
    /// (`serde_json::Map` is a BTreeMap here), so a field's position is where it
    /// first appears in that walk. Key order decides ties between equal fields.
    pub fn string_fields(&self) -> Vec<String> {
        let mut fields: Vec<String> = Vec::new();
        for record in &self.records {
            let Some(map) = record.as_object() else {
                continue;
            };
            for (key, value) in map {
                if value.is_string() && !fields.iter().any(|f| f == key) {
                    fields.push(key.clone());
                }
            }
        }
        fields
    }

    /// Fuzzy search the inventory across `keys`.
    pub fn search<'a, K: AsRef<str>>(
        &'a self,
        query: &str,
        keys: &'a [K],
        options: &SearchOptions,
    ) -> Vec<FuzzyResult<'a, Value>> {
        fuzzy_search(&self.records, query, keys, options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::MatchType;
    use serde_json::json;
    use std::io::Write;

    fn write_temp(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_flat_array() {
        let file = write_temp(r#"[{"model": "Verado 300"}, {"model": "Pro XS 150"}]"#);
        let manager = InventoryManager::load(file.path()).unwrap();
        assert_eq!(manager.len(), 2);
    }

    #[test]
    fn test_load_wrapped_formats() {
        let motors = InventoryManager::from_json_str(r#"{"motors": [{"model": "Verado"}]}"#).unwrap();
        assert_eq!(motors.len(), 1);

        let items = InventoryManager::from_json_str(r#"{"items": [{"model": "SeaPro"}]}"#).unwrap();
        assert_eq!(items.all()[0]["model"], "SeaPro");
    }

    #[test]
    fn test_unexpected_shape() {
        let err = InventoryManager::from_json_str(r#"{"boats": []}"#).unwrap_err();
        assert!(matches!(err, InventoryError::UnexpectedShape));

        let err = InventoryManager::from_json_str(r#""verado""#).unwrap_err();
        assert!(matches!(err, InventoryError::UnexpectedShape));
    }

    #[test]
    fn test_parse_error() {
        let err = InventoryManager::from_json_str("[{").unwrap_err();
        assert!(matches!(err, InventoryError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = InventoryManager::load(dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, InventoryError::Read { .. }));
        assert!(err.to_string().contains("nope.json"));
    }

    #[test]
    fn test_non_object_records_skipped() {
        let manager = InventoryManager::from_records(vec![
            json!({"model": "Verado"}),
            json!("stray string"),
            json!(42),
        ]);
        assert_eq!(manager.len(), 1);
    }

    #[test]
    fn test_empty() {
        let manager = InventoryManager::empty();
        assert!(manager.is_empty());
        assert!(manager.string_fields().is_empty());
        assert!(manager.search("verado", &["model"], &SearchOptions::default()).is_empty());
    }

    #[test]
    fn test_string_fields_order() {
        let manager = InventoryManager::from_records(vec![
            json!({"model": "Verado", "hp": 300}),
            json!({"model": "SeaPro", "family": "SeaPro", "hp": "90"}),
        ]);
        // Record order first, then alphabetical within a record
        assert_eq!(manager.string_fields(), vec!["model", "family", "hp"]);

        let written_model_first =
            InventoryManager::from_records(vec![json!({"model": "Verado", "family": "Verado"})]);
        assert_eq!(written_model_first.string_fields(), vec!["family", "model"]);
    }

    #[test]
    fn test_search() {
        let manager = InventoryManager::from_records(vec![
            json!({"model": "Mercury 115 FourStroke"}),
            json!({"model": "Verado 300"}),
        ]);
        let results = manager.search("verado", &["model"], &SearchOptions::default());
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].item["model"], "Verado 300");
        assert_eq!(results[0].match_type, MatchType::StartsWith);
    }
}
