//! Search option resolution: defaults, then an option file, then CLI flags.
//!
//! CHANGELOG:
//! - 10/18/2026 - Initial implementation

use crate::search::{PartialSearchOptions, SearchOptions};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Env var naming a default JSON option file.
pub const OPTIONS_ENV: &str = "MOTOR_SEARCH_OPTIONS";

/// Errors that can occur when resolving search options.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read options file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse options file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Threshold must be between 0 and 1, got {0}")]
    InvalidThreshold(f64),
}

/// Read a JSON file of partial search options.
pub fn load_options_file<P: AsRef<Path>>(path: P) -> Result<PartialSearchOptions, ConfigError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Option file named by MOTOR_SEARCH_OPTIONS, if set and present.
fn env_options_file() -> Option<PathBuf> {
    let path = PathBuf::from(std::env::var_os(OPTIONS_ENV)?);
    if path.exists() {
        Some(path)
    } else {
        warn!(path = ?path, "ignoring {} - file not found", OPTIONS_ENV);
        None
    }
}

/// Resolve options for one search.
///
/// Layers, each shallow-merged over the previous:
/// 1. built-in defaults
/// 2. `options_file`, or the MOTOR_SEARCH_OPTIONS file when not given
/// 3. `flags`
pub fn resolve_options(
    options_file: Option<&Path>,
    flags: &PartialSearchOptions,
) -> Result<SearchOptions, ConfigError> {
    let file_path = options_file.map(Path::to_path_buf).or_else(env_options_file);

    let from_file = match file_path {
        Some(path) => {
            debug!(path = ?path, "loading search options");
            load_options_file(&path)?
        }
        None => PartialSearchOptions::default(),
    };

    let options = flags.merge_over(&from_file.merge_over(&SearchOptions::default()));
    validate(&options)?;
    Ok(options)
}

/// Reject option values the CLI should not pass through.
pub fn validate(options: &SearchOptions) -> Result<(), ConfigError> {
    if !(0.0..=1.0).contains(&options.threshold) {
        return Err(ConfigError::InvalidThreshold(options.threshold));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_options_file() {
        let file = write_temp(r#"{"threshold": 0.6, "maxResults": 10}"#);
        let partial = load_options_file(file.path()).unwrap();
        assert_eq!(partial.threshold, Some(0.6));
        assert_eq!(partial.max_results, Some(Some(10)));
    }

    #[test]
    fn test_load_options_file_bad_json() {
        let file = write_temp("{threshold: }");
        let err = load_options_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("options.json");
        let err = resolve_options(Some(missing.as_path()), &PartialSearchOptions::default()).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_flags_override_file() {
        let file = write_temp(r#"{"threshold": 0.6, "boostContains": 0.7}"#);
        let flags = PartialSearchOptions {
            threshold: Some(0.5),
            max_results: Some(None),
            ..Default::default()
        };
        let options = resolve_options(Some(file.path()), &flags).unwrap();
        assert_eq!(options.threshold, 0.5);
        assert_eq!(options.boost_contains, 0.7);
        assert_eq!(options.max_results, None);
        assert_eq!(options.boost_exact, 1.0);
    }

    #[test]
    fn test_invalid_threshold() {
        let file = write_temp(r#"{"threshold": 1.5}"#);
        let err = resolve_options(Some(file.path()), &PartialSearchOptions::default()).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidThreshold(t) if t == 1.5));
    }

    #[test]
    fn test_validate_defaults() {
        assert!(validate(&SearchOptions::default()).is_ok());
    }
}
