//! Service configuration
//!
//! One small TOML file naming the seed dataset:
//!
//! ```toml
//! dataset = "data/monuments.json"
//! ```

use denkmal_core::{DenkmalError, DenkmalResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration for [`MonumentService`](crate::MonumentService).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Path of the JSON seed dataset.
    pub dataset: PathBuf,
}

impl ServiceConfig {
    /// Parse a config from TOML text.
    pub fn from_toml(text: &str) -> DenkmalResult<Self> {
        toml::from_str(text).map_err(|e| DenkmalError::MalformedConfig(e.to_string()))
    }

    /// Read and parse a config file.
    pub fn from_path(path: impl AsRef<Path>) -> DenkmalResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_minimal_config() {
        let config = ServiceConfig::from_toml(r#"dataset = "data/monuments.json""#).unwrap();
        assert_eq!(config.dataset, PathBuf::from("data/monuments.json"));
    }

    #[test]
    fn test_bad_toml_is_malformed_config() {
        let err = ServiceConfig::from_toml("dataset = [broken").unwrap_err();
        assert!(matches!(err, DenkmalError::MalformedConfig(_)));
    }

    #[test]
    fn test_missing_key_is_malformed_config() {
        let err = ServiceConfig::from_toml("").unwrap_err();
        assert!(matches!(err, DenkmalError::MalformedConfig(_)));
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, r#"dataset = "seed.json""#).unwrap();
        let config = ServiceConfig::from_path(file.path()).unwrap();
        assert_eq!(config.dataset, PathBuf::from("seed.json"));
    }

    #[test]
    fn test_missing_file_is_io() {
        let err = ServiceConfig::from_path("/no/such/config.toml").unwrap_err();
        assert!(matches!(err, DenkmalError::Io(_)));
    }
}
