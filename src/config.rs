//! Engine-wide configuration
//!
//! Everything here has a built-in default; a JSON document only needs the
//! keys it wants to override.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::analysis::crack_time::DEFAULT_GUESSES_PER_SECOND;
use crate::error::{EngineError, Result};

/// Settings shared by every call on a [`crate::PasswordEngine`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineConfig {
    /// Offline guess rate assumed by the crack-time estimate
    pub guesses_per_second: f64,
    /// Characters kept per word when passphrases use short forms
    pub short_word_length: usize,
    /// Replace the built-in common-password list with this file
    pub common_passwords_path: Option<PathBuf>,
    /// Replace the built-in passphrase dictionary with this file
    pub word_list_path: Option<PathBuf>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            guesses_per_second: DEFAULT_GUESSES_PER_SECOND,
            short_word_length: crate::SHORT_WORD_LENGTH,
            common_passwords_path: None,
            word_list_path: None,
        }
    }
}

impl EngineConfig {
    /// Parse a JSON document
    pub fn from_json(json: &str) -> Result<Self> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        Self::from_json(&fs::read_to_string(path)?)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.guesses_per_second.is_finite() || self.guesses_per_second <= 0.0 {
            return Err(EngineError::ConfigError(format!(
                "guessesPerSecond must be positive, got {}",
                self.guesses_per_second
            )));
        }
        if self.short_word_length == 0 {
            return Err(EngineError::ConfigError(
                "shortWordLength must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.guesses_per_second, 1e10);
        assert_eq!(config.short_word_length, 4);
        assert!(config.common_passwords_path.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_partial() {
        let config = EngineConfig::from_json(r#"{"shortWordLength":3}"#).unwrap();
        assert_eq!(config.short_word_length, 3);
        assert_eq!(config.guesses_per_second, 1e10);
    }

    #[test]
    fn test_from_json_invalid_values() {
        let err = EngineConfig::from_json(r#"{"guessesPerSecond":0}"#).unwrap_err();
        assert!(err.is_config_error());

        let err = EngineConfig::from_json(r#"{"shortWordLength":0}"#).unwrap_err();
        assert!(err.is_config_error());
    }

    #[test]
    fn test_from_json_malformed() {
        match EngineConfig::from_json("{ not json") {
            Err(EngineError::ParseError(_)) => {}
            other => panic!("Expected ParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"guessesPerSecond":1000.0,"wordListPath":"/tmp/words.txt"}}"#).unwrap();
        let config = EngineConfig::load(file.path()).unwrap();
        assert_eq!(config.guesses_per_second, 1000.0);
        assert_eq!(config.word_list_path, Some(PathBuf::from("/tmp/words.txt")));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = EngineConfig::load(&dir.path().join("engine.json")).unwrap_err();
        assert!(matches!(err, EngineError::IoError(_)));
    }
}
