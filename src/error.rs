//! Error types for the password engine

use thiserror::Error;

/// Main error type for engine operations
#[derive(Error, Debug)]
pub enum EngineError {
    /// Caller supplied an out-of-range or self-contradictory configuration.
    /// Raised before any randomness is consumed.
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// An internal invariant could not be satisfied within the retry budget.
    /// Signals a logic or validation bug, never a transient condition.
    #[error("Generation failed: {0}")]
    GenerationError(String),

    /// Hashing backend failure
    #[error("Hash error: {0}")]
    HashError(String),

    /// Malformed configuration document
    #[error("Parse error: {0}")]
    ParseError(String),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl EngineError {
    /// Whether the caller can fix this error by changing its input
    pub fn is_config_error(&self) -> bool {
        matches!(self, EngineError::ConfigError(_))
    }
}

impl From<bcrypt::BcryptError> for EngineError {
    fn from(err: bcrypt::BcryptError) -> Self {
        EngineError::HashError(err.to_string())
    }
}

impl From<serde_json::Error> for EngineError {
    fn from(err: serde_json::Error) -> Self {
        EngineError::ParseError(err.to_string())
    }
}

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EngineError::ConfigError("length 3 outside [4, 128]".to_string());
        assert!(err.to_string().contains("length 3"));
        assert!(err.to_string().starts_with("Invalid configuration"));

        let err = EngineError::GenerationError("coverage".to_string());
        assert_eq!(err.to_string(), "Generation failed: coverage");

        let err = EngineError::ParseError("eof".to_string());
        assert!(err.to_string().contains("eof"));
    }

    #[test]
    fn test_is_config_error() {
        assert!(EngineError::ConfigError("x".to_string()).is_config_error());
        assert!(!EngineError::GenerationError("x".to_string()).is_config_error());
    }

    #[test]
    fn test_error_from_bcrypt() {
        let bcrypt_err = bcrypt::BcryptError::CostNotAllowed(99);
        let engine_err: EngineError = bcrypt_err.into();
        match engine_err {
            EngineError::HashError(msg) => assert!(!msg.is_empty()),
            _ => panic!("Expected HashError"),
        }
    }

    #[test]
    fn test_error_from_serde_json() {
        let json_err = serde_json::from_str::<u32>("not a number").unwrap_err();
        let engine_err: EngineError = json_err.into();
        match engine_err {
            EngineError::ParseError(msg) => assert!(!msg.is_empty()),
            _ => panic!("Expected ParseError"),
        }
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let engine_err: EngineError = io_err.into();
        assert!(engine_err.to_string().contains("missing"));
    }
}
