use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// Errors that can occur while caring for a pet
#[derive(Error, Debug)]
pub enum PetError {
    /// Error when a custom feed/play amount is negative
    #[error("Invalid amount for {action}: {amount} (must not be negative)")]
    InvalidAmount { action: &'static str, amount: i64 },

    /// Error when the pet has already passed out
    #[error("{name} has passed out and can no longer be cared for")]
    PetExpired { name: Arc<String> },

    /// Error when a species name cannot be parsed
    #[error("Unknown species: {0}")]
    UnknownSpecies(Arc<String>),

    /// Error when locking the shared pet state
    #[error("Failed to lock the pet state: {0}")]
    StateLockError(Arc<String>),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(Arc<String>),

    /// Error when reading a config file
    #[error("Failed to read config {path}: {message}")]
    ConfigReadError { path: PathBuf, message: Arc<String> },

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Type alias for Result with PetError
pub type Result<T> = std::result::Result<T, PetError>;

impl<T> From<std::sync::PoisonError<T>> for PetError {
    fn from(error: std::sync::PoisonError<T>) -> Self {
        PetError::StateLockError(Arc::new(error.to_string()))
    }
}

impl PetError {
    /// Whether the session can keep going after this error
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            PetError::InvalidAmount { .. } | PetError::UnknownSpecies(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_amount_message() {
        let err = PetError::InvalidAmount {
            action: "feed",
            amount: -3,
        };
        assert_eq!(
            err.to_string(),
            "Invalid amount for feed: -3 (must not be negative)"
        );
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_expired_is_not_recoverable() {
        let err = PetError::PetExpired {
            name: Arc::new("Rex".to_string()),
        };
        assert!(err.to_string().starts_with("Rex has passed out"));
        assert!(!err.is_recoverable());
    }
}
