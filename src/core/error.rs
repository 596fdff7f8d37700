//! Error types shared across the crate.

use std::path::PathBuf;

/// Errors raised when building or indexing a [`crate::signature::Signature`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SignatureError {
    #[error("signature must have exactly {expected} dimensions, got {actual}")]
    WrongLength { expected: usize, actual: usize },

    #[error("signature dimension index {index} out of range (dimensions: {dimensions})")]
    IndexOutOfRange { index: usize, dimensions: usize },
}

/// Errors raised while loading or validating a [`crate::core::config::BalanceConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read balance config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse balance config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid balance config: {0}")]
    Invalid(String),
}

/// Errors raised by [`crate::core::game_state::GameState`] slot and inventory moves.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SessionError {
    #[error("dungeon slot {0} does not exist")]
    SlotOutOfRange(usize),

    #[error("dungeon slot {0} is still locked")]
    SlotLocked(usize),

    #[error("dungeon slot {0} is empty")]
    SlotEmpty(usize),

    #[error("item {0} is not in the inventory")]
    ItemNotFound(uuid::Uuid),

    #[error("inventory is full")]
    InventoryFull,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signature_error_messages() {
        let err = SignatureError::WrongLength {
            expected: 8,
            actual: 3,
        };
        assert_eq!(
            err.to_string(),
            "signature must have exactly 8 dimensions, got 3"
        );

        let err = SignatureError::IndexOutOfRange {
            index: 9,
            dimensions: 8,
        };
        assert!(err.to_string().contains("index 9"));
    }

    #[test]
    fn test_config_error_from_serde() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: ConfigError = parse_err.into();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
