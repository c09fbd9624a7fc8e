//! Builder error types

use thiserror::Error;

use crate::builder::{BlockType, Screen};

/// Result type alias using [`BuilderError`]
pub type Result<T> = std::result::Result<T, BuilderError>;

#[derive(Debug, Error)]
pub enum BuilderError {
    // ─────────────────────────────────────────────────────────────
    // Layout Errors
    // ─────────────────────────────────────────────────────────────
    #[error("{screen} already holds {limit} blocks; upgrade to add more")]
    QuotaExceeded { screen: Screen, limit: usize },

    #[error("No block '{block_id}' on {screen}")]
    BlockNotFound { screen: Screen, block_id: String },

    #[error("{block_type} cannot be placed on {screen}")]
    IneligibleScreen { block_type: BlockType, screen: Screen },

    #[error("Duplicate block id '{block_id}' on {screen}")]
    DuplicateBlockId { screen: Screen, block_id: String },

    // ─────────────────────────────────────────────────────────────
    // Settings Errors
    // ─────────────────────────────────────────────────────────────
    #[error("{block_type} has no setting named '{key}'")]
    UnknownSetting { block_type: BlockType, key: String },

    #[error("Invalid value for '{key}': {reason}")]
    InvalidSetting { key: String, reason: String },

    #[error("Settings do not belong to a {block_type} block")]
    SettingsMismatch { block_type: BlockType },

    // ─────────────────────────────────────────────────────────────
    // Sync Errors
    // ─────────────────────────────────────────────────────────────
    #[error("A sync is already running")]
    SyncInProgress,

    #[error("No sync is running")]
    SyncNotStarted,

    #[error("Sync rejected: {message}")]
    SyncRejected { message: String },

    // ─────────────────────────────────────────────────────────────
    // Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),
}

impl BuilderError {
    pub fn invalid_setting(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidSetting {
            key: key.into(),
            reason: reason.into(),
        }
    }

    pub fn not_found(screen: Screen, block_id: impl Into<String>) -> Self {
        Self::BlockNotFound {
            screen,
            block_id: block_id.into(),
        }
    }

    /// Whether the UI should answer this error with the upgrade prompt
    pub fn is_quota(&self) -> bool {
        matches!(self, Self::QuotaExceeded { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = BuilderError::not_found(Screen::Home, "sl-1");
        assert_eq!(err.to_string(), "No block 'sl-1' on HOME");

        let err = BuilderError::QuotaExceeded {
            screen: Screen::Home,
            limit: 10,
        };
        assert!(err.to_string().contains("10 blocks"));
        assert!(err.is_quota());
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let err: BuilderError = json_err.into();
        assert!(matches!(err, BuilderError::Json(_)));
        assert!(!err.is_quota());
    }
}
