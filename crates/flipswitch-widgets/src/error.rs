//! Error types for flipswitch-widgets.

use thiserror::Error;

/// Errors that can occur while configuring a toggle.
#[derive(Debug, Error)]
pub enum ToggleError {
    /// Configuration text was not valid TOML for a toggle config.
    #[error("TOML config error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration text was not valid JSON for a toggle config.
    #[error("JSON config error: {0}")]
    Json(#[from] serde_json::Error),

    /// A configuration value is out of range.
    #[error("Invalid config: {field} {reason}")]
    InvalidConfig {
        /// Offending field name
        field: &'static str,
        /// What is wrong with it
        reason: String,
    },
}

impl ToggleError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }
}

/// Result alias for toggle configuration operations.
pub type Result<T> = std::result::Result<T, ToggleError>;
