//! Error types for configuration values.

use thiserror::Error;

/// Errors that can occur while populating a configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A value was rejected by a field's validation rule.
    #[error("Invalid argument for {field}: {reason}")]
    InvalidArgument {
        field: &'static str,
        reason: String,
    },
}

impl ConfigError {
    pub(crate) fn invalid_argument(field: &'static str, reason: impl Into<String>) -> Self {
        ConfigError::InvalidArgument {
            field,
            reason: reason.into(),
        }
    }

    /// Name of the field that rejected the value.
    pub fn field(&self) -> &'static str {
        match self {
            ConfigError::InvalidArgument { field, .. } => field,
        }
    }
}
