//! Error types for delimlog-core.

use crate::config::OptionKey;

/// Rejected configuration. Raised at configure time only, never per record.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing parameter: {0}")]
    Missing(OptionKey),

    #[error("{key} is invalid for the delimited formatter: {value:?}")]
    InvalidSeparator { key: OptionKey, value: String },

    #[error("{key} must be within 0..=100, got {value}")]
    DropPercentOutOfRange { key: OptionKey, value: i64 },

    #[error("field '{0}' does not exist in columns")]
    UnknownLocalTimeField(String),

    #[error("unknown deserializer alias: {0}")]
    UnknownDeserializer(String),

    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
}

/// Misuse of a stage's lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    #[error("format called before the stage was configured")]
    Unconfigured,
}
