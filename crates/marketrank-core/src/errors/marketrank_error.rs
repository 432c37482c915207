use super::{AggregateError, PersistenceError};

/// Top-level error type. Every fallible seam in the workspace returns this.
///
/// None of these ever reach the UI layer: the stores and the session log and
/// swallow them, degrading to "fewer signals".
#[derive(Debug, thiserror::Error)]
pub enum MarketrankError {
    #[error("persistence error: {0}")]
    PersistenceError(#[from] PersistenceError),

    #[error("aggregate error: {0}")]
    AggregateError(#[from] AggregateError),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("config error: {reason}")]
    ConfigError { reason: String },
}

impl From<toml::de::Error> for MarketrankError {
    fn from(err: toml::de::Error) -> Self {
        Self::ConfigError {
            reason: err.to_string(),
        }
    }
}
