//! Dataset loading and validation errors

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or validating a dashboard dataset
#[derive(Debug, Error)]
pub enum DataError {
    /// Dataset file could not be read
    #[error("Failed to read dataset {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Dataset is not valid JSON or carries an unknown category
    #[error("Failed to parse dataset {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A record violates a range or identity invariant
    #[error("Invalid {entity} record '{id}': {reason}")]
    Invalid {
        entity: &'static str,
        id: String,
        reason: String,
    },
}

impl DataError {
    pub(crate) fn invalid(entity: &'static str, id: &str, reason: impl Into<String>) -> Self {
        DataError::Invalid {
            entity,
            id: id.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result alias for dataset operations
pub type Result<T> = std::result::Result<T, DataError>;
