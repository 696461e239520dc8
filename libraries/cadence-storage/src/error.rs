/// Storage-specific errors
use thiserror::Error;

/// Result type alias using `StorageError`
pub type Result<T> = std::result::Result<T, StorageError>;

/// Storage error types
#[derive(Error, Debug)]
pub enum StorageError {
    /// Migration error
    #[error("Migration error: {0}")]
    Migration(String),

    /// Stored value could not be interpreted
    #[error("Invalid stored value for {key}: {value}")]
    InvalidValue { key: String, value: String },

    /// Database error from `SQLx`
    #[error(transparent)]
    Database(#[from] sqlx::Error),

    /// I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<StorageError> for cadence_core::CoreError {
    fn from(err: StorageError) -> Self {
        cadence_core::CoreError::store(err.to_string())
    }
}
