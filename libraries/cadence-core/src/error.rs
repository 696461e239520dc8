/// Core error types for Cadence Player
use thiserror::Error;

/// Result type alias using `CoreError`
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error type shared by the collaborator ports
#[derive(Error, Debug)]
pub enum CoreError {
    /// Ad catalog query failed
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// A source locator could not be turned into a stream URL
    #[error("Source resolution failed for '{locator}': {message}")]
    SourceResolution { locator: String, message: String },

    /// Durable listening-time slot could not be read or written
    #[error("Store error: {0}")]
    Store(String),

    /// Play event could not be delivered
    #[error("Report error: {0}")]
    Report(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl CoreError {
    /// Create a catalog error
    pub fn catalog(msg: impl Into<String>) -> Self {
        Self::Catalog(msg.into())
    }

    /// Create a source resolution error
    pub fn source_resolution(locator: impl Into<String>, message: impl Into<String>) -> Self {
        Self::SourceResolution {
            locator: locator.into(),
            message: message.into(),
        }
    }

    /// Create a store error
    pub fn store(msg: impl Into<String>) -> Self {
        Self::Store(msg.into())
    }

    /// Create a report error
    pub fn report(msg: impl Into<String>) -> Self {
        Self::Report(msg.into())
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}
