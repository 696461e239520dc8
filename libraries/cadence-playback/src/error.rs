//! Error types for the playback engine

use thiserror::Error;

/// Playback errors
///
/// None of these ever reach a listener: the engine logs them and lets
/// playback degrade to silence. They exist so sink and port failures
/// stay typed on the way to the log.
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// Decoder/network rejected the stream during load
    #[error("Load failed: {0}")]
    Load(String),

    /// Output refused to start playback (platform policy)
    #[error("Playback start rejected: {0}")]
    Play(String),

    /// Generic sink failure
    #[error("Sink error: {0}")]
    Sink(String),

    /// Failure in a collaborator port
    #[error(transparent)]
    Core(#[from] cadence_core::CoreError),
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
