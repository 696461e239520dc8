//! Platform-agnostic sound output sink
//!
//! Abstracts the audio output for different platforms (web audio,
//! desktop decoder, test doubles). The engine drives the sink through
//! this trait and consumes everything the sink reports as [`SinkEvent`]s.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A single decodable audio output
///
/// At most one sound is ever live: starting a new [`load`](AudioSink::load)
/// unconditionally tears down any prior handle before creating the new
/// one. This teardown is the system's only cancellation mechanism for an
/// in-flight load.
///
/// Implementations emit [`SinkEvent`]s into the engine's dispatch point:
/// `Started` once playback actually begins, `PositionTick` at roughly
/// 1 Hz while playing (never while paused), `Ended` on natural
/// end-of-stream, and the two error events. On a `PlayError` (output
/// blocked by platform autoplay policy) the sink itself retries playback
/// once after the output unlocks; this is the only automatic retry in
/// the system.
#[async_trait]
pub trait AudioSink: Send {
    /// Load a stream URL, discarding any prior live handle
    async fn load(&mut self, url: &str) -> Result<()>;

    /// Start or resume playback of the loaded stream
    fn play(&mut self) -> Result<()>;

    /// Pause playback
    fn pause(&mut self);

    /// Seek to a position in seconds
    fn seek(&mut self, position_secs: f64);

    /// Set output volume in [0, 1]
    fn set_volume(&mut self, volume: f32);
}

/// Everything a sink reports back to the engine
///
/// A closed set consumed through one dispatch point, so transition logic
/// stays centralized and exhaustively testable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SinkEvent {
    /// Playback actually started; duration is now known
    Started {
        /// Stream duration in seconds
        duration_secs: f64,
    },

    /// Periodic position report (~1 Hz while playing)
    PositionTick {
        /// Current position in seconds
        position_secs: f64,
    },

    /// Natural end-of-stream
    Ended,

    /// Decoder or network rejected the stream
    LoadError {
        /// Sink-provided failure description
        message: String,
    },

    /// Output refused to start (the sink retries once on its own)
    PlayError {
        /// Sink-provided failure description
        message: String,
    },
}
