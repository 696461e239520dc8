//! Core types for the playback engine

use serde::{Deserialize, Serialize};

/// Playback state
///
/// `Ended` is transient after natural end-of-stream; it immediately
/// triggers an end-of-track transition and only rests there when the
/// queue is exhausted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackState {
    /// No current item
    Idle,

    /// Source resolution or sink load in flight
    Loading,

    /// Currently playing
    Playing,

    /// Paused mid-item
    Paused,

    /// Reached end-of-stream (end of queue when resting here)
    Ended,
}

/// Configuration for the playback engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Cumulative listening seconds before the time trigger fires
    /// (default: 1800, i.e. 30 minutes of actual listening)
    pub ad_listening_threshold_secs: f64,

    /// Consecutive manual skips before the skip trigger fires (default: 5)
    pub ad_skip_threshold: u32,

    /// Seconds of listening between persistence flushes (default: 5)
    pub flush_interval_secs: f64,

    /// Initial volume in [0, 1] (default: 0.8)
    pub initial_volume: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            ad_listening_threshold_secs: 1800.0,
            ad_skip_threshold: 5,
            flush_interval_secs: 5.0,
            initial_volume: 0.8,
        }
    }
}
