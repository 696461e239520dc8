//! Player events
//!
//! Event-based communication for UI synchronization. The engine queues
//! events as it transitions; the surrounding UI drains them with
//! [`crate::PlayerEngine::take_events`].

use serde::{Deserialize, Serialize};

use crate::types::PlaybackState;

/// Events emitted by the playback engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlayerEvent {
    /// Playback state changed
    StateChanged {
        /// The new state
        state: PlaybackState,
    },

    /// Current item changed (track or ad)
    TrackChanged {
        /// Id of the new current item
        item_id: String,
        /// Id of the previous item, if any
        previous_item_id: Option<String>,
        /// Whether the new item is sponsored content
        is_ad: bool,
    },

    /// An ad break began; seek/skip/previous are disabled until it ends
    AdStarted {
        /// Id of the ad
        ad_id: String,
    },

    /// The ad break ended; playback resumes from the head of the queue
    AdEnded {
        /// Id of the ad
        ad_id: String,
    },

    /// Periodic position report (~1 Hz while playing)
    PositionUpdate {
        /// Current position in seconds
        position_secs: f64,
        /// Current item duration in seconds
        duration_secs: f64,
    },

    /// Volume changed
    VolumeChanged {
        /// New volume in [0, 1]
        volume: f32,
    },

    /// The queue was replaced by an explicit play request
    QueueReplaced {
        /// New queue length
        length: usize,
    },

    /// A load or playback failure was swallowed; nothing is audible
    PlaybackFailed {
        /// Failure description
        message: String,
    },
}
