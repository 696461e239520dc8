/// Play event reporting type
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Play event reported on natural end-of-stream of a track
///
/// Delivery is fire-and-forget from the player's perspective; a failed
/// report never affects playback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayReport {
    /// Id of the track that finished
    pub track_id: String,

    /// When playback of the track started
    pub started_at: DateTime<Utc>,

    /// When the track reached end-of-stream
    pub ended_at: DateTime<Utc>,

    /// Seconds of actual listening within the track
    pub seconds_played: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_serializes_with_timestamps() {
        let report = PlayReport {
            track_id: "t1".to_string(),
            started_at: Utc::now(),
            ended_at: Utc::now(),
            seconds_played: 181.0,
        };

        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"track_id\":\"t1\""));
        assert!(json.contains("seconds_played"));
    }
}
