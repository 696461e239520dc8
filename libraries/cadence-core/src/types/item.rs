/// Playable item sum type
use serde::{Deserialize, Serialize};

use crate::types::{Ad, Track};

/// Anything the player can load: a catalog track or a sponsored spot
///
/// An explicit sum type rather than a structural field check, so ad
/// handling can never be confused by a track that happens to carry an
/// ad-shaped field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlayableItem {
    /// A catalog track
    Track(Track),

    /// A sponsored audio spot
    Ad(Ad),
}

impl PlayableItem {
    /// Unique identifier of the underlying item
    pub fn id(&self) -> &str {
        match self {
            PlayableItem::Track(t) => &t.id,
            PlayableItem::Ad(a) => &a.id,
        }
    }

    /// Display title
    pub fn title(&self) -> &str {
        match self {
            PlayableItem::Track(t) => &t.title,
            PlayableItem::Ad(a) => &a.title,
        }
    }

    /// Locator for the playable byte stream
    pub fn source_locator(&self) -> &str {
        match self {
            PlayableItem::Track(t) => &t.source_locator,
            PlayableItem::Ad(a) => &a.source_locator,
        }
    }

    /// Locator for the cover/banner image
    pub fn cover_locator(&self) -> &str {
        match self {
            PlayableItem::Track(t) => &t.cover_locator,
            PlayableItem::Ad(a) => &a.cover_locator,
        }
    }

    /// Item duration in seconds as known by the catalog
    pub fn duration_secs(&self) -> f64 {
        match self {
            PlayableItem::Track(t) => t.duration_secs,
            PlayableItem::Ad(a) => a.duration_secs,
        }
    }

    /// Whether this item is sponsored content
    pub fn is_ad(&self) -> bool {
        matches!(self, PlayableItem::Ad(_))
    }

    /// The underlying track, if this is one
    pub fn as_track(&self) -> Option<&Track> {
        match self {
            PlayableItem::Track(t) => Some(t),
            PlayableItem::Ad(_) => None,
        }
    }
}

impl From<Track> for PlayableItem {
    fn from(track: Track) -> Self {
        PlayableItem::Track(track)
    }
}

impl From<Ad> for PlayableItem {
    fn from(ad: Ad) -> Self {
        PlayableItem::Ad(ad)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_discriminates_tracks_and_ads() {
        let track: PlayableItem = Track::new("t1", "Song", "Artist").into();
        let ad: PlayableItem = Ad::new("a1", "Spot").into();

        assert!(!track.is_ad());
        assert!(ad.is_ad());
        assert_eq!(track.id(), "t1");
        assert_eq!(ad.id(), "a1");
        assert!(track.as_track().is_some());
        assert!(ad.as_track().is_none());
    }
}
