/// Track domain type
use serde::{Deserialize, Serialize};

/// Audio track from the catalog
///
/// `relevancy_refs` are ids of other tracks considered strongly related
/// to this one; `genre_tags` are free-text genre labels beyond the
/// primary genre. Both are capped at three entries by the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// Unique track identifier
    pub id: String,

    /// Track title
    pub title: String,

    /// Artist name
    pub artist: String,

    /// Track duration in seconds
    pub duration_secs: f64,

    /// Locator for the playable byte stream (URL, path, or storage key)
    pub source_locator: String,

    /// Locator for the cover image
    pub cover_locator: String,

    /// Primary genre
    pub genre_primary: Option<String>,

    /// Secondary genre labels (up to 3)
    #[serde(default)]
    pub genre_tags: Vec<String>,

    /// Ids of strongly related tracks (up to 3)
    #[serde(default)]
    pub relevancy_refs: Vec<String>,

    /// Explicit-content flag
    #[serde(default)]
    pub explicit: bool,

    /// Lifetime play count
    #[serde(default)]
    pub plays: u64,
}

impl Track {
    /// Create a new track with minimal metadata
    pub fn new(id: impl Into<String>, title: impl Into<String>, artist: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            artist: artist.into(),
            duration_secs: 0.0,
            source_locator: String::new(),
            cover_locator: String::new(),
            genre_primary: None,
            genre_tags: Vec::new(),
            relevancy_refs: Vec::new(),
            explicit: false,
            plays: 0,
        }
    }

    /// All genre labels carried by this track (primary first)
    pub fn genres(&self) -> impl Iterator<Item = &str> {
        self.genre_primary
            .as_deref()
            .into_iter()
            .chain(self.genre_tags.iter().map(String::as_str))
    }

    /// Whether this track carries any genre label at all
    pub fn has_genres(&self) -> bool {
        self.genre_primary.is_some() || !self.genre_tags.is_empty()
    }

    /// Whether this track shares at least one genre label with `other`
    pub fn shares_genre(&self, other: &Track) -> bool {
        self.genres().any(|g| other.genres().any(|o| o == g))
    }

    /// Whether `id` is among this track's relevancy references
    pub fn is_relevant_to(&self, id: &str) -> bool {
        self.relevancy_refs.iter().any(|r| r == id)
    }
}
