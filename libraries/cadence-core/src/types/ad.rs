/// Ad domain type
use serde::{Deserialize, Serialize};

/// Sponsored content kind
///
/// `AudioBanner` ads carry a playable audio stream; `BannerOnly` ads are
/// purely visual and never enter the playback path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdKind {
    /// Audio spot with accompanying banner art
    AudioBanner,

    /// Visual-only banner
    BannerOnly,
}

impl AdKind {
    /// Wire name used by the catalog's query parameter
    pub fn as_str(self) -> &'static str {
        match self {
            AdKind::AudioBanner => "audio_banner",
            AdKind::BannerOnly => "banner_only",
        }
    }
}

/// Sponsored content entry from the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ad {
    /// Unique ad identifier
    pub id: String,

    /// Ad title
    pub title: String,

    /// Locator for the playable byte stream
    pub source_locator: String,

    /// Locator for the banner image
    pub cover_locator: String,

    /// Relative weight 1-10 (informational; selection is uniform)
    pub weight: u8,

    /// Ad duration in seconds
    pub duration_secs: f64,

    /// Kind of sponsored content
    pub kind: AdKind,

    /// Click-through URL shown alongside the banner
    #[serde(default)]
    pub cta_url: Option<String>,

    /// Whether the ad is currently active in the catalog
    #[serde(default)]
    pub active: bool,
}

impl Ad {
    /// Create a new active audio ad with minimal metadata
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            source_locator: String::new(),
            cover_locator: String::new(),
            weight: 1,
            duration_secs: 0.0,
            kind: AdKind::AudioBanner,
            cta_url: None,
            active: true,
        }
    }
}
