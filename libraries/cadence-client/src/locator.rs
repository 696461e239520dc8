//! Media locator handling.
//!
//! Catalog entries carry locators in three shapes: a full URL, a
//! root-relative path served by the backend itself, or a bare storage
//! key that needs a resolution round-trip. Google Drive share links are
//! a special case of the first: the share form is not streamable, so it
//! is rewritten to the direct-download form up front.

use std::sync::OnceLock;

use regex::Regex;

fn drive_file_id() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"/d/([a-zA-Z0-9_-]+)").expect("valid pattern"))
}

/// Resolve a locator locally, without a server round-trip.
///
/// Returns `None` when the locator is a bare storage key that only the
/// backend can resolve.
pub fn direct_url(locator: &str) -> Option<String> {
    if locator.contains("drive.google.com") {
        if let Some(caps) = drive_file_id().captures(locator) {
            let id = &caps[1];
            return Some(format!(
                "https://drive.google.com/uc?export=download&id={id}"
            ));
        }
    }

    if locator.starts_with("http://") || locator.starts_with("https://") || locator.starts_with('/')
    {
        return Some(locator.to_string());
    }

    None
}
