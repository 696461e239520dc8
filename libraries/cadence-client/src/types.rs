//! Configuration and wire types for the backend client.

use cadence_core::Ad;
use serde::{Deserialize, Serialize};

/// Backend connection configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the backend, e.g. `https://music.example.com`
    pub url: String,
}

impl ClientConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

/// Response envelope for the ad catalog endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdsResponse {
    pub ads: Vec<Ad>,
}

/// Response for a storage-key resolution request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageUrlResponse {
    pub url: String,
}
