//! Main backend client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};
use url::Url;

use cadence_core::{Ad, AdCatalog, AdKind, CoreError, PlayReport, PlayReporter, SourceUrlResolver};

use crate::error::{ClientError, Result};
use crate::locator::direct_url;
use crate::types::{AdsResponse, ClientConfig, StorageUrlResponse};

/// Client for the Cadence Player backend API.
///
/// Cloning is cheap; the underlying connection pool is shared. The
/// client implements all three engine ports, so the usual wiring is
/// three boxed clones of one instance.
#[derive(Clone, Debug)]
pub struct ServerClient {
    http: Client,
    base_url: String,
}

impl ServerClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        if config.url.is_empty() {
            return Err(ClientError::InvalidUrl("URL cannot be empty".into()));
        }

        let base_url = config.url.trim_end_matches('/').to_string();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ClientError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }
        Url::parse(&base_url).map_err(|e| ClientError::InvalidUrl(e.to_string()))?;

        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("CadencePlayer/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ClientError::Request)?;

        Ok(Self { http, base_url })
    }

    /// Get the backend base URL.
    pub fn url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the pool of active ads of the given kind.
    pub async fn fetch_ads(&self, kind: AdKind) -> Result<Vec<Ad>> {
        let url = format!("{}/api/ads", self.base_url);
        debug!(url = %url, kind = kind.as_str(), "Fetching ad pool");

        let response = self
            .http
            .get(&url)
            .query(&[("type", kind.as_str())])
            .send()
            .await
            .map_err(connection_error)?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(ClientError::ServerError {
                status: status.as_u16(),
                message: error_text,
            });
        }

        let body: AdsResponse = response.json().await.map_err(|e| {
            ClientError::ParseError(format!("Failed to parse ad pool response: {e}"))
        })?;

        debug!(count = body.ads.len(), "Fetched ad pool");
        Ok(body.ads)
    }

    /// Resolve a bare storage key into a streamable URL.
    pub async fn storage_url(&self, key: &str) -> Result<String> {
        let url = format!("{}/api/storage-url", self.base_url);
        debug!(url = %url, key, "Resolving storage key");

        let response = self
            .http
            .get(&url)
            .query(&[("key", key)])
            .send()
            .await
            .map_err(connection_error)?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(ClientError::ServerError {
                status: status.as_u16(),
                message: error_text,
            });
        }

        let body: StorageUrlResponse = response.json().await.map_err(|e| {
            ClientError::ParseError(format!("Failed to parse storage-url response: {e}"))
        })?;

        Ok(body.url)
    }

    /// Log a completed play to the backend's history.
    pub async fn log_play(&self, report: &PlayReport) -> Result<()> {
        let url = format!("{}/api/player/log", self.base_url);
        debug!(url = %url, track_id = %report.track_id, "Logging play");

        let response = self
            .http
            .post(&url)
            .json(report)
            .send()
            .await
            .map_err(connection_error)?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(ClientError::ServerError {
                status: status.as_u16(),
                message: error_text,
            });
        }

        Ok(())
    }
}

fn connection_error(e: reqwest::Error) -> ClientError {
    if e.is_connect() || e.is_timeout() {
        ClientError::ServerUnreachable(e.to_string())
    } else {
        ClientError::Request(e)
    }
}

// ===== Engine Port Implementations =====

#[async_trait]
impl AdCatalog for ServerClient {
    async fn fetch_active_ads(&self, kind: AdKind) -> cadence_core::Result<Vec<Ad>> {
        self.fetch_ads(kind)
            .await
            .map_err(|e| CoreError::catalog(e.to_string()))
    }
}

#[async_trait]
impl SourceUrlResolver for ServerClient {
    async fn resolve(&self, locator: &str) -> cadence_core::Result<String> {
        if let Some(url) = direct_url(locator) {
            return Ok(url);
        }

        self.storage_url(locator).await.map_err(|e| {
            warn!(locator, error = %e, "Storage key resolution failed");
            CoreError::source_resolution(locator, e.to_string())
        })
    }
}

#[async_trait]
impl PlayReporter for ServerClient {
    async fn report(&self, report: &PlayReport) -> cadence_core::Result<()> {
        self.log_play(report)
            .await
            .map_err(|e| CoreError::report(e.to_string()))
    }
}
