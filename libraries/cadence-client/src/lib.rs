//! Cadence Player Backend Client
//!
//! HTTP client library for the Cadence Player backend API.
//!
//! # Features
//!
//! - **Ad catalog**: Fetch the active pool of sponsored audio spots
//! - **Source resolution**: Turn stored media locators into streamable URLs
//! - **Play reporting**: Fire-and-forget play history logging
//!
//! The client implements the playback engine's port traits
//! ([`AdCatalog`](cadence_core::AdCatalog),
//! [`SourceUrlResolver`](cadence_core::SourceUrlResolver),
//! [`PlayReporter`](cadence_core::PlayReporter)), so one configured
//! instance can be handed to the engine for all three concerns.
//!
//! # Example
//!
//! ```ignore
//! use cadence_client::{ClientConfig, ServerClient};
//! use cadence_core::AdKind;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig::new("https://music.example.com");
//!     let client = ServerClient::new(config)?;
//!
//!     let ads = client.fetch_ads(AdKind::AudioBanner).await?;
//!     println!("Pool holds {} active spots", ads.len());
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod locator;
mod types;

// Re-export main types
pub use client::ServerClient;
pub use error::{ClientError, Result};
pub use locator::direct_url;
pub use types::{AdsResponse, ClientConfig, StorageUrlResponse};
