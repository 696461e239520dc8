//! Collaborator ports for the playback engine
//!
//! The engine never talks to the network or disk directly; it goes
//! through these traits. `cadence-client` and `cadence-storage` provide
//! the production implementations, tests provide stubs.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{Ad, AdKind, PlayReport};

/// Query port for the external ad catalog
#[async_trait]
pub trait AdCatalog: Send + Sync {
    /// Fetch the currently active ads of the given kind
    ///
    /// An empty list is a valid, non-error response.
    async fn fetch_active_ads(&self, kind: AdKind) -> Result<Vec<Ad>>;
}

/// Port resolving a source locator to a directly fetchable stream URL
#[async_trait]
pub trait SourceUrlResolver: Send + Sync {
    /// Resolve `locator` to a stream URL
    ///
    /// Absolute and root-relative URLs pass through (possibly rewritten
    /// for known file hosts); opaque storage keys require a remote
    /// lookup, which may fail.
    async fn resolve(&self, locator: &str) -> Result<String>;
}

/// Port delivering play events to the external logging endpoint
#[async_trait]
pub trait PlayReporter: Send + Sync {
    /// Report a finished track play and signal the play-count increment
    async fn report(&self, report: &PlayReport) -> Result<()>;
}

/// Durable slot for cumulative listening seconds
///
/// The single value whose lifetime exceeds a session: read once at
/// startup, written on every flush and counter reset.
#[async_trait]
pub trait ListeningStore: Send + Sync {
    /// Read the persisted listening seconds (0.0 when never written)
    async fn load(&self) -> Result<f64>;

    /// Persist the current listening seconds
    async fn save(&self, seconds: f64) -> Result<()>;
}
