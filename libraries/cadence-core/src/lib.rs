//! Cadence Player Core
//!
//! Domain types, collaborator ports, and error handling shared across the
//! Cadence Player crates.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Track`, `Ad`, `PlayableItem`, `PlayReport`
//! - **Ports**: `AdCatalog`, `SourceUrlResolver`, `PlayReporter`, `ListeningStore`
//! - **Error Handling**: Unified `CoreError` and `Result` types
//!
//! The playback engine (`cadence-playback`) consumes these ports; the
//! HTTP and storage crates implement them. Nothing in this crate performs
//! I/O itself.
//!
//! # Example
//!
//! ```rust
//! use cadence_core::types::{PlayableItem, Track};
//!
//! let track = Track::new("t1", "Night Drive", "Mills");
//! let item = PlayableItem::Track(track);
//! assert!(!item.is_ad());
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod ports;
pub mod types;

// Re-export commonly used types
pub use error::{CoreError, Result};
pub use ports::{AdCatalog, ListeningStore, PlayReporter, SourceUrlResolver};
pub use types::{Ad, AdKind, PlayReport, PlayableItem, Track};
