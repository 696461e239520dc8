//! Cadence Player - Playback Engine
//!
//! Platform-agnostic playback engine for Cadence Player.
//!
//! This crate provides:
//! - The playback state machine (queue, current item, play/pause/loading)
//! - Three-tier next-track resolution (relevancy, genre, sequential)
//! - Ad break scheduling (listening-time and skip-count triggers)
//! - Session counters persisted across restarts
//! - A sound output sink abstraction
//!
//! # Architecture
//!
//! `cadence-playback` is completely platform-agnostic: audio output,
//! the ad catalog, locator resolution, play reporting, and listening-time
//! persistence are all provided via traits (`AudioSink` here, the rest in
//! `cadence-core::ports`).
//!
//! Control flow is single-threaded and event-driven. The sink reports
//! everything that happens to the audio output as a [`SinkEvent`], and the
//! engine consumes those through one dispatch point
//! ([`PlayerEngine::handle_sink_event`]); user actions are plain async
//! methods. No playback logic ever runs concurrently with itself.
//!
//! # Example
//!
//! ```ignore
//! use cadence_playback::{PlayerEngine, PlayerConfig, SinkEvent};
//!
//! let mut engine = PlayerEngine::new(
//!     PlayerConfig::default(),
//!     sink,      // impl AudioSink
//!     catalog,   // impl AdCatalog
//!     urls,      // impl SourceUrlResolver
//!     reporter,  // impl PlayReporter
//!     store,     // impl ListeningStore
//! ).await?;
//!
//! engine.play_queue(tracks).await;
//! engine.handle_sink_event(SinkEvent::Started { duration_secs: 180.0 }).await;
//! ```

mod counters;
mod engine;
mod error;
mod events;
mod resolver;
mod scheduler;
mod sink;
mod types;

// Public exports
pub use counters::SessionCounters;
pub use engine::PlayerEngine;
pub use error::{PlaybackError, Result};
pub use events::PlayerEvent;
pub use resolver::resolve_next;
pub use scheduler::AdScheduler;
pub use sink::{AudioSink, SinkEvent};
pub use types::{PlaybackState, PlayerConfig};
