//! Cadence Player Storage
//!
//! `SQLite` persistence layer for player session state. The only
//! durable value today is the cumulative listening time that feeds the
//! ad scheduler, kept in a small key-value table so future session
//! state lands in the same place.
//!
//! # Example
//!
//! ```rust,no_run
//! use cadence_storage::{Database, SqliteListeningStore};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let db = Database::new("sqlite://cadence.db").await?;
//! let store = SqliteListeningStore::new(&db);
//! # Ok(())
//! # }
//! ```

mod database;
mod error;
mod listening;

pub use database::Database;
pub use error::{Result, StorageError};
pub use listening::SqliteListeningStore;
