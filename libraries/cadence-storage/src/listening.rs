//! Durable cumulative listening time.
//!
//! Backs the ad scheduler's time trigger across player restarts. The
//! value lives in the `player_state` key-value table and is written
//! through the [`ListeningStore`] port the playback engine flushes to.

use async_trait::async_trait;
use sqlx::sqlite::SqlitePool;
use sqlx::Row;
use tracing::warn;

use cadence_core::ListeningStore;

use crate::database::Database;
use crate::error::Result;

const LISTENING_SECONDS_KEY: &str = "player.cumulative_listening_seconds";

/// SQLite-backed listening time store
pub struct SqliteListeningStore {
    pool: SqlitePool,
}

impl SqliteListeningStore {
    pub fn new(database: &Database) -> Self {
        Self {
            pool: database.pool().clone(),
        }
    }

    async fn get_state(&self, key: &str) -> Result<Option<String>> {
        let row = sqlx::query("SELECT value FROM player_state WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|r| r.get::<String, _>("value")))
    }

    async fn set_state(&self, key: &str, value: &str) -> Result<()> {
        sqlx::query(
            "INSERT INTO player_state (key, value, updated_at) VALUES (?, ?, ?)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
        )
        .bind(key)
        .bind(value)
        .bind(chrono::Utc::now().timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

#[async_trait]
impl ListeningStore for SqliteListeningStore {
    /// Read the persisted listening time.
    ///
    /// A missing row is a fresh profile and reads as zero; a value that
    /// does not parse is treated the same way rather than wedging the
    /// player.
    async fn load(&self) -> cadence_core::Result<f64> {
        let Some(raw) = self.get_state(LISTENING_SECONDS_KEY).await? else {
            return Ok(0.0);
        };

        match raw.parse::<f64>() {
            Ok(seconds) => Ok(seconds),
            Err(_) => {
                warn!(value = %raw, "Unparseable listening time in store, resetting to zero");
                Ok(0.0)
            }
        }
    }

    async fn save(&self, seconds: f64) -> cadence_core::Result<()> {
        self.set_state(LISTENING_SECONDS_KEY, &seconds.to_string())
            .await?;
        Ok(())
    }
}
