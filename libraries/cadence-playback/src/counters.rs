//! Session counters
//!
//! Tracks cumulative listening seconds (persisted across restarts) and
//! consecutive track skips since the last ad. Both reset the instant an
//! ad begins.

use cadence_core::{ListeningStore, Result};
use tracing::debug;

/// Listening-time and skip counters for the current session
///
/// `cumulative_listening_secs` is the only value in the player whose
/// lifetime exceeds a session: it is read verbatim from the injected
/// [`ListeningStore`] once at startup and flushed back at least every
/// `flush_interval_secs` of accumulated listening, plus immediately on
/// every reset. `skips_since_last_ad` is in-memory only.
pub struct SessionCounters {
    /// Seconds of actual (non-ad) listening accumulated across sessions
    listening_secs: f64,

    /// Manual skips since the last ad break
    skips_since_last_ad: u32,

    /// Listening seconds accumulated since the last flush
    unflushed_secs: f64,

    /// Flush cadence in listening seconds
    flush_interval_secs: f64,

    store: Box<dyn ListeningStore>,
}

impl SessionCounters {
    /// Load counters from the store
    ///
    /// The persisted listening time is taken verbatim; there is no decay
    /// and no server reconciliation.
    pub async fn load(store: Box<dyn ListeningStore>, flush_interval_secs: f64) -> Result<Self> {
        let listening_secs = store.load().await?;
        debug!(listening_secs, "Loaded persisted listening time");

        Ok(Self {
            listening_secs,
            skips_since_last_ad: 0,
            unflushed_secs: 0.0,
            flush_interval_secs,
            store,
        })
    }

    /// Record one elapsed second of active playback
    ///
    /// Ad seconds never count toward listening time. Flushes to the
    /// store once enough unflushed seconds accumulate.
    pub async fn on_tick(&mut self, is_ad: bool) -> Result<()> {
        if is_ad {
            return Ok(());
        }

        self.listening_secs += 1.0;
        self.unflushed_secs += 1.0;

        if self.unflushed_secs >= self.flush_interval_secs {
            self.store.save(self.listening_secs).await?;
            self.unflushed_secs = 0.0;
        }

        Ok(())
    }

    /// Record a manual skip
    pub fn on_skip(&mut self) {
        self.skips_since_last_ad += 1;
    }

    /// Zero both counters and persist the zeroed listening time immediately
    pub async fn reset_on_ad_start(&mut self) -> Result<()> {
        self.listening_secs = 0.0;
        self.skips_since_last_ad = 0;
        self.unflushed_secs = 0.0;
        self.store.save(0.0).await?;
        debug!("Counters reset on ad start");
        Ok(())
    }

    /// Cumulative listening seconds (ad time excluded)
    pub fn listening_secs(&self) -> f64 {
        self.listening_secs
    }

    /// Consecutive manual skips since the last ad
    pub fn skips_since_last_ad(&self) -> u32 {
        self.skips_since_last_ad
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    /// In-memory store that records every save
    struct MemoryStore {
        value: Arc<Mutex<f64>>,
        saves: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl ListeningStore for MemoryStore {
        async fn load(&self) -> Result<f64> {
            Ok(*self.value.lock().unwrap())
        }

        async fn save(&self, seconds: f64) -> Result<()> {
            *self.value.lock().unwrap() = seconds;
            self.saves.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    fn memory_store(initial: f64) -> (Box<MemoryStore>, Arc<Mutex<f64>>, Arc<AtomicUsize>) {
        let value = Arc::new(Mutex::new(initial));
        let saves = Arc::new(AtomicUsize::new(0));
        let store = Box::new(MemoryStore {
            value: value.clone(),
            saves: saves.clone(),
        });
        (store, value, saves)
    }

    #[tokio::test]
    async fn loads_persisted_value_verbatim() {
        let (store, _, _) = memory_store(1234.5);
        let counters = SessionCounters::load(store, 5.0).await.unwrap();

        assert_eq!(counters.listening_secs(), 1234.5);
        assert_eq!(counters.skips_since_last_ad(), 0);
    }

    #[tokio::test]
    async fn ticks_accumulate_and_flush_every_interval() {
        let (store, value, saves) = memory_store(0.0);
        let mut counters = SessionCounters::load(store, 5.0).await.unwrap();

        for _ in 0..4 {
            counters.on_tick(false).await.unwrap();
        }
        assert_eq!(saves.load(Ordering::SeqCst), 0, "No flush before interval");

        counters.on_tick(false).await.unwrap();
        assert_eq!(saves.load(Ordering::SeqCst), 1);
        assert_eq!(*value.lock().unwrap(), 5.0);

        // Next flush comes five ticks later, not immediately
        counters.on_tick(false).await.unwrap();
        assert_eq!(saves.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn ad_ticks_never_count() {
        let (store, _, saves) = memory_store(0.0);
        let mut counters = SessionCounters::load(store, 5.0).await.unwrap();

        for _ in 0..30 {
            counters.on_tick(true).await.unwrap();
        }
        assert_eq!(counters.listening_secs(), 0.0);
        assert_eq!(saves.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn reset_zeroes_both_and_persists_immediately() {
        let (store, value, saves) = memory_store(1700.0);
        let mut counters = SessionCounters::load(store, 5.0).await.unwrap();

        counters.on_skip();
        counters.on_skip();
        counters.on_tick(false).await.unwrap();
        assert_eq!(counters.listening_secs(), 1701.0);
        assert_eq!(counters.skips_since_last_ad(), 2);

        counters.reset_on_ad_start().await.unwrap();
        assert_eq!(counters.listening_secs(), 0.0);
        assert_eq!(counters.skips_since_last_ad(), 0);
        assert_eq!(*value.lock().unwrap(), 0.0);
        assert!(saves.load(Ordering::SeqCst) >= 1);
    }

    #[tokio::test]
    async fn skips_are_in_memory_only() {
        let (store, value, _) = memory_store(0.0);
        let mut counters = SessionCounters::load(store, 5.0).await.unwrap();

        for _ in 0..7 {
            counters.on_skip();
        }
        assert_eq!(counters.skips_since_last_ad(), 7);
        // Skip count never touches the store
        assert_eq!(*value.lock().unwrap(), 0.0);
    }
}
