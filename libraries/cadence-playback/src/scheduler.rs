//! Ad break scheduling
//!
//! Decides, at two checkpoints, whether normal playback should be
//! interrupted by sponsored content, and fetches a candidate ad from
//! the catalog.

use cadence_core::{Ad, AdCatalog, AdKind};
use rand::Rng;
use tracing::{debug, warn};

/// Trigger evaluation and ad selection
///
/// Two independent triggers, each consulted at a precise moment:
/// the **time trigger** when a non-ad track reaches natural
/// end-of-stream, the **skip trigger** when the listener manually skips.
/// Selection is uniform over the active pool; the `weight` field is
/// deliberately not consulted.
pub struct AdScheduler {
    catalog: Box<dyn AdCatalog>,

    /// Listening seconds required before the time trigger fires
    listening_threshold_secs: f64,

    /// Consecutive skips required before the skip trigger fires
    skip_threshold: u32,
}

impl AdScheduler {
    /// Create a scheduler over the given catalog
    pub fn new(
        catalog: Box<dyn AdCatalog>,
        listening_threshold_secs: f64,
        skip_threshold: u32,
    ) -> Self {
        Self {
            catalog,
            listening_threshold_secs,
            skip_threshold,
        }
    }

    /// Whether accumulated listening time warrants an ad break
    pub fn time_trigger_due(&self, listening_secs: f64) -> bool {
        listening_secs >= self.listening_threshold_secs
    }

    /// Whether consecutive skips warrant an ad break
    pub fn skip_trigger_due(&self, skips_since_last_ad: u32) -> bool {
        skips_since_last_ad >= self.skip_threshold
    }

    /// Fetch the active audio ad pool and pick one uniformly at random
    ///
    /// `None` when the pool is empty or the catalog query fails; a
    /// failed query is logged and the caller proceeds with normal flow.
    pub async fn next_ad(&self) -> Option<Ad> {
        let ads = match self.catalog.fetch_active_ads(AdKind::AudioBanner).await {
            Ok(ads) => ads,
            Err(e) => {
                warn!(error = %e, "Ad catalog query failed, skipping ad break");
                return None;
            }
        };

        if ads.is_empty() {
            debug!("Ad pool empty, no break scheduled");
            return None;
        }

        let index = rand::thread_rng().gen_range(0..ads.len());
        ads.into_iter().nth(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use cadence_core::{CoreError, Result};
    use std::collections::HashSet;

    struct StubCatalog {
        ads: Vec<Ad>,
        fail: bool,
    }

    #[async_trait]
    impl AdCatalog for StubCatalog {
        async fn fetch_active_ads(&self, kind: AdKind) -> Result<Vec<Ad>> {
            assert_eq!(kind, AdKind::AudioBanner);
            if self.fail {
                return Err(CoreError::catalog("catalog down"));
            }
            Ok(self.ads.clone())
        }
    }

    fn scheduler_with(ads: Vec<Ad>, fail: bool) -> AdScheduler {
        AdScheduler::new(Box::new(StubCatalog { ads, fail }), 1800.0, 5)
    }

    #[test]
    fn time_trigger_fires_at_threshold() {
        let scheduler = scheduler_with(vec![], false);

        assert!(!scheduler.time_trigger_due(1799.0));
        assert!(scheduler.time_trigger_due(1800.0));
        assert!(scheduler.time_trigger_due(5000.0));
    }

    #[test]
    fn skip_trigger_fires_on_fifth_skip() {
        let scheduler = scheduler_with(vec![], false);

        assert!(!scheduler.skip_trigger_due(4));
        assert!(scheduler.skip_trigger_due(5));
        assert!(scheduler.skip_trigger_due(6));
    }

    #[tokio::test]
    async fn empty_pool_yields_no_ad() {
        let scheduler = scheduler_with(vec![], false);
        assert!(scheduler.next_ad().await.is_none());
    }

    #[tokio::test]
    async fn catalog_failure_yields_no_ad() {
        let scheduler = scheduler_with(vec![Ad::new("a1", "Spot")], true);
        assert!(scheduler.next_ad().await.is_none());
    }

    #[tokio::test]
    async fn selection_covers_the_pool() {
        let pool = vec![Ad::new("a1", "One"), Ad::new("a2", "Two"), Ad::new("a3", "Three")];
        let scheduler = scheduler_with(pool, false);

        let mut seen = HashSet::new();
        for _ in 0..200 {
            let ad = scheduler.next_ad().await.expect("pool is non-empty");
            seen.insert(ad.id);
        }

        // Uniform selection should hit every entry within 200 draws
        assert_eq!(seen.len(), 3);
    }
}
