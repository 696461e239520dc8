//! Playback engine - core orchestration
//!
//! Owns the queue, the current item, and the playing/paused/loading
//! flags; sequences loads, reacts to end-of-stream, and enforces that
//! ads can be neither skipped nor seeked.

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use cadence_core::{
    ListeningStore, PlayReport, PlayReporter, PlayableItem, SourceUrlResolver, Track,
};

use crate::{
    counters::SessionCounters,
    error::Result,
    events::PlayerEvent,
    resolver::resolve_next,
    scheduler::AdScheduler,
    sink::{AudioSink, SinkEvent},
    types::{PlaybackState, PlayerConfig},
};

/// The playback state machine
///
/// All mutation happens here, one event at a time: user actions are
/// async methods, sink callbacks arrive through
/// [`handle_sink_event`](PlayerEngine::handle_sink_event). There is
/// exactly one listener and one sink, so no locking is involved.
///
/// No operation ever surfaces an error to the listener. Failures are
/// logged, a [`PlayerEvent::PlaybackFailed`] is queued where the UI may
/// care, and playback degrades to silence.
pub struct PlayerEngine {
    // State
    state: PlaybackState,
    current: Option<PlayableItem>,
    queue: Vec<PlayableItem>,
    position_secs: f64,
    duration_secs: f64,
    volume: f32,

    // Per-item bookkeeping for play reports
    started_at: Option<DateTime<Utc>>,
    item_listened_secs: f64,

    // Components
    counters: SessionCounters,
    scheduler: AdScheduler,
    sink: Box<dyn AudioSink>,
    urls: Box<dyn SourceUrlResolver>,
    reporter: Box<dyn PlayReporter>,

    // Event queue for UI synchronization
    pending_events: Vec<PlayerEvent>,
}

impl PlayerEngine {
    /// Create a new engine
    ///
    /// Reads the persisted listening time once; this is the only
    /// construction-time failure.
    pub async fn new(
        config: PlayerConfig,
        sink: Box<dyn AudioSink>,
        catalog: Box<dyn cadence_core::AdCatalog>,
        urls: Box<dyn SourceUrlResolver>,
        reporter: Box<dyn PlayReporter>,
        store: Box<dyn ListeningStore>,
    ) -> Result<Self> {
        let counters = SessionCounters::load(store, config.flush_interval_secs).await?;
        let scheduler = AdScheduler::new(
            catalog,
            config.ad_listening_threshold_secs,
            config.ad_skip_threshold,
        );

        Ok(Self {
            state: PlaybackState::Idle,
            current: None,
            queue: Vec::new(),
            position_secs: 0.0,
            duration_secs: 0.0,
            volume: config.initial_volume.clamp(0.0, 1.0),
            started_at: None,
            item_listened_secs: 0.0,
            counters,
            scheduler,
            sink,
            urls,
            reporter,
            pending_events: Vec::new(),
        })
    }

    // ===== Playback Control =====

    /// Play a single track, replacing the queue with just that track
    ///
    /// No-op while an ad is playing.
    pub async fn play_track(&mut self, track: Track) {
        if self.is_ad_playing() {
            debug!("play_track ignored during ad");
            return;
        }

        self.replace_queue(vec![track.clone()]);
        self.load_and_play(PlayableItem::Track(track)).await;
    }

    /// Replace the queue and play it from the first track
    ///
    /// No-op while an ad is playing.
    pub async fn play_queue(&mut self, tracks: Vec<Track>) {
        if self.is_ad_playing() {
            debug!("play_queue ignored during ad");
            return;
        }

        self.replace_queue(tracks);
        if let Some(first) = self.queue.first().cloned() {
            self.load_and_play(first).await;
        }
    }

    /// Replace the queue and play the given track within it
    ///
    /// No-op while an ad is playing.
    pub async fn play_track_in_queue(&mut self, track: Track, new_queue: Vec<Track>) {
        if self.is_ad_playing() {
            debug!("play_track_in_queue ignored during ad");
            return;
        }

        self.replace_queue(new_queue);
        self.load_and_play(PlayableItem::Track(track)).await;
    }

    /// Toggle between playing and paused; no-op otherwise
    pub fn toggle_play(&mut self) {
        match self.state {
            PlaybackState::Playing => {
                self.sink.pause();
                self.state = PlaybackState::Paused;
                self.emit_state_changed(PlaybackState::Paused);
            }
            PlaybackState::Paused => {
                if let Err(e) = self.sink.play() {
                    warn!(error = %e, "Resume rejected");
                    return;
                }
                self.state = PlaybackState::Playing;
                self.emit_state_changed(PlaybackState::Playing);
            }
            _ => {}
        }
    }

    /// Skip to the next item
    ///
    /// Rejected while an ad is playing. Counts toward the skip trigger;
    /// when the trigger fires and an ad is available, the ad plays and
    /// the resolver is not consulted this cycle. A resolver miss leaves
    /// the current item playing (terminal end-of-queue condition).
    pub async fn next(&mut self) {
        if self.is_ad_playing() {
            debug!("next ignored during ad");
            return;
        }

        self.counters.on_skip();

        if self.scheduler.skip_trigger_due(self.counters.skips_since_last_ad())
            && self.try_play_ad().await
        {
            return;
        }

        let Some(current) = self.current.clone() else {
            return;
        };
        if let Some(next) = resolve_next(&current, &self.queue).cloned() {
            self.load_and_play(next).await;
        }
    }

    /// Move to the queue element immediately preceding the current one
    ///
    /// Rejected while an ad is playing; no-op when the current item is
    /// first in the queue or absent from it.
    pub async fn prev(&mut self) {
        if self.is_ad_playing() {
            debug!("prev ignored during ad");
            return;
        }

        let Some(current) = self.current.as_ref() else {
            return;
        };
        let Some(idx) = self.queue.iter().position(|i| i.id() == current.id()) else {
            return;
        };
        if idx == 0 {
            return;
        }

        let previous = self.queue[idx - 1].clone();
        self.load_and_play(previous).await;
    }

    /// Seek within the current item
    ///
    /// Rejected while an ad is playing; no-op with nothing loaded.
    pub fn seek(&mut self, position_secs: f64) {
        if self.is_ad_playing() {
            debug!("seek ignored during ad");
            return;
        }
        if self.current.is_none() {
            return;
        }

        self.sink.seek(position_secs);
        self.position_secs = position_secs;
        self.emit_position();
    }

    /// Set output volume in [0, 1]
    ///
    /// Always allowed, always propagated to the sink immediately.
    pub fn set_volume(&mut self, volume: f32) {
        let volume = volume.clamp(0.0, 1.0);
        self.volume = volume;
        self.sink.set_volume(volume);
        self.pending_events.push(PlayerEvent::VolumeChanged { volume });
    }

    // ===== Sink Event Dispatch =====

    /// Consume one sink event
    ///
    /// The single dispatch point for everything the sound output
    /// reports back.
    pub async fn handle_sink_event(&mut self, event: SinkEvent) {
        match event {
            SinkEvent::Started { duration_secs } => {
                self.duration_secs = duration_secs;
                self.position_secs = 0.0;
                self.started_at = Some(Utc::now());
                self.state = PlaybackState::Playing;
                self.emit_state_changed(PlaybackState::Playing);
                info!(item = ?self.current.as_ref().map(PlayableItem::id), "Playback started");
            }
            SinkEvent::PositionTick { position_secs } => {
                if self.state != PlaybackState::Playing {
                    return;
                }
                self.position_secs = position_secs;

                let is_ad = self.is_ad_playing();
                if !is_ad {
                    self.item_listened_secs += 1.0;
                }
                if let Err(e) = self.counters.on_tick(is_ad).await {
                    warn!(error = %e, "Listening-time flush failed");
                }
                self.emit_position();
            }
            SinkEvent::Ended => {
                self.handle_ended().await;
            }
            SinkEvent::LoadError { message } => {
                // No retry; nothing audible happens for this item
                warn!(message, "Stream load failed");
                self.emit_failure(format!("Load failed: {message}"));
            }
            SinkEvent::PlayError { message } => {
                // The sink retries once on its own after the output
                // unlocks; nothing to do here but record it
                warn!(message, "Playback start rejected by output");
            }
        }
    }

    // ===== State Queries =====

    /// Current playback state
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Currently loaded item, if any
    pub fn current_item(&self) -> Option<&PlayableItem> {
        self.current.as_ref()
    }

    /// The current queue (ads are never members)
    pub fn queue(&self) -> &[PlayableItem] {
        &self.queue
    }

    /// Whether the current item is sponsored content
    ///
    /// Holds exactly when the current item is an [`PlayableItem::Ad`];
    /// while true, `next`, `prev`, and `seek` are no-ops.
    pub fn is_ad_playing(&self) -> bool {
        self.current.as_ref().is_some_and(PlayableItem::is_ad)
    }

    /// Current position in seconds
    pub fn position_secs(&self) -> f64 {
        self.position_secs
    }

    /// Current item duration in seconds
    pub fn duration_secs(&self) -> f64 {
        self.duration_secs
    }

    /// Current volume in [0, 1]
    pub fn volume(&self) -> f32 {
        self.volume
    }

    /// Cumulative listening seconds (ad time excluded)
    pub fn listening_secs(&self) -> f64 {
        self.counters.listening_secs()
    }

    /// Consecutive manual skips since the last ad
    pub fn skips_since_last_ad(&self) -> u32 {
        self.counters.skips_since_last_ad()
    }

    /// Drain queued UI events
    pub fn take_events(&mut self) -> Vec<PlayerEvent> {
        std::mem::take(&mut self.pending_events)
    }

    // ===== Internals =====

    fn replace_queue(&mut self, tracks: Vec<Track>) {
        self.queue = tracks.into_iter().map(PlayableItem::Track).collect();
        self.pending_events.push(PlayerEvent::QueueReplaced {
            length: self.queue.len(),
        });
    }

    /// Load `item` into the sink and start it
    ///
    /// Any prior live handle is discarded by the sink's load contract.
    /// Resolution or load failure leaves the machine in `Loading` with
    /// no fallback item; the failure is logged and queued, never raised.
    async fn load_and_play(&mut self, item: PlayableItem) {
        let previous_item_id = self.current.as_ref().map(|i| i.id().to_string());

        self.state = PlaybackState::Loading;
        self.emit_state_changed(PlaybackState::Loading);

        // Catalog duration until the sink reports the real one
        self.duration_secs = item.duration_secs();
        self.position_secs = 0.0;
        self.item_listened_secs = 0.0;
        self.started_at = None;

        self.pending_events.push(PlayerEvent::TrackChanged {
            item_id: item.id().to_string(),
            previous_item_id,
            is_ad: item.is_ad(),
        });
        if let PlayableItem::Ad(ad) = &item {
            self.pending_events.push(PlayerEvent::AdStarted {
                ad_id: ad.id.clone(),
            });
        }

        let locator = item.source_locator().to_string();
        self.current = Some(item);

        let url = match self.urls.resolve(&locator).await {
            Ok(url) => url,
            Err(e) => {
                warn!(locator, error = %e, "Source resolution failed, aborting load");
                self.emit_failure(e.to_string());
                return;
            }
        };

        debug!(url, "Loading stream");
        if let Err(e) = self.sink.load(&url).await {
            warn!(url, error = %e, "Sink load failed");
            self.emit_failure(e.to_string());
            return;
        }

        self.sink.set_volume(self.volume);
        if let Err(e) = self.sink.play() {
            // The sink retries once after the output unlocks
            warn!(error = %e, "Playback start rejected by output");
        }
    }

    /// Fetch and start an ad, resetting both counters on success
    async fn try_play_ad(&mut self) -> bool {
        let Some(ad) = self.scheduler.next_ad().await else {
            return false;
        };

        info!(ad_id = %ad.id, "Starting ad break");
        self.load_and_play(PlayableItem::Ad(ad)).await;

        if let Err(e) = self.counters.reset_on_ad_start().await {
            warn!(error = %e, "Counter reset persistence failed");
        }
        true
    }

    /// React to natural end-of-stream
    async fn handle_ended(&mut self) {
        let Some(ended) = self.current.clone() else {
            return;
        };

        self.state = PlaybackState::Ended;
        self.emit_state_changed(PlaybackState::Ended);

        if let PlayableItem::Ad(ad) = &ended {
            self.pending_events.push(PlayerEvent::AdEnded {
                ad_id: ad.id.clone(),
            });

            // Queue position context is not preserved across an ad
            // break: playback resumes from the head of the queue
            if let Some(first) = self.queue.first().cloned() {
                self.load_and_play(first).await;
            } else {
                self.current = None;
                self.state = PlaybackState::Idle;
                self.emit_state_changed(PlaybackState::Idle);
            }
            return;
        }

        if let PlayableItem::Track(track) = &ended {
            self.report_play(track).await;
        }

        // Time trigger runs before the queue advances
        if self.scheduler.time_trigger_due(self.counters.listening_secs())
            && self.try_play_ad().await
        {
            return;
        }

        // Same as next()'s resolver path, without the skip increment;
        // a miss rests in Ended as the end-of-queue condition
        if let Some(next) = resolve_next(&ended, &self.queue).cloned() {
            self.load_and_play(next).await;
        }
    }

    /// Fire-and-forget play report for a naturally finished track
    async fn report_play(&mut self, track: &Track) {
        let Some(started_at) = self.started_at else {
            return;
        };

        let report = PlayReport {
            track_id: track.id.clone(),
            started_at,
            ended_at: Utc::now(),
            seconds_played: self.item_listened_secs,
        };

        if let Err(e) = self.reporter.report(&report).await {
            warn!(track_id = %track.id, error = %e, "Play report failed");
        }
    }

    fn emit_state_changed(&mut self, state: PlaybackState) {
        self.pending_events.push(PlayerEvent::StateChanged { state });
    }

    fn emit_position(&mut self) {
        self.pending_events.push(PlayerEvent::PositionUpdate {
            position_secs: self.position_secs,
            duration_secs: self.duration_secs,
        });
    }

    fn emit_failure(&mut self, message: String) {
        self.pending_events
            .push(PlayerEvent::PlaybackFailed { message });
    }
}
