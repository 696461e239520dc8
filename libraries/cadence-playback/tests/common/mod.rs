//! Shared test doubles for engine integration tests

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use cadence_core::{
    Ad, AdCatalog, AdKind, CoreError, ListeningStore, PlayReport, PlayReporter, SourceUrlResolver,
    Track,
};
use cadence_playback::{AudioSink, PlayerConfig, PlayerEngine, Result as PlaybackResult};

// ===== Sink =====

/// Commands the engine issued to the sink, in order
#[derive(Debug, Clone, PartialEq)]
pub enum SinkCommand {
    Load(String),
    Play,
    Pause,
    Seek(f64),
    SetVolume(f32),
}

#[derive(Default)]
pub struct SinkState {
    pub commands: Vec<SinkCommand>,
    pub fail_load: bool,
}

/// Recording sink; tests feed `SinkEvent`s back into the engine by hand
pub struct FakeSink {
    state: Arc<Mutex<SinkState>>,
}

/// Test-side handle onto the fake sink's command log
#[derive(Clone)]
pub struct SinkHandle {
    state: Arc<Mutex<SinkState>>,
}

impl SinkHandle {
    pub fn commands(&self) -> Vec<SinkCommand> {
        self.state.lock().unwrap().commands.clone()
    }

    pub fn loads(&self) -> Vec<String> {
        self.commands()
            .into_iter()
            .filter_map(|c| match c {
                SinkCommand::Load(url) => Some(url),
                _ => None,
            })
            .collect()
    }

    pub fn fail_next_loads(&self) {
        self.state.lock().unwrap().fail_load = true;
    }
}

pub fn fake_sink() -> (Box<FakeSink>, SinkHandle) {
    let state = Arc::new(Mutex::new(SinkState::default()));
    (
        Box::new(FakeSink {
            state: state.clone(),
        }),
        SinkHandle { state },
    )
}

#[async_trait]
impl AudioSink for FakeSink {
    async fn load(&mut self, url: &str) -> PlaybackResult<()> {
        let mut state = self.state.lock().unwrap();
        state.commands.push(SinkCommand::Load(url.to_string()));
        if state.fail_load {
            return Err(cadence_playback::PlaybackError::Load(
                "decoder rejected stream".to_string(),
            ));
        }
        Ok(())
    }

    fn play(&mut self) -> PlaybackResult<()> {
        self.state.lock().unwrap().commands.push(SinkCommand::Play);
        Ok(())
    }

    fn pause(&mut self) {
        self.state.lock().unwrap().commands.push(SinkCommand::Pause);
    }

    fn seek(&mut self, position_secs: f64) {
        self.state
            .lock()
            .unwrap()
            .commands
            .push(SinkCommand::Seek(position_secs));
    }

    fn set_volume(&mut self, volume: f32) {
        self.state
            .lock()
            .unwrap()
            .commands
            .push(SinkCommand::SetVolume(volume));
    }
}

// ===== Catalog =====

pub struct StubCatalog {
    pub ads: Vec<Ad>,
}

#[async_trait]
impl AdCatalog for StubCatalog {
    async fn fetch_active_ads(&self, _kind: AdKind) -> cadence_core::Result<Vec<Ad>> {
        Ok(self.ads.clone())
    }
}

// ===== Url resolution =====

/// Resolver that passes locators through unchanged
pub struct VerbatimUrls;

#[async_trait]
impl SourceUrlResolver for VerbatimUrls {
    async fn resolve(&self, locator: &str) -> cadence_core::Result<String> {
        Ok(locator.to_string())
    }
}

/// Resolver that always fails (storage-URL service down)
pub struct FailingUrls;

#[async_trait]
impl SourceUrlResolver for FailingUrls {
    async fn resolve(&self, locator: &str) -> cadence_core::Result<String> {
        Err(CoreError::source_resolution(locator, "service unavailable"))
    }
}

// ===== Reporter =====

#[derive(Clone, Default)]
pub struct RecordingReporter {
    pub reports: Arc<Mutex<Vec<PlayReport>>>,
}

#[async_trait]
impl PlayReporter for RecordingReporter {
    async fn report(&self, report: &PlayReport) -> cadence_core::Result<()> {
        self.reports.lock().unwrap().push(report.clone());
        Ok(())
    }
}

// ===== Listening store =====

#[derive(Clone)]
pub struct MemoryStore {
    pub value: Arc<Mutex<f64>>,
    pub saves: Arc<AtomicUsize>,
}

impl MemoryStore {
    pub fn with(initial: f64) -> Self {
        Self {
            value: Arc::new(Mutex::new(initial)),
            saves: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn persisted(&self) -> f64 {
        *self.value.lock().unwrap()
    }

    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ListeningStore for MemoryStore {
    async fn load(&self) -> cadence_core::Result<f64> {
        Ok(*self.value.lock().unwrap())
    }

    async fn save(&self, seconds: f64) -> cadence_core::Result<()> {
        *self.value.lock().unwrap() = seconds;
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

// ===== Builders =====

pub fn track(id: &str, genres: &[&str], refs: &[&str]) -> Track {
    let mut t = Track::new(id, format!("Track {id}"), "Artist");
    t.duration_secs = 180.0;
    t.source_locator = format!("https://cdn.example.com/{id}.mp3");
    t.cover_locator = format!("https://cdn.example.com/{id}.jpg");
    if let Some((first, rest)) = genres.split_first() {
        t.genre_primary = Some((*first).to_string());
        t.genre_tags = rest.iter().map(|g| (*g).to_string()).collect();
    }
    t.relevancy_refs = refs.iter().map(|r| (*r).to_string()).collect();
    t
}

pub fn audio_ad(id: &str) -> Ad {
    let mut ad = Ad::new(id, format!("Spot {id}"));
    ad.source_locator = format!("https://ads.example.com/{id}.mp3");
    ad.duration_secs = 20.0;
    ad
}

pub struct EngineHarness {
    pub engine: PlayerEngine,
    pub sink: SinkHandle,
    pub reporter: RecordingReporter,
    pub store: MemoryStore,
}

/// Engine wired to fakes: recording sink, given ad pool, verbatim url
/// resolution, recording reporter, in-memory listening store
pub async fn engine_with(ads: Vec<Ad>, persisted_listening_secs: f64) -> EngineHarness {
    let (sink, sink_handle) = fake_sink();
    let reporter = RecordingReporter::default();
    let store = MemoryStore::with(persisted_listening_secs);

    let engine = PlayerEngine::new(
        PlayerConfig::default(),
        sink,
        Box::new(StubCatalog { ads }),
        Box::new(VerbatimUrls),
        Box::new(reporter.clone()),
        Box::new(store.clone()),
    )
    .await
    .expect("engine construction");

    EngineHarness {
        engine,
        sink: sink_handle,
        reporter,
        store,
    }
}
