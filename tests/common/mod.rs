//! Shared test utilities: scripted generators, recording boundaries and
//! helpers for draining the event queue.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Notify;

use walaoe::article::{ArticleIntent, RequestOrchestrator};
use walaoe::clipboard::{ClipboardError, ClipboardWriter};
use walaoe::config::{Config, FailurePolicy};
use walaoe::effects::{EditorRedirect, SideEffectCoordinator, UrlOpener};
use walaoe::generate::{ArticleGenerator, GenerateError};
use walaoe::preferences::{MemoryPreferenceStore, ThemeHandle};
use walaoe::ui::events::AppEvent;

// ============================================================================
// Generators
// ============================================================================

/// Always answers with the same article and counts calls.
pub struct StaticGenerator {
    html: String,
    calls: AtomicUsize,
    keywords: Mutex<Vec<String>>,
}

impl StaticGenerator {
    pub fn new(html: &str) -> Arc<Self> {
        Arc::new(Self {
            html: html.to_string(),
            calls: AtomicUsize::new(0),
            keywords: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn keywords(&self) -> Vec<String> {
        self.keywords.lock().clone()
    }
}

#[async_trait]
impl ArticleGenerator for StaticGenerator {
    async fn generate(&self, keyword: &str) -> Result<String, GenerateError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.keywords.lock().push(keyword.to_string());
        Ok(self.html.clone())
    }
}

/// Always fails as a 500 from the service would.
pub struct FailingGenerator {
    calls: AtomicUsize,
}

impl FailingGenerator {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ArticleGenerator for FailingGenerator {
    async fn generate(&self, _keyword: &str) -> Result<String, GenerateError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(GenerateError::Status {
            status: 500,
            body: "internal error".to_string(),
        })
    }
}

/// Panics inside the generation task for the keyword `boom`.
pub struct PanickingGenerator;

#[async_trait]
impl ArticleGenerator for PanickingGenerator {
    async fn generate(&self, keyword: &str) -> Result<String, GenerateError> {
        if keyword == "boom" {
            panic!("generator blew up");
        }
        Ok(format!("<p>{}</p>", keyword))
    }
}

/// Holds every call until released, so a request can be kept in flight.
pub struct GatedGenerator {
    gate: Notify,
    calls: AtomicUsize,
    responses: Mutex<Vec<Result<String, GenerateError>>>,
}

impl GatedGenerator {
    /// Replies are handed out in order; once exhausted every call succeeds
    /// with `<p>gated</p>`.
    pub fn new(responses: Vec<Result<String, GenerateError>>) -> Arc<Self> {
        let mut responses = responses;
        responses.reverse();
        Arc::new(Self {
            gate: Notify::new(),
            calls: AtomicUsize::new(0),
            responses: Mutex::new(responses),
        })
    }

    pub fn release(&self) {
        self.gate.notify_one();
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ArticleGenerator for GatedGenerator {
    async fn generate(&self, _keyword: &str) -> Result<String, GenerateError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.gate.notified().await;
        self.responses
            .lock()
            .pop()
            .unwrap_or_else(|| Ok("<p>gated</p>".to_string()))
    }
}

// ============================================================================
// Clipboard and browser
// ============================================================================

/// Clipboard that records writes, or refuses them.
#[derive(Clone, Default)]
pub struct RecordingClipboard {
    writes: Arc<Mutex<Vec<String>>>,
    fail: bool,
}

impl RecordingClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            writes: Arc::new(Mutex::new(Vec::new())),
            fail: true,
        }
    }

    pub fn writes(&self) -> Vec<String> {
        self.writes.lock().clone()
    }
}

impl ClipboardWriter for RecordingClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.fail {
            return Err(ClipboardError::Unavailable("no display".to_string()));
        }
        self.writes.lock().push(text.to_string());
        Ok(())
    }
}

/// Records the URLs it was asked to open.
#[derive(Default)]
pub struct RecordingOpener {
    opened: Mutex<Vec<String>>,
}

impl RecordingOpener {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn opened(&self) -> Vec<String> {
        self.opened.lock().clone()
    }
}

impl UrlOpener for RecordingOpener {
    fn open(&self, url: &str) -> std::io::Result<()> {
        self.opened.lock().push(url.to_string());
        Ok(())
    }
}

// ============================================================================
// Wiring
// ============================================================================

pub fn config_with(max_length: usize, policy: FailurePolicy) -> Config {
    let mut config = Config::default();
    config.keyword.max_length = max_length;
    config.article.failure_policy = policy;
    config
}

/// Orchestrator on the current runtime plus the receiving end of its queue.
pub fn orchestrator(
    config: &Config,
    generator: Arc<dyn ArticleGenerator>,
) -> (RequestOrchestrator, Receiver<AppEvent>) {
    let (tx, rx) = mpsc::channel();
    let orchestrator =
        RequestOrchestrator::new(config, generator, tx, tokio::runtime::Handle::current());
    (orchestrator, rx)
}

/// Coordinator on the current runtime with an in-memory theme store.
pub fn coordinator(
    clipboard: RecordingClipboard,
    redirect: Option<EditorRedirect>,
    events: mpsc::Sender<AppEvent>,
) -> SideEffectCoordinator {
    let theme = ThemeHandle::load(Arc::new(MemoryPreferenceStore::new()));
    SideEffectCoordinator::new(
        Box::new(clipboard),
        theme,
        redirect,
        events,
        tokio::runtime::Handle::current(),
    )
}

/// Orchestrator and coordinator sharing one event queue.
pub fn harness(
    config: &Config,
    generator: Arc<dyn ArticleGenerator>,
    clipboard: RecordingClipboard,
    redirect: Option<EditorRedirect>,
) -> (RequestOrchestrator, SideEffectCoordinator, Receiver<AppEvent>) {
    let (tx, rx) = mpsc::channel();
    let orchestrator = RequestOrchestrator::new(
        config,
        generator,
        tx.clone(),
        tokio::runtime::Handle::current(),
    );
    let effects = coordinator(clipboard, redirect, tx);
    (orchestrator, effects, rx)
}

// ============================================================================
// Event queue helpers
// ============================================================================

/// Let spawned tasks run without moving the clock.
pub async fn settle() {
    for _ in 0..50 {
        tokio::task::yield_now().await;
    }
}

/// Article intents already in the queue, in order.
pub fn drain_article_intents(rx: &Receiver<AppEvent>) -> Vec<ArticleIntent> {
    let mut intents = Vec::new();
    loop {
        match rx.try_recv() {
            Ok(AppEvent::Article(intent)) => intents.push(intent),
            Ok(_) => {}
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => return intents,
        }
    }
}

/// Wait (real time) for the next article intent.
pub async fn next_article_intent(rx: &Receiver<AppEvent>) -> ArticleIntent {
    let deadline = std::time::Instant::now() + Duration::from_secs(10);
    loop {
        match rx.try_recv() {
            Ok(AppEvent::Article(intent)) => return intent,
            Ok(_) => continue,
            Err(TryRecvError::Disconnected) => panic!("event queue closed"),
            Err(TryRecvError::Empty) => {}
        }
        assert!(
            std::time::Instant::now() < deadline,
            "timed out waiting for an article intent"
        );
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
}
