//! Shared test doubles for the platform and remote seams.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use gallery_social::config::Messages;
use gallery_social::notify::Notifier;
use gallery_social::photo::Photo;
use gallery_social::platform::{
    Clipboard, ClipboardError, FetchError, FetchedImage, ImageFetcher, LinkOpener,
    NativeShare, NativeShareError, OpenError, PageLocation, ShareFile, SharePayload,
    StaticLocation, WindowFeatures,
};
use gallery_social::reaction::ReactionAggregate;
use gallery_social::remote::{ActReactionRequest, RemoteClient, RemoteError};
use gallery_social::share::{ShareComposer, ShareEnvironment};
use parking_lot::Mutex;
use tokio::sync::Notify;

pub const PAGE_URL: &str = "https://gallery.example.com/abc123";

pub fn photo(title: Option<&str>) -> Photo {
    Photo {
        id: "abc123".to_string(),
        title: title.map(String::from),
        width: 1600,
        height: 900,
        original_url: "https://cdn.example.com/abc123.jpg".to_string(),
        preview_url: None,
    }
}

// -- Remote -------------------------------------------------------------------

/// Scripted reactions API.
#[derive(Default)]
pub struct MockRemote {
    submissions: Mutex<Vec<ActReactionRequest>>,
    failures: Mutex<VecDeque<u16>>,
    counts: Mutex<ReactionAggregate>,
    fetches: Mutex<usize>,
    /// When set, submissions wait for a notification before answering.
    gate: Option<Arc<Notify>>,
}

impl MockRemote {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_counts(counts: ReactionAggregate) -> Self {
        Self {
            counts: Mutex::new(counts),
            ..Self::default()
        }
    }

    pub fn gated(gate: Arc<Notify>) -> Self {
        Self {
            gate: Some(gate),
            ..Self::default()
        }
    }

    /// Make the next submission fail with `status`.
    pub fn fail_next(&self, status: u16) {
        self.failures.lock().push_back(status);
    }

    pub fn submissions(&self) -> Vec<ActReactionRequest> {
        self.submissions.lock().clone()
    }

    pub fn fetch_count(&self) -> usize {
        *self.fetches.lock()
    }
}

#[async_trait]
impl RemoteClient for MockRemote {
    async fn act_reaction(&self, request: &ActReactionRequest) -> Result<(), RemoteError> {
        self.submissions.lock().push(request.clone());
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        let failure = self.failures.lock().pop_front();
        match failure {
            Some(status) => Err(RemoteError::Rejected {
                status,
                message: "scripted failure".to_string(),
            }),
            None => Ok(()),
        }
    }

    async fn fetch_reactions(&self, _photo_id: &str) -> Result<ReactionAggregate, RemoteError> {
        *self.fetches.lock() += 1;
        Ok(self.counts.lock().clone())
    }
}

// -- Notifications ------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Success(String),
    Error(String),
}

#[derive(Default)]
pub struct RecordingNotifier {
    events: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn events(&self) -> Vec<Notification> {
        self.events.lock().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        self.events.lock().push(Notification::Success(message.to_string()));
    }

    fn error(&self, message: &str) {
        self.events.lock().push(Notification::Error(message.to_string()));
    }
}

// -- Clipboard ----------------------------------------------------------------

#[derive(Default)]
pub struct MockClipboard {
    writes: Mutex<Vec<String>>,
    fail: Mutex<bool>,
}

impl MockClipboard {
    pub fn failing() -> Self {
        Self {
            fail: Mutex::new(true),
            ..Self::default()
        }
    }

    pub fn writes(&self) -> Vec<String> {
        self.writes.lock().clone()
    }
}

#[async_trait]
impl Clipboard for MockClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        self.writes.lock().push(text.to_string());
        if *self.fail.lock() {
            return Err(ClipboardError("permission denied".to_string()));
        }
        Ok(())
    }
}

// -- Native share -------------------------------------------------------------

pub struct MockNativeShare {
    available: bool,
    accepts_files: bool,
    outcomes: Mutex<VecDeque<Result<(), NativeShareError>>>,
    payloads: Mutex<Vec<SharePayload>>,
}

impl MockNativeShare {
    pub fn new(available: bool, accepts_files: bool) -> Self {
        Self {
            available,
            accepts_files,
            outcomes: Mutex::new(VecDeque::new()),
            payloads: Mutex::new(Vec::new()),
        }
    }

    pub fn unavailable() -> Self {
        Self::new(false, false)
    }

    /// Script the result of the next share call (default: success).
    pub fn push_outcome(&self, outcome: Result<(), NativeShareError>) {
        self.outcomes.lock().push_back(outcome);
    }

    pub fn payloads(&self) -> Vec<SharePayload> {
        self.payloads.lock().clone()
    }
}

#[async_trait]
impl NativeShare for MockNativeShare {
    fn is_available(&self) -> bool {
        self.available
    }

    fn can_share_files(&self, _files: &[ShareFile]) -> bool {
        self.accepts_files
    }

    async fn share(&self, payload: &SharePayload) -> Result<(), NativeShareError> {
        self.payloads.lock().push(payload.clone());
        self.outcomes.lock().pop_front().unwrap_or(Ok(()))
    }
}

// -- Image fetch --------------------------------------------------------------

pub struct MockFetcher {
    fail: bool,
    urls: Mutex<Vec<String>>,
}

impl MockFetcher {
    pub fn ok() -> Self {
        Self {
            fail: false,
            urls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            urls: Mutex::new(Vec::new()),
        }
    }

    pub fn urls(&self) -> Vec<String> {
        self.urls.lock().clone()
    }
}

#[async_trait]
impl ImageFetcher for MockFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedImage, FetchError> {
        self.urls.lock().push(url.to_string());
        if self.fail {
            return Err(FetchError::Status { status: 404 });
        }
        Ok(FetchedImage {
            bytes: vec![0xFF, 0xD8, 0xFF, 0xE0],
            content_type: Some("image/jpeg".to_string()),
        })
    }
}

// -- Opener -------------------------------------------------------------------

#[derive(Default)]
pub struct RecordingOpener {
    blocked: bool,
    opened: Mutex<Vec<(String, WindowFeatures)>>,
}

impl RecordingOpener {
    pub fn blocked() -> Self {
        Self {
            blocked: true,
            ..Self::default()
        }
    }

    pub fn opened(&self) -> Vec<(String, WindowFeatures)> {
        self.opened.lock().clone()
    }
}

impl LinkOpener for RecordingOpener {
    fn open(&self, url: &str, features: WindowFeatures) -> Result<(), OpenError> {
        self.opened.lock().push((url.to_string(), features));
        if self.blocked {
            return Err(OpenError {
                url: url.to_string(),
                reason: "popup blocked".to_string(),
            });
        }
        Ok(())
    }
}

// -- Composer harness ---------------------------------------------------------

/// All doubles wired into one share environment.
pub struct ShareHarness {
    pub native: Arc<MockNativeShare>,
    pub fetcher: Arc<MockFetcher>,
    pub clipboard: Arc<MockClipboard>,
    pub opener: Arc<RecordingOpener>,
    pub notifier: Arc<RecordingNotifier>,
}

impl ShareHarness {
    pub fn new(native: MockNativeShare, fetcher: MockFetcher, clipboard: MockClipboard) -> Self {
        Self {
            native: Arc::new(native),
            fetcher: Arc::new(fetcher),
            clipboard: Arc::new(clipboard),
            opener: Arc::new(RecordingOpener::default()),
            notifier: Arc::new(RecordingNotifier::default()),
        }
    }

    pub fn with_opener(mut self, opener: RecordingOpener) -> Self {
        self.opener = Arc::new(opener);
        self
    }

    pub fn env(&self) -> ShareEnvironment {
        ShareEnvironment {
            native: self.native.clone(),
            fetcher: self.fetcher.clone(),
            clipboard: self.clipboard.clone(),
            opener: self.opener.clone(),
            location: Arc::new(StaticLocation(PAGE_URL.to_string())),
            notifier: self.notifier.clone(),
        }
    }

    pub fn composer(&self) -> ShareComposer {
        ShareComposer::new(self.env(), Messages::default(), WindowFeatures::default())
    }
}
