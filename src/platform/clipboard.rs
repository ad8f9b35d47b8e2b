//! Clipboard access for copying share links and embed code.

use arboard::Clipboard as SystemClipboard;
use async_trait::async_trait;
use parking_lot::Mutex;
use thiserror::Error;

/// Clipboard write failure (permission denied, no display, ...).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Clipboard write failed: {0}")]
pub struct ClipboardError(pub String);

/// Text clipboard.
#[async_trait]
pub trait Clipboard: Send + Sync {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Whether copied text survives the process that wrote it.
///
/// On Linux the writing process serves the selection itself, so without a
/// clipboard manager the contents go away when the process exits.
pub const CLIPBOARD_OUTLIVES_PROCESS: bool = !cfg!(target_os = "linux");

/// System clipboard via `arboard`.
///
/// The handle is opened on first write and reused for later writes in the
/// same process. See [`CLIPBOARD_OUTLIVES_PROCESS`] for short-lived callers.
#[derive(Default)]
pub struct ArboardClipboard {
    clipboard: Mutex<Option<SystemClipboard>>,
}

impl ArboardClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Clipboard for ArboardClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let mut guard = self.clipboard.lock();
        if guard.is_none() {
            let opened = SystemClipboard::new().map_err(|e| ClipboardError(e.to_string()))?;
            *guard = Some(opened);
        }

        let Some(clipboard) = guard.as_mut() else {
            return Err(ClipboardError("clipboard unavailable".to_string()));
        };
        clipboard
            .set_text(text.to_string())
            .map_err(|e| ClipboardError(e.to_string()))
    }
}
