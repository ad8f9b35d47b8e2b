//! Errors for share actions.

use thiserror::Error;

use crate::platform::{ClipboardError, FetchError, NativeShareError, OpenError};

/// Errors that can occur while sharing.
#[derive(Debug, Error)]
pub enum ShareError {
    /// Photo could not be downloaded for a file share.
    #[error("Failed to fetch photo: {0}")]
    Fetch(#[from] FetchError),

    /// Share sheet missing, rejected or cancelled.
    #[error("Native share unavailable: {0}")]
    Unavailable(#[from] NativeShareError),

    /// Clipboard write failed. Terminal for every action that copies.
    #[error(transparent)]
    Clipboard(#[from] ClipboardError),

    /// Share popup could not be opened.
    #[error(transparent)]
    Open(#[from] OpenError),

    #[error("Unknown share target '{0}'")]
    UnknownTarget(String),

    #[error("Embed code is disabled")]
    EmbedDisabled,
}
