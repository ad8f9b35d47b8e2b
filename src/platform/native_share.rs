//! Native share sheet abstraction.

use async_trait::async_trait;
use thiserror::Error;

/// A file attached to a native share.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareFile {
    pub name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

/// What gets handed to the share sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
    pub url: String,
    pub files: Vec<ShareFile>,
}

/// Why a native share did not complete.
///
/// Both variants advance the share fallback chain the same way.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NativeShareError {
    #[error("Share cancelled by user")]
    Cancelled,
    #[error("Share rejected: {0}")]
    Rejected(String),
}

/// Platform share sheet.
#[async_trait]
pub trait NativeShare: Send + Sync {
    /// Whether a share sheet exists at all.
    fn is_available(&self) -> bool;

    /// Whether the sheet would accept these files.
    fn can_share_files(&self, files: &[ShareFile]) -> bool;

    async fn share(&self, payload: &SharePayload) -> Result<(), NativeShareError>;
}

/// Platforms with no share sheet (desktop terminals).
#[derive(Debug, Default, Clone, Copy)]
pub struct UnsupportedNativeShare;

#[async_trait]
impl NativeShare for UnsupportedNativeShare {
    fn is_available(&self) -> bool {
        false
    }

    fn can_share_files(&self, _files: &[ShareFile]) -> bool {
        false
    }

    async fn share(&self, _payload: &SharePayload) -> Result<(), NativeShareError> {
        Err(NativeShareError::Rejected(
            "native share is not supported on this platform".to_string(),
        ))
    }
}
