//! Native share resolution as an ordered fallback chain.
//!
//! Strategies run in order. A strategy that does not apply (no share sheet,
//! files not accepted) declines and the next one runs. A strategy that
//! applies but fails, including a failed image download or a cancelled
//! sheet, ends the native attempts and the chain copies the page link
//! instead. The link copy is the terminal step; if it fails the chain fails.

use std::sync::Arc;

use async_trait::async_trait;

use crate::platform::{Clipboard, ImageFetcher, NativeShare, ShareFile, SharePayload};

use super::error::ShareError;

/// Everything a strategy needs to share one photo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareRequest {
    pub title: String,
    pub text: String,
    /// Page URL; also what the fallback copies.
    pub url: String,
    /// Image to attach when files are supported.
    pub image_url: String,
    pub file_name: String,
}

impl ShareRequest {
    fn payload(&self, files: Vec<ShareFile>) -> SharePayload {
        SharePayload {
            title: self.title.clone(),
            text: self.text.clone(),
            url: self.url.clone(),
            files,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyOutcome {
    Shared,
    /// Not applicable on this platform; try the next strategy.
    Declined,
}

/// How a share request was finally resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareResolution {
    /// A native strategy completed.
    Native { strategy: &'static str },
    /// Native sharing was unavailable or failed; the page link was copied.
    LinkCopied,
}

#[async_trait]
pub trait ShareStrategy: Send + Sync {
    fn name(&self) -> &'static str;

    async fn attempt(&self, request: &ShareRequest) -> Result<StrategyOutcome, ShareError>;
}

/// Share sheet with the photo attached.
pub struct FileShare {
    native: Arc<dyn NativeShare>,
    fetcher: Arc<dyn ImageFetcher>,
}

impl FileShare {
    pub fn new(native: Arc<dyn NativeShare>, fetcher: Arc<dyn ImageFetcher>) -> Self {
        Self { native, fetcher }
    }
}

#[async_trait]
impl ShareStrategy for FileShare {
    fn name(&self) -> &'static str {
        "file"
    }

    async fn attempt(&self, request: &ShareRequest) -> Result<StrategyOutcome, ShareError> {
        if !self.native.is_available() {
            return Ok(StrategyOutcome::Declined);
        }

        let image = self.fetcher.fetch(&request.image_url).await?;
        let file = ShareFile {
            name: request.file_name.clone(),
            mime_type: image.mime_type(),
            bytes: image.bytes,
        };

        let files = vec![file];
        if !self.native.can_share_files(&files) {
            return Ok(StrategyOutcome::Declined);
        }

        self.native.share(&request.payload(files)).await?;
        Ok(StrategyOutcome::Shared)
    }
}

/// Share sheet with title, text and URL only.
pub struct MetadataShare {
    native: Arc<dyn NativeShare>,
}

impl MetadataShare {
    pub fn new(native: Arc<dyn NativeShare>) -> Self {
        Self { native }
    }
}

#[async_trait]
impl ShareStrategy for MetadataShare {
    fn name(&self) -> &'static str {
        "metadata"
    }

    async fn attempt(&self, request: &ShareRequest) -> Result<StrategyOutcome, ShareError> {
        if !self.native.is_available() {
            return Ok(StrategyOutcome::Declined);
        }

        self.native.share(&request.payload(Vec::new())).await?;
        Ok(StrategyOutcome::Shared)
    }
}

pub struct FallbackChain {
    strategies: Vec<Box<dyn ShareStrategy>>,
    clipboard: Arc<dyn Clipboard>,
}

impl FallbackChain {
    pub fn new(strategies: Vec<Box<dyn ShareStrategy>>, clipboard: Arc<dyn Clipboard>) -> Self {
        Self {
            strategies,
            clipboard,
        }
    }

    /// File share, then metadata share, then copy link.
    pub fn native(
        native: Arc<dyn NativeShare>,
        fetcher: Arc<dyn ImageFetcher>,
        clipboard: Arc<dyn Clipboard>,
    ) -> Self {
        Self::new(
            vec![
                Box::new(FileShare::new(Arc::clone(&native), fetcher)),
                Box::new(MetadataShare::new(native)),
            ],
            clipboard,
        )
    }

    /// Resolve `request`. Only a failed link copy is an error.
    pub async fn run(&self, request: &ShareRequest) -> Result<ShareResolution, ShareError> {
        for strategy in &self.strategies {
            match strategy.attempt(request).await {
                Ok(StrategyOutcome::Shared) => {
                    tracing::debug!(strategy = strategy.name(), "Native share completed");
                    return Ok(ShareResolution::Native {
                        strategy: strategy.name(),
                    });
                }
                Ok(StrategyOutcome::Declined) => {
                    tracing::debug!(strategy = strategy.name(), "Share strategy declined");
                }
                Err(e) => {
                    tracing::info!(
                        strategy = strategy.name(),
                        error = %e,
                        "Native share failed, copying link"
                    );
                    break;
                }
            }
        }

        match self.clipboard.write_text(&request.url).await {
            Ok(()) => Ok(ShareResolution::LinkCopied),
            Err(e) => {
                tracing::warn!(error = %e, "Fallback link copy failed");
                Err(e.into())
            }
        }
    }
}
