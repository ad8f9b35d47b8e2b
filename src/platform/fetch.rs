//! Image download for attaching photos to a native share.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use thiserror::Error;

/// MIME type assumed when neither the server nor the bytes say otherwise.
pub const FALLBACK_MIME: &str = "image/jpeg";

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Image request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Image server returned {status}")]
    Status { status: u16 },
}

/// Downloaded image bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedImage {
    pub bytes: Vec<u8>,
    /// Content type reported by the server, if any.
    pub content_type: Option<String>,
}

impl FetchedImage {
    /// Best-known MIME type: server header, then sniffed, then JPEG.
    pub fn mime_type(&self) -> String {
        if let Some(content_type) = self.content_type.as_deref().filter(|c| !c.is_empty()) {
            return content_type.to_string();
        }
        image::guess_format(&self.bytes)
            .map(|format| format.to_mime_type().to_string())
            .unwrap_or_else(|_| FALLBACK_MIME.to_string())
    }
}

#[async_trait]
pub trait ImageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<FetchedImage, FetchError>;
}

/// [`ImageFetcher`] over HTTP.
pub struct HttpImageFetcher {
    client: Client,
}

impl HttpImageFetcher {
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl ImageFetcher for HttpImageFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedImage, FetchError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(String::from);
        let bytes = response.bytes().await?.to_vec();

        tracing::debug!(url, size = bytes.len(), "Fetched share image");
        Ok(FetchedImage {
            bytes,
            content_type,
        })
    }
}
