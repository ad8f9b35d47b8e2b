//! Opening share URLs in a new browsing context.

use thiserror::Error;

/// Size of the popup a social share opens in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowFeatures {
    pub width: u32,
    pub height: u32,
}

impl Default for WindowFeatures {
    fn default() -> Self {
        Self {
            width: 600,
            height: 400,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Could not open '{url}': {reason}")]
pub struct OpenError {
    pub url: String,
    pub reason: String,
}

pub trait LinkOpener: Send + Sync {
    fn open(&self, url: &str, features: WindowFeatures) -> Result<(), OpenError>;
}

/// Prints the URL for the user to follow. The CLI has no browser to drive.
#[derive(Debug, Default, Clone, Copy)]
pub struct PrintOpener;

impl LinkOpener for PrintOpener {
    fn open(&self, url: &str, features: WindowFeatures) -> Result<(), OpenError> {
        tracing::debug!(
            url,
            width = features.width,
            height = features.height,
            "Opening share link"
        );
        println!("{url}");
        Ok(())
    }
}

/// Where the user currently is; shared links point here.
pub trait PageLocation: Send + Sync {
    fn href(&self) -> String;
}

/// Fixed page URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticLocation(pub String);

impl StaticLocation {
    /// Photo page on the gallery site: `{site}/{photo_id}`.
    pub fn photo_page(site_url: &str, photo_id: &str) -> Self {
        Self(format!("{}/{}", site_url.trim_end_matches('/'), photo_id))
    }
}

impl PageLocation for StaticLocation {
    fn href(&self) -> String {
        self.0.clone()
    }
}
