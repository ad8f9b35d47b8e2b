use serde::{Deserialize, Serialize};

/// A gallery photo as seen by the share and reaction layers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    pub width: u32,
    pub height: u32,
    /// Full-resolution source.
    pub original_url: String,
    /// Already-converted preview (e.g. a decoded HEIC), preferred for sharing.
    #[serde(default)]
    pub preview_url: Option<String>,
}

impl Photo {
    /// Title if set and non-blank.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref().filter(|t| !t.trim().is_empty())
    }

    /// Both dimensions are known.
    pub fn has_dimensions(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}
