use serde::{Deserialize, Serialize};

use crate::share::ShareTarget;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub reaction: ReactionConfig,
    #[serde(default)]
    pub share: ShareConfig,
    #[serde(default)]
    pub messages: Messages,
}

/// Public site settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Display name of the gallery.
    #[serde(default = "default_site_name")]
    pub name: String,
    /// Public base URL; embed snippets and page links are built from it.
    #[serde(default = "default_site_url")]
    pub url: String,
}

/// Reactions API settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the gallery API (e.g. "https://gallery.example.com").
    #[serde(default = "default_site_url")]
    pub base_url: String,
    /// Request timeout in seconds (default: 10).
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u32,
}

/// Reaction button behaviour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReactionConfig {
    /// How long the click highlight lingers after its animation, in ms.
    #[serde(default = "default_animation_linger_ms")]
    pub animation_linger_ms: u64,
}

/// Share panel settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShareConfig {
    /// Width of the social share popup (default: 600).
    #[serde(default = "default_popup_width")]
    pub popup_width: u32,
    /// Height of the social share popup (default: 400).
    #[serde(default = "default_popup_height")]
    pub popup_height: u32,
    /// Whether the embed-code action is offered.
    #[serde(default = "default_true")]
    pub embed_enabled: bool,
    /// Replaces the built-in share target catalog when set.
    #[serde(default)]
    pub targets: Option<Vec<ShareTarget>>,
}

/// User-facing strings. The translation catalog lives outside this crate;
/// these are the English fallbacks it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Messages {
    pub reaction_success: String,
    pub link_copied: String,
    pub embed_copied: String,
    pub copy_failed: String,
    /// Title used when a photo has none.
    pub default_title: String,
    /// Share phrase; `{title}` is replaced with the photo title.
    pub share_text: String,
}

fn default_site_name() -> String {
    "Gallery".to_string()
}

fn default_site_url() -> String {
    "http://localhost:1924".to_string()
}

fn default_timeout_seconds() -> u32 {
    10
}

fn default_animation_linger_ms() -> u64 {
    1000
}

fn default_popup_width() -> u32 {
    600
}

fn default_popup_height() -> u32 {
    400
}

fn default_true() -> bool {
    true
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: default_site_name(),
            url: default_site_url(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_site_url(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl Default for ReactionConfig {
    fn default() -> Self {
        Self {
            animation_linger_ms: default_animation_linger_ms(),
        }
    }
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            popup_width: default_popup_width(),
            popup_height: default_popup_height(),
            embed_enabled: true,
            targets: None,
        }
    }
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            reaction_success: "Reaction sent".to_string(),
            link_copied: "Link copied to clipboard".to_string(),
            embed_copied: "Embed code copied to clipboard".to_string(),
            copy_failed: "Copy failed".to_string(),
            default_title: "Photo".to_string(),
            share_text: "Check out this photo: {title}".to_string(),
        }
    }
}

impl Messages {
    /// Share phrase for a photo title.
    pub fn share_text_for(&self, title: &str) -> String {
        self.share_text.replacen("{title}", title, 1)
    }
}
