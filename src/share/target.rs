//! Social share destinations.

use serde::{Deserialize, Serialize};

/// A social platform with a pre-filled share URL template.
///
/// `label` is a fallback display name; localized labels come from the UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareTarget {
    pub id: String,
    pub label: String,
    pub template: String,
}

impl ShareTarget {
    pub fn new(id: &str, label: &str, template: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            template: template.to_string(),
        }
    }
}

/// Ordered, read-only catalog of share targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareTargetRegistry {
    targets: Vec<ShareTarget>,
}

impl ShareTargetRegistry {
    pub fn new(targets: Vec<ShareTarget>) -> Self {
        Self { targets }
    }

    /// The catalog shipped with the gallery.
    pub fn builtin() -> Self {
        Self::new(vec![
            ShareTarget::new(
                "twitter",
                "Twitter",
                "https://twitter.com/intent/tweet?text={text}&url={url}",
            ),
            ShareTarget::new(
                "telegram",
                "Telegram",
                "https://t.me/share/url?url={url}&text={text}",
            ),
            ShareTarget::new(
                "weibo",
                "Weibo",
                "https://service.weibo.com/share/share.php?url={url}&title={text}",
            ),
            ShareTarget::new(
                "bilibili",
                "Bilibili",
                "https://t.bilibili.com/h5/dynamic/specify?content={text}&from=pc&type=text",
            ),
            ShareTarget::new(
                "douyin",
                "Douyin",
                "https://www.douyin.com/share/video?text={text}&url={url}",
            ),
            ShareTarget::new(
                "xiaohongshu",
                "Xiaohongshu",
                "https://www.xiaohongshu.com/shared?title={text}&description={text}&url={url}",
            ),
        ])
    }

    pub fn get(&self, id: &str) -> Option<&ShareTarget> {
        self.targets.iter().find(|t| t.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ShareTarget> {
        self.targets.iter()
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

impl Default for ShareTargetRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
