//! Embeddable iframe snippet.

use crate::photo::Photo;

/// Fixed sandbox policy for embedded photos.
pub const EMBED_SANDBOX: &str = "allow-scripts allow-same-origin allow-popups";

/// Height used when the photo's dimensions are unknown.
const FALLBACK_HEIGHT: &str = "500px";

/// Build the iframe snippet for `photo` served from `base_url`.
///
/// A trailing slash on `base_url` is dropped.
pub fn embed_snippet(photo: &Photo, base_url: &str) -> String {
    let base_url = base_url.trim_end_matches('/');
    let style = if photo.has_dimensions() {
        format!(
            "width: 100%; aspect-ratio: {} / {}",
            photo.width, photo.height
        )
    } else {
        format!("width: 100%; height: {FALLBACK_HEIGHT}")
    };

    format!(
        "<iframe\n  src=\"{base_url}/share/iframe?id={id}\"\n  style=\"{style}\"\n  allowTransparency\n  sandbox=\"{EMBED_SANDBOX}\"\n/>",
        id = photo.id,
    )
}
