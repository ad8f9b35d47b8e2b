//! Platform capabilities the share and reaction layers depend on.
//!
//! Each capability is a trait so the coordination logic can be driven by a
//! browser bridge, the CLI adapters here, or test doubles.

mod clipboard;
mod fetch;
mod native_share;
mod opener;

pub use clipboard::{ArboardClipboard, Clipboard, ClipboardError, CLIPBOARD_OUTLIVES_PROCESS};
pub use fetch::{FetchError, FetchedImage, HttpImageFetcher, ImageFetcher, FALLBACK_MIME};
pub use native_share::{
    NativeShare, NativeShareError, ShareFile, SharePayload, UnsupportedNativeShare,
};
pub use opener::{LinkOpener, OpenError, PageLocation, PrintOpener, StaticLocation, WindowFeatures};
