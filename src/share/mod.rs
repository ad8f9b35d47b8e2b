//! Multi-channel photo sharing.
//!
//! [`ShareComposer`] implements the individual actions; [`SharePanel`]
//! wraps them with the menu's open/closed state.

mod composer;
mod embed;
mod error;
mod fallback;
mod panel;
mod session;
mod target;
mod template;

pub use composer::{ShareComposer, ShareEnvironment};
pub use embed::{embed_snippet, EMBED_SANDBOX};
pub use error::ShareError;
pub use fallback::{
    FallbackChain, FileShare, MetadataShare, ShareRequest, ShareResolution, ShareStrategy,
    StrategyOutcome,
};
pub use panel::{ShareAction, SharePanel};
pub use session::{ShareSessionIntent, ShareSessionReducer, ShareSessionState};
pub use target::{ShareTarget, ShareTargetRegistry};
pub use template::{encode_uri_component, render, Placeholder, TemplateValues};
