//! Reaction and share coordination for a photo gallery.
//!
//! Reactions are submitted to the gallery API and applied to a local count
//! cache once confirmed. Sharing resolves through the platform share sheet,
//! social deep links, the clipboard, or an embeddable iframe snippet.

pub mod cli;
pub mod config;
pub mod logging;
pub mod mvi;
pub mod notify;
pub mod photo;
pub mod platform;
pub mod reaction;
pub mod remote;
pub mod share;
