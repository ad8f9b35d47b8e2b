//! Reactions API seam.
//!
//! The coordinator only needs "did the server accept this reaction" and
//! "what are the current counts". [`HttpRemoteClient`] talks to the gallery
//! API; tests substitute their own implementation.

mod http;

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

use crate::reaction::{ReactionAggregate, ReactionSymbol};

pub use http::HttpRemoteClient;

/// Errors returned by a [`RemoteClient`].
#[derive(Debug, Error)]
pub enum RemoteError {
    /// The server could not be reached.
    #[error("Reactions API unreachable: {source}")]
    Unreachable {
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status.
    #[error("Reactions API rejected request: {status} - {message}")]
    Rejected { status: u16, message: String },

    /// The response body could not be decoded.
    #[error("Malformed reactions response: {0}")]
    Malformed(String),
}

/// Body of a reaction submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActReactionRequest {
    /// Photo identifier.
    pub ref_key: String,
    pub reaction: ReactionSymbol,
}

/// Remote side of reactions.
#[async_trait]
pub trait RemoteClient: Send + Sync {
    /// Record one reaction. Success means the server counted it.
    async fn act_reaction(&self, request: &ActReactionRequest) -> Result<(), RemoteError>;

    /// Fetch the current counts for a photo.
    async fn fetch_reactions(&self, photo_id: &str) -> Result<ReactionAggregate, RemoteError>;
}
