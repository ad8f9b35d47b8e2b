//! Errors for reaction submission.

use thiserror::Error;

use crate::remote::RemoteError;

use super::symbol::UnknownSymbol;

/// Errors that can occur while submitting a reaction.
#[derive(Debug, Error)]
pub enum ReactionError {
    /// Photo identifier was empty.
    #[error("Photo identifier must not be empty")]
    EmptyPhotoId,

    /// Symbol is not one of the supported reactions.
    #[error(transparent)]
    UnknownSymbol(#[from] UnknownSymbol),

    /// The reactions API rejected or never received the submission.
    #[error("Reaction submission failed: {0}")]
    Remote(#[from] RemoteError),
}

impl ReactionError {
    /// Whether the request was rejected locally, before any network call.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::EmptyPhotoId | Self::UnknownSymbol(_))
    }
}
