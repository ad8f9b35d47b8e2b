//! Submit-then-apply sequencing for reactions.
//!
//! The cache is only touched after the server confirms. There is no
//! optimistic update, and two quick clicks produce two submissions and,
//! if both succeed, two increments.

use std::sync::Arc;

use crate::notify::Notifier;
use crate::remote::{ActReactionRequest, RemoteClient, RemoteError};

use super::aggregate::ReactionAggregate;
use super::animation::TransientVisualState;
use super::cache::{CacheEntry, ReactionCache};
use super::error::ReactionError;
use super::symbol::ReactionSymbol;

/// Drives reactions for one reaction-button instance.
pub struct ReactionCoordinator {
    remote: Arc<dyn RemoteClient>,
    cache: ReactionCache,
    notifier: Arc<dyn Notifier>,
    animation: TransientVisualState,
    success_message: String,
}

impl ReactionCoordinator {
    pub fn new(
        remote: Arc<dyn RemoteClient>,
        cache: ReactionCache,
        notifier: Arc<dyn Notifier>,
        animation: TransientVisualState,
        success_message: impl Into<String>,
    ) -> Self {
        Self {
            remote,
            cache,
            notifier,
            animation,
            success_message: success_message.into(),
        }
    }

    /// Validate and submit a reaction given as raw text.
    ///
    /// Unknown symbols and empty ids fail before the remote is called.
    pub async fn submit_reaction(
        &self,
        photo_id: &str,
        symbol: &str,
    ) -> Result<Option<u64>, ReactionError> {
        let symbol: ReactionSymbol = symbol.parse()?;
        self.submit(photo_id, symbol).await
    }

    /// Submit `symbol` for `photo_id`; on success bump the cached count and
    /// notify.
    ///
    /// Returns the new cached count, or `None` if counts for the photo were
    /// never loaded. A remote failure is returned unchanged and leaves the
    /// cache untouched.
    pub async fn submit(
        &self,
        photo_id: &str,
        symbol: ReactionSymbol,
    ) -> Result<Option<u64>, ReactionError> {
        if photo_id.is_empty() {
            return Err(ReactionError::EmptyPhotoId);
        }

        let request = ActReactionRequest {
            ref_key: photo_id.to_string(),
            reaction: symbol,
        };

        if let Err(e) = self.remote.act_reaction(&request).await {
            tracing::warn!(photo_id, reaction = %symbol, error = %e, "Reaction rejected");
            return Err(e.into());
        }

        let count = self.cache.mutate_on_success(photo_id, symbol);
        tracing::debug!(photo_id, reaction = %symbol, ?count, "Reaction recorded");
        self.notifier.success(&self.success_message);
        Ok(count)
    }

    /// Click handler: highlight the symbol, then submit.
    pub async fn handle_click(
        &self,
        photo_id: &str,
        symbol: ReactionSymbol,
    ) -> Result<Option<u64>, ReactionError> {
        self.trigger_animation(symbol);
        self.submit(photo_id, symbol).await
    }

    /// Highlight `symbol`, cancelling any pending expiry.
    pub fn trigger_animation(&self, symbol: ReactionSymbol) {
        self.animation.trigger(symbol);
    }

    /// Arm the highlight expiry once the pop-in animation has finished.
    pub fn animation_complete(&self) {
        self.animation.animation_complete();
    }

    pub fn active_animation(&self) -> Option<ReactionSymbol> {
        self.animation.active()
    }

    pub fn animation(&self) -> &TransientVisualState {
        &self.animation
    }

    /// Counts for `photo_id`, fetched on first use.
    pub async fn counts(&self, photo_id: &str) -> Result<ReactionAggregate, RemoteError> {
        self.cache.load(photo_id, self.remote.as_ref()).await
    }

    /// Cached counts without touching the network.
    pub fn cached(&self, photo_id: &str) -> CacheEntry {
        self.cache.read(photo_id)
    }
}
