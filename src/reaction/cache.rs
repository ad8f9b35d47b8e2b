//! Last-known reaction counts, keyed by photo.
//!
//! Entries are filled lazily from the reactions API and only ever mutated
//! after the server has confirmed a submission.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::remote::{RemoteClient, RemoteError};

use super::aggregate::ReactionAggregate;
use super::symbol::ReactionSymbol;

/// Result of reading the cache for one photo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheEntry {
    /// Counts were never fetched for this photo.
    Unloaded,
    Loaded(ReactionAggregate),
}

impl CacheEntry {
    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }

    /// The aggregate, if loaded.
    pub fn aggregate(&self) -> Option<&ReactionAggregate> {
        match self {
            Self::Loaded(aggregate) => Some(aggregate),
            Self::Unloaded => None,
        }
    }
}

/// Shared reaction cache. Cloning shares the same storage.
#[derive(Clone, Default)]
pub struct ReactionCache {
    inner: Arc<RwLock<HashMap<String, ReactionAggregate>>>,
}

impl ReactionCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current counts for `photo_id`, or [`CacheEntry::Unloaded`].
    pub fn read(&self, photo_id: &str) -> CacheEntry {
        match self.inner.read().get(photo_id) {
            Some(aggregate) => CacheEntry::Loaded(aggregate.clone()),
            None => CacheEntry::Unloaded,
        }
    }

    /// Store counts for `photo_id`, replacing whatever was there.
    pub fn insert(&self, photo_id: &str, aggregate: ReactionAggregate) {
        self.inner.write().insert(photo_id.to_string(), aggregate);
    }

    /// Return cached counts, fetching them on first use.
    ///
    /// A failed fetch leaves the entry unloaded so the next view retries.
    pub async fn load(
        &self,
        photo_id: &str,
        remote: &dyn RemoteClient,
    ) -> Result<ReactionAggregate, RemoteError> {
        if let CacheEntry::Loaded(aggregate) = self.read(photo_id) {
            return Ok(aggregate);
        }

        let fetched = remote.fetch_reactions(photo_id).await?;
        tracing::debug!(photo_id, total = fetched.total(), "Loaded reaction counts");

        // A submission confirmed while the fetch was in flight may have
        // populated the entry already; keep that one.
        let mut guard = self.inner.write();
        let entry = guard.entry(photo_id.to_string()).or_insert(fetched);
        Ok(entry.clone())
    }

    /// Apply one confirmed reaction.
    ///
    /// Every call increments; duplicate submissions are not collapsed.
    /// Returns the new count, or `None` when the photo is unloaded, in which
    /// case nothing changes and the next fetch carries the server's count.
    pub fn mutate_on_success(&self, photo_id: &str, symbol: ReactionSymbol) -> Option<u64> {
        let mut guard = self.inner.write();
        let aggregate = guard.get_mut(photo_id)?;
        Some(aggregate.increment(symbol))
    }

    /// Drop the entry for `photo_id`, e.g. when navigating away.
    pub fn discard(&self, photo_id: &str) {
        self.inner.write().remove(photo_id);
    }
}
