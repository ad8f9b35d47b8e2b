//! Short-lived "just reacted" highlight for a reaction button.
//!
//! Each button instance owns one [`TransientVisualState`]. The highlight is
//! set on click; once the pop-in animation finishes an expiry timer is armed
//! and the highlight clears when it fires. Arming always aborts the previous
//! timer, so at most one expiry is pending per instance.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::task::JoinHandle;

use super::symbol::ReactionSymbol;

/// How long the highlight lingers after the animation completes.
pub const DEFAULT_LINGER: Duration = Duration::from_millis(1000);

struct AnimationInner {
    active: Option<ReactionSymbol>,
    expiry: Option<JoinHandle<()>>,
    /// Bumped on every trigger and arm; a timer only clears the state it was
    /// armed for.
    generation: u64,
    expired: u64,
}

impl AnimationInner {
    fn cancel_expiry(&mut self) {
        if let Some(handle) = self.expiry.take() {
            handle.abort();
        }
    }
}

/// Transient highlight state with a single-owner expiry timer.
#[derive(Clone)]
pub struct TransientVisualState {
    inner: Arc<Mutex<AnimationInner>>,
    linger: Duration,
}

impl TransientVisualState {
    pub fn new(linger: Duration) -> Self {
        Self {
            inner: Arc::new(Mutex::new(AnimationInner {
                active: None,
                expiry: None,
                generation: 0,
                expired: 0,
            })),
            linger,
        }
    }

    /// Highlight `symbol`, cancelling any pending expiry.
    pub fn trigger(&self, symbol: ReactionSymbol) {
        let mut inner = self.inner.lock();
        inner.cancel_expiry();
        inner.generation += 1;
        inner.active = Some(symbol);
    }

    /// The animation finished; arm the expiry timer.
    ///
    /// Replaces any pending timer. Must be called from within a tokio runtime.
    pub fn animation_complete(&self) {
        let mut inner = self.inner.lock();
        inner.cancel_expiry();
        if inner.active.is_none() {
            return;
        }

        inner.generation += 1;
        let armed_for = inner.generation;
        let shared = Arc::clone(&self.inner);
        let linger = self.linger;

        inner.expiry = Some(tokio::spawn(async move {
            tokio::time::sleep(linger).await;
            let mut inner = shared.lock();
            if inner.generation != armed_for {
                return;
            }
            inner.active = None;
            inner.expiry = None;
            inner.expired += 1;
        }));
    }

    /// The symbol currently highlighted, if any.
    pub fn active(&self) -> Option<ReactionSymbol> {
        self.inner.lock().active
    }

    pub fn has_pending_expiry(&self) -> bool {
        self.inner
            .lock()
            .expiry
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Number of expiry timers that actually fired.
    pub fn expired_count(&self) -> u64 {
        self.inner.lock().expired
    }
}

impl Default for TransientVisualState {
    fn default() -> Self {
        Self::new(DEFAULT_LINGER)
    }
}
