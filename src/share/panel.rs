//! Share menu: session state plus the actions it offers.

use crate::mvi::Reducer;
use crate::photo::Photo;

use super::composer::ShareComposer;
use super::error::ShareError;
use super::fallback::ShareResolution;
use super::session::{ShareSessionIntent, ShareSessionReducer, ShareSessionState};
use super::target::ShareTargetRegistry;

/// Non-social actions in the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareAction {
    NativeShare,
    CopyLink,
    CopyEmbed,
}

pub struct SharePanel {
    composer: ShareComposer,
    targets: ShareTargetRegistry,
    base_url: String,
    state: ShareSessionState,
}

impl SharePanel {
    pub fn new(
        composer: ShareComposer,
        targets: ShareTargetRegistry,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            composer,
            targets,
            base_url: base_url.into(),
            state: ShareSessionState::default(),
        }
    }

    pub fn state(&self) -> ShareSessionState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    pub fn dispatch(&mut self, intent: ShareSessionIntent) {
        self.state = ShareSessionReducer::reduce(self.state, intent);
    }

    pub fn open(&mut self) {
        self.dispatch(ShareSessionIntent::Open);
    }

    pub fn dismiss(&mut self) {
        self.dispatch(ShareSessionIntent::Dismiss);
    }

    /// Actions available on this platform, in menu order.
    pub fn actions(&self) -> Vec<ShareAction> {
        let mut actions = Vec::with_capacity(3);
        if self.composer.native_available() {
            actions.push(ShareAction::NativeShare);
        }
        actions.push(ShareAction::CopyLink);
        if self.composer.embed_enabled() {
            actions.push(ShareAction::CopyEmbed);
        }
        actions
    }

    fn settle<T>(&mut self, result: &Result<T, ShareError>) {
        let intent = match result {
            Ok(_) => ShareSessionIntent::ActionSucceeded,
            Err(_) => ShareSessionIntent::ActionFailed,
        };
        self.dispatch(intent);
    }

    pub async fn native_share(
        &mut self,
        photo: &Photo,
        preview_url: Option<&str>,
    ) -> Result<ShareResolution, ShareError> {
        let result = self.composer.compose_native_share(photo, preview_url).await;
        self.settle(&result);
        result
    }

    pub async fn copy_link(&mut self) -> Result<String, ShareError> {
        let result = self.composer.copy_page_link().await;
        self.settle(&result);
        result
    }

    pub async fn copy_embed(&mut self, photo: &Photo) -> Result<String, ShareError> {
        let result = self
            .composer
            .compose_embed_snippet(photo, &self.base_url)
            .await;
        self.settle(&result);
        result
    }

    /// Open a social share popup.
    ///
    /// The menu closes even when the popup could not be opened.
    pub fn social_share(&mut self, target_id: &str, photo: &Photo) -> Result<String, ShareError> {
        let target = self
            .targets
            .get(target_id)
            .ok_or_else(|| ShareError::UnknownTarget(target_id.to_string()))?;

        let result = self.composer.compose_social_link(target, photo);
        if let Err(e) = &result {
            tracing::warn!(target_id, error = %e, "Social share popup failed");
        }
        self.dispatch(ShareSessionIntent::ActionSucceeded);
        result
    }
}
