//! Share actions for one photo.

use std::sync::Arc;

use crate::config::{Config, Messages};
use crate::notify::Notifier;
use crate::photo::Photo;
use crate::platform::{
    Clipboard, ImageFetcher, LinkOpener, NativeShare, PageLocation, WindowFeatures,
};

use super::embed::embed_snippet;
use super::error::ShareError;
use super::fallback::{FallbackChain, ShareRequest, ShareResolution};
use super::target::ShareTarget;
use super::template::{render, TemplateValues};

/// Platform collaborators a composer talks to.
#[derive(Clone)]
pub struct ShareEnvironment {
    pub native: Arc<dyn NativeShare>,
    pub fetcher: Arc<dyn ImageFetcher>,
    pub clipboard: Arc<dyn Clipboard>,
    pub opener: Arc<dyn LinkOpener>,
    pub location: Arc<dyn PageLocation>,
    pub notifier: Arc<dyn Notifier>,
}

pub struct ShareComposer {
    env: ShareEnvironment,
    chain: FallbackChain,
    messages: Messages,
    window: WindowFeatures,
    embed_enabled: bool,
}

impl ShareComposer {
    pub fn new(env: ShareEnvironment, messages: Messages, window: WindowFeatures) -> Self {
        let chain = FallbackChain::native(
            Arc::clone(&env.native),
            Arc::clone(&env.fetcher),
            Arc::clone(&env.clipboard),
        );
        Self {
            env,
            chain,
            messages,
            window,
            embed_enabled: true,
        }
    }

    pub fn from_config(env: ShareEnvironment, config: &Config) -> Self {
        let window = WindowFeatures {
            width: config.share.popup_width,
            height: config.share.popup_height,
        };
        Self::new(env, config.messages.clone(), window).with_embed(config.share.embed_enabled)
    }

    pub fn with_embed(mut self, enabled: bool) -> Self {
        self.embed_enabled = enabled;
        self
    }

    /// Whether the platform has a share sheet at all.
    pub fn native_available(&self) -> bool {
        self.env.native.is_available()
    }

    pub fn embed_enabled(&self) -> bool {
        self.embed_enabled
    }

    fn display_title<'a>(&'a self, photo: &'a Photo) -> &'a str {
        photo.title().unwrap_or(&self.messages.default_title)
    }

    /// Share through the platform sheet, falling back to copying the page
    /// link.
    ///
    /// `preview_url` overrides the photo's own preview; the original is
    /// used when neither is set. A completed native share emits no
    /// notification; the fallback emits exactly one.
    pub async fn compose_native_share(
        &self,
        photo: &Photo,
        preview_url: Option<&str>,
    ) -> Result<ShareResolution, ShareError> {
        let title = self.display_title(photo).to_string();
        let image_url = preview_url
            .or(photo.preview_url.as_deref())
            .unwrap_or(&photo.original_url)
            .to_string();

        let request = ShareRequest {
            text: self.messages.share_text_for(&title),
            title,
            url: self.env.location.href(),
            image_url,
            file_name: format!("{}.jpg", photo.title().unwrap_or("photo")),
        };

        match self.chain.run(&request).await {
            Ok(ShareResolution::LinkCopied) => {
                self.env.notifier.success(&self.messages.link_copied);
                Ok(ShareResolution::LinkCopied)
            }
            Ok(resolution) => Ok(resolution),
            Err(e) => {
                self.env.notifier.error(&self.messages.copy_failed);
                Err(e)
            }
        }
    }

    /// Fill `target`'s template for `photo`.
    pub fn social_link(&self, target: &ShareTarget, photo: &Photo) -> String {
        let title = self.display_title(photo);
        let values = TemplateValues::encode(
            &self.env.location.href(),
            title,
            &self.messages.share_text_for(title),
        );
        render(&target.template, &values)
    }

    /// Open `target`'s share page for `photo` in a popup. Returns the URL.
    pub fn compose_social_link(
        &self,
        target: &ShareTarget,
        photo: &Photo,
    ) -> Result<String, ShareError> {
        let url = self.social_link(target, photo);
        tracing::debug!(target_id = %target.id, url = %url, "Opening social share");
        self.env.opener.open(&url, self.window)?;
        Ok(url)
    }

    /// Copy the iframe snippet for `photo` to the clipboard.
    pub async fn compose_embed_snippet(
        &self,
        photo: &Photo,
        base_url: &str,
    ) -> Result<String, ShareError> {
        if !self.embed_enabled {
            return Err(ShareError::EmbedDisabled);
        }

        let snippet = embed_snippet(photo, base_url);
        self.copy(&snippet, &self.messages.embed_copied).await?;
        Ok(snippet)
    }

    /// Copy the current page URL to the clipboard.
    pub async fn copy_page_link(&self) -> Result<String, ShareError> {
        let url = self.env.location.href();
        self.copy(&url, &self.messages.link_copied).await?;
        Ok(url)
    }

    async fn copy(&self, text: &str, success_message: &str) -> Result<(), ShareError> {
        match self.env.clipboard.write_text(text).await {
            Ok(()) => {
                self.env.notifier.success(success_message);
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "Clipboard write failed");
                self.env.notifier.error(&self.messages.copy_failed);
                Err(e.into())
            }
        }
    }
}
