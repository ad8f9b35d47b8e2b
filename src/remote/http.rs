use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::config::ApiConfig;
use crate::reaction::{ReactionAggregate, ReactionSymbol};
use crate::share::encode_uri_component;

use super::{ActReactionRequest, RemoteClient, RemoteError};

/// [`RemoteClient`] backed by the gallery HTTP API.
pub struct HttpRemoteClient {
    client: Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct AnalysisResponse {
    data: AnalysisData,
}

#[derive(Debug, Default, Deserialize)]
struct AnalysisData {
    #[serde(default)]
    reactions: HashMap<String, u64>,
}

impl HttpRemoteClient {
    pub fn new(config: &ApiConfig) -> Result<Self, RemoteError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(u64::from(config.timeout_seconds)))
            .build()
            .map_err(|source| RemoteError::Unreachable { source })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, RemoteError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read error body".to_string());

        tracing::warn!(status = %status, error = %message, "Reactions API error");

        Err(RemoteError::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl RemoteClient for HttpRemoteClient {
    async fn act_reaction(&self, request: &ActReactionRequest) -> Result<(), RemoteError> {
        let url = format!("{}/api/reactions", self.base_url);

        tracing::debug!(
            url = %url,
            photo_id = %request.ref_key,
            reaction = %request.reaction,
            "Submitting reaction"
        );

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|source| RemoteError::Unreachable { source })?;

        Self::check_status(response).await?;
        Ok(())
    }

    async fn fetch_reactions(&self, photo_id: &str) -> Result<ReactionAggregate, RemoteError> {
        let url = format!(
            "{}/api/analysis?refKey={}",
            self.base_url,
            encode_uri_component(photo_id)
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| RemoteError::Unreachable { source })?;

        let body: AnalysisResponse = Self::check_status(response)
            .await?
            .json()
            .await
            .map_err(|e| RemoteError::Malformed(e.to_string()))?;

        let aggregate = body
            .data
            .reactions
            .into_iter()
            .filter_map(|(key, count)| match key.parse::<ReactionSymbol>() {
                Ok(symbol) => Some((symbol, count)),
                Err(_) => {
                    tracing::debug!(symbol = %key, "Ignoring unsupported reaction symbol");
                    None
                }
            })
            .collect();

        Ok(aggregate)
    }
}
