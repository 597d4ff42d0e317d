//! Logistics assistant client: `POST /api/assistant/chat`.

use super::types::{AssistantChatRequest, AssistantChatResponse, AssistantSource, ClientError};
use crate::config::HttpTimeouts;

const API: &str = "Assistant";

pub struct AssistantClient {
    http: reqwest::Client,
    url: String,
}

impl AssistantClient {
    /// Build a client for the assistant chat endpoint at `url`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::HttpClientBuild`] if the HTTP client fails to build.
    pub fn new(url: impl Into<String>, timeouts: HttpTimeouts) -> Result<Self, ClientError> {
        Ok(Self { http: super::build_http(timeouts)?, url: url.into() })
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait::async_trait]
impl AssistantSource for AssistantClient {
    async fn post_chat(&self, order_id: &str, message: &str) -> Result<String, ClientError> {
        tracing::debug!(url = %self.url, %order_id, "posting assistant chat");

        let body = AssistantChatRequest { order_id: order_id.to_owned(), message: message.to_owned() };
        let response = self
            .http
            .post(&self.url)
            .json(&body)
            .send()
            .await
            .map_err(|e| ClientError::Network { api: API, message: e.to_string() })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::transport(API, status));
        }

        let text = response
            .text()
            .await
            .map_err(|e| ClientError::Network { api: API, message: e.to_string() })?;

        parse_reply(&text)
    }
}

fn parse_reply(json: &str) -> Result<String, ClientError> {
    let body: AssistantChatResponse =
        serde_json::from_str(json).map_err(|e| ClientError::Decode { api: API, message: e.to_string() })?;
    Ok(body.reply)
}

#[cfg(test)]
#[path = "assistant_test.rs"]
mod tests;
