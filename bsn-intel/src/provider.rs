use anyhow::Context;
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde_json::Value;

use crate::config::IntelConfig;
use crate::request::{error_message, response_text, GenerateRequest};

/// A hosted text/vision model. Opaque, possibly slow, possibly failing.
///
/// `Ok(None)` means the model answered with no text.
#[async_trait(?Send)]
pub trait NarrativeProvider {
    async fn generate(&self, request: &GenerateRequest) -> anyhow::Result<Option<String>>;
}

/// Gemini over its public REST API.
pub struct GeminiProvider {
    client: Client,
    config: IntelConfig,
}

impl GeminiProvider {
    pub fn new(config: IntelConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &IntelConfig {
        &self.config
    }
}

#[async_trait(?Send)]
impl NarrativeProvider for GeminiProvider {
    async fn generate(&self, request: &GenerateRequest) -> anyhow::Result<Option<String>> {
        let key = self
            .config
            .api_key
            .as_deref()
            .context("no API key configured (set GEMINI_API_KEY)")?;
        let url = self.config.generate_url(&request.model);
        debug!("POST {url}");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", key)
            .json(&request.to_body())
            .send()
            .await
            .with_context(|| format!("request to {} failed", request.model))?;

        let status = response.status();
        let body: Value = response
            .json()
            .await
            .with_context(|| format!("unreadable response from {}", request.model))?;

        if !status.is_success() {
            anyhow::bail!(
                "{} returned {}: {}",
                request.model,
                status,
                error_message(&body).unwrap_or("no error message")
            );
        }
        Ok(response_text(&body))
    }
}
