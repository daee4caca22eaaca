//! # forge-gateway
//!
//! HTTP client for the generative-language provider (Gemini `generateContent`).
//!
//! One call, one POST: no retries, no caching, no request-content logging.
//! Every failure is surfaced as a typed [`GatewayError`]; recovery is the
//! caller's decision.
//!
//! The [`Gateway`] trait is the seam the pipeline depends on, so tests and
//! hosts can substitute their own implementation for [`GeminiClient`].

mod error;
mod http;
mod params;
mod wire;

pub use error::GatewayError;
pub use http::{classify_status, extract_text, provider_message};
pub use params::GenerationParams;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use forge_config::GeminiConfig;
use reqwest::header::CONTENT_TYPE;

use crate::wire::GenerateRequest;

// ── Trait ──────────────────────────────────────────────────────────

/// A text-in, text-out generative-language backend.
#[async_trait]
pub trait Gateway: Send + Sync {
    /// Send `prompt` and return the raw text of the first candidate.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] for configuration, transport, status, and
    /// envelope failures.
    async fn generate(
        &self,
        prompt: &str,
        params: Option<&GenerationParams>,
    ) -> Result<String, GatewayError>;
}

#[async_trait]
impl<G: Gateway + ?Sized> Gateway for Arc<G> {
    async fn generate(
        &self,
        prompt: &str,
        params: Option<&GenerationParams>,
    ) -> Result<String, GatewayError> {
        (**self).generate(prompt, params).await
    }
}

// ── Client ─────────────────────────────────────────────────────────

/// Gateway backed by the Gemini REST API.
pub struct GeminiClient {
    http: reqwest::Client,
    config: GeminiConfig,
}

impl GeminiClient {
    /// Build a client with the timeouts from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Unknown`] if the underlying `reqwest::Client`
    /// fails to build.
    pub fn from_config(config: &GeminiConfig) -> Result<Self, GatewayError> {
        let http = reqwest::Client::builder()
            .user_agent("ideaforge/0.1")
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| GatewayError::Unknown(e.to_string()))?;

        Ok(Self {
            http,
            config: config.clone(),
        })
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.config.model
    }

    fn endpoint(&self) -> String {
        format!(
            "{}?key={}",
            self.config.generate_url(),
            urlencoding::encode(self.config.api_key.trim())
        )
    }
}

#[async_trait]
impl Gateway for GeminiClient {
    async fn generate(
        &self,
        prompt: &str,
        params: Option<&GenerationParams>,
    ) -> Result<String, GatewayError> {
        if !self.config.is_configured() {
            return Err(GatewayError::MissingApiKey);
        }

        let body = serde_json::to_vec(&GenerateRequest::new(prompt, params))
            .map_err(|e| GatewayError::Serialization(e.to_string()))?;

        tracing::debug!(
            model = %self.config.model,
            request_bytes = body.len(),
            "sending generateContent request"
        );

        let resp = self
            .http
            .post(self.endpoint())
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| GatewayError::from_transport(&e))?;

        let status = resp.status();
        let text = resp
            .text()
            .await
            .map_err(|e| GatewayError::from_transport(&e))?;

        tracing::debug!(
            status = status.as_u16(),
            response_bytes = text.len(),
            "received generateContent response"
        );

        if !status.is_success() {
            return Err(classify_status(
                status.as_u16(),
                provider_message(&text).as_deref(),
            ));
        }

        extract_text(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(api_key: &str) -> GeminiConfig {
        GeminiConfig {
            api_key: api_key.to_string(),
            base_url: "https://example.invalid/v1beta".to_string(),
            model: "gemini-test".to_string(),
            ..GeminiConfig::default()
        }
    }

    #[test]
    fn endpoint_carries_encoded_key() {
        let client = GeminiClient::from_config(&config("a b&c")).unwrap();
        assert_eq!(
            client.endpoint(),
            "https://example.invalid/v1beta/models/gemini-test:generateContent?key=a%20b%26c"
        );
        assert_eq!(client.model(), "gemini-test");
    }

    #[test]
    fn request_body_matches_wire_contract() {
        let params = GenerationParams::new(0.5, 10, 0.9, 256);
        let value = serde_json::to_value(GenerateRequest::new("hello", Some(&params))).unwrap();
        assert_eq!(value["contents"][0]["parts"][0]["text"], "hello");
        assert_eq!(value["generationConfig"]["topK"], 10);

        let bare = serde_json::to_value(GenerateRequest::new("hello", None)).unwrap();
        assert!(bare.get("generationConfig").is_none());
    }

    #[tokio::test]
    async fn missing_key_short_circuits() {
        let client = GeminiClient::from_config(&config("")).unwrap();
        let err = client.generate("hi", None).await.unwrap_err();
        assert!(matches!(err, GatewayError::MissingApiKey));
    }
}
