//! Generative-language provider (Gemini) configuration.

use serde::{Deserialize, Serialize};

fn default_base_url() -> String {
    String::from("https://generativelanguage.googleapis.com/v1beta")
}

fn default_model() -> String {
    String::from("gemini-1.5-flash")
}

/// Time allowed to establish the connection.
const fn default_connect_timeout_secs() -> u64 {
    30
}

/// Time allowed for the whole request, including the response transfer.
const fn default_request_timeout_secs() -> u64 {
    60
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeminiConfig {
    /// API key sent as the `key` query parameter. Empty means unconfigured.
    #[serde(default)]
    pub api_key: String,

    /// API root, without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Model name (e.g., `gemini-1.5-flash`).
    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,

    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_base_url(),
            model: default_model(),
            connect_timeout_secs: default_connect_timeout_secs(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl GeminiConfig {
    /// Check if an API key is present.
    pub fn is_configured(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    /// Full `generateContent` endpoint for the configured model, without the key.
    pub fn generate_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_not_configured() {
        let config = GeminiConfig::default();
        assert!(!config.is_configured());
        assert_eq!(config.connect_timeout_secs, 30);
        assert_eq!(config.request_timeout_secs, 60);
    }

    #[test]
    fn whitespace_key_is_not_configured() {
        let config = GeminiConfig {
            api_key: "   ".into(),
            ..GeminiConfig::default()
        };
        assert!(!config.is_configured());
    }

    #[test]
    fn generate_url_trims_trailing_slash() {
        let config = GeminiConfig {
            base_url: "http://localhost:8080/".into(),
            model: "gemini-test".into(),
            ..GeminiConfig::default()
        };
        assert_eq!(
            config.generate_url(),
            "http://localhost:8080/models/gemini-test:generateContent"
        );
    }
}
