//! Error taxonomy for IdeaForge.
//!
//! Crate-level errors (`GatewayError`, `ParseError`, `CoachError`) are defined
//! in their own crates. Each maps onto an [`ErrorKind`] so that hosts can
//! branch on a closed set and show a human-readable message without parsing
//! `Display` output.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable classification of every failure the pipeline can surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// No API key is configured.
    MissingConfiguration,
    /// Timeout, no connectivity, or another transport failure.
    Network,
    /// Response body is empty or does not match the expected envelope.
    ProtocolViolation,
    RateLimit,
    QuotaExceeded,
    /// The provider refused the prompt or the output on policy grounds.
    ContentPolicyBlock,
    AuthenticationFailure,
    RequestTooLarge,
    /// 5xx from the provider.
    ServerUnavailable,
    /// Outbound encode failure or strict-JSON decode failure.
    SerializationFailure,
    /// Any other HTTP status, passed through.
    UnclassifiedHttpError,
}

impl ErrorKind {
    /// SCREAMING_SNAKE code, stable across releases.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::MissingConfiguration => "MISSING_CONFIGURATION",
            Self::Network => "NETWORK",
            Self::ProtocolViolation => "PROTOCOL_VIOLATION",
            Self::RateLimit => "RATE_LIMIT",
            Self::QuotaExceeded => "QUOTA_EXCEEDED",
            Self::ContentPolicyBlock => "CONTENT_POLICY_BLOCK",
            Self::AuthenticationFailure => "AUTHENTICATION_FAILURE",
            Self::RequestTooLarge => "REQUEST_TOO_LARGE",
            Self::ServerUnavailable => "SERVER_UNAVAILABLE",
            Self::SerializationFailure => "SERIALIZATION_FAILURE",
            Self::UnclassifiedHttpError => "HTTP_ERROR",
        }
    }

    /// Message suitable for showing to an end user.
    #[must_use]
    pub const fn user_message(self) -> &'static str {
        match self {
            Self::MissingConfiguration => {
                "The AI service is not configured. Add an API key and try again."
            }
            Self::Network => "Couldn't reach the AI service. Check your connection and try again.",
            Self::ProtocolViolation => {
                "The AI service sent an unexpected response. Please try again."
            }
            Self::RateLimit => "Too many requests. Please wait a moment and try again.",
            Self::QuotaExceeded => "The AI usage quota has been reached. Please try again later.",
            Self::ContentPolicyBlock => {
                "This request was blocked by the AI content policy. Try rephrasing it."
            }
            Self::AuthenticationFailure => "The AI service rejected the API key.",
            Self::RequestTooLarge => "This request is too long. Try shortening it.",
            Self::ServerUnavailable => {
                "The AI service is temporarily unavailable. Please try again shortly."
            }
            Self::SerializationFailure => {
                "The AI response couldn't be understood. Please try again."
            }
            Self::UnclassifiedHttpError => "Something went wrong talking to the AI service.",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
