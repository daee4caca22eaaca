//! Response classification for the `generateContent` endpoint.
//!
//! Centralizes status-code mapping and envelope extraction so the client
//! stays focused on request construction.

use reqwest::StatusCode;

use crate::error::GatewayError;
use crate::wire::{ErrorEnvelope, FeedbackEnvelope, GenerateResponse};

/// Map a non-success status and the provider's message to an error.
///
/// - **400**: `ContentBlocked` if the message mentions blocking,
///   `RequestTooLarge` if it mentions size, `QuotaExceeded` if it mentions
///   quota, else `Http`.
/// - **401 / 403**: `AuthenticationFailed`.
/// - **429**: `RateLimited`.
/// - **5xx**: `ServiceUnavailable`.
/// - **anything else**: `Http` with the provider message or the reason phrase.
#[must_use]
pub fn classify_status(status: u16, message: Option<&str>) -> GatewayError {
    let message = message.map(str::trim).filter(|m| !m.is_empty());
    match status {
        400 => {
            let text = message.unwrap_or_default().to_string();
            let lowered = text.to_lowercase();
            if lowered.contains("block") {
                GatewayError::ContentBlocked { reason: text }
            } else if lowered.contains("size")
                || lowered.contains("too large")
                || lowered.contains("too long")
            {
                GatewayError::RequestTooLarge(text)
            } else if lowered.contains("quota") {
                GatewayError::QuotaExceeded(text)
            } else {
                GatewayError::Http {
                    status,
                    message: message.map_or_else(|| reason_phrase(status), str::to_string),
                }
            }
        }
        401 | 403 => GatewayError::AuthenticationFailed { status },
        429 => GatewayError::RateLimited,
        500..=599 => GatewayError::ServiceUnavailable { status },
        _ => GatewayError::Http {
            status,
            message: message.map_or_else(|| reason_phrase(status), str::to_string),
        },
    }
}

/// Pull the provider's human message out of an error body.
///
/// Prefers `error.message`, then `promptFeedback.blockReason` (prefixed so
/// that it classifies as a block), then the raw body text.
#[must_use]
pub fn provider_message(body: &str) -> Option<String> {
    if let Ok(envelope) = serde_json::from_str::<ErrorEnvelope>(body) {
        if let Some(message) = envelope.error.message {
            return Some(message);
        }
    }
    if let Ok(feedback) = serde_json::from_str::<FeedbackEnvelope>(body) {
        if let Some(reason) = feedback.prompt_feedback.block_reason {
            return Some(format!("prompt blocked: {reason}"));
        }
    }
    let trimmed = body.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Extract `candidates[0].content.parts[0].text` from a success body.
///
/// # Errors
///
/// - [`GatewayError::EmptyResponse`] when the body is empty.
/// - [`GatewayError::InvalidResponse`] when the body is not JSON or the path
///   is absent.
/// - [`GatewayError::ContentBlocked`] when there are no candidates and the
///   provider reports a block reason.
pub fn extract_text(body: &str) -> Result<String, GatewayError> {
    if body.trim().is_empty() {
        return Err(GatewayError::EmptyResponse);
    }

    let response: GenerateResponse = serde_json::from_str(body)
        .map_err(|e| GatewayError::InvalidResponse(format!("malformed response body: {e}")))?;

    let Some(candidate) = response.candidates.and_then(|c| c.into_iter().next()) else {
        if let Some(reason) = response.prompt_feedback.and_then(|f| f.block_reason) {
            return Err(GatewayError::ContentBlocked { reason });
        }
        return Err(GatewayError::InvalidResponse(
            "response has no candidates".to_string(),
        ));
    };

    candidate
        .content
        .and_then(|content| content.parts)
        .and_then(|parts| parts.into_iter().next())
        .and_then(|part| part.text)
        .ok_or_else(|| {
            GatewayError::InvalidResponse("first candidate has no text part".to_string())
        })
}

fn reason_phrase(status: u16) -> String {
    StatusCode::from_u16(status)
        .ok()
        .and_then(|s| s.canonical_reason())
        .unwrap_or("Unknown status")
        .to_string()
}
