//! Gateway error types.

use forge_core::errors::ErrorKind;
use thiserror::Error;

/// Errors surfaced by a single generative-language call.
///
/// The gateway never recovers from any of these locally.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// No API key is configured; no request was sent.
    #[error("no API key configured for the generative-language provider")]
    MissingApiKey,

    #[error("request to the provider timed out")]
    NetworkTimeout,

    #[error("no connection to the provider: {0}")]
    NoConnection(String),

    /// Transport failure that is neither a timeout nor a connect error.
    #[error("transport error: {0}")]
    Unknown(String),

    /// 2xx with an empty body.
    #[error("provider returned an empty response body")]
    EmptyResponse,

    /// 2xx whose body does not contain `candidates[0].content.parts[0].text`.
    #[error("invalid provider response: {0}")]
    InvalidResponse(String),

    /// The outbound payload could not be encoded.
    #[error("failed to encode request: {0}")]
    Serialization(String),

    #[error("rate limited by the provider")]
    RateLimited,

    #[error("provider quota exceeded: {0}")]
    QuotaExceeded(String),

    #[error("content blocked by the provider: {reason}")]
    ContentBlocked {
        /// Reason as stated by the provider.
        reason: String,
    },

    #[error("provider rejected the credentials ({status})")]
    AuthenticationFailed {
        /// 401 or 403.
        status: u16,
    },

    #[error("request too large: {0}")]
    RequestTooLarge(String),

    #[error("provider unavailable ({status})")]
    ServiceUnavailable {
        /// 5xx status code.
        status: u16,
    },

    /// Any other non-success status.
    #[error("HTTP error ({status}): {message}")]
    Http {
        status: u16,
        /// Provider message, or the canonical reason phrase.
        message: String,
    },
}

impl GatewayError {
    /// Map a transport-level failure.
    pub(crate) fn from_transport(err: &reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::NetworkTimeout
        } else if err.is_connect() {
            Self::NoConnection(err.to_string())
        } else {
            Self::Unknown(err.to_string())
        }
    }

    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingApiKey => ErrorKind::MissingConfiguration,
            Self::NetworkTimeout | Self::NoConnection(_) | Self::Unknown(_) => ErrorKind::Network,
            Self::EmptyResponse | Self::InvalidResponse(_) => ErrorKind::ProtocolViolation,
            Self::Serialization(_) => ErrorKind::SerializationFailure,
            Self::RateLimited => ErrorKind::RateLimit,
            Self::QuotaExceeded(_) => ErrorKind::QuotaExceeded,
            Self::ContentBlocked { .. } => ErrorKind::ContentPolicyBlock,
            Self::AuthenticationFailed { .. } => ErrorKind::AuthenticationFailure,
            Self::RequestTooLarge(_) => ErrorKind::RequestTooLarge,
            Self::ServiceUnavailable { .. } => ErrorKind::ServerUnavailable,
            Self::Http { .. } => ErrorKind::UnclassifiedHttpError,
        }
    }

    /// Human-readable message for end users.
    #[must_use]
    pub const fn user_message(&self) -> &'static str {
        self.kind().user_message()
    }
}
