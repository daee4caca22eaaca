//! Gemini provider contract tests.
//!
//! Verify the HTTP request format and the mapping of provider responses to
//! [`GatewayError`] against a local mock server.

use std::time::Duration;

use forge_config::GeminiConfig;
use forge_core::errors::ErrorKind;
use forge_gateway::{Gateway, GatewayError, GeminiClient, GenerationParams};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const MODEL_PATH: &str = "/models/gemini-test:generateContent";

fn client_for(server: &MockServer) -> GeminiClient {
    GeminiClient::from_config(&GeminiConfig {
        api_key: "test-key".to_string(),
        base_url: server.uri(),
        model: "gemini-test".to_string(),
        ..GeminiConfig::default()
    })
    .unwrap()
}

fn success_body(text: &str) -> serde_json::Value {
    json!({
        "candidates": [{
            "content": {"parts": [{"text": text}], "role": "model"},
            "finishReason": "STOP"
        }]
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Request format
// ────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn posts_prompt_with_key_and_generation_config() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .and(query_param("key", "test-key"))
        .and(header("content-type", "application/json"))
        .and(body_partial_json(json!({
            "contents": [{"parts": [{"text": "Hello"}]}],
            "generationConfig": {"topK": 20, "maxOutputTokens": 1024}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_body("Hi there")))
        .expect(1)
        .mount(&server)
        .await;

    let params = GenerationParams::new(0.5, 20, 0.8, 1024);
    let text = client_for(&server)
        .generate("Hello", Some(&params))
        .await
        .unwrap();

    assert_eq!(text, "Hi there");
}

#[tokio::test]
async fn missing_api_key_sends_nothing() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_body("unused")))
        .expect(0)
        .mount(&server)
        .await;

    let client = GeminiClient::from_config(&GeminiConfig {
        api_key: String::new(),
        base_url: server.uri(),
        model: "gemini-test".to_string(),
        ..GeminiConfig::default()
    })
    .unwrap();

    let err = client.generate("Hello", None).await.unwrap_err();
    assert!(matches!(err, GatewayError::MissingApiKey));
    assert_eq!(err.kind(), ErrorKind::MissingConfiguration);
}

// ────────────────────────────────────────────────────────────────────────────
// Status classification
// ────────────────────────────────────────────────────────────────────────────

async fn error_for(status: u16, body: serde_json::Value) -> GatewayError {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server).generate("Hello", None).await.unwrap_err()
}

#[tokio::test]
async fn status_429_is_rate_limited() {
    let err = error_for(
        429,
        json!({"error": {"message": "Resource exhausted", "status": "RESOURCE_EXHAUSTED"}}),
    )
    .await;
    assert!(matches!(err, GatewayError::RateLimited));
    assert_eq!(err.kind(), ErrorKind::RateLimit);
}

#[tokio::test]
async fn status_401_is_authentication_failure() {
    let err = error_for(401, json!({"error": {"message": "API key not valid"}})).await;
    assert!(matches!(err, GatewayError::AuthenticationFailed { status: 401 }));
}

#[tokio::test]
async fn status_500_is_service_unavailable() {
    let err = error_for(500, json!({"error": {"message": "internal"}})).await;
    assert_eq!(err.kind(), ErrorKind::ServerUnavailable);
}

#[tokio::test]
async fn status_400_blocked_is_content_policy() {
    let err = error_for(
        400,
        json!({"error": {"message": "The prompt was blocked by safety filters", "status": "INVALID_ARGUMENT"}}),
    )
    .await;
    assert!(matches!(
        err,
        GatewayError::ContentBlocked { ref reason } if reason.contains("blocked")
    ));
}

#[tokio::test]
async fn status_418_passes_message_through() {
    let err = error_for(418, json!({"error": {"message": "short and stout"}})).await;
    assert!(matches!(
        err,
        GatewayError::Http { status: 418, ref message } if message == "short and stout"
    ));
}

// ────────────────────────────────────────────────────────────────────────────
// Envelope handling
// ────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn status_200_with_empty_body_is_empty_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let err = client_for(&server).generate("Hello", None).await.unwrap_err();
    assert!(matches!(err, GatewayError::EmptyResponse));
    assert_eq!(err.kind(), ErrorKind::ProtocolViolation);
}

#[tokio::test]
async fn status_200_without_candidates_is_invalid() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"usageMetadata": {}})))
        .mount(&server)
        .await;

    let err = client_for(&server).generate("Hello", None).await.unwrap_err();
    assert!(matches!(err, GatewayError::InvalidResponse(_)));
}

#[tokio::test]
async fn status_200_with_block_reason_is_content_blocked() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"promptFeedback": {"blockReason": "SAFETY"}})),
        )
        .mount(&server)
        .await;

    let err = client_for(&server).generate("Hello", None).await.unwrap_err();
    assert!(matches!(
        err,
        GatewayError::ContentBlocked { ref reason } if reason == "SAFETY"
    ));
}

// ────────────────────────────────────────────────────────────────────────────
// Transport failures
// ────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn slow_response_is_network_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(success_body("late"))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let client = GeminiClient::from_config(&GeminiConfig {
        api_key: "test-key".to_string(),
        base_url: server.uri(),
        model: "gemini-test".to_string(),
        connect_timeout_secs: 1,
        request_timeout_secs: 1,
    })
    .unwrap();

    let err = client.generate("Hello", None).await.unwrap_err();
    assert!(matches!(err, GatewayError::NetworkTimeout));
    assert_eq!(err.kind(), ErrorKind::Network);
}

#[tokio::test]
async fn refused_connection_is_network_error() {
    let client = GeminiClient::from_config(&GeminiConfig {
        api_key: "test-key".to_string(),
        base_url: "http://127.0.0.1:1".to_string(),
        model: "gemini-test".to_string(),
        ..GeminiConfig::default()
    })
    .unwrap();

    let err = client.generate("Hello", None).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Network);
}
