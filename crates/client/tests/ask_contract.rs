//! Answering-service contract tests.
//!
//! These tests pin the HTTP shape of `POST /ask` and `GET /health`
//! against a mock server: request format, success parsing and the
//! mapping of failures onto `AppError::Service` / `AppError::Transport`.

use faq_client::{AnswerClient, AskRequest, HttpAnswerClient};
use faq_core::AppError;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn answer_body() -> serde_json::Value {
    json!({
        "answer": "The expense ratio of HDFC Flexi Cap Direct Plan is 0.75%.",
        "citations": ["https://www.hdfcfund.com/x", "https://groww.in/y"],
        "is_factual": true,
        "confidence": 0.9,
        "method": "lookup",
        "last_updated": "Last updated from sources: 2025-01-10"
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Request format
// ────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_ask_posts_trimmed_query_as_json() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/ask"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"query": "Exit load for HDFC Small Cap Fund?"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(answer_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpAnswerClient::with_base_url(server.uri());
    let result = client
        .ask(&AskRequest::new("   Exit load for HDFC Small Cap Fund?  "))
        .await;

    assert!(result.is_ok(), "Request should succeed: {:?}", result.err());
}

#[tokio::test]
async fn test_base_url_with_trailing_slash() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/ask"))
        .respond_with(ResponseTemplate::new(200).set_body_json(answer_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpAnswerClient::with_base_url(format!("{}/", server.uri()));
    assert!(client.ask(&AskRequest::new("What is a lock-in?")).await.is_ok());
}

// ────────────────────────────────────────────────────────────────────────────
// Success parsing
// ────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_success_payload_is_returned_verbatim() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/ask"))
        .respond_with(ResponseTemplate::new(200).set_body_json(answer_body()))
        .mount(&server)
        .await;

    let client = HttpAnswerClient::with_base_url(server.uri());
    let payload = client.ask(&AskRequest::new("expense ratio?")).await.unwrap();

    assert_eq!(serde_json::to_value(&payload).unwrap(), answer_body());
    // Citations are not reordered or deduplicated at this layer
    assert_eq!(payload.citations[0], "https://www.hdfcfund.com/x");
}

#[tokio::test]
async fn test_malformed_success_body_is_transport_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/ask"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = HttpAnswerClient::with_base_url(server.uri());
    let err = client.ask(&AskRequest::new("expense ratio?")).await.unwrap_err();

    assert!(matches!(err, AppError::Transport(_)), "got {:?}", err);
    assert!(!err.to_string().is_empty());
}

#[tokio::test]
async fn test_wrong_shape_success_body_is_transport_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/ask"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"answer": 42})))
        .mount(&server)
        .await;

    let client = HttpAnswerClient::with_base_url(server.uri());
    let err = client.ask(&AskRequest::new("expense ratio?")).await.unwrap_err();

    assert!(matches!(err, AppError::Transport(_)));
}

// ────────────────────────────────────────────────────────────────────────────
// Error mapping
// ────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_error_detail_becomes_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/ask"))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({"detail": "rate limited"})))
        .mount(&server)
        .await;

    let client = HttpAnswerClient::with_base_url(server.uri());
    let err = client.ask(&AskRequest::new("expense ratio?")).await.unwrap_err();

    assert_eq!(err.status(), Some(429));
    assert_eq!(err.to_string(), "rate limited");
}

#[tokio::test]
async fn test_unparseable_error_body_falls_back() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/ask"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&server)
        .await;

    let client = HttpAnswerClient::with_base_url(server.uri());
    let err = client.ask(&AskRequest::new("expense ratio?")).await.unwrap_err();

    assert_eq!(err.status(), Some(502));
    assert_eq!(err.to_string(), "Request failed");
}

#[tokio::test]
async fn test_error_body_without_detail_falls_back() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/ask"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"error": "boom"})))
        .mount(&server)
        .await;

    let client = HttpAnswerClient::with_base_url(server.uri());
    let err = client.ask(&AskRequest::new("expense ratio?")).await.unwrap_err();

    assert_eq!(err.to_string(), "Request failed");
}

#[tokio::test]
async fn test_unreachable_service_is_transport_error() {
    // Grab a free port, then close it so nothing is listening there
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let client = HttpAnswerClient::with_base_url(format!("http://127.0.0.1:{}", port));
    let err = client.ask(&AskRequest::new("expense ratio?")).await.unwrap_err();

    assert!(matches!(err, AppError::Transport(_)), "got {:?}", err);
}

#[tokio::test]
async fn test_failed_request_is_not_retried() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/ask"))
        .respond_with(ResponseTemplate::new(503).set_body_json(json!({"detail": "busy"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpAnswerClient::with_base_url(server.uri());
    assert!(client.ask(&AskRequest::new("expense ratio?")).await.is_err());
}

// ────────────────────────────────────────────────────────────────────────────
// Health
// ────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_health_ok() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpAnswerClient::with_base_url(server.uri());
    let health = client.health().await.unwrap();
    assert!(health.is_ok());
}

#[tokio::test]
async fn test_health_failure_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = HttpAnswerClient::with_base_url(server.uri());
    let err = client.health().await.unwrap_err();
    assert_eq!(err.status(), Some(503));
}
