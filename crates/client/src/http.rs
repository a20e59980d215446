//! HTTP implementation of the answering-service contract.

use crate::client::{AnswerClient, AnswerPayload, AskRequest, HealthStatus};
use faq_core::{AppError, AppResult, DEFAULT_BASE_URL};
use serde::Deserialize;

/// Message used when a non-2xx reply carries no usable `detail`.
pub const SERVICE_ERROR_FALLBACK: &str = "Request failed";

/// Error body returned by the service on non-2xx replies.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<serde_json::Value>,
}

/// Answering-service client over `reqwest`.
pub struct HttpAnswerClient {
    /// Base URL of the service
    base_url: String,

    /// HTTP client
    client: reqwest::Client,
}

impl HttpAnswerClient {
    /// Create a client for the default local service.
    ///
    /// Default URL: http://127.0.0.1:8001
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a client with a custom base URL.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim().trim_end_matches('/'), path)
    }
}

impl Default for HttpAnswerClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Pull the display message out of a non-2xx body.
///
/// Only a non-blank string `detail` is used; anything else falls back.
fn service_error_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.detail)
        .and_then(|detail| match detail {
            serde_json::Value::String(s) if !s.trim().is_empty() => Some(s),
            _ => None,
        })
        .unwrap_or_else(|| SERVICE_ERROR_FALLBACK.to_string())
}

#[async_trait::async_trait]
impl AnswerClient for HttpAnswerClient {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn ask(&self, request: &AskRequest) -> AppResult<AnswerPayload> {
        let url = self.url("ask");
        tracing::info!("Sending question to {}", url);
        tracing::debug!("Request: {:?}", request);

        // `.json` sets Content-Type: application/json
        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| AppError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = service_error_message(&body);
            tracing::warn!("Answering service error ({}): {}", status, message);
            return Err(AppError::Service {
                status: status.as_u16(),
                message,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| AppError::Transport(e.to_string()))?;

        let payload: AnswerPayload = serde_json::from_str(&body).map_err(|e| {
            tracing::debug!("Unparseable answer body: {}", body);
            AppError::Transport(e.to_string())
        })?;

        tracing::info!(
            "Received answer ({} citations, factual: {})",
            payload.citations.len(),
            payload.is_factual
        );
        tracing::debug!("Response: {:?}", payload);

        Ok(payload)
    }

    async fn health(&self) -> AppResult<HealthStatus> {
        let url = self.url("health");
        tracing::debug!("Checking service health at {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Service {
                status: status.as_u16(),
                message: service_error_message(&body),
            });
        }

        response
            .json::<HealthStatus>()
            .await
            .map_err(|e| AppError::Transport(e.to_string()))
    }
}
