//! Answering-service abstraction and wire types.

use faq_core::AppResult;
use serde::{Deserialize, Serialize};

/// Body of `POST /ask`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskRequest {
    /// The trimmed question text
    pub query: String,
}

impl AskRequest {
    /// Create a request for `query`, trimming surrounding whitespace.
    pub fn new(query: impl AsRef<str>) -> Self {
        Self {
            query: query.as_ref().trim().to_string(),
        }
    }
}

/// A successful answer from the service.
///
/// Stored verbatim: `confidence` and `method` are not displayed but
/// survive a serialize/deserialize round trip unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerPayload {
    /// Natural-language response
    pub answer: String,

    /// Source URLs, unordered and possibly duplicated
    pub citations: Vec<String>,

    /// Whether the question was answerable as a fact lookup
    pub is_factual: bool,

    /// Service-side confidence score
    pub confidence: f64,

    /// How the answer was produced (e.g., "rag", "lookup")
    pub method: String,

    /// Freshness note for the cited sources
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
}

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    pub fn is_ok(&self) -> bool {
        self.status.eq_ignore_ascii_case("ok")
    }
}

/// Trait for reaching the answering service.
///
/// Failures use two error variants: `AppError::Service` for a non-2xx
/// reply and `AppError::Transport` when no usable reply was obtained.
#[async_trait::async_trait]
pub trait AnswerClient: Send + Sync {
    /// Base URL this client talks to, for logging.
    fn base_url(&self) -> &str;

    /// Ask one question. Exactly one network call per invocation, no retries.
    async fn ask(&self, request: &AskRequest) -> AppResult<AnswerPayload>;

    /// Check that the service is up.
    async fn health(&self) -> AppResult<HealthStatus>;
}
