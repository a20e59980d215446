//! Query lifecycle controller.
//!
//! One exchange runs `idle -> loading -> idle`, ending with either an
//! answer or an error message (never both). The network call is the only
//! suspension point, so the lifecycle is split around it:
//!
//! 1. [`QueryController::begin_submit`] validates, clears the previous
//!    result, enters `loading` and issues a token.
//! 2. The caller awaits [`AnswerClient::ask`] with the pending request.
//! 3. [`QueryController::complete`] commits the outcome only if no newer
//!    exchange has begun since; otherwise the outcome is dropped.
//!
//! [`QueryController::submit`] runs all three for the common single-call
//! case. Hosts that let a user submit again while a call is in flight
//! drive the halves themselves.

use faq_client::{AnswerClient, AnswerPayload, AskRequest};
use faq_core::{AppError, AppResult};

use crate::citations::rank;

/// Title shown unless the current answer is flagged non-factual.
pub const DEFAULT_HEADING: &str = "HDFC Mutual Fund Facts Assistant";

/// Title shown while the current answer has `is_factual == false`.
pub const NON_FACTUAL_HEADING: &str = "We only provide facts";

/// Minimum trimmed length, in characters, of a submittable question.
pub const MIN_QUESTION_CHARS: usize = 5;

/// Message used when a failure carries no text of its own.
pub const TRANSPORT_ERROR_FALLBACK: &str = "Something went wrong";

/// Whether `question` is long enough to submit once trimmed.
pub fn is_valid_question(question: &str) -> bool {
    question.trim().chars().count() >= MIN_QUESTION_CHARS
}

/// Request lifecycle status.
///
/// `Idle` is both the initial state and where every completed exchange
/// comes to rest, success or failure. `Error` is part of the status
/// vocabulary, but failures are reported through the error message while
/// the status returns to `Idle`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RequestStatus {
    #[default]
    Idle,
    Loading,
    Error,
}

impl RequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Error => "error",
        }
    }
}

impl std::fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifies one exchange. Later exchanges get larger tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExchangeToken(u64);

impl ExchangeToken {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// An exchange that has begun and awaits its network outcome.
#[derive(Debug, Clone)]
pub struct PendingExchange {
    token: ExchangeToken,
    request: AskRequest,
}

impl PendingExchange {
    pub fn token(&self) -> ExchangeToken {
        self.token
    }

    /// The request to send; its query is already trimmed.
    pub fn request(&self) -> &AskRequest {
        &self.request
    }
}

/// What happened to a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The question was too short; nothing changed and nothing was sent.
    Skipped,
    /// The outcome was written to controller state.
    Committed,
    /// A newer exchange began first; the outcome was discarded.
    Superseded,
}

/// Owns the state of the current question/answer exchange.
#[derive(Debug, Default)]
pub struct QueryController {
    /// Pending question text, as typed or picked from the examples
    question: String,

    answer: Option<AnswerPayload>,

    status: RequestStatus,

    error_message: Option<String>,

    /// Last token issued; only its exchange may commit
    latest_token: u64,
}

impl QueryController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    /// Replace the pending question text.
    pub fn set_question(&mut self, text: impl Into<String>) {
        self.question = text.into();
    }

    pub fn status(&self) -> RequestStatus {
        self.status
    }

    pub fn answer(&self) -> Option<&AnswerPayload> {
        self.answer.as_ref()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Page title for the current answer.
    pub fn heading(&self) -> &'static str {
        match &self.answer {
            Some(answer) if !answer.is_factual => NON_FACTUAL_HEADING,
            _ => DEFAULT_HEADING,
        }
    }

    /// Whether the pending question may be submitted right now.
    pub fn is_submit_allowed(&self) -> bool {
        is_valid_question(&self.question) && self.status != RequestStatus::Loading
    }

    /// Citations of the current answer, deduplicated and ordered for display.
    pub fn ranked_citations(&self) -> Vec<String> {
        self.answer
            .as_ref()
            .map(|answer| rank(&answer.citations))
            .unwrap_or_default()
    }

    /// Load an example question without submitting it.
    pub fn select_example(&mut self, text: impl Into<String>) {
        self.question = text.into();
        self.answer = None;
        self.error_message = None;
    }

    /// Start an exchange for `question`.
    ///
    /// Returns `None` without touching any state when the trimmed question
    /// is shorter than [`MIN_QUESTION_CHARS`]. Does not check for an
    /// exchange already in flight: the new one supersedes it.
    pub fn begin_submit(&mut self, question: &str) -> Option<PendingExchange> {
        if !is_valid_question(question) {
            tracing::debug!("Skipping submission of too-short question");
            return None;
        }

        self.error_message = None;
        self.answer = None;
        self.status = RequestStatus::Loading;
        self.latest_token += 1;

        let token = ExchangeToken(self.latest_token);
        tracing::debug!("Exchange {} started", token.value());

        Some(PendingExchange {
            token,
            request: AskRequest::new(question),
        })
    }

    /// Commit the outcome of `exchange` if it is still the latest one.
    pub fn complete(
        &mut self,
        exchange: PendingExchange,
        outcome: AppResult<AnswerPayload>,
    ) -> SubmitOutcome {
        if exchange.token.value() != self.latest_token {
            tracing::debug!(
                "Discarding outcome of exchange {} (latest is {})",
                exchange.token.value(),
                self.latest_token
            );
            return SubmitOutcome::Superseded;
        }

        match outcome {
            Ok(payload) => {
                tracing::debug!("Exchange {} answered", exchange.token.value());
                self.answer = Some(payload);
            }
            Err(err) => {
                tracing::debug!("Exchange {} failed: {}", exchange.token.value(), err);
                self.error_message = Some(display_message(&err));
            }
        }

        self.status = RequestStatus::Idle;
        SubmitOutcome::Committed
    }

    /// Run one whole exchange for `question` against `client`.
    pub async fn submit(&mut self, client: &dyn AnswerClient, question: &str) -> SubmitOutcome {
        let Some(exchange) = self.begin_submit(question) else {
            return SubmitOutcome::Skipped;
        };

        let outcome = client.ask(exchange.request()).await;
        self.complete(exchange, outcome)
    }

    /// Submit the pending question text.
    pub async fn submit_pending(&mut self, client: &dyn AnswerClient) -> SubmitOutcome {
        let question = self.question.clone();
        self.submit(client, &question).await
    }
}

/// User-facing text for a failed exchange.
fn display_message(err: &AppError) -> String {
    let message = err.to_string();
    if message.trim().is_empty() {
        TRANSPORT_ERROR_FALLBACK.to_string()
    } else {
        message
    }
}
