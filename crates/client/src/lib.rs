//! Answering-service client for the FAQ assistant.
//!
//! The service is an external collaborator reached over a small JSON
//! contract: `POST /ask` answers a question, `GET /health` reports
//! liveness. This crate hides that contract behind the [`AnswerClient`]
//! trait so the query controller can be driven by any implementation.
//!
//! # Example
//! ```no_run
//! use faq_client::{AnswerClient, AskRequest, HttpAnswerClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = HttpAnswerClient::new();
//! let payload = client.ask(&AskRequest::new("Exit load for HDFC Small Cap Fund?")).await?;
//! println!("{}", payload.answer);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod factory;
pub mod http;

// Re-export main types
pub use client::{AnswerClient, AnswerPayload, AskRequest, HealthStatus};
pub use factory::create_client;
pub use http::{HttpAnswerClient, SERVICE_ERROR_FALLBACK};
