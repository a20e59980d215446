//! Answering-service client factory.
//!
//! Builds the client the host should use from application configuration.

use crate::client::AnswerClient;
use crate::http::HttpAnswerClient;
use faq_core::{AppConfig, AppResult};
use std::sync::Arc;

/// Create an answering-service client from configuration.
///
/// # Errors
/// Returns `AppError::Config` if the configured base URL is unusable.
pub fn create_client(config: &AppConfig) -> AppResult<Arc<dyn AnswerClient>> {
    config.validate()?;

    tracing::debug!("Creating answering-service client for {}", config.base_url);
    Ok(Arc::new(HttpAnswerClient::with_base_url(config.base_url.trim())))
}
