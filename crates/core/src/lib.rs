//! FAQ Assistant Core Library
//!
//! This crate provides the foundational utilities shared by the client,
//! the assistant core and the CLI host:
//! - Error handling (`AppError`, `AppResult`)
//! - Logging infrastructure
//! - Configuration management

pub mod config;
pub mod error;
pub mod logging;

// Re-export commonly used types
pub use config::{AppConfig, DEFAULT_BASE_URL};
pub use error::{AppError, AppResult};
