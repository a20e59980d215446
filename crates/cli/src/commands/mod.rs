//! Command handlers for the FAQ assistant CLI.

pub mod ask;
pub mod examples;
pub mod health;

// Re-export command types for convenience
pub use ask::AskCommand;
pub use examples::ExamplesCommand;
pub use health::HealthCommand;
