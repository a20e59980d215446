//! Examples command handler.

use clap::Args;
use faq_assistant::EXAMPLE_QUESTIONS;
use std::process::ExitCode;

/// List the example questions
#[derive(Args, Debug)]
pub struct ExamplesCommand {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl ExamplesCommand {
    pub fn execute(&self) -> anyhow::Result<ExitCode> {
        tracing::info!("Executing examples command");

        if self.json {
            println!("{}", serde_json::to_string_pretty(&EXAMPLE_QUESTIONS)?);
            return Ok(ExitCode::SUCCESS);
        }

        for (i, question) in EXAMPLE_QUESTIONS.iter().enumerate() {
            println!("{}. {}", i + 1, question);
        }

        Ok(ExitCode::SUCCESS)
    }
}
