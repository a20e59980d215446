//! Ask command handler.
//!
//! Runs one exchange through the query controller and prints the result.

use anyhow::{bail, Context};
use clap::Args;
use faq_assistant::{example, render, QueryController, MIN_QUESTION_CHARS};
use faq_client::create_client;
use faq_core::config::AppConfig;
use std::path::PathBuf;
use std::process::ExitCode;

/// Output of a finished exchange.
struct Report {
    text: String,
    failed: bool,
}

/// Ask a factual question
#[derive(Args, Debug)]
pub struct AskCommand {
    /// The question to ask
    pub question: Option<String>,

    /// Read the question from a file
    #[arg(short, long, conflicts_with = "question")]
    pub file: Option<PathBuf>,

    /// Ask example question N (see `faq examples`)
    #[arg(short, long, conflicts_with_all = ["question", "file"])]
    pub example: Option<usize>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl AskCommand {
    /// Execute the ask command.
    pub async fn execute(&self, config: &AppConfig) -> anyhow::Result<ExitCode> {
        tracing::info!("Executing ask command");
        tracing::debug!("Ask command options: {:?}", self);

        let mut controller = QueryController::new();

        if let Some(index) = self.example {
            let text = example(index)
                .with_context(|| format!("No example question number {}", index))?;
            controller.select_example(text);
        } else {
            controller.set_question(self.read_question()?);
        }

        if !controller.is_submit_allowed() {
            bail!(
                "Question must be at least {} characters long",
                MIN_QUESTION_CHARS
            );
        }

        let client = create_client(config)?;
        controller.submit_pending(client.as_ref()).await;

        let report = self.report(&controller)?;
        println!("{}", report.text);

        // The rendered output already carries the error message
        Ok(if report.failed {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        })
    }

    /// Format the finished exchange as text or JSON.
    fn report(&self, controller: &QueryController) -> anyhow::Result<Report> {
        let text = if self.json {
            let output = serde_json::json!({
                "heading": controller.heading(),
                "status": controller.status().as_str(),
                "answer": controller.answer(),
                "citations": controller.ranked_citations(),
                "error": controller.error_message(),
            });
            serde_json::to_string_pretty(&output)?
        } else {
            render(controller)
        };

        Ok(Report {
            text,
            failed: controller.error_message().is_some(),
        })
    }

    /// Get the question text from the argument or a file.
    fn read_question(&self) -> anyhow::Result<String> {
        if let Some(ref question) = self.question {
            return Ok(question.clone());
        }

        match self.file {
            Some(ref path) => std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read question file {:?}", path)),
            None => bail!("No question provided"),
        }
    }
}
