//! Health command handler.

use anyhow::bail;
use clap::Args;
use faq_client::create_client;
use faq_core::config::AppConfig;
use std::process::ExitCode;

/// Check that the answering service is reachable
#[derive(Args, Debug)]
pub struct HealthCommand {}

impl HealthCommand {
    pub async fn execute(&self, config: &AppConfig) -> anyhow::Result<ExitCode> {
        tracing::info!("Executing health command");

        let client = create_client(config)?;
        let health = client.health().await?;

        println!("{}: {}", client.base_url(), health.status);

        if !health.is_ok() {
            bail!("Answering service reports status {:?}", health.status);
        }

        Ok(ExitCode::SUCCESS)
    }
}
