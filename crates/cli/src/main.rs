//! FAQ Assistant CLI
//!
//! Main entry point for the `faq` command-line tool: asks the answering
//! service factual questions and prints citation-backed answers.

mod commands;

use clap::{Parser, Subcommand};
use commands::{AskCommand, ExamplesCommand, HealthCommand};
use faq_core::{config::AppConfig, logging};
use std::path::PathBuf;
use std::process::ExitCode;

/// FAQ Assistant CLI - citation-backed answers to factual fund questions
#[derive(Parser, Debug)]
#[command(name = "faq")]
#[command(about = "Citation-backed answers to factual mutual fund questions", long_about = None)]
#[command(version)]
struct Cli {
    /// Base URL of the answering service
    #[arg(short, long, global = true, env = "FAQ_BACKEND_URL")]
    base_url: Option<String>,

    /// Path to config file
    #[arg(short, long, global = true, env = "FAQ_CONFIG")]
    config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, env = "RUST_LOG")]
    log_level: Option<String>,

    /// Enable verbose output (sets log level to debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Ask a factual question
    Ask(AskCommand),

    /// List the example questions
    Examples(ExamplesCommand),

    /// Check that the answering service is reachable
    Health(HealthCommand),
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let config = AppConfig::load_from(cli.config.clone())?.with_overrides(
        cli.base_url,
        cli.config,
        cli.log_level,
        cli.verbose,
        cli.no_color,
    );

    logging::init_logging(config.log_level.as_deref(), config.no_color)?;

    tracing::info!("FAQ assistant CLI starting");
    tracing::debug!("Backend: {}", config.base_url);

    let command_name = match &cli.command {
        Commands::Ask(_) => "ask",
        Commands::Examples(_) => "examples",
        Commands::Health(_) => "health",
    };
    let _span = tracing::info_span!("command", name = command_name).entered();

    let result = match cli.command {
        Commands::Ask(cmd) => cmd.execute(&config).await,
        Commands::Examples(cmd) => cmd.execute(),
        Commands::Health(cmd) => cmd.execute(&config).await,
    };

    match &result {
        Ok(_) => tracing::info!("Command completed"),
        Err(e) => tracing::error!("Command failed: {:#}", e),
    }

    result
}
