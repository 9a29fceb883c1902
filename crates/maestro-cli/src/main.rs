//! Maestro CLI — entry point.
//!
//! # Commands
//!
//! - `maestro chat [-m MESSAGE] [--logs]` — talk to the orchestrator (single-shot or REPL)
//! - `maestro demo [--logs]` — run the built-in example prompts
//! - `maestro status` — show configuration and provider status
//! - `maestro onboard` — write a default config file

mod demo;
mod helpers;
mod onboard;
mod repl;
mod status;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use maestro_agent::{AgentSettings, Orchestrator};
use maestro_core::config::{load_config, Config};
use maestro_providers::{create_provider, LlmProvider};

// ─────────────────────────────────────────────
// CLI definition
// ─────────────────────────────────────────────

/// 🎼 Maestro — an orchestrator that delegates to expert agents
#[derive(Parser)]
#[command(name = "maestro", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Chat with the orchestrator (single-shot or interactive REPL)
    Chat {
        /// Single message (non-interactive). Omit for REPL mode.
        #[arg(short, long)]
        message: Option<String>,

        /// Log tool calls and delegations
        #[arg(long, default_value_t = false)]
        logs: bool,
    },

    /// Run a few example prompts end to end
    Demo {
        /// Log tool calls and delegations
        #[arg(long, default_value_t = false)]
        logs: bool,
    },

    /// Show configuration and provider status
    Status,

    /// Create the default configuration file
    Onboard,
}

// ─────────────────────────────────────────────
// Entrypoint
// ─────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Chat { message, logs } => {
            init_logging(logs);
            run_chat(message).await
        }
        Commands::Demo { logs } => {
            init_logging(logs);
            let orchestrator = build_orchestrator(&load_config(None))?;
            demo::run(&orchestrator).await;
            Ok(())
        }
        Commands::Status => status::run(),
        Commands::Onboard => onboard::run(),
    }
}

// ─────────────────────────────────────────────
// Chat command
// ─────────────────────────────────────────────

async fn run_chat(message: Option<String>) -> Result<()> {
    let config = load_config(None);
    let orchestrator = build_orchestrator(&config)?;

    match message {
        Some(msg) => {
            info!("processing single message");
            let response = orchestrator
                .process(&msg)
                .await
                .context("agent processing failed")?;
            helpers::print_response(&response);
        }
        None => repl::run(&orchestrator).await?,
    }

    Ok(())
}

/// Build the orchestrator and its experts from the loaded configuration.
pub fn build_orchestrator(config: &Config) -> Result<Orchestrator> {
    let defaults = &config.agents.defaults;

    let provider = create_provider(
        &defaults.provider,
        &config.providers.to_map(),
        defaults.model_override(),
    )
    .context("failed to create LLM provider")?;

    info!(
        provider = provider.display_name(),
        model = provider.default_model(),
        "provider ready"
    );

    let settings = AgentSettings::from_defaults(defaults);
    Orchestrator::new(Arc::new(provider), &settings).context("failed to build expert roster")
}

/// Initialize tracing/logging.
fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("maestro=debug,info")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
