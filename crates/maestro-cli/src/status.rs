//! `maestro status` — show configuration and provider status.

use anyhow::Result;
use colored::Colorize;

use maestro_core::config::{get_config_path, load_config, Config};
use maestro_providers::registry::{find_by_name, PROVIDERS};

/// Run the status command.
pub fn run() -> Result<()> {
    let config = load_config(None);
    let config_path = get_config_path();

    println!();
    println!("{}", "🎼 Maestro Status".cyan().bold());
    println!();

    println!(
        "  {:<18} {} {}",
        "Config:".bold(),
        config_path.display(),
        if config_path.exists() {
            "✓".green().to_string()
        } else {
            "(not found, using defaults)".red().to_string()
        }
    );

    let defaults = &config.agents.defaults;
    println!("  {:<18} {}", "Provider:".bold(), defaults.provider);
    println!("  {:<18} {}", "Model:".bold(), effective_model(&config));
    println!(
        "  {:<18} {} | max_tokens: {} | max_tool_iterations: {}",
        "Parameters:".bold(),
        format!("temp: {}", defaults.temperature).dimmed(),
        format!("{}", defaults.max_tokens).dimmed(),
        format!("{}", defaults.max_tool_iterations).dimmed(),
    );

    println!();
    println!("  {}", "Providers:".bold());
    for spec in PROVIDERS {
        let configured = config
            .providers
            .get_by_name(spec.name)
            .is_some_and(|p| p.is_configured());
        let status = if configured {
            format!("{} (key set)", "✓".green())
        } else {
            format!("{} (set {})", "· not configured".dimmed(), spec.env_key)
        };
        let marker = if spec.name == defaults.provider { "▸" } else { " " };
        println!("   {marker} {:<18} {}", spec.display_name, status);
        println!("       {}", spec.models.join(", ").dimmed());
    }

    println!();
    Ok(())
}

/// The model the orchestrator will use.
fn effective_model(config: &Config) -> String {
    let defaults = &config.agents.defaults;
    match defaults.model_override() {
        Some(model) => model.to_string(),
        None => match find_by_name(&defaults.provider) {
            Some(spec) => format!("{} (provider default)", spec.default_model),
            None => format!("(unknown provider '{}')", defaults.provider),
        },
    }
}
